//! Authentication domain models.
//!
//! `UserRecord` is internal to the credential store; `UserPayload` is the
//! public identity shape that rides inside tokens and API responses.

use serde::{Deserialize, Serialize};

/// Public identity attributes carried by a token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPayload {
    pub id: String,
    pub email: String,
    pub name: String,
    pub company: String,
}

/// User record owned by the credential store.
///
/// An empty `password_hash` marks a record reconstructed from a token payload
/// after the in-memory store was lost; such records cannot authenticate a
/// password login but can receive API-key updates.
#[derive(Debug, Clone)]
pub struct UserRecord {
    pub id: String,
    /// Normalized (lowercased) email — the store's only lookup key.
    pub email: String,
    pub name: String,
    pub company: String,
    pub password_hash: String,
    pub jobtread_api_key: Option<String>,
    pub anthropic_api_key: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl UserRecord {
    /// Public profile slice of this record.
    pub fn payload(&self) -> UserPayload {
        UserPayload {
            id: self.id.clone(),
            email: self.email.clone(),
            name: self.name.clone(),
            company: self.company.clone(),
        }
    }

    /// Whether a non-empty JobTread API key is stored.
    ///
    /// Keys are never echoed back to clients, only this presence flag.
    pub fn has_jobtread_key(&self) -> bool {
        self.jobtread_api_key.as_deref().is_some_and(|k| !k.is_empty())
    }

    /// Whether a non-empty Anthropic API key is stored.
    pub fn has_anthropic_key(&self) -> bool {
        self.anthropic_api_key.as_deref().is_some_and(|k| !k.is_empty())
    }
}

/// JWT claims embedded in identity tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subject — user ID (standard JWT `sub` claim).
    pub sub: String,
    /// User email.
    pub email: String,
    /// Display name.
    pub name: String,
    /// Company name.
    pub company: String,
    /// Expiry (unix timestamp).
    pub exp: i64,
    /// Issued at (unix timestamp).
    pub iat: i64,
}

impl TokenClaims {
    /// Strip the timestamp claims, leaving the identity payload.
    pub fn into_payload(self) -> UserPayload {
        UserPayload {
            id: self.sub,
            email: self.email,
            name: self.name,
            company: self.company,
        }
    }
}
