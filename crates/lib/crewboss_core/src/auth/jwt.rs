//! JWT token issuance and verification.
//!
//! Tokens are the only session artifact the server holds no table for: a
//! valid token is self-contained proof of identity until it expires. There is
//! no server-side revocation.

use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};

use super::AuthError;
use crate::models::auth::{TokenClaims, UserPayload};

/// Identity token lifetime: 7 days.
const TOKEN_EXPIRY_DAYS: i64 = 7;

/// Issue a signed identity token (HS256, 7 day expiry) for a user profile.
pub fn issue_token(payload: &UserPayload, secret: &[u8]) -> Result<String, AuthError> {
    let now = Utc::now();
    let claims = TokenClaims {
        sub: payload.id.clone(),
        email: payload.email.clone(),
        name: payload.name.clone(),
        company: payload.company.clone(),
        exp: (now + Duration::days(TOKEN_EXPIRY_DAYS)).timestamp(),
        iat: now.timestamp(),
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret),
    )
    .map_err(|e| AuthError::Token(format!("jwt encode: {e}")))
}

/// Verify an identity token, returning the embedded profile on success.
///
/// Fails closed to `None` on malformed input, signature mismatch, or expiry.
pub fn verify_token(token: &str, secret: &[u8]) -> Option<UserPayload> {
    let key = DecodingKey::from_secret(secret);
    let mut validation = Validation::default();
    validation.validate_exp = true;
    decode::<TokenClaims>(token, &key, &validation)
        .ok()
        .map(|data| data.claims.into_payload())
}
