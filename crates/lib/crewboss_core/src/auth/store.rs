//! In-memory credential store.
//!
//! The sole owner of user records, keyed by normalized (lowercased) email.
//! Deliberately non-persistent: lifecycle equals process uptime, and a lost
//! record is rebuilt from a still-valid token via [`CredentialStore::ensure`].
//! All mutation goes through the map's entry API so read-modify-write on a
//! single email is serialized against other writers of that key.

use chrono::Utc;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use uuid::Uuid;

use super::{AuthError, password};
use crate::models::auth::{UserPayload, UserRecord};

/// In-memory user record store.
pub struct CredentialStore {
    users: DashMap<String, UserRecord>,
}

impl CredentialStore {
    pub fn new() -> Self {
        Self {
            users: DashMap::new(),
        }
    }

    /// Normalize an email for use as a lookup key.
    fn normalize(email: &str) -> String {
        email.trim().to_lowercase()
    }

    /// Case-insensitive lookup by email.
    pub fn find_by_email(&self, email: &str) -> Option<UserRecord> {
        self.users.get(&Self::normalize(email)).map(|r| r.clone())
    }

    /// Create a user record with a hashed password.
    ///
    /// An existing record with an empty password hash (reconstructed from a
    /// token after the store was lost) is upgraded in place rather than
    /// treated as a duplicate, keeping its id and creation time. A record
    /// that already has a password fails with [`AuthError::DuplicateAccount`].
    pub fn create(
        &self,
        email: &str,
        password: &str,
        name: &str,
        company: &str,
    ) -> Result<UserRecord, AuthError> {
        let key = Self::normalize(email);
        // Hash outside the entry lock; bcrypt takes ~100ms.
        let password_hash = password::hash_password(password)?;
        match self.users.entry(key.clone()) {
            Entry::Occupied(mut entry) => {
                let record = entry.get_mut();
                if !record.password_hash.is_empty() {
                    return Err(AuthError::DuplicateAccount);
                }
                record.name = name.to_string();
                record.company = company.to_string();
                record.password_hash = password_hash;
                Ok(record.clone())
            }
            Entry::Vacant(entry) => {
                let record = UserRecord {
                    id: Uuid::new_v4().to_string(),
                    email: key,
                    name: name.to_string(),
                    company: company.to_string(),
                    password_hash,
                    jobtread_api_key: None,
                    anthropic_api_key: None,
                    created_at: Utc::now(),
                };
                Ok(entry.insert(record).clone())
            }
        }
    }

    /// Overwrite stored API keys per field.
    ///
    /// A provided value (including an explicit empty string) overwrites the
    /// stored field; an omitted value leaves it untouched. Returns `None`
    /// when no record exists for the email.
    pub fn update_api_keys(
        &self,
        email: &str,
        jobtread_api_key: Option<String>,
        anthropic_api_key: Option<String>,
    ) -> Option<UserRecord> {
        let mut record = self.users.get_mut(&Self::normalize(email))?;
        if let Some(key) = jobtread_api_key {
            record.jobtread_api_key = Some(key);
        }
        if let Some(key) = anthropic_api_key {
            record.anthropic_api_key = Some(key);
        }
        Some(record.clone())
    }

    /// Idempotent upsert from a token payload.
    ///
    /// Returns the existing record unchanged when present; otherwise
    /// synthesizes one with an empty password hash. This is the sole
    /// mechanism for surviving loss of in-memory state.
    pub fn ensure(&self, payload: &UserPayload) -> UserRecord {
        let key = Self::normalize(&payload.email);
        self.users
            .entry(key.clone())
            .or_insert_with(|| UserRecord {
                id: payload.id.clone(),
                email: key,
                name: payload.name.clone(),
                company: payload.company.clone(),
                password_hash: String::new(),
                jobtread_api_key: None,
                anthropic_api_key: None,
                created_at: Utc::now(),
            })
            .clone()
    }
}

impl Default for CredentialStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(email: &str) -> UserPayload {
        UserPayload {
            id: "user-1".into(),
            email: email.into(),
            name: "Nick".into(),
            company: "Better Boss".into(),
        }
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let store = CredentialStore::new();
        store
            .create("Nick@Better-Boss.AI", "pw123456", "Nick", "Better Boss")
            .unwrap();
        let a = store.find_by_email("nick@better-boss.ai").unwrap();
        let b = store.find_by_email("NICK@BETTER-BOSS.AI").unwrap();
        assert_eq!(a.id, b.id);
        assert_eq!(a.email, "nick@better-boss.ai");
    }

    #[test]
    fn duplicate_registration_rejected() {
        let store = CredentialStore::new();
        store
            .create("a@b.com", "pw123456", "A", "Co")
            .unwrap();
        let err = store.create("A@B.com", "other-pw", "A", "Co").unwrap_err();
        assert!(matches!(err, AuthError::DuplicateAccount));
    }

    #[test]
    fn reconciled_record_can_be_re_registered() {
        let store = CredentialStore::new();
        let ghost = store.ensure(&payload("a@b.com"));
        assert!(ghost.password_hash.is_empty());

        // Re-registration upgrades the ghost in place instead of conflicting.
        let upgraded = store.create("a@b.com", "pw123456", "Nick", "Better Boss").unwrap();
        assert_eq!(upgraded.id, ghost.id);
        assert!(!upgraded.password_hash.is_empty());
    }

    #[test]
    fn ensure_is_idempotent() {
        let store = CredentialStore::new();
        let created = store
            .create("a@b.com", "pw123456", "Nick", "Better Boss")
            .unwrap();
        let ensured = store.ensure(&payload("a@b.com"));
        // Existing record returned unchanged, password intact.
        assert_eq!(ensured.id, created.id);
        assert_eq!(ensured.password_hash, created.password_hash);
    }

    #[test]
    fn api_key_updates_are_per_field() {
        let store = CredentialStore::new();
        store
            .create("a@b.com", "pw123456", "Nick", "Better Boss")
            .unwrap();

        let r = store
            .update_api_keys("a@b.com", Some("jt-key".into()), None)
            .unwrap();
        assert!(r.has_jobtread_key());
        assert!(!r.has_anthropic_key());

        let r = store
            .update_api_keys("a@b.com", None, Some("sk-ant".into()))
            .unwrap();
        assert!(r.has_jobtread_key());
        assert!(r.has_anthropic_key());
        assert_eq!(r.jobtread_api_key.as_deref(), Some("jt-key"));
    }

    #[test]
    fn explicit_empty_string_clears_a_key() {
        let store = CredentialStore::new();
        store
            .create("a@b.com", "pw123456", "Nick", "Better Boss")
            .unwrap();
        store
            .update_api_keys("a@b.com", Some("jt-key".into()), None)
            .unwrap();
        let r = store
            .update_api_keys("a@b.com", Some(String::new()), None)
            .unwrap();
        assert!(!r.has_jobtread_key());
    }

    #[test]
    fn update_on_missing_record_returns_none() {
        let store = CredentialStore::new();
        assert!(store.update_api_keys("nobody@b.com", None, None).is_none());
    }
}
