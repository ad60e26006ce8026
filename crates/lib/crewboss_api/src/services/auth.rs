//! Authentication service — the only point where the credential store, the
//! token service, and session reconciliation compose.

use tracing::info;

use crewboss_core::auth::store::CredentialStore;
use crewboss_core::auth::{jwt, password};
use crewboss_core::models::auth::{UserPayload, UserRecord};

use crate::error::{AppError, AppResult};
use crate::models::{
    LoginResponse, LoginUser, RegisterResponse, UpdateKeysResponse, VerifyResponse,
};

/// Recreate a missing backing record from a still-valid token payload.
///
/// The store is non-persistent; after a process restart a token can be valid
/// while its record is gone. Every token-authenticated operation reconciles
/// before consulting the store, so callers never observe the loss.
pub fn reconcile(store: &CredentialStore, payload: &UserPayload) -> UserRecord {
    store.ensure(payload)
}

/// Register a new account and issue a token.
pub fn register(
    store: &CredentialStore,
    jwt_secret: &[u8],
    email: &str,
    pass: &str,
    name: &str,
    company: &str,
) -> AppResult<RegisterResponse> {
    if email.is_empty() || pass.is_empty() || name.is_empty() || company.is_empty() {
        return Err(AppError::Validation("All fields are required".into()));
    }

    let record = store.create(email, pass, name, company)?;
    let user = record.payload();
    let token = jwt::issue_token(&user, jwt_secret)?;
    info!(email = %user.email, "account registered");

    Ok(RegisterResponse { token, user })
}

/// Authenticate with email + password and issue a token.
///
/// Requires a pre-existing record with a password: login never auto-creates,
/// and a reconciled record with no password hash cannot authenticate.
pub fn login(
    store: &CredentialStore,
    jwt_secret: &[u8],
    email: &str,
    pass: &str,
) -> AppResult<LoginResponse> {
    if email.is_empty() || pass.is_empty() {
        return Err(AppError::Validation("Email and password are required".into()));
    }

    let record = store.find_by_email(email).ok_or_else(|| {
        AppError::Unauthorized("Account not found. Please create an account first.".into())
    })?;

    if record.password_hash.is_empty() {
        // Reconstructed from a token; the original credentials are gone.
        return Err(AppError::Unauthorized(
            "Session expired. Please create a new account.".into(),
        ));
    }

    if !password::verify_password(pass, &record.password_hash)? {
        return Err(AppError::Unauthorized("Invalid password".into()));
    }

    let user = record.payload();
    let token = jwt::issue_token(&user, jwt_secret)?;

    Ok(LoginResponse {
        token,
        user: LoginUser {
            id: user.id,
            email: user.email,
            name: user.name,
            company: user.company,
            has_jobtread_key: record.has_jobtread_key(),
            has_anthropic_key: record.has_anthropic_key(),
        },
    })
}

/// Verify a token and reconcile its backing record.
pub fn verify(
    store: &CredentialStore,
    jwt_secret: &[u8],
    token: &str,
) -> AppResult<VerifyResponse> {
    let payload = jwt::verify_token(token, jwt_secret)
        .ok_or_else(|| AppError::Unauthorized("Invalid or expired token".into()))?;
    reconcile(store, &payload);
    Ok(VerifyResponse { user: payload })
}

/// Update stored API keys for the token's account.
pub fn update_keys(
    store: &CredentialStore,
    jwt_secret: &[u8],
    token: &str,
    jobtread_api_key: Option<String>,
    anthropic_api_key: Option<String>,
) -> AppResult<UpdateKeysResponse> {
    let payload = jwt::verify_token(token, jwt_secret)
        .ok_or_else(|| AppError::Unauthorized("Unauthorized".into()))?;

    reconcile(store, &payload);

    // Defensive: reconciliation just ensured the record exists.
    let record = store
        .update_api_keys(&payload.email, jobtread_api_key, anthropic_api_key)
        .ok_or_else(|| AppError::NotFound("User not found".into()))?;

    Ok(UpdateKeysResponse {
        success: true,
        has_jobtread_key: record.has_jobtread_key(),
        has_anthropic_key: record.has_anthropic_key(),
    })
}
