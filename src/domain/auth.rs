//! Identity provider seam for delegated email/password authentication.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::error::AppError;

/// An authenticated account as reported by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser {
    pub id: String,
    pub email: String,
}

/// A provider-issued session.
///
/// `access_token` is opaque to this service; it is hashed before storage by
/// [`crate::application::services::AuthService`].
#[derive(Debug, Clone)]
pub struct Session {
    pub user: AuthUser,
    pub access_token: String,
    pub expires_at: DateTime<Utc>,
}

/// Email/password credentials forwarded to the identity provider.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Interface to the external identity provider.
///
/// Deliberately narrow so the concrete provider is swappable without touching
/// handler code. The provider owns the authentication protocol; this service
/// only forwards credentials and consumes the resulting session or error.
///
/// # Implementations
///
/// - [`crate::infrastructure::auth::MemoryAuthProvider`] - seeded in-memory provider
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Exchanges credentials for a session.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] on invalid credentials.
    async fn sign_in(&self, credentials: Credentials) -> Result<Session, AppError>;

    /// Registers a new account and signs it in.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the email is already registered.
    /// Returns [`AppError::Validation`] if the password is rejected.
    async fn sign_up(&self, credentials: Credentials) -> Result<Session, AppError>;

    /// Invalidates the session behind the given access token.
    ///
    /// Unknown tokens are ignored; sign-out is idempotent.
    async fn sign_out(&self, access_token: &str) -> Result<(), AppError>;

    /// Requests a password reset for the given email.
    ///
    /// Always succeeds for well-formed input, whether or not the account
    /// exists, so the endpoint does not leak registered addresses.
    async fn reset_password(&self, email: &str) -> Result<(), AppError>;

    /// Changes the password for the account behind an active session.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the token has no active session.
    /// Returns [`AppError::Validation`] if the new password is rejected.
    async fn update_password(&self, access_token: &str, new_password: &str)
    -> Result<(), AppError>;
}
