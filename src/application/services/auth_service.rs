//! Session management on top of the delegated identity provider.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use chrono::{DateTime, Duration, Utc};
use hmac::{Hmac, Mac};
use serde_json::json;
use sha2::Sha256;

use crate::domain::auth::{AuthProvider, AuthUser, Credentials};
use crate::error::AppError;
use crate::utils::token::generate_token;

type HmacSha256 = Hmac<Sha256>;

/// A session issued to a client after sign-in or sign-up.
///
/// `token` is handed to the client (Bearer header or cookie); only its
/// HMAC-SHA256 hash is retained server-side.
#[derive(Debug, Clone)]
pub struct IssuedSession {
    pub token: String,
    pub user: AuthUser,
    pub expires_at: DateTime<Utc>,
}

struct StoredSession {
    user: AuthUser,
    provider_token: String,
    expires_at: DateTime<Utc>,
}

/// Service bridging client sessions and the identity provider.
///
/// Credentials are forwarded to the [`AuthProvider`]; the provider-issued
/// access token never leaves the server. Clients receive an opaque session
/// token whose HMAC-SHA256 hash (keyed by `signing_secret`) indexes the
/// session table, so a leaked table does not let an attacker forge sessions.
pub struct AuthService<P: AuthProvider> {
    provider: Arc<P>,
    signing_secret: String,
    session_ttl: Duration,
    sessions: RwLock<HashMap<String, StoredSession>>,
}

impl<P: AuthProvider> AuthService<P> {
    /// Creates a new authentication service.
    ///
    /// # Arguments
    ///
    /// - `provider` - the external identity provider
    /// - `signing_secret` - HMAC key for session-token hashing
    /// - `session_ttl_seconds` - lifetime of issued sessions
    pub fn new(provider: Arc<P>, signing_secret: String, session_ttl_seconds: u64) -> Self {
        Self {
            provider,
            signing_secret,
            session_ttl: Duration::seconds(session_ttl_seconds as i64),
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// Hashes a raw session token with HMAC-SHA256 using the signing secret.
    fn hash_token(&self, token: &str) -> String {
        let mut mac = HmacSha256::new_from_slice(self.signing_secret.as_bytes())
            .expect("HMAC accepts any key length");
        mac.update(token.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }

    fn issue_session(&self, user: AuthUser, provider_token: String) -> IssuedSession {
        let token = generate_token();
        let expires_at = Utc::now() + self.session_ttl;

        let stored = StoredSession {
            user: user.clone(),
            provider_token,
            expires_at,
        };
        self.sessions
            .write()
            .expect("session lock poisoned")
            .insert(self.hash_token(&token), stored);

        IssuedSession {
            token,
            user,
            expires_at,
        }
    }

    /// Signs a user in with email/password credentials.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the provider rejects the
    /// credentials.
    pub async fn sign_in(&self, credentials: Credentials) -> Result<IssuedSession, AppError> {
        let session = self.provider.sign_in(credentials).await?;
        Ok(self.issue_session(session.user, session.access_token))
    }

    /// Registers a new account and signs it in.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the email is already registered.
    /// Returns [`AppError::Validation`] if the provider rejects the password.
    pub async fn sign_up(&self, credentials: Credentials) -> Result<IssuedSession, AppError> {
        let session = self.provider.sign_up(credentials).await?;
        Ok(self.issue_session(session.user, session.access_token))
    }

    /// Signs out the session behind the given token.
    ///
    /// Idempotent: unknown tokens succeed without contacting the provider.
    pub async fn sign_out(&self, token: &str) -> Result<(), AppError> {
        let hash = self.hash_token(token);

        let removed = self
            .sessions
            .write()
            .expect("session lock poisoned")
            .remove(&hash);

        if let Some(session) = removed {
            self.provider.sign_out(&session.provider_token).await?;
        }

        Ok(())
    }

    /// Requests a password reset email for the given address.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the email is empty.
    pub async fn reset_password(&self, email: &str) -> Result<(), AppError> {
        if email.trim().is_empty() {
            return Err(AppError::bad_request("Email must not be empty", json!({})));
        }
        self.provider.reset_password(email).await
    }

    /// Changes the password for the account behind an active session.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the token has no active session.
    /// Returns [`AppError::Validation`] if the provider rejects the password.
    pub async fn update_password(&self, token: &str, new_password: &str) -> Result<(), AppError> {
        let provider_token = self.resolve(token)?.1;
        self.provider
            .update_password(&provider_token, new_password)
            .await
    }

    /// Validates a session token and returns the associated user.
    ///
    /// Expired sessions are evicted on access.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the token is unknown or expired.
    pub fn authenticate(&self, token: &str) -> Result<AuthUser, AppError> {
        self.resolve(token).map(|(user, _)| user)
    }

    /// Number of live sessions, for health reporting.
    pub fn session_count(&self) -> usize {
        self.sessions.read().expect("session lock poisoned").len()
    }

    fn resolve(&self, token: &str) -> Result<(AuthUser, String), AppError> {
        let hash = self.hash_token(token);

        {
            let sessions = self.sessions.read().expect("session lock poisoned");
            if let Some(session) = sessions.get(&hash) {
                if Utc::now() < session.expires_at {
                    return Ok((session.user.clone(), session.provider_token.clone()));
                }
            } else {
                return Err(AppError::unauthorized(
                    "Unauthorized",
                    json!({ "reason": "Invalid session token" }),
                ));
            }
        }

        // Known but past expiry: evict and reject.
        self.sessions
            .write()
            .expect("session lock poisoned")
            .remove(&hash);
        Err(AppError::unauthorized(
            "Unauthorized",
            json!({ "reason": "Session expired" }),
        ))
    }
}
