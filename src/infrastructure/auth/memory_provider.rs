//! In-memory identity provider.
//!
//! Stands in for a hosted identity service in demo deployments and tests.
//! Passwords are stored as SHA-256 digests; access tokens are random and
//! expire with the account session table on process exit.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use serde_json::json;
use sha2::{Digest, Sha256};

use crate::domain::auth::{AuthProvider, AuthUser, Credentials, Session};
use crate::error::AppError;
use crate::utils::token::generate_token;

/// Minimum accepted password length, matching common hosted-provider defaults.
const MIN_PASSWORD_LENGTH: usize = 8;

/// Provider-side session lifetime.
const ACCESS_TOKEN_TTL_HOURS: i64 = 24;

struct Account {
    id: String,
    password_digest: String,
}

struct Inner {
    accounts: HashMap<String, Account>,
    active_tokens: HashMap<String, String>,
    next_user_id: u64,
}

/// [`AuthProvider`] backed by in-process account and session tables.
pub struct MemoryAuthProvider {
    inner: RwLock<Inner>,
}

fn digest(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}

impl MemoryAuthProvider {
    /// Creates a provider with no registered accounts.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                accounts: HashMap::new(),
                active_tokens: HashMap::new(),
                next_user_id: 1,
            }),
        }
    }

    /// Creates a provider seeded with a single demo account.
    pub fn with_account(email: &str, password: &str) -> Self {
        let provider = Self::new();
        {
            let mut inner = provider.inner.write().expect("auth provider lock poisoned");
            inner.accounts.insert(
                email.to_string(),
                Account {
                    id: "user-1".to_string(),
                    password_digest: digest(password),
                },
            );
            inner.next_user_id = 2;
        }
        provider
    }

    fn open_session(inner: &mut Inner, email: &str) -> Session {
        let account = inner.accounts.get(email).expect("account exists");
        let user = AuthUser {
            id: account.id.clone(),
            email: email.to_string(),
        };

        let access_token = generate_token();
        inner
            .active_tokens
            .insert(access_token.clone(), email.to_string());

        Session {
            user,
            access_token,
            expires_at: Utc::now() + Duration::hours(ACCESS_TOKEN_TTL_HOURS),
        }
    }
}

impl Default for MemoryAuthProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AuthProvider for MemoryAuthProvider {
    async fn sign_in(&self, credentials: Credentials) -> Result<Session, AppError> {
        let mut inner = self.inner.write().expect("auth provider lock poisoned");

        let valid = inner
            .accounts
            .get(&credentials.email)
            .is_some_and(|account| account.password_digest == digest(&credentials.password));

        if !valid {
            return Err(AppError::unauthorized(
                "Invalid email or password",
                json!({}),
            ));
        }

        Ok(Self::open_session(&mut inner, &credentials.email))
    }

    async fn sign_up(&self, credentials: Credentials) -> Result<Session, AppError> {
        if credentials.password.len() < MIN_PASSWORD_LENGTH {
            return Err(AppError::bad_request(
                "Password must be at least 8 characters",
                json!({ "min_length": MIN_PASSWORD_LENGTH }),
            ));
        }

        let mut inner = self.inner.write().expect("auth provider lock poisoned");

        if inner.accounts.contains_key(&credentials.email) {
            return Err(AppError::conflict(
                "An account with this email already exists",
                json!({ "email": credentials.email }),
            ));
        }

        let id = format!("user-{}", inner.next_user_id);
        inner.next_user_id += 1;
        inner.accounts.insert(
            credentials.email.clone(),
            Account {
                id,
                password_digest: digest(&credentials.password),
            },
        );

        Ok(Self::open_session(&mut inner, &credentials.email))
    }

    async fn sign_out(&self, access_token: &str) -> Result<(), AppError> {
        let mut inner = self.inner.write().expect("auth provider lock poisoned");
        inner.active_tokens.remove(access_token);
        Ok(())
    }

    async fn reset_password(&self, email: &str) -> Result<(), AppError> {
        // No mail transport in the demo provider. The response is identical
        // whether or not the account exists.
        tracing::info!(email, "password reset requested");
        Ok(())
    }

    async fn update_password(
        &self,
        access_token: &str,
        new_password: &str,
    ) -> Result<(), AppError> {
        if new_password.len() < MIN_PASSWORD_LENGTH {
            return Err(AppError::bad_request(
                "Password must be at least 8 characters",
                json!({ "min_length": MIN_PASSWORD_LENGTH }),
            ));
        }

        let mut inner = self.inner.write().expect("auth provider lock poisoned");

        let email = inner
            .active_tokens
            .get(access_token)
            .cloned()
            .ok_or_else(|| {
                AppError::unauthorized("Unauthorized", json!({ "reason": "No active session" }))
            })?;

        if let Some(account) = inner.accounts.get_mut(&email) {
            account.password_digest = digest(new_password);
        }

        Ok(())
    }
}
