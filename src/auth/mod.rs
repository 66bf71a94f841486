//! Bearer-token authentication for the public API
//!
//! Tokens are resolved through a [`TokenAuthenticationService`]; issuing and
//! expiring them happens outside this service.

use async_trait::async_trait;
use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

use crate::AddressError;
use crate::models::UserRole;
use crate::web::AppState;

const UNAUTHORIZED_MESSAGE: &str = "ابتدا وارد حساب کاربری خود شوید";
const FORBIDDEN_MESSAGE: &str = "دسترسی غیرمجاز";

/// Identity attached to an authenticated request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserAuthentication {
    pub user_id: Uuid,
    pub role: UserRole,
}

impl UserAuthentication {
    /// Fails with `Forbidden` unless the user holds one of `roles`
    pub fn require_any(&self, roles: &[UserRole]) -> crate::Result<()> {
        if roles.contains(&self.role) {
            Ok(())
        } else {
            debug!("Role {} not in {:?}", self.role, roles);
            Err(AddressError::forbidden(FORBIDDEN_MESSAGE))
        }
    }
}

#[async_trait]
pub trait TokenAuthenticationService: Send + Sync {
    async fn authenticate(&self, token: &str) -> Option<UserAuthentication>;
}

/// Fixed token table, loaded from the seed document
#[derive(Debug, Default)]
pub struct InMemoryTokenAuthenticationService {
    tokens: HashMap<String, UserAuthentication>,
}

impl InMemoryTokenAuthenticationService {
    pub fn new(tokens: HashMap<String, UserAuthentication>) -> Self {
        Self { tokens }
    }

    pub fn insert(&mut self, token: impl Into<String>, user: UserAuthentication) {
        self.tokens.insert(token.into(), user);
    }
}

#[async_trait]
impl TokenAuthenticationService for InMemoryTokenAuthenticationService {
    async fn authenticate(&self, token: &str) -> Option<UserAuthentication> {
        self.tokens.get(token).copied()
    }
}

fn bearer_token(parts: &Parts) -> Option<&str> {
    parts
        .headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

impl FromRequestParts<Arc<AppState>> for UserAuthentication {
    type Rejection = AddressError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let token =
            bearer_token(parts).ok_or_else(|| AddressError::unauthorized(UNAUTHORIZED_MESSAGE))?;

        state
            .tokens
            .authenticate(token)
            .await
            .ok_or_else(|| AddressError::unauthorized(UNAUTHORIZED_MESSAGE))
    }
}
