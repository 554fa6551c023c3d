use axum::http::{header::AUTHORIZATION, HeaderMap};
use sea_orm::DatabaseConnection;

use crate::{
    model::resource::{Action, Resource},
    server::{
        data::party::PartyRepository,
        error::{auth::AuthError, AppError},
        model::party::Party,
        service::auth::token::TokenService,
    },
};

/// A role permission an endpoint requires, checked against `resource:action` wildcards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Permission {
    pub resource: Resource,
    pub action: Action,
}

impl Permission {
    pub const fn new(resource: Resource, action: Action) -> Self {
        Self { resource, action }
    }

    pub fn wildcard(&self) -> String {
        format!("{}:{}", self.resource.as_str(), self.action.as_str())
    }
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenService, headers: &'a HeaderMap) -> Self {
        Self {
            db,
            tokens,
            headers,
        }
    }

    /// Resolves the bearer token to a party and checks it holds every permission.
    ///
    /// An empty permission list only requires a valid token.
    ///
    /// # Returns
    /// - `Ok(Party)` - Authenticated party holding all `permissions`
    /// - `Err(AuthError::MissingToken)` - No `Authorization: Bearer` header
    /// - `Err(AuthError::InvalidToken | ExpiredToken)` - Token failed verification
    /// - `Err(AuthError::PartyNotFound)` - Token refers to a deleted party
    /// - `Err(AuthError::AccountLocked)` - Party is locked
    /// - `Err(AuthError::AccessDenied)` - First permission the party lacks
    pub async fn require(&self, permissions: &[Permission]) -> Result<Party, AppError> {
        let token = bearer_token(self.headers).ok_or(AuthError::MissingToken)?;
        let party_id = self.tokens.verify(token)?;

        let Some(party) = PartyRepository::new(self.db).find_by_id(party_id).await? else {
            return Err(AuthError::PartyNotFound(party_id).into());
        };

        if party.is_locked() {
            return Err(AuthError::AccountLocked(party.id).into());
        }

        for permission in permissions {
            let wildcard = permission.wildcard();
            if !party.has_permission(&wildcard) {
                return Err(AuthError::AccessDenied(party.id, wildcard).into());
            }
        }

        Ok(party)
    }
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;

    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }

    let token = token.trim();
    (!token.is_empty()).then_some(token)
}
