//! Password authentication and account lifecycle.
//!
//! Signin issues a bearer token from [`token::TokenService`]. Repeated failures lock
//! the account; confirmation, unlock and recovery each work through a one-time token
//! which is logged in place of being mailed.

pub mod token;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::party::PartyRepository,
    error::{auth::AuthError, AppError},
    model::party::{normalize_email, Party},
    service::auth::token::TokenService,
    util::random::generate_token,
};

/// Shortest password accepted on create, recover and change.
pub const MIN_PASSWORD_LENGTH: usize = 8;

#[cfg(not(test))]
const HASH_COST: u32 = bcrypt::DEFAULT_COST;
#[cfg(test)]
const HASH_COST: u32 = 4;

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
    max_failed_attempts: i32,
}

impl<'a> AuthService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        tokens: &'a TokenService,
        max_failed_attempts: i32,
    ) -> Self {
        Self {
            db,
            tokens,
            max_failed_attempts,
        }
    }

    /// Verifies credentials and issues a token.
    ///
    /// A wrong password counts towards the lockout; the attempt that reaches the
    /// limit locks the account and answers as locked.
    ///
    /// # Returns
    /// - `Ok((Party, String))` - Signed in party and its bearer token
    /// - `Err(AuthError::InvalidCredentials)` - Unknown email or wrong password
    /// - `Err(AuthError::AccountLocked)` - Account is or just became locked
    /// - `Err(AuthError::AccountNotConfirmed)` - Correct password, unconfirmed account
    pub async fn signin(&self, email: &str, password: &str) -> Result<(Party, String), AppError> {
        let repo = PartyRepository::new(self.db);

        let Some(entity) = repo.find_entity_by_email(&normalize_email(email)).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if entity.locked_at.is_some() {
            return Err(AuthError::AccountLocked(entity.id).into());
        }

        if !bcrypt::verify(password, &entity.password_hash)? {
            let updated = repo
                .record_failed_signin(entity.id, self.max_failed_attempts, generate_token())
                .await?;

            if let (Some(_), Some(token)) = (updated.locked_at, updated.unlock_token.as_ref()) {
                tracing::info!(
                    "Party {} locked after {} failed signins, unlock token: {}",
                    updated.id,
                    updated.failed_attempts,
                    token
                );
                return Err(AuthError::AccountLocked(updated.id).into());
            }

            return Err(AuthError::InvalidCredentials.into());
        }

        if entity.confirmed_at.is_none() {
            return Err(AuthError::AccountNotConfirmed(entity.id).into());
        }

        if entity.failed_attempts > 0 {
            repo.reset_failed_attempts(entity.id).await?;
        }

        let party = repo
            .find_by_id(entity.id)
            .await?
            .ok_or(AuthError::PartyNotFound(entity.id))?;
        let token = self.tokens.issue(party.id)?;

        tracing::debug!("Party {} signed in", party.id);

        Ok((party, token))
    }

    /// Starts password recovery. Unknown emails are ignored so callers cannot probe accounts.
    pub async fn forgot(&self, email: &str) -> Result<(), AppError> {
        let repo = PartyRepository::new(self.db);

        match repo.find_entity_by_email(&normalize_email(email)).await? {
            Some(entity) => {
                let token = generate_token();
                repo.set_recovery_token(entity.id, token.clone()).await?;
                tracing::info!("Recovery token for party {}: {}", entity.id, token);
            }
            None => tracing::debug!("Password recovery requested for unknown email"),
        }

        Ok(())
    }

    /// Sets a new password using a recovery token. The token is consumed.
    pub async fn recover(&self, token: &str, password: &str) -> Result<(), AppError> {
        validate_password(password)?;

        let repo = PartyRepository::new(self.db);
        let Some(entity) = repo.find_by_recovery_token(token).await? else {
            return Err(AuthError::UnknownToken.into());
        };

        repo.set_password(entity.id, hash_password(password)?).await?;

        tracing::info!("Party {} recovered their password", entity.id);

        Ok(())
    }

    pub async fn confirm(&self, token: &str) -> Result<(), AppError> {
        let repo = PartyRepository::new(self.db);
        let Some(entity) = repo.find_by_confirmation_token(token).await? else {
            return Err(AuthError::UnknownToken.into());
        };

        repo.confirm(entity.id).await?;

        Ok(())
    }

    pub async fn unlock(&self, token: &str) -> Result<(), AppError> {
        let repo = PartyRepository::new(self.db);
        let Some(entity) = repo.find_by_unlock_token(token).await? else {
            return Err(AuthError::UnknownToken.into());
        };

        repo.unlock(entity.id).await?;

        tracing::info!("Party {} unlocked", entity.id);

        Ok(())
    }

    /// Changes the password of a signed in party after checking the current one.
    pub async fn change(
        &self,
        party_id: i32,
        password: &str,
        new_password: &str,
    ) -> Result<(), AppError> {
        let repo = PartyRepository::new(self.db);
        let entity = repo
            .find_entity_by_id(party_id)
            .await?
            .ok_or(AuthError::PartyNotFound(party_id))?;

        if !bcrypt::verify(password, &entity.password_hash)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        validate_password(new_password)?;
        repo.set_password(entity.id, hash_password(new_password)?)
            .await?;

        Ok(())
    }
}

pub fn validate_password(password: &str) -> Result<(), AppError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(AppError::BadRequest(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LENGTH
        )));
    }

    Ok(())
}

pub fn hash_password(password: &str) -> Result<String, AppError> {
    Ok(bcrypt::hash(password, HASH_COST)?)
}
