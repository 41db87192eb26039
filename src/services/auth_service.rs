use std::sync::Arc;

use crate::auth::{ generate_token, hash_password, hash_token, verify_password };
use crate::db::{ entity, UserRepository };
use crate::enums::UserStatus;
use crate::error::{ AppError, Result };

pub struct AuthService {
    users: Arc<UserRepository>,
    session_ttl_hours: i64,
}

impl AuthService {
    pub fn new(users: Arc<UserRepository>, session_ttl_hours: i64) -> Self {
        Self { users, session_ttl_hours }
    }

    /// Redeem an admin-issued invite token: the matching PENDING user gets
    /// an email, a password and ACTIVE status, plus a fresh session.
    pub async fn register(
        &self,
        invite_token: &str,
        email: String,
        password: String
    ) -> Result<(entity::user::Model, String)> {
        validate_email(&email)?;
        validate_password(&password)?;

        let user = self.users
            .find_by_invite_token(invite_token).await?
            .ok_or_else(|| AppError::InvalidInput("Invalid invite token".to_string()))?;

        if user.status != UserStatus::Pending.as_str() {
            return Err(AppError::Conflict("Invite token already used".to_string()));
        }

        if self.users.find_by_email(&email).await?.is_some() {
            return Err(AppError::Conflict("Email already in use".to_string()));
        }

        let password_hash = hash_password(&password)?;
        let user = self.users.activate(user, email, password_hash).await?;

        let token = self.start_session(user.id).await?;
        tracing::info!(user_id = %user.id, "User registered via invite token");

        Ok((user, token))
    }

    pub async fn login(
        &self,
        email: &str,
        password: &str
    ) -> Result<(entity::user::Model, String)> {
        let user = self.users
            .find_by_email(email).await?
            .ok_or(AppError::Unauthorized)?;

        if user.status == UserStatus::Blocked.as_str() {
            return Err(AppError::Forbidden);
        }

        let stored_hash = user.password_hash.as_deref().ok_or(AppError::Unauthorized)?;
        if !verify_password(password, stored_hash)? {
            return Err(AppError::Unauthorized);
        }

        let token = self.start_session(user.id).await?;
        Ok((user, token))
    }

    pub async fn logout(&self, session_token: &str) -> Result<()> {
        self.users.delete_session(&hash_token(session_token)).await
    }

    /// Resolve a session cookie to its user. Blocked users have no session.
    pub async fn validate_session(
        &self,
        session_token: &str
    ) -> Result<Option<entity::user::Model>> {
        let user = self.users.find_user_by_session(&hash_token(session_token)).await?;

        Ok(user.filter(|u| u.status != UserStatus::Blocked.as_str()))
    }

    async fn start_session(&self, user_id: uuid::Uuid) -> Result<String> {
        let token = generate_token();
        self.users.create_session(user_id, hash_token(&token), self.session_ttl_hours).await?;
        Ok(token)
    }
}

fn validate_email(email: &str) -> Result<()> {
    if email.len() < 3 || !email.contains('@') {
        return Err(AppError::InvalidInput("Invalid email address".to_string()));
    }
    Ok(())
}

fn validate_password(password: &str) -> Result<()> {
    if password.len() < 8 {
        return Err(AppError::InvalidInput(
            "Password must be at least 8 characters".to_string()
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_validation() {
        assert!(validate_email("user@example.com").is_ok());
        assert!(validate_email("no-at-sign").is_err());
        assert!(validate_email("@").is_err());
    }

    #[test]
    fn test_password_validation() {
        assert!(validate_password("long enough").is_ok());
        assert!(validate_password("short").is_err());
    }
}
