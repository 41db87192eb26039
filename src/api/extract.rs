use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::cookie::CookieJar;

use crate::auth::SESSION_COOKIE;
use crate::db::entity;
use crate::enums::Role;
use crate::error::AppError;

use super::AppState;

/// The user behind the request's session cookie. Rejects with 401 when
/// the cookie is missing, expired or points at a blocked user.
pub struct AuthUser(pub entity::user::Model);

/// [`AuthUser`] narrowed to the ADMIN role; rejects with 403 otherwise.
pub struct AdminUser(pub entity::user::Model);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar
            .get(SESSION_COOKIE)
            .map(|cookie| cookie.value().to_string())
            .ok_or(AppError::Unauthorized)?;

        let user = state.auth_service
            .validate_session(&token).await?
            .ok_or(AppError::Unauthorized)?;

        Ok(AuthUser(user))
    }
}

impl FromRequestParts<AppState> for AdminUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState
    ) -> Result<Self, Self::Rejection> {
        let AuthUser(user) = AuthUser::from_request_parts(parts, state).await?;

        if user.role != Role::Admin.as_str() {
            return Err(AppError::Forbidden);
        }

        Ok(AdminUser(user))
    }
}

/// Bearer-token gate for the bootstrap endpoints.
pub fn require_init_secret(parts_headers: &axum::http::HeaderMap, secret: &str) -> Result<(), AppError> {
    let header = parts_headers
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or(AppError::Unauthorized)?;

    let token = header.strip_prefix("Bearer ").ok_or(AppError::Unauthorized)?;
    if token != secret {
        return Err(AppError::Unauthorized);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{ header::AUTHORIZATION, HeaderMap, HeaderValue };

    fn headers(value: Option<&str>) -> HeaderMap {
        let mut map = HeaderMap::new();
        if let Some(value) = value {
            map.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        }
        map
    }

    #[test]
    fn test_accepts_matching_bearer_token() {
        assert!(require_init_secret(&headers(Some("Bearer sekret-sekret-16")), "sekret-sekret-16").is_ok());
    }

    #[test]
    fn test_rejects_missing_wrong_or_malformed() {
        assert!(require_init_secret(&headers(None), "s").is_err());
        assert!(require_init_secret(&headers(Some("Bearer nope")), "s").is_err());
        assert!(require_init_secret(&headers(Some("Basic s")), "s").is_err());
    }
}
