use axum::extract::State;
use axum::Json;
use axum_extra::extract::cookie::{ Cookie, CookieJar, SameSite };
use serde::Deserialize;

use crate::auth::SESSION_COOKIE;
use crate::db::entity;
use crate::error::Result;

use super::extract::AuthUser;
use super::AppState;

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub invite_token: String,
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

pub async fn register(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(request): Json<RegisterRequest>
) -> Result<(CookieJar, Json<entity::user::Model>)> {
    let (user, token) = state.auth_service
        .register(&request.invite_token, request.email, request.password).await?;

    Ok((jar.add(session_cookie(token)), Json(user)))
}

pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(request): Json<LoginRequest>
) -> Result<(CookieJar, Json<entity::user::Model>)> {
    let (user, token) = state.auth_service.login(&request.email, &request.password).await?;

    Ok((jar.add(session_cookie(token)), Json(user)))
}

pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar
) -> Result<(CookieJar, Json<serde_json::Value>)> {
    if let Some(cookie) = jar.get(SESSION_COOKIE) {
        state.auth_service.logout(cookie.value()).await?;
    }

    let jar = jar.remove(Cookie::from(SESSION_COOKIE));
    Ok((jar, Json(serde_json::json!({ "success": true }))))
}

pub async fn me(AuthUser(user): AuthUser) -> Json<entity::user::Model> {
    Json(user)
}

fn session_cookie(token: String) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}
