use axum::extract::{ Path, State };
use axum::Json;
use rust_decimal::Decimal;
use serde::{ Deserialize, Serialize };
use uuid::Uuid;

use crate::db::entity;
use crate::enums::UserStatus;
use crate::error::Result;
use crate::services::UserWithCounts;

use super::extract::AdminUser;
use super::AppState;

#[derive(Deserialize)]
pub struct CreateUserRequest {
    #[serde(default)]
    pub insurance_deposit_amount: Option<Decimal>,
    #[serde(default)]
    pub referral_code_used: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdateUserRequest {
    #[serde(default)]
    pub status: Option<UserStatus>,
    /// Absent field leaves the requirement alone; an explicit null
    /// clears it.
    #[serde(default, deserialize_with = "double_option")]
    pub insurance_deposit_amount: Option<Option<Decimal>>,
}

fn double_option<'de, D>(
    deserializer: D
) -> std::result::Result<Option<Option<Decimal>>, D::Error>
    where D: serde::Deserializer<'de>
{
    Option::<Decimal>::deserialize(deserializer).map(Some)
}

#[derive(Serialize)]
pub struct InvitedUserResponse {
    #[serde(flatten)]
    pub user: entity::user::Model,
    pub invite_token: String,
}

pub async fn list_users(
    _admin: AdminUser,
    State(state): State<AppState>
) -> Result<Json<Vec<UserWithCounts>>> {
    let users = state.user_service.list().await?;
    Ok(Json(users))
}

pub async fn create_user(
    _admin: AdminUser,
    State(state): State<AppState>,
    Json(request): Json<CreateUserRequest>
) -> Result<Json<InvitedUserResponse>> {
    let (user, invite_token) = state.user_service
        .create_invited(request.insurance_deposit_amount, request.referral_code_used).await?;

    Ok(Json(InvitedUserResponse { user, invite_token }))
}

pub async fn update_user(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateUserRequest>
) -> Result<Json<entity::user::Model>> {
    let user = state.user_service
        .update(id, request.status, request.insurance_deposit_amount).await?;

    Ok(Json(user))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_absent_insurance_amount_is_left_alone() {
        let request: UpdateUserRequest = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(request.insurance_deposit_amount, None);
    }

    #[test]
    fn test_null_insurance_amount_clears_the_requirement() {
        let request: UpdateUserRequest = serde_json
            ::from_str(r#"{"insurance_deposit_amount": null}"#)
            .unwrap();
        assert_eq!(request.insurance_deposit_amount, Some(None));
    }

    #[test]
    fn test_insurance_amount_is_set() {
        let request: UpdateUserRequest = serde_json
            ::from_str(r#"{"insurance_deposit_amount": 500}"#)
            .unwrap();
        assert_eq!(request.insurance_deposit_amount, Some(Some(dec!(500))));
    }
}
