use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")] Database(#[from] sea_orm::DbErr),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Access denied")]
    Forbidden,

    #[error("Invalid input: {0}")] InvalidInput(String),

    #[error("{0} not found")] NotFound(&'static str),

    #[error("{0}")] Conflict(String),

    #[error("Insufficient balance")]
    InsufficientBalance,

    #[error("Insurance deposit must be paid before creating withdrawal requests")]
    InsuranceDepositUnpaid,

    #[error("Password error: {0}")] Password(String),

    #[error("Configuration error: {0}")] Config(String),

    #[error("Internal error: {0}")] Internal(String),
}

/// Wire shape for every error the API returns: `{"error": "<message>"}`.
#[derive(serde::Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self {
            AppError::Unauthorized => axum::http::StatusCode::UNAUTHORIZED,
            AppError::Forbidden => axum::http::StatusCode::FORBIDDEN,
            AppError::NotFound(_) => axum::http::StatusCode::NOT_FOUND,
            | AppError::InvalidInput(_)
            | AppError::Conflict(_)
            | AppError::InsufficientBalance
            | AppError::InsuranceDepositUnpaid => {
                axum::http::StatusCode::BAD_REQUEST
            }
            AppError::Database(e) => {
                tracing::error!("Database error: {}", e);
                axum::http::StatusCode::INTERNAL_SERVER_ERROR
            }
            _ => axum::http::StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Internal failures are logged above; the client only sees a
        // generic message for 500s.
        let message = if status == axum::http::StatusCode::INTERNAL_SERVER_ERROR {
            "Internal server error".to_string()
        } else {
            self.to_string()
        };

        (status, axum::Json(ErrorResponse { error: message })).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::response::IntoResponse;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (AppError::Unauthorized, 401),
            (AppError::Forbidden, 403),
            (AppError::NotFound("Wallet"), 404),
            (AppError::InvalidInput("bad".into()), 400),
            (AppError::Conflict("already resolved".into()), 400),
            (AppError::InsufficientBalance, 400),
            (AppError::InsuranceDepositUnpaid, 400),
            (AppError::Internal("boom".into()), 500),
        ];

        for (err, code) in cases {
            assert_eq!(err.into_response().status().as_u16(), code);
        }
    }

    #[test]
    fn test_internal_detail_is_not_leaked() {
        let resp = AppError::Internal("connection string".into()).into_response();
        assert_eq!(resp.status().as_u16(), 500);
    }
}
