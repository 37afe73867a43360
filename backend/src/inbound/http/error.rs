//! HTTP adapter mapping for deletion errors.
//!
//! Purpose: keep `AccountDeletionError` HTTP-agnostic while giving clients a
//! single-field JSON error body, `{ "error": "<message>" }`.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::domain::ports::AccountDeletionError;

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, AccountDeletionError>;

/// Client-facing message for requests without a usable user id.
pub const MISSING_USER_ID_MESSAGE: &str = "Missing user id";
/// Client-facing message for absent admin API settings.
pub const MISSING_ENV_VARS_MESSAGE: &str = "Missing env vars";

/// Error response payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    /// Human-readable failure description.
    #[schema(example = "Missing user id")]
    pub error: String,
}

fn client_message(error: &AccountDeletionError) -> String {
    match error {
        AccountDeletionError::MissingUserId => MISSING_USER_ID_MESSAGE.to_owned(),
        AccountDeletionError::MissingConfiguration { .. } => MISSING_ENV_VARS_MESSAGE.to_owned(),
        AccountDeletionError::RemoteRejected { body } => body.clone(),
        AccountDeletionError::RemoteUnavailable { message } => message.clone(),
    }
}

impl ResponseError for AccountDeletionError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingUserId => StatusCode::BAD_REQUEST,
            Self::MissingConfiguration { .. }
            | Self::RemoteRejected { .. }
            | Self::RemoteUnavailable { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            error!(
                kind = self.kind(),
                error = %self,
                status = status.as_u16(),
                "account deletion failed"
            );
        }
        HttpResponse::build(status).json(ErrorBody {
            error: client_message(self),
        })
    }
}

#[cfg(test)]
mod tests {
    //! Tests for HTTP error mapping.

    use super::*;
    use actix_web::body::to_bytes;
    use rstest::rstest;
    use serde_json::{Value, json};

    #[rstest]
    #[case::missing_user(
        AccountDeletionError::missing_user_id(),
        StatusCode::BAD_REQUEST,
        json!({ "error": "Missing user id" })
    )]
    #[case::missing_config(
        AccountDeletionError::missing_configuration(vec!["SUPABASE_URL"]),
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({ "error": "Missing env vars" })
    )]
    #[case::rejected(
        AccountDeletionError::remote_rejected(r#"{"msg":"User not found"}"#),
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({ "error": "{\"msg\":\"User not found\"}" })
    )]
    #[case::unavailable(
        AccountDeletionError::remote_unavailable("connection refused"),
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({ "error": "connection refused" })
    )]
    #[actix_web::test]
    async fn maps_errors_to_status_and_single_field_body(
        #[case] error: AccountDeletionError,
        #[case] expected_status: StatusCode,
        #[case] expected_body: Value,
    ) {
        let response = error.error_response();
        assert_eq!(response.status(), expected_status);

        let bytes = to_bytes(response.into_body()).await.expect("body bytes");
        let body: Value = serde_json::from_slice(&bytes).expect("error JSON");
        assert_eq!(body, expected_body);
    }

    #[test]
    fn missing_configuration_does_not_name_variables_to_clients() {
        let error = AccountDeletionError::missing_configuration(vec!["SUPABASE_SERVICE_ROLE_KEY"]);
        assert_eq!(client_message(&error), MISSING_ENV_VARS_MESSAGE);
    }

    #[rstest]
    #[case::missing_user(AccountDeletionError::missing_user_id(), "missing_user_id")]
    #[case::missing_config(
        AccountDeletionError::missing_configuration(vec!["SUPABASE_URL"]),
        "missing_configuration"
    )]
    #[case::rejected(AccountDeletionError::remote_rejected("nope"), "remote_rejected")]
    #[case::unavailable(AccountDeletionError::remote_unavailable("down"), "remote_unavailable")]
    fn error_kinds_are_stable_log_fields(
        #[case] error: AccountDeletionError,
        #[case] expected: &str,
    ) {
        assert_eq!(error.kind(), expected);
    }
}
