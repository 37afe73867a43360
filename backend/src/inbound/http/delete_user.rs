//! Account deletion handler.
//!
//! ```text
//! POST / {"user":{"id":"3fa85f64-5717-4562-b3fc-2c963f66afa6"}}
//! POST /delete_user {"user":{"id":"3fa85f64-5717-4562-b3fc-2c963f66afa6"}}
//! ```

use actix_web::{HttpResponse, web};
use futures_util::StreamExt;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;
use utoipa::ToSchema;

use crate::domain::UserId;
use crate::domain::ports::{AccountDeletionCommand, AccountDeletionError};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::state::HttpState;

/// Paths the deletion handler is mounted on.
pub const DELETE_USER_PATHS: [&str; 2] = ["/", "/delete_user"];

/// Request body accepted by the deletion endpoint.
///
/// Documentation only; the handler reads the raw body so malformed JSON is
/// reported as a missing id instead of an extractor error.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct DeleteUserRequest {
    pub user: Option<DeleteUserRequestUser>,
}

/// Nested user object of [`DeleteUserRequest`].
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct DeleteUserRequestUser {
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    pub id: Option<String>,
}

/// Success payload, always `{ "success": true }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct DeleteUserResponse {
    pub success: bool,
}

/// Why a request body did not yield a user id.
///
/// Both causes produce the same client response; the distinction exists for
/// logs and tests.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserIdExtractionError {
    /// The body is not JSON, or `user` / `user.id` has an unexpected type.
    #[error("malformed request body: {message}")]
    MalformedBody { message: String },
    /// The body is well-formed but carries no non-empty `user.id`.
    #[error("request body has no user id")]
    MissingUserId,
}

impl From<UserIdExtractionError> for AccountDeletionError {
    fn from(_: UserIdExtractionError) -> Self {
        Self::missing_user_id()
    }
}

fn malformed(message: impl Into<String>) -> UserIdExtractionError {
    UserIdExtractionError::MalformedBody {
        message: message.into(),
    }
}

/// Extract `user.id` from a raw request body.
///
/// `user` and `id` may be absent or `null`; an empty string id counts as
/// absent. Any other non-object `user` or non-string `id` is malformed.
///
/// # Errors
///
/// Returns [`UserIdExtractionError`] describing why no id was found.
///
/// # Examples
/// ```
/// use delete_user_service::inbound::http::delete_user::{
///     UserIdExtractionError, extract_user_id,
/// };
///
/// let id = extract_user_id(br#"{"user":{"id":"abc"}}"#).expect("id present");
/// assert_eq!(id.as_str(), "abc");
/// assert_eq!(
///     extract_user_id(br#"{"user":{}}"#),
///     Err(UserIdExtractionError::MissingUserId),
/// );
/// ```
pub fn extract_user_id(body: &[u8]) -> Result<UserId, UserIdExtractionError> {
    let payload: Value =
        serde_json::from_slice(body).map_err(|error| malformed(error.to_string()))?;
    let Value::Object(payload) = payload else {
        return Err(malformed("body must be a JSON object"));
    };

    let user = match payload.get("user") {
        None | Some(Value::Null) => return Err(UserIdExtractionError::MissingUserId),
        Some(Value::Object(user)) => user,
        Some(_) => return Err(malformed("`user` must be an object")),
    };

    match user.get("id") {
        None | Some(Value::Null) => Err(UserIdExtractionError::MissingUserId),
        Some(Value::String(id)) => {
            UserId::new(id.clone()).map_err(|_| UserIdExtractionError::MissingUserId)
        }
        Some(_) => Err(malformed("`user.id` must be a string")),
    }
}

/// Collect the whole request body.
///
/// Reads from the raw payload stream, so no extractor size limit applies;
/// a body that fails mid-stream is reported as malformed.
async fn read_body(mut payload: web::Payload) -> Result<web::BytesMut, UserIdExtractionError> {
    let mut body = web::BytesMut::new();
    while let Some(chunk) = payload.next().await {
        let chunk = chunk.map_err(|error| malformed(error.to_string()))?;
        body.extend_from_slice(&chunk);
    }
    Ok(body)
}

/// Delete the identity platform account named in the request body.
#[utoipa::path(
    post,
    path = "/",
    request_body = DeleteUserRequest,
    responses(
        (status = 200, description = "User deleted", body = DeleteUserResponse),
        (status = 400, description = "Missing user id", body = ErrorBody),
        (status = 500, description = "Missing configuration or platform failure", body = ErrorBody)
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
pub async fn delete_user(
    state: web::Data<HttpState>,
    payload: web::Payload,
) -> ApiResult<HttpResponse> {
    let user_id = read_body(payload)
        .await
        .and_then(|body| extract_user_id(&body))
        .inspect_err(|error| {
            debug!(%error, "deletion request without usable user id");
        })?;

    state.account_deletion.delete_account(&user_id).await?;
    Ok(HttpResponse::Ok().json(DeleteUserResponse { success: true }))
}

/// Register the deletion handler on every path in [`DELETE_USER_PATHS`].
///
/// # Examples
/// ```
/// use actix_web::App;
/// use delete_user_service::inbound::http::delete_user::configure;
///
/// let _app = App::new().configure(configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource(DELETE_USER_PATHS).route(web::post().to(delete_user)));
}
