//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the deletion endpoint and the health probes together
//! with the request, response and error schemas. Swagger UI serves it in
//! debug builds and `openapi-dump` prints it for external tooling.

use utoipa::OpenApi;

use crate::inbound::http::delete_user::{
    DeleteUserRequest, DeleteUserRequestUser, DeleteUserResponse,
};
use crate::inbound::http::error::ErrorBody;

/// OpenAPI document for the account deletion service.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Account deletion service",
        description = "Deletes identity platform accounts via the admin API."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::delete_user::delete_user,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        DeleteUserRequest,
        DeleteUserRequestUser,
        DeleteUserResponse,
        ErrorBody
    )),
    tags(
        (name = "users", description = "Account deletion"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
