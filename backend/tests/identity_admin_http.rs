//! Wire-level tests for the reqwest admin API adapter.

use actix_web::http::StatusCode;
use delete_user_service::domain::ports::{IdentityAdmin, IdentityAdminError};
use delete_user_service::domain::{AdminApiConfig, AdminApiCredentials, UserId};
use delete_user_service::outbound::identity_admin::IdentityAdminHttpClient;

mod support;

use support::FakeAdminApi;

const SERVICE_KEY: &str = "service-role-key";

fn credentials(base_url: String) -> AdminApiCredentials {
    AdminApiConfig::new(Some(SERVICE_KEY.to_owned()), Some(base_url))
        .credentials()
        .expect("complete configuration")
}

fn client() -> IdentityAdminHttpClient {
    IdentityAdminHttpClient::new().expect("reqwest client")
}

#[actix_web::test]
async fn sends_authenticated_delete_to_admin_users_path() {
    let fake = FakeAdminApi::start(StatusCode::OK, "{}");
    let id = UserId::new("3fa85f64-5717-4562-b3fc-2c963f66afa6").expect("valid id");

    client()
        .delete_user(&credentials(fake.base_url()), &id)
        .await
        .expect("deletion succeeds");

    let requests = fake.requests();
    assert_eq!(requests.len(), 1);
    let request = &requests[0];
    assert_eq!(request.method, "DELETE");
    assert_eq!(
        request.path,
        "/auth/v1/admin/users/3fa85f64-5717-4562-b3fc-2c963f66afa6"
    );
    assert_eq!(request.apikey.as_deref(), Some(SERVICE_KEY));
    assert_eq!(
        request.authorization.as_deref(),
        Some("Bearer service-role-key")
    );
    fake.stop().await;
}

#[actix_web::test]
async fn no_content_counts_as_success() {
    let fake = FakeAdminApi::start(StatusCode::NO_CONTENT, "");
    let id = UserId::new("abc").expect("valid id");

    let result = client()
        .delete_user(&credentials(fake.base_url()), &id)
        .await;
    assert!(result.is_ok(), "unexpected {result:?}");
    fake.stop().await;
}

#[actix_web::test]
async fn rejection_carries_status_and_verbatim_body() {
    let body = r#"{"code":404,"error_code":"user_not_found","msg":"User not found"}"#;
    let fake = FakeAdminApi::start(StatusCode::NOT_FOUND, body);
    let id = UserId::new("missing-user").expect("valid id");

    let error = client()
        .delete_user(&credentials(fake.base_url()), &id)
        .await
        .expect_err("deletion rejected");
    assert_eq!(
        error,
        IdentityAdminError::Rejected {
            status: 404,
            body: body.to_owned(),
        }
    );
    fake.stop().await;
}

#[actix_web::test]
async fn unreachable_host_is_a_transport_error() {
    let fake = FakeAdminApi::start(StatusCode::OK, "{}");
    let base_url = fake.base_url();
    fake.stop().await;

    let id = UserId::new("abc").expect("valid id");
    let error = client()
        .delete_user(&credentials(base_url), &id)
        .await
        .expect_err("listener is closed");
    assert!(
        matches!(error, IdentityAdminError::Transport { .. }),
        "expected transport error, got {error:?}"
    );
}
