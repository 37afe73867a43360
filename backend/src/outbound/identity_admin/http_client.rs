//! Reqwest-backed identity admin adapter.
//!
//! This adapter owns transport details only: URL construction, credential
//! headers, and mapping of HTTP outcomes onto `IdentityAdminError`.

use async_trait::async_trait;
use reqwest::{Client, Url};

use crate::domain::ports::{IdentityAdmin, IdentityAdminError};
use crate::domain::{AdminApiCredentials, UserId};

/// Path segment between the base URL and the user identifier.
pub const ADMIN_USERS_PATH: &str = "/auth/v1/admin/users/";

const API_KEY_HEADER: &str = "apikey";

/// Build the admin URL for `user_id` by plain concatenation.
///
/// Neither the base URL nor the identifier is normalised or escaped.
///
/// # Examples
/// ```
/// use delete_user_service::domain::UserId;
/// use delete_user_service::outbound::identity_admin::admin_user_url;
///
/// let id = UserId::new("abc").expect("valid id");
/// assert_eq!(
///     admin_user_url("https://project.supabase.co", &id),
///     "https://project.supabase.co/auth/v1/admin/users/abc",
/// );
/// ```
#[must_use]
pub fn admin_user_url(base_url: &str, user_id: &UserId) -> String {
    format!("{base_url}{ADMIN_USERS_PATH}{user_id}")
}

/// Identity admin adapter that performs one HTTP DELETE per call.
///
/// No request timeout is configured; the call waits for the platform.
#[derive(Clone)]
pub struct IdentityAdminHttpClient {
    client: Client,
}

impl IdentityAdminHttpClient {
    /// Build an adapter with a fresh connection pool.
    /// ```rust,ignore
    /// let admin = IdentityAdminHttpClient::new()?;
    /// ```
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new() -> Result<Self, reqwest::Error> {
        let client = Client::builder().build()?;
        Ok(Self::with_client(client))
    }

    /// Build an adapter around an existing client.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl IdentityAdmin for IdentityAdminHttpClient {
    async fn delete_user(
        &self,
        credentials: &AdminApiCredentials,
        user_id: &UserId,
    ) -> Result<(), IdentityAdminError> {
        let endpoint = parse_endpoint(credentials.base_url(), user_id)?;
        let service_role_key = credentials.service_role_key();
        let response = self
            .client
            .delete(endpoint)
            .header(API_KEY_HEADER, service_role_key)
            .bearer_auth(service_role_key)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.map_err(map_transport_error)?;
        Err(IdentityAdminError::rejected(status.as_u16(), body))
    }
}

fn parse_endpoint(base_url: &str, user_id: &UserId) -> Result<Url, IdentityAdminError> {
    let raw = admin_user_url(base_url, user_id);
    Url::parse(&raw).map_err(|error| {
        IdentityAdminError::invalid_endpoint(format!("cannot parse admin URL: {error}"))
    })
}

fn map_transport_error(error: reqwest::Error) -> IdentityAdminError {
    // Messages omit the request URL.
    IdentityAdminError::transport(error.without_url().to_string())
}
