//! Driven port for the identity platform's administrative API.
//!
//! The domain decides *whether* to call the platform; adapters own the wire
//! format (URL layout, auth headers, status handling).

use async_trait::async_trait;

use super::define_port_error;
use crate::domain::{AdminApiCredentials, UserId};

define_port_error! {
    /// Errors surfaced while calling the identity admin API.
    pub enum IdentityAdminError {
        /// The platform answered with a non-success status.
        ///
        /// `body` is the response text exactly as received.
        Rejected { status: u16, body: String } =>
            "identity admin rejected request with status {status}: {body}",
        /// The admin URL could not be built from the configured base URL.
        InvalidEndpoint { message: String } =>
            "identity admin endpoint invalid: {message}",
        /// Network transport failed before a response was received.
        Transport { message: String } =>
            "identity admin transport failed: {message}",
    }
}

/// Port for privileged user administration on the identity platform.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IdentityAdmin: Send + Sync {
    /// Permanently delete `user_id` using the supplied service credentials.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use delete_user_service::domain::ports::{FixtureIdentityAdmin, IdentityAdmin};
    ///
    /// let admin = FixtureIdentityAdmin;
    /// admin.delete_user(&credentials, &user_id).await?;
    /// # Ok::<(), delete_user_service::domain::ports::IdentityAdminError>(())
    /// ```
    async fn delete_user(
        &self,
        credentials: &AdminApiCredentials,
        user_id: &UserId,
    ) -> Result<(), IdentityAdminError>;
}

/// Fixture implementation that accepts every deletion.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureIdentityAdmin;

#[async_trait]
impl IdentityAdmin for FixtureIdentityAdmin {
    async fn delete_user(
        &self,
        _credentials: &AdminApiCredentials,
        _user_id: &UserId,
    ) -> Result<(), IdentityAdminError> {
        Ok(())
    }
}
