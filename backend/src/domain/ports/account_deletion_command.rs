//! Driving port for deleting a user account.

use async_trait::async_trait;

use super::define_port_error;
use crate::domain::UserId;

define_port_error! {
    /// Terminal outcomes of a failed deletion request.
    pub enum AccountDeletionError {
        /// The request carried no usable user identifier.
        MissingUserId => "Missing user id",
        /// One or more admin API settings are absent.
        MissingConfiguration { missing: Vec<&'static str> } =>
            "missing admin API configuration: {missing:?}",
        /// The identity platform refused the deletion; `body` is verbatim.
        RemoteRejected { body: String } => "{body}",
        /// The identity platform could not be reached.
        RemoteUnavailable { message: String } => "{message}",
    }
}

/// Use-case port consumed by inbound adapters.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountDeletionCommand: Send + Sync {
    /// Delete the account identified by `user_id`.
    async fn delete_account(&self, user_id: &UserId) -> Result<(), AccountDeletionError>;
}

/// Fixture implementation that reports every deletion as successful.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureAccountDeletionCommand;

#[async_trait]
impl AccountDeletionCommand for FixtureAccountDeletionCommand {
    async fn delete_account(&self, _user_id: &UserId) -> Result<(), AccountDeletionError> {
        Ok(())
    }
}
