//! Account deletion use-case.
//!
//! Resolves the admin API configuration, then forwards exactly one deletion
//! to the identity platform. Nothing is retried or persisted.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::domain::ports::{
    AccountDeletionCommand, AccountDeletionError, IdentityAdmin, IdentityAdminError,
};
use crate::domain::{AdminApiConfig, UserId};

/// Service implementing [`AccountDeletionCommand`] over an [`IdentityAdmin`].
pub struct AccountDeletionService<A: ?Sized> {
    config: AdminApiConfig,
    admin: Arc<A>,
}

impl<A: ?Sized> Clone for AccountDeletionService<A> {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            admin: Arc::clone(&self.admin),
        }
    }
}

impl<A: ?Sized> AccountDeletionService<A> {
    /// Create the service with explicit configuration and admin adapter.
    pub fn new(config: AdminApiConfig, admin: Arc<A>) -> Self {
        Self { config, admin }
    }
}

fn map_admin_error(error: IdentityAdminError) -> AccountDeletionError {
    match error {
        IdentityAdminError::Rejected { body, .. } => AccountDeletionError::remote_rejected(body),
        IdentityAdminError::InvalidEndpoint { message }
        | IdentityAdminError::Transport { message } => {
            AccountDeletionError::remote_unavailable(message)
        }
    }
}

#[async_trait]
impl<A> AccountDeletionCommand for AccountDeletionService<A>
where
    A: IdentityAdmin + ?Sized,
{
    async fn delete_account(&self, user_id: &UserId) -> Result<(), AccountDeletionError> {
        let credentials = self.config.credentials().inspect_err(|error| {
            warn!(kind = error.kind(), %error, "admin API configuration incomplete");
        })?;

        match self.admin.delete_user(&credentials, user_id).await {
            Ok(()) => {
                info!(user_id = %user_id, "user deleted");
                Ok(())
            }
            Err(error) => {
                warn!(
                    user_id = %user_id,
                    kind = error.kind(),
                    %error,
                    "identity platform deletion failed"
                );
                Err(map_admin_error(error))
            }
        }
    }
}
