//! Shared HTTP adapter state.
//!
//! Handlers receive this via `actix_web::web::Data` so they depend only on
//! the deletion use-case port and remain testable without network I/O.

use std::sync::Arc;

use crate::domain::ports::AccountDeletionCommand;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub account_deletion: Arc<dyn AccountDeletionCommand>,
}

impl HttpState {
    /// Construct state from the deletion port.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use delete_user_service::domain::ports::FixtureAccountDeletionCommand;
    /// use delete_user_service::inbound::http::state::HttpState;
    ///
    /// let state = HttpState::new(Arc::new(FixtureAccountDeletionCommand));
    /// let _deletion = state.account_deletion.clone();
    /// ```
    pub fn new(account_deletion: Arc<dyn AccountDeletionCommand>) -> Self {
        Self { account_deletion }
    }
}
