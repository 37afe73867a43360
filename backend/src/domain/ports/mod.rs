//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod account_deletion_command;
mod identity_admin;

#[cfg(test)]
pub use account_deletion_command::MockAccountDeletionCommand;
pub use account_deletion_command::{
    AccountDeletionCommand, AccountDeletionError, FixtureAccountDeletionCommand,
};
#[cfg(test)]
pub use identity_admin::MockIdentityAdmin;
pub use identity_admin::{FixtureIdentityAdmin, IdentityAdmin, IdentityAdminError};
