//! HTTP inbound adapter exposing the deletion endpoint and health probes.

pub mod delete_user;
pub mod error;
pub mod health;
pub mod state;

pub use error::ApiResult;
