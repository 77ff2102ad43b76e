//! Client modules for external API interactions

pub mod backend_client;

pub use backend_client::{BackendClient, CopyGateway};
