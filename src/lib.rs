// Module declarations
pub mod client;
pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod formatting;
pub mod handlers;
pub mod logging;
pub mod models;
pub mod request_context;
pub mod server;

#[cfg(test)]
mod tests;

// Re-export commonly used items
pub use client::JiraClient;
pub use config::{load_config, Config};
pub use error::{BridgeError, BridgeResult};
pub use models::*;
pub use request_context::{RequestContext, RequestContextBuilder};
pub use server::router;
