pub mod auth;
pub mod http;
pub mod jira_client;

pub use auth::acquire_session;
pub use http::create_http_client;
pub use jira_client::JiraClient;
