pub mod issue;
pub mod jira;
pub mod session;
pub mod transition;

// Re-export commonly used types
pub use issue::Issue;
pub use jira::{LoginRequest, SearchResponse, SessionResponse, TransitionRequest};
pub use session::SessionCredential;
pub use transition::{TransitionOutcome, TransitionReport};
