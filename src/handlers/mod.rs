pub mod health;
pub mod status_change;

pub use health::handle_health;
pub use status_change::{
    change_issues_status, failure_log_level, handle_status_change, StatusChangeParams,
};
