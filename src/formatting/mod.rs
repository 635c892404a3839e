pub mod issues;

pub use issues::{format_issue_line, format_issues};
