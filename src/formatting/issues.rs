use crate::config::Config;
use crate::models::Issue;

/// `(<issue link>) <summary>` followed by a newline.
pub fn format_issue_line(issue: &Issue, config: &Config) -> String {
    format!("({}) {}\n", config.issue_url(&issue.key), issue.summary)
}

/// Plain-text listing of the issues, one line each, in input order.
/// Empty input gives an empty string.
pub fn format_issues(issues: &[Issue], config: &Config) -> String {
    issues.iter().fold(String::new(), |mut text, issue| {
        text.push_str(&format_issue_line(issue, config));
        text
    })
}
