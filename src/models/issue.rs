use serde::Serialize;

use super::jira::SearchIssue;

/// An issue matched by the ready-for-QA query, flattened from Jira's
/// `{ key, fields: { summary } }` shape.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct Issue {
    pub key: String,
    pub summary: String,
}

impl Issue {
    pub fn new(key: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            summary: summary.into(),
        }
    }
}

impl From<SearchIssue> for Issue {
    fn from(issue: SearchIssue) -> Self {
        Self {
            key: issue.key,
            summary: issue.fields.summary,
        }
    }
}
