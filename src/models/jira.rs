use serde::{Deserialize, Serialize};

// Search response structures
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    pub issues: Vec<SearchIssue>,
    /// Number of matches across all pages, when Jira reports it.
    #[serde(default)]
    pub total: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct SearchIssue {
    pub key: String,
    pub fields: SearchIssueFields,
}

#[derive(Debug, Deserialize)]
pub struct SearchIssueFields {
    pub summary: String,
}

// Session (cookie auth) structures
#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct SessionResponse {
    pub session: SessionInfo,
}

#[derive(Debug, Deserialize)]
pub struct SessionInfo {
    pub name: String,
    pub value: String,
}

// Transition request structures
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct TransitionRequest {
    pub transition: TransitionId,
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct TransitionId {
    pub id: String,
}

impl TransitionRequest {
    pub fn to(id: impl Into<String>) -> Self {
        Self {
            transition: TransitionId { id: id.into() },
        }
    }
}
