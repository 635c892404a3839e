use reqwest::header::COOKIE;
use reqwest::Client;
use tracing::{info, warn};

use crate::config::Config;
use crate::error::{BridgeError, BridgeResult, TransitionWarning};
use crate::models::*;

/// Jira calls made on behalf of one authenticated request.
pub struct JiraClient<'a> {
    http: &'a Client,
    config: &'a Config,
    credential: &'a SessionCredential,
}

impl<'a> JiraClient<'a> {
    pub fn new(http: &'a Client, config: &'a Config, credential: &'a SessionCredential) -> Self {
        Self {
            http,
            config,
            credential,
        }
    }

    /// Issues of `app_version` that are ready for QA, in the order Jira returns them.
    /// Follows `startAt` pages until Jira's reported `total` is collected.
    pub async fn fetch_ready_issues(&self, app_version: &str) -> BridgeResult<Vec<Issue>> {
        let mut issues: Vec<Issue> = Vec::new();

        loop {
            let page = self.fetch_search_page(app_version, issues.len()).await?;
            let received = page.issues.len();
            issues.extend(page.issues.into_iter().map(Issue::from));

            match page.total {
                Some(total) if received > 0 && issues.len() < total => continue,
                _ => break,
            }
        }

        Ok(issues)
    }

    async fn fetch_search_page(
        &self,
        app_version: &str,
        start_at: usize,
    ) -> BridgeResult<SearchResponse> {
        let url = self.config.ready_for_qa_issues_url(app_version, start_at)?;

        let response = self
            .http
            .get(url)
            .header(COOKIE, self.credential.as_str())
            .send()
            .await
            .map_err(|e| BridgeError::QueryFailure(format!("Search request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(BridgeError::QueryFailure(format!(
                "Search returned status {}: {}",
                status, error_text
            )));
        }

        response
            .json()
            .await
            .map_err(|e| BridgeError::QueryFailure(format!("Malformed search response: {}", e)))
    }

    /// Move every issue into QA, one at a time. A failed transition is
    /// recorded in the report and does not stop the rest.
    pub async fn transition_to_in_review(&self, issues: &[Issue]) -> TransitionReport {
        let mut report = TransitionReport::default();

        for issue in issues {
            let result = self.transition_issue(&issue.key).await;
            match &result {
                Ok(status) => info!(issue = %issue.key, status, "Transitioned issue to QA"),
                Err(warning) => warn!(issue = %issue.key, %warning, "Issue transition failed"),
            }
            report.push(TransitionOutcome {
                key: issue.key.clone(),
                result,
            });
        }

        report
    }

    async fn transition_issue(&self, issue_key: &str) -> Result<u16, TransitionWarning> {
        let response = self
            .http
            .post(self.config.qa_in_progress_transition_url(issue_key))
            .header(COOKIE, self.credential.as_str())
            .json(&self.config.qa_in_progress_transition_body())
            .send()
            .await
            .map_err(|e| TransitionWarning::Request(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(status.as_u16());
        }

        let body = response.text().await.unwrap_or_default();
        Err(TransitionWarning::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}
