use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::header::CONTENT_TYPE;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use tracing::{error, info, warn, Level};

use crate::config::Config;
use crate::constants::APP_VERSION_PARAM;
use crate::error::{BridgeError, BridgeResult};
use crate::formatting::format_issues;
use crate::request_context::RequestContext;

#[derive(Debug, Default, Deserialize)]
pub struct StatusChangeParams {
    pub app_version: Option<String>,
}

impl StatusChangeParams {
    /// The version exactly as sent. Blank values count as missing.
    pub fn app_version(&self) -> BridgeResult<&str> {
        self.app_version
            .as_deref()
            .filter(|version| !version.trim().is_empty())
            .ok_or_else(|| BridgeError::MissingParameter(APP_VERSION_PARAM.to_string()))
    }
}

/// Caller mistakes are warnings; everything else is an error.
pub fn failure_log_level(error: &BridgeError) -> Level {
    if error.status_code().is_client_error() {
        Level::WARN
    } else {
        Level::ERROR
    }
}

/// `GET /issues/status/change?app_version=...`
pub async fn handle_status_change(
    State(config): State<Arc<Config>>,
    Query(params): Query<StatusChangeParams>,
) -> Response {
    match change_issues_status(config, &params).await {
        Ok(text) => ([(CONTENT_TYPE, "text/plain; charset=utf-8")], text).into_response(),
        Err(e) => {
            if failure_log_level(&e) == Level::WARN {
                warn!(error = %e, "Rejected status change request");
            } else {
                error!(error = %e, "Status change request failed");
            }
            e.into_response()
        }
    }
}

/// Authenticate, query, transition and format. Returns the response text.
pub async fn change_issues_status(
    config: Arc<Config>,
    params: &StatusChangeParams,
) -> BridgeResult<String> {
    let app_version = params.app_version()?;
    info!(app_version, "Received status change request");

    let mut context = RequestContext::new(config)?;
    context.authenticate().await?;
    let jira = context.authenticated_client()?;

    let issues = jira.fetch_ready_issues(app_version).await?;
    info!(app_version, count = issues.len(), "Fetched issues ready for QA");

    let report = jira.transition_to_in_review(&issues).await;
    info!(
        attempted = report.attempted(),
        succeeded = report.succeeded(),
        failed = report.failed(),
        "Finished transitioning issues"
    );

    Ok(format_issues(&issues, context.config()))
}
