use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use reqwest::Url;
use serde::{Deserialize, Serialize};

use crate::bridge_error;
use crate::constants::*;
use crate::error::{BridgeResult, ErrorContext};
use crate::models::TransitionRequest;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the Jira instance, e.g. `https://company.atlassian.net`.
    pub jira_url: String,
    pub username: Option<String>,
    pub password: Option<String>,
    /// JQL selecting the issues to move; `{app_version}` is replaced per request.
    pub ready_for_qa_jql: String,
    pub qa_in_progress_transition_id: String,
    pub listen_addr: String,
    pub request_timeout_secs: u64,
    /// `maxResults` for each search page.
    pub search_page_size: u32,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            jira_url: String::new(),
            username: None,
            password: None,
            ready_for_qa_jql: DEFAULT_READY_FOR_QA_JQL.to_string(),
            qa_in_progress_transition_id: DEFAULT_QA_IN_PROGRESS_TRANSITION_ID.to_string(),
            listen_addr: DEFAULT_LISTEN_ADDR.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            search_page_size: DEFAULT_SEARCH_PAGE_SIZE,
        }
    }
}

impl Config {
    pub fn for_jira_url(jira_url: impl Into<String>) -> Self {
        Config {
            jira_url: jira_url.into(),
            ..Config::default()
        }
    }

    fn base_url(&self) -> &str {
        self.jira_url.trim_end_matches('/')
    }

    pub fn session_url(&self) -> String {
        format!("{}{}", self.base_url(), SESSION_PATH)
    }

    pub fn ready_for_qa_jql(&self, app_version: &str) -> String {
        self.ready_for_qa_jql
            .replace(APP_VERSION_PLACEHOLDER, &escape_jql_string(app_version))
    }

    /// Search URL for the page of results beginning at `start_at`.
    pub fn ready_for_qa_issues_url(&self, app_version: &str, start_at: usize) -> BridgeResult<Url> {
        let jql = self.ready_for_qa_jql(app_version);
        let start_at = start_at.to_string();
        let max_results = self.search_page_size.to_string();
        Url::parse_with_params(
            &format!("{}{}", self.base_url(), SEARCH_PATH),
            &[
                ("jql", jql.as_str()),
                ("fields", SEARCH_FIELDS),
                ("startAt", start_at.as_str()),
                ("maxResults", max_results.as_str()),
            ],
        )
        .map_err(|e| bridge_error!(ConfigError, "Invalid Jira search URL: {}", e))
    }

    pub fn qa_in_progress_transition_url(&self, issue_key: &str) -> String {
        format!("{}{}/{}/transitions", self.base_url(), ISSUE_PATH, issue_key)
    }

    pub fn qa_in_progress_transition_body(&self) -> TransitionRequest {
        TransitionRequest::to(self.qa_in_progress_transition_id.as_str())
    }

    pub fn issue_url(&self, issue_key: &str) -> String {
        format!("{}{}/{}", self.base_url(), BROWSE_PATH, issue_key)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Apply overrides, looking each variable up through `lookup`.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_JIRA_URL) {
            self.jira_url = url;
        }
        if let Some(username) = lookup(ENV_JIRA_USERNAME) {
            self.username = Some(username);
        }
        if let Some(password) = lookup(ENV_JIRA_PASSWORD) {
            self.password = Some(password);
        }
    }

    pub fn validate(&self) -> BridgeResult<()> {
        if self.jira_url.trim().is_empty() {
            return Err(bridge_error!(
                ConfigError,
                "jira_url is not set. Set {} or add it to ~/{}",
                ENV_JIRA_URL,
                CONFIG_FILE
            ));
        }

        let url = Url::parse(&self.jira_url).map_err(|e| {
            bridge_error!(ConfigError, "Invalid jira_url '{}': {}", self.jira_url, e)
        })?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(bridge_error!(
                ConfigError,
                "jira_url must use http or https, got '{}'",
                url.scheme()
            ));
        }

        if !self.ready_for_qa_jql.contains(APP_VERSION_PLACEHOLDER) {
            return Err(bridge_error!(
                ConfigError,
                "ready_for_qa_jql must contain {}",
                APP_VERSION_PLACEHOLDER
            ));
        }

        if self.qa_in_progress_transition_id.trim().is_empty() {
            return Err(bridge_error!(ConfigError, "qa_in_progress_transition_id is empty"));
        }

        // reqwest treats a zero timeout as "expire immediately".
        if self.request_timeout_secs == 0 {
            return Err(bridge_error!(ConfigError, "request_timeout_secs must be at least 1"));
        }

        if self.search_page_size == 0 {
            return Err(bridge_error!(ConfigError, "search_page_size must be at least 1"));
        }

        Ok(())
    }

    /// Copy safe to print.
    pub fn redacted(&self) -> Self {
        Config {
            password: self.password.as_ref().map(|_| "********".to_string()),
            ..self.clone()
        }
    }
}

// JQL string literals are double-quoted with backslash escapes.
fn escape_jql_string(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

pub fn default_config_path() -> BridgeResult<PathBuf> {
    let home_dir = dirs::home_dir().context("Could not find home directory")?;
    Ok(home_dir.join(CONFIG_FILE))
}

/// Read the config file (or defaults when it does not exist) and apply
/// environment overrides.
pub fn load_config(path: Option<&Path>) -> BridgeResult<Config> {
    let config_path = match path {
        Some(path) => path.to_path_buf(),
        None => default_config_path()?,
    };

    let mut config = read_config_file(&config_path)?;
    config.apply_overrides(|key| env::var(key).ok());

    Ok(config)
}

pub fn read_config_file(path: &Path) -> BridgeResult<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let config_str = fs::read_to_string(path)?;
    serde_json::from_str(&config_str)
        .map_err(|e| bridge_error!(ConfigError, "Failed to parse {}: {}", path.display(), e))
}
