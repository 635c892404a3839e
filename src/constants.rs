pub const APP_NAME: &str = "jira-qa-bridge";
pub const CONFIG_FILE: &str = ".jira-qa-bridge.json";

// Inbound routes
pub const STATUS_CHANGE_ROUTE: &str = "/issues/status/change";
pub const HEALTH_ROUTE: &str = "/health";
pub const APP_VERSION_PARAM: &str = "app_version";

// Jira REST endpoints, relative to the configured base URL
pub const SESSION_PATH: &str = "/rest/auth/1/session";
pub const SEARCH_PATH: &str = "/rest/api/2/search";
pub const ISSUE_PATH: &str = "/rest/api/2/issue";
pub const BROWSE_PATH: &str = "/browse";
pub const SEARCH_FIELDS: &str = "summary";

pub const APP_VERSION_PLACEHOLDER: &str = "{app_version}";
pub const DEFAULT_READY_FOR_QA_JQL: &str =
    r#"fixVersion = "{app_version}" AND status = "Ready for QA""#;
pub const DEFAULT_QA_IN_PROGRESS_TRANSITION_ID: &str = "31";
pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_SEARCH_PAGE_SIZE: u32 = 50;

// Environment overrides
pub const ENV_JIRA_URL: &str = "JIRA_URL";
pub const ENV_JIRA_USERNAME: &str = "JIRA_USERNAME";
pub const ENV_JIRA_PASSWORD: &str = "JIRA_PASSWORD";
