#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;

use jira_qa_bridge::Config;

pub const SESSION_COOKIE: &str = "JSESSIONID=fake-session";

/// One call received by the fake Jira.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub method: &'static str,
    pub path: String,
    pub cookie: Option<String>,
    pub jql: Option<String>,
    pub body: Option<Value>,
}

#[derive(Clone, Default)]
pub struct FakeJira {
    calls: Arc<Mutex<Vec<RecordedCall>>>,
    issues: Arc<Vec<(String, String)>>,
    reject_login: bool,
    fail_search: bool,
    malformed_search: bool,
    failing_transitions: Arc<HashSet<String>>,
}

impl FakeJira {
    pub fn with_issues(issues: &[(&str, &str)]) -> Self {
        Self {
            issues: Arc::new(
                issues
                    .iter()
                    .map(|(key, summary)| (key.to_string(), summary.to_string()))
                    .collect(),
            ),
            ..Self::default()
        }
    }

    pub fn rejecting_login(mut self) -> Self {
        self.reject_login = true;
        self
    }

    pub fn failing_search(mut self) -> Self {
        self.fail_search = true;
        self
    }

    pub fn malformed_search(mut self) -> Self {
        self.malformed_search = true;
        self
    }

    pub fn failing_transitions(mut self, keys: &[&str]) -> Self {
        self.failing_transitions = Arc::new(keys.iter().map(|k| k.to_string()).collect());
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn transition_calls(&self) -> Vec<RecordedCall> {
        self.calls()
            .into_iter()
            .filter(|c| c.path.ends_with("/transitions"))
            .collect()
    }

    pub fn transitioned_keys(&self) -> Vec<String> {
        self.transition_calls()
            .iter()
            .map(|c| {
                c.path
                    .trim_start_matches("/rest/api/2/issue/")
                    .trim_end_matches("/transitions")
                    .to_string()
            })
            .collect()
    }

    pub fn search_calls(&self) -> Vec<RecordedCall> {
        self.calls()
            .into_iter()
            .filter(|c| c.path == "/rest/api/2/search")
            .collect()
    }

    fn record(&self, call: RecordedCall) {
        self.calls.lock().unwrap().push(call);
    }

    pub fn router(self) -> Router {
        Router::new()
            .route("/rest/auth/1/session", post(login))
            .route("/rest/api/2/search", get(search))
            .route("/rest/api/2/issue/:key/transitions", post(transition))
            .with_state(self)
    }
}

fn cookie(headers: &HeaderMap) -> Option<String> {
    headers
        .get("cookie")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

async fn login(State(jira): State<FakeJira>, Json(body): Json<Value>) -> Response {
    jira.record(RecordedCall {
        method: "POST",
        path: "/rest/auth/1/session".to_string(),
        cookie: None,
        jql: None,
        body: Some(body),
    });

    if jira.reject_login {
        return (StatusCode::UNAUTHORIZED, "Login failed").into_response();
    }

    Json(json!({
        "session": { "name": "JSESSIONID", "value": "fake-session" },
        "loginInfo": { "loginCount": 1 }
    }))
    .into_response()
}

async fn search(
    State(jira): State<FakeJira>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    jira.record(RecordedCall {
        method: "GET",
        path: "/rest/api/2/search".to_string(),
        cookie: cookie(&headers),
        jql: params.get("jql").cloned(),
        body: None,
    });

    if jira.fail_search {
        return (StatusCode::INTERNAL_SERVER_ERROR, "search exploded").into_response();
    }
    if jira.malformed_search {
        return (StatusCode::OK, "<html>not json</html>").into_response();
    }

    let start_at: usize = params.get("startAt").and_then(|v| v.parse().ok()).unwrap_or(0);
    let max_results: usize = params
        .get("maxResults")
        .and_then(|v| v.parse().ok())
        .unwrap_or(50);

    let issues: Vec<Value> = jira
        .issues
        .iter()
        .skip(start_at)
        .take(max_results)
        .map(|(key, summary)| json!({ "key": key, "fields": { "summary": summary } }))
        .collect();

    Json(json!({
        "startAt": start_at,
        "maxResults": max_results,
        "total": jira.issues.len(),
        "issues": issues
    }))
    .into_response()
}

async fn transition(
    State(jira): State<FakeJira>,
    Path(key): Path<String>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    jira.record(RecordedCall {
        method: "POST",
        path: format!("/rest/api/2/issue/{}/transitions", key),
        cookie: cookie(&headers),
        jql: None,
        body: Some(body),
    });

    if jira.failing_transitions.contains(&key) {
        return (StatusCode::INTERNAL_SERVER_ERROR, "transition failed").into_response();
    }

    StatusCode::NO_CONTENT.into_response()
}

/// Serve `router` on an ephemeral local port and return its base URL.
pub async fn spawn(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

pub fn config_for(jira_url: &str) -> Config {
    let mut config = Config::for_jira_url(jira_url);
    config.username = Some("qa-bot".to_string());
    config.password = Some("secret".to_string());
    config.request_timeout_secs = 5;
    config
}

/// Start the fake Jira and the bridge in front of it. Returns the bridge URL
/// and the Jira base URL.
pub async fn start_bridge(jira: FakeJira) -> (String, String) {
    start_bridge_with(jira, |_| {}).await
}

pub async fn start_bridge_with<F>(jira: FakeJira, customize: F) -> (String, String)
where
    F: FnOnce(&mut Config),
{
    let jira_url = spawn(jira.router()).await;
    let mut config = config_for(&jira_url);
    customize(&mut config);
    let bridge_url = spawn(jira_qa_bridge::router(Arc::new(config))).await;
    (bridge_url, jira_url)
}
