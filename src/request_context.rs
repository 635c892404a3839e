use std::sync::Arc;

use crate::client::{acquire_session, create_http_client, JiraClient};
use crate::config::Config;
use crate::error::{BridgeError, BridgeResult};
use crate::models::SessionCredential;

/// Per-request state threaded through the pipeline stages: the shared
/// configuration, one outbound HTTP client, and the Jira session once
/// acquired. Dropping the context releases the client.
pub struct RequestContext {
    config: Arc<Config>,
    http: reqwest::Client,
    credential: Option<SessionCredential>,
}

impl RequestContext {
    /// Create a context with a fresh client and no session
    pub fn new(config: Arc<Config>) -> BridgeResult<Self> {
        let http = create_http_client(&config)?;

        Ok(Self {
            config,
            http,
            credential: None,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Log into Jira unless a session is already held
    pub async fn authenticate(&mut self) -> BridgeResult<&SessionCredential> {
        if self.credential.is_none() {
            let credential = acquire_session(&self.http, &self.config).await?;
            self.credential = Some(credential);
        }

        self.credential()
    }

    pub fn credential(&self) -> BridgeResult<&SessionCredential> {
        self.credential.as_ref().ok_or_else(|| {
            BridgeError::AuthenticationFailure("No Jira session has been acquired".to_string())
        })
    }

    pub fn is_authenticated(&self) -> bool {
        self.credential.is_some()
    }

    /// Jira client bound to this request's session (requires `authenticate`)
    pub fn authenticated_client(&self) -> BridgeResult<JiraClient<'_>> {
        let credential = self.credential()?;
        Ok(JiraClient::new(&self.http, &self.config, credential))
    }
}

/// Builder for contexts with a preset client or session
pub struct RequestContextBuilder {
    config: Arc<Config>,
    http: Option<reqwest::Client>,
    credential: Option<SessionCredential>,
}

impl RequestContextBuilder {
    pub fn new(config: Arc<Config>) -> Self {
        Self {
            config,
            http: None,
            credential: None,
        }
    }

    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.http = Some(http);
        self
    }

    pub fn with_credential(mut self, credential: SessionCredential) -> Self {
        self.credential = Some(credential);
        self
    }

    pub fn build(self) -> BridgeResult<RequestContext> {
        let http = match self.http {
            Some(http) => http,
            None => create_http_client(&self.config)?,
        };

        Ok(RequestContext {
            config: self.config,
            http,
            credential: self.credential,
        })
    }
}
