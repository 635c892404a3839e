use reqwest::Client;

use crate::config::Config;
use crate::error::{BridgeError, BridgeResult};
use crate::models::{LoginRequest, SessionCredential, SessionResponse};

/// Log into Jira with cookie-based auth and return the session cookie.
pub async fn acquire_session(client: &Client, config: &Config) -> BridgeResult<SessionCredential> {
    let (username, password) = match (config.username.as_deref(), config.password.as_deref()) {
        (Some(username), Some(password)) => (username, password),
        _ => {
            return Err(BridgeError::AuthenticationFailure(
                "Jira username and password are not configured".to_string(),
            ))
        }
    };

    let response = client
        .post(config.session_url())
        .json(&LoginRequest { username, password })
        .send()
        .await
        .map_err(|e| BridgeError::AuthenticationFailure(format!("Login request failed: {}", e)))?;

    if !response.status().is_success() {
        return Err(BridgeError::AuthenticationFailure(format!(
            "Login returned status {}",
            response.status()
        )));
    }

    let session: SessionResponse = response.json().await.map_err(|e| {
        BridgeError::AuthenticationFailure(format!("Malformed login response: {}", e))
    })?;

    Ok(SessionCredential::from(session.session))
}
