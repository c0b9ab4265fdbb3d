//! Authenticated client for the tranSMART REST API.

use async_trait::async_trait;
use reqwest::{header, Client, Response, StatusCode};
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::config::UpstreamConfig;
use crate::error::{Result, UpstreamError};

/// Read access to study metadata.
#[async_trait]
pub trait StudyProvider: Send + Sync {
    /// Fetch all studies (`None`) or a single study by identifier.
    async fn fetch_studies(&self, study_id: Option<&str>) -> Result<Value>;
}

/// tranSMART REST client with a lazily acquired bearer token.
///
/// The token is obtained once via a password-grant exchange and reused for
/// the process lifetime. Under a first-use race the first writer wins; a
/// duplicate exchange is idempotent per credential.
pub struct TransmartClient {
    http: Client,
    base_url: String,
    username: String,
    password: String,
    client_id: String,
    token: RwLock<Option<String>>,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

impl TransmartClient {
    /// Create a client from configuration.
    pub fn from_config(config: &UpstreamConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(UpstreamError::Request)?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            username: config.username.clone(),
            password: config.password.clone(),
            client_id: config.client_id.clone(),
            token: RwLock::new(None),
        })
    }

    fn studies_url(&self, study_id: Option<&str>) -> String {
        match study_id {
            Some(id) => format!("{}/v1/studies/{}", self.base_url, id),
            None => format!("{}/v1/studies", self.base_url),
        }
    }

    async fn ensure_token(&self) -> Result<String> {
        if let Some(token) = self.token.read().await.clone() {
            return Ok(token);
        }
        let token = self.exchange_credentials().await?;
        *self.token.write().await = Some(token.clone());
        Ok(token)
    }

    async fn invalidate_token(&self) {
        *self.token.write().await = None;
    }

    async fn exchange_credentials(&self) -> Result<String> {
        debug!("Requesting access token from {}", self.base_url);
        let params = [
            ("grant_type", "password"),
            ("client_id", self.client_id.as_str()),
            ("client_secret", ""),
            ("username", self.username.as_str()),
            ("password", self.password.as_str()),
        ];
        let response = self
            .http
            .post(format!("{}/oauth/token", self.base_url))
            .form(&params)
            .send()
            .await
            .map_err(UpstreamError::Request)?;

        if !response.status().is_success() {
            return Err(
                UpstreamError::Token(format!("token endpoint answered {}", response.status()))
                    .into(),
            );
        }
        let body: TokenResponse = response
            .json()
            .await
            .map_err(|e| UpstreamError::Decode(e.to_string()))?;
        Ok(body.access_token)
    }

    async fn get_json(&self, url: &str, token: &str) -> Result<Response> {
        self.http
            .get(url)
            .header(header::ACCEPT, "application/json;charset=UTF-8")
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| UpstreamError::Request(e).into())
    }

    async fn decode(response: Response) -> Result<Value> {
        let status = response.status();
        let url = response.url().to_string();
        if !status.is_success() {
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                url,
            }
            .into());
        }
        response
            .json()
            .await
            .map_err(|e| UpstreamError::Decode(e.to_string()).into())
    }
}

#[async_trait]
impl StudyProvider for TransmartClient {
    async fn fetch_studies(&self, study_id: Option<&str>) -> Result<Value> {
        let url = self.studies_url(study_id);
        let token = self.ensure_token().await?;
        let response = self.get_json(&url, &token).await?;

        // The cached token has no expiry handling; a 401 means it went stale.
        if response.status() == StatusCode::UNAUTHORIZED {
            warn!("Bearer token rejected by {}, re-authenticating", url);
            self.invalidate_token().await;
            let token = self.ensure_token().await?;
            let response = self.get_json(&url, &token).await?;
            return Self::decode(response).await;
        }
        Self::decode(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client() -> TransmartClient {
        let config = UpstreamConfig {
            base_url: "http://transmart.test/".to_string(),
            ..UpstreamConfig::default()
        };
        TransmartClient::from_config(&config).unwrap()
    }

    #[test]
    fn studies_url_with_and_without_id() {
        let client = test_client();
        assert_eq!(
            client.studies_url(None),
            "http://transmart.test/v1/studies"
        );
        assert_eq!(
            client.studies_url(Some("GSE8581")),
            "http://transmart.test/v1/studies/GSE8581"
        );
    }

    #[tokio::test]
    async fn token_cache_starts_empty_and_invalidates() {
        let client = test_client();
        assert!(client.token.read().await.is_none());
        *client.token.write().await = Some("abc".to_string());
        client.invalidate_token().await;
        assert!(client.token.read().await.is_none());
    }
}
