use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use survey_core::FormSnapshot;

use crate::{PersistenceGateway, StoreError};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Connection settings for the remote document store.
///
/// Credential material is deployment-provided; nothing here is read from the
/// core crates.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub base_url: String,
    pub auth_token: Option<String>,
    pub timeout: Duration,
}

impl StoreConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            auth_token: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_auth_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Gateway writing submissions to a Firebase-style REST document store:
/// `PUT {base_url}/{key}.json` with the serialized snapshot as the body.
#[derive(Debug, Clone)]
pub struct RestGateway {
    http: Client,
    config: StoreConfig,
}

impl RestGateway {
    pub fn new(config: StoreConfig) -> Result<Self, StoreError> {
        let http = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { http, config })
    }

    fn document_url(&self, key: &str) -> String {
        format!("{}/{}.json", self.config.base_url.trim_end_matches('/'), key)
    }
}

#[async_trait]
impl PersistenceGateway for RestGateway {
    async fn put(&self, key: &str, snapshot: &FormSnapshot) -> Result<(), StoreError> {
        let url = self.document_url(key);
        tracing::debug!(%key, %url, "writing survey submission");

        let mut request = self.http.put(url).json(snapshot);
        if let Some(token) = &self.config.auth_token {
            request = request.query(&[("auth", token.as_str())]);
        }

        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(StoreError::Rejected {
                key: key.to_string(),
                status: status.as_u16(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_url_joins_base_key_and_extension() {
        let gateway = RestGateway::new(StoreConfig::new("https://example.test/db/"))
            .expect("client builds");
        assert_eq!(
            gateway.document_url("surveys/123"),
            "https://example.test/db/surveys/123.json"
        );
    }
}
