//! reqwest transport
//!
//! HTTP client for the native front ends.

use async_trait::async_trait;
use reqwest::Client;

use crate::api::Transport;
use crate::config::ApiConfig;
use crate::error::{LoadError, LoadResult};

/// [`Transport`] over a pooled reqwest client
pub struct HttpTransport {
    client: Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(config: &ApiConfig) -> LoadResult<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| LoadError::Network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

fn classify(e: reqwest::Error) -> LoadError {
    if e.is_timeout() {
        LoadError::Timeout
    } else {
        LoadError::Network(e.to_string())
    }
}

#[async_trait(?Send)]
impl Transport for HttpTransport {
    async fn get(&self, path: &str) -> LoadResult<String> {
        let url = self.url(path);
        tracing::debug!("GET {}", url);

        let response = self.client.get(&url).send().await.map_err(classify)?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(LoadError::Status {
                status: status.as_u16(),
                message,
            });
        }

        response.text().await.map_err(classify)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_normalized() {
        let config = ApiConfig {
            base_url: "http://localhost:5000/".to_string(),
            request_timeout_secs: 5,
        };
        let transport = HttpTransport::new(&config).unwrap();

        assert_eq!(transport.base_url(), "http://localhost:5000");
        assert_eq!(transport.url("/api/stats"), "http://localhost:5000/api/stats");
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_network_error() {
        let config = ApiConfig {
            base_url: "http://127.0.0.1:9".to_string(),
            request_timeout_secs: 2,
        };
        let transport = HttpTransport::new(&config).unwrap();

        let err = transport.get("/api/stats").await.unwrap_err();
        assert!(err.is_network());
    }
}
