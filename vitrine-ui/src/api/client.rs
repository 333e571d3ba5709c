//! HTTP Transport
//!
//! gloo-net implementation of the core [`Transport`] seam.

use async_trait::async_trait;
use gloo_net::http::Request;
use vitrine::{LoadError, LoadResult, Transport};

/// Default API base URL: same origin as the page
pub const DEFAULT_API_BASE: &str = "";

const STORAGE_KEY: &str = "vitrine_api_url";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = local_storage()
        .and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
    // Normalize: remove trailing slash
    url.trim().trim_end_matches('/').to_string()
}

/// Set the API base URL in local storage; blank restores the default
pub fn set_api_base(url: &str) {
    if let Some(storage) = local_storage() {
        let url = url.trim();
        let _ = if url.is_empty() {
            storage.remove_item(STORAGE_KEY)
        } else {
            storage.set_item(STORAGE_KEY, url)
        };
    }
}

/// Fetches endpoint bodies with the browser's fetch API
pub struct GlooTransport {
    base_url: String,
}

impl GlooTransport {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Transport pointed at the stored API base
    pub fn from_storage() -> Self {
        Self::new(get_api_base())
    }
}

#[async_trait(?Send)]
impl Transport for GlooTransport {
    async fn get(&self, path: &str) -> LoadResult<String> {
        let url = format!("{}{}", self.base_url, path);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| LoadError::Network(e.to_string()))?;

        if !response.ok() {
            let message = response.text().await.unwrap_or_default();
            return Err(LoadError::Status {
                status: response.status(),
                message,
            });
        }

        response
            .text()
            .await
            .map_err(|e| LoadError::Network(e.to_string()))
    }
}
