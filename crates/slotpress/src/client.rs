use crate::config::ClientConfig;
use crate::prelude::*;
use log::debug;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use slotpress_core::raw::{articles_from_body, RawCollection};
use std::future::Future;
use std::path::PathBuf;

/// Anything that can hand over a raw article collection
pub trait ArticleSource: Send + Sync {
    fn fetch(
        &self,
        endpoint: &str,
        params: &[(String, String)],
    ) -> impl Future<Output = Result<RawCollection>> + Send;
}

/// HTTP client for the article API
///
/// Built explicitly from a [`ClientConfig`] and passed to whoever needs it.
#[derive(Debug, Clone)]
pub struct ArticleClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl ArticleClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_static("application/x-www-form-urlencoded"),
        );

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()
            .map_err(|e| eyre!("Failed to build HTTP client: {}", e))?;

        Ok(Self { http, config })
    }

    pub fn url_for(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }
}

impl ArticleSource for ArticleClient {
    async fn fetch(&self, endpoint: &str, params: &[(String, String)]) -> Result<RawCollection> {
        let url = self.url_for(endpoint);
        let query: Vec<(String, String)> = self
            .config
            .default_params
            .iter()
            .chain(params.iter())
            .cloned()
            .collect();

        debug!("GET {} with {} query parameter(s)", url, query.len());

        let response = self
            .http
            .get(&url)
            .query(&query)
            .send()
            .await
            .map_err(|e| Error::Network(f!("{url}: {e}")))?;

        if !response.status().is_success() {
            return Err(Error::InvalidResponse {
                url,
                reason: f!("HTTP {}", response.status()),
            }
            .into());
        }

        let body: serde_json::Value = response.json().await.map_err(|e| Error::InvalidResponse {
            url: url.clone(),
            reason: f!("body is not JSON: {e}"),
        })?;

        Ok(articles_from_body(body).map_err(Error::from)?)
    }
}

/// Reads responses from a directory instead of the network
///
/// `endpoint` is resolved as a file path under `root`; query parameters are
/// ignored.
#[derive(Debug, Clone)]
pub struct FileSource {
    root: PathBuf,
}

impl FileSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl ArticleSource for FileSource {
    async fn fetch(&self, endpoint: &str, _params: &[(String, String)]) -> Result<RawCollection> {
        let path = self.root.join(endpoint.trim_start_matches('/'));
        debug!("reading articles from {}", path.display());

        let text = tokio::fs::read_to_string(&path)
            .await
            .with_context(|| f!("Failed to read {}", path.display()))?;
        let body: serde_json::Value = serde_json::from_str(&text)
            .with_context(|| f!("Failed to parse {}", path.display()))?;

        Ok(articles_from_body(body).map_err(Error::from)?)
    }
}
