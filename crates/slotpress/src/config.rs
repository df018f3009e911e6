use crate::prelude::*;
use std::time::Duration;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Settings for the article API client
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
    /// Sent with every request, before per-request parameters
    pub default_params: Vec<(String, String)>,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into();
        validate_base_url(&base_url)?;

        Ok(Self {
            base_url,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            default_params: Vec::new(),
        })
    }

    /// Load configuration from environment variables
    ///
    /// `SLOTPRESS_BASE_URL` is required. `SLOTPRESS_TIMEOUT` (seconds) and
    /// `SLOTPRESS_PARAMS` (comma separated `key=value` pairs) are optional.
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var("SLOTPRESS_BASE_URL")
            .map_err(|_| Error::Config("SLOTPRESS_BASE_URL environment variable not set".into()))?;
        let mut config = Self::new(base_url)?;

        if let Ok(raw) = std::env::var("SLOTPRESS_TIMEOUT") {
            let secs = raw
                .trim()
                .parse::<u64>()
                .map_err(|_| Error::Config(f!("SLOTPRESS_TIMEOUT must be a number of seconds, got {raw}")))?;
            config.timeout = Duration::from_secs(secs);
        }

        if let Ok(raw) = std::env::var("SLOTPRESS_PARAMS") {
            config = config.with_params(parse_params_list(&raw)?);
        }

        Ok(config)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_params(mut self, params: Vec<(String, String)>) -> Self {
        self.default_params = params;
        self
    }
}

fn validate_base_url(base_url: &str) -> Result<()> {
    if base_url.trim().is_empty() {
        return Err(Error::Config("base URL cannot be empty".into()).into());
    }

    let url = reqwest::Url::parse(base_url)
        .map_err(|e| Error::Config(f!("invalid base URL {base_url}: {e}")))?;

    match url.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(Error::Config(f!("unsupported URL scheme: {scheme}")).into()),
    }
}

/// Parse a `key=value` query parameter
pub fn parse_param(raw: &str) -> std::result::Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(f!("expected key=value, got `{raw}`")),
    }
}

/// Parse a comma separated list of `key=value` pairs, skipping blanks
pub fn parse_params_list(raw: &str) -> Result<Vec<(String, String)>> {
    raw.split(',')
        .map(str::trim)
        .filter(|pair| !pair.is_empty())
        .map(|pair| parse_param(pair).map_err(|e| Error::Config(f!("SLOTPRESS_PARAMS: {e}")).into()))
        .collect()
}
