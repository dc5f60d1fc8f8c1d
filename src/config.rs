use std::env;
use std::time::Duration;

use anyhow::{Context, Result};

pub const DEFAULT_BASE_URL: &str = "https://api.keepcom.cn/api";

const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_LOGIN_PREVIEW: usize = 500;
const DEFAULT_PROBE_PREVIEW: usize = 1000;

/// Configuration for a smoke-probe run
#[derive(Debug, Clone)]
pub struct ProbeConfig {
    /// API root all endpoint paths are appended to (no trailing slash)
    pub base_url: String,
    pub username: String,
    pub password: String,
    /// Per-request timeout for every HTTP call
    pub timeout: Duration,
    /// Max characters of the login response body shown in the transcript
    pub login_preview: usize,
    /// Max characters of each probe response body shown in the transcript
    pub probe_preview: usize,
}

impl ProbeConfig {
    /// Build a config from the environment.
    ///
    /// Credentials are required; everything else falls back to defaults:
    /// - `KEEPCOM_USERNAME` / `KEEPCOM_PASSWORD` (required)
    /// - `KEEPCOM_BASE_URL` (default: the production API root)
    /// - `KEEPCOM_TIMEOUT_SECS` (default: 30)
    /// - `KEEPCOM_LOGIN_PREVIEW` / `KEEPCOM_PROBE_PREVIEW` (default: 500 / 1000)
    pub fn from_env() -> Result<Self> {
        let username =
            env::var("KEEPCOM_USERNAME").context("KEEPCOM_USERNAME env var not set")?;
        let password =
            env::var("KEEPCOM_PASSWORD").context("KEEPCOM_PASSWORD env var not set")?;

        let base_url = env::var("KEEPCOM_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let timeout_secs = env::var("KEEPCOM_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        let login_preview = env::var("KEEPCOM_LOGIN_PREVIEW")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_LOGIN_PREVIEW);

        let probe_preview = env::var("KEEPCOM_PROBE_PREVIEW")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_PROBE_PREVIEW);

        Ok(Self {
            base_url,
            username,
            password,
            timeout: Duration::from_secs(timeout_secs),
            login_preview,
            probe_preview,
        })
    }

    /// Override the base URL, trimming any trailing slash.
    pub fn set_base_url(&mut self, base_url: &str) {
        self.base_url = base_url.trim_end_matches('/').to_string();
    }
}
