//! Constants and layered settings for the reporting client.
//!
//! Settings are resolved from, in increasing precedence: built-in defaults,
//! a JSON settings file, environment variables and command-line flags. The
//! last two layers are applied by the caller through [`Settings::merge`].

use crate::error::{AdsReportError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const API_BASE: &str = "https://googleads.googleapis.com";
pub const DEFAULT_API_VERSION: &str = "v20";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Upper bound on the number of ad groups in the report.
pub const REPORT_LIMIT: usize = 10;

pub const ENV_DEVELOPER_TOKEN: &str = "GOOGLE_ADS_DEVELOPER_TOKEN";
pub const ENV_CUSTOMER_ID: &str = "GOOGLE_ADS_CUSTOMER_ID";
pub const ENV_LOGIN_CUSTOMER_ID: &str = "GOOGLE_ADS_LOGIN_CUSTOMER_ID";
pub const ENV_ACCESS_TOKEN: &str = "GOOGLE_ADS_ACCESS_TOKEN";

const SETTINGS_FILE: &str = "settings.json";

/// Platform settings file location, e.g. `~/.config/ads-report/settings.json`
/// on Linux. Falls back to `.ads-report.json` in the working directory.
pub fn default_settings_path() -> PathBuf {
    if let Some(dir) = dirs::config_dir() {
        dir.join("ads-report").join(SETTINGS_FILE)
    } else {
        PathBuf::from(".ads-report.json")
    }
}

/// One layer of user-supplied settings. Every field is optional so layers can
/// be stacked with [`Settings::merge`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub developer_token: Option<String>,
    pub customer_id: Option<String>,
    pub login_customer_id: Option<String>,
    pub access_token: Option<String>,
    pub api_version: Option<String>,
    pub endpoint: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl Settings {
    /// Read a settings file. The file must exist.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            AdsReportError::Config(format!("cannot read settings file {}: {}", path.display(), e))
        })?;
        serde_json::from_str(&contents).map_err(|e| {
            AdsReportError::Config(format!("invalid settings file {}: {}", path.display(), e))
        })
    }

    /// Read the settings file at [`default_settings_path`], or return empty
    /// settings when there is none.
    pub fn load_default() -> Result<Self> {
        let path = default_settings_path();
        if path.exists() {
            tracing::debug!(path = %path.display(), "loading settings file");
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Overlay `overrides` on top of `self`; fields set in `overrides` win.
    pub fn merge(self, overrides: Settings) -> Settings {
        Settings {
            developer_token: overrides.developer_token.or(self.developer_token),
            customer_id: overrides.customer_id.or(self.customer_id),
            login_customer_id: overrides.login_customer_id.or(self.login_customer_id),
            access_token: overrides.access_token.or(self.access_token),
            api_version: overrides.api_version.or(self.api_version),
            endpoint: overrides.endpoint.or(self.endpoint),
            timeout_secs: overrides.timeout_secs.or(self.timeout_secs),
        }
    }

    /// Validate the merged settings and fill in defaults.
    pub fn resolve(self) -> Result<ClientConfig> {
        let developer_token = required(self.developer_token, "developer_token", ENV_DEVELOPER_TOKEN)?;
        let access_token = required(self.access_token, "access_token", ENV_ACCESS_TOKEN)?;
        let customer_id = normalize_customer_id(&required(
            self.customer_id,
            "customer_id",
            ENV_CUSTOMER_ID,
        )?)?;
        let login_customer_id = self
            .login_customer_id
            .filter(|s| !s.trim().is_empty())
            .map(|s| normalize_customer_id(&s))
            .transpose()?;

        let timeout_secs = self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS);
        if timeout_secs == 0 {
            return Err(AdsReportError::Config(
                "timeout_secs must be greater than zero".to_string(),
            ));
        }

        Ok(ClientConfig {
            developer_token,
            access_token,
            customer_id,
            login_customer_id,
            api_version: self
                .api_version
                .unwrap_or_else(|| DEFAULT_API_VERSION.to_string()),
            endpoint: self
                .endpoint
                .map(|e| e.trim_end_matches('/').to_string())
                .unwrap_or_else(|| API_BASE.to_string()),
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

fn required(value: Option<String>, field: &str, env: &str) -> Result<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v.trim().to_string()),
        _ => Err(AdsReportError::Config(format!(
            "missing {} (set it in the settings file, ${} or on the command line)",
            field, env
        ))),
    }
}

/// Strip dashes from a customer id and check it is ten digits.
///
/// `"123-456-7890"` becomes `"1234567890"`.
pub fn normalize_customer_id(raw: &str) -> Result<String> {
    let id: String = raw.trim().chars().filter(|c| *c != '-').collect();
    if id.len() != 10 || !id.chars().all(|c| c.is_ascii_digit()) {
        return Err(AdsReportError::Config(format!(
            "customer id '{}' must be ten digits",
            raw
        )));
    }
    Ok(id)
}

/// Fully resolved connection settings for [`GoogleAdsClient`](crate::client::GoogleAdsClient).
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub developer_token: String,
    pub access_token: String,
    pub customer_id: String,
    pub login_customer_id: Option<String>,
    pub api_version: String,
    pub endpoint: String,
    pub timeout: Duration,
}

impl ClientConfig {
    /// URL of the search method for the configured customer.
    pub fn search_url(&self) -> String {
        format!(
            "{}/{}/customers/{}/googleAds:search",
            self.endpoint, self.api_version, self.customer_id
        )
    }
}
