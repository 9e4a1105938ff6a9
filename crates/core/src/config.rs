use reqwest::Url;

use crate::error::{AuthError, ConfigError};

pub const DEFAULT_WEBHOOK_URL: &str = "https://rosip.app.n8n.cloud/webhook/youtube";

pub const WEBHOOK_URL_ENV: &str = "TUBESUM_WEBHOOK_URL";
pub const NHOST_SUBDOMAIN_ENV: &str = "NHOST_SUBDOMAIN";
pub const NHOST_REGION_ENV: &str = "NHOST_REGION";
pub const NHOST_AUTH_URL_ENV: &str = "NHOST_AUTH_URL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NhostConfig {
    pub subdomain: String,
    pub region: String,
    /// Explicit auth base URL, takes precedence over subdomain/region.
    pub auth_url: Option<String>,
}

impl NhostConfig {
    /// Base URL of the auth service, without a trailing slash.
    pub fn auth_base_url(&self) -> Result<String, AuthError> {
        if let Some(url) = &self.auth_url {
            return Ok(url.trim_end_matches('/').to_string());
        }

        if self.subdomain.is_empty() {
            return Err(AuthError::MissingConfig {
                env_var: NHOST_SUBDOMAIN_ENV.to_string(),
            });
        }

        if self.subdomain == "local" {
            return Ok("https://local.auth.nhost.run/v1".to_string());
        }

        if self.region.is_empty() {
            return Err(AuthError::MissingConfig {
                env_var: NHOST_REGION_ENV.to_string(),
            });
        }

        Ok(format!(
            "https://{}.auth.{}.nhost.run/v1",
            self.subdomain, self.region
        ))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub webhook_url: String,
    pub nhost: NhostConfig,
}

impl Config {
    /// Read configuration from the process environment.
    ///
    /// - `TUBESUM_WEBHOOK_URL`: summarization webhook, defaults to the hosted one
    /// - `NHOST_SUBDOMAIN` / `NHOST_REGION`: auth service identifiers, empty when unset
    /// - `NHOST_AUTH_URL`: overrides the URL derived from subdomain and region
    pub fn from_env() -> Result<Self, ConfigError> {
        let webhook_url = std::env::var(WEBHOOK_URL_ENV)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_WEBHOOK_URL.to_string());

        let config = Self {
            webhook_url,
            nhost: NhostConfig {
                subdomain: std::env::var(NHOST_SUBDOMAIN_ENV).unwrap_or_default(),
                region: std::env::var(NHOST_REGION_ENV).unwrap_or_default(),
                auth_url: std::env::var(NHOST_AUTH_URL_ENV)
                    .ok()
                    .filter(|v| !v.trim().is_empty()),
            },
        };
        config.validate()?;
        Ok(config)
    }

    pub fn with_webhook_url(mut self, url: impl Into<String>) -> Result<Self, ConfigError> {
        self.webhook_url = url.into();
        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let parsed = Url::parse(&self.webhook_url).map_err(|e| ConfigError::InvalidEndpoint {
            url: self.webhook_url.clone(),
            reason: e.to_string(),
        })?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidEndpoint {
                url: self.webhook_url.clone(),
                reason: format!("unsupported scheme {}", parsed.scheme()),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
