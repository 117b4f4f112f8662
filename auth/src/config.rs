use anyhow::{Result, anyhow};
use serde::Deserialize;

/// Environment variable holding the JSON configuration of the identity provider
pub const OPENID_AUTH_CONFIG_ENV: &str = "OPENID_AUTH_CONFIG";

/// OpenID identity provider configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OpenIdConfig {
    /// Issuer URI (e.g., <https://accounts.google.com>)
    pub issuer_uri: String,
    /// Scopes to request during login, in order
    #[serde(default)]
    pub scopes: Vec<String>,
    /// Accept invalid TLS certificates when fetching the provider metadata
    #[serde(default)]
    pub insecure_skip_verify_tls: bool,
}

impl OpenIdConfig {
    pub fn new(issuer_uri: impl Into<String>) -> Self {
        Self {
            issuer_uri: issuer_uri.into(),
            scopes: Vec::new(),
            insecure_skip_verify_tls: false,
        }
    }

    #[must_use]
    pub fn with_scopes<I, S>(mut self, scopes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.scopes = scopes.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_insecure_skip_verify_tls(mut self, insecure: bool) -> Self {
        self.insecure_skip_verify_tls = insecure;
        self
    }

    /// Load the configuration from the `OPENID_AUTH_CONFIG` environment variable
    pub fn from_env() -> Result<Self> {
        let json = std::env::var(OPENID_AUTH_CONFIG_ENV)
            .map_err(|_| anyhow!("{OPENID_AUTH_CONFIG_ENV} environment variable not set"))?;
        let config: OpenIdConfig = serde_json::from_str(&json)
            .map_err(|e| anyhow!("Failed to parse {OPENID_AUTH_CONFIG_ENV}: {e:?}"))?;
        Ok(config)
    }
}
