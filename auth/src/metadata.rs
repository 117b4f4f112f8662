use crate::config::OpenIdConfig;
use crate::errors::{MetadataError, Result};
use crate::scopes::configured_scopes;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Decodes `null` as the default value, like a missing key
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Decoded `/.well-known/openid-configuration` document
///
/// Every key is optional on the wire. Missing or `null` strings decode as
/// empty, missing or `null` lists as empty lists, and unknown keys are
/// ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderMetadata {
    #[serde(default, deserialize_with = "null_as_default")]
    pub issuer: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub authorization_endpoint: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_endpoint: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jwks_uri: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub userinfo_endpoint: Option<String>,
    /// Supported ID token signing algorithms
    #[serde(default, deserialize_with = "null_as_default")]
    pub id_token_signing_alg_values_supported: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub scopes_supported: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub response_types_supported: Vec<String>,
}

/// Non-fatal finding about the provider metadata
///
/// A real incompatibility surfaces when the user tries to log in, so these
/// are only logged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetadataWarning {
    /// `response_types_supported` does not mention `id_token`
    IdTokenResponseTypeUnsupported,
    /// The first configured scope missing from `scopes_supported`
    ScopesUnsupported { scope: String },
}

impl fmt::Display for MetadataWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetadataWarning::IdTokenResponseTypeUnsupported => write!(
                f,
                "Configured OpenID provider informs response_type=id_token is unsupported. Users may not be able to login."
            ),
            MetadataWarning::ScopesUnsupported { scope } => write!(
                f,
                "Configured OpenID provider informs some of the configured scopes are unsupported (first unsupported scope: {scope}). Users may not be able to login."
            ),
        }
    }
}

impl ProviderMetadata {
    /// Parse a discovery document
    pub fn from_json(raw: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(raw)?)
    }

    /// Validate the document against the configuration
    ///
    /// `issuer` must be identical to the configured issuer URI, trailing
    /// slash included: only the request URL gets its trailing slashes
    /// trimmed. The returned warnings are advisory.
    pub fn validate(&self, config: &OpenIdConfig) -> Result<Vec<MetadataWarning>> {
        if self.issuer != config.issuer_uri {
            return Err(MetadataError::IssuerMismatch {
                configured: config.issuer_uri.clone(),
                exposed: self.issuer.clone(),
            });
        }

        if self.authorization_endpoint.is_empty() {
            return Err(MetadataError::MissingAuthorizationEndpoint);
        }

        let mut warnings = Vec::new();

        // substring match, "code id_token" counts
        if !self.response_types_supported.join(" ").contains("id_token") {
            warnings.push(MetadataWarning::IdTokenResponseTypeUnsupported);
        }

        if let Some(scope) = configured_scopes(config)
            .into_iter()
            .find(|scope| !self.scopes_supported.contains(scope))
        {
            warnings.push(MetadataWarning::ScopesUnsupported { scope });
        }

        Ok(warnings)
    }
}
