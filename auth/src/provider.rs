use crate::config::OpenIdConfig;
use crate::errors::{MetadataError, Result};
use crate::metadata::ProviderMetadata;
use crate::scopes::configured_scopes;
use micromegas_tracing::prelude::*;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::OnceCell;

/// Path of the discovery document, relative to the issuer URI
pub const WELL_KNOWN_PATH: &str = "/.well-known/openid-configuration";

const FETCH_TIMEOUT: Duration = Duration::from_secs(10);
const MAX_REDIRECTS: usize = 5;

/// Discovery document URL for an issuer, without a doubled slash
pub fn well_known_url(issuer_uri: &str) -> String {
    format!("{}{WELL_KNOWN_PATH}", issuer_uri.trim_end_matches('/'))
}

/// Create HTTP client for a single metadata fetch
fn create_http_client(insecure_skip_verify_tls: bool) -> Result<reqwest::Client> {
    reqwest::ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
        .timeout(FETCH_TIMEOUT)
        .danger_accept_invalid_certs(insecure_skip_verify_tls)
        .build()
        .map_err(MetadataError::HttpClient)
}

/// Download, decode and validate the discovery document of the configured issuer
async fn fetch_metadata(config: &OpenIdConfig) -> Result<ProviderMetadata> {
    let url = well_known_url(&config.issuer_uri);
    debug!("fetching OpenId metadata from {url}");

    let http_client = create_http_client(config.insecure_skip_verify_tls)?;
    let response = http_client
        .get(&url)
        .send()
        .await
        .map_err(MetadataError::Transport)?;

    let status = response.status();
    if status != reqwest::StatusCode::OK {
        return Err(MetadataError::HttpStatus(status.to_string()));
    }

    let raw = response.bytes().await.map_err(MetadataError::BodyRead)?;
    let metadata = ProviderMetadata::from_json(&raw)?;

    for warning in metadata.validate(config)? {
        warn!("{warning}");
    }

    info!("OpenId metadata of {} validated", config.issuer_uri);
    Ok(metadata)
}

/// OpenID identity provider
///
/// Owns the configuration and the metadata cache. The metadata is fetched on
/// first use and kept for the lifetime of the provider. Concurrent callers on
/// a cold cache wait on a single fetch. A failed fetch leaves the cache empty
/// and the next call tries again.
pub struct OpenIdProvider {
    config: OpenIdConfig,
    metadata: OnceCell<Arc<ProviderMetadata>>,
}

impl std::fmt::Debug for OpenIdProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenIdProvider")
            .field("issuer_uri", &self.config.issuer_uri)
            .field("metadata_cached", &self.metadata.initialized())
            .finish()
    }
}

impl OpenIdProvider {
    pub fn new(config: OpenIdConfig) -> Self {
        Self {
            config,
            metadata: OnceCell::new(),
        }
    }

    pub fn config(&self) -> &OpenIdConfig {
        &self.config
    }

    /// Scopes to request during login, `openid` included
    pub fn configured_scopes(&self) -> Vec<String> {
        configured_scopes(&self.config)
    }

    /// Get the provider metadata, fetching it from the issuer if not cached
    pub async fn metadata(&self) -> Result<Arc<ProviderMetadata>> {
        self.metadata
            .get_or_try_init(|| async { fetch_metadata(&self.config).await.map(Arc::new) })
            .await
            .cloned()
    }

    /// Cached metadata, if a fetch already succeeded
    pub fn cached_metadata(&self) -> Option<Arc<ProviderMetadata>> {
        self.metadata.get().cloned()
    }
}
