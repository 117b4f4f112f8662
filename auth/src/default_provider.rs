//! Default OpenID provider initialization from the environment.

use crate::config::{OPENID_AUTH_CONFIG_ENV, OpenIdConfig};
use crate::provider::OpenIdProvider;
use micromegas_tracing::info;

/// Initializes the OpenID provider from the `OPENID_AUTH_CONFIG` environment variable.
///
/// Returns `Ok(None)` if the variable is not set (OpenID auth disabled).
/// Returns `Err` if the variable is set but cannot be parsed.
///
/// The metadata is not fetched here; the first call to
/// [`OpenIdProvider::metadata`] does it.
///
/// # Example
///
/// ```rust,no_run
/// use openid_discovery::default_provider::provider;
///
/// # async fn example() -> anyhow::Result<()> {
/// if let Some(provider) = provider()? {
///     let metadata = provider.metadata().await?;
///     println!("authorization endpoint: {}", metadata.authorization_endpoint);
/// }
/// # Ok(())
/// # }
/// ```
pub fn provider() -> anyhow::Result<Option<OpenIdProvider>> {
    if std::env::var_os(OPENID_AUTH_CONFIG_ENV).is_none() {
        info!("{OPENID_AUTH_CONFIG_ENV} not set - OpenID auth disabled");
        return Ok(None);
    }
    let config = OpenIdConfig::from_env()?;
    info!("OpenID auth enabled for issuer {}", config.issuer_uri);
    Ok(Some(OpenIdProvider::new(config)))
}
