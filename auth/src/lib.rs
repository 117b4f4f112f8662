//! OpenID Connect provider metadata discovery
//!
//! Fetches the `/.well-known/openid-configuration` document of a single
//! identity provider, validates it against the configuration and caches it
//! for the lifetime of the [`provider::OpenIdProvider`]. Also computes the
//! scopes to request during login.
//!
//! # Example
//!
//! ```rust,no_run
//! use openid_discovery::config::OpenIdConfig;
//! use openid_discovery::provider::OpenIdProvider;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = OpenIdConfig::new("https://accounts.google.com").with_scopes(["email"]);
//! let provider = OpenIdProvider::new(config);
//!
//! // ["email", "openid"]
//! let scopes = provider.configured_scopes();
//!
//! // first call hits the network, later calls use the cache
//! let metadata = provider.metadata().await?;
//! println!("login at {} with scopes {scopes:?}", metadata.authorization_endpoint);
//! # Ok(())
//! # }
//! ```

/// Identity provider configuration
pub mod config;

/// Errors returned while fetching the provider metadata
pub mod errors;

/// Discovery document and its validation
pub mod metadata;

/// Effective login scopes
pub mod scopes;

/// Metadata fetch and cache
pub mod provider;

/// Provider initialization from the environment
pub mod default_provider;
