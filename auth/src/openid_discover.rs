//! OpenID discovery CLI
//!
//! Fetches and validates the discovery document of an identity provider and
//! prints it along with the scopes a login would request.

use anyhow::{Context, Result};
use clap::Parser;
use micromegas_telemetry_sink::TelemetryGuardBuilder;
use micromegas_tracing::levels::LevelFilter;
use openid_discovery::config::OpenIdConfig;
use openid_discovery::provider::OpenIdProvider;

#[derive(Parser, Debug)]
#[clap(name = "openid-discover")]
#[clap(about = "Fetch and validate OpenID provider metadata", version, author)]
struct Cli {
    /// Issuer URI, read from OPENID_AUTH_CONFIG when omitted
    #[clap(long)]
    issuer_uri: Option<String>,

    /// Scope to request, can be repeated
    #[clap(long = "scope")]
    scopes: Vec<String>,

    /// Accept invalid TLS certificates
    #[clap(long)]
    insecure_skip_verify_tls: bool,
}

impl Cli {
    fn into_config(self) -> Result<OpenIdConfig> {
        let base = match &self.issuer_uri {
            Some(issuer_uri) => OpenIdConfig::new(issuer_uri.clone()),
            None => OpenIdConfig::from_env().with_context(|| "no --issuer-uri given")?,
        };
        Ok(self.merge_into(base))
    }

    /// Command line flags take precedence over the given configuration
    fn merge_into(self, mut config: OpenIdConfig) -> OpenIdConfig {
        if let Some(issuer_uri) = self.issuer_uri {
            config.issuer_uri = issuer_uri;
        }
        if !self.scopes.is_empty() {
            config.scopes = self.scopes;
        }
        config.insecure_skip_verify_tls |= self.insecure_skip_verify_tls;
        config
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let _telemetry_guard = TelemetryGuardBuilder::default()
        .with_local_sink_max_level(LevelFilter::Info)
        .build();

    let args = Cli::parse();
    let provider = OpenIdProvider::new(args.into_config()?);
    let metadata = provider
        .metadata()
        .await
        .with_context(|| format!("discovering {}", provider.config().issuer_uri))?;

    let json = serde_json::to_string_pretty(metadata.as_ref())
        .with_context(|| "serializing provider metadata")?;
    println!("{json}");
    println!("scopes: {}", provider.configured_scopes().join(" "));
    Ok(())
}
