use crate::config::OpenIdConfig;

/// Scope every OpenID Connect login must request
pub const OPENID_SCOPE: &str = "openid";

/// Returns the configured scopes, appending `openid` if it is missing.
///
/// The match is case-sensitive. A list already containing `openid` anywhere
/// is returned as is, in the same order.
pub fn configured_scopes(config: &OpenIdConfig) -> Vec<String> {
    let mut scopes = config.scopes.clone();
    if !scopes.iter().any(|s| s == OPENID_SCOPE) {
        scopes.push(OPENID_SCOPE.to_string());
    }
    scopes
}
