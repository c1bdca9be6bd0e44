//! Environment variable expansion for configuration strings.

use crate::ConfigError;

/// Expand environment references in a configuration string.
///
/// Strings without a `${` are returned as-is, so literal dollar signs in URLs
/// and tokens survive. Once a string contains `${`, every reference in it is
/// expanded, bare `$VAR` included, and `${VAR:-default}` falls back to
/// `default` when `VAR` is unset. Any other unset variable is an error naming
/// `field`.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    let expanded = shellexpand::env_with_context(value, lookup).map_err(|e| ConfigError::EnvVar {
        field: field.to_owned(),
        message: format!("${{{}}} not set", e.cause),
    })?;
    Ok(expanded.into_owned())
}

/// Resolve one variable; the error carries the missing name.
fn lookup(name: &str) -> Result<Option<String>, String> {
    std::env::var(name).map(Some).map_err(|_| name.to_owned())
}
