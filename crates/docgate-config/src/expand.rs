//! Environment variable expansion for configuration values.
//!
//! Supports two forms inside a string value:
//!
//! - `${VAR}` - value of VAR, error if unset
//! - `${VAR:-default}` - value of VAR if set, otherwise the default
//!
//! Bare `$VAR` syntax is not expanded (only `${VAR}` with braces).

use crate::ConfigError;

/// Expand `${VAR}` / `${VAR:-default}` references in `value`.
///
/// `field` names the config field for error messages. Returns the original
/// string unchanged if no `${}` patterns are present.
///
/// # Errors
///
/// Returns `ConfigError::EnvVar` when a referenced variable is unset and
/// no default is given.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    // Fast path: no expansion needed
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    shellexpand::env_with_context(value, |var| -> Result<Option<String>, LookupError> {
        match std::env::var(var) {
            Ok(val) => Ok(Some(val)),
            Err(_) => Err(LookupError {
                var_name: var.to_owned(),
            }),
        }
    })
    .map(|cow| cow.into_owned())
    .map_err(|e| ConfigError::EnvVar {
        field: field.to_owned(),
        message: format!("${{{0}}} not set", e.cause.var_name),
    })
}

/// Error returned when environment variable lookup fails.
struct LookupError {
    var_name: String,
}
