//! Environment variable parsing with warn-level logging for invalid values.

/// Parse an environment variable with a default fallback.
///
/// - If the variable is not set: returns `default` silently (expected case).
/// - If the variable is set but cannot be parsed: logs a warning and returns `default`.
pub fn env_parse_with_default<T: std::str::FromStr + std::fmt::Display>(
    var: &str,
    default: T,
) -> T {
    match std::env::var(var) {
        Ok(v) => match v.trim().parse() {
            Ok(n) => n,
            Err(_) => {
                tracing::warn!(
                    var,
                    value = %v,
                    default = %default,
                    "invalid env var value, using default"
                );
                default
            },
        },
        Err(_) => default,
    }
}

/// Like [`env_parse_with_default`] but with no default: unset, blank or
/// unparsable values yield `None` (the latter with a warning).
pub fn env_parse_optional<T: std::str::FromStr>(var: &str) -> Option<T> {
    let v = env_non_empty(var)?;
    match v.parse() {
        Ok(n) => Some(n),
        Err(_) => {
            tracing::warn!(var, value = %v, "invalid env var value, ignoring");
            None
        },
    }
}

/// Returns the trimmed value of `var`, or `None` when unset or blank.
#[must_use]
pub fn env_non_empty(var: &str) -> Option<String> {
    std::env::var(var).ok().map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}
