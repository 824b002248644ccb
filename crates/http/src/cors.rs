//! Cross-origin policy: an explicit origin allow-list with credentials.

use axum::http::HeaderValue;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use travel_qa_core::{DEFAULT_ALLOWED_ORIGINS, env_non_empty};

/// Splits a comma-separated origin list, dropping blanks and trailing slashes.
#[must_use]
pub fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|o| o.trim().trim_end_matches('/'))
        .filter(|o| !o.is_empty())
        .map(str::to_owned)
        .collect()
}

/// `CORS_ALLOWED_ORIGINS` if set, otherwise the built-in list.
#[must_use]
pub fn allowed_origins_from_env() -> Vec<String> {
    env_non_empty("CORS_ALLOWED_ORIGINS").map_or_else(
        || DEFAULT_ALLOWED_ORIGINS.iter().map(|o| (*o).to_owned()).collect(),
        |raw| parse_origins(&raw),
    )
}

/// Builds the CORS layer for `origins`.
///
/// Wildcards are refused: credentials are allowed, and a credentialed
/// wildcard is rejected by browsers anyway. Methods and headers are mirrored
/// from the preflight request.
#[must_use]
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| {
            if origin == "*" {
                tracing::warn!("ignoring wildcard CORS origin");
                return None;
            }
            match HeaderValue::from_str(origin) {
                Ok(value) => Some(value),
                Err(e) => {
                    tracing::warn!(origin = %origin, error = %e, "ignoring invalid CORS origin");
                    None
                },
            }
        })
        .collect();
    tracing::debug!(count = allowed.len(), "CORS allow-list built");

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_origins_trims_and_skips_blanks() {
        let parsed = parse_origins(" http://a.test/ , ,https://b.test,,");
        assert_eq!(parsed, vec!["http://a.test".to_owned(), "https://b.test".to_owned()]);
    }

    #[test]
    fn test_parse_origins_empty() {
        assert!(parse_origins("  ").is_empty());
    }

    #[test]
    fn test_cors_layer_survives_bad_entries() {
        let origins = vec!["*".to_owned(), "bad\norigin".to_owned(), "http://ok.test".to_owned()];
        let _layer = cors_layer(&origins);
    }
}
