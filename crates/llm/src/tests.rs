use crate::client::truncate;
use crate::error::{ErrorCategory, LlmError};

#[test]
fn test_truncate_within_limit() {
    assert_eq!(truncate("hello", 10), "hello");
}

#[test]
fn test_truncate_exceeds_limit() {
    assert_eq!(truncate("hello world", 5), "hello");
}

#[test]
fn test_truncate_unicode_boundary() {
    let s = "\u{00e9}t\u{00e9}";
    let result = truncate(s, 1);
    assert_eq!(result, "");
}

#[test]
fn test_classify_authentication() {
    assert_eq!(
        ErrorCategory::classify("Authentication failed for this request"),
        ErrorCategory::Authentication
    );
    assert_eq!(
        ErrorCategory::classify("HTTP status 401: Incorrect API key provided: sk-***"),
        ErrorCategory::Authentication
    );
}

#[test]
fn test_classify_rate_limit() {
    assert_eq!(ErrorCategory::classify("rate_limit_exceeded"), ErrorCategory::RateLimit);
    assert_eq!(
        ErrorCategory::classify("You exceeded your current QUOTA"),
        ErrorCategory::RateLimit
    );
    assert_eq!(ErrorCategory::classify("HTTP status 429: slow down"), ErrorCategory::RateLimit);
}

#[test]
fn test_classify_connectivity() {
    assert_eq!(ErrorCategory::classify("Connection refused"), ErrorCategory::Connectivity);
    assert_eq!(ErrorCategory::classify("network unreachable"), ErrorCategory::Connectivity);
    assert_eq!(ErrorCategory::classify("operation timed out"), ErrorCategory::Connectivity);
}

#[test]
fn test_classify_invalid_request() {
    assert_eq!(
        ErrorCategory::classify("HTTP status 400: invalid_request_error"),
        ErrorCategory::InvalidRequest
    );
}

#[test]
fn test_classify_unknown() {
    assert_eq!(ErrorCategory::classify("HTTP status 503: Service Unavailable"), ErrorCategory::Unknown);
    assert_eq!(ErrorCategory::classify(""), ErrorCategory::Unknown);
}

#[test]
fn test_authentication_wins_over_invalid() {
    assert_eq!(
        ErrorCategory::classify("invalid authentication credentials"),
        ErrorCategory::Authentication
    );
}

#[test]
fn test_each_category_has_distinct_message() {
    let categories = [
        ErrorCategory::Authentication,
        ErrorCategory::RateLimit,
        ErrorCategory::Connectivity,
        ErrorCategory::InvalidRequest,
        ErrorCategory::Unknown,
    ];
    let messages: Vec<String> = categories.iter().map(|c| c.message("detail")).collect();
    for (i, a) in messages.iter().enumerate() {
        for b in messages.iter().skip(i + 1) {
            assert_ne!(a, b);
        }
    }
    assert_eq!(
        ErrorCategory::RateLimit.message("ignored"),
        "API rate limit exceeded. Please try again later."
    );
    assert_eq!(ErrorCategory::InvalidRequest.message("bad model"), "Invalid API request: bad model");
}

#[test]
fn test_llm_error_category_uses_display_text() {
    let err = LlmError::HttpStatus { code: 429, body: "Too Many Requests".to_owned() };
    assert_eq!(err.category(), ErrorCategory::RateLimit);
    assert_eq!(err.user_message(), "API rate limit exceeded. Please try again later.");

    assert_eq!(LlmError::EmptyResponse.category(), ErrorCategory::Unknown);
}
