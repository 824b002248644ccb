//! Shared constants for travel-qa.

/// Maximum length of a submitted query, in characters.
pub const MAX_QUERY_CHARS: usize = 1000;

/// Page size used when the caller does not supply one.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Largest page size the history endpoint accepts.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Version reported by the identity, stats and docs endpoints.
pub const API_VERSION: &str = "1.0.0";

/// Human-readable service name reported by the root endpoint.
pub const API_NAME: &str = "Interactive Q&A System API";

/// Default database location when `DATABASE_URL` is not set.
pub const DEFAULT_DATABASE_URL: &str = "sqlite:///./qa_system.db";

/// Default completion provider base URL.
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com";

/// Origins allowed by CORS when `CORS_ALLOWED_ORIGINS` is not set.
pub const DEFAULT_ALLOWED_ORIGINS: &[&str] = &[
    "http://localhost:3000",
    "http://127.0.0.1:3000",
    "https://quiz.pythonaidev.com",
    "https://frontend-lovat-theta-74.vercel.app",
];
