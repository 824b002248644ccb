//! Migration v1: queries table and lookup indexes

pub(super) const SQL: &str = "
CREATE TABLE IF NOT EXISTS queries (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    query TEXT NOT NULL,
    response TEXT NOT NULL,
    user_id TEXT,
    created_at TEXT NOT NULL,
    response_time REAL,
    success INTEGER NOT NULL DEFAULT 1
);

CREATE INDEX IF NOT EXISTS idx_queries_created_at ON queries(created_at DESC);
CREATE INDEX IF NOT EXISTS idx_queries_user_id ON queries(user_id);
";
