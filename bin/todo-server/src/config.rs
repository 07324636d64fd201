//! Server configuration, loaded from environment variables at startup.

use anyhow::anyhow;
use strum::{Display, EnumString};

/// Which [`crate::store::TodoStore`] implementation backs the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum StoreBackend {
    /// Process-local list; contents are lost on restart.
    Memory,
    /// `todos` table in the database at [`Config::database_url`].
    Sqlite,
}

/// Runtime configuration for todo-server.
///
/// Every field has a sensible default so the server works out-of-the-box
/// without any environment variables set.
#[derive(Debug, Clone)]
pub struct Config {
    /// TCP address to bind (default: `"0.0.0.0:3000"`).
    pub bind_address: String,

    /// Record store backend (default: `memory`).
    pub store: StoreBackend,

    /// SQLite URL used by the `sqlite` backend (default: `"sqlite://todos.db"`).
    /// Use `"sqlite::memory:"` for a throwaway database.
    pub database_url: String,

    /// Insert the demo tasks when the store is empty at startup.
    pub seed_demo: bool,

    /// `tracing` filter string, e.g. `"info"` or `"debug,tower_http=warn"`.
    pub log_level: String,

    /// When `true`, emit log records as newline-delimited JSON.
    pub log_json: bool,

    /// Comma-separated list of allowed CORS origins. `None` allows any origin.
    pub cors_allowed_origins: Option<String>,
}

impl Config {
    /// Build [`Config`] from environment variables, falling back to defaults.
    ///
    /// An unrecognised `TODO_STORE` is an error rather than a silent switch to
    /// the memory backend.
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            bind_address: env_or("TODO_BIND", "0.0.0.0:3000"),
            store: store_backend(std::env::var("TODO_STORE").ok().as_deref())?,
            database_url: env_or("TODO_DATABASE_URL", "sqlite://todos.db"),
            seed_demo: parse_flag("TODO_SEED", true),
            log_level: env_or("TODO_LOG", "info"),
            log_json: parse_flag("TODO_LOG_JSON", false),
            cors_allowed_origins: std::env::var("TODO_CORS_ORIGINS")
                .ok()
                .filter(|v| !v.trim().is_empty()),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:3000".to_owned(),
            store: StoreBackend::Memory,
            database_url: "sqlite://todos.db".to_owned(),
            seed_demo: true,
            log_level: "info".to_owned(),
            log_json: false,
            cors_allowed_origins: None,
        }
    }
}

// ── private helpers ──────────────────────────────────────────────────────────

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_owned())
}

fn store_backend(raw: Option<&str>) -> anyhow::Result<StoreBackend> {
    match raw.map(str::trim).filter(|v| !v.is_empty()) {
        None => Ok(StoreBackend::Memory),
        Some(v) => v.parse().map_err(|_| {
            anyhow!("TODO_STORE='{v}' is not a store backend (expected 'memory' or 'sqlite')")
        }),
    }
}

fn parse_flag(key: &str, default: bool) -> bool {
    std::env::var(key)
        .map(|v| flag_value(&v))
        .unwrap_or(default)
}

fn flag_value(raw: &str) -> bool {
    raw == "1" || raw.eq_ignore_ascii_case("true")
}
