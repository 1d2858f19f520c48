use std::{env, fmt};

/// PostgreSQL connection parameters.
///
/// Resolved from `POSTGRES_USER`, `POSTGRES_PASSWORD`, `POSTGRES_HOST`,
/// `POSTGRES_PORT` and `POSTGRES_DB`.
#[derive(Clone, PartialEq, Eq)]
pub struct PostgresSettings {
    pub user: String,
    pub password: String,
    pub host: String,
    pub port: u16,
    pub database: String,
}

impl PostgresSettings {
    /// Assembles a `postgres://` connection URL.
    ///
    /// User and password are percent-encoded so reserved characters survive.
    pub fn database_url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            urlencoding::encode(&self.user),
            urlencoding::encode(&self.password),
            self.host,
            self.port,
            self.database
        )
    }

    /// Connection target without credentials, safe for logs.
    pub fn redacted_url(&self) -> String {
        format!("postgres://{}:{}/{}", self.host, self.port, self.database)
    }
}

impl fmt::Debug for PostgresSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PostgresSettings")
            .field("user", &self.user)
            .field("password", &"********")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("database", &self.database)
            .finish()
    }
}

/// Service identity reported by `GET /`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppInfo {
    pub name: String,
    pub version: String,
    pub description: String,
}

impl Default for AppInfo {
    fn default() -> Self {
        Self {
            name: "itemstore".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            description: "CRUD REST API for items".to_string(),
        }
    }
}

/// Application configuration loaded from environment variables.
#[derive(Clone)]
pub struct Config {
    /// Name, version and description of the service.
    pub app: AppInfo,
    /// PostgreSQL connection parameters.
    pub postgres: PostgresSettings,
    /// Full connection URL overriding `postgres` (default: unset)
    pub database_url: Option<String>,
    /// Path to SQLite database file (default: "itemstore.db")
    pub sqlite_path: String,
    /// PostgreSQL pool size (default: 5)
    pub db_max_connections: u32,
    /// Seconds to wait for a PostgreSQL connection (default: 5)
    pub db_connect_timeout_secs: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `POSTGRES_USER` (default: "postgres")
    /// - `POSTGRES_PASSWORD` (default: "postgres")
    /// - `POSTGRES_HOST` (default: "postgres")
    /// - `POSTGRES_PORT` (default: 5432)
    /// - `POSTGRES_DB` (default: "mydb")
    /// - `DATABASE_URL` - overrides the assembled PostgreSQL URL
    /// - `SQLITE_PATH` (default: "itemstore.db")
    /// - `DB_MAX_CONNECTIONS` (default: 5)
    /// - `DB_CONNECT_TIMEOUT_SECS` (default: 5)
    /// - `APP_NAME`, `APP_VERSION`, `APP_DESCRIPTION` (default: this crate's)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Resolve configuration through `lookup` instead of the process environment.
    ///
    /// Unparseable numeric values fall back to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let string = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());
        let app = AppInfo::default();

        Self {
            app: AppInfo {
                name: string("APP_NAME", app.name.as_str()),
                version: string("APP_VERSION", app.version.as_str()),
                description: string("APP_DESCRIPTION", app.description.as_str()),
            },
            postgres: PostgresSettings {
                user: string("POSTGRES_USER", "postgres"),
                password: string("POSTGRES_PASSWORD", "postgres"),
                host: string("POSTGRES_HOST", "postgres"),
                port: lookup("POSTGRES_PORT")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(5432),
                database: string("POSTGRES_DB", "mydb"),
            },
            database_url: lookup("DATABASE_URL").filter(|v| !v.trim().is_empty()),
            sqlite_path: string("SQLITE_PATH", "itemstore.db"),
            db_max_connections: lookup("DB_MAX_CONNECTIONS")
                .and_then(|v| v.parse().ok())
                .filter(|n| *n > 0)
                .unwrap_or(5),
            db_connect_timeout_secs: lookup("DB_CONNECT_TIMEOUT_SECS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(5),
        }
    }

    /// The PostgreSQL URL to connect to.
    pub fn database_url(&self) -> String {
        self.database_url
            .clone()
            .unwrap_or_else(|| self.postgres.database_url())
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // DATABASE_URL usually carries credentials.
        f.debug_struct("Config")
            .field("app", &self.app)
            .field("postgres", &self.postgres)
            .field("database_url", &self.database_url.as_ref().map(|_| "********"))
            .field("sqlite_path", &self.sqlite_path)
            .field("db_max_connections", &self.db_max_connections)
            .field("db_connect_timeout_secs", &self.db_connect_timeout_secs)
            .finish()
    }
}

impl Default for Config {
    /// Built-in defaults, ignoring the environment.
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
