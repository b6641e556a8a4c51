/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `5033`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Whether to load the fixture directors and movies at startup
    /// (default: `true`).
    pub seed_fixtures: bool,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `5033`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:3000`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `SEED_FIXTURES`        | `true`                     |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "5033".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins = parse_origins(
            &std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "http://localhost:3000".into()),
        );

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let seed_fixtures: bool = std::env::var("SEED_FIXTURES")
            .unwrap_or_else(|_| "true".into())
            .parse()
            .expect("SEED_FIXTURES must be `true` or `false`");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            seed_fixtures,
        }
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
