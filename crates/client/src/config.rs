/// Default API host the client talks to.
pub const DEFAULT_API_URL: &str = "http://localhost:5033";

/// Client configuration loaded from the environment.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the catalog API, without the `/api` suffix.
    pub base_url: String,
}

impl ClientConfig {
    /// | Env Var           | Default                 |
    /// |-------------------|-------------------------|
    /// | `CATALOG_API_URL` | `http://localhost:5033` |
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("CATALOG_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        Self { base_url }
    }
}
