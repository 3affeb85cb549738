use clap::Parser;
use std::time::Duration;

pub const DEFAULT_WIKIPEDIA_API_URL: &str = "https://en.wikipedia.org/w/api.php";

/// Runtime configuration, read once at startup from flags, the environment
/// and an optional `.env` file.
#[derive(Parser, Debug, Clone)]
#[command(name = "shortdesc", about = "Short descriptions of Wikipedia articles over HTTP")]
pub struct Config {
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    #[arg(long, env = "WIKIPEDIA_API_URL", default_value = DEFAULT_WIKIPEDIA_API_URL)]
    pub wikipedia_api_url: String,

    /// Upper bound for the whole upstream exchange, in seconds.
    #[arg(long, env = "WIKIPEDIA_TIMEOUT_SECS", default_value_t = 10)]
    pub upstream_timeout_secs: u64,

    /// Prefix for the search and docs routes, e.g. `/api/v1`.
    #[arg(long, env = "API_BASE_PATH", default_value = "/api/v1")]
    pub base_path: String,

    #[arg(long, env = "CORS_ORIGINS", value_delimiter = ',', default_value = "*")]
    pub cors_origins: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            host: "0.0.0.0".to_string(),
            port: 3000,
            wikipedia_api_url: DEFAULT_WIKIPEDIA_API_URL.to_string(),
            upstream_timeout_secs: 10,
            base_path: "/api/v1".to_string(),
            cors_origins: vec!["*".to_string()],
        }
    }
}

impl Config {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_secs(self.upstream_timeout_secs)
    }

    /// Base path with a single leading slash and no trailing slash.
    /// The root prefix normalizes to an empty string.
    pub fn normalized_base_path(&self) -> String {
        let trimmed = self.base_path.trim().trim_matches('/');
        if trimmed.is_empty() {
            String::new()
        } else {
            format!("/{trimmed}")
        }
    }

    pub fn allows_any_origin(&self) -> bool {
        self.cors_origins.is_empty() || self.cors_origins.iter().any(|o| o.trim() == "*")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalized_base_path() {
        let mut config = Config::default();
        assert_eq!(config.normalized_base_path(), "/api/v1");

        config.base_path = "api/".to_string();
        assert_eq!(config.normalized_base_path(), "/api");

        config.base_path = "/".to_string();
        assert_eq!(config.normalized_base_path(), "");
    }

    #[test]
    fn test_parse_flags() {
        let config = Config::parse_from([
            "shortdesc",
            "--port",
            "8080",
            "--wikipedia-api-url",
            "http://localhost:9000/w/api.php",
            "--cors-origins",
            "http://a.example,http://b.example",
        ]);
        assert_eq!(config.port, 8080);
        assert_eq!(config.wikipedia_api_url, "http://localhost:9000/w/api.php");
        assert_eq!(config.cors_origins.len(), 2);
        assert!(!config.allows_any_origin());
    }
}
