//! Configuration management for the CinePass client.
//!
//! Loads configuration from environment variables, honouring a `.env` file,
//! with defaults for local development.

use std::env;
use std::time::Duration;

/// Default image upload limit (5 MiB)
pub const DEFAULT_MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

/// Client configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// API endpoints
    pub api: ApiConfig,
    /// Store dispatch settings
    pub dispatch: DispatchConfig,
    /// Image upload settings
    pub upload: UploadConfig,
}

/// API base URL and role prefixes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Scheme and host (e.g., `http://localhost:3000`)
    pub base_url: String,
    /// Admin route prefix
    pub admin_prefix: String,
    /// Theater owner route prefix
    pub theater_prefix: String,
    /// End user route prefix
    pub user_prefix: String,
    /// Per-request HTTP timeout
    pub request_timeout: Duration,
}

/// Dispatch settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchConfig {
    /// How long a caller waits for the outcome of one dispatch
    pub timeout: Duration,
}

/// Image upload settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadConfig {
    /// Largest accepted image
    pub max_image_bytes: usize,
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// A `.env` file in the working directory is read first if present.
    /// Missing or unparsable values fall back to their defaults.
    #[must_use]
    pub fn from_env() -> Self {
        // Absent .env is the normal case outside development
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup` instead of the process
    /// environment.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let string = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());
        let seconds = |key: &str, default: u64| {
            Duration::from_secs(lookup(key).and_then(|v| v.parse().ok()).unwrap_or(default))
        };

        Self {
            api: ApiConfig {
                base_url: string("CINEPASS_API_URL", "http://localhost:3000"),
                admin_prefix: string("CINEPASS_ADMIN_PREFIX", "/admin"),
                theater_prefix: string("CINEPASS_THEATER_PREFIX", "/theaters"),
                user_prefix: string("CINEPASS_USER_PREFIX", "/user"),
                request_timeout: seconds("CINEPASS_REQUEST_TIMEOUT", 30),
            },
            dispatch: DispatchConfig {
                timeout: seconds("CINEPASS_DISPATCH_TIMEOUT", 35),
            },
            upload: UploadConfig {
                max_image_bytes: lookup("CINEPASS_MAX_IMAGE_BYTES")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(DEFAULT_MAX_IMAGE_BYTES),
            },
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.api.base_url, "http://localhost:3000");
        assert_eq!(config.api.theater_prefix, "/theaters");
        assert_eq!(config.api.request_timeout, Duration::from_secs(30));
        assert_eq!(config.dispatch.timeout, Duration::from_secs(35));
        assert_eq!(config.upload.max_image_bytes, 5_242_880);
    }

    #[test]
    fn test_overrides_and_bad_numbers() {
        let vars: HashMap<&str, &str> = [
            ("CINEPASS_API_URL", "https://api.cinepass.in"),
            ("CINEPASS_USER_PREFIX", "/u"),
            ("CINEPASS_DISPATCH_TIMEOUT", "5"),
            ("CINEPASS_REQUEST_TIMEOUT", "soon"),
            ("CINEPASS_MAX_IMAGE_BYTES", "1024"),
        ]
        .into();

        let config = Config::from_lookup(|key| vars.get(key).map(ToString::to_string));
        assert_eq!(config.api.base_url, "https://api.cinepass.in");
        assert_eq!(config.api.user_prefix, "/u");
        assert_eq!(config.api.admin_prefix, "/admin");
        assert_eq!(config.dispatch.timeout, Duration::from_secs(5));
        assert_eq!(config.api.request_timeout, Duration::from_secs(30));
        assert_eq!(config.upload.max_image_bytes, 1024);
    }
}
