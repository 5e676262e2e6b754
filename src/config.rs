//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;

/// The only origin allowed to make cross-origin requests.
pub const ALLOWED_ORIGIN: &str = "http://localhost:8000";

/// Deployment environment, selected by `NODE_ENV`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    /// Terse access logs, internal error detail hidden from clients
    Production,
    /// Verbose access logs, internal error detail exposed
    #[default]
    Development,
}

impl Environment {
    /// Parses a `NODE_ENV` value. Anything other than `production` is development.
    pub fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("production") {
            Environment::Production
        } else {
            Environment::Development
        }
    }

    pub fn is_production(self) -> bool {
        self == Environment::Production
    }
}

/// Where bearer-token authentication sits relative to the route table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthPlacement {
    /// Every request, matched or not, must carry a valid token
    #[default]
    BeforeRoutes,
    /// Only requests that no route matched are checked
    AfterRoutes,
}

impl AuthPlacement {
    /// Parses an `AUTH_PLACEMENT` value, falling back to `BeforeRoutes`.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "after-routes" | "after_routes" | "after" => AuthPlacement::AfterRoutes,
            _ => AuthPlacement::BeforeRoutes,
        }
    }
}

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Deployment environment
    pub environment: Environment,
    /// Shared-secret bearer token; `None` rejects every request
    pub api_token: Option<String>,
    /// HTTP server port
    pub server_port: u16,
    /// Origin allowed by the CORS check
    pub allowed_origin: String,
    /// Placement of the authentication stage
    pub auth_placement: AuthPlacement,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `NODE_ENV` - `production` or anything else (default: development)
    /// - `API_TOKEN` - Bearer token clients must present (default: unset)
    /// - `PORT` - HTTP server port (default: 8000)
    /// - `AUTH_PLACEMENT` - `before-routes` or `after-routes` (default: before-routes)
    pub fn from_env() -> Self {
        Self {
            environment: env::var("NODE_ENV")
                .map(|v| Environment::parse(&v))
                .unwrap_or_default(),
            api_token: env::var("API_TOKEN").ok().filter(|v| !v.is_empty()),
            server_port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8000),
            allowed_origin: ALLOWED_ORIGIN.to_string(),
            auth_placement: env::var("AUTH_PLACEMENT")
                .map(|v| AuthPlacement::parse(&v))
                .unwrap_or_default(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: Environment::Development,
            api_token: None,
            server_port: 8000,
            allowed_origin: ALLOWED_ORIGIN.to_string(),
            auth_placement: AuthPlacement::BeforeRoutes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.environment, Environment::Development);
        assert!(config.api_token.is_none());
        assert_eq!(config.server_port, 8000);
        assert_eq!(config.allowed_origin, "http://localhost:8000");
        assert_eq!(config.auth_placement, AuthPlacement::BeforeRoutes);
    }

    #[test]
    fn test_environment_parse() {
        assert_eq!(Environment::parse("production"), Environment::Production);
        assert_eq!(Environment::parse("PRODUCTION"), Environment::Production);
        assert_eq!(Environment::parse("development"), Environment::Development);
        assert_eq!(Environment::parse("test"), Environment::Development);
        assert_eq!(Environment::parse(""), Environment::Development);
    }

    #[test]
    fn test_auth_placement_parse() {
        assert_eq!(AuthPlacement::parse("after-routes"), AuthPlacement::AfterRoutes);
        assert_eq!(AuthPlacement::parse("AFTER"), AuthPlacement::AfterRoutes);
        assert_eq!(AuthPlacement::parse("before-routes"), AuthPlacement::BeforeRoutes);
        assert_eq!(AuthPlacement::parse("nonsense"), AuthPlacement::BeforeRoutes);
    }
}
