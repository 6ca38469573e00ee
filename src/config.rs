//! Application configuration loaded from environment variables.
//!
//! Everything is read once at startup; there is no hot reload.

use std::env;
use std::time::Duration;

/// Credential check applied by the login endpoint.
///
/// The login policy is a deployment decision, so it is explicit configuration
/// rather than a hardcoded behavior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthPolicy {
    /// Accept any non-empty email and password (demo deployments).
    Open,
    /// Accept exactly one configured credential pair.
    Fixed { email: String, password: String },
}

impl AuthPolicy {
    /// Policy name for logging. Never includes the fixed credentials.
    pub fn name(&self) -> &'static str {
        match self {
            AuthPolicy::Open => "open",
            AuthPolicy::Fixed { .. } => "fixed",
        }
    }
}

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Frontend URL for CORS allowance
    pub frontend_url: String,
    /// Server port
    pub port: u16,
    /// JWT signing key for session tokens (raw bytes)
    pub jwt_signing_key: Vec<u8>,
    /// Login credential policy
    pub auth_policy: AuthPolicy,
    /// Organization assigned to new sessions
    pub default_organization: String,
    /// Role assigned to sessions created via login
    pub default_login_role: String,
    /// Role assigned to sessions created via signup
    pub default_signup_role: String,
    /// Load the demo dataset at startup
    pub seed_demo_data: bool,
    /// Simulated latency for ledger operations
    pub ledger_latency: Duration,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let auth_policy = match env::var("AUTH_POLICY").as_deref() {
            Ok("fixed") => AuthPolicy::Fixed {
                email: env::var("AUTH_FIXED_EMAIL")
                    .map_err(|_| ConfigError::Missing("AUTH_FIXED_EMAIL"))?,
                password: env::var("AUTH_FIXED_PASSWORD")
                    .map_err(|_| ConfigError::Missing("AUTH_FIXED_PASSWORD"))?,
            },
            Ok("open") | Err(_) => AuthPolicy::Open,
            Ok(other) => return Err(ConfigError::Invalid("AUTH_POLICY", other.to_string())),
        };

        let ledger_latency_ms = env::var("LEDGER_LATENCY_MS")
            .unwrap_or_else(|_| "2000".to_string())
            .parse()
            .unwrap_or(2000);

        Ok(Self {
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            jwt_signing_key: env::var("JWT_SIGNING_KEY")
                .map_err(|_| ConfigError::Missing("JWT_SIGNING_KEY"))?
                .into_bytes(),
            auth_policy,
            default_organization: env::var("DEFAULT_ORGANIZATION")
                .unwrap_or_else(|_| "Blue Carbon Initiative".to_string()),
            default_login_role: env::var("DEFAULT_LOGIN_ROLE")
                .unwrap_or_else(|_| "Marine Biologist".to_string()),
            default_signup_role: env::var("DEFAULT_SIGNUP_ROLE")
                .unwrap_or_else(|_| "Researcher".to_string()),
            seed_demo_data: env::var("SEED_DEMO_DATA")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(true),
            ledger_latency: Duration::from_millis(ledger_latency_ms),
        })
    }

    /// Default config for tests: open login policy, zero ledger latency,
    /// no demo data.
    pub fn test_default() -> Self {
        Self {
            frontend_url: "http://localhost:5173".to_string(),
            port: 8080,
            jwt_signing_key: b"test_jwt_key_32_bytes_minimum!!".to_vec(),
            auth_policy: AuthPolicy::Open,
            default_organization: "Blue Carbon Initiative".to_string(),
            default_login_role: "Marine Biologist".to_string(),
            default_signup_role: "Researcher".to_string(),
            seed_demo_data: false,
            ledger_latency: Duration::ZERO,
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {0}: {1}")]
    Invalid(&'static str, String),
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test because env vars are process-global and tests run in parallel.
    #[test]
    fn test_config_from_env() {
        env::set_var("JWT_SIGNING_KEY", "test_jwt_key_32_bytes_minimum!!");
        env::remove_var("AUTH_POLICY");

        let config = Config::from_env().expect("Config should load");

        assert_eq!(config.port, 8080);
        assert_eq!(config.auth_policy, AuthPolicy::Open);
        assert_eq!(config.default_organization, "Blue Carbon Initiative");

        env::set_var("AUTH_POLICY", "fixed");
        env::remove_var("AUTH_FIXED_EMAIL");
        env::remove_var("AUTH_FIXED_PASSWORD");

        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::Missing("AUTH_FIXED_EMAIL")));

        env::remove_var("AUTH_POLICY");
    }
}
