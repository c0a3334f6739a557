//! API Server Configuration
//!
//! Environment-driven settings resolved once at startup. Missing or
//! malformed values fail the boot instead of being papered over.

use std::env;
use std::net::SocketAddr;

/// Runtime configuration for the API server
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// PostgreSQL connection string
    pub database_url: String,
    /// Require TLS to the database without certificate verification
    pub database_tls_no_verify: bool,
    /// Address the HTTP listener binds to
    pub bind_addr: SocketAddr,
    /// Origins allowed by the CORS layer
    pub frontend_origins: Vec<String>,
}

impl ApiConfig {
    /// Resolve the configuration from environment variables
    ///
    /// `DATABASE_URL` is required (`POSTGRES_URL` is accepted as a
    /// fallback name); everything else has a development default.
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = env::var("DATABASE_URL")
            .or_else(|_| env::var("POSTGRES_URL"))
            .map_err(|_| anyhow::anyhow!("DATABASE_URL must be set in environment"))?;

        let database_tls_no_verify = env::var("DATABASE_TLS_NO_VERIFY")
            .map(|v| matches!(v.trim(), "1" | "true" | "yes"))
            .unwrap_or(false);

        let bind_addr = env::var("BIND_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:31113".to_string())
            .parse()?;

        let frontend_origins = parse_origins(
            &env::var("FRONTEND_ORIGINS")
                .unwrap_or_else(|_| "http://localhost:40922,http://127.0.0.1:40922".to_string()),
        );

        Ok(Self {
            database_url,
            database_tls_no_verify,
            bind_addr,
            frontend_origins,
        })
    }
}

/// Split a comma-separated origin list, dropping empty entries
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|origin| origin.trim().to_string())
        .filter(|origin| !origin.is_empty())
        .collect()
}
