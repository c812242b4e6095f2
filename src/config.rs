use std::env;
use std::fmt::Display;
use std::str::FromStr;
use tracing::{info, warn};

pub const DEFAULT_SECRET: &str = "your_jwt_secret_key";

/// Upper bound for `TOKEN_TTL_SECS` (one year).
pub const MAX_TOKEN_TTL_SECS: i64 = 365 * 24 * 60 * 60;

#[derive(Clone, Debug)]
pub struct EnvConfig {
    pub port: u16,
    pub jwt_secret: String,
    pub token_ttl_secs: i64,
    pub catalog_path: Option<String>,
}

impl Default for EnvConfig {
    fn default() -> Self {
        EnvConfig {
            port: 5000,
            jwt_secret: DEFAULT_SECRET.to_string(),
            token_ttl_secs: 60 * 60,
            catalog_path: None,
        }
    }
}

impl EnvConfig {
    fn get_env(key: &str) -> Option<String> {
        env::var(key).ok().filter(|v| !v.is_empty())
    }

    fn parse_var<T: FromStr>(key: &str, raw: Option<String>, default: T) -> T
    where
        T::Err: Display,
    {
        match raw {
            Some(raw) => raw.parse().unwrap_or_else(|e| {
                warn!("Invalid {key} value {raw:?}: {e}, using default");
                default
            }),
            None => default,
        }
    }

    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        Self::from_lookup(Self::get_env)
    }

    /// Builds the config from any key lookup; empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| lookup(key).filter(|v| !v.is_empty());
        let defaults = EnvConfig::default();

        let jwt_secret = var("JWT_SECRET").unwrap_or_else(|| {
            info!("JWT_SECRET not set, using built-in secret");
            defaults.jwt_secret
        });

        let mut token_ttl_secs =
            Self::parse_var("TOKEN_TTL_SECS", var("TOKEN_TTL_SECS"), defaults.token_ttl_secs);
        if !(1..=MAX_TOKEN_TTL_SECS).contains(&token_ttl_secs) {
            warn!(
                "TOKEN_TTL_SECS {token_ttl_secs} outside 1..={MAX_TOKEN_TTL_SECS}, using default"
            );
            token_ttl_secs = defaults.token_ttl_secs;
        }

        EnvConfig {
            port: Self::parse_var("PORT", var("PORT"), defaults.port),
            jwt_secret,
            token_ttl_secs,
            catalog_path: var("CATALOG_PATH"),
        }
    }
}
