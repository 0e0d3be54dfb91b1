use std::{collections::HashSet, net::SocketAddr, time::Duration};

use anyhow::{anyhow, Context};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use daybook_core::users::normalize_email;

const DEFAULT_TOKEN_TTL_MINUTES: u64 = 24 * 60;

pub struct Config {
    pub listen_addr: SocketAddr,
    pub db_path: String,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    pub static_dir: String,
    pub jwt_secret: Vec<u8>,
    pub token_ttl: Duration,
    /// When set, only these (normalized) emails are activated on registration.
    pub allowed_emails: Option<HashSet<String>>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key/value source.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let listen_addr: SocketAddr = var("DAYBOOK_LISTEN_ADDR", "0.0.0.0:8080")
            .parse()
            .context("Invalid DAYBOOK_LISTEN_ADDR")?;
        let db_path = var("DAYBOOK_DB_PATH", "./db/app.db");
        let cors_allow = split_list(&var("DAYBOOK_CORS_ALLOW_ORIGINS", "*"));
        let timeout_ms: u64 = var("DAYBOOK_REQUEST_TIMEOUT_MS", "30000")
            .parse()
            .context("Invalid DAYBOOK_REQUEST_TIMEOUT_MS")?;
        let static_dir = var("DAYBOOK_STATIC_DIR", "dist");

        let raw_secret =
            lookup("DAYBOOK_JWT_SECRET").ok_or_else(|| anyhow!("DAYBOOK_JWT_SECRET is required"))?;
        let jwt_secret = decode_secret_key(&raw_secret)?;

        let ttl_minutes: u64 = match lookup("DAYBOOK_TOKEN_TTL_MINUTES") {
            Some(raw) => raw.parse().context("Invalid DAYBOOK_TOKEN_TTL_MINUTES")?,
            None => DEFAULT_TOKEN_TTL_MINUTES,
        };
        if ttl_minutes == 0 {
            anyhow::bail!("DAYBOOK_TOKEN_TTL_MINUTES must be positive");
        }

        let allowed_emails = lookup("DAYBOOK_ALLOWED_EMAILS")
            .map(|raw| {
                split_list(&raw)
                    .iter()
                    .map(|email| normalize_email(email))
                    .collect::<HashSet<_>>()
            })
            .filter(|emails| !emails.is_empty());

        Ok(Self {
            listen_addr,
            db_path,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            static_dir,
            jwt_secret,
            token_ttl: Duration::from_secs(ttl_minutes * 60),
            allowed_emails,
        })
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Accepts a base64 key or a raw 32-character ASCII key.
pub fn decode_secret_key(raw: &str) -> anyhow::Result<Vec<u8>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        anyhow::bail!("JWT secret cannot be empty");
    }
    let decoded = match BASE64.decode(trimmed) {
        Ok(bytes) => bytes,
        Err(_) if trimmed.len() == 32 => trimmed.as_bytes().to_vec(),
        Err(_) => {
            anyhow::bail!("JWT secret must be base64 encoded or a 32-byte ASCII string")
        }
    };

    if decoded.len() != 32 {
        anyhow::bail!("JWT secret must decode to exactly 32 bytes");
    }

    Ok(decoded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    const SECRET: &str = "daybook-test-secret-32-bytes-ok!";

    fn config_from(pairs: &[(&str, &str)]) -> anyhow::Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_only_secret_is_set() {
        let config = config_from(&[("DAYBOOK_JWT_SECRET", SECRET)]).unwrap();
        assert_eq!(config.listen_addr.port(), 8080);
        assert_eq!(config.db_path, "./db/app.db");
        assert_eq!(config.cors_allow, vec!["*".to_string()]);
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert_eq!(config.token_ttl, Duration::from_secs(24 * 60 * 60));
        assert!(config.allowed_emails.is_none());
    }

    #[test]
    fn invalid_values_are_errors() {
        assert!(config_from(&[]).is_err());
        assert!(config_from(&[("DAYBOOK_JWT_SECRET", "short")]).is_err());
        assert!(config_from(&[
            ("DAYBOOK_JWT_SECRET", SECRET),
            ("DAYBOOK_LISTEN_ADDR", "not-an-addr"),
        ])
        .is_err());
        assert!(config_from(&[
            ("DAYBOOK_JWT_SECRET", SECRET),
            ("DAYBOOK_REQUEST_TIMEOUT_MS", "soon"),
        ])
        .is_err());
    }

    #[test]
    fn allowed_emails_are_normalized() {
        let config = config_from(&[
            ("DAYBOOK_JWT_SECRET", SECRET),
            ("DAYBOOK_ALLOWED_EMAILS", " Ada@Example.com , bob@example.com"),
        ])
        .unwrap();
        let allowed = config.allowed_emails.unwrap();
        assert_eq!(allowed.len(), 2);
        assert!(allowed.contains("ada@example.com"));
        assert!(allowed.contains("bob@example.com"));
    }
}
