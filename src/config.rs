use std::net::IpAddr;
use std::ops::RangeInclusive;
use std::str::FromStr;
use std::time::Duration;

use sqlx::postgres::{PgConnectOptions, PgSslMode};
use uuid::Uuid;

use crate::collections::Deployment;

/// Upper bound for `QUIZSTORE_LOREM_PARAGRAPHS`.
pub const MAX_LOREM_PARAGRAPHS: usize = 100;

#[derive(Debug, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub host: IpAddr,
    pub port: u16,
    pub deployment: Deployment,
    pub share_url: String,
    pub lorem_paragraphs: RangeInclusive<usize>,
    pub max_body_size: usize,
    pub log_level: String,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub source: DatabaseSource,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DatabaseSource {
    Url(String),
    /// Assembled from `DB_*` parts. TLS is always required.
    Parts {
        host: String,
        port: Option<u16>,
        user: String,
        password: String,
        name: String,
    },
}

impl DatabaseConfig {
    pub fn connect_options(&self) -> Result<PgConnectOptions, sqlx::Error> {
        match &self.source {
            DatabaseSource::Url(url) => PgConnectOptions::from_str(url),
            DatabaseSource::Parts {
                host,
                port,
                user,
                password,
                name,
            } => {
                let mut options = PgConnectOptions::new()
                    .host(host)
                    .username(user)
                    .password(password)
                    .database(name)
                    .ssl_mode(PgSslMode::Require);
                if let Some(port) = port {
                    options = options.port(*port);
                }
                Ok(options)
            }
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build a config from any variable lookup. `from_env` passes the process
    /// environment; tests pass a map.
    pub fn from_vars<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let vars = Vars(&lookup);

        let source = match vars.get("DATABASE_URL") {
            Some(url) => DatabaseSource::Url(url),
            None => {
                let (host, port) = split_host_port(&vars.required("DB_HOST")?)?;
                DatabaseSource::Parts {
                    host,
                    port,
                    user: vars.required("DB_OWNER")?,
                    password: vars.required("DB_PASSWORD")?,
                    name: vars.required("DB_NAME")?,
                }
            }
        };

        let max_connections: u32 = vars
            .or("QUIZSTORE_DB_MAX_CONNECTIONS", "10")
            .parse()
            .map_err(|e| format!("Invalid QUIZSTORE_DB_MAX_CONNECTIONS: {e}"))?;

        let acquire_timeout_secs: u64 = vars
            .or("QUIZSTORE_DB_ACQUIRE_TIMEOUT_SECS", "30")
            .parse()
            .map_err(|e| format!("Invalid QUIZSTORE_DB_ACQUIRE_TIMEOUT_SECS: {e}"))?;

        let host: IpAddr = vars
            .or("HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid HOST: {e}"))?;

        let port: u16 = vars
            .or("PORT", "3000")
            .parse()
            .map_err(|e| format!("Invalid PORT: {e}"))?;

        let deployment: Deployment = vars.or("QUIZSTORE_DEPLOYMENT", "quiz").parse()?;

        let share_url = vars.or("QUIZSTORE_SHARE_URL", "https://typing.example.com/{id}");
        if !share_url.contains("{id}") {
            return Err("Invalid QUIZSTORE_SHARE_URL: template must contain {id}".to_string());
        }

        let lorem_paragraphs = parse_range(&vars.or("QUIZSTORE_LOREM_PARAGRAPHS", "3-5"))
            .map_err(|e| format!("Invalid QUIZSTORE_LOREM_PARAGRAPHS: {e}"))?;

        let max_body_size: usize = vars
            .or("QUIZSTORE_MAX_BODY_SIZE", "1048576")
            .parse()
            .map_err(|e| format!("Invalid QUIZSTORE_MAX_BODY_SIZE: {e}"))?;

        let log_level = vars.or("QUIZSTORE_LOG_LEVEL", "info");

        Ok(Config {
            database: DatabaseConfig {
                source,
                max_connections,
                acquire_timeout: Duration::from_secs(acquire_timeout_secs),
            },
            host,
            port,
            deployment,
            share_url,
            lorem_paragraphs,
            max_body_size,
            log_level,
        })
    }

    /// Pointer URL handed back to clients for a stored record.
    pub fn share_url_for(&self, id: Uuid) -> String {
        self.share_url.replace("{id}", &id.to_string())
    }
}

struct Vars<'a, F>(&'a F);

impl<F> Vars<'_, F>
where
    F: Fn(&str) -> Option<String>,
{
    fn get(&self, key: &str) -> Option<String> {
        (self.0)(key).filter(|v| !v.trim().is_empty())
    }

    fn required(&self, key: &str) -> Result<String, String> {
        self.get(key)
            .ok_or_else(|| format!("Missing required environment variable: {key}"))
    }

    fn or(&self, key: &str, default: &str) -> String {
        self.get(key).unwrap_or_else(|| default.to_string())
    }
}

/// Split `DB_HOST` into host and optional port. IPv6 literals need brackets
/// to carry a port (`[::1]:5432`); a bare IPv6 address is taken as a host.
fn split_host_port(raw: &str) -> Result<(String, Option<u16>), String> {
    if let Some(rest) = raw.strip_prefix('[') {
        let (host, tail) = rest
            .split_once(']')
            .ok_or_else(|| format!("Invalid DB_HOST '{raw}': unclosed '['"))?;
        let port = match tail.strip_prefix(':') {
            Some(port) => Some(parse_port(port)?),
            None if tail.is_empty() => None,
            None => return Err(format!("Invalid DB_HOST '{raw}': unexpected '{tail}'")),
        };
        return Ok((host.to_string(), port));
    }

    match raw.split_once(':') {
        Some((host, port)) if !port.contains(':') => {
            Ok((host.to_string(), Some(parse_port(port)?)))
        }
        _ => Ok((raw.to_string(), None)),
    }
}

fn parse_port(port: &str) -> Result<u16, String> {
    port.parse()
        .map_err(|e| format!("Invalid DB_HOST port '{port}': {e}"))
}

fn parse_range(raw: &str) -> Result<RangeInclusive<usize>, String> {
    let (lo, hi) = match raw.split_once('-') {
        Some((lo, hi)) => (lo.trim(), hi.trim()),
        None => (raw.trim(), raw.trim()),
    };
    let lo: usize = lo.parse().map_err(|e| format!("'{lo}': {e}"))?;
    let hi: usize = hi.parse().map_err(|e| format!("'{hi}': {e}"))?;
    if lo == 0 || lo > hi {
        return Err(format!("'{raw}' must be a non-empty range starting at 1 or more"));
    }
    if hi > MAX_LOREM_PARAGRAPHS {
        return Err(format!("'{raw}' exceeds {MAX_LOREM_PARAGRAPHS} paragraphs"));
    }
    Ok(lo..=hi)
}
