//! # Service Configuration
//!
//! [`ServiceConfig`] is read from an optional YAML file and then overridden by
//! environment variables. Every field has a default, so an empty file (or no
//! file) yields a working development configuration.
//!
//! ## Environment Variables
//!
//! | Variable | Field |
//! |----------|-------|
//! | `CBUILD_ADDR` | `addr` |
//! | `CBUILD_ENV` | `environment` |
//! | `CBUILD_API_KEYS` | `security.api_keys` (comma-separated) |
//! | `CBUILD_RATE_LIMIT_MAX` | `rate_limit.max_requests` |
//! | `CBUILD_RATE_LIMIT_WINDOW_SECS` | `rate_limit.window_secs` |
//! | `CBUILD_TRUST_PROXY` | `rate_limit.trust_proxy` (`true`/`false`) |
//! | `CBUILD_TEMPLATES_DIR` | `templates_dir` |
//! | `CBUILD_STACK_SIZE` | `http.stack_size` (decimal or `0x` hex) |
//!
//! ## Example
//!
//! ```yaml
//! addr: "127.0.0.1:3001"
//! environment: production
//! security:
//!   api_keys: ["k1"]
//! rate_limit:
//!   window_secs: 60
//!   max_requests: 30
//! ```

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_ADDR: &str = "0.0.0.0:3001";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub addr: String,
    pub environment: String,
    pub security: SecurityConfig,
    pub rate_limit: RateLimitConfig,
    pub http: HttpConfig,
    pub cors: CorsSettings,
    /// Directory of `<type>.tsx.jinja` files replacing the embedded templates
    pub templates_dir: Option<PathBuf>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            addr: DEFAULT_ADDR.to_string(),
            environment: "development".to_string(),
            security: SecurityConfig::default(),
            rate_limit: RateLimitConfig::default(),
            http: HttpConfig::default(),
            cors: CorsSettings::default(),
            templates_dir: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SecurityConfig {
    /// Empty disables API-key authentication.
    pub api_keys: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RateLimitConfig {
    pub window_secs: u64,
    pub max_requests: u32,
    /// Key clients by `X-Forwarded-For` / `X-Real-IP` instead of the socket peer.
    /// Only enable behind a proxy that overwrites those headers.
    pub trust_proxy: bool,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            window_secs: 900,
            max_requests: 100,
            trust_proxy: false,
        }
    }
}

impl RateLimitConfig {
    pub fn window(&self) -> Duration {
        Duration::from_secs(self.window_secs)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    pub max_body_bytes: usize,
    /// Coroutine stack size in bytes for request handlers
    pub stack_size: usize,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            max_body_bytes: 1_048_576,
            stack_size: 0x10000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorsSettings {
    pub allowed_origins: Vec<String>,
    pub allowed_headers: Vec<String>,
    pub allowed_methods: Vec<String>,
}

impl Default for CorsSettings {
    fn default() -> Self {
        Self {
            allowed_origins: vec!["*".to_string()],
            allowed_headers: vec![
                "Content-Type".to_string(),
                "Authorization".to_string(),
                "X-API-Key".to_string(),
            ],
            allowed_methods: vec!["GET".to_string(), "POST".to_string(), "OPTIONS".to_string()],
        }
    }
}

impl ServiceConfig {
    /// Load from `path` (if any) and apply environment overrides.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        Ok(config.with_overrides(|key| std::env::var(key).ok()))
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_yaml(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn from_yaml(contents: &str) -> anyhow::Result<Self> {
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(contents)?)
    }

    /// Apply overrides looked up by variable name. Unparseable numbers are ignored.
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(addr) = lookup("CBUILD_ADDR") {
            self.addr = addr;
        }
        if let Some(env) = lookup("CBUILD_ENV") {
            self.environment = env;
        }
        if let Some(keys) = lookup("CBUILD_API_KEYS") {
            self.security.api_keys = keys
                .split(',')
                .map(str::trim)
                .filter(|k| !k.is_empty())
                .map(String::from)
                .collect();
        }
        if let Some(max) = lookup("CBUILD_RATE_LIMIT_MAX").and_then(|v| v.parse().ok()) {
            self.rate_limit.max_requests = max;
        }
        if let Some(secs) = lookup("CBUILD_RATE_LIMIT_WINDOW_SECS").and_then(|v| v.parse().ok()) {
            self.rate_limit.window_secs = secs;
        }
        if let Some(trust) = lookup("CBUILD_TRUST_PROXY").and_then(|v| v.parse().ok()) {
            self.rate_limit.trust_proxy = trust;
        }
        if let Some(dir) = lookup("CBUILD_TEMPLATES_DIR") {
            self.templates_dir = Some(PathBuf::from(dir));
        }
        if let Some(size) = lookup("CBUILD_STACK_SIZE").and_then(|v| parse_size(&v)) {
            self.http.stack_size = size;
        }
        self
    }

    pub fn auth_enabled(&self) -> bool {
        !self.security.api_keys.is_empty()
    }
}

fn parse_size(val: &str) -> Option<usize> {
    match val.strip_prefix("0x") {
        Some(hex) => usize::from_str_radix(hex, 16).ok(),
        None => val.parse().ok(),
    }
}
