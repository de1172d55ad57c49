//! Benchmark configuration types

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static TARGET_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^(?P<scheme>https?)://(?P<hostname>[A-Za-z0-9_.\-]+)(?::(?P<port>\d*))?(?P<path>.*)$")
        .expect("target pattern is a valid regex")
});

/// URL scheme of the benchmark target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scheme {
    /// Plain HTTP
    Http,
    /// HTTP over TLS
    Https,
}

impl Scheme {
    /// Port used when the URL does not name one
    pub fn default_port(&self) -> u16 {
        match self {
            Scheme::Http => 80,
            Scheme::Https => 443,
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scheme::Http => f.write_str("http"),
            Scheme::Https => f.write_str("https"),
        }
    }
}

/// Parsed destination of the benchmark
///
/// Immutable once constructed; the engine only ever reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetDescriptor {
    /// http or https
    pub scheme: Scheme,
    /// Host name, never empty
    pub hostname: String,
    /// Explicit port, or the scheme default
    pub port: u16,
    /// Everything after host and port, verbatim (may be empty)
    pub path: String,
    /// The URL exactly as supplied; this is what gets requested
    pub raw_url: String,
}

impl TargetDescriptor {
    /// Parse `http[s]://hostname[:port][/path]`
    pub fn parse(url: &str) -> Result<Self, ConfigError> {
        let caps = TARGET_PATTERN
            .captures(url)
            .ok_or_else(|| ConfigError::InvalidTarget(url.to_string()))?;

        let scheme = match &caps["scheme"] {
            "https" => Scheme::Https,
            _ => Scheme::Http,
        };

        let port = match caps.name("port").map(|m| m.as_str()) {
            Some(port) if !port.is_empty() => port
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(port.to_string()))?,
            _ => scheme.default_port(),
        };

        Ok(Self {
            scheme,
            hostname: caps["hostname"].to_string(),
            port,
            path: caps["path"].to_string(),
            raw_url: url.to_string(),
        })
    }
}

/// Input to the benchmark engine
///
/// A zero request count or zero concurrency is valid and yields an empty summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkConfig {
    /// Exact number of GET requests to issue
    pub total_requests: usize,

    /// Number of concurrent workers
    pub concurrency: usize,

    /// Where to send them
    pub target: TargetDescriptor,
}

impl BenchmarkConfig {
    /// Create a config from already validated parts
    pub fn new(total_requests: usize, concurrency: usize, target: TargetDescriptor) -> Self {
        Self {
            total_requests,
            concurrency,
            target,
        }
    }

    /// Validate raw command line values and build a config
    pub fn from_flags(requests: i64, concurrency: i64, url: &str) -> Result<Self, ConfigError> {
        let total_requests =
            usize::try_from(requests).map_err(|_| ConfigError::NegativeRequests(requests))?;
        let concurrency = usize::try_from(concurrency)
            .map_err(|_| ConfigError::NegativeConcurrency(concurrency))?;
        let target = TargetDescriptor::parse(url)?;

        Ok(Self::new(total_requests, concurrency, target))
    }

    /// True when the engine has nothing to do
    pub fn is_empty(&self) -> bool {
        self.total_requests == 0 || self.concurrency == 0
    }
}

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// `-n` was negative
    #[error("invalid value {0} for flag -n: must be positive")]
    NegativeRequests(i64),

    /// `-c` was negative
    #[error("invalid value {0} for flag -c: must be positive")]
    NegativeConcurrency(i64),

    /// URL did not match `http[s]://host[:port][/path]`
    #[error("invalid value '{0}': must be a valid URI")]
    InvalidTarget(String),

    /// Port digits do not fit in a TCP port
    #[error("invalid port '{0}': must be between 0 and 65535")]
    InvalidPort(String),
}
