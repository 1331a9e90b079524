//! Shell configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.
//!
//! ```text
//! LIFO_LOG               default log filter (RUST_LOG still wins)   "info,lifo_core=debug,stack_shell=debug"
//! LIFO_OUTPUT            reply format: text | json                  "text"
//! LIFO_INITIAL_CAPACITY  stack pre-allocation (max 1048576)         16
//! LIFO_PROMPT            print "> " before each line                false
//! ```

use std::env;
use std::fmt;
use std::str::FromStr;

use lifo_core::DEFAULT_CAPACITY;

/// Upper bound accepted for `LIFO_INITIAL_CAPACITY`.
pub const MAX_INITIAL_CAPACITY: usize = 1 << 20;

/// How replies are written to the output stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One human-readable line per reply.
    #[default]
    Text,

    /// One JSON object per reply.
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" | "plain" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::InvalidValue("LIFO_OUTPUT".to_string())),
        }
    }
}

/// Shell configuration.
#[derive(Debug, Clone)]
pub struct ShellConfig {
    /// Default tracing filter directive, used when RUST_LOG is unset
    pub log_filter: String,

    /// Reply format
    pub output: OutputFormat,

    /// Initial capacity of the session stack, at most `MAX_INITIAL_CAPACITY`
    pub initial_capacity: usize,

    /// Print a prompt before reading each line
    pub prompt: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        ShellConfig {
            log_filter: "info,lifo_core=debug,stack_shell=debug".to_string(),
            output: OutputFormat::default(),
            initial_capacity: DEFAULT_CAPACITY,
            prompt: false,
        }
    }
}

impl ShellConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = ShellConfig::default();

        let config = ShellConfig {
            log_filter: lookup("LIFO_LOG")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.log_filter),

            output: match lookup("LIFO_OUTPUT") {
                Some(v) => v.parse()?,
                None => defaults.output,
            },

            initial_capacity: match lookup("LIFO_INITIAL_CAPACITY") {
                Some(v) => v
                    .trim()
                    .parse::<usize>()
                    .ok()
                    .filter(|&n| n <= MAX_INITIAL_CAPACITY)
                    .ok_or_else(|| ConfigError::InvalidValue("LIFO_INITIAL_CAPACITY".to_string()))?,
                None => defaults.initial_capacity,
            },

            prompt: match lookup("LIFO_PROMPT") {
                Some(v) => parse_bool(&v)
                    .ok_or_else(|| ConfigError::InvalidValue("LIFO_PROMPT".to_string()))?,
                None => defaults.prompt,
            },
        };

        Ok(config)
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
