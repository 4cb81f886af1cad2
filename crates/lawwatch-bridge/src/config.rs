//! Bridge configuration, built once at startup from flags and environment.

use std::time::Duration;

use clap::{Parser, ValueEnum};

#[cfg(windows)]
const DEFAULT_PORT: &str = "COM4";
#[cfg(not(windows))]
const DEFAULT_PORT: &str = "/dev/ttyUSB0";

/// Which update check a `CHECK_UPDATE` command runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CheckMode {
    /// Global newest-law check against the recent law list.
    Latest,
    /// Search restricted to the currently selected category.
    Category,
}

/// Serial-to-HTTP bridge for law update notifications.
#[derive(Debug, Parser)]
#[command(name = "lawwatch", version)]
pub struct BridgeConfig {
    /// Serial device path.
    #[arg(long, env = "LAWWATCH_PORT", default_value = DEFAULT_PORT)]
    pub port: String,

    /// Serial baud rate.
    #[arg(long, env = "LAWWATCH_BAUD", default_value_t = 9600)]
    pub baud: u32,

    /// Serial read timeout in milliseconds.
    #[arg(long, default_value_t = 1000)]
    pub read_timeout_ms: u64,

    /// Idle poll interval in milliseconds.
    #[arg(long, default_value_t = 100)]
    pub poll_ms: u64,

    /// Pause after a failed listener iteration in milliseconds.
    #[arg(long, default_value_t = 500)]
    pub retry_ms: u64,

    /// Backend base URL (no trailing slash).
    #[arg(
        long,
        env = "LAWWATCH_API_BASE",
        default_value = "https://ietp-aerca-backend.onrender.com"
    )]
    pub api_base: String,

    /// Bearer token attached to every backend request.
    #[arg(long, env = "LAWWATCH_API_TOKEN")]
    pub api_token: Option<String>,

    /// Backend request timeout in seconds.
    #[arg(long, default_value_t = 10)]
    pub request_timeout_secs: u64,

    /// Update check mode.
    #[arg(long, value_enum, default_value_t = CheckMode::Category)]
    pub mode: CheckMode,

    /// Initial category selection (category mode only).
    #[arg(long)]
    pub category: Option<String>,

    /// External viewer command for RUN_ANALYSIS (program plus arguments).
    #[arg(long, env = "LAWWATCH_ANALYSIS_CMD")]
    pub analysis_command: Option<String>,
}

impl BridgeConfig {
    pub fn read_timeout(&self) -> Duration {
        Duration::from_millis(self.read_timeout_ms)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_ms)
    }

    pub fn retry_pause(&self) -> Duration {
        Duration::from_millis(self.retry_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
