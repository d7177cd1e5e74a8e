//! Console logging for the command-line tools.
use std::env;
use std::str::FromStr;

/// Environment variable selecting the log level.
pub const LOG_ENV: &str = "DTREE_LOG";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Quiet,
    Normal,
    Verbose,
}

impl Default for LogLevel {
    fn default() -> Self {
        LogLevel::Normal
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "quiet" => Ok(LogLevel::Quiet),
            "normal" => Ok(LogLevel::Normal),
            "verbose" => Ok(LogLevel::Verbose),
            other => Err(format!("unknown log level {:?}", other)),
        }
    }
}

impl LogLevel {
    /// Level from `DTREE_LOG`, falling back to `Normal` when unset or unknown.
    pub fn from_env() -> Self {
        env::var(LOG_ENV)
            .ok()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or_default()
    }

    pub fn permits(self, required: LogLevel) -> bool {
        self != LogLevel::Quiet && (self == required || required == LogLevel::Normal)
    }
}

pub fn log(level: LogLevel, required: LogLevel, msg: &str) {
    if level.permits(required) {
        println!("{}", msg);
    }
}
