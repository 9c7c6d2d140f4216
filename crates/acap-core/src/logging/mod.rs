//! Structured logging setup for acap-core.
//!
//! The library only emits `tracing` events; hosts that have no subscriber of
//! their own can install one here.
//!
//! # Usage
//!
//! ```ignore
//! use acap_core::logging::{init_logging, LogConfig};
//!
//! let config = LogConfig::from_env(None, None);
//! init_logging(&config);
//! ```
//!
//! All log output goes to stderr, either human-readable or as JSON lines.

pub mod config;

pub use config::{LevelSource, LogConfig, LogFormat, LogLevel, LOG_FORMAT_ENV, LOG_LEVEL_ENV};

use std::io::IsTerminal;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Build the event filter for `config`.
///
/// A level set by an override or `ACAP_LOG` is used as is. Otherwise a valid
/// `RUST_LOG` replaces the default level.
pub fn build_filter(config: &LogConfig) -> EnvFilter {
    match config.level_source {
        LevelSource::Default => {
            EnvFilter::try_from_default_env().unwrap_or_else(|_| level_filter(config.level))
        }
        LevelSource::Override | LevelSource::Env => level_filter(config.level),
    }
}

fn level_filter(level: LogLevel) -> EnvFilter {
    EnvFilter::new(format!("acap_core={}", LevelFilter::from(level)))
}

/// Install a global subscriber for `config` writing to stderr.
///
/// Returns `false` if a global subscriber was already installed, in which
/// case the existing one is left in place.
pub fn init_logging(config: &LogConfig) -> bool {
    init_logging_with_writer(config, std::io::stderr)
}

/// Install a global subscriber for `config` writing to `writer`.
pub fn init_logging_with_writer<W>(config: &LogConfig, writer: W) -> bool
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let filter = build_filter(config);

    let installed = match config.format {
        LogFormat::Human => {
            let use_ansi = std::io::stderr().is_terminal();
            let fmt_layer = fmt::layer()
                .with_writer(writer)
                .with_target(false)
                .with_ansi(use_ansi);

            if config.timestamps {
                tracing_subscriber::registry()
                    .with(filter)
                    .with(fmt_layer)
                    .try_init()
            } else {
                tracing_subscriber::registry()
                    .with(filter)
                    .with(fmt_layer.without_time())
                    .try_init()
            }
        }
        LogFormat::Jsonl => {
            let json_layer = fmt::layer()
                .json()
                .with_writer(writer)
                .with_current_span(false);
            tracing_subscriber::registry()
                .with(filter)
                .with(json_layer)
                .try_init()
        }
    };

    installed.is_ok()
}

/// Initialize logging from the environment (for tests and simple hosts).
pub fn init_default_logging() -> bool {
    init_logging(&LogConfig::from_env(None, None))
}
