//! Core logging bootstrap.
//!
//! # Responsibility
//! - Start the `flexi_logger` backend once per process, to rotating files or
//!   to stderr.
//! - Capture panics as sanitized, single-line log events.
//!
//! # Invariants
//! - Initialization is idempotent for an identical `LogConfig`.
//! - Any later attempt with a different config is rejected, not applied.
//! - Initialization never panics.

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use log::{error, info};
use once_cell::sync::OnceCell;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

const LOG_FILE_BASENAME: &str = "pokedex";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;
const MAX_LOG_FILES: usize = 5;
const MAX_PANIC_PAYLOAD_CHARS: usize = 160;

static LOGGING_STATE: OnceCell<LoggingState> = OnceCell::new();
static PANIC_HOOK_INSTALLED: OnceCell<()> = OnceCell::new();

struct LoggingState {
    config: LogConfig,
    _handle: LoggerHandle,
}

/// Where and how verbosely to log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Normalized level: `trace|debug|info|warn|error`.
    pub level: &'static str,
    /// Absolute directory for rotating files; `None` logs to stderr.
    pub log_dir: Option<PathBuf>,
}

impl LogConfig {
    /// Validates a level string and optional directory.
    ///
    /// # Errors
    /// - Unsupported level names.
    /// - Blank or relative directories.
    pub fn new(level: &str, log_dir: Option<&str>) -> Result<Self, LoggingError> {
        Ok(Self {
            level: normalize_level(level)?,
            log_dir: log_dir.map(normalize_log_dir).transpose()?,
        })
    }

    /// Stderr logging at the build-mode default level.
    pub fn stderr_default() -> Self {
        Self {
            level: default_log_level(),
            log_dir: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoggingError {
    UnsupportedLevel(String),
    InvalidLogDir(String),
    /// A different config is already active.
    AlreadyInitialized { active: String, requested: String },
    Backend(String),
}

impl Display for LoggingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedLevel(level) => write!(
                f,
                "unsupported log level `{level}`; expected trace|debug|info|warn|error"
            ),
            Self::InvalidLogDir(message) => write!(f, "invalid log directory: {message}"),
            Self::AlreadyInitialized { active, requested } => write!(
                f,
                "logging already initialized as {active}; refusing to switch to {requested}"
            ),
            Self::Backend(message) => write!(f, "failed to start logger: {message}"),
        }
    }
}

impl Error for LoggingError {}

/// Starts logging for the process.
///
/// # Errors
/// - Returns `AlreadyInitialized` when a different config is active.
/// - Returns `InvalidLogDir` / `Backend` when the sink cannot be set up.
pub fn init_logging(config: &LogConfig) -> Result<(), LoggingError> {
    let state = LOGGING_STATE.get_or_try_init(|| start_backend(config))?;
    if state.config != *config {
        return Err(LoggingError::AlreadyInitialized {
            active: describe(&state.config),
            requested: describe(config),
        });
    }
    Ok(())
}

/// Active config, or `None` before initialization.
pub fn logging_status() -> Option<LogConfig> {
    LOGGING_STATE.get().map(|state| state.config.clone())
}

/// `debug` for debug builds, `info` for release builds.
pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}

fn start_backend(config: &LogConfig) -> Result<LoggingState, LoggingError> {
    let logger = Logger::try_with_str(config.level)
        .map_err(|err| LoggingError::UnsupportedLevel(format!("{} ({err})", config.level)))?;

    let logger = match &config.log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir).map_err(|err| {
                LoggingError::InvalidLogDir(format!("cannot create `{}`: {err}", dir.display()))
            })?;
            logger
                .log_to_file(
                    FileSpec::default()
                        .directory(dir.as_path())
                        .basename(LOG_FILE_BASENAME),
                )
                .rotate(
                    Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
                    Naming::Numbers,
                    Cleanup::KeepLogFiles(MAX_LOG_FILES),
                )
                .write_mode(WriteMode::BufferAndFlush)
                .append()
                .format_for_files(flexi_logger::detailed_format)
        }
        None => logger.log_to_stderr().format(flexi_logger::default_format),
    };

    let handle = logger
        .start()
        .map_err(|err| LoggingError::Backend(err.to_string()))?;

    install_panic_hook_once();
    info!(
        "event=core_init module=logging status=ok level={} sink={} version={}",
        config.level,
        sink_label(config),
        env!("CARGO_PKG_VERSION")
    );

    Ok(LoggingState {
        config: config.clone(),
        _handle: handle,
    })
}

fn describe(config: &LogConfig) -> String {
    format!("level={} sink={}", config.level, sink_label(config))
}

fn sink_label(config: &LogConfig) -> String {
    config
        .log_dir
        .as_ref()
        .map(|dir| dir.display().to_string())
        .unwrap_or_else(|| "stderr".to_string())
}

fn normalize_level(level: &str) -> Result<&'static str, LoggingError> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        other => Err(LoggingError::UnsupportedLevel(other.to_string())),
    }
}

fn normalize_log_dir(log_dir: &str) -> Result<PathBuf, LoggingError> {
    let trimmed = log_dir.trim();
    if trimmed.is_empty() {
        return Err(LoggingError::InvalidLogDir("path is empty".to_string()));
    }
    let path = Path::new(trimmed);
    if !path.is_absolute() {
        return Err(LoggingError::InvalidLogDir(format!(
            "`{trimmed}` is not absolute"
        )));
    }
    Ok(path.to_path_buf())
}

fn install_panic_hook_once() {
    if PANIC_HOOK_INSTALLED.set(()).is_err() {
        return;
    }

    let previous_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let location = panic_info
            .location()
            .map(|loc| format!("{}:{}", loc.file(), loc.line()))
            .unwrap_or_else(|| "unknown".to_string());
        let payload = if let Some(message) = panic_info.payload().downcast_ref::<&str>() {
            (*message).to_string()
        } else if let Some(message) = panic_info.payload().downcast_ref::<String>() {
            message.clone()
        } else {
            "non-string panic payload".to_string()
        };
        error!(
            "event=panic_captured module=core status=error location={} payload={}",
            location,
            single_line(&payload, MAX_PANIC_PAYLOAD_CHARS)
        );
        previous_hook(panic_info);
    }));
}

/// Flattens newlines and caps length at `max_chars`.
fn single_line(value: &str, max_chars: usize) -> String {
    let flat = value.replace(['\n', '\r'], " ");
    if flat.chars().count() <= max_chars {
        return flat;
    }
    let mut cut = flat.chars().take(max_chars).collect::<String>();
    cut.push_str("...");
    cut
}

#[cfg(test)]
mod tests {
    use super::{init_logging, logging_status, single_line, LogConfig, LoggingError};

    #[test]
    fn config_normalizes_level_aliases() {
        let config = LogConfig::new(" WARNING ", None).unwrap();
        assert_eq!(config.level, "warn");
        assert_eq!(config.log_dir, None);
    }

    #[test]
    fn config_rejects_relative_dir_and_unknown_level() {
        assert!(matches!(
            LogConfig::new("info", Some("logs/dev")),
            Err(LoggingError::InvalidLogDir(_))
        ));
        assert!(matches!(
            LogConfig::new("verbose", None),
            Err(LoggingError::UnsupportedLevel(_))
        ));
    }

    #[test]
    fn single_line_flattens_and_truncates() {
        let flat = single_line("line1\nline2\rline3", 8);
        assert!(!flat.contains('\n'));
        assert!(!flat.contains('\r'));
        assert!(flat.ends_with("..."));
    }

    #[test]
    fn init_is_idempotent_and_rejects_reconfiguration() {
        let dir = tempfile::tempdir().unwrap();
        let dir_str = dir.path().to_str().unwrap().to_string();
        let config = LogConfig::new("info", Some(&dir_str)).unwrap();

        init_logging(&config).unwrap();
        init_logging(&config).unwrap();

        let other = LogConfig::new("debug", Some(&dir_str)).unwrap();
        let err = init_logging(&other).unwrap_err();
        assert!(err.to_string().contains("refusing to switch"));
        assert_eq!(logging_status(), Some(config));
    }
}
