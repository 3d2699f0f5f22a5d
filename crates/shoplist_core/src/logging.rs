//! Logging bootstrap and list event lines.
//!
//! # Responsibility
//! - Start the rolling file logger once per process.
//! - Format store/dispatch events as `event=<name> module=<module> key=value` lines.
//!
//! # Invariants
//! - Event fields hold counts, flags or static labels only, so item names
//!   and search text cannot reach a log line.
//! - Panic payloads are reduced to their length and source location.
//! - A second init must repeat the first level and directory exactly.

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use log::{error, info, log, log_enabled, Level};
use once_cell::sync::OnceCell;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

const LOG_FILE_BASENAME: &str = "shoplist";
const LOG_ROTATE_BYTES: u64 = 2 * 1024 * 1024;
const LOG_FILES_KEPT: usize = 3;
const LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

static ACTIVE_LOGGER: OnceCell<ActiveLogger> = OnceCell::new();
static PANIC_HOOK: OnceCell<()> = OnceCell::new();

struct ActiveLogger {
    level: &'static str,
    log_dir: PathBuf,
    _handle: LoggerHandle,
}

/// Value carried by one event field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue {
    Count(usize),
    Flag(bool),
    Label(&'static str),
}

impl From<usize> for FieldValue {
    fn from(value: usize) -> Self {
        Self::Count(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

impl From<&'static str> for FieldValue {
    fn from(value: &'static str) -> Self {
        Self::Label(value)
    }
}

/// One structured list event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListEvent {
    module: &'static str,
    event: &'static str,
    fields: Vec<(&'static str, FieldValue)>,
}

impl ListEvent {
    pub fn new(module: &'static str, event: &'static str) -> Self {
        Self {
            module,
            event,
            fields: Vec::new(),
        }
    }

    /// Appends `key=value`, keeping insertion order.
    pub fn with(mut self, key: &'static str, value: impl Into<FieldValue>) -> Self {
        self.fields.push((key, value.into()));
        self
    }

    /// Renders the event as one log line.
    pub fn line(&self) -> String {
        let mut line = format!("event={} module={}", self.event, self.module);
        for (key, value) in &self.fields {
            let _ = match value {
                FieldValue::Count(count) => write!(line, " {key}={count}"),
                FieldValue::Flag(flag) => write!(line, " {key}={flag}"),
                FieldValue::Label(label) => write!(line, " {key}={label}"),
            };
        }
        line
    }

    /// Writes the line at `level` when that level is enabled.
    pub fn emit(&self, level: Level) {
        if log_enabled!(level) {
            log!(level, "{}", self.line());
        }
    }
}

/// Starts file logging under `log_dir` at `level`.
///
/// # Errors
/// - Unknown `level`, or a blank/relative `log_dir`.
/// - Directory creation or logger startup failure.
/// - Logging already active with another level or directory.
pub fn init_logging(level: &str, log_dir: &str) -> Result<(), String> {
    let level = parse_level(level)?;
    let log_dir = parse_log_dir(log_dir)?;

    let active = ACTIVE_LOGGER.get_or_try_init(|| start(level, &log_dir))?;
    if active.level != level || active.log_dir != log_dir {
        return Err(format!(
            "logging is active as `{}` in `{}`; cannot switch to `{}` in `{}`",
            active.level,
            active.log_dir.display(),
            level,
            log_dir.display()
        ));
    }
    Ok(())
}

/// `(level, log_dir)` of the active logger, if started.
pub fn logging_status() -> Option<(&'static str, PathBuf)> {
    ACTIVE_LOGGER
        .get()
        .map(|active| (active.level, active.log_dir.clone()))
}

/// `debug` for debug builds, `info` otherwise.
pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}

fn start(level: &'static str, log_dir: &Path) -> Result<ActiveLogger, String> {
    std::fs::create_dir_all(log_dir)
        .map_err(|err| format!("cannot create `{}`: {err}", log_dir.display()))?;

    let handle = Logger::try_with_str(level)
        .map_err(|err| format!("bad log spec `{level}`: {err}"))?
        .log_to_file(
            FileSpec::default()
                .directory(log_dir)
                .basename(LOG_FILE_BASENAME),
        )
        .rotate(
            Criterion::Size(LOG_ROTATE_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(LOG_FILES_KEPT),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .append()
        .format_for_files(flexi_logger::detailed_format)
        .start()
        .map_err(|err| format!("logger did not start: {err}"))?;

    install_panic_hook();
    info!(
        "{}",
        ListEvent::new("core", "logging_started")
            .with("level", level)
            .line()
    );

    Ok(ActiveLogger {
        level,
        log_dir: log_dir.to_path_buf(),
        _handle: handle,
    })
}

fn parse_level(raw: &str) -> Result<&'static str, String> {
    let wanted = raw.trim().to_ascii_lowercase();
    let wanted = if wanted == "warning" { "warn" } else { wanted.as_str() };
    LEVELS
        .iter()
        .copied()
        .find(|level| *level == wanted)
        .ok_or_else(|| {
            format!(
                "log level `{}` is not one of {}",
                raw.trim(),
                LEVELS.join("|")
            )
        })
}

fn parse_log_dir(raw: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(raw.trim());
    if path.as_os_str().is_empty() {
        return Err("log_dir is blank".to_string());
    }
    if !path.is_absolute() {
        return Err(format!("log_dir `{}` is not absolute", path.display()));
    }
    Ok(path)
}

fn install_panic_hook() {
    if PANIC_HOOK.set(()).is_err() {
        return;
    }

    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let location = info
            .location()
            .map(|loc| format!("{}:{}", loc.file(), loc.line()))
            .unwrap_or_else(|| "unknown".to_string());
        error!(
            "event=panic module=core location={location} payload_len={}",
            panic_payload_len(info.payload())
        );
        previous(info);
    }));
}

fn panic_payload_len(payload: &(dyn std::any::Any + Send)) -> usize {
    payload
        .downcast_ref::<&str>()
        .map(|message| message.chars().count())
        .or_else(|| {
            payload
                .downcast_ref::<String>()
                .map(|message| message.chars().count())
        })
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::{
        init_logging, logging_status, panic_payload_len, parse_level, parse_log_dir, ListEvent,
    };
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn scratch_dir(tag: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock after epoch")
            .as_nanos();
        std::env::temp_dir().join(format!("shoplist-{tag}-{}-{nanos}", std::process::id()))
    }

    #[test]
    fn event_line_keeps_field_order() {
        let line = ListEvent::new("store", "item_toggled")
            .with("index", 2usize)
            .with("checked", true)
            .line();
        assert_eq!(line, "event=item_toggled module=store index=2 checked=true");
    }

    #[test]
    fn event_line_without_fields() {
        assert_eq!(
            ListEvent::new("dispatch", "render").line(),
            "event=render module=dispatch"
        );
    }

    #[test]
    fn panic_payload_is_measured_not_copied() {
        let owned: Box<dyn std::any::Any + Send> = Box::new(String::from("oat milk"));
        assert_eq!(panic_payload_len(owned.as_ref()), 8);
        let other: Box<dyn std::any::Any + Send> = Box::new(7u8);
        assert_eq!(panic_payload_len(other.as_ref()), 0);
    }

    #[test]
    fn parse_level_is_case_insensitive() {
        assert_eq!(parse_level("DEBUG").unwrap(), "debug");
        assert_eq!(parse_level(" Warning ").unwrap(), "warn");
        assert!(parse_level("loud").unwrap_err().contains("trace|debug"));
    }

    #[test]
    fn parse_log_dir_requires_absolute_path() {
        assert!(parse_log_dir("   ").is_err());
        assert!(parse_log_dir("logs/shop").unwrap_err().contains("not absolute"));
    }

    #[test]
    fn init_logging_repeats_but_never_switches() {
        let dir = scratch_dir("log");
        let dir_str = dir.to_str().expect("utf-8 temp dir").to_string();
        let other = scratch_dir("log-other");
        let other_str = other.to_str().expect("utf-8 temp dir").to_string();

        init_logging("info", &dir_str).unwrap();
        init_logging("INFO", &dir_str).unwrap();
        assert!(init_logging("debug", &dir_str).unwrap_err().contains("cannot switch"));
        assert!(init_logging("info", &other_str).unwrap_err().contains("cannot switch"));

        assert_eq!(logging_status(), Some(("info", dir)));
    }
}
