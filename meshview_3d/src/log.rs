//! Viewer diagnostics
//!
//! One process-wide sink receives every `LogEntry`. It starts out as
//! `DefaultLogger` (colored console lines) and can be swapped for any
//! `Logger`, e.g. to capture entries in tests or forward them to a file.
//! Entries below the severity threshold never reach the sink.
//!
//! Components log through the `viewer_*!` macros with a `"meshview::<Component>"`
//! source string. `viewer_error!` also records the call site.

use colored::*;
use std::fmt::Display;
use std::sync::{OnceLock, RwLock};
use std::time::SystemTime;
use chrono::{DateTime, Local};

/// Destination for viewer log entries
///
/// ```no_run
/// use meshview_3d::meshview::log::{Logger, LogEntry};
///
/// struct StderrLogger;
///
/// impl Logger for StderrLogger {
///     fn log(&self, entry: &LogEntry) {
///         eprintln!("{}: {}", entry.source, entry.message);
///     }
/// }
/// ```
pub trait Logger: Send + Sync {
    fn log(&self, entry: &LogEntry);
}

/// One diagnostic message
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub severity: LogSeverity,
    pub timestamp: SystemTime,
    /// Emitting component, e.g. "meshview::Mesh"
    pub source: String,
    pub message: String,
    /// Call site, only filled in by `viewer_error!`
    pub file: Option<&'static str>,
    pub line: Option<u32>,
}

impl LogEntry {
    pub fn new(severity: LogSeverity, source: &str, message: String) -> Self {
        Self {
            severity,
            timestamp: SystemTime::now(),
            source: source.to_string(),
            message,
            file: None,
            line: None,
        }
    }

    /// Attach a call site
    pub fn at(mut self, file: &'static str, line: u32) -> Self {
        self.file = Some(file);
        self.line = Some(line);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogSeverity {
    Trace,
    Debug,
    Info,
    /// Degraded but still rendering (e.g. an unresolved shading parameter)
    Warn,
    Error,
}

impl LogSeverity {
    /// Fixed-width tag used in console lines
    pub fn label(self) -> &'static str {
        match self {
            LogSeverity::Trace => "TRACE",
            LogSeverity::Debug => "DEBUG",
            LogSeverity::Info => "INFO ",
            LogSeverity::Warn => "WARN ",
            LogSeverity::Error => "ERROR",
        }
    }

    fn colored_label(self) -> ColoredString {
        let label = self.label();
        match self {
            LogSeverity::Trace => label.bright_black(),
            LogSeverity::Debug => label.cyan(),
            LogSeverity::Info => label.green(),
            LogSeverity::Warn => label.yellow(),
            LogSeverity::Error => label.red().bold(),
        }
    }
}

/// Console logger: `[timestamp] [SEVERITY] [source] message (file:line)`.
///
/// Warnings and errors go to stderr, everything else to stdout.
pub struct DefaultLogger;

impl DefaultLogger {
    /// The line `log` prints, without colors
    pub fn format_plain(entry: &LogEntry) -> String {
        format_line(entry, entry.severity.label(), &entry.source)
    }
}

impl Logger for DefaultLogger {
    fn log(&self, entry: &LogEntry) {
        let line = format_line(entry, entry.severity.colored_label(), entry.source.bright_blue());
        if entry.severity >= LogSeverity::Warn {
            eprintln!("{}", line);
        } else {
            println!("{}", line);
        }
    }
}

fn format_line(entry: &LogEntry, severity: impl Display, source: impl Display) -> String {
    let local: DateTime<Local> = entry.timestamp.into();
    let mut line = format!(
        "[{}] [{}] [{}] {}",
        local.format("%Y-%m-%d %H:%M:%S%.3f"),
        severity,
        source,
        entry.message
    );
    if let (Some(file), Some(number)) = (entry.file, entry.line) {
        line.push_str(&format!(" ({}:{})", file, number));
    }
    line
}

// ============================================================================
// Global sink
// ============================================================================

struct Sink {
    logger: Box<dyn Logger>,
    min_severity: LogSeverity,
}

static SINK: OnceLock<RwLock<Sink>> = OnceLock::new();

fn sink() -> &'static RwLock<Sink> {
    SINK.get_or_init(|| {
        RwLock::new(Sink {
            logger: Box::new(DefaultLogger),
            min_severity: LogSeverity::Trace,
        })
    })
}

/// Route all further entries to `logger`
///
/// ```no_run
/// use meshview_3d::meshview::log::{self, DefaultLogger};
///
/// log::set_logger(DefaultLogger);
/// ```
pub fn set_logger<L: Logger + 'static>(logger: L) {
    if let Ok(mut sink) = sink().write() {
        sink.logger = Box::new(logger);
    }
}

/// Go back to `DefaultLogger`; the severity threshold is left unchanged
pub fn reset_logger() {
    set_logger(DefaultLogger);
}

/// Drop entries less severe than `severity`
pub fn set_min_severity(severity: LogSeverity) {
    if let Ok(mut sink) = sink().write() {
        sink.min_severity = severity;
    }
}

pub fn min_severity() -> LogSeverity {
    sink().read().map_or(LogSeverity::Trace, |sink| sink.min_severity)
}

fn dispatch(entry: LogEntry) {
    if let Ok(sink) = sink().read() {
        if entry.severity >= sink.min_severity {
            sink.logger.log(&entry);
        }
    }
}

/// Emit an entry without call site
pub fn log(severity: LogSeverity, source: &str, message: String) {
    dispatch(LogEntry::new(severity, source, message));
}

/// Emit an entry with its call site
pub fn log_detailed(
    severity: LogSeverity,
    source: &str,
    message: String,
    file: &'static str,
    line: u32,
) {
    dispatch(LogEntry::new(severity, source, message).at(file, line));
}

// ============================================================================
// Macros
// ============================================================================

#[doc(hidden)]
#[macro_export]
macro_rules! __viewer_log {
    ($severity:ident, $source:expr, $($arg:tt)*) => {
        $crate::log::log($crate::log::LogSeverity::$severity, $source, format!($($arg)*))
    };
}

/// ```no_run
/// # use meshview_3d::viewer_trace;
/// viewer_trace!("meshview::Camera", "pitch={} yaw={}", 0.0, 15.0);
/// ```
#[macro_export]
macro_rules! viewer_trace {
    ($source:expr, $($arg:tt)*) => { $crate::__viewer_log!(Trace, $source, $($arg)*) };
}

#[macro_export]
macro_rules! viewer_debug {
    ($source:expr, $($arg:tt)*) => { $crate::__viewer_log!(Debug, $source, $($arg)*) };
}

#[macro_export]
macro_rules! viewer_info {
    ($source:expr, $($arg:tt)*) => { $crate::__viewer_log!(Info, $source, $($arg)*) };
}

/// Degraded state the viewer keeps running through
#[macro_export]
macro_rules! viewer_warn {
    ($source:expr, $($arg:tt)*) => { $crate::__viewer_log!(Warn, $source, $($arg)*) };
}

/// Error entry carrying the caller's file and line
///
/// ```no_run
/// # use meshview_3d::viewer_error;
/// viewer_error!("meshview::Renderer", "swapchain creation failed: {}", "device lost");
/// ```
#[macro_export]
macro_rules! viewer_error {
    ($source:expr, $($arg:tt)*) => {
        $crate::log::log_detailed(
            $crate::log::LogSeverity::Error,
            $source,
            format!($($arg)*),
            file!(),
            line!()
        )
    };
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
