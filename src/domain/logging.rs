use std::sync::OnceLock;

use derive_more::Display;

/// Severity of a log line. Display is padded to a fixed width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Display)]
pub enum LogLevel {
    #[display(fmt = "DEBUG")]
    Debug,
    #[display(fmt = " INFO")]
    Info,
    #[display(fmt = " WARN")]
    Warn,
    #[display(fmt = "ERROR")]
    Error,
}

/// Layer and unit that produced a log line
#[derive(Debug, Clone, Display)]
pub enum LogComponent {
    #[display(fmt = "APP:{}", _0)]
    Application(&'static str),
    #[display(fmt = "INF:{}", _0)]
    Infrastructure(&'static str),
    #[display(fmt = "PRE:{}", _0)]
    Presentation(&'static str),
}

#[derive(Debug, Clone)]
pub struct LogEntry {
    pub timestamp: u64,
    pub level: LogLevel,
    pub component: LogComponent,
    pub message: String,
    /// Extra payload, usually JSON
    pub metadata: Option<String>,
}

/// Millisecond clock. Also drives drag throttling.
pub trait TimeProvider: Send + Sync {
    fn current_timestamp(&self) -> u64;
    fn format_timestamp(&self, timestamp: u64) -> String;
}

/// Sink for log entries
pub trait Logger: Send + Sync {
    fn log(&self, entry: LogEntry);
}

static LOGGER: OnceLock<Box<dyn Logger>> = OnceLock::new();
static CLOCK: OnceLock<Box<dyn TimeProvider>> = OnceLock::new();

/// Install the global logger. Later calls are ignored.
pub fn init_logger(logger: Box<dyn Logger>) {
    let _ = LOGGER.set(logger);
}

/// Install the global clock. Later calls are ignored.
pub fn init_time_provider(clock: Box<dyn TimeProvider>) {
    let _ = CLOCK.set(clock);
}

pub fn get_logger() -> &'static dyn Logger {
    LOGGER.get().map(|logger| logger.as_ref()).unwrap_or(&Silent)
}

pub fn get_time_provider() -> &'static dyn TimeProvider {
    CLOCK.get().map(|clock| clock.as_ref()).unwrap_or(&TickClock)
}

/// Stamp and hand a message to the global logger.
pub fn emit(level: LogLevel, component: LogComponent, message: String) {
    emit_entry(level, component, message, None);
}

pub fn emit_with_metadata(level: LogLevel, component: LogComponent, message: String, metadata: String) {
    emit_entry(level, component, message, Some(metadata));
}

fn emit_entry(level: LogLevel, component: LogComponent, message: String, metadata: Option<String>) {
    get_logger().log(LogEntry {
        timestamp: get_time_provider().current_timestamp(),
        level,
        component,
        message,
        metadata,
    });
}

struct Silent;
impl Logger for Silent {
    fn log(&self, _entry: LogEntry) {}
}

/// Clock for hosts without a browser: counts calls.
struct TickClock;
impl TimeProvider for TickClock {
    fn current_timestamp(&self) -> u64 {
        use std::sync::atomic::{AtomicU64, Ordering};
        static TICKS: AtomicU64 = AtomicU64::new(0);
        TICKS.fetch_add(1, Ordering::SeqCst)
    }

    fn format_timestamp(&self, timestamp: u64) -> String {
        format!("#{}", timestamp)
    }
}

/// Debug lines are compiled out of release builds.
#[macro_export]
macro_rules! log_debug {
    ($component:expr, $($arg:tt)*) => {
        #[cfg(debug_assertions)]
        {
            $crate::domain::logging::emit($crate::domain::logging::LogLevel::Debug, $component, format!($($arg)*));
        }
    };
}

#[macro_export]
macro_rules! log_info {
    ($component:expr, $($arg:tt)*) => {
        $crate::domain::logging::emit($crate::domain::logging::LogLevel::Info, $component, format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_warn {
    ($component:expr, $($arg:tt)*) => {
        $crate::domain::logging::emit($crate::domain::logging::LogLevel::Warn, $component, format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_error {
    ($component:expr, $($arg:tt)*) => {
        $crate::domain::logging::emit($crate::domain::logging::LogLevel::Error, $component, format!($($arg)*))
    };
}
