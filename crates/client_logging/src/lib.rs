#![deny(missing_docs)]
//! Shared logging utilities for the prospector workspace.
//!
//! This crate provides the `client_*` logging macros used across the codebase
//! and a minimal test initializer for the global logger. Log lines emitted
//! from inside a poll loop carry the current tick as a `[tick N]` prefix.

use std::cell::Cell;

thread_local! {
    /// Current poll tick for this thread; 0 means "not inside a poll loop".
    static POLL_TICK: Cell<u64> = const { Cell::new(0) };
}

/// Sets the poll tick count for the current thread.
/// Called by the poll loop once per interval tick.
pub fn set_poll_tick(tick: u64) {
    POLL_TICK.with(|v| v.set(tick));
}

/// Retrieves the poll tick count for the current thread.
/// Returns 0 outside of a poll loop.
pub fn get_poll_tick() -> u64 {
    POLL_TICK.with(|v| v.get())
}

#[doc(hidden)]
pub fn __log_with_tick(level: log::Level, args: std::fmt::Arguments<'_>) {
    let tick = get_poll_tick();
    if tick == 0 {
        log::log!(level, "{args}");
    } else {
        log::log!(level, "[tick {tick}] {args}");
    }
}

/// Logs an info-level message using the global logging facade.
#[macro_export]
macro_rules! client_info {
    ($($arg:tt)*) => {{
        $crate::__log_with_tick(log::Level::Info, format_args!($($arg)*));
    }};
}

/// Logs a debug-level message using the global logging facade.
#[macro_export]
macro_rules! client_debug {
    ($($arg:tt)*) => {{
        $crate::__log_with_tick(log::Level::Debug, format_args!($($arg)*));
    }};
}

/// Logs a warn-level message using the global logging facade.
#[macro_export]
macro_rules! client_warn {
    ($($arg:tt)*) => {{
        $crate::__log_with_tick(log::Level::Warn, format_args!($($arg)*));
    }};
}

/// Logs an error-level message using the global logging facade.
#[macro_export]
macro_rules! client_error {
    ($($arg:tt)*) => {{
        $crate::__log_with_tick(log::Level::Error, format_args!($($arg)*));
    }};
}

/// Initializes a simple terminal logger for use in unit tests.
///
/// Safely no-ops if a logger has already been initialized.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    // Ignore the error if a logger was already set by another test.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}

#[cfg(test)]
mod tests {
    use super::{get_poll_tick, set_poll_tick};

    #[test]
    fn poll_tick_is_thread_local() {
        set_poll_tick(7);
        assert_eq!(get_poll_tick(), 7);

        let other = std::thread::spawn(get_poll_tick).join().unwrap();
        assert_eq!(other, 0);
    }
}
