#![deny(missing_docs)]
//! Shared logging utilities for the swipe deck workspace.
//!
//! This crate provides the `swipe_*` logging macros used across the codebase
//! and a minimal test initializer for the global logger. Every message is
//! prefixed with the animation frame it was emitted on, so a log of a drag
//! can be lined up against the frames that rendered it.

use std::cell::Cell;

thread_local! {
    /// Thread-local storage for the current animation frame number.
    static FRAME: Cell<u64> = const { Cell::new(0) };
}

/// Sets the animation frame number for the current thread.
/// The frame loop calls this once per rendered frame.
pub fn set_frame(frame: u64) {
    FRAME.with(|v| v.set(frame));
}

/// Retrieves the animation frame number for the current thread.
/// Returns 0 until a frame loop has started.
pub fn current_frame() -> u64 {
    FRAME.with(|v| v.get())
}

#[doc(hidden)]
pub use log as __log;

/// Logs at an explicit [`log::Level`], tagged with the current frame.
#[macro_export]
macro_rules! swipe_log {
    ($level:expr, $($arg:tt)*) => {
        $crate::__log::log!(
            $level,
            "[f{}] {}",
            $crate::current_frame(),
            format_args!($($arg)*)
        )
    };
}

/// Per-frame detail: spring steps, cards leaving the viewport.
#[macro_export]
macro_rules! swipe_trace {
    ($($arg:tt)*) => { $crate::swipe_log!($crate::__log::Level::Trace, $($arg)*) };
}

/// Gesture releases, ignored commands and similar diagnostics.
#[macro_export]
macro_rules! swipe_debug {
    ($($arg:tt)*) => { $crate::swipe_log!($crate::__log::Level::Debug, $($arg)*) };
}

/// Deck transitions: decisions, exhaustion, resets.
#[macro_export]
macro_rules! swipe_info {
    ($($arg:tt)*) => { $crate::swipe_log!($crate::__log::Level::Info, $($arg)*) };
}

/// Recoverable bad input such as unknown directions or duplicate ids.
#[macro_export]
macro_rules! swipe_warn {
    ($($arg:tt)*) => { $crate::swipe_log!($crate::__log::Level::Warn, $($arg)*) };
}

/// Logs an error-level message tagged with the current frame.
#[macro_export]
macro_rules! swipe_error {
    ($($arg:tt)*) => { $crate::swipe_log!($crate::__log::Level::Error, $($arg)*) };
}

/// Initializes a simple terminal logger for use in tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

    // Frame-by-frame traces are too noisy even for debug builds.
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
