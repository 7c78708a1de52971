//! Display-level globals and logging macros.
//!
//! One crate-wide atomic verbosity counter gates a small set of macros used
//! throughout the CLI and coordinator, instead of pulling in a logging crate.

use std::sync::atomic::{AtomicU32, Ordering};

/// 0 = silent, 1 = errors only, 2 = normal, 3 = verbose.
pub static DISPLAY_LEVEL: AtomicU32 = AtomicU32::new(2);

#[inline]
pub fn display_level() -> u32 {
    DISPLAY_LEVEL.load(Ordering::Relaxed)
}

#[inline]
pub fn set_display_level(level: u32) {
    DISPLAY_LEVEL.store(level, Ordering::Relaxed);
}

/// Conditionally prints to stderr at or above `level`.
#[macro_export]
macro_rules! displaylevel {
    ($level:expr, $($arg:tt)*) => {
        if $crate::cli::constants::display_level() >= $level {
            eprintln!($($arg)*);
        }
    };
}
