//! Process-wide display level and the stderr logging macros.
//!
//! 0 = no output; 1 = errors only; 2 = normal (default); 3 = info; 4 = verbose
//!
//! The codec and session layers only log at levels 3 and 4, so embedding
//! applications see nothing from them unless they raise the level.

use std::sync::atomic::{AtomicU32, Ordering};

pub static DISPLAY_LEVEL: AtomicU32 = AtomicU32::new(2);

/// Returns the current display level.
#[inline]
pub fn display_level() -> u32 {
    DISPLAY_LEVEL.load(Ordering::Relaxed)
}

/// Sets the display level.
#[inline]
pub fn set_display_level(level: u32) {
    DISPLAY_LEVEL.store(level, Ordering::Relaxed);
}

/// Print to stderr unconditionally.
#[macro_export]
macro_rules! display {
    ($($arg:tt)*) => { eprint!($($arg)*) };
}

/// Print to stderr when the display level is at or above `level`.
#[macro_export]
macro_rules! displaylevel {
    ($level:expr, $($arg:tt)*) => {
        if $crate::display::display_level() >= $level {
            eprint!($($arg)*);
        }
    };
}
