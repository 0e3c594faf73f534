//! Shared building blocks for the tour workspace.
//!
//! * [`config`]: run options filled in by the command line.
//! * [`error`]: the error type returned across crate boundaries.
//! * [`transcript`]: the ordered output of a single chapter.

pub mod config;
pub mod error;
pub mod transcript;

#[doc(hidden)]
pub use tracing;

pub use error::{Result, TourError};
pub use transcript::Transcript;

/// Appends a formatted line to anything exposing a `say(String)` method.
#[macro_export]
macro_rules! say {
    ($out:expr) => {
        $out.say(String::new())
    };
    ($out:expr, $($arg:tt)*) => {
        $out.say(format!($($arg)*))
    };
}

/// Reports a positive outcome through the `tour::success` log target.
#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::tracing::info!(target: "tour::success", $($arg)*)
    };
}

/// Reports a recoverable problem through the `tour::warn` log target.
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::tracing::warn!(target: "tour::warn", $($arg)*)
    };
}
