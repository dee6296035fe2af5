//! Status macros shared across the workspace.
//!
//! Every crate reports progress through these rather than calling `tracing`
//! directly, so the terminal formatter can attach one consistent symbol per
//! status kind.

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        ::tracing::info!(target: "swapmeet::status", $($arg)*)
    };
}

#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        ::tracing::info!(target: "swapmeet::success", $($arg)*)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        ::tracing::warn!(target: "swapmeet::status", $($arg)*)
    };
}
