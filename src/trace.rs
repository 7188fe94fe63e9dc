//! Optional diagnostics for queue operations.
//!
//! Enable with `--features tracing`. Without the feature every trace macro
//! expands to nothing, so the lock and copy paths carry no logging cost.

/// Install a `tracing` subscriber printing thread ids and uptime.
///
/// Filter with `RUST_LOG`; defaults to `tsafeq=debug`. Does nothing if the
/// `tracing` feature is not enabled.
#[cfg(feature = "tracing")]
pub fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("tsafeq=debug"));

    // A second install (e.g. from another test) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_thread_ids(true)
                .with_thread_names(true)
                .with_file(false)
                .with_line_number(false)
                .with_timer(fmt::time::uptime()),
        )
        .with(filter)
        .try_init();
}

#[cfg(not(feature = "tracing"))]
pub const fn init_tracing() {}

#[cfg(feature = "tracing")]
#[allow(unused_imports)]
pub(crate) use tracing::{debug, error, info, trace, warn};

#[cfg(not(feature = "tracing"))]
macro_rules! trace_noop {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
macro_rules! debug_noop {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
macro_rules! info_noop {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
macro_rules! warn_noop {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
macro_rules! error_noop {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
#[allow(unused_imports)]
pub(crate) use debug_noop as debug;
#[cfg(not(feature = "tracing"))]
#[allow(unused_imports)]
pub(crate) use error_noop as error;
#[cfg(not(feature = "tracing"))]
#[allow(unused_imports)]
pub(crate) use info_noop as info;
#[cfg(not(feature = "tracing"))]
#[allow(unused_imports)]
pub(crate) use trace_noop as trace;
#[cfg(not(feature = "tracing"))]
#[allow(unused_imports)]
pub(crate) use warn_noop as warn;
