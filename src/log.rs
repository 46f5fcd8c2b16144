//! Logging shims over the optional `tracing` dependency.
//!
//! Call sites use the full path (`crate::log::debug!`) so geometry and
//! render milestones read the same whether or not the `tracing` feature is
//! compiled in; without the feature the macros expand to nothing.

#[cfg(feature = "tracing")]
pub use tracing::{debug, warn};

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
pub use crate::{debug, warn};
