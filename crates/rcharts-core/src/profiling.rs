//! Profiling utilities based on the `puffin` crate.
//!
//! With the `profiling` feature disabled the scope macros expand to nothing,
//! so layout code can open scopes unconditionally.

#[cfg(feature = "profiling")]
pub use puffin::{profile_function, profile_scope};

#[cfg(not(feature = "profiling"))]
#[macro_export]
#[doc(hidden)]
macro_rules! __rcharts_profile_noop {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "profiling"))]
pub use crate::__rcharts_profile_noop as profile_scope;

#[cfg(not(feature = "profiling"))]
pub use crate::__rcharts_profile_noop as profile_function;

/// Turn scope collection on or off.
///
/// # Example
/// ```no_run
/// use rcharts_core::profiling::set_enabled;
///
/// set_enabled(true);
/// ```
pub fn set_enabled(enabled: bool) {
    #[cfg(feature = "profiling")]
    puffin::set_scopes_on(enabled);

    #[cfg(not(feature = "profiling"))]
    let _ = enabled;

    tracing::debug!("Profiling scopes {}", if enabled { "enabled" } else { "disabled" });
}

/// Mark the start of a new render pass for profiling.
///
/// Call this once per chart layout to group the collected scopes by pass.
#[inline]
pub fn new_frame() {
    #[cfg(feature = "profiling")]
    puffin::GlobalProfiler::lock().new_frame();
}
