//! View lifetime tracking used to cancel in-flight work.
//!
//! Every mount starts a new generation. Requests and worker messages are tagged
//! with the generation that issued them, and a result is applied only while
//! that generation is still mounted. Unmounting does not abort the host-side
//! request; it makes its eventual result inert.

/// Cancellation token tied to the lifetime of one view instance.
///
/// # Example
///
/// ```rust
/// use rosterview::app::lifetime::ViewLifetime;
///
/// let mut lifetime = ViewLifetime::default();
/// let first = lifetime.mount();
/// assert!(lifetime.is_current(first));
///
/// lifetime.unmount();
/// assert!(!lifetime.is_current(first));
///
/// let second = lifetime.mount();
/// assert!(!lifetime.is_current(first));
/// assert!(lifetime.is_current(second));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewLifetime {
    generation: u64,
    mounted: bool,
}

impl ViewLifetime {
    /// Starts a new view instance and returns its generation.
    pub fn mount(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.mounted = true;
        tracing::debug!(generation = self.generation, "view mounted");
        self.generation
    }

    /// Ends the current view instance. Results for it are discarded from now on.
    pub fn unmount(&mut self) {
        if self.mounted {
            tracing::debug!(generation = self.generation, "view unmounted");
        }
        self.mounted = false;
    }

    #[must_use]
    pub const fn is_mounted(&self) -> bool {
        self.mounted
    }

    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether a result tagged with `generation` may still touch view state.
    #[must_use]
    pub const fn is_current(&self, generation: u64) -> bool {
        self.mounted && self.generation == generation
    }
}
