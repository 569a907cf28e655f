use crate::params::FilterParams;

/// Mutable state record of the filter.
///
/// Created disabled and uninitialized with the default [`FilterParams`]. Releasing the
/// filter clears both flags but keeps the parameters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FilterState {
    /// Whether the caller wants frames to be filtered.
    pub enabled: bool,
    /// Whether the filter has been initialized and not released since.
    pub initialized: bool,
    /// The current parameters.
    pub params: FilterParams,
}

impl FilterState {
    /// Whether frames should go through the transform.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.enabled && self.initialized
    }

    /// Clear the enabled and initialized flags, keeping the parameters.
    pub fn reset(&mut self) {
        self.enabled = false;
        self.initialized = false;
    }
}
