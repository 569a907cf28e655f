use std::borrow::Cow;
use std::cell::Cell;

use log::{debug, info, trace, warn};
use lumaline_image::Image;
use lumaline_imgproc::color::{bgra_from_rgba, rgba_from_bgra};

use crate::{
    error::FilterError,
    params::FilterParams,
    state::FilterState,
    sweep::{self, BLACK},
    Frame,
};

/// Counters describing what the engine did with the frames it was given.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FilterStats {
    /// Frames passed to the engine.
    pub frames_seen: u64,
    /// Frames for which a new filtered frame was produced.
    pub frames_filtered: u64,
    /// Frames returned unchanged because the filter was inactive.
    pub frames_passthrough: u64,
    /// Frames returned unchanged because the transform failed.
    pub frames_failed: u64,
    /// Marks drawn on the last filtered frame.
    pub last_marks: usize,
}

/// The frame filter engine.
///
/// Owns the [`FilterState`] and applies the transform to frames. Configuration needs
/// `&mut self` while filtering only needs `&self`, so a single owner drives both serially;
/// share the engine across threads behind a `Mutex` if needed.
///
/// # Example
///
/// ```
/// use lumaline_filter::{FilterEngine, Frame};
///
/// let mut engine = FilterEngine::new();
/// assert!(engine.initialize());
/// engine.set_enabled(true);
///
/// let frame = Frame::from_size_pixel([20, 20].into(), [255, 255, 255, 255]).unwrap();
/// let out = engine.apply_filter(&frame);
///
/// assert_eq!(out.size(), frame.size());
/// assert_eq!(out.pixel(19, 19), Some(&[0u8, 0, 0, 255][..]));
/// ```
#[derive(Debug, Default)]
pub struct FilterEngine {
    state: FilterState,
    stats: Cell<FilterStats>,
}

impl FilterEngine {
    /// Create a disabled, uninitialized engine with the default parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a disabled, uninitialized engine with the given parameters.
    pub fn with_params(params: FilterParams) -> Self {
        Self {
            state: FilterState {
                params,
                ..FilterState::default()
            },
            stats: Cell::default(),
        }
    }

    /// Initialize the filter.
    ///
    /// Checks that a canvas can be allocated, then marks the filter as initialized.
    /// Calling it again is harmless. On failure it returns `false` and the initialized
    /// flag keeps its previous value.
    pub fn initialize(&mut self) -> bool {
        match Frame::from_size_pixel([1, 1].into(), BLACK) {
            Ok(_) => {
                self.state.initialized = true;
                info!("filter initialized");
                true
            }
            Err(e) => {
                warn!("failed to initialize the filter: {e}");
                false
            }
        }
    }

    /// Enable or disable filtering.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.state.enabled = enabled;
        debug!("filter {}", if enabled { "enabled" } else { "disabled" });
    }

    /// Replace all the filter parameters at once.
    pub fn set_filter_params(&mut self, threshold1: i32, threshold2: i32, colorful: bool) {
        self.set_params(FilterParams::new(threshold1, threshold2, colorful));
    }

    /// Replace the filter parameters.
    pub fn set_params(&mut self, params: FilterParams) {
        self.state.params = params;
        debug!(
            "filter params: threshold1={}, threshold2={}, colorful={}",
            params.threshold1, params.threshold2, params.colorful
        );
    }

    /// Disable and deinitialize the filter. The parameters are kept.
    pub fn release(&mut self) {
        self.state.reset();
        info!("filter released");
    }

    /// Whether filtering is enabled.
    pub fn is_enabled(&self) -> bool {
        self.state.enabled
    }

    /// Whether the filter is initialized.
    pub fn is_initialized(&self) -> bool {
        self.state.initialized
    }

    /// The current parameters.
    pub fn params(&self) -> FilterParams {
        self.state.params
    }

    /// A copy of the current state.
    pub fn state(&self) -> FilterState {
        self.state
    }

    /// Counters accumulated since the engine was created or [`FilterEngine::reset_stats`].
    pub fn stats(&self) -> FilterStats {
        self.stats.get()
    }

    /// Zero the counters.
    pub fn reset_stats(&self) {
        self.stats.set(FilterStats::default());
    }

    /// Apply the filter to an RGBA frame.
    ///
    /// Returns the input itself when the filter is not both enabled and initialized, or
    /// when producing the output failed. Otherwise returns a new frame of the same size:
    /// opaque black, with a colored diagonal mark at every bright sample point when the
    /// colorful mode is on. The input is never modified.
    pub fn apply_filter<'a>(&self, input: &'a Frame) -> Cow<'a, Frame> {
        let result = self.try_apply_filter(input);
        self.settle(input, result)
    }

    /// Apply the filter to a BGRA frame, returning a BGRA frame.
    ///
    /// Same passthrough and fallback behavior as [`FilterEngine::apply_filter`].
    pub fn apply_filter_bgra<'a>(&self, input: &'a Frame) -> Cow<'a, Frame> {
        let result = self.try_apply_filter_bgra(input);
        self.settle(input, result)
    }

    /// Fallible core of [`FilterEngine::apply_filter`].
    ///
    /// `Ok(None)` means the filter is inactive and the input should be used as is.
    pub fn try_apply_filter(&self, input: &Frame) -> Result<Option<Frame>, FilterError> {
        if !self.state.is_active() {
            return Ok(None);
        }
        self.render(input).map(Some)
    }

    /// Fallible core of [`FilterEngine::apply_filter_bgra`].
    pub fn try_apply_filter_bgra(&self, input: &Frame) -> Result<Option<Frame>, FilterError> {
        if !self.state.is_active() {
            return Ok(None);
        }

        let mut rgba = Image::from_size_val(input.size(), 0u8)?;
        rgba_from_bgra(input, &mut rgba)?;

        let filtered = self.render(&rgba)?;

        // reuse the converted buffer for the output
        bgra_from_rgba(&filtered, &mut rgba)?;
        Ok(Some(rgba))
    }

    fn render(&self, input: &Frame) -> Result<Frame, FilterError> {
        let mut canvas = Frame::from_size_pixel(input.size(), BLACK)?;

        let marks = if self.state.params.colorful {
            sweep::draw_marks(input, &mut canvas)?
        } else {
            0
        };

        self.update_stats(|s| s.last_marks = marks);
        trace!("filtered {} frame with {marks} marks", input.size());

        Ok(canvas)
    }

    fn settle<'a>(
        &self,
        input: &'a Frame,
        result: Result<Option<Frame>, FilterError>,
    ) -> Cow<'a, Frame> {
        self.update_stats(|s| s.frames_seen += 1);
        match result {
            Ok(Some(output)) => {
                self.update_stats(|s| s.frames_filtered += 1);
                Cow::Owned(output)
            }
            Ok(None) => {
                self.update_stats(|s| s.frames_passthrough += 1);
                Cow::Borrowed(input)
            }
            Err(e) => {
                warn!("error applying the filter, showing the original frame: {e}");
                self.update_stats(|s| s.frames_failed += 1);
                Cow::Borrowed(input)
            }
        }
    }

    fn update_stats(&self, f: impl FnOnce(&mut FilterStats)) {
        let mut stats = self.stats.get();
        f(&mut stats);
        self.stats.set(stats);
    }
}
