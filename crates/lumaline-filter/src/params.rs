use serde::{Deserialize, Serialize};

/// Default first threshold.
pub const DEFAULT_THRESHOLD1: i32 = 100;

/// Default second threshold.
pub const DEFAULT_THRESHOLD2: i32 = 200;

/// Tunable parameters of the filter.
///
/// The two thresholds are stored and reported back but do not influence the current
/// transform. Missing fields fall back to their defaults when deserializing.
///
/// # Example
///
/// ```
/// use lumaline_filter::FilterParams;
///
/// let params: FilterParams = serde_json::from_str(r#"{ "colorful": false }"#).unwrap();
///
/// assert_eq!(params.threshold1, 100);
/// assert_eq!(params.threshold2, 200);
/// assert!(!params.colorful);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterParams {
    /// First sensitivity threshold.
    pub threshold1: i32,
    /// Second sensitivity threshold.
    pub threshold2: i32,
    /// Draw colored marks on the black canvas. When false the output is plain black.
    pub colorful: bool,
}

impl FilterParams {
    /// Create a new set of parameters.
    pub fn new(threshold1: i32, threshold2: i32, colorful: bool) -> Self {
        Self {
            threshold1,
            threshold2,
            colorful,
        }
    }
}

impl Default for FilterParams {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD1, DEFAULT_THRESHOLD2, true)
    }
}
