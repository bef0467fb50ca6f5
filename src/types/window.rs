use serde::{Deserialize, Serialize};

/// Lowest opacity the window may be set to.
pub const MIN_OPACITY: f64 = 0.1;
/// Fully opaque.
pub const MAX_OPACITY: f64 = 1.0;
/// Opacity used when nothing has been stored yet.
pub const DEFAULT_OPACITY: f64 = 1.0;
/// Step applied by the opacity up/down actions.
pub const OPACITY_STEP: f64 = 0.1;
/// Share of the work area, in percent, used when no window size has been stored.
pub const DEFAULT_SIZE_PERCENT: u32 = 70;

/// Window opacity, always within `[MIN_OPACITY, MAX_OPACITY]`.
///
/// Deserialization goes through [`Opacity::new`], so an out-of-range value on
/// disk is clamped on read.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct Opacity(f64);

impl Opacity {
    /// Clamps `value` into the valid range. NaN maps to the default.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self(DEFAULT_OPACITY);
        }
        Self(value.clamp(MIN_OPACITY, MAX_OPACITY))
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Returns `self + delta`, clamped and snapped to whole percent so that
    /// repeated steps do not accumulate float drift.
    pub fn adjusted(self, delta: f64) -> Self {
        let next = ((self.0 + delta) * 100.0).round() / 100.0;
        Self::new(next)
    }

    /// Opacity as a rounded integer percentage, for display.
    pub fn percent(self) -> u32 {
        (self.0 * 100.0).round() as u32
    }
}

impl Default for Opacity {
    fn default() -> Self {
        Self(DEFAULT_OPACITY)
    }
}

impl From<f64> for Opacity {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<Opacity> for f64 {
    fn from(opacity: Opacity) -> Self {
        opacity.0
    }
}

/// Persisted window dimensions in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowSize {
    pub width: u32,
    pub height: u32,
}

impl WindowSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Picks the initial window size.
///
/// Each saved dimension that is missing or zero falls back on its own to
/// `DEFAULT_SIZE_PERCENT` of the work area, rounded down.
pub fn resolve_window_size(saved: Option<WindowSize>, work_area: WindowSize) -> WindowSize {
    let fallback = |extent: u32| (u64::from(extent) * u64::from(DEFAULT_SIZE_PERCENT) / 100) as u32;
    let saved = saved.unwrap_or(WindowSize::new(0, 0));
    WindowSize {
        width: if saved.width > 0 { saved.width } else { fallback(work_area.width) },
        height: if saved.height > 0 { saved.height } else { fallback(work_area.height) },
    }
}
