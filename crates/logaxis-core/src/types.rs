// File: crates/logaxis-core/src/types.rs
// Summary: Shared constants (chart size, initial axis state) and screen insets.

use crate::axis::AxisType;

/// Chart surface width in pixels.
pub const WIDTH: u32 = 800;
/// Chart surface height in pixels.
pub const HEIGHT: u32 = 600;

/// Number of weekly points produced by the series generator.
pub const SERIES_LEN: u32 = 16;

pub const INITIAL_Y_AXIS_TYPE: AxisType = AxisType::Logarithmic;
pub const INITIAL_Y_AXIS_TICK_INTERVAL: f64 = 1.0;

/// Choices offered by the log-base selector, in display order.
pub const TICK_INTERVAL_OPTIONS: [f64; 9] = [0.2, 0.3, 0.4, 0.5, 1.0, 2.0, 3.0, 4.0, 5.0];

/// Y-axis domain clamp shared by both axis types.
pub const Y_AXIS_MIN: f64 = 1.0;
pub const Y_AXIS_MAX: f64 = 100_000.0;

/// Screen margins around the plot area, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }
}

impl Default for Insets {
    // Right side is wider: the y axis sits opposite.
    fn default() -> Self {
        Self::new(40, 72, 84, 64)
    }
}
