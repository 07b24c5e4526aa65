// File: crates/logaxis-core/src/series.rs
// Summary: Synthetic weekly series generation and the per-series configuration model.

use serde::{Serialize, Serializer};

use crate::error::{ChartError, Result};
use crate::types::SERIES_LEN;

/// One (week, value) sample. Serializes as `[x, y]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SeriesPoint {
    pub x: u32,
    pub y: f64,
}

impl SeriesPoint {
    pub const fn new(x: u32, y: f64) -> Self {
        Self { x, y }
    }
}

impl Serialize for SeriesPoint {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        (self.x, self.y).serialize(serializer)
    }
}

/// Generate `SERIES_LEN` points for weeks 1..=16.
///
/// The value starts at 1 and grows each week by the truncated product
/// `floor(value * growth)`. A growth of 1.0 doubles every step; the
/// truncation compounds, so the sequence must be recomputed rather than
/// approximated with `powf`.
pub fn generate_series(growth: f64) -> Result<Vec<SeriesPoint>> {
    if !growth.is_finite() || growth < 0.0 {
        return Err(ChartError::InvalidGrowth(growth));
    }
    let mut points = Vec::with_capacity(SERIES_LEN as usize);
    let mut value = 1.0f64;
    for week in 1..=SERIES_LEN {
        points.push(SeriesPoint::new(week, value));
        // value and growth are non-negative, so floor == trunc
        value += (value * growth).floor();
    }
    tracing::debug!(growth, ?points, "generated series");
    Ok(points)
}

/// Stroke pattern names understood by the rendering collaborator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum DashStyle {
    Solid,
    ShortDash,
    ShortDot,
    ShortDashDot,
    ShortDashDotDot,
    Dot,
    Dash,
    LongDash,
    DashDot,
    LongDashDot,
    LongDashDotDot,
}

impl DashStyle {
    /// On/off intervals in multiples of the stroke width; empty for solid.
    pub fn pattern(self) -> &'static [f32] {
        match self {
            DashStyle::Solid => &[],
            DashStyle::ShortDash => &[3.0, 1.0],
            DashStyle::ShortDot => &[1.0, 1.0],
            DashStyle::ShortDashDot => &[3.0, 1.0, 1.0, 1.0],
            DashStyle::ShortDashDotDot => &[3.0, 1.0, 1.0, 1.0, 1.0, 1.0],
            DashStyle::Dot => &[1.0, 3.0],
            DashStyle::Dash => &[4.0, 3.0],
            DashStyle::LongDash => &[8.0, 3.0],
            DashStyle::DashDot => &[4.0, 3.0, 1.0, 3.0],
            DashStyle::LongDashDot => &[8.0, 3.0, 1.0, 3.0],
            DashStyle::LongDashDotDot => &[8.0, 3.0, 1.0, 3.0, 1.0, 3.0],
        }
    }
}

/// Value-based color override. Applies to values below `value`;
/// a zone without `value` catches everything above the previous one.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Zone {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    pub color: String,
}

impl Zone {
    pub fn below(value: f64, color: impl Into<String>) -> Self {
        Self { value: Some(value), color: color.into() }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesType {
    Line,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Series {
    pub name: String,
    #[serde(rename = "type")]
    pub series_type: SeriesType,
    pub data: Vec<SeriesPoint>,
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dash_style: Option<DashStyle>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub zones: Vec<Zone>,
}

impl Series {
    pub fn line(name: impl Into<String>, color: impl Into<String>, data: Vec<SeriesPoint>) -> Self {
        Self {
            name: name.into(),
            series_type: SeriesType::Line,
            data,
            color: color.into(),
            dash_style: None,
            zones: Vec::new(),
        }
    }

    pub fn with_dash_style(mut self, dash_style: DashStyle) -> Self {
        self.dash_style = Some(dash_style);
        self
    }

    pub fn with_zones(mut self, zones: Vec<Zone>) -> Self {
        self.zones = zones;
        self
    }

    /// Color for a point at `y`: first zone whose threshold lies above it, else the series color.
    pub fn color_for(&self, y: f64) -> &str {
        self.zones
            .iter()
            .find(|z| z.value.map_or(true, |v| y < v))
            .map(|z| z.color.as_str())
            .unwrap_or(&self.color)
    }
}
