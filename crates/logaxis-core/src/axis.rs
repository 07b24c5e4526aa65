// File: crates/logaxis-core/src/axis.rs
// Summary: Axis configuration model: axis type, titles, plot bands/lines, and tick label formatting.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::ChartError;
use crate::types::{Y_AXIS_MAX, Y_AXIS_MIN};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisType {
    Linear,
    #[default]
    Logarithmic,
}

impl AxisType {
    pub const ALL: [AxisType; 2] = [AxisType::Linear, AxisType::Logarithmic];

    pub const fn as_str(self) -> &'static str {
        match self {
            AxisType::Linear => "linear",
            AxisType::Logarithmic => "logarithmic",
        }
    }

    /// Option text shown in the selector.
    pub const fn label(self) -> &'static str {
        match self {
            AxisType::Linear => "Linear",
            AxisType::Logarithmic => "Logarithmic",
        }
    }

    pub const fn is_log(self) -> bool {
        matches!(self, AxisType::Logarithmic)
    }
}

impl fmt::Display for AxisType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AxisType {
    type Err = ChartError;

    /// Exact match only; no case folding or trimming.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AxisType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| ChartError::InvalidAxisType(s.to_string()))
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Title {
    pub text: String,
}

impl Title {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Highlighted range [from, to] along an axis.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PlotBand {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<Title>,
    pub color: String,
    pub from: f64,
    pub to: f64,
}

/// Highlighted single value along an axis.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PlotLine {
    pub color: String,
    pub value: f64,
    pub width: f64,
}

/// Tick label formatting applied by the renderer. Not part of the serialized form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LabelFormatter {
    #[default]
    Plain,
    /// "1st Wk", "2nd Wk", then "th" for every other value.
    OrdinalWeek,
}

impl LabelFormatter {
    pub fn format(self, value: f64) -> String {
        match self {
            LabelFormatter::Plain => format_number(value),
            LabelFormatter::OrdinalWeek => ordinal_week_label(value),
        }
    }
}

/// Week label with a deliberately simplified ordinal suffix: only 1 and 2 are
/// special, so 3 becomes "3th" and 22 becomes "22th".
pub fn ordinal_week_label(value: f64) -> String {
    let ending = if value == 1.0 {
        "st"
    } else if value == 2.0 {
        "nd"
    } else {
        "th"
    };
    format!("{}{} Wk", format_number(value), ending)
}

/// Render integral values without a trailing ".0".
pub fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct AxisLabels {
    #[serde(skip)]
    pub formatter: LabelFormatter,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct XAxisOptions {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub plot_bands: Vec<PlotBand>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub plot_lines: Vec<PlotLine>,
    pub title: Title,
    pub tick_interval: f64,
    pub labels: AxisLabels,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YAxisOptions {
    #[serde(rename = "type")]
    pub axis_type: AxisType,
    pub title: Title,
    /// Powers of ten between ticks on a logarithmic axis; `None` lets the renderer pick.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tick_interval: Option<f64>,
    pub grid_line_width: f64,
    pub opposite: bool,
    pub min: f64,
    pub max: f64,
}

/// Build the complete y axis from the two pieces of selector state.
///
/// Every field is recomputed on each call, so no sibling setting is lost when
/// one of the two selections changes. The interval only applies to a
/// logarithmic axis; a linear axis gets automatic spacing.
pub fn y_axis_options(axis_type: AxisType, tick_interval: f64) -> YAxisOptions {
    YAxisOptions {
        axis_type,
        title: Title::new("commits"),
        tick_interval: axis_type.is_log().then_some(tick_interval),
        grid_line_width: 1.0,
        opposite: true,
        min: Y_AXIS_MIN,
        max: Y_AXIS_MAX,
    }
}
