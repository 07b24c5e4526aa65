// File: crates/logaxis-core/src/controls.rs
// Summary: Headless axis control panel: axis-type and log-base selectors driven by callbacks.
// Notes:
// - Selectors hold no chart state. They describe what to show and turn a raw
//   selection into a typed value for the owner's callback.

use crate::axis::{format_number, AxisType};
use crate::error::Result;
use crate::types::TICK_INTERVAL_OPTIONS;

/// One `<option>` as a front end would render it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub text: String,
    pub selected: bool,
}

/// Common shape of both selectors: label, options, current value, change handling.
pub trait Selector {
    type Value;

    fn label(&self) -> &'static str;
    /// Reference documentation for the option this selector drives.
    fn doc_href(&self) -> &'static str;
    fn options(&self) -> Vec<SelectOption>;
    /// Turn the raw option value into a typed value.
    fn parse(&self, raw: &str) -> Result<Self::Value>;

    /// Handle a change event. The callback only runs when `parse` succeeds;
    /// a parse failure is returned to the caller untouched.
    fn change<F, T>(&self, raw: &str, on_change: F) -> Result<T>
    where
        F: FnOnce(Self::Value) -> T,
    {
        let value = self.parse(raw)?;
        Ok(on_change(value))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AxisTypeSelector {
    pub selected: AxisType,
}

impl Selector for AxisTypeSelector {
    type Value = AxisType;

    fn label(&self) -> &'static str { "Y-Axis Type" }

    fn doc_href(&self) -> &'static str { "https://api.highcharts.com/highcharts/yAxis.type" }

    fn options(&self) -> Vec<SelectOption> {
        AxisType::ALL
            .into_iter()
            .map(|t| SelectOption {
                value: t.as_str().to_string(),
                text: t.label().to_string(),
                selected: t == self.selected,
            })
            .collect()
    }

    fn parse(&self, raw: &str) -> Result<AxisType> {
        raw.parse()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickIntervalSelector {
    pub selected: f64,
}

impl Selector for TickIntervalSelector {
    type Value = f64;

    fn label(&self) -> &'static str { "Log Base" }

    fn doc_href(&self) -> &'static str { "https://api.highcharts.com/highcharts/yAxis.tickInterval" }

    fn options(&self) -> Vec<SelectOption> {
        TICK_INTERVAL_OPTIONS
            .into_iter()
            .map(|v| SelectOption {
                value: format_number(v),
                text: format_number(v),
                selected: v == self.selected,
            })
            .collect()
    }

    /// The option list is closed, so there is nothing to validate.
    fn parse(&self, raw: &str) -> Result<f64> {
        Ok(coerce_number(raw))
    }
}

/// Numeric coercion with browser `Number()` semantics for the inputs a select can emit:
/// blank text is 0, anything unparsable is NaN.
pub fn coerce_number(raw: &str) -> f64 {
    let s = raw.trim();
    if s.is_empty() {
        return 0.0;
    }
    s.parse::<f64>().unwrap_or(f64::NAN)
}

/// Controls currently on screen. The log-base selector exists only for a
/// logarithmic axis; on a linear axis it is absent, not disabled.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ControlPanel {
    pub axis_type: AxisTypeSelector,
    pub tick_interval: Option<TickIntervalSelector>,
}

impl ControlPanel {
    pub fn new(axis_type: AxisType, tick_interval: f64) -> Self {
        Self {
            axis_type: AxisTypeSelector { selected: axis_type },
            tick_interval: axis_type
                .is_log()
                .then_some(TickIntervalSelector { selected: tick_interval }),
        }
    }
}

/// Raw selection coming from a front end or a scripted harness.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ControlEvent {
    AxisType(String),
    TickInterval(String),
}
