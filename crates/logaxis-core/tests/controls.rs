// File: crates/logaxis-core/tests/controls.rs
// Purpose: Validate selector options, parsing, callback behavior, and control visibility.

use logaxis_core::controls::coerce_number;
use logaxis_core::{AxisType, AxisTypeSelector, ChartError, ControlPanel, Selector, TickIntervalSelector};

#[test]
fn axis_type_options_mark_selection() {
    let sel = AxisTypeSelector { selected: AxisType::Logarithmic };
    let opts = sel.options();
    let values: Vec<&str> = opts.iter().map(|o| o.value.as_str()).collect();
    let texts: Vec<&str> = opts.iter().map(|o| o.text.as_str()).collect();
    assert_eq!(values, ["linear", "logarithmic"]);
    assert_eq!(texts, ["Linear", "Logarithmic"]);
    assert_eq!(opts.iter().filter(|o| o.selected).count(), 1);
    assert!(opts[1].selected);
    assert_eq!(sel.label(), "Y-Axis Type");
    assert!(sel.doc_href().ends_with("yAxis.type"));
}

#[test]
fn axis_type_change_validates_before_callback() {
    let sel = AxisTypeSelector { selected: AxisType::Logarithmic };
    let mut seen = Vec::new();
    sel.change("linear", |t| seen.push(t)).unwrap();
    let err = sel.change("Linear", |t| seen.push(t)).unwrap_err();
    assert!(matches!(err, ChartError::InvalidAxisType(ref s) if s == "Linear"));
    assert!(sel.change("datetime", |t| seen.push(t)).is_err());
    assert_eq!(seen, [AxisType::Linear]);
}

#[test]
fn tick_interval_options_in_declared_order() {
    let sel = TickIntervalSelector { selected: 1.0 };
    let opts = sel.options();
    let values: Vec<&str> = opts.iter().map(|o| o.value.as_str()).collect();
    assert_eq!(values, ["0.2", "0.3", "0.4", "0.5", "1", "2", "3", "4", "5"]);
    let selected: Vec<&str> = opts.iter().filter(|o| o.selected).map(|o| o.value.as_str()).collect();
    assert_eq!(selected, ["1"]);
    assert_eq!(sel.label(), "Log Base");
}

#[test]
fn tick_interval_change_always_calls_back() {
    let sel = TickIntervalSelector { selected: 1.0 };
    let mut seen = Vec::new();
    sel.change("0.4", |v| seen.push(v)).unwrap();
    sel.change("5", |v| seen.push(v)).unwrap();
    sel.change("bogus", |v| seen.push(v)).unwrap();
    assert_eq!(&seen[..2], &[0.4, 5.0]);
    assert!(seen[2].is_nan());
}

#[test]
fn number_coercion() {
    assert_eq!(coerce_number(" 2 "), 2.0);
    assert_eq!(coerce_number(""), 0.0);
    assert!(coerce_number("abc").is_nan());
}

#[test]
fn tick_interval_selector_absent_on_linear_axis() {
    let panel = ControlPanel::new(AxisType::Linear, 2.0);
    assert!(panel.tick_interval.is_none());
    assert_eq!(panel.axis_type.selected, AxisType::Linear);

    let panel = ControlPanel::new(AxisType::Logarithmic, 2.0);
    assert_eq!(panel.tick_interval.map(|s| s.selected), Some(2.0));
}
