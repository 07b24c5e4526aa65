// File: crates/logaxis-core/tests/shell.rs
// Purpose: Validate shell state transitions and the render contract using a recording renderer.

use std::sync::Arc;

use logaxis_core::{AppShell, AxisType, ChartError, ChartOptions, ControlEvent, Renderer};

#[derive(Default)]
struct Recorder {
    frames: Vec<ChartOptions>,
}

impl Renderer for Recorder {
    fn render(&mut self, options: &ChartOptions) -> Result<(), ChartError> {
        self.frames.push(options.clone());
        Ok(())
    }
}

fn shell() -> AppShell<Recorder> {
    AppShell::new(Recorder::default()).expect("shell")
}

#[test]
fn initial_state_renders_once() {
    let s = shell();
    assert_eq!(s.axis_type(), AxisType::Logarithmic);
    assert_eq!(s.tick_interval(), 1.0);
    assert_eq!(s.renderer().frames.len(), 1);
    assert_eq!(s.renderer().frames[0], **s.options());
}

#[test]
fn every_update_renders_latest_configuration() {
    let mut s = shell();
    s.update_axis_type(AxisType::Linear).unwrap();
    s.update_tick_interval(3.0).unwrap();
    s.update_axis_type(AxisType::Logarithmic).unwrap();
    let frames = &s.renderer().frames;
    assert_eq!(frames.len(), 4);
    assert_eq!(frames[1].y_axis.axis_type, AxisType::Linear);
    assert_eq!(frames[1].y_axis.tick_interval, None);
    // the interval chosen while linear survives the switch back
    assert_eq!(frames[3].y_axis.tick_interval, Some(3.0));
    assert_eq!(frames[3], **s.options());
}

#[test]
fn updates_swap_in_fresh_configuration() {
    let mut s = shell();
    let before = Arc::clone(s.options());
    s.update_tick_interval(0.2).unwrap();
    assert!(!Arc::ptr_eq(&before, s.options()));
    assert_eq!(before.y_axis.tick_interval, Some(1.0));
    assert_eq!(s.options().y_axis.tick_interval, Some(0.2));
}

#[test]
fn sibling_axis_fields_survive_any_update_order() {
    let mut s = shell();
    s.update_tick_interval(2.0).unwrap();
    s.update_axis_type(AxisType::Linear).unwrap();
    s.update_axis_type(AxisType::Logarithmic).unwrap();
    let y = &s.options().y_axis;
    assert_eq!((y.min, y.max, y.grid_line_width, y.opposite), (1.0, 100_000.0, 1.0, true));
    assert_eq!(y.tick_interval, Some(2.0));
    assert_eq!(y.title.text, "commits");
}

#[test]
fn repeated_selection_is_idempotent() {
    let mut s = shell();
    for raw in ["linear", "logarithmic", "logarithmic"] {
        s.dispatch(ControlEvent::AxisType(raw.into())).unwrap();
    }
    assert_eq!(s.axis_type(), AxisType::Logarithmic);
    let last = s.renderer().frames.last().unwrap().clone();
    s.dispatch(ControlEvent::AxisType("logarithmic".into())).unwrap();
    assert_eq!(*s.renderer().frames.last().unwrap(), last);
}

#[test]
fn invalid_axis_type_is_rejected_without_state_change() {
    let mut s = shell();
    s.dispatch(ControlEvent::AxisType("linear".into())).unwrap();
    let frames = s.renderer().frames.len();
    let options = Arc::clone(s.options());

    let err = s.dispatch(ControlEvent::AxisType("category".into())).unwrap_err();
    assert!(matches!(err, ChartError::InvalidAxisType(_)));
    assert_eq!(s.axis_type(), AxisType::Linear);
    assert!(Arc::ptr_eq(&options, s.options()));
    assert_eq!(s.renderer().frames.len(), frames);
}

#[test]
fn control_panel_tracks_axis_type() {
    let mut s = shell();
    assert!(s.control_panel().tick_interval.is_some());
    s.dispatch(ControlEvent::AxisType("linear".into())).unwrap();
    assert!(s.control_panel().tick_interval.is_none());
    s.dispatch(ControlEvent::AxisType("logarithmic".into())).unwrap();
    assert!(s.control_panel().tick_interval.is_some());
}

#[test]
fn tick_interval_event_is_coerced() {
    let mut s = shell();
    s.dispatch(ControlEvent::TickInterval("0.5".into())).unwrap();
    assert_eq!(s.tick_interval(), 0.5);
    assert_eq!(s.options().y_axis.tick_interval, Some(0.5));
}

struct Failing;

impl Renderer for Failing {
    fn render(&mut self, _options: &ChartOptions) -> Result<(), ChartError> {
        Err(ChartError::Render("offline".into()))
    }
}

#[test]
fn renderer_failure_surfaces_from_construction() {
    assert!(matches!(AppShell::new(Failing), Err(ChartError::Render(_))));
}

#[test]
fn boxed_renderer_is_accepted() {
    let boxed: Box<dyn Renderer> = Box::new(Recorder::default());
    let mut s = AppShell::new(boxed).expect("shell");
    s.update_axis_type(AxisType::Linear).unwrap();
    assert_eq!(s.axis_type(), AxisType::Linear);
}
