// File: crates/logaxis-core/src/lib.rs
// Summary: Library entry point; series generation, chart configuration, axis controls, shell, and rendering.

pub mod axis;
pub mod chart;
pub mod controls;
pub mod error;
pub mod options;
pub mod scale;
pub mod series;
pub mod shell;
pub mod text;
pub mod theme;
pub mod types;

pub use axis::{ordinal_week_label, y_axis_options, AxisType, LabelFormatter, YAxisOptions};
pub use chart::{render_png_bytes, render_to_png, PngRenderer, RenderOptions};
pub use controls::{AxisTypeSelector, ControlEvent, ControlPanel, Selector, TickIntervalSelector};
pub use error::ChartError;
pub use options::{base_options, ChartOptions};
pub use series::{generate_series, Series, SeriesPoint};
pub use shell::{AppShell, Renderer};
pub use theme::Theme;
pub use types::{INITIAL_Y_AXIS_TICK_INTERVAL, INITIAL_Y_AXIS_TYPE, TICK_INTERVAL_OPTIONS};
