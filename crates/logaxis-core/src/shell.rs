// File: crates/logaxis-core/src/shell.rs
// Summary: Application shell owning axis state and the current chart configuration.

use std::sync::Arc;

use crate::axis::{y_axis_options, AxisType};
use crate::controls::{ControlEvent, ControlPanel, Selector, TickIntervalSelector};
use crate::error::Result;
use crate::options::{base_options, ChartOptions};
use crate::types::{INITIAL_Y_AXIS_TICK_INTERVAL, INITIAL_Y_AXIS_TYPE};

/// Consumer of chart configurations. Called with the latest configuration
/// after every state change; redrawing is entirely its business.
pub trait Renderer {
    fn render(&mut self, options: &ChartOptions) -> Result<()>;
}

impl<R: Renderer + ?Sized> Renderer for Box<R> {
    fn render(&mut self, options: &ChartOptions) -> Result<()> {
        (**self).render(options)
    }
}

/// Owns the selector state and the configuration derived from it.
///
/// The y axis is never patched: each update rebuilds it from `axis_type` and
/// `tick_interval`, and the result replaces the previous configuration as a
/// fresh `Arc`, so a renderer holding the old one can compare by pointer.
pub struct AppShell<R: Renderer> {
    axis_type: AxisType,
    tick_interval: f64,
    options: Arc<ChartOptions>,
    renderer: R,
}

impl<R: Renderer> AppShell<R> {
    /// Build the default configuration and render it once.
    pub fn new(renderer: R) -> Result<Self> {
        let mut shell = Self {
            axis_type: INITIAL_Y_AXIS_TYPE,
            tick_interval: INITIAL_Y_AXIS_TICK_INTERVAL,
            options: Arc::new(base_options()?),
            renderer,
        };
        shell.renderer.render(&shell.options)?;
        Ok(shell)
    }

    pub fn axis_type(&self) -> AxisType { self.axis_type }

    pub fn tick_interval(&self) -> f64 { self.tick_interval }

    pub fn options(&self) -> &Arc<ChartOptions> { &self.options }

    pub fn renderer(&self) -> &R { &self.renderer }

    pub fn renderer_mut(&mut self) -> &mut R { &mut self.renderer }

    pub fn control_panel(&self) -> ControlPanel {
        ControlPanel::new(self.axis_type, self.tick_interval)
    }

    pub fn update_axis_type(&mut self, axis_type: AxisType) -> Result<()> {
        tracing::info!(from = %self.axis_type, to = %axis_type, "y axis type changed");
        self.axis_type = axis_type;
        self.rebuild()
    }

    pub fn update_tick_interval(&mut self, tick_interval: f64) -> Result<()> {
        tracing::info!(from = self.tick_interval, to = tick_interval, "y axis tick interval changed");
        self.tick_interval = tick_interval;
        self.rebuild()
    }

    /// Route a raw selection through the matching selector.
    ///
    /// An axis type outside the permitted set is returned as an error before
    /// any state is touched.
    pub fn dispatch(&mut self, event: ControlEvent) -> Result<()> {
        let panel = self.control_panel();
        match event {
            ControlEvent::AxisType(raw) => {
                panel.axis_type.change(&raw, |t| self.update_axis_type(t))?
            }
            ControlEvent::TickInterval(raw) => {
                // Hidden on a linear axis, but the value is still recorded so it
                // applies once the axis turns logarithmic again.
                let selector = panel
                    .tick_interval
                    .unwrap_or(TickIntervalSelector { selected: self.tick_interval });
                selector.change(&raw, |v| self.update_tick_interval(v))?
            }
        }
    }

    fn rebuild(&mut self) -> Result<()> {
        let y_axis = y_axis_options(self.axis_type, self.tick_interval);
        self.options = Arc::new(self.options.with_y_axis(y_axis));
        self.renderer.render(&self.options)
    }
}
