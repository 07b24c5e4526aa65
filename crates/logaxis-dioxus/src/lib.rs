// File: crates/logaxis-dioxus/src/lib.rs
// Summary: Dioxus desktop page with the axis control panel and the rendered chart.
// Notes:
// - UI deps sit behind the `desktop` feature, so the workspace builds without
//   fetching Dioxus unless explicitly enabled.
// - The chart is rasterized by logaxis-core and shown as a PNG data URL.

use logaxis_core::{ChartError, ChartOptions, PngRenderer, RenderOptions, Renderer};

/// Renderer that keeps the latest frame as a `data:image/png;base64,...` URL.
#[derive(Default)]
pub struct DataUrlRenderer {
    png: PngRenderer,
    src: Option<String>,
}

impl DataUrlRenderer {
    pub fn new(opts: RenderOptions) -> Self {
        Self { png: PngRenderer::new(opts), src: None }
    }

    /// Image source for the most recent render.
    pub fn src(&self) -> Option<&str> { self.src.as_deref() }
}

impl Renderer for DataUrlRenderer {
    fn render(&mut self, options: &ChartOptions) -> Result<(), ChartError> {
        self.png.render(options)?;
        self.src = self.png.last_png().map(encode_data_url);
        Ok(())
    }
}

#[cfg(feature = "desktop")]
fn encode_data_url(png: &[u8]) -> String {
    use base64::Engine as _;
    format!("data:image/png;base64,{}", base64::engine::general_purpose::STANDARD.encode(png))
}

// Without the UI stack there is nothing to display the URL; keep the frame size only.
#[cfg(not(feature = "desktop"))]
fn encode_data_url(png: &[u8]) -> String {
    format!("data:image/png;length={}", png.len())
}

#[cfg(feature = "desktop")]
pub mod ui {
    use super::*;
    use dioxus::prelude::*;
    use logaxis_core::controls::{SelectOption, Selector};
    use logaxis_core::{AppShell, ControlEvent};

    #[derive(Props, Clone, PartialEq)]
    pub struct AxisSelectProps {
        pub label: &'static str,
        pub href: &'static str,
        pub href_text: &'static str,
        pub options: Vec<SelectOption>,
        pub on_select: EventHandler<String>,
    }

    /// Labelled `<select>` with a link to the option's reference docs.
    #[component]
    pub fn AxisSelect(props: AxisSelectProps) -> Element {
        rsx! {
            label {
                "{props.label}:\u{a0}("
                a { href: props.href, target: "_blank", "{props.href_text}" }
                ")\u{a0}"
                select {
                    onchange: move |evt| props.on_select.call(evt.value()),
                    for opt in props.options.iter() {
                        option { key: "{opt.value}", value: "{opt.value}", selected: opt.selected, "{opt.text}" }
                    }
                }
            }
        }
    }

    /// Page root: owns the shell and re-renders the chart on every selection.
    #[component]
    pub fn App() -> Element {
        let mut shell = use_signal(|| {
            AppShell::new(DataUrlRenderer::default()).map_err(|e| e.to_string())
        });

        // Invalid axis types are a control/configuration mismatch, not user error: fail loudly.
        let mut apply = move |event: ControlEvent| {
            if let Ok(s) = &mut *shell.write() {
                if let Err(e) = s.dispatch(event) {
                    tracing::error!(error = %e, "selection rejected");
                    panic!("{e}");
                }
            }
        };

        let guard = shell.read();
        let s = match guard.as_ref() {
            Ok(s) => s,
            Err(e) => return rsx! { p { "chart unavailable: {e}" } },
        };
        let panel = s.control_panel();
        let src = s.renderer().src().map(str::to_string);
        let axis_options = panel.axis_type.options();
        let log_base = panel.tick_interval.map(|sel| (sel.label(), sel.doc_href(), sel.options()));
        let axis_label = panel.axis_type.label();
        let axis_href = panel.axis_type.doc_href();
        drop(guard);

        rsx! {
            div { class: "App",
                h1 { "\u{1F4CA}" }
                p {
                    AxisSelect {
                        label: axis_label,
                        href: axis_href,
                        href_text: "yAxis.type",
                        options: axis_options,
                        on_select: move |raw: String| apply(ControlEvent::AxisType(raw)),
                    }
                    "\u{a0}"
                    if let Some((label, href, options)) = log_base {
                        AxisSelect {
                            label,
                            href,
                            href_text: "yAxis.tickInterval",
                            options,
                            on_select: move |raw: String| apply(ControlEvent::TickInterval(raw)),
                        }
                    }
                }
                div { class: "card",
                    if let Some(src) = src {
                        img { src, width: "800", height: "600" }
                    }
                }
            }
        }
    }

    /// Launch the desktop window.
    pub fn run_demo_ui() -> Result<(), String> {
        let providers: Vec<Box<dyn Fn() -> Box<dyn std::any::Any> + Send + Sync>> = Vec::new();
        let cfg = dioxus_desktop::Config::new()
            .with_window(dioxus_desktop::WindowBuilder::new().with_title("Logarithmic Axis Demo"));
        let globals: Vec<Box<dyn std::any::Any>> = vec![Box::new(cfg)];
        dioxus_desktop::launch::launch(App, providers, globals);
        Ok(())
    }
}

/// Fallback when the `desktop` feature is not enabled.
#[cfg(not(feature = "desktop"))]
pub fn run_demo_ui() -> Result<(), &'static str> {
    Err("logaxis-dioxus built without `desktop` feature; enable features to run UI demo")
}
