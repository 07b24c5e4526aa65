// File: crates/logaxis-dioxus/src/bin/desktop_demo.rs
// Purpose: Launcher for the Dioxus desktop axis demo.

#[cfg(feature = "desktop")]
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
    if let Err(e) = logaxis_dioxus::ui::run_demo_ui() {
        eprintln!("logaxis-dioxus demo error: {e}");
    }
}

#[cfg(not(feature = "desktop"))]
fn main() {
    if let Err(e) = logaxis_dioxus::run_demo_ui() {
        eprintln!("{e}");
    }
    eprintln!("This demo requires --features desktop");
}
