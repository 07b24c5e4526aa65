// File: crates/logaxis-demo/src/main.rs
// Summary: Replays axis selections through the shell and writes the rendered chart (PNG) and its configuration (JSON).

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use logaxis_core::axis::format_number;
use logaxis_core::{
    theme, AppShell, AxisType, ControlEvent, PngRenderer, RenderOptions, TICK_INTERVAL_OPTIONS,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "logaxis-demo")]
#[command(about = "Render the logarithmic axis demo chart headlessly")]
struct Args {
    /// Directory for PNG/JSON output
    #[arg(long, default_value = "target/out")]
    out_dir: PathBuf,

    /// Selection to apply, in order: `axis-type=<text>` or `tick-interval=<text>`
    #[arg(long = "select", value_parser = parse_event)]
    events: Vec<ControlEvent>,

    /// Also write the final configuration as options.json
    #[arg(long)]
    json: bool,

    /// Render every axis type / tick interval combination instead of replaying selections
    #[arg(long)]
    sweep: bool,

    /// Skip text (titles, tick and data labels)
    #[arg(long)]
    no_labels: bool,

    /// Theme preset name
    #[arg(long, default_value = "light")]
    theme: String,
}

fn parse_event(raw: &str) -> Result<ControlEvent, String> {
    let (kind, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected <kind>=<value>, got {raw:?}"))?;
    match kind {
        "axis-type" => Ok(ControlEvent::AxisType(value.to_string())),
        "tick-interval" => Ok(ControlEvent::TickInterval(value.to_string())),
        other => Err(format!("unknown selection {other:?} (use axis-type or tick-interval)")),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let opts = RenderOptions {
        theme: theme::find(&args.theme),
        draw_labels: !args.no_labels,
        ..Default::default()
    };
    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("failed to create output dir '{}'", args.out_dir.display()))?;

    let mut shell = AppShell::new(PngRenderer::new(opts)).context("initial render failed")?;

    if args.sweep {
        sweep(&mut shell, &args.out_dir)?;
    } else {
        for event in args.events {
            let label = format!("{event:?}");
            shell.dispatch(event).with_context(|| format!("selection {label} rejected"))?;
        }
        let out = args.out_dir.join("chart.png");
        let png = shell.renderer().last_png().context("renderer produced no frame")?;
        std::fs::write(&out, png).with_context(|| format!("writing {}", out.display()))?;
        println!("Wrote {}", out.display());
    }

    let panel = shell.control_panel();
    println!(
        "Final state: axis type = {}, tick interval = {} (log base selector {})",
        shell.axis_type(),
        format_number(shell.tick_interval()),
        if panel.tick_interval.is_some() { "shown" } else { "hidden" },
    );

    if args.json {
        let out = args.out_dir.join("options.json");
        let json = shell.options().to_json_pretty()?;
        std::fs::write(&out, json).with_context(|| format!("writing {}", out.display()))?;
        println!("Wrote {}", out.display());
    }
    Ok(())
}

/// One PNG per linear axis and per logarithmic tick interval.
fn sweep(shell: &mut AppShell<PngRenderer>, out_dir: &Path) -> Result<()> {
    render_as(shell, out_dir.join("chart_linear.png"), ControlEvent::AxisType(AxisType::Linear.to_string()))?;
    render_as(shell, out_dir.join("chart_logarithmic.png"), ControlEvent::AxisType(AxisType::Logarithmic.to_string()))?;
    for interval in TICK_INTERVAL_OPTIONS {
        let text = format_number(interval);
        let out = out_dir.join(format!("chart_logarithmic_{}.png", text.replace('.', "_")));
        render_as(shell, out, ControlEvent::TickInterval(text))?;
    }
    Ok(())
}

fn render_as(shell: &mut AppShell<PngRenderer>, out: PathBuf, event: ControlEvent) -> Result<()> {
    shell.renderer_mut().output = Some(out.clone());
    shell.dispatch(event).with_context(|| format!("rendering {}", out.display()))?;
    println!("Wrote {}", out.display());
    Ok(())
}
