// File: crates/logaxis-core/src/chart.rs
// Summary: Headless PNG rendering of a chart configuration using Skia CPU raster surfaces.

use std::path::{Path, PathBuf};

use skia_safe as skia;

use crate::axis::{format_number, LabelFormatter};
use crate::error::{ChartError, Result};
use crate::options::ChartOptions;
use crate::scale::{LinearScale, ValueScale};
use crate::series::{DashStyle, Series};
use crate::shell::Renderer;
use crate::text::{Anchor, TextShaper};
use crate::theme::{parse_color, Theme};
use crate::types::Insets;

const LINE_WIDTH: f32 = 2.0;
const MARKER_RADIUS: f32 = 4.0;

pub struct RenderOptions {
    pub insets: Insets,
    pub theme: Theme,
    /// Text is skipped when false (keeps snapshots independent of installed fonts).
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            insets: Insets::default(),
            theme: Theme::light(),
            draw_labels: true,
        }
    }
}

/// Plot rectangle in pixels.
#[derive(Clone, Copy, Debug)]
struct PlotRect {
    l: f32,
    t: f32,
    r: f32,
    b: f32,
}

/// Render `options` and return encoded PNG bytes.
pub fn render_png_bytes(options: &ChartOptions, opts: &RenderOptions) -> Result<Vec<u8>> {
    let (w, h) = (options.chart.width as i32, options.chart.height as i32);
    if w <= opts.insets.hsum() as i32 || h <= opts.insets.vsum() as i32 {
        return Err(ChartError::Render(format!("surface {w}x{h} leaves no room for the plot area")));
    }
    let mut surface = skia::surfaces::raster_n32_premul((w, h))
        .ok_or_else(|| ChartError::Render("failed to create raster surface".into()))?;
    let canvas = surface.canvas();
    canvas.clear(opts.theme.background);

    let rect = PlotRect {
        l: opts.insets.left as f32,
        t: opts.insets.top as f32,
        r: (w - opts.insets.right as i32) as f32,
        b: (h - opts.insets.bottom as i32) as f32,
    };

    let (x_min, x_max) = options.x_range().unwrap_or((0.0, 1.0));
    let xs = LinearScale::new(rect.l, rect.r, x_min, x_max);
    let y = &options.y_axis;
    let ys = ValueScale::new(y.axis_type, rect.t, rect.b, y.min, y.max);
    let shaper = opts.draw_labels.then(TextShaper::new);

    if let Some(shaper) = &shaper {
        draw_titles(canvas, shaper, options, &opts.theme, w as f32);
    }
    draw_plot_bands(canvas, shaper.as_ref(), options, &xs, rect)?;
    draw_grid(canvas, options, &ys, rect, &opts.theme);
    draw_plot_lines(canvas, options, &xs, rect)?;
    draw_axes(canvas, shaper.as_ref(), options, &xs, &ys, rect, &opts.theme);

    let show_data_labels = options.plot_options.line.data_labels.enabled;
    for s in &options.series {
        draw_line_series(canvas, s, &xs, &ys, rect)?;
        draw_markers(canvas, s, &xs, &ys, &opts.theme)?;
        if let (Some(shaper), true) = (&shaper, show_data_labels) {
            draw_data_labels(canvas, shaper, s, &xs, &ys, &opts.theme);
        }
    }

    // Snapshot and encode PNG
    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or_else(|| ChartError::Render("encode PNG failed".into()))?;
    let bytes = data.as_bytes().to_vec();
    tracing::debug!(bytes = bytes.len(), axis = %y.axis_type, "rendered chart");
    Ok(bytes)
}

/// Render `options` to a PNG file, creating parent directories as needed.
pub fn render_to_png(options: &ChartOptions, opts: &RenderOptions, path: impl AsRef<Path>) -> Result<()> {
    let bytes = render_png_bytes(options, opts)?;
    write_png(path.as_ref(), &bytes)
}

fn write_png(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, bytes)?;
    Ok(())
}

/// Renderer that rasterizes every configuration it receives to PNG.
/// Keeps the latest bytes and, if a path is set, writes them out as well.
#[derive(Default)]
pub struct PngRenderer {
    pub opts: RenderOptions,
    pub output: Option<PathBuf>,
    last: Option<Vec<u8>>,
    frames: usize,
}

impl PngRenderer {
    pub fn new(opts: RenderOptions) -> Self {
        Self { opts, output: None, last: None, frames: 0 }
    }

    pub fn with_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output = Some(path.into());
        self
    }

    /// PNG bytes of the most recent render.
    pub fn last_png(&self) -> Option<&[u8]> { self.last.as_deref() }

    /// Number of configurations rendered so far.
    pub fn frames(&self) -> usize { self.frames }
}

impl Renderer for PngRenderer {
    fn render(&mut self, options: &ChartOptions) -> Result<()> {
        let bytes = render_png_bytes(options, &self.opts)?;
        if let Some(path) = &self.output {
            write_png(path, &bytes)?;
        }
        self.last = Some(bytes);
        self.frames += 1;
        Ok(())
    }
}

// ---- helpers ----------------------------------------------------------------

fn stroke_paint(color: skia::Color, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_color(color);
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint
}

fn fill_paint(color: skia::Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_color(color);
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint
}

fn draw_titles(canvas: &skia::Canvas, shaper: &TextShaper, options: &ChartOptions, theme: &Theme, width: f32) {
    let cx = width * 0.5;
    shaper.draw(canvas, &options.title.text, cx, 32.0, 18.0, theme.title, false, Anchor::Center);
    shaper.draw(canvas, &options.subtitle.text, cx, 56.0, 12.0, theme.subtitle, false, Anchor::Center);
}

fn draw_plot_bands(
    canvas: &skia::Canvas,
    shaper: Option<&TextShaper>,
    options: &ChartOptions,
    xs: &LinearScale,
    rect: PlotRect,
) -> Result<()> {
    for band in &options.x_axis.plot_bands {
        let color = parse_color(&band.color)?;
        let x0 = xs.to_px(band.from).clamp(rect.l, rect.r);
        let x1 = xs.to_px(band.to).clamp(rect.l, rect.r);
        canvas.draw_rect(skia::Rect::from_ltrb(x0.min(x1), rect.t, x0.max(x1), rect.b), &fill_paint(color));
        if let (Some(shaper), Some(label)) = (shaper, &band.label) {
            let cx = (x0 + x1) * 0.5;
            shaper.draw(canvas, &label.text, cx, rect.t + 16.0, 12.0, skia::Color::BLACK, false, Anchor::Center);
        }
    }
    Ok(())
}

fn draw_grid(canvas: &skia::Canvas, options: &ChartOptions, ys: &ValueScale, rect: PlotRect, theme: &Theme) {
    let width = options.y_axis.grid_line_width as f32;
    if width <= 0.0 {
        return;
    }
    let paint = stroke_paint(theme.grid, width);
    for v in ys.ticks(options.y_axis.tick_interval) {
        let py = ys.to_px(v);
        canvas.draw_line((rect.l, py), (rect.r, py), &paint);
    }
}

fn draw_plot_lines(canvas: &skia::Canvas, options: &ChartOptions, xs: &LinearScale, rect: PlotRect) -> Result<()> {
    for line in &options.x_axis.plot_lines {
        let px = xs.to_px(line.value);
        if px < rect.l || px > rect.r {
            continue;
        }
        let mut paint = stroke_paint(parse_color(&line.color)?, line.width as f32);
        paint.set_anti_alias(false);
        canvas.draw_line((px, rect.t), (px, rect.b), &paint);
    }
    Ok(())
}

fn draw_axes(
    canvas: &skia::Canvas,
    shaper: Option<&TextShaper>,
    options: &ChartOptions,
    xs: &LinearScale,
    ys: &ValueScale,
    rect: PlotRect,
    theme: &Theme,
) {
    let axis_paint = stroke_paint(theme.axis_line, 1.0);
    canvas.draw_line((rect.l, rect.b), (rect.r, rect.b), &axis_paint);

    let x_axis = &options.x_axis;
    let step = if x_axis.tick_interval > 0.0 { x_axis.tick_interval } else { 1.0 };
    let mut ticks = Vec::new();
    let mut v = (xs.min / step).ceil() * step;
    while v <= xs.max + 1e-9 {
        ticks.push(v);
        v += step;
    }
    for &v in &ticks {
        let px = xs.to_px(v);
        canvas.draw_line((px, rect.b), (px, rect.b + 6.0), &axis_paint);
    }

    let Some(shaper) = shaper else { return };
    for &v in &ticks {
        let label = x_axis.labels.formatter.format(v);
        shaper.draw(canvas, &label, xs.to_px(v), rect.b + 20.0, 10.0, theme.axis_label, false, Anchor::Center);
    }
    let x_mid = (rect.l + rect.r) * 0.5;
    shaper.draw(canvas, &x_axis.title.text, x_mid, rect.b + 44.0, 12.0, theme.axis_label, false, Anchor::Center);

    let y_axis = &options.y_axis;
    let (label_x, anchor) = if y_axis.opposite { (rect.r + 8.0, Anchor::Left) } else { (rect.l - 8.0, Anchor::Right) };
    for v in ys.ticks(y_axis.tick_interval) {
        let label = LabelFormatter::Plain.format(v);
        shaper.draw(canvas, &label, label_x, ys.to_px(v) + 4.0, 11.0, theme.axis_label, false, anchor);
    }
    let title_x = if y_axis.opposite { rect.r + 56.0 } else { rect.l - 56.0 };
    let y_mid = (rect.t + rect.b) * 0.5;
    shaper.draw(canvas, &y_axis.title.text, title_x, y_mid, 12.0, theme.axis_label, false, Anchor::Center);
}

fn dash_effect(style: Option<DashStyle>, width: f32) -> Option<skia::PathEffect> {
    let pattern = style?.pattern();
    if pattern.is_empty() {
        return None;
    }
    let intervals: Vec<f32> = pattern.iter().map(|p| p * width).collect();
    skia::PathEffect::dash(&intervals, 0.0)
}

fn draw_line_series(
    canvas: &skia::Canvas,
    series: &Series,
    xs: &LinearScale,
    ys: &ValueScale,
    rect: PlotRect,
) -> Result<()> {
    if series.data.len() < 2 {
        return Ok(());
    }
    canvas.save();
    canvas.clip_rect(skia::Rect::from_ltrb(rect.l, rect.t, rect.r, rect.b), skia::ClipOp::Intersect, true);
    let effect = dash_effect(series.dash_style, LINE_WIDTH);
    // Each segment takes the zone color of its starting point.
    for pair in series.data.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        let mut paint = stroke_paint(parse_color(series.color_for(a.y))?, LINE_WIDTH);
        paint.set_stroke_cap(skia::paint::Cap::Round);
        if let Some(effect) = &effect {
            paint.set_path_effect(effect.clone());
        }
        canvas.draw_line(
            (xs.to_px(a.x as f64), ys.to_px(a.y)),
            (xs.to_px(b.x as f64), ys.to_px(b.y)),
            &paint,
        );
    }
    canvas.restore();
    Ok(())
}

fn draw_markers(canvas: &skia::Canvas, series: &Series, xs: &LinearScale, ys: &ValueScale, theme: &Theme) -> Result<()> {
    let outline = stroke_paint(theme.marker_outline, 1.0);
    for p in series.data.iter().filter(|p| ys.contains(p.y)) {
        let center = (xs.to_px(p.x as f64), ys.to_px(p.y));
        let fill = fill_paint(parse_color(series.color_for(p.y))?);
        canvas.draw_circle(center, MARKER_RADIUS, &fill);
        canvas.draw_circle(center, MARKER_RADIUS, &outline);
    }
    Ok(())
}

fn draw_data_labels(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    series: &Series,
    xs: &LinearScale,
    ys: &ValueScale,
    theme: &Theme,
) {
    for p in series.data.iter().filter(|p| ys.contains(p.y)) {
        let label = format_number(p.y);
        shaper.draw(canvas, &label, xs.to_px(p.x as f64), ys.to_px(p.y) - 8.0, 10.0, theme.data_label, true, Anchor::Center);
    }
}
