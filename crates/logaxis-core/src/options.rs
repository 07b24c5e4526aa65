// File: crates/logaxis-core/src/options.rs
// Summary: Declarative chart configuration handed to the renderer, plus the default demo layout.

use serde::Serialize;

use crate::axis::{
    y_axis_options, AxisLabels, LabelFormatter, PlotBand, PlotLine, Title, XAxisOptions, YAxisOptions,
};
use crate::error::Result;
use crate::series::{generate_series, DashStyle, Series, SeriesPoint, Zone};
use crate::types::{HEIGHT, INITIAL_Y_AXIS_TICK_INTERVAL, INITIAL_Y_AXIS_TYPE, WIDTH};

/// Growth used for the "Customer Services" series.
pub const TEAM_A_GROWTH: f64 = 1.17;
/// Growth used for the "Infra and Data" series.
pub const TEAM_B_GROWTH: f64 = 1.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ChartSize {
    pub width: u32,
    pub height: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct DataLabels {
    pub enabled: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinePlotOptions {
    pub data_labels: DataLabels,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PlotOptions {
    pub line: LinePlotOptions,
}

/// Complete chart configuration. Treated as an immutable value: updates
/// produce a new instance rather than editing one the renderer already holds.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub plot_options: PlotOptions,
    pub chart: ChartSize,
    pub title: Title,
    pub subtitle: Title,
    pub y_axis: YAxisOptions,
    pub x_axis: XAxisOptions,
    pub series: Vec<Series>,
}

impl ChartOptions {
    /// Copy of `self` with the y axis replaced wholesale.
    pub fn with_y_axis(&self, y_axis: YAxisOptions) -> Self {
        Self { y_axis, ..self.clone() }
    }

    /// Serialize in the camelCase shape chart front ends expect.
    /// Non-finite numbers come out as `null`.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Inclusive (min, max) of x across every series, if any series has data.
    pub fn x_range(&self) -> Option<(f64, f64)> {
        self.series
            .iter()
            .flat_map(|s| s.data.iter())
            .fold(None, |acc, p| {
                let x = p.x as f64;
                match acc {
                    None => Some((x, x)),
                    Some((lo, hi)) => Some((f64::min(lo, x), f64::max(hi, x))),
                }
            })
    }
}

/// The initial configuration: logarithmic y axis with a tick every power of ten,
/// an annotated week axis, two generated series, and two checkpoint markers.
pub fn base_options() -> Result<ChartOptions> {
    let team_a = generate_series(TEAM_A_GROWTH)?;
    let team_b = generate_series(TEAM_B_GROWTH)?;

    Ok(ChartOptions {
        plot_options: PlotOptions {
            line: LinePlotOptions { data_labels: DataLabels { enabled: true } },
        },
        chart: ChartSize { width: WIDTH, height: HEIGHT },
        title: Title::new("Logarithmic Axis Demo"),
        subtitle: Title::new("Demo of a logarithmic axis in Highcharts"),
        y_axis: y_axis_options(INITIAL_Y_AXIS_TYPE, INITIAL_Y_AXIS_TICK_INTERVAL),
        x_axis: XAxisOptions {
            plot_bands: vec![PlotBand {
                label: Some(Title::new("Team A")),
                color: "orange".into(),
                from: 3.0,
                to: 6.0,
            }],
            plot_lines: vec![PlotLine { color: "brown".into(), value: 7.0, width: 20.0 }],
            title: Title::new("Weeks"),
            tick_interval: 1.0,
            labels: AxisLabels { formatter: LabelFormatter::OrdinalWeek },
        },
        series: vec![
            Series::line("Customer Services", "red", team_a)
                .with_dash_style(DashStyle::ShortDot)
                .with_zones(vec![
                    Zone::below(5.0, "#f7a35c"),
                    Zone::below(10.0, "#7cb5ec"),
                    Zone::below(15.0, "#90ed7d"),
                ]),
            Series::line("Infra and Data", "violet", team_b).with_dash_style(DashStyle::LongDash),
            Series::line("Check Point", "goldenrod", vec![SeriesPoint::new(15, 85_000.0)]),
            Series::line("Check Point", "black", vec![SeriesPoint::new(10, 10_000.0)]),
        ],
    })
}
