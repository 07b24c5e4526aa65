// File: crates/logaxis-core/src/scale.rs
// Summary: Value-to-pixel scales (linear and log10) and tick placement for both axis types.

use crate::axis::AxisType;

/// Horizontal scale mapping [min, max] onto [left, right] pixels.
#[derive(Clone, Copy, Debug)]
pub struct LinearScale {
    pub start_px: f32,
    pub end_px: f32,
    pub min: f64,
    pub max: f64,
}

impl LinearScale {
    pub fn new(start_px: f32, end_px: f32, min: f64, mut max: f64) -> Self {
        if (max - min).abs() < 1e-12 { max = min + 1.0; }
        Self { start_px, end_px, min, max }
    }
    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        let span = self.max - self.min;
        self.start_px + ((v - self.min) / span) as f32 * (self.end_px - self.start_px)
    }
}

/// Vertical value scale mapping data range to [top, bottom] pixels.
#[derive(Clone, Copy, Debug)]
pub struct ValueScale {
    pub top_px: f32,
    pub bottom_px: f32,
    pub vmin: f64,
    pub vmax: f64,
    pub log: bool,
    // cached log endpoints when log is true
    log_min: f64,
    log_max: f64,
}

impl ValueScale {
    pub fn new(axis_type: AxisType, top_px: f32, bottom_px: f32, vmin: f64, vmax: f64) -> Self {
        match axis_type {
            AxisType::Linear => Self::new_linear(top_px, bottom_px, vmin, vmax),
            AxisType::Logarithmic => Self::new_log10(top_px, bottom_px, vmin, vmax),
        }
    }

    pub fn new_linear(top_px: f32, bottom_px: f32, vmin: f64, vmax: f64) -> Self {
        let mut s = Self { top_px, bottom_px, vmin, vmax, log: false, log_min: 0.0, log_max: 0.0 };
        if (s.vmax - s.vmin).abs() < 1e-12 { s.vmax = s.vmin + 1.0; }
        s
    }

    pub fn new_log10(top_px: f32, bottom_px: f32, mut vmin: f64, mut vmax: f64) -> Self {
        // Ensure strictly positive range for log scale
        let eps = 1e-12;
        vmin = if vmin <= eps { eps } else { vmin };
        vmax = if vmax <= vmin { vmin * 10.0 } else { vmax };
        let log_min = vmin.log10();
        let log_max = vmax.log10();
        Self { top_px, bottom_px, vmin, vmax, log: true, log_min, log_max }
    }

    #[inline]
    pub fn to_px(&self, y: f64) -> f32 {
        if self.log {
            let yy = y.max(1e-12).log10();
            let span = (self.log_max - self.log_min).max(1e-12);
            self.bottom_px - ((yy - self.log_min) / span) as f32 * (self.bottom_px - self.top_px)
        } else {
            let span = (self.vmax - self.vmin).max(1e-12);
            self.bottom_px - ((y - self.vmin) / span) as f32 * (self.bottom_px - self.top_px)
        }
    }

    #[inline]
    pub fn contains(&self, y: f64) -> bool {
        y >= self.vmin - 1e-9 && y <= self.vmax + 1e-9
    }

    /// Tick values for this scale. `tick_interval` only matters on a log scale.
    pub fn ticks(&self, tick_interval: Option<f64>) -> Vec<f64> {
        if self.log {
            log_tick_positions(self.vmin, self.vmax, tick_interval.unwrap_or(1.0))
        } else {
            linear_tick_positions(self.vmin, self.vmax)
        }
    }
}

/// Tick positions on a log10 axis, where `interval` counts powers of ten.
///
/// - `interval >= 0.5`: every `round(interval)`-th power of ten.
/// - `0.3 < interval < 0.5`: 1, 2, 4 within each decade.
/// - `0.08 <= interval <= 0.3`: 1, 2, 4, 6, 8 within each decade.
/// - smaller: 1 through 9 within each decade.
///
/// A non-finite or non-positive interval is treated as 1.
pub fn log_tick_positions(min: f64, max: f64, interval: f64) -> Vec<f64> {
    if !(min > 0.0 && max >= min) {
        return Vec::new();
    }
    let interval = if interval.is_finite() && interval > 0.0 { interval } else { 1.0 };
    let lo = min.log10();
    let hi = max.log10();
    let mut out = Vec::new();

    if interval >= 0.5 {
        let step = interval.round().max(1.0) as i32;
        let first = lo.ceil() as i32;
        let last = hi.floor() as i32;
        let mut p = first;
        while p <= last {
            out.push(10f64.powi(p));
            p += step;
        }
        return out;
    }

    let intermediate: &[f64] = if interval > 0.3 {
        &[1.0, 2.0, 4.0]
    } else if interval >= 0.08 {
        &[1.0, 2.0, 4.0, 6.0, 8.0]
    } else {
        &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]
    };
    for decade in (lo.floor() as i32)..=(hi.floor() as i32) {
        let base = 10f64.powi(decade);
        for m in intermediate {
            let v = base * m;
            // relative tolerance keeps 1 and 100000 when the bounds are exact
            if v >= min * (1.0 - 1e-9) && v <= max * (1.0 + 1e-9) {
                out.push(v);
            }
        }
    }
    out
}

/// Evenly spaced "nice" ticks (1/2/5 x 10^k) covering [min, max], about eight of them.
pub fn linear_tick_positions(min: f64, max: f64) -> Vec<f64> {
    if !(min.is_finite() && max.is_finite()) || max <= min {
        return Vec::new();
    }
    let step = nice_step((max - min) / 8.0);
    let first = (min / step).ceil() as i64;
    let last = (max / step).floor() as i64;
    (first..=last).map(|k| k as f64 * step).collect()
}

fn nice_step(raw: f64) -> f64 {
    let mag = 10f64.powf(raw.log10().floor());
    let norm = raw / mag;
    let nice = if norm <= 1.0 {
        1.0
    } else if norm <= 2.0 {
        2.0
    } else if norm <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * mag
}
