// File: crates/logaxis-core/tests/series.rs
// Purpose: Validate the weekly growth series against a direct recomputation of the growth law.

use logaxis_core::{generate_series, ChartError};

fn recompute(growth: f64) -> Vec<f64> {
    let mut out = Vec::new();
    let mut y = 1.0f64;
    for _ in 0..16 {
        out.push(y);
        y += (y * growth).trunc();
    }
    out
}

#[test]
fn always_sixteen_weeks_in_order() {
    for growth in [1.0, 1.17, 1.5, 2.0, 3.25] {
        let pts = generate_series(growth).expect("valid growth");
        assert_eq!(pts.len(), 16, "growth {growth}");
        let xs: Vec<u32> = pts.iter().map(|p| p.x).collect();
        assert_eq!(xs, (1..=16).collect::<Vec<_>>());
    }
}

#[test]
fn team_a_growth_matches_truncated_law() {
    let ys: Vec<f64> = generate_series(1.17).unwrap().iter().map(|p| p.y).collect();
    assert_eq!(ys, recompute(1.17));
    // truncation, not rounding: 8 * 1.17 = 9.36 adds 9
    assert_eq!(&ys[..6], &[1.0, 2.0, 4.0, 8.0, 17.0, 36.0]);
}

#[test]
fn growth_of_one_doubles_each_week() {
    let ys: Vec<f64> = generate_series(1.0).unwrap().iter().map(|p| p.y).collect();
    assert_eq!(ys, recompute(1.0));
    assert_eq!(ys[0], 1.0);
    assert_eq!(ys[15], 32_768.0);
}

#[test]
fn zero_growth_is_constant() {
    let pts = generate_series(0.0).unwrap();
    assert!(pts.iter().all(|p| p.y == 1.0));
}

#[test]
fn rejects_negative_and_non_finite_growth() {
    assert!(matches!(generate_series(-0.5), Err(ChartError::InvalidGrowth(_))));
    assert!(matches!(generate_series(f64::NAN), Err(ChartError::InvalidGrowth(_))));
    assert!(matches!(generate_series(f64::INFINITY), Err(ChartError::InvalidGrowth(_))));
}

#[test]
fn points_serialize_as_pairs() {
    let pts = generate_series(1.17).unwrap();
    let json = serde_json::to_value(&pts[..2]).unwrap();
    assert_eq!(json, serde_json::json!([[1, 1.0], [2, 2.0]]));
}
