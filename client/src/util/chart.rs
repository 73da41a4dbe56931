//! Line-chart geometry for the dashboard trend charts.
//!
//! Values map into a fixed SVG viewBox; the component scales the box to its
//! container.

#[cfg(test)]
#[path = "chart_test.rs"]
mod chart_test;

pub const VIEW_WIDTH: f64 = 400.0;
pub const VIEW_HEIGHT: f64 = 200.0;
pub const PADDING: f64 = 10.0;

/// Value range plotted on the y axis. The floor is zero unless a value is
/// negative, and an all-zero series still gets a non-empty span.
pub fn value_bounds(values: &[f64]) -> (f64, f64) {
    let finite = values.iter().copied().filter(|v| v.is_finite());
    let (min, max) = finite.fold((0.0_f64, 0.0_f64), |(lo, hi), v| (lo.min(v), hi.max(v)));
    if max > min { (min, max) } else { (min, min + 1.0) }
}

/// Map each value to an `(x, y)` point inside the padded viewBox. A single
/// value is centered horizontally.
pub fn plot_points(values: &[f64]) -> Vec<(f64, f64)> {
    let (min, max) = value_bounds(values);
    let inner_w = VIEW_WIDTH - 2.0 * PADDING;
    let inner_h = VIEW_HEIGHT - 2.0 * PADDING;
    let steps = values.len().saturating_sub(1);

    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            #[allow(clippy::cast_precision_loss)]
            let x = if steps == 0 { VIEW_WIDTH / 2.0 } else { PADDING + inner_w * i as f64 / steps as f64 };
            let v = if v.is_finite() { *v } else { min };
            let y = PADDING + inner_h * (1.0 - (v - min) / (max - min));
            (x, y)
        })
        .collect()
}

/// SVG `points` attribute for a `<polyline>`.
pub fn polyline_points(values: &[f64]) -> String {
    plot_points(values)
        .iter()
        .map(|(x, y)| format!("{x:.1},{y:.1}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Horizontal grid line positions, top to bottom, for `lines` divisions.
pub fn grid_lines(lines: u32) -> Vec<f64> {
    let inner_h = VIEW_HEIGHT - 2.0 * PADDING;
    (0..=lines).map(|i| PADDING + inner_h * f64::from(i) / f64::from(lines.max(1))).collect()
}
