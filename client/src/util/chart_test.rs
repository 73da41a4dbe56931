use super::*;

#[test]
fn bounds_floor_at_zero_for_positive_series() {
    assert_eq!(value_bounds(&[5.0, 10.0, 7.5]), (0.0, 10.0));
}

#[test]
fn bounds_extend_below_zero_for_negative_values() {
    assert_eq!(value_bounds(&[-4.0, 2.0]), (-4.0, 2.0));
}

#[test]
fn bounds_never_collapse() {
    assert_eq!(value_bounds(&[]), (0.0, 1.0));
    assert_eq!(value_bounds(&[0.0, 0.0]), (0.0, 1.0));
}

#[test]
fn points_span_padded_width_and_height() {
    let points = plot_points(&[0.0, 5.0, 10.0]);
    assert_eq!(points.len(), 3);
    assert_eq!(points[0], (PADDING, VIEW_HEIGHT - PADDING));
    assert_eq!(points[1], (VIEW_WIDTH / 2.0, VIEW_HEIGHT / 2.0));
    assert_eq!(points[2], (VIEW_WIDTH - PADDING, PADDING));
}

#[test]
fn single_point_is_centered() {
    let points = plot_points(&[3.0]);
    assert_eq!(points[0].0, VIEW_WIDTH / 2.0);
    assert_eq!(points[0].1, PADDING);
}

#[test]
fn polyline_formats_one_decimal_pairs() {
    assert_eq!(polyline_points(&[0.0, 10.0]), "10.0,190.0 390.0,10.0");
    assert_eq!(polyline_points(&[]), "");
}

#[test]
fn grid_lines_cover_plot_area() {
    let lines = grid_lines(4);
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], PADDING);
    assert_eq!(lines[4], VIEW_HEIGHT - PADDING);
}
