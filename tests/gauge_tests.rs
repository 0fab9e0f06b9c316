use arcgauge::{ArcGauge, GaugeConfig, SvgSurface};

fn default_gauge() -> ArcGauge<SvgSurface> {
    ArcGauge::new(SvgSurface::new(), GaugeConfig::builder().build())
}

/// Mirror of the gauge's angle-to-point mapping, for asserting path strings.
fn point_at(angle: f64) -> (f64, f64) {
    let rad = (angle - 90.0).to_radians();
    (100.0 + 80.0 * rad.cos(), 100.0 + 80.0 * rad.sin())
}

#[test]
fn construction_creates_exactly_three_nodes() {
    let gauge = default_gauge();
    let surface = gauge.surface();

    assert_eq!(surface.node_count(), 3);
    assert_eq!(surface.view_box(), Some((0.0, 0.0, 200.0, 200.0)));

    // Dial spans the full range at construction time.
    let (dial_move_x, dial_move_y) = point_at(45.0);
    let (dial_end_x, dial_end_y) = point_at(135.0);
    assert_eq!(
        gauge.surface().path_data(gauge.dial_path()),
        Some(
            format!(
                "M {} {} A 80 80 0 1 0 {} {}",
                dial_move_x, dial_move_y, dial_end_x, dial_end_y
            )
            .as_str()
        )
    );

    // Initial render uses the configured value with the default formatter.
    assert_eq!(gauge.surface().text_content(gauge.value_text()), Some("0"));
    assert_eq!(gauge.surface().stroke(gauge.value_path()), None);
}

#[test]
fn updates_do_not_accumulate_nodes() {
    let mut gauge = default_gauge();
    for i in 0..100 {
        gauge.update(f64::from(i), Some("#00f2c3"));
    }
    assert_eq!(gauge.surface().node_count(), 3);
}

#[test]
fn update_is_idempotent() {
    let mut gauge = default_gauge();

    gauge.update(42.0, Some("#ffc107"));
    let first_path = gauge.surface().path_data(gauge.value_path()).unwrap().to_string();
    let first_text = gauge.surface().text_content(gauge.value_text()).unwrap().to_string();

    gauge.update(42.0, Some("#ffc107"));
    assert_eq!(
        gauge.surface().path_data(gauge.value_path()),
        Some(first_path.as_str())
    );
    assert_eq!(
        gauge.surface().text_content(gauge.value_text()),
        Some(first_text.as_str())
    );
    assert_eq!(gauge.surface().stroke(gauge.value_path()), Some("#ffc107"));
}

#[test]
fn stroke_is_retained_when_color_omitted() {
    let mut gauge = default_gauge();

    gauge.update(10.0, Some("#00f2c3"));
    gauge.update(20.0, None);

    assert_eq!(gauge.surface().stroke(gauge.value_path()), Some("#00f2c3"));
    assert_eq!(gauge.value(), 20.0);
}

#[test]
fn zero_value_arc_starts_at_dial_start_point() {
    let mut gauge = default_gauge();
    gauge.update(0.0, None);

    // With zero sweep, both endpoints coincide with the dial's start-angle
    // point at the configured radius.
    let (x, y) = point_at(135.0);
    assert_eq!(
        gauge.surface().path_data(gauge.value_path()),
        Some(format!("M {} {} A 80 80 0 0 0 {} {}", x, y, x, y).as_str())
    );
}

#[test]
fn percent_label_formatting() {
    let config = GaugeConfig::builder()
        .label(|value: f64| format!("{}%", value.round()))
        .build();
    let mut gauge = ArcGauge::new(SvgSurface::new(), config);

    gauge.update(63.7, None);
    assert_eq!(gauge.surface().text_content(gauge.value_text()), Some("64%"));
}

#[test]
fn wrap_around_range_maps_half_scale_to_270() {
    let gauge = default_gauge();
    // start=135, end=45: effective range is 45 - 135 + 360 = 270
    assert_eq!(gauge.angle_for_value(50.0), 270.0);
}

#[test]
fn full_update_sweeps_to_interpolated_angle() {
    let config = GaugeConfig::builder()
        .max(100.0)
        .dial_start_angle(135.0)
        .dial_end_angle(45.0)
        .radius(80.0)
        .build();
    let mut gauge = ArcGauge::new(SvgSurface::new(), config);

    gauge.update(75.0, Some("#fd5d93"));

    // 135 + 0.75 * 270 = 337.5; diff 202.5 > 180 so the large-arc flag is set.
    assert_eq!(gauge.angle_for_value(75.0), 337.5);
    let (move_x, move_y) = point_at(337.5);
    let (end_x, end_y) = point_at(135.0);
    assert_eq!(
        gauge.surface().path_data(gauge.value_path()),
        Some(
            format!(
                "M {} {} A 80 80 0 1 0 {} {}",
                move_x, move_y, end_x, end_y
            )
            .as_str()
        )
    );
    assert_eq!(gauge.surface().stroke(gauge.value_path()), Some("#fd5d93"));
    assert_eq!(gauge.surface().text_content(gauge.value_text()), Some("75"));
}

#[test]
fn svg_serialization_lists_all_three_primitives() {
    let mut gauge = default_gauge();
    gauge.update(75.0, Some("#fd5d93"));

    let svg = gauge.surface().to_svg();
    assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 200 200\">"));
    assert!(svg.contains("class=\"dial\""));
    assert!(svg.contains("class=\"value\""));
    assert!(svg.contains("stroke=\"#fd5d93\""));
    assert!(svg.contains("<text class=\"value-text\" x=\"100\" y=\"110\""));
    assert!(svg.contains(">75</text>"));
}
