use arcgauge::{ArcGauge, GaugeConfig, SvgSurface};

fn main() {
    // Build a CPU-usage style gauge with the bon-generated builder and render
    // a few updates into the retained SVG surface, no window involved.
    let config = GaugeConfig::builder()
        .max(100.0)
        .value(0.0)
        .label(|value: f64| format!("{}%", value.round()))
        .build();

    let mut gauge = ArcGauge::new(SvgSurface::new(), config);

    for (value, color) in [
        (12.5, "#00f2c3"),
        (63.7, "#ffc107"),
        (91.0, "#fd5d93"),
    ] {
        gauge.update(value, Some(color));
        println!("value {:>5}  angle {:.1}", value, gauge.angle_for_value(value));
    }

    println!("{}", gauge.surface().to_svg());
}
