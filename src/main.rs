use arcgauge::{ArcGauge, Color, GaugeCommand, GaugeConfig, SvgSurface};
use rand::Rng;
use std::env;
use std::io::{self, BufRead};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

/// Threshold color policy for a CPU-usage style gauge. This lives in the
/// caller: the gauge itself knows nothing about value ranges being "good"
/// or "bad".
fn usage_color(value: f64) -> Color {
    if value >= 80.0 {
        Color::new(0xfd, 0x5d, 0x93) // red
    } else if value >= 60.0 {
        Color::new(0xff, 0xc1, 0x07) // yellow
    } else {
        Color::new(0x00, 0xf2, 0xc3) // green
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = GaugeConfig::builder()
        .title("CPU Usage".to_string())
        .label(|value: f64| format!("{}%", value.round()))
        .build();

    let mut gauge = ArcGauge::new(SvgSurface::new(), config);

    let (sender, receiver) = mpsc::channel();
    let use_stdin = env::args().any(|arg| arg == "--stdin");

    // Feeder thread: pipe numbers in with --stdin, or watch a random walk.
    thread::spawn(move || {
        if use_stdin {
            for line in io::stdin().lock().lines() {
                let Ok(line) = line else { break };
                let Ok(value) = line.trim().parse::<f64>() else {
                    log::warn!("ignoring unparseable input line: {line:?}");
                    continue;
                };
                if sender
                    .send(GaugeCommand::SetValueColored(value, usage_color(value)))
                    .is_err()
                {
                    break;
                }
            }
        } else {
            let mut rng = rand::rng();
            let mut value: f64 = 35.0;
            loop {
                value = (value + rng.random_range(-8.0..8.0)).clamp(0.0, 100.0);
                if sender
                    .send(GaugeCommand::SetValueColored(value, usage_color(value)))
                    .is_err()
                {
                    break;
                }
                thread::sleep(Duration::from_millis(250));
            }
        }
    });

    log::info!("showing gauge window (pass --stdin to pipe values in)");
    gauge.show_with_commands(receiver)
}
