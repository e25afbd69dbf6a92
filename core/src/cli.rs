use crate::analyzer::AnalysisReport;
use crate::metrics::{mean, min_max};

fn head(xs: &[f64]) -> &[f64] {
    &xs[..5.min(xs.len())]
}

/// Skriver en kort rapport til stdout.
pub fn print_report(report: &AnalysisReport) {
    println!("Average noise: {}", report.noise);

    println!("--- Altitude Report ---");
    println!("Samples: {}", report.samples);
    println!(
        "Window: {} | Lag: {} | Secondary: {:?}",
        report.config.window, report.config.lag, report.config.secondary_window
    );
    println!("Smoothed alt (first 5): {:?}", head(&report.smoothed_altitude));
    if let Some((lo, hi)) = min_max(&report.smoothed_altitude) {
        println!("Smoothed alt range: {:.2} .. {:.2} m", lo, hi);
    }
    if let Some((lo, hi)) = min_max(&report.velocity) {
        println!("Velocity (Δ per {} steps): {:.3} .. {:.3}", report.config.lag, lo, hi);
    }
    if let Some(vms) = &report.velocity_ms {
        if let (Some((_, peak)), Some(avg)) = (min_max(vms), mean(vms)) {
            println!("Vertical speed: peak {:.2} m/s, avg {:.2} m/s", peak, avg);
        }
    }
    if let Some((_, top)) = min_max(&report.pressure_altitude) {
        println!("Pressure altitude max: {:.1} m", top);
    }
}
