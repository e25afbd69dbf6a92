use std::path::Path;

use log::info;
use plotters::coord::Shift;
use plotters::prelude::*;

use crate::analyzer::AnalysisReport;
use crate::error::{AltlogError, Result};
use crate::metrics::min_max;
use crate::models::SensorLog;

#[derive(Clone, Debug)]
pub struct PlotStyle {
    pub width: u32,
    /// Høyde per panel
    pub panel_height: u32,
    pub background: RGBColor,
    pub palette: Vec<RGBColor>,
    /// Tredje panel med trykk (p, avg_p)
    pub pressure_panel: bool,
}

impl Default for PlotStyle {
    fn default() -> Self {
        Self {
            width: 1200,
            panel_height: 400,
            background: WHITE,
            palette: vec![BLUE, GREEN, RED, MAGENTA, CYAN],
            pressure_panel: false,
        }
    }
}

struct Line<'a> {
    label: &'a str,
    values: &'a [f64],
}

/// Tegner stablede paneler til PNG: høyde øverst, fart under, ev. trykk nederst.
/// Alle paneler deler x-akse (sampleindeks).
pub fn render_png(
    log: &SensorLog,
    report: &AnalysisReport,
    style: &PlotStyle,
    path: impl AsRef<Path>,
) -> Result<()> {
    if log.is_empty() {
        return Err(AltlogError::Plot("log has no samples".into()));
    }
    if style.palette.is_empty() {
        return Err(AltlogError::Plot("palette is empty".into()));
    }

    let path = path.as_ref();
    let panels = if style.pressure_panel { 3 } else { 2 };
    let x_max = log.len();

    let root = BitMapBackend::new(path, (style.width, style.panel_height * panels as u32))
        .into_drawing_area();
    root.fill(&style.background)?;
    let areas = root.split_evenly((panels, 1));

    draw_panel(
        &areas[0],
        "Altitude",
        x_max,
        &[
            Line { label: "alt", values: &log.altitude },
            Line { label: "avg_alt", values: &log.averaged_altitude },
            Line { label: "smoothed", values: &report.smoothed_altitude },
        ],
        style,
    )?;

    let mut velocity = vec![Line { label: "velocity", values: &report.velocity }];
    if let Some(vs) = &report.velocity_smoothed {
        velocity.push(Line { label: "velocity (smoothed)", values: vs });
    }
    draw_panel(&areas[1], "Velocity", x_max, &velocity, style)?;

    if style.pressure_panel {
        draw_panel(
            &areas[2],
            "Pressure",
            x_max,
            &[
                Line { label: "p", values: &log.pressure },
                Line { label: "avg_p", values: &log.averaged_pressure },
            ],
            style,
        )?;
    }

    root.present()?;
    info!("🖼️ Plott skrevet til {}", path.display());
    Ok(())
}

fn draw_panel(
    area: &DrawingArea<BitMapBackend<'_>, Shift>,
    title: &str,
    x_max: usize,
    lines: &[Line<'_>],
    style: &PlotStyle,
) -> Result<()> {
    let all: Vec<f64> = lines.iter().flat_map(|l| l.values.iter().copied()).collect();
    let (lo, hi) = min_max(&all).unwrap_or((0.0, 0.0));
    // Flat serie → gi aksen litt luft
    let (lo, hi) = if (hi - lo).abs() < 1e-9 { (lo - 1.0, hi + 1.0) } else { (lo, hi) };

    let mut chart = ChartBuilder::on(area)
        .margin(10)
        .caption(title, ("sans-serif", 20))
        .set_label_area_size(LabelAreaPosition::Left, 60)
        .set_label_area_size(LabelAreaPosition::Bottom, 30)
        .build_cartesian_2d(0f64..x_max.max(1) as f64, lo..hi)?;

    chart.configure_mesh().light_line_style(BLACK.mix(0.05)).draw()?;

    for (idx, line) in lines.iter().enumerate() {
        if line.values.is_empty() {
            continue;
        }
        let color = style.palette[idx % style.palette.len()];
        let series = line.values.iter().enumerate().map(|(i, v)| (i as f64, *v));
        chart
            .draw_series(LineSeries::new(series, &color))?
            .label(line.label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
    }

    chart
        .configure_series_labels()
        .border_style(BLACK.mix(0.3))
        .background_style(WHITE.mix(0.8))
        .draw()?;
    Ok(())
}
