//! altlog: glatter høydelogg, estimerer støy og vertikal fart, tegner plott.
//!
//! ```bash
//! altlog flight.json --plot flight.png
//! altlog flight.json --window 8 --lag 10 --interval 0.05 --report out.json
//! ```

use std::path::PathBuf;

use altlog_core::cli::print_report;
use altlog_core::plot::{render_png, PlotStyle};
use altlog_core::{analyze, load_config, load_log, save_report, save_series_csv, AnalysisConfig};
use anyhow::{bail, Context, Result};
use clap::Parser;

#[derive(Parser)]
#[command(name = "altlog")]
#[command(
    about = "Smooth a barometric altitude log and estimate vertical velocity",
    long_about = None
)]
struct Cli {
    /// JSON-logg med poster {alt, avg_alt, p, avg_p}
    input: PathBuf,

    /// Analyseoppsett (JSON). Flagg under overstyrer filen.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Glattevindu (sampler)
    #[arg(long)]
    window: Option<usize>,

    /// Lag for fartsestimat (glattede steg)
    #[arg(long)]
    lag: Option<usize>,

    /// Vindu for andre glattepass på farten
    #[arg(long, conflicts_with = "no_secondary")]
    secondary_window: Option<usize>,

    /// Slå av andre glattepass
    #[arg(long)]
    no_secondary: bool,

    /// Tid mellom sampler i sekunder (gir fart i m/s)
    #[arg(long)]
    interval: Option<f64>,

    /// Skriv stablede plott til PNG
    #[arg(long)]
    plot: Option<PathBuf>,

    /// Ta med trykkpanel i plottet
    #[arg(long, requires = "plot")]
    pressure_panel: bool,

    /// Skriv rapport som JSON
    #[arg(long)]
    report: Option<PathBuf>,

    /// Skriv avledede serier som CSV
    #[arg(long)]
    csv: Option<PathBuf>,
}

impl Cli {
    fn analysis_config(&self) -> Result<AnalysisConfig> {
        let mut cfg = match &self.config {
            // Eksplisitt sti fra brukeren: skal finnes, ingen stille fallback
            Some(path) if !path.exists() => {
                bail!("config file {} not found", path.display())
            }
            Some(path) => load_config(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => AnalysisConfig::default(),
        };
        if let Some(w) = self.window {
            cfg.window = w;
        }
        if let Some(l) = self.lag {
            cfg.lag = l;
        }
        if let Some(sw) = self.secondary_window {
            cfg.secondary_window = Some(sw);
        }
        if self.no_secondary {
            cfg.secondary_window = None;
        }
        if let Some(dt) = self.interval {
            cfg.sample_interval_s = Some(dt);
        }
        Ok(cfg)
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let cfg = cli.analysis_config()?;

    let log = load_log(&cli.input)
        .with_context(|| format!("loading log {}", cli.input.display()))?;
    let report = analyze(&log, &cfg)?;

    print_report(&report);

    if let Some(path) = &cli.report {
        save_report(&report, path)?;
    }
    if let Some(path) = &cli.csv {
        save_series_csv(&report, path)?;
    }
    if let Some(path) = &cli.plot {
        let style = PlotStyle {
            pressure_panel: cli.pressure_panel,
            ..PlotStyle::default()
        };
        render_png(&log, &report, &style, path)?;
    }

    Ok(())
}
