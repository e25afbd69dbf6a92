use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::barometer::pressure_altitude;
use crate::derivative::{derive, rate_per_second};
use crate::error::{AltlogError, Result};
use crate::metrics::noise;
use crate::models::SensorLog;
use crate::smoothing::smooth;

pub const DEFAULT_WINDOW: usize = 16;
pub const DEFAULT_LAG: usize = 20;
pub const DEFAULT_SECONDARY_WINDOW: usize = 32;

/// Parametre for én analyse. Standardverdiene er de gamle plottescriptenes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Vindu (antall sampler) for høydeglatting
    pub window: usize,
    /// Antall glattede steg mellom punktene i fartsestimatet
    pub lag: usize,
    /// Andre glattepass på farten (None = av)
    pub secondary_window: Option<usize>,
    /// Tid mellom sampler (sek). Satt → fart også i m/s.
    pub sample_interval_s: Option<f64>,
    /// Referansetrykk (Pa) for trykkhøyde; None = første sample
    pub reference_pressure_pa: Option<f64>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            window: DEFAULT_WINDOW,
            lag: DEFAULT_LAG,
            secondary_window: Some(DEFAULT_SECONDARY_WINDOW),
            sample_interval_s: None,
            reference_pressure_pa: None,
        }
    }
}

impl AnalysisConfig {
    pub fn validate(&self) -> Result<()> {
        if self.window == 0 {
            return Err(AltlogError::InvalidConfig("window must be >= 1".into()));
        }
        if self.lag == 0 {
            return Err(AltlogError::InvalidConfig("lag must be >= 1".into()));
        }
        if self.secondary_window == Some(0) {
            return Err(AltlogError::InvalidConfig(
                "secondary_window must be >= 1 when set".into(),
            ));
        }
        if let Some(dt) = self.sample_interval_s {
            if !dt.is_finite() || dt <= 0.0 {
                return Err(AltlogError::InvalidConfig(format!(
                    "sample_interval_s must be a positive number, got {dt}"
                )));
            }
        }
        if let Some(p) = self.reference_pressure_pa {
            if !p.is_finite() || p <= 0.0 {
                return Err(AltlogError::InvalidConfig(format!(
                    "reference_pressure_pa must be a positive number, got {p}"
                )));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct AnalysisReport {
    pub samples: usize,
    pub config: AnalysisConfig,
    /// Glattet høyde, lengde `samples - window + 1`
    pub smoothed_altitude: Vec<f64>,
    pub noise: f64,
    /// Høydeendring over `lag` glattede steg (samme lengde som glattet høyde)
    pub velocity: Vec<f64>,
    pub velocity_smoothed: Option<Vec<f64>>,
    /// Farten i m/s, bare når `sample_interval_s` er satt
    pub velocity_ms: Option<Vec<f64>>,
    pub pressure_altitude: Vec<f64>,
}

/// Kjører hele kjeden: rå → glattet → (støy, derivert) → ev. glattet derivert.
pub fn analyze(log: &SensorLog, cfg: &AnalysisConfig) -> Result<AnalysisReport> {
    cfg.validate()?;

    if cfg.window > log.len() {
        warn!(
            "vindu {} er lengre enn loggen ({} sampler), ingen glattet serie",
            cfg.window,
            log.len()
        );
    }

    let smoothed_altitude = smooth(&log.altitude, cfg.window);
    let noise = noise(&log.altitude, &smoothed_altitude);
    let velocity = derive(&smoothed_altitude, cfg.lag);

    let velocity_smoothed = cfg.secondary_window.map(|w| smooth(&velocity, w));
    let velocity_ms = cfg
        .sample_interval_s
        .map(|dt| rate_per_second(&velocity, cfg.lag, dt));

    let pressure_altitude = pressure_altitude(&log.pressure, cfg.reference_pressure_pa);

    debug!(
        "smoothed={} velocity={} secondary={:?}",
        smoothed_altitude.len(),
        velocity.len(),
        velocity_smoothed.as_ref().map(Vec::len)
    );
    info!("analyse ferdig: {} sampler, støy {:.4}", log.len(), noise);

    Ok(AnalysisReport {
        samples: log.len(),
        config: cfg.clone(),
        smoothed_altitude,
        noise,
        velocity,
        velocity_smoothed,
        velocity_ms,
        pressure_altitude,
    })
}
