use std::path::Path;

use log::{info, warn};
use serde::de::DeserializeOwned;
use serde_path_to_error as spte;

use crate::analyzer::{AnalysisConfig, AnalysisReport};
use crate::error::{AltlogError, Result};
use crate::models::{LogRecord, LogRecordIn, SensorLog};

fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| AltlogError::Io {
        path: path.to_path_buf(),
        source,
    })
}

// Ett JSON-dokument; alt etter første verdi (unntatt whitespace) er feil
fn from_json<T: DeserializeOwned>(json_str: &str) -> Result<T> {
    let de = &mut serde_json::Deserializer::from_str(json_str);
    let value: T = spte::deserialize(&mut *de).map_err(|e| AltlogError::Parse {
        path: e.path().to_string(),
        source: e.into_inner(),
    })?;
    de.end().map_err(|source| AltlogError::Parse {
        path: String::new(),
        source,
    })?;
    Ok(value)
}

/// Parser en JSON-array med logg-poster til fire parallelle serier.
pub fn parse_log(json_str: &str) -> Result<SensorLog> {
    let raw: Vec<LogRecordIn> = from_json(json_str)?;

    let records = raw
        .into_iter()
        .enumerate()
        .map(|(i, r)| r.into_record(i))
        .collect::<Result<Vec<LogRecord>>>()?;

    Ok(SensorLog::from_records(&records))
}

/// Leser inn logg fra disk.
pub fn load_log(path: impl AsRef<Path>) -> Result<SensorLog> {
    let path = path.as_ref();
    let log = parse_log(&read_file(path)?)?;
    info!("📂 Logg lastet fra {} ({} sampler)", path.display(), log.len());
    Ok(log)
}

/// Leser analyseoppsett (JSON).
/// Hvis filen ikke finnes, returneres standardoppsettet.
pub fn load_config(path: impl AsRef<Path>) -> Result<AnalysisConfig> {
    let path = path.as_ref();
    if !path.exists() {
        warn!(
            "⚠️ Fant ikke oppsett på {}, bruker standardverdier",
            path.display()
        );
        return Ok(AnalysisConfig::default());
    }
    let contents = read_file(path)?;
    let cfg: AnalysisConfig = from_json(&contents)?;
    info!("📂 Oppsett lastet fra {}", path.display());
    Ok(cfg)
}

/// Lagrer rapport til disk som JSON (pretty-print).
pub fn save_report(report: &AnalysisReport, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(report)?;
    std::fs::write(path, json).map_err(|source| AltlogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!("✅ Rapport lagret til {}", path.display());
    Ok(())
}

/// Skriver de avledede seriene som CSV, én rad per glattet indeks.
/// Tomme celler der en serie er kortere eller mangler.
pub fn save_series_csv(report: &AnalysisReport, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record([
        "index",
        "smoothed_alt",
        "velocity",
        "velocity_smoothed",
        "velocity_ms",
    ])?;

    let cell = |xs: Option<&Vec<f64>>, i: usize| {
        xs.and_then(|v| v.get(i))
            .map(|x| x.to_string())
            .unwrap_or_default()
    };

    for (i, alt) in report.smoothed_altitude.iter().enumerate() {
        wtr.write_record([
            i.to_string(),
            alt.to_string(),
            cell(Some(&report.velocity), i),
            cell(report.velocity_smoothed.as_ref(), i),
            cell(report.velocity_ms.as_ref(), i),
        ])?;
    }
    wtr.flush().map_err(|source| AltlogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!(
        "✅ {} rader skrevet til {}",
        report.smoothed_altitude.len(),
        path.display()
    );
    Ok(())
}
