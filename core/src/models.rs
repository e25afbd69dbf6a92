use serde::{Deserialize, Serialize};

use crate::error::{AltlogError, Result};

/// Én måling fra barometer-loggen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LogRecord {
    pub altitude: f64,          // meter
    pub averaged_altitude: f64, // meter, snitt fra fartøyet
    pub pressure: f64,          // Pa
    pub averaged_pressure: f64, // Pa
}

// Tolerant inngang: alle felt valgfrie, valideres i `into_record`
#[derive(Debug, Deserialize)]
pub(crate) struct LogRecordIn {
    #[serde(default, alias = "altitude")]
    alt: Option<f64>,
    #[serde(default, alias = "averaged_altitude", alias = "averagedAltitude")]
    avg_alt: Option<f64>,
    #[serde(default, alias = "pressure")]
    p: Option<f64>,
    #[serde(default, alias = "averaged_pressure", alias = "averagedPressure")]
    avg_p: Option<f64>,
}

impl LogRecordIn {
    pub(crate) fn into_record(self, index: usize) -> Result<LogRecord> {
        let missing = |field: &str| AltlogError::MissingField {
            index,
            field: field.to_string(),
        };
        Ok(LogRecord {
            altitude: self.alt.ok_or_else(|| missing("alt"))?,
            averaged_altitude: self.avg_alt.ok_or_else(|| missing("avg_alt"))?,
            pressure: self.p.ok_or_else(|| missing("p"))?,
            averaged_pressure: self.avg_p.ok_or_else(|| missing("avg_p"))?,
        })
    }
}

/// Fire parallelle serier av lik lengde, en per felt i loggen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SensorLog {
    pub altitude: Vec<f64>,
    pub averaged_altitude: Vec<f64>,
    pub pressure: Vec<f64>,
    pub averaged_pressure: Vec<f64>,
}

impl SensorLog {
    pub fn from_records(records: &[LogRecord]) -> Self {
        let n = records.len();
        let mut log = SensorLog {
            altitude: Vec::with_capacity(n),
            averaged_altitude: Vec::with_capacity(n),
            pressure: Vec::with_capacity(n),
            averaged_pressure: Vec::with_capacity(n),
        };
        for r in records {
            log.altitude.push(r.altitude);
            log.averaged_altitude.push(r.averaged_altitude);
            log.pressure.push(r.pressure);
            log.averaged_pressure.push(r.averaged_pressure);
        }
        log
    }

    pub fn len(&self) -> usize {
        self.altitude.len()
    }

    pub fn is_empty(&self) -> bool {
        self.altitude.is_empty()
    }
}
