pub mod analyzer;
pub mod barometer;
pub mod cli;
pub mod derivative;
pub mod error;
pub mod metrics;
pub mod models;
pub mod plot;
pub mod smoothing;
pub mod storage;

pub use analyzer::{analyze, AnalysisConfig, AnalysisReport};
pub use barometer::altitude_from_pressure;
pub use derivative::derive;
pub use error::{AltlogError, Result};
pub use metrics::noise;
pub use models::{LogRecord, SensorLog};
pub use smoothing::smooth;
pub use storage::{load_config, load_log, parse_log, save_report, save_series_csv};
