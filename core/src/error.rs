use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AltlogError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parse error at {path}: {source}")]
    Parse {
        /// JSON-sti til feltet som feilet, f.eks. `[3].avg_p`
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("record {index} is missing field `{field}`")]
    MissingField { index: usize, field: String },
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("failed to render plot: {0}")]
    Plot(String),
    #[error("csv export failed: {0}")]
    Csv(#[from] csv::Error),
    #[error("json encode failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl<E: std::error::Error + Send + Sync + 'static> From<plotters::drawing::DrawingAreaErrorKind<E>>
    for AltlogError
{
    fn from(value: plotters::drawing::DrawingAreaErrorKind<E>) -> Self {
        AltlogError::Plot(format!("{value:?}"))
    }
}

pub type Result<T> = std::result::Result<T, AltlogError>;
