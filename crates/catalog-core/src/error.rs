use catalog_ingest::IngestError;
use catalog_model::{ModelError, YearRange};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Ingest(#[from] IngestError),
    #[error(transparent)]
    Model(#[from] ModelError),
    #[error("catalog has no valid release_year values; cannot bound the year filter")]
    NoReleaseYears,
    #[error("unknown content type '{content_type}' (known: {})", known.join(", "))]
    UnknownContentType {
        content_type: String,
        known: Vec<String>,
    },
    #[error("year range {requested} is outside the catalog bounds {bounds}")]
    YearRangeOutOfBounds {
        requested: YearRange,
        bounds: YearRange,
    },
}

pub type Result<T> = std::result::Result<T, CoreError>;
