use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("invalid year range: min {min} is greater than max {max}")]
    InvertedYearRange { min: i32, max: i32 },
}

pub type Result<T> = std::result::Result<T, ModelError>;
