use std::result;

use thiserror::Error;

pub type Result<T> = result::Result<T, DatagenError>;

#[derive(Error, Debug)]
pub enum DatagenError {
    #[error("Internal: {0:?}")]
    Internal(String),
    #[error("CSVError: {0:?}")]
    CSVError(#[from] csv::Error),
    #[error("IOError: {0:?}")]
    IOError(#[from] std::io::Error),
    #[error("SqlxError: {0:?}")]
    SqlxError(#[from] sqlx::Error),
    #[error("Other: {0:?}")]
    AnyhowError(#[from] anyhow::Error),
}
