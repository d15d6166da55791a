use std::result;

use datagen::error::DatagenError;
use thiserror::Error;

pub type Result<T> = result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Datagen: {0:?}")]
    Datagen(#[from] DatagenError),
    #[error("Internal: {0}")]
    Internal(String),
    #[error("StdIO: {0:?}")]
    StdIO(#[from] std::io::Error),
    #[error("other: {0:?}")]
    Other(#[from] anyhow::Error),
}
