use crate::driver::{DriveError, HarnessError};
use crate::effects::EffectError;
use crate::workflow::SaveError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    #[error("Effect error: {0}")]
    Effect(#[from] EffectError),

    #[error("Save error: {0}")]
    Save(#[from] SaveError),

    #[error("Harness error: {0}")]
    Harness(#[from] HarnessError),
}

impl From<DriveError<SaveError>> for Error {
    fn from(error: DriveError<SaveError>) -> Self {
        match error {
            DriveError::Effect { source, .. } => Self::Effect(source),
            DriveError::Workflow(e) => Self::Save(e),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
