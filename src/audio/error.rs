use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AudioError {
    #[error("no audio output: {0}")]
    Output(String),

    #[error("cannot open {}: {source}", path.display())]
    Missing {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot decode {}: {reason}", path.display())]
    Decode { path: PathBuf, reason: String },

    #[error("seek failed: {0}")]
    Seek(String),
}

impl AudioError {
    pub fn missing(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Missing {
            path: path.into(),
            source,
        }
    }
}
