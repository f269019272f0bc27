use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Fatal startup failures. Nothing here is retried.
#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot read asset '{}'", path.display())]
    AssetMissing {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot decode bitmap '{}'", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to initialize {0}")]
    ResourceInit(String),
}

pub type Result<T> = std::result::Result<T, Error>;
