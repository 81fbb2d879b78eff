//! Errors raised while reading or writing the net settings file.

use std::path::PathBuf;

/// Failure to load or persist `graticule.ron`.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The settings file exists but could not be read.
    #[error("cannot read net settings {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The settings file is not valid RON for [`Config`](crate::Config).
    #[error("invalid net settings in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },

    /// The settings file or its directory could not be written.
    #[error("cannot write net settings {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The settings could not be encoded as RON.
    #[error("cannot encode net settings: {0}")]
    Encode(#[from] ron::Error),
}
