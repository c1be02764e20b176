use std::{io, path::PathBuf};

/// The error type for loading a workload and recording benchmark results.
///
/// The hash table itself never fails; only the surrounding file handling does.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Reading the dataset or appending to the results log failed.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The dataset was readable but did not produce a single usable row.
    #[error("No data loaded from {}. Check file path and format.", .path.display())]
    NoData { path: PathBuf },

    /// The requested number of lines was zero.
    #[error("Number of lines must be > 0 (got {0})")]
    InvalidLineCount(usize),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
