//! Error types for release resolution and download.

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by every stage of the release pipeline.
///
/// Nothing is retried or recovered locally; each variant carries enough
/// context to produce a human-readable message on its own.
#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to list releases for {repo}: {cause}")]
    Network { repo: String, cause: String },

    #[error("invalid release list for {repo}: {cause}")]
    InvalidResponse { repo: String, cause: String },

    #[error("range {0} is not a valid semver string")]
    InvalidRange(String),

    #[error("no version satisfies range {0}")]
    Unsatisfied(String),

    #[error("no release of {0} has a semver tag")]
    NoReleases(String),

    #[error("no asset for platform {platform} with arch {arch}")]
    NoMatch { platform: String, arch: String },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("failed to download file {file_name} from url {url}: {cause}")]
    Download {
        file_name: String,
        url: String,
        cause: String,
    },

    #[error("IO error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
