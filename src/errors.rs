use std::io;
use std::result;
use thiserror::Error;

pub type Result<T> = result::Result<T, AppError>;

/// Errors raised while resolving the external tools VidForge depends on.
///
/// Every message is meant to be shown to the user as-is, so variants that
/// describe a missing tool carry the manual install instructions with them.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("unknown command: {0}")]
    UnknownTool(String),

    #[error("{0} not found")]
    NotFound(String),

    #[error("{tool} not found. Please install it:\n{guidance}")]
    MissingDependency { tool: String, guidance: String },

    #[error("{0} required but not installed")]
    Declined(String),

    #[error("failed to download {tool}: {source}\nPlease install manually:\n{guidance}")]
    Download {
        tool: String,
        #[source]
        source: DownloadError,
        guidance: String,
    },
}

/// Failure of the single download attempt for a tool binary.
#[derive(Error, Debug)]
pub enum DownloadError {
    #[error("unsupported platform: {os}/{arch}")]
    UnsupportedPlatform { os: String, arch: String },

    #[error("no release asset for {tool} on {os}/{arch}")]
    NoAsset {
        tool: String,
        os: String,
        arch: String,
    },

    #[error("could not determine the home directory for the binary cache")]
    NoCacheDir,

    #[error("invalid download URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("failed to download: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("download failed with status: {0}")]
    Status(reqwest::StatusCode),

    #[error("failed to save file: {0}")]
    Io(#[from] io::Error),
}
