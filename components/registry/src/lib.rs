//! Client for the SPM package registry.
//!
//! The transport issues exactly one request per call and classifies
//! the response; the client builds the registry paths for looking up
//! and publishing package versions on top of it.
use thiserror::Error;

mod client;
mod config;
mod id;
mod package;
mod transport;

#[derive(Error, Debug)]
pub enum Error {
    /// The registry has no package matching the name and version.
    #[error("Package not found in the registry")]
    PackageNotFound,

    #[error("Registry request timed out")]
    Timeout,

    /// Any non-2xx response other than 424.
    #[error("Registry responded with {status} {message}")]
    Registry {
        status: u16,
        message: String,
        body: String,
    },

    /// HTTP 424, the upstream platform rejected the package.
    #[error("Platform rejected the package ({status} {message})")]
    PlatformPackage {
        status: u16,
        message: String,
        errors: Vec<PlatformError>,
    },

    #[error("Registry response did not contain any data")]
    MissingData,

    #[error("Invalid package version id {0}")]
    InvalidVersionId(String),

    #[error(transparent)]
    Request(#[from] reqwest::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Url(#[from] url::ParseError),
}

pub type Result<T> = std::result::Result<T, Error>;

pub use client::RegistryClient;
pub use config::{RegistryConfig, DEFAULT_TIMEOUT};
pub use id::PackageVersionId;
pub use package::{PackageRecord, PackageVersion, PlatformError};
pub use transport::{Method, Response, Transport};
