use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("No version of package '{0}' could be found in the registry, including beta versions")]
    NoBetaPackageResults(String),

    #[error("No stable version of package '{0}' could be found in the registry; use --includebeta to search beta versions")]
    NoStablePackageResults(String),

    #[error("The registry did not respond in time, try again later")]
    RegistryTimeout,

    #[error("Internal registry error ({0}): {1}")]
    RegistryInternal(u16, String),

    #[error("Package version {0} is not available")]
    PackageUnavailable(String),

    #[error("Invalid package version id {0}; expected 04t followed by 12 or 15 alphanumeric characters")]
    InvalidIdFormat(String),

    #[error("Unknown error: {0}")]
    Unknown(String),

    #[error("Registry timeout must be at least one second")]
    ZeroTimeout,

    #[error("Unknown log level: {0}")]
    UnknownLogLevel(String),

    #[error("{0}")]
    Panic(String),

    #[error(transparent)]
    Process(#[from] utils::process::Error),

    #[error(transparent)]
    Registry(#[from] registry::Error),

    #[error(transparent)]
    Terminal(#[from] utils::Error),

    #[error(transparent)]
    Preference(#[from] preference::Error),

    #[error(transparent)]
    Url(#[from] url::ParseError),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Short name for machine readable output.
    pub fn name(&self) -> &'static str {
        match self {
            Error::NoBetaPackageResults(_) | Error::NoStablePackageResults(_) => {
                "PackageNotFound"
            }
            Error::RegistryTimeout => "Timeout",
            Error::RegistryInternal(_, _) => "RegistryError",
            Error::PackageUnavailable(_) => "PackageUnavailable",
            Error::InvalidIdFormat(_) | Error::ZeroTimeout => "ValidationError",
            Error::Process(_) => "ProcessFailure",
            _ => "UnknownError",
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
