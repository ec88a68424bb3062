use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    TomlDeser(#[from] toml::de::Error),
}

/// Per-user defaults read from `~/.spm/preferences.toml`.
///
/// Command line flags and environment variables take precedence.
#[skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub struct Preferences {
    /// Registry to use instead of the public registry.
    pub registry_url: Option<String>,
    /// Executable that performs package installs.
    pub installer: Option<String>,
    /// Registry request timeout in seconds.
    pub timeout: Option<u64>,
}

/// Load the user preferences, missing file yields the defaults.
pub fn load() -> Result<Preferences, Error> {
    let file = dirs::preferences_file()?;
    load_file(&file)
}

pub fn load_file<P: AsRef<Path>>(file: P) -> Result<Preferences, Error> {
    let file = file.as_ref();
    if !file.exists() {
        return Ok(Default::default());
    }
    let content = utils::fs::read_string(file)?;
    Ok(toml::from_str(&content)?)
}
