use std::io;
use std::path::PathBuf;

static ROOT_DIR: &str = ".spm";
static PREFERENCES_FILE: &str = "preferences.toml";

/// The per-user directory, it is never created by us.
pub fn root_dir() -> io::Result<PathBuf> {
    if let Some(home) = home::home_dir() {
        return Ok(home.join(ROOT_DIR));
    }
    Err(io::Error::new(
        io::ErrorKind::NotFound,
        "Could not determine home directory".to_string(),
    ))
}

pub fn preferences_file() -> io::Result<PathBuf> {
    Ok(root_dir()?.join(PREFERENCES_FILE))
}
