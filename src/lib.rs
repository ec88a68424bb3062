mod command;
mod error;

pub mod flags;
pub mod opts;
pub mod settings;
pub mod ux;

pub use crate::command::install::{install, install_args};
pub use crate::command::publish::{platform_lines, publish, version_id};

pub use error::{Error, Result};
pub use settings::Settings;
