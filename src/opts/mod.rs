use std::env;
use std::panic;

use log::error;
use structopt::StructOpt;
use url::Url;

use crate::{Error, Result};

pub mod install;
pub mod publish;

pub use self::install::Install;
pub use self::publish::Publish;

static LOG_ENV_NAME: &str = "SPM_LOG";

/// Options for reaching the registry shared by all commands.
#[derive(StructOpt, Debug, Default)]
pub struct RegistryOpts {
    /// Registry URL (protocol, host and port are used)
    #[structopt(short = "z", long = "registryurl", env = "SPM_REGISTRY_URL")]
    pub registry_url: Option<Url>,

    /// Registry request timeout in seconds
    #[structopt(long, env = "SPM_TIMEOUT")]
    pub timeout: Option<u64>,
}

pub fn log_level(level: &str) -> Result<()> {
    match level {
        "trace" | "debug" | "info" | "warn" | "error" => {
            env::set_var(LOG_ENV_NAME, level);
            pretty_env_logger::init_custom_env(LOG_ENV_NAME);
            Ok(())
        }
        _ => {
            // Jump a few hoops to pretty print this message
            env::set_var(LOG_ENV_NAME, "error");
            pretty_env_logger::init_custom_env(LOG_ENV_NAME);
            Err(Error::UnknownLogLevel(level.to_string()))
        }
    }
}

pub fn print_error(e: Error) {
    error!("{}", e);
}

pub fn fatal(e: Error) -> Result<()> {
    print_error(e);
    std::process::exit(1);
}

pub fn panic_hook() {
    panic::set_hook(Box::new(|info| {
        let message = format!("{}", info);
        print_error(Error::Panic(message));
    }));
}
