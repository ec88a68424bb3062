extern crate log;
extern crate pretty_env_logger;

use log::debug;
use structopt::{clap::AppSettings, StructOpt};

use spm::{
    opts::{self, fatal, Install, Publish},
    ux::Ux,
    Result, Settings,
};

#[derive(Debug, StructOpt)]
/// Install and publish packages listed in the SPM registry
#[structopt(
    name = "spm",
    global_settings = &[AppSettings::VersionlessSubcommands],
    after_help = "EXAMPLES:
    Install the latest stable version of a package:
        spm install -n 'Streaming Monitor' -u ebikes
    Install the latest version including betas, waiting 10 minutes:
        spm install -n Quiz -i -u quizOrg -w 10
    Publish a package version:
        spm publish -v 04t1t000003DLAL"
)]
struct Cli {
    /// Log level
    #[structopt(long, default_value = "info")]
    log_level: String,

    #[structopt(subcommand)]
    cmd: Command,
}

#[derive(StructOpt, Debug)]
enum Command {
    /// Install a package version found in the registry
    Install {
        #[structopt(flatten)]
        args: Install,
    },

    /// Mark a package version as published in the registry
    Publish {
        #[structopt(flatten)]
        args: Publish,
    },
}

async fn run(cmd: Command) -> Result<()> {
    let prefs = preference::load()?;
    match cmd {
        Command::Install { args } => {
            let settings = Settings::resolve(
                &args.registry,
                args.installer.as_deref(),
                &prefs,
            )?;
            debug!("{:?}", settings);
            let mut ux = Ux::new(args.json);
            let result = match settings.client() {
                Ok(client) => {
                    spm::install(&client, &settings.installer, &args, &mut ux).await
                }
                Err(e) => Err(e),
            };
            finish(&ux, result)
        }
        Command::Publish { args } => {
            let settings = Settings::resolve(&args.registry, None, &prefs)?;
            debug!("{:?}", settings);
            let mut ux = Ux::new(args.json);
            let result = match settings.client() {
                Ok(client) => spm::publish(&client, &args, &mut ux).await,
                Err(e) => Err(e),
            };
            finish(&ux, result)
        }
    }
}

fn finish<T: serde::Serialize>(ux: &Ux, result: Result<T>) -> Result<()> {
    match result {
        Ok(value) => ux.result(&value),
        Err(e) => {
            ux.failure(&e);
            Err(e)
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::from_args();
    opts::panic_hook();
    opts::log_level(&*args.log_level).or_else(fatal)?;
    run(args.cmd).await.or_else(fatal)?;
    Ok(())
}
