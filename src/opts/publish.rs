use structopt::StructOpt;

use super::RegistryOpts;

#[derive(StructOpt, Debug)]
pub struct Publish {
    /// Package version id (04t...)
    #[structopt(short = "v", long = "version")]
    pub version: String,

    #[structopt(flatten)]
    pub registry: RegistryOpts,

    /// Format output as JSON
    #[structopt(long)]
    pub json: bool,
}
