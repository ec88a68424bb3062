use std::fmt;
use std::str::FromStr;

use structopt::StructOpt;

use super::RegistryOpts;
use crate::flags::{Flag, FlagValue};

macro_rules! choice {
    ($name:ident { $($variant:ident => $text:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const VALUES: &'static [&'static str] = &[$($text),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }
        }

        impl FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($text => Ok($name::$variant),)+
                    _ => Err(format!("expected one of {}", Self::VALUES.join(", "))),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.as_str())
            }
        }
    };
}

choice!(ApexCompile {
    All => "all",
    Package => "package",
});

choice!(SecurityType {
    AllUsers => "AllUsers",
    AdminsOnly => "AdminsOnly",
});

choice!(UpgradeType {
    DeprecateOnly => "DeprecateOnly",
    Mixed => "Mixed",
    Delete => "Delete",
});

static DEFAULT_SECURITY_TYPE: SecurityType = SecurityType::AdminsOnly;
static DEFAULT_UPGRADE_TYPE: UpgradeType = UpgradeType::Mixed;

#[derive(StructOpt, Debug)]
pub struct Install {
    /// Name of the package to install
    #[structopt(short = "n", long = "name")]
    pub name: String,

    /// Version of the package to install
    #[structopt(short = "v", long = "version", default_value = "latest")]
    pub version: String,

    /// Include beta versions when searching the registry
    #[structopt(short = "i", long = "includebeta")]
    pub include_beta: bool,

    #[structopt(flatten)]
    pub registry: RegistryOpts,

    /// Executable that installs the package
    #[structopt(long, env = "SPM_INSTALLER")]
    pub installer: Option<String>,

    /// Compile all Apex in the org and package, or only the package
    #[structopt(short = "a", long = "apexcompile", possible_values = ApexCompile::VALUES)]
    pub apex_compile: Option<ApexCompile>,

    /// Minutes to wait for the package version to be available
    #[structopt(short = "b", long = "publishwait")]
    pub publish_wait: Option<u64>,

    /// Installation key for a key-protected package
    #[structopt(short = "k", long = "installationkey")]
    pub installation_key: Option<String>,

    /// Do not prompt for confirmation
    #[structopt(short = "r", long = "noprompt")]
    pub no_prompt: bool,

    /// Security access type for the installed package
    #[structopt(
        short = "s",
        long = "securitytype",
        default_value = "AdminsOnly",
        possible_values = SecurityType::VALUES
    )]
    pub security_type: SecurityType,

    /// Upgrade type for the package installation
    #[structopt(
        short = "t",
        long = "upgradetype",
        default_value = "Mixed",
        possible_values = UpgradeType::VALUES
    )]
    pub upgrade_type: UpgradeType,

    /// Minutes to wait for the installation status
    #[structopt(short = "w", long = "wait")]
    pub wait: Option<u64>,

    /// Username or alias of the target org
    #[structopt(short = "u", long = "targetusername")]
    pub target_username: String,

    /// Override the API version used by the installer
    #[structopt(long = "apiversion")]
    pub api_version: Option<String>,

    /// Logging level of the installer
    #[structopt(long = "loglevel", default_value = "warn")]
    pub installer_log_level: String,

    /// Format output as JSON
    #[structopt(long)]
    pub json: bool,
}

fn text<T: ToString>(value: T) -> FlagValue {
    FlagValue::Text(value.to_string())
}

impl Install {
    /// Flags in declaration order.
    ///
    /// Registry and installer selection are local settings and are
    /// not part of the table.
    pub fn flags(&self) -> Vec<Flag> {
        vec![
            Flag::internal("name", text(&self.name)),
            Flag::internal("version", text(&self.version)),
            Flag::internal("includebeta", FlagValue::Switch(self.include_beta)),
            Flag::declared("apexcompile", None, self.apex_compile.map(text)),
            Flag::declared(
                "publishwait",
                None,
                self.publish_wait.map(FlagValue::Minutes),
            ),
            Flag::declared(
                "installationkey",
                None,
                self.installation_key.as_ref().map(text),
            ),
            Flag::declared(
                "noprompt",
                Some(FlagValue::Switch(false)),
                Some(FlagValue::Switch(self.no_prompt)),
            ),
            Flag::declared(
                "securitytype",
                Some(text(DEFAULT_SECURITY_TYPE)),
                Some(text(self.security_type)),
            ),
            Flag::declared(
                "upgradetype",
                Some(text(DEFAULT_UPGRADE_TYPE)),
                Some(text(self.upgrade_type)),
            ),
            Flag::declared("wait", None, self.wait.map(FlagValue::Minutes)),
            Flag::inherited("targetusername", Some(text(&self.target_username))),
            Flag::inherited("apiversion", self.api_version.as_ref().map(text)),
            Flag::inherited("loglevel", Some(text(&self.installer_log_level))),
            Flag::inherited("json", Some(FlagValue::Switch(self.json))),
        ]
    }
}
