use log::info;

use registry::{PackageVersion, RegistryClient};

use crate::flags;
use crate::opts::Install;
use crate::ux::Ux;
use crate::{Error, Result};

static INSTALL_COMMAND: &str = "force:package:install";

/// Resolve a package version in the registry and hand it to the installer.
pub async fn install(
    client: &RegistryClient,
    installer: &str,
    opts: &Install,
    ux: &mut Ux,
) -> Result<PackageVersion> {
    ux.start_status("Querying SPM registry")?;

    let package = match client
        .get_package_version(&opts.name, &opts.version, opts.include_beta)
        .await
    {
        Ok(package) => {
            ux.stop_status("done")?;
            package
        }
        Err(e) => {
            ux.fail_status("ERROR")?;
            return Err(lookup_error(e, &opts.name, opts.include_beta));
        }
    };

    ux.log(format!(
        "Found package '{}@{}' with ID {}",
        opts.name, package.version, package.sfdc_id
    ));
    info!("Resolved {}@{} to {}", package.name, package.version, package.sfdc_id);

    let args = install_args(&package, opts);
    let mut command = utils::process::process(installer);
    command.args(&args).inherit_stdio(true);

    ux.blank();
    ux.log(command.display());
    ux.blank();

    command.exec().await?;

    Ok(package)
}

/// Arguments for the installer, the package id followed by the
/// forwarded flags.
pub fn install_args(package: &PackageVersion, opts: &Install) -> Vec<String> {
    let mut args = vec![
        INSTALL_COMMAND.to_string(),
        "--package".to_string(),
        package.sfdc_id.clone(),
    ];
    flags::append(&mut args, &opts.flags());
    args
}

fn lookup_error(e: registry::Error, name: &str, include_beta: bool) -> Error {
    match &e {
        registry::Error::PackageNotFound => {
            if include_beta {
                Error::NoBetaPackageResults(name.to_string())
            } else {
                Error::NoStablePackageResults(name.to_string())
            }
        }
        registry::Error::Timeout => Error::RegistryTimeout,
        registry::Error::Registry {
            status, message, ..
        } => Error::RegistryInternal(*status, message.clone()),
        registry::Error::PlatformPackage { .. }
        | registry::Error::MissingData
        | registry::Error::InvalidVersionId(_)
        | registry::Error::Request(_)
        | registry::Error::Json(_)
        | registry::Error::Url(_) => Error::Unknown(e.to_string()),
    }
}
