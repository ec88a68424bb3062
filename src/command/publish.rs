use registry::{PackageRecord, PackageVersionId, PlatformError, RegistryClient};

use crate::opts::Publish;
use crate::ux::Ux;
use crate::{Error, Result};

/// Check the shape of a version id before anything is sent.
pub fn version_id(value: &str) -> Result<PackageVersionId> {
    value
        .parse()
        .map_err(|_| Error::InvalidIdFormat(value.to_string()))
}

/// Mark a package version as published in the registry.
pub async fn publish(
    client: &RegistryClient,
    opts: &Publish,
    ux: &mut Ux,
) -> Result<PackageRecord> {
    let id = version_id(&opts.version)?;

    ux.start_status("Updating SPM registry")?;

    match client.publish_package_version(&id).await {
        Ok(record) => {
            ux.stop_status("done")?;
            ux.blank();
            ux.log("Published package version:");
            ux.styled(&record.fields());
            Ok(record)
        }
        Err(e) => {
            ux.fail_status("ERROR")?;
            Err(publish_error(e, &id, ux))
        }
    }
}

fn publish_error(e: registry::Error, id: &PackageVersionId, ux: &Ux) -> Error {
    match &e {
        registry::Error::PlatformPackage { errors, .. } => {
            for line in platform_lines(errors) {
                ux.alert(line);
            }
            Error::PackageUnavailable(id.to_string())
        }
        registry::Error::Timeout => Error::RegistryTimeout,
        registry::Error::Registry {
            status, message, ..
        } => Error::RegistryInternal(*status, message.clone()),
        registry::Error::PackageNotFound
        | registry::Error::MissingData
        | registry::Error::InvalidVersionId(_)
        | registry::Error::Request(_)
        | registry::Error::Json(_)
        | registry::Error::Url(_) => Error::Unknown(e.to_string()),
    }
}

/// Report lines for the errors returned by the platform.
pub fn platform_lines(errors: &[PlatformError]) -> Vec<String> {
    let mut lines = vec!["The platform reported the following errors:".to_string()];
    for error in errors {
        let pairs = vec![
            ("title".to_string(), error.title.clone()),
            ("detail".to_string(), error.detail.clone()),
        ];
        lines.extend(utils::terminal::key_values(&pairs));
        lines.push(String::new());
    }
    lines
}
