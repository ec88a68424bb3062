use std::time::Duration;

use log::debug;
use serde::Deserialize;
use url::Url;

use crate::{
    Error, Method, PackageRecord, PackageVersion, PackageVersionId,
    RegistryConfig, Result, Transport,
};

static LATEST: &str = "latest";

/// Envelope used by the registry for every successful response.
#[derive(Deserialize)]
struct Payload<T> {
    data: Option<T>,
}

/// Lookup and publish operations against the registry.
///
/// A client is created for each command and passed to it; the
/// registry override only affects the client it was given to.
pub struct RegistryClient {
    transport: Transport,
}

impl RegistryClient {
    /// Client for the default registry or the one at `registry_url`.
    pub fn new(registry_url: Option<&Url>, timeout: Duration) -> Result<Self> {
        let mut config = match registry_url {
            Some(url) => RegistryConfig::from_url(url),
            None => Default::default(),
        };
        config.timeout = timeout;
        Self::with_config(config)
    }

    pub fn with_config(config: RegistryConfig) -> Result<Self> {
        Ok(Self {
            transport: Transport::new(config)?,
        })
    }

    pub fn config(&self) -> &RegistryConfig {
        self.transport.config()
    }

    /// Find a package version, `latest` selects the most recent one.
    pub async fn get_package_version(
        &self,
        name: &str,
        version: &str,
        include_beta: bool,
    ) -> Result<PackageVersion> {
        let path = lookup_path(name, version, include_beta);
        let response = self.transport.get(&path).await?;
        let payload: Payload<PackageVersion> = serde_json::from_value(response.data)?;
        payload.data.ok_or(Error::PackageNotFound)
    }

    /// Mark a package version as published, returning the record
    /// the registry sends back.
    pub async fn publish_package_version(
        &self,
        id: &PackageVersionId,
    ) -> Result<PackageRecord> {
        let path = publish_path(id);
        debug!("Publish {}", id);
        let response = self
            .transport
            .request(&path, Method::POST, None)
            .await?;
        let payload: Payload<PackageRecord> = serde_json::from_value(response.data)?;
        payload.data.ok_or(Error::MissingData)
    }
}

fn lookup_path(name: &str, version: &str, include_beta: bool) -> String {
    let mut path = format!(
        "package-version?package_name={}",
        urlencoding::encode(name)
    );
    if version.to_lowercase() != LATEST {
        path.push_str(&format!("&version={}", urlencoding::encode(version)));
    }
    path.push_str(&format!("&include-beta={}", include_beta));
    path
}

fn publish_path(id: &PackageVersionId) -> String {
    format!("package-version/{}", urlencoding::encode(id.as_str()))
}
