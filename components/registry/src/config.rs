use std::time::Duration;

use url::Url;

use crate::Result;

static PROTOCOL: &str = "https";
static HOST: &str = "spm-registry.herokuapp.com";
static PORT: u16 = 443;
static BASE_PATH: &str = "/api/v1/";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Location of the registry API.
#[derive(Debug, Clone, PartialEq)]
pub struct RegistryConfig {
    pub protocol: String,
    pub host: String,
    pub port: u16,
    pub base_path: String,
    pub timeout: Duration,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            protocol: PROTOCOL.to_string(),
            host: HOST.to_string(),
            port: PORT,
            base_path: BASE_PATH.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl RegistryConfig {
    /// Take the protocol, host and port from an override URL.
    ///
    /// The base path is not taken from the URL; the API always
    /// lives under the default base path.
    pub fn from_url(url: &Url) -> Self {
        let mut config: RegistryConfig = Default::default();
        config.protocol = url.scheme().to_string();
        if let Some(host) = url.host_str() {
            config.host = host.to_string();
        }
        if let Some(port) = url.port_or_known_default() {
            config.port = port;
        }
        config
    }

    pub fn is_tls(&self) -> bool {
        self.protocol != "http"
    }

    /// Full URL for a path relative to the base path.
    ///
    /// The path must already be percent-encoded.
    pub fn url(&self, path: &str) -> Result<Url> {
        let target = format!(
            "{}://{}:{}{}{}",
            self.protocol, self.host, self.port, self.base_path, path
        );
        Ok(target.parse()?)
    }
}
