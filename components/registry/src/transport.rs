use log::debug;
use serde::Deserialize;
use serde_json::Value;

use hyper::ext::ReasonPhrase;
use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;

pub use reqwest::Method;

use crate::{Error, PlatformError, RegistryConfig, Result};

/// Status used by the registry when the upstream platform
/// rejects a package.
const PLATFORM_FAILURE: u16 = 424;

/// Parsed body of a successful registry response.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    pub status: u16,
    pub data: Value,
}

#[derive(Deserialize)]
struct PlatformErrors {
    #[serde(default)]
    errors: Vec<PlatformError>,
}

/// Issues single requests against the registry.
pub struct Transport {
    config: RegistryConfig,
    client: reqwest::Client,
}

impl Transport {
    pub fn new(config: RegistryConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Self { config, client })
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    pub async fn get(&self, path: &str) -> Result<Response> {
        self.request(path, Method::GET, None).await
    }

    /// Send one request for a path relative to the registry base path.
    ///
    /// The whole body is buffered before it is classified, there
    /// is no retry.
    pub async fn request(
        &self,
        path: &str,
        method: Method,
        body: Option<String>,
    ) -> Result<Response> {
        let url = self.config.url(path)?;
        debug!("{} {} (tls: {})", method, url, self.config.is_tls());

        let mut request = self.client.request(method, url);
        if let Some(body) = body {
            request = request.header(CONTENT_TYPE, "application/json").body(body);
        }

        let response = request.send().await.map_err(request_error)?;
        let status = response.status();
        let reason = reason_phrase(&response);
        let text = response.text().await.map_err(request_error)?;
        debug!("Registry status {} {:?}", status, reason);

        classify(status, reason.as_deref(), &text)
    }
}

fn request_error(e: reqwest::Error) -> Error {
    if e.is_timeout() {
        Error::Timeout
    } else {
        Error::Request(e)
    }
}

/// Reason phrase sent by the server, only present when it differs
/// from the canonical one for the status.
fn reason_phrase(response: &reqwest::Response) -> Option<String> {
    response
        .extensions()
        .get::<ReasonPhrase>()
        .map(|reason| String::from_utf8_lossy(reason.as_bytes()).to_string())
}

/// Turn a completed response into data or a registry failure.
pub(crate) fn classify(
    status: StatusCode,
    reason: Option<&str>,
    body: &str,
) -> Result<Response> {
    let message = reason
        .or_else(|| status.canonical_reason())
        .unwrap_or("")
        .to_string();

    if status.as_u16() == PLATFORM_FAILURE {
        let failure: PlatformErrors = serde_json::from_str(body)?;
        return Err(Error::PlatformPackage {
            status: status.as_u16(),
            message,
            errors: failure.errors,
        });
    }

    if !status.is_success() {
        return Err(Error::Registry {
            status: status.as_u16(),
            message,
            body: body.to_string(),
        });
    }

    let data: Value = serde_json::from_str(body)?;
    Ok(Response {
        status: status.as_u16(),
        data,
    })
}
