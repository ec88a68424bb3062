use std::time::Duration;

use log::debug;
use url::Url;

use preference::Preferences;
use registry::{RegistryClient, DEFAULT_TIMEOUT};

use crate::opts::RegistryOpts;
use crate::{Error, Result};

static DEFAULT_INSTALLER: &str = "sfdx";

/// Settings resolved from flags, environment and preferences.
///
/// Flags and environment variables win over the preferences file
/// which wins over the built-in defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub registry_url: Option<Url>,
    pub timeout: Duration,
    pub installer: String,
}

impl Settings {
    pub fn resolve(
        opts: &RegistryOpts,
        installer: Option<&str>,
        prefs: &Preferences,
    ) -> Result<Self> {
        let registry_url = match opts.registry_url {
            Some(ref url) => Some(url.clone()),
            None => match prefs.registry_url {
                Some(ref url) => Some(url.parse::<Url>()?),
                None => None,
            },
        };

        let timeout = match opts.timeout.or(prefs.timeout) {
            Some(0) => return Err(Error::ZeroTimeout),
            Some(secs) => Duration::from_secs(secs),
            None => DEFAULT_TIMEOUT,
        };

        let installer = installer
            .map(|s| s.to_string())
            .or_else(|| prefs.installer.clone())
            .unwrap_or_else(|| DEFAULT_INSTALLER.to_string());

        Ok(Self {
            registry_url,
            timeout,
            installer,
        })
    }

    pub fn client(&self) -> Result<RegistryClient> {
        let client = RegistryClient::new(self.registry_url.as_ref(), self.timeout)?;
        debug!("{:?}", client.config());
        Ok(client)
    }
}

#[cfg(test)]
mod tests {
    use registry::RegistryConfig;

    use super::*;

    #[test]
    fn builtin_defaults() -> Result<()> {
        let settings = Settings::resolve(&Default::default(), None, &Default::default())?;
        assert_eq!(None, settings.registry_url);
        assert_eq!(DEFAULT_TIMEOUT, settings.timeout);
        assert_eq!("sfdx", settings.installer);
        assert_eq!(&RegistryConfig::default(), settings.client()?.config());
        Ok(())
    }

    #[test]
    fn preferences_fill_gaps() -> Result<()> {
        let prefs = Preferences {
            registry_url: Some("http://localhost:3002".to_string()),
            installer: Some("sf".to_string()),
            timeout: Some(5),
        };
        let settings = Settings::resolve(&Default::default(), None, &prefs)?;
        let client = settings.client()?;
        let config = client.config();
        assert_eq!("http", config.protocol);
        assert_eq!("localhost", config.host);
        assert_eq!(3002, config.port);
        assert_eq!(Duration::from_secs(5), config.timeout);
        assert_eq!("sf", settings.installer);
        Ok(())
    }

    #[test]
    fn flags_win() -> Result<()> {
        let prefs = Preferences {
            registry_url: Some("http://localhost:3002".to_string()),
            installer: Some("sf".to_string()),
            timeout: Some(5),
        };
        let opts = RegistryOpts {
            registry_url: Some("https://registry.example.com:8443".parse()?),
            timeout: Some(60),
        };
        let settings = Settings::resolve(&opts, Some("/usr/local/bin/sfdx"), &prefs)?;
        let client = settings.client()?;
        let config = client.config();
        assert_eq!("registry.example.com", config.host);
        assert_eq!(8443, config.port);
        assert_eq!(Duration::from_secs(60), config.timeout);
        assert_eq!("/usr/local/bin/sfdx", settings.installer);
        Ok(())
    }

    #[test]
    fn zero_timeout_rejected() {
        let opts = RegistryOpts {
            timeout: Some(0),
            ..Default::default()
        };
        let result = Settings::resolve(&opts, None, &Default::default());
        assert!(matches!(result, Err(Error::ZeroTimeout)));

        let prefs = Preferences {
            timeout: Some(0),
            ..Default::default()
        };
        let result = Settings::resolve(&Default::default(), None, &prefs);
        assert!(matches!(result, Err(Error::ZeroTimeout)));
    }

    #[test]
    fn invalid_preference_url() {
        let prefs = Preferences {
            registry_url: Some("not a url".to_string()),
            ..Default::default()
        };
        assert!(Settings::resolve(&Default::default(), None, &prefs).is_err());
    }
}
