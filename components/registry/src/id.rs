use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::Error;

static VERSION_ID: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^04t([a-zA-Z0-9]{12}|[a-zA-Z0-9]{15})$").unwrap()
});

const CANONICAL_LEN: usize = 15;

/// Package version identifier in its 15 character form.
///
/// The 18 character form carries a 3 character checksum suffix
/// which is dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageVersionId(String);

impl PackageVersionId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for PackageVersionId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !VERSION_ID.is_match(s) {
            return Err(Error::InvalidVersionId(s.to_string()));
        }
        Ok(Self(s[..CANONICAL_LEN].to_string()))
    }
}

impl fmt::Display for PackageVersionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
