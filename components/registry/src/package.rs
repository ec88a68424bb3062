use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A package version record held by the registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackageVersion {
    /// Platform identifier for the version (`04t...`).
    pub sfdc_id: String,
    pub name: String,
    pub version: String,
    #[serde(default)]
    pub published_date: Option<i64>,
    #[serde(default)]
    pub is_beta: bool,

    /// Any other fields sent by the registry.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl PackageVersion {
    /// Key and value pairs for display, sorted by key.
    pub fn fields(&self) -> Vec<(String, String)> {
        let mut map: BTreeMap<String, String> = BTreeMap::new();
        map.insert("sfdc_id".to_string(), self.sfdc_id.clone());
        map.insert("name".to_string(), self.name.clone());
        map.insert("version".to_string(), self.version.clone());
        if let Some(published) = self.published_date {
            map.insert("published_date".to_string(), published.to_string());
        }
        map.insert("is_beta".to_string(), self.is_beta.to_string());
        for (key, value) in self.extra.iter() {
            if let Some(value) = display_value(value) {
                map.insert(key.clone(), value);
            }
        }
        map.into_iter().collect()
    }
}

/// A record returned by the registry after a publish.
///
/// The registry decides which fields it sends back so every key is
/// kept as received.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PackageRecord(BTreeMap<String, Value>);

impl PackageRecord {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Key and value pairs for display, sorted by key.
    pub fn fields(&self) -> Vec<(String, String)> {
        self.0
            .iter()
            .filter_map(|(key, value)| display_value(value).map(|v| (key.clone(), v)))
            .collect()
    }
}

fn display_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Null => None,
        _ => Some(value.to_string()),
    }
}

/// Single rejection reason reported by the upstream platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformError {
    pub title: String,
    pub detail: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_extra_fields() -> serde_json::Result<()> {
        let data = r#"{
            "sfdc_id": "04t1t000003DLAL",
            "name": "Streaming Monitor",
            "version": "3.2",
            "published_date": 1600000000000,
            "is_beta": false,
            "publisher": "Salesforce Labs",
            "description": null
        }"#;
        let package: PackageVersion = serde_json::from_str(data)?;
        assert_eq!("Streaming Monitor", package.name);
        assert_eq!(Some(1600000000000), package.published_date);
        assert_eq!(
            Some(&Value::String("Salesforce Labs".to_string())),
            package.extra.get("publisher")
        );

        let fields = package.fields();
        let keys: Vec<&str> = fields.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(
            vec!["is_beta", "name", "published_date", "publisher", "sfdc_id", "version"],
            keys
        );

        let value = serde_json::to_value(&package)?;
        assert_eq!("Salesforce Labs", value["publisher"]);
        Ok(())
    }

    #[test]
    fn record_keeps_every_key() -> serde_json::Result<()> {
        let data = r#"{
            "id": "04t1t000003DLAL",
            "name": "Streaming Monitor",
            "publisher": "Salesforce Labs",
            "versionName": "Summer '20",
            "versionNumber": "3.2",
            "description": null,
            "isBeta": false
        }"#;
        let record: PackageRecord = serde_json::from_str(data)?;
        assert_eq!(
            vec![
                ("id".to_string(), "04t1t000003DLAL".to_string()),
                ("isBeta".to_string(), "false".to_string()),
                ("name".to_string(), "Streaming Monitor".to_string()),
                ("publisher".to_string(), "Salesforce Labs".to_string()),
                ("versionName".to_string(), "Summer '20".to_string()),
                ("versionNumber".to_string(), "3.2".to_string()),
            ],
            record.fields()
        );
        assert_eq!(Some(&Value::Null), record.get("description"));
        assert_eq!(serde_json::from_str::<Value>(data)?, serde_json::to_value(&record)?);
        Ok(())
    }
}
