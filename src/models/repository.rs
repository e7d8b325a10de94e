//! Repository records as returned by the GitHub REST API

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::sanitize::sanitize_value;
use crate::error::{Error, Result};

/// One repository of the analyzed account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepositoryRecord {
    pub name: String,
    pub full_name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub html_url: String,
    pub clone_url: String,
    pub ssh_url: String,
    #[serde(default)]
    pub language: Option<String>,
    pub stargazers_count: u64,
    pub forks_count: u64,
    pub open_issues_count: u64,
    /// Size in kilobytes
    pub size: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub pushed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub private: bool,
    #[serde(default)]
    pub archived: bool,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default)]
    pub license: Option<License>,
    pub owner: Owner,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Owner {
    pub login: String,
    pub id: u64,
    /// "User" or "Organization"
    #[serde(rename = "type")]
    pub owner_type: String,
    pub html_url: String,
    pub avatar_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct License {
    pub key: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spdx_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl RepositoryRecord {
    /// Build a record from one raw API object.
    ///
    /// Strings are sanitized first. A record with a missing field, a negative
    /// count, a malformed timestamp, or an empty name is an API error.
    pub fn from_raw(raw: Value) -> Result<Self> {
        let record: RepositoryRecord = serde_json::from_value(sanitize_value(raw)).map_err(|e| {
            Error::api(format!("Invalid repository data in API response: {}", e)).with_cause(e)
        })?;

        if record.name.is_empty() || record.full_name.is_empty() {
            return Err(Error::api(
                "Invalid repository data in API response: empty repository name",
            ));
        }

        Ok(record)
    }

    /// Size in megabytes
    pub fn size_mb(&self) -> f64 {
        self.size as f64 / 1024.0
    }
}
