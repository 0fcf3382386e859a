//! Firebase project configuration.
//!
//! `FirebaseOptions` is the record handed to the SDK initializer. Its shape is
//! owned by the backend service: the well-known keys get typed fields, anything
//! else passes through untouched in `extra`. No field is validated here.


use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The Firebase project configuration record, as found in a config source.
///
/// Wire form uses the camelCase key names the Firebase console emits
/// (`apiKey`, `authDomain`, ...). Every field is optional; a config with only
/// some keys set is still a valid resolution result.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FirebaseOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_bucket: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub messaging_sender_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_id: Option<String>,
    /// Keys this crate does not know about (e.g. `measurementId`), carried
    /// through verbatim.
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl FirebaseOptions {
    /// Shorthand for a config that only sets the project ID, the minimum the
    /// REST initializer needs.
    pub fn with_project_id(project_id: impl Into<String>) -> Self {
        Self {
            project_id: Some(project_id.into()),
            ..Default::default()
        }
    }
}
