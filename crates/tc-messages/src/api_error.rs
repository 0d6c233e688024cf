//! Error payloads returned by the test-center API.

use serde::{Deserialize, Deserializer, Serialize};

use crate::interpolate::FieldSource;

/// Problem-details body of a failed API call.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct ApiError {
    /// Dotted error type, e.g. `validation.error`.
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub error_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub instance: String,
    #[serde(deserialize_with = "null_as_default")]
    pub status: u16,
    #[serde(deserialize_with = "null_as_default")]
    pub detail: String,
    #[serde(deserialize_with = "null_as_default")]
    pub code: String,
    #[serde(deserialize_with = "null_as_default")]
    pub method: String,
    #[serde(deserialize_with = "null_as_default")]
    pub client_ip: String,
    #[serde(deserialize_with = "null_as_default")]
    pub server_ip: String,
    #[serde(deserialize_with = "null_as_default")]
    pub request_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub errors: Vec<ApiSubError>,
}

/// One entry of [`ApiError::errors`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct ApiSubError {
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub error_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub detail: String,
    /// Name of the request field the error refers to.
    #[serde(deserialize_with = "null_as_default")]
    pub request_field: String,
    #[serde(deserialize_with = "null_as_default")]
    pub request_values: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub requirement_id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub config_version_id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub test_suite_id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub test_case_id: u64,
}

/// Reads JSON `null` as the field's zero value, like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl FieldSource for ApiError {
    fn field(&self, name: &str) -> Option<String> {
        let value = match name {
            "Type" => self.error_type.clone(),
            "Title" => self.title.clone(),
            "Instance" => self.instance.clone(),
            "Status" => self.status.to_string(),
            "Detail" => self.detail.clone(),
            "Code" => self.code.clone(),
            "Method" => self.method.clone(),
            "ClientIp" => self.client_ip.clone(),
            "ServerIp" => self.server_ip.clone(),
            "RequestId" => self.request_id.clone(),
            _ => return None,
        };
        Some(value)
    }
}

impl FieldSource for ApiSubError {
    fn field(&self, name: &str) -> Option<String> {
        let value = match name {
            "Type" => self.error_type.clone(),
            "Title" => self.title.clone(),
            "Detail" => self.detail.clone(),
            "RequestField" => self.request_field.clone(),
            "RequestValues" => self.request_values.join(", "),
            "RequirementId" => self.requirement_id.to_string(),
            "ConfigVersionId" => self.config_version_id.to_string(),
            "TestSuiteId" => self.test_suite_id.to_string(),
            "TestCaseId" => self.test_case_id.to_string(),
            _ => return None,
        };
        Some(value)
    }
}
