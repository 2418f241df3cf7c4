//! Pre-decoded call parameters as delivered by the transaction service

use serde::{Deserialize, Serialize};

/// Parameter carrying the packed validator public keys
pub const PUBLIC_KEYS_PARAMETER: &str = "_publicKeys";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataDecodedParameter {
    pub name: String,
    #[serde(rename = "type")]
    pub param_type: String,
    pub value: serde_json::Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataDecoded {
    pub method: String,
    #[serde(default)]
    pub parameters: Option<Vec<DataDecodedParameter>>,
}

impl DataDecoded {
    pub fn parameter(&self, name: &str) -> Option<&DataDecodedParameter> {
        self.parameters
            .as_deref()
            .unwrap_or_default()
            .iter()
            .find(|param| param.name == name)
    }

    /// String value of parameter `name`, if present and a string.
    pub fn string_value(&self, name: &str) -> Option<&str> {
        self.parameter(name).and_then(|param| param.value.as_str())
    }

    pub fn public_keys(&self) -> Option<&str> {
        self.string_value(PUBLIC_KEYS_PARAMETER)
    }
}
