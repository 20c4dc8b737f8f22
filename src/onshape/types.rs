//! Wire types for the Onshape REST endpoints this tool consumes.
//!
//! Field names follow the vendor's JSON (camelCase) via `serde(rename)`;
//! only the fields the exporter actually reads are modeled.

use serde::{Deserialize, Serialize};

/// One entry from the document element listing.
#[derive(Debug, Clone, Deserialize)]
pub struct Element {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "elementType")]
    pub element_type: String,
}

/// One entry from the part listing of a part studio.
#[derive(Debug, Clone, Deserialize)]
pub struct Part {
    #[serde(rename = "partId")]
    pub part_id: String,
    #[serde(default)]
    pub name: String,
}

/// Configuration schema of an element.
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigurationSchema {
    #[serde(rename = "configurationParameters", default)]
    pub configuration_parameters: Vec<ConfigurationParameter>,
}

/// A single variation axis with its discrete option values.
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigurationParameter {
    #[serde(rename = "parameterId")]
    pub parameter_id: String,
    #[serde(default)]
    pub options: Vec<ConfigurationOption>,
}

/// One enumerated variant of a configuration parameter.
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigurationOption {
    /// Raw option value submitted to the encoding endpoint.
    #[serde(rename = "option")]
    pub value: String,
    /// Human-readable name, used for output file naming.
    #[serde(rename = "optionName", default)]
    pub display_name: String,
}

impl ConfigurationOption {
    /// Name used for local files; falls back to the raw value when the
    /// server returns no display name.
    pub fn label(&self) -> &str {
        if self.display_name.is_empty() {
            &self.value
        } else {
            &self.display_name
        }
    }
}

/// Body of a configuration-encoding request.
#[derive(Debug, Clone, Serialize)]
pub struct EncodeRequest {
    pub parameters: Vec<EncodeParameter>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EncodeParameter {
    pub parameter_id: String,
    pub parameter_value: String,
}

/// Opaque token returned by the encoding endpoint, plus the ready-made query
/// string when the server provides one.
#[derive(Debug, Clone, Deserialize)]
pub struct EncodedConfiguration {
    #[serde(rename = "encodedId")]
    pub encoded_id: String,
    #[serde(rename = "queryParam", default)]
    pub query_param: Option<String>,
}

impl EncodedConfiguration {
    /// Query string attached to the export URL. Prefers the server-supplied
    /// form; otherwise builds it from the encoded id with `=` escaped.
    pub fn query_string(&self) -> String {
        match &self.query_param {
            Some(q) if !q.is_empty() => q.clone(),
            _ => format!("configuration={}", self.encoded_id.replace('=', "%3D")),
        }
    }
}

/// Fixed tessellation quality used for mesh-producing formats.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MeshParams {
    pub angular_tolerance: f64,
    pub distance_tolerance: f64,
    pub maximum_chord_length: f64,
    pub resolution: String,
    pub unit: String,
}

impl Default for MeshParams {
    fn default() -> Self {
        Self {
            angular_tolerance: 0.001,
            distance_tolerance: 0.001,
            maximum_chord_length: 0.01,
            resolution: "FINE".into(),
            unit: "METER".into(),
        }
    }
}

/// Body of an export submission. `store_in_document = false` forces a
/// directly downloadable result instead of writing into the cloud document.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportRequest {
    pub store_in_document: bool,
    pub notify_user: bool,
    pub grouping: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mesh_params: Option<MeshParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub part_ids: Option<Vec<String>>,
}

/// Response to an export submission.
#[derive(Debug, Clone, Deserialize)]
pub struct TranslationHandle {
    pub id: String,
}

/// One poll of a translation job.
#[derive(Debug, Clone, Deserialize)]
pub struct TranslationStatus {
    #[serde(rename = "requestState")]
    pub request_state: String,
    #[serde(rename = "failureReason", default)]
    pub failure_reason: Option<String>,
    #[serde(rename = "resultExternalDataIds", default)]
    pub result_external_data_ids: Vec<String>,
}
