use std::time::Duration;

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use crate::document::{DocumentReference, ElementKind};
use crate::error::ExportError;
use crate::format::ExportFormat;

use super::types::{
    ConfigurationSchema, Element, EncodeParameter, EncodeRequest, EncodedConfiguration,
    ExportRequest, MeshParams, Part, TranslationHandle, TranslationStatus,
};

const API_URL: &str = "https://cad.onshape.com";

/// HTTP client for the Onshape REST API, authenticated with an
/// access-key/secret-key pair via HTTP Basic auth.
pub struct OnshapeClient {
    client: Client,
    access_key: String,
    secret_key: String,
    base_url: String,
}

impl OnshapeClient {
    pub fn new(access_key: String, secret_key: String) -> Self {
        Self::with_base_url(access_key, secret_key, API_URL.to_string())
    }

    /// Create a client pointing at a custom base URL (useful for testing).
    pub fn with_base_url(access_key: String, secret_key: String, base_url: String) -> Self {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .build()
            .expect("failed to build HTTP client");
        Self {
            client,
            access_key,
            secret_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// List the elements of the referenced document.
    pub async fn list_elements(
        &self,
        doc: &DocumentReference,
    ) -> Result<Vec<Element>, ExportError> {
        let url = format!(
            "{}/api/v12/documents/d/{}/{}/{}/elements",
            self.base_url, doc.document_id, doc.wvm, doc.wvm_id
        );
        self.get_json(&url).await
    }

    /// List the parts of a part studio element.
    pub async fn list_parts(&self, doc: &DocumentReference) -> Result<Vec<Part>, ExportError> {
        let url = format!(
            "{}/api/v12/parts/d/{}/{}/{}/e/{}?withThumbnails=false&includePropertyDefaults=false",
            self.base_url, doc.document_id, doc.wvm, doc.wvm_id, doc.element_id
        );
        self.get_json(&url).await
    }

    /// Fetch the configuration schema of the referenced element.
    pub async fn get_configuration(
        &self,
        doc: &DocumentReference,
    ) -> Result<ConfigurationSchema, ExportError> {
        let url = format!(
            "{}/api/v12/elements/d/{}/{}/{}/e/{}/configuration",
            self.base_url, doc.document_id, doc.wvm, doc.wvm_id, doc.element_id
        );
        self.get_json(&url).await
    }

    /// Encode one selected option value into an opaque configuration token.
    pub async fn encode_configuration(
        &self,
        doc: &DocumentReference,
        parameter_id: &str,
        option_value: &str,
    ) -> Result<EncodedConfiguration, ExportError> {
        let url = format!(
            "{}/api/v12/elements/d/{}/e/{}/configurationencodings",
            self.base_url, doc.document_id, doc.element_id
        );
        let body = EncodeRequest {
            parameters: vec![EncodeParameter {
                parameter_id: parameter_id.to_string(),
                parameter_value: option_value.to_string(),
            }],
        };
        let response = self.request(self.client.post(&url).json(&body)).await?;
        if !response.status().is_success() {
            let (status, message) = Self::status_and_body(response).await;
            return Err(ExportError::Encoding { status, message });
        }
        Ok(response.json().await?)
    }

    /// Submit a translation request for one encoded variant. Returns the
    /// translation job id to poll.
    pub async fn submit_export(
        &self,
        doc: &DocumentReference,
        kind: ElementKind,
        format: ExportFormat,
        configuration_query: &str,
        part_id: Option<&str>,
    ) -> Result<String, ExportError> {
        let url = format!(
            "{}/api/v12/{}/d/{}/{}/{}/e/{}/export/{}?{}",
            self.base_url,
            kind.export_resource(),
            doc.document_id,
            doc.wvm,
            doc.wvm_id,
            doc.element_id,
            format.endpoint_slug(),
            configuration_query
        );
        let body = ExportRequest {
            store_in_document: false,
            notify_user: false,
            grouping: true,
            mesh_params: format.is_mesh().then(MeshParams::default),
            part_ids: part_id.map(|p| vec![p.to_string()]),
        };
        let response = self.request(self.client.post(&url).json(&body)).await?;
        if !response.status().is_success() {
            let (status, message) = Self::status_and_body(response).await;
            return Err(ExportError::ExportSubmission { status, message });
        }
        let handle: TranslationHandle = response.json().await?;
        Ok(handle.id)
    }

    /// Poll the state of a translation job once.
    pub async fn translation_status(
        &self,
        translation_id: &str,
    ) -> Result<TranslationStatus, ExportError> {
        let url = format!("{}/api/v12/translations/{}", self.base_url, translation_id);
        self.get_json(&url).await
    }

    /// Download a finished artifact by its external data id.
    pub async fn download_external_data(
        &self,
        document_id: &str,
        external_data_id: &str,
    ) -> Result<Vec<u8>, ExportError> {
        let url = format!(
            "{}/api/v6/documents/d/{}/externaldata/{}",
            self.base_url, document_id, external_data_id
        );
        let response = self.request(self.client.get(&url)).await?;
        if response.status() != reqwest::StatusCode::OK {
            let (status, message) = Self::status_and_body(response).await;
            return Err(ExportError::Download { status, message });
        }
        Ok(response.bytes().await?.to_vec())
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ExportError> {
        let response = self.request(self.client.get(url)).await?;
        if !response.status().is_success() {
            let (status, message) = Self::status_and_body(response).await;
            return Err(ExportError::Api { status, message });
        }
        Ok(response.json::<T>().await?)
    }

    async fn request(
        &self,
        builder: reqwest::RequestBuilder,
    ) -> Result<Response, ExportError> {
        let response = builder
            .basic_auth(&self.access_key, Some(&self.secret_key))
            .header("Accept", "application/json")
            .send()
            .await?;
        Ok(response)
    }

    async fn status_and_body(response: Response) -> (u16, String) {
        let status = response.status().as_u16();
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "unknown error".to_string());
        (status, message)
    }
}
