use thiserror::Error;

/// Everything that can abort an export run. None of these are recovered
/// locally; the first failure ends the batch.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Malformed document reference: {0}")]
    MalformedReference(String),

    #[error("Element {element_id} not found in document {document_id}")]
    ElementNotFound {
        document_id: String,
        element_id: String,
    },

    #[error("No parts found in part studio {0}")]
    NoPartsFound(String),

    #[error("Element {0} has no configuration parameters")]
    NoConfigurationParameters(String),

    #[error("Configuration encoding failed with status {status}: {message}")]
    Encoding { status: u16, message: String },

    #[error("Export submission failed with status {status}: {message}")]
    ExportSubmission { status: u16, message: String },

    #[error("Translation failed: {reason}")]
    TranslationFailed { reason: String },

    #[error("Translation timed out after {attempts} polls")]
    TranslationTimeout { attempts: u32 },

    #[error("Translation finished without any result data")]
    EmptyResult,

    #[error("Download failed with status {status}: {message}")]
    Download { status: u16, message: String },

    #[error("API returned status {status}: {message}")]
    Api { status: u16, message: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),
}
