//! Parsing of Onshape document links and element classification.
//!
//! A document link has the shape
//! `https://cad.onshape.com/documents/{did}/w/{wid}/e/{eid}` where the `w`
//! token may also be `v` (version) or `m` (microversion). The four ids are
//! extracted by fixed position, with the segment count and literal separators
//! validated up front.

use std::fmt;

use crate::error::ExportError;

/// Which kind of selector the reference points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WvmKind {
    Workspace,
    Version,
    Microversion,
}

impl WvmKind {
    fn from_token(token: &str) -> Option<Self> {
        match token {
            "w" => Some(WvmKind::Workspace),
            "v" => Some(WvmKind::Version),
            "m" => Some(WvmKind::Microversion),
            _ => None,
        }
    }

    /// The single-letter token used in API paths.
    pub fn token(&self) -> &'static str {
        match self {
            WvmKind::Workspace => "w",
            WvmKind::Version => "v",
            WvmKind::Microversion => "m",
        }
    }
}

impl fmt::Display for WvmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// The identifiers locating one element of one document. Parsed once from the
/// user-supplied link and immutable for the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentReference {
    pub document_id: String,
    pub wvm: WvmKind,
    pub wvm_id: String,
    pub element_id: String,
}

impl DocumentReference {
    /// Parse a document link into its four identifier fields.
    ///
    /// Segment layout after splitting on `/`:
    /// `[scheme, "", host, "documents", did, wvm, wvmid, "e", eid, ...]`
    pub fn parse(link: &str) -> Result<Self, ExportError> {
        let link = link.trim();
        let parts: Vec<&str> = link.split('/').collect();
        if parts.len() < 9 {
            return Err(ExportError::MalformedReference(format!(
                "expected at least 9 slash-delimited segments, got {}",
                parts.len()
            )));
        }
        if parts[3] != "documents" {
            return Err(ExportError::MalformedReference(
                "missing /documents/ segment".into(),
            ));
        }
        if parts[7] != "e" {
            return Err(ExportError::MalformedReference(
                "missing /e/ element segment".into(),
            ));
        }
        let wvm = WvmKind::from_token(parts[5]).ok_or_else(|| {
            ExportError::MalformedReference(format!(
                "expected w, v or m selector, got {:?}",
                parts[5]
            ))
        })?;

        let (document_id, wvm_id, element_id) = (parts[4], parts[6], parts[8]);
        if document_id.is_empty() || wvm_id.is_empty() || element_id.is_empty() {
            return Err(ExportError::MalformedReference(
                "empty identifier segment".into(),
            ));
        }

        Ok(Self {
            document_id: document_id.to_string(),
            wvm,
            wvm_id: wvm_id.to_string(),
            element_id: element_id.to_string(),
        })
    }
}

/// Classifies the target element; drives endpoint selection for export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    PartStudio,
    Assembly,
}

impl ElementKind {
    /// Classify from the vendor's `elementType` field. Anything other than a
    /// part studio follows the assembly export path.
    pub fn from_element_type(element_type: &str) -> Self {
        if element_type == "PARTSTUDIO" {
            ElementKind::PartStudio
        } else {
            ElementKind::Assembly
        }
    }

    /// Resource segment in export endpoint paths.
    pub fn export_resource(&self) -> &'static str {
        match self {
            ElementKind::PartStudio => "parts",
            ElementKind::Assembly => "assemblies",
        }
    }
}
