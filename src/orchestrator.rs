//! Drives the export pipeline: resolve the target element, enumerate its
//! configuration variants, then for each variant encode, submit, poll and
//! fetch. Strictly sequential; one translation job in flight at a time, and
//! the first failure aborts the whole batch.

use std::path::PathBuf;

use crate::document::{DocumentReference, ElementKind};
use crate::error::ExportError;
use crate::fetch::{self, ExportedArtifact};
use crate::format::ExportFormat;
use crate::onshape::types::ConfigurationOption;
use crate::onshape::OnshapeClient;
use crate::translation::{await_translation, PollPolicy};
use crate::ui::ExportProgress;

/// Raw option value marking the base, unconfigured state.
pub const DEFAULT_OPTION_SENTINEL: &str = "Default";

/// Per-run export settings resolved from CLI flags and config.
#[derive(Debug, Clone)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub out_dir: PathBuf,
    /// Skip options whose raw value is the default sentinel.
    pub skip_default: bool,
    /// Stop after the first exported variant.
    pub first_only: bool,
    pub poll: PollPolicy,
}

/// The element kind and, for part studios, the part to export.
#[derive(Debug)]
struct ResolvedTarget {
    kind: ElementKind,
    part_id: Option<String>,
}

pub struct ExportOrchestrator {
    client: OnshapeClient,
    options: ExportOptions,
}

impl ExportOrchestrator {
    pub fn new(client: OnshapeClient, options: ExportOptions) -> Self {
        Self { client, options }
    }

    /// Export every configuration variant of the referenced element.
    pub async fn run(
        &self,
        doc: &DocumentReference,
        progress: &ExportProgress,
    ) -> Result<Vec<ExportedArtifact>, ExportError> {
        let target = self.resolve_target(doc).await?;
        let (parameter_id, variants) = self.enumerate_configurations(doc).await?;

        let mut artifacts = Vec::new();
        for option in &variants {
            if self.options.skip_default && option.value == DEFAULT_OPTION_SENTINEL {
                progress.skipped(option.label());
                continue;
            }
            let artifact = self
                .export_variant(doc, &target, &parameter_id, option, progress)
                .await?;
            progress.variant_done(option.label(), &artifact);
            artifacts.push(artifact);
            if self.options.first_only {
                break;
            }
        }
        Ok(artifacts)
    }

    /// Determine the element kind and, for part studios, the part id.
    /// Assemblies never trigger the part lookup.
    async fn resolve_target(
        &self,
        doc: &DocumentReference,
    ) -> Result<ResolvedTarget, ExportError> {
        let elements = self.client.list_elements(doc).await?;
        let element = elements
            .iter()
            .find(|e| e.id == doc.element_id)
            .ok_or_else(|| ExportError::ElementNotFound {
                document_id: doc.document_id.clone(),
                element_id: doc.element_id.clone(),
            })?;
        let kind = ElementKind::from_element_type(&element.element_type);

        let part_id = match kind {
            ElementKind::PartStudio => {
                let parts = self.client.list_parts(doc).await?;
                let first = parts
                    .into_iter()
                    .next()
                    .ok_or_else(|| ExportError::NoPartsFound(doc.element_id.clone()))?;
                Some(first.part_id)
            }
            ElementKind::Assembly => None,
        };
        Ok(ResolvedTarget { kind, part_id })
    }

    /// Fetch the configuration schema and take the first parameter's options,
    /// in server order. Only the first parameter is considered; elements with
    /// several variation axes are a known limitation.
    async fn enumerate_configurations(
        &self,
        doc: &DocumentReference,
    ) -> Result<(String, Vec<ConfigurationOption>), ExportError> {
        let schema = self.client.get_configuration(doc).await?;
        let parameter = schema
            .configuration_parameters
            .into_iter()
            .next()
            .ok_or_else(|| ExportError::NoConfigurationParameters(doc.element_id.clone()))?;
        Ok((parameter.parameter_id, parameter.options))
    }

    /// One encode → submit → poll → fetch pass for a single variant.
    async fn export_variant(
        &self,
        doc: &DocumentReference,
        target: &ResolvedTarget,
        parameter_id: &str,
        option: &ConfigurationOption,
        progress: &ExportProgress,
    ) -> Result<ExportedArtifact, ExportError> {
        progress.stage(option.label(), "encoding configuration");
        let encoded = self
            .client
            .encode_configuration(doc, parameter_id, &option.value)
            .await?;

        progress.stage(option.label(), "submitting export");
        let translation_id = self
            .client
            .submit_export(
                doc,
                target.kind,
                self.options.format,
                &encoded.query_string(),
                target.part_id.as_deref(),
            )
            .await?;

        progress.stage(option.label(), "waiting for translation");
        let status = await_translation(&self.client, &translation_id, &self.options.poll).await?;
        let external_data_id = status
            .result_external_data_ids
            .first()
            .ok_or(ExportError::EmptyResult)?;

        progress.stage(option.label(), "downloading");
        let payload = self
            .client
            .download_external_data(&doc.document_id, external_data_id)
            .await?;
        fetch::store_artifact(
            &payload,
            option.label(),
            self.options.format,
            &self.options.out_dir,
        )
    }
}
