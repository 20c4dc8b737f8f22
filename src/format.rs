use std::fmt;

/// Target file format for a translation.
///
/// Mesh formats come back from the server as a zip archive and carry fixed
/// tessellation parameters in the export request. Solidworks is the one
/// format with its own endpoint path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Step,
    Obj,
    Gltf,
    Solidworks,
}

impl ExportFormat {
    /// Path segment appended to the per-kind export endpoint.
    pub fn endpoint_slug(&self) -> &'static str {
        match self {
            ExportFormat::Step => "step",
            ExportFormat::Obj => "obj",
            ExportFormat::Gltf => "gltf",
            ExportFormat::Solidworks => "solidworks",
        }
    }

    /// Extension used for the local output file.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Step => "step",
            ExportFormat::Obj => "obj",
            ExportFormat::Gltf => "gltf",
            ExportFormat::Solidworks => "sldprt",
        }
    }

    /// Mesh formats are delivered as archives and need tessellation params.
    pub fn is_mesh(&self) -> bool {
        matches!(self, ExportFormat::Obj | ExportFormat::Gltf)
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.endpoint_slug())
    }
}
