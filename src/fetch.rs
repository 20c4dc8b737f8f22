//! Writes downloaded artifacts to local storage.
//!
//! Mesh formats arrive as a zip archive: the payload is written to a
//! temporary path, expanded into a directory named after the variant, and
//! the temporary archive is deleted. Other formats are written directly to
//! `<safeName>.<extension>`. Existing output is overwritten silently.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use crate::error::ExportError;
use crate::format::ExportFormat;

/// A finished local artifact: a single file or an expanded archive directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedArtifact {
    pub path: PathBuf,
    pub bytes: u64,
    pub is_archive: bool,
}

/// Reduce an option display name to a filesystem-safe form: keep
/// alphanumerics, space, hyphen and underscore, then trim trailing
/// whitespace.
pub fn safe_file_name(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, ' ' | '-' | '_'))
        .collect::<String>()
        .trim_end()
        .to_string()
}

/// Store one downloaded payload under `out_dir`, keyed by the variant's
/// display name.
pub fn store_artifact(
    payload: &[u8],
    option_label: &str,
    format: ExportFormat,
    out_dir: &Path,
) -> Result<ExportedArtifact, ExportError> {
    fs::create_dir_all(out_dir)?;
    let safe_name = safe_file_name(option_label);
    let bytes = payload.len() as u64;

    if format.is_mesh() {
        let archive_path = out_dir.join(format!("{safe_name}.zip.tmp"));
        fs::write(&archive_path, payload)?;
        let dest = out_dir.join(&safe_name);
        let result = extract_archive(&archive_path, &dest);
        // The temporary archive must not outlive the extraction, even when
        // extraction fails.
        let _ = fs::remove_file(&archive_path);
        result?;
        Ok(ExportedArtifact {
            path: dest,
            bytes,
            is_archive: true,
        })
    } else {
        let path = out_dir.join(format!("{safe_name}.{}", format.extension()));
        fs::write(&path, payload)?;
        Ok(ExportedArtifact {
            path,
            bytes,
            is_archive: false,
        })
    }
}

/// Expand a zip archive into `dest`, skipping entries whose paths would
/// escape the destination.
fn extract_archive(archive_path: &Path, dest: &Path) -> Result<(), ExportError> {
    fs::create_dir_all(dest)?;
    let file = File::open(archive_path)?;
    let mut archive = zip::ZipArchive::new(file)?;

    for i in 0..archive.len() {
        let mut entry = archive.by_index(i)?;
        let entry_path = match entry.enclosed_name() {
            Some(path) => dest.join(path),
            None => continue, // unsafe path
        };

        if entry.is_dir() {
            fs::create_dir_all(&entry_path)?;
        } else {
            if let Some(parent) = entry_path.parent() {
                fs::create_dir_all(parent)?;
            }
            let mut outfile = File::create(&entry_path)?;
            std::io::copy(&mut entry, &mut outfile)?;
        }
    }
    Ok(())
}
