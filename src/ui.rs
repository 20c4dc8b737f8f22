//! Terminal output: spinner-driven per-variant progress and colored
//! success/failure messages, via `indicatif` and `console`.

use console::Style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::fetch::ExportedArtifact;

/// Visual progress for an export run. One spinner is reused across variants,
/// its message tracking the current pipeline stage.
pub struct ExportProgress {
    pb: ProgressBar,
    green: Style,
    red: Style,
    yellow: Style,
}

impl ExportProgress {
    /// Start the spinner for a run.
    pub fn start() -> Self {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .expect("invalid template"),
        );
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        Self::with_bar(pb)
    }

    /// A progress instance that renders nothing (used in tests).
    #[cfg(test)]
    pub fn hidden() -> Self {
        Self::with_bar(ProgressBar::hidden())
    }

    fn with_bar(pb: ProgressBar) -> Self {
        Self {
            pb,
            green: Style::new().green().bold(),
            red: Style::new().red().bold(),
            yellow: Style::new().yellow(),
        }
    }

    /// Update the spinner for a new pipeline stage of the named variant.
    pub fn stage(&self, variant: &str, stage: &str) {
        self.pb.set_message(format!("{variant}: {stage}"));
    }

    /// Report a variant skipped by the default-sentinel filter.
    pub fn skipped(&self, variant: &str) {
        self.pb.println(format!(
            "  {} Skipped {variant}",
            self.yellow.apply_to("−")
        ));
    }

    /// Report one finished variant with its local path and size.
    pub fn variant_done(&self, variant: &str, artifact: &ExportedArtifact) {
        self.pb.println(format!(
            "  {} {variant} → {} ({} bytes)",
            self.green.apply_to("✓"),
            artifact.path.display(),
            artifact.bytes
        ));
    }

    /// Finish the run with a summary line.
    pub fn finish(&self, exported: usize, out_dir: &str) {
        self.pb.finish_and_clear();
        println!(
            "{} Exported {exported} configuration(s) to {out_dir}",
            self.green.apply_to("✓")
        );
    }

    /// Clear the spinner and print the fatal error.
    pub fn fail(&self, message: &str) {
        self.pb.finish_and_clear();
        eprintln!("{} {message}", self.red.apply_to("✗"));
    }
}

/// Print a fatal error when no progress spinner is active.
pub fn print_error(message: &str) {
    eprintln!("{} {message}", Style::new().red().bold().apply_to("✗"));
}
