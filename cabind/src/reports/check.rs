//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from schema validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the schema file.
    pub config_path: PathBuf,
    pub class_count: usize,
    pub container_count: usize,
    /// Error messages.
    pub errors: Vec<String>,
    /// Warning messages.
    pub warnings: Vec<String>,
    /// Info messages.
    pub infos: Vec<String>,
}

impl CheckReport {
    /// Whether the check passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for error in &self.errors {
            out.error(error);
        }

        for warning in &self.warnings {
            out.warning(warning);
        }

        for info in &self.infos {
            out.preformatted(&format!("info: {}", info));
        }

        if !self.warnings.is_empty() || !self.errors.is_empty() {
            out.newline();
        }

        if self.is_valid() {
            out.preformatted(&format!("✓ {} is valid", self.config_path.display()));
            out.key_value("  Classes", &self.class_count.to_string());
            out.key_value("  Containers", &self.container_count.to_string());
        } else {
            out.preformatted(&format!(
                "✗ {} has {} error(s)",
                self.config_path.display(),
                self.errors.len()
            ));
        }
    }
}
