//! Explain command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from pipeline explanation.
#[derive(Debug)]
pub struct ExplainReport {
    /// Path to the schema file.
    pub config_path: PathBuf,
    /// Symbol prefix.
    pub prefix: String,
    /// Pipeline phases.
    pub phases: Vec<NamedItem>,
    /// Validation lints.
    pub lints: Vec<NamedItem>,
    /// Classes in emission order.
    pub classes: Vec<ClassSummary>,
    /// Files a bake would write.
    pub files: Vec<String>,
}

/// A phase or lint.
#[derive(Debug)]
pub struct NamedItem {
    pub name: String,
    pub description: String,
}

/// A class and the C prototypes it exports.
#[derive(Debug)]
pub struct ClassSummary {
    pub name: String,
    pub native_name: String,
    pub functions: Vec<String>,
}

impl Report for ExplainReport {
    fn render(&self, out: &mut dyn Output) {
        out.title("cabind Pipeline Explanation");
        out.newline();

        out.key_value("Input", &self.config_path.display().to_string());
        out.key_value("Prefix", &self.prefix);
        out.newline();

        out.section("Pipeline Phases");
        for (i, phase) in self.phases.iter().enumerate() {
            out.numbered_item(i + 1, &format!("{} - {}", phase.name, phase.description));
        }
        out.newline();

        out.section("Validation Lints");
        for lint in &self.lints {
            out.list_item(&format!("{}: {}", lint.name, lint.description));
        }
        out.newline();

        out.section(&format!("Classes ({})", self.classes.len()));
        for class in &self.classes {
            if class.name == class.native_name {
                out.list_item(&class.name);
            } else {
                out.list_item(&format!("{} ({})", class.name, class.native_name));
            }
            for function in &class.functions {
                out.preformatted(&format!("      {function}"));
            }
        }
        out.newline();

        out.section("Files to Generate");
        for file in &self.files {
            out.list_item(file);
        }
    }
}
