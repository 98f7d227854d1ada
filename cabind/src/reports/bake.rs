//! Bake command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from binding generation.
#[derive(Debug)]
pub struct BakeReport {
    /// Declared classes in the schema.
    pub class_count: usize,
    /// Container instantiations in the schema.
    pub container_count: usize,
    /// Warning messages from the pipeline.
    pub warnings: Vec<String>,
    /// Where phase snapshots were written, if requested.
    pub dump_dir: Option<PathBuf>,
    /// Generation result (files written or preview).
    pub result: GenerationResult,
}

/// Result of binding generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(Vec<PreviewFile>),
}

/// Result when files were written to disk.
#[derive(Debug)]
pub struct WrittenResult {
    pub output_dir: PathBuf,
    pub files: Vec<WrittenFile>,
}

#[derive(Debug)]
pub struct WrittenFile {
    pub path: PathBuf,
    /// False when the file already had this content.
    pub changed: bool,
}

/// A file in preview mode.
#[derive(Debug)]
pub struct PreviewFile {
    pub path: String,
    pub content: String,
}

impl Report for BakeReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }

        match &self.result {
            GenerationResult::Written(written) => self.render_written(out, written),
            GenerationResult::Preview(files) => self.render_preview(out, files),
        }
    }
}

impl BakeReport {
    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        if let Some(dir) = &self.dump_dir {
            out.key_value("Pipeline snapshots written to", &dir.display().to_string());
            out.newline();
        }

        out.preformatted(&format!(
            "{} class{}, {} container{}",
            self.class_count,
            plural(self.class_count, "es"),
            self.container_count,
            plural(self.container_count, "s"),
        ));
        out.newline();

        out.section(&format!("Generated ({})", written.output_dir.display()));
        for file in &written.files {
            let name = file.path.display().to_string();
            if file.changed {
                out.added_item(&name);
            } else {
                out.list_item(&format!("{name} (unchanged)"));
            }
        }
    }

    fn render_preview(&self, out: &mut dyn Output, files: &[PreviewFile]) {
        for file in files {
            out.divider(&file.path);
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        out.preformatted(&format!("{} files would be generated", files.len()));
    }
}

fn plural(count: usize, suffix: &str) -> &str {
    if count == 1 { "" } else { suffix }
}
