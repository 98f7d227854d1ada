use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};
use tempfile::TempDir;

/// Banner placed at the top of every generated artifact.
pub const GENERATED_BANNER: &str = "GENERATED -- DO NOT EDIT!!";

/// A rendered artifact, addressed relative to the output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    path: PathBuf,
    content: String,
}

impl File {
    /// Create a new file with the given relative path and content.
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Get the path relative to the output directory
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the file content
    pub fn content(&self) -> &str {
        &self.content
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)
        .wrap_err_with(|| format!("failed to write '{}'", path.display()))?;
    Ok(())
}

fn same_content(a: &Path, b: &Path) -> bool {
    match (std::fs::read(a), std::fs::read(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File already had the same content
    Unchanged,
}

/// A scratch directory inside the output directory.
///
/// Artifacts are written here first and only moved into the output
/// directory by [`Staging::commit`]. Dropping an uncommitted staging area
/// removes it together with everything staged so far.
pub struct Staging {
    dir: TempDir,
    staged: Vec<PathBuf>,
}

impl Staging {
    /// Create a staging area below `output_dir` (created if missing).
    ///
    /// Staging lives on the same filesystem as the final files so that
    /// committing is a rename.
    pub fn new_in(output_dir: &Path) -> Result<Self> {
        std::fs::create_dir_all(output_dir)
            .wrap_err_with(|| format!("failed to create '{}'", output_dir.display()))?;
        let dir = tempfile::Builder::new()
            .prefix(".cabind-staging-")
            .tempdir_in(output_dir)
            .wrap_err("failed to create staging directory")?;
        Ok(Self {
            dir,
            staged: Vec::new(),
        })
    }

    /// Absolute path of the staging directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Stage a file, returning the absolute path of its staged copy.
    pub fn stage(&mut self, file: &File) -> Result<PathBuf> {
        let staged = self.dir.path().join(file.path());
        write_file(&staged, file.content())?;
        self.staged.push(file.path().to_path_buf());
        Ok(staged)
    }

    /// Move every staged file into `output_dir`.
    pub fn commit(self, output_dir: &Path) -> Result<Vec<(PathBuf, WriteResult)>> {
        let mut results = Vec::with_capacity(self.staged.len());

        for relative in &self.staged {
            let from = self.dir.path().join(relative);
            let to = output_dir.join(relative);

            if same_content(&from, &to) {
                tracing::debug!(path = %to.display(), "unchanged");
                results.push((relative.clone(), WriteResult::Unchanged));
                continue;
            }

            if let Some(parent) = to.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::rename(&from, &to)
                .wrap_err_with(|| format!("failed to move '{}' into place", to.display()))?;
            tracing::debug!(path = %to.display(), "written");
            results.push((relative.clone(), WriteResult::Written));
        }

        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_write_file_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a").join("b").join("test.txt");

        write_file(&path, "nested").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "nested");
    }

    #[test]
    fn test_staging_commit_moves_files() {
        let temp = TempDir::new().unwrap();
        let mut staging = Staging::new_in(temp.path()).unwrap();

        let staged = staging.stage(&File::new("gen/ffi.hpp", "header")).unwrap();
        assert!(staged.exists());
        assert!(!temp.path().join("gen/ffi.hpp").exists());

        let results = staging.commit(temp.path()).unwrap();

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].1, WriteResult::Written);
        assert_eq!(
            fs::read_to_string(temp.path().join("gen/ffi.hpp")).unwrap(),
            "header"
        );
    }

    #[test]
    fn test_staging_commit_reports_unchanged() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("ffi.cpp"), "same").unwrap();

        let mut staging = Staging::new_in(temp.path()).unwrap();
        staging.stage(&File::new("ffi.cpp", "same")).unwrap();
        let results = staging.commit(temp.path()).unwrap();

        assert_eq!(results[0].1, WriteResult::Unchanged);
    }

    #[test]
    fn test_dropped_staging_leaves_output_untouched() {
        let temp = TempDir::new().unwrap();
        let staging_path = {
            let mut staging = Staging::new_in(temp.path()).unwrap();
            staging.stage(&File::new("ffi.hpp", "header")).unwrap();
            staging.path().to_path_buf()
        };

        assert!(!staging_path.exists());
        assert!(!temp.path().join("ffi.hpp").exists());
        assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 0);
    }
}
