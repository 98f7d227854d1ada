use std::path::{Path, PathBuf};

use super::Manifest;
use crate::Result;

/// A schema file on disk together with its parsed manifest.
pub struct ManifestFile {
    path: PathBuf,
    manifest: Manifest,
}

impl ManifestFile {
    /// Open and parse a schema file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| crate::Error::io(&path, e))?;
        let filename = path.display().to_string();
        let manifest = Manifest::from_str_with_filename(&content, &filename)?;

        Ok(Self { path, manifest })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the parsed manifest.
    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_open_reads_and_parses() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("cabind.toml");
        fs::write(&path, "prefix = \"qffi\"\n[classes.QUrl]\neq = true\n").unwrap();

        let file = ManifestFile::open(&path).unwrap();

        assert_eq!(file.path(), path);
        assert_eq!(file.manifest().prefix, "qffi");
        assert!(file.manifest().class("QUrl").unwrap().eq);
    }
}
