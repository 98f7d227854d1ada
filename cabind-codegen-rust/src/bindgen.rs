//! Raw bindings via the `bindgen` command-line tool.

use std::{path::Path, process::Command};

use cabind_codegen::{TranslateError, Translator, TranslatorFlags};

/// Runs `bindgen` (or a compatible executable) on the staged header and
/// captures its stdout as the raw bindings.
#[derive(Debug, Clone)]
pub struct BindgenTranslator {
    tool: String,
}

impl BindgenTranslator {
    pub fn new(tool: impl Into<String>) -> Self {
        Self { tool: tool.into() }
    }

    /// The command that would be run for `header`.
    pub fn command(&self, header: &Path, flags: &TranslatorFlags) -> Command {
        let mut cmd = Command::new(&self.tool);
        cmd.arg(header)
            .arg("--no-layout-tests")
            .arg("--no-derive-debug")
            .arg("--no-derive-copy")
            .arg("--size_t-is-usize")
            .arg(format!("--rust-target={}", flags.rust_target))
            .arg("--")
            .args(&flags.clang_args);
        cmd
    }
}

impl Default for BindgenTranslator {
    fn default() -> Self {
        Self::new("bindgen")
    }
}

impl Translator for BindgenTranslator {
    fn name(&self) -> &str {
        &self.tool
    }

    fn translate(&self, header: &Path, flags: &TranslatorFlags) -> Result<String, TranslateError> {
        let mut cmd = self.command(header, flags);
        tracing::debug!(command = ?cmd, "running translator");

        let output = cmd.output().map_err(|source| TranslateError::Spawn {
            tool: self.tool.clone(),
            source,
        })?;

        if !output.status.success() {
            return Err(TranslateError::Failed {
                tool: self.tool.clone(),
                header: header.to_path_buf(),
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        String::from_utf8(output.stdout).map_err(|source| TranslateError::InvalidOutput {
            tool: self.tool.clone(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::{ffi::OsStr, path::PathBuf};

    use super::*;

    fn flags() -> TranslatorFlags {
        TranslatorFlags {
            rust_target: "1.20".into(),
            clang_args: vec!["-DBINDGEN".into(), "-I/usr/include/qt".into()],
        }
    }

    #[test]
    fn test_command_arguments() {
        let cmd = BindgenTranslator::default().command(Path::new("out/ffi.hpp"), &flags());

        assert_eq!(cmd.get_program(), "bindgen");
        let args: Vec<&OsStr> = cmd.get_args().collect();
        assert_eq!(
            args,
            [
                "out/ffi.hpp",
                "--no-layout-tests",
                "--no-derive-debug",
                "--no-derive-copy",
                "--size_t-is-usize",
                "--rust-target=1.20",
                "--",
                "-DBINDGEN",
                "-I/usr/include/qt",
            ]
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_stdout_is_returned_verbatim() {
        let out = BindgenTranslator::new("echo")
            .translate(Path::new("ffi.hpp"), &flags())
            .unwrap();

        assert_eq!(
            out,
            "ffi.hpp --no-layout-tests --no-derive-debug --no-derive-copy --size_t-is-usize \
             --rust-target=1.20 -- -DBINDGEN -I/usr/include/qt\n"
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_nonzero_exit_is_failure() {
        let err = BindgenTranslator::new("false")
            .translate(Path::new("ffi.hpp"), &flags())
            .unwrap_err();

        match err {
            TranslateError::Failed { tool, header, code, .. } => {
                assert_eq!(tool, "false");
                assert_eq!(header, PathBuf::from("ffi.hpp"));
                assert_eq!(code, Some(1));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_tool_is_spawn_error() {
        let err = BindgenTranslator::new("cabind-no-such-translator")
            .translate(Path::new("ffi.hpp"), &flags())
            .unwrap_err();

        assert!(matches!(err, TranslateError::Spawn { .. }));
        assert_eq!(err.to_string(), "failed to start 'cabind-no-such-translator'");
    }
}
