//! The raw binding boundary: an external tool translating the native header.

use std::path::{Path, PathBuf};

use cabind_manifest::RawConfig;
use thiserror::Error;

/// Settings passed to a [`Translator`] for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslatorFlags {
    /// Minimum foreign-language compatibility level.
    pub rust_target: String,
    /// Arguments forwarded to the header parser.
    pub clang_args: Vec<String>,
}

impl From<&RawConfig> for TranslatorFlags {
    fn from(config: &RawConfig) -> Self {
        Self {
            rust_target: config.rust_target.clone(),
            clang_args: config.clang_args.clone(),
        }
    }
}

#[derive(Debug, Error)]
pub enum TranslateError {
    #[error("failed to start '{tool}'")]
    Spawn {
        tool: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{tool}' failed on '{}' ({})\n{stderr}", header.display(), exit_code(*code))]
    Failed {
        tool: String,
        header: PathBuf,
        code: Option<i32>,
        stderr: String,
    },

    #[error("'{tool}' produced output that is not UTF-8")]
    InvalidOutput {
        tool: String,
        #[source]
        source: std::string::FromUtf8Error,
    },
}

fn exit_code(code: Option<i32>) -> String {
    match code {
        Some(code) => format!("exit status {code}"),
        None => "terminated by signal".to_string(),
    }
}

/// Turns a native header into raw foreign declarations.
///
/// The output is written verbatim; no post-processing happens.
pub trait Translator: Send + Sync {
    /// Name used in logs and errors.
    fn name(&self) -> &str;

    /// Translate the header at `header`.
    fn translate(&self, header: &Path, flags: &TranslatorFlags) -> Result<String, TranslateError>;
}
