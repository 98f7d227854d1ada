//! The rendering boundary: artifacts turn a validated [`BindingIR`] into text.

use std::fmt;

use cabind_core::File;
use cabind_ir::BindingIR;
use cabind_manifest::OutputConfig;

/// The kinds of file the compiler produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    /// Flat C-ABI declarations.
    NativeHeader,
    /// Definitions of the C-ABI functions.
    NativeSource,
    /// Safe trait impls over the raw bindings.
    ForeignGlue,
    /// Safe container wrappers.
    ContainerWrapper,
    /// Translator output for the native header.
    RawBindings,
}

impl ArtifactKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ArtifactKind::NativeHeader => "native-header",
            ArtifactKind::NativeSource => "native-source",
            ArtifactKind::ForeignGlue => "foreign-glue",
            ArtifactKind::ContainerWrapper => "container-wrapper",
            ArtifactKind::RawBindings => "raw-bindings",
        }
    }

    /// The configured file name for this kind.
    pub fn file_name<'a>(&self, output: &'a OutputConfig) -> &'a str {
        match self {
            ArtifactKind::NativeHeader => &output.header,
            ArtifactKind::NativeSource => &output.source,
            ArtifactKind::ForeignGlue => &output.glue,
            ArtifactKind::ContainerWrapper => &output.containers,
            ArtifactKind::RawBindings => &output.raw,
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Renders one file from the binding IR.
///
/// Rendering must be deterministic: the same IR always yields the same text.
pub trait Artifact: Send + Sync {
    /// Which file this artifact produces.
    fn kind(&self) -> ArtifactKind;

    /// The output file name, relative to the output directory.
    fn file_name(&self, output: &OutputConfig) -> String {
        self.kind().file_name(output).to_string()
    }

    /// Render the file content.
    fn render(&self, ir: &BindingIR) -> String;
}

/// A rendered artifact ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedArtifact {
    pub kind: ArtifactKind,
    pub file: File,
}

/// Renders every registered artifact from the same IR, in registration order.
#[derive(Default)]
pub struct Emitter {
    artifacts: Vec<Box<dyn Artifact>>,
}

impl Emitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an artifact.
    pub fn artifact(mut self, artifact: impl Artifact + 'static) -> Self {
        self.artifacts.push(Box::new(artifact));
        self
    }

    /// Kinds of every registered artifact, in order.
    pub fn kinds(&self) -> Vec<ArtifactKind> {
        self.artifacts.iter().map(|a| a.kind()).collect()
    }

    /// Render all artifacts in memory.
    pub fn render(&self, ir: &BindingIR, output: &OutputConfig) -> Vec<RenderedArtifact> {
        self.artifacts
            .iter()
            .map(|artifact| {
                let kind = artifact.kind();
                let file = File::new(artifact.file_name(output), artifact.render(ir));
                tracing::debug!(%kind, path = %file.path().display(), "rendered artifact");
                RenderedArtifact { kind, file }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Names(ArtifactKind);

    impl Artifact for Names {
        fn kind(&self) -> ArtifactKind {
            self.0
        }

        fn render(&self, ir: &BindingIR) -> String {
            ir.classes.iter().map(|c| format!("{}\n", c.c_name)).collect()
        }
    }

    #[test]
    fn test_file_names_follow_output_config() {
        let output = OutputConfig {
            header: "qffi.hpp".into(),
            ..OutputConfig::default()
        };

        assert_eq!(ArtifactKind::NativeHeader.file_name(&output), "qffi.hpp");
        assert_eq!(ArtifactKind::NativeSource.file_name(&output), "ffi.cpp");
        assert_eq!(ArtifactKind::RawBindings.file_name(&output), "ffi.rs");
    }

    #[test]
    fn test_emitter_renders_in_order() {
        let emitter = Emitter::new()
            .artifact(Names(ArtifactKind::NativeSource))
            .artifact(Names(ArtifactKind::NativeHeader));

        let rendered = emitter.render(&BindingIR::default(), &OutputConfig::default());

        assert_eq!(
            emitter.kinds(),
            [ArtifactKind::NativeSource, ArtifactKind::NativeHeader]
        );
        assert_eq!(rendered[0].file.path().to_str(), Some("ffi.cpp"));
        assert_eq!(rendered[1].file.path().to_str(), Some("ffi.hpp"));
    }
}
