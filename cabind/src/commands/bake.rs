use std::path::PathBuf;

use cabind_manifest::ManifestFile;
use clap::Args;
use eyre::Result;

use super::UnwrapOrExit;
use crate::{
    ops::{self, BakeOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct BakeCommand {
    /// Path to cabind.toml (defaults to ./cabind.toml)
    #[arg(short, long, default_value = "cabind.toml")]
    pub config: PathBuf,

    /// Output directory (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,

    /// Skip the raw binding translator
    #[arg(long)]
    pub no_raw: bool,

    /// Write the binding model after each phase as JSON into this directory
    #[arg(long, value_name = "DIR")]
    pub dump_model: Option<PathBuf>,
}

impl BakeCommand {
    pub fn run(&self) -> Result<()> {
        let file = ManifestFile::open(&self.config).unwrap_or_exit();

        let report = ops::bake(
            file.manifest(),
            BakeOptions {
                output_dir: &self.output,
                dry_run: self.dry_run,
                raw: !self.no_raw,
                dump_model: self.dump_model.as_deref(),
            },
        )?;

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
