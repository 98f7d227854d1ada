use std::path::PathBuf;

use cabind_manifest::ManifestFile;
use clap::Args;
use eyre::Result;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to cabind.toml (defaults to ./cabind.toml)
    #[arg(short, long, default_value = "cabind.toml")]
    pub config: PathBuf,
}

impl CheckCommand {
    pub fn run(&self) -> Result<()> {
        let file = ManifestFile::open(&self.config).unwrap_or_exit();
        let report = ops::check(file.manifest(), file.path())?;

        report.render(&mut TerminalOutput::new());
        if !report.is_valid() {
            std::process::exit(1);
        }
        Ok(())
    }
}
