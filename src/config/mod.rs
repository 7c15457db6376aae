pub mod cli;
pub mod rules;

#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_path, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::path::{Path, PathBuf};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "hexdup", version)]
#[command(about = "Duplicate 0x-prefixed lines of a text file a random number of times")]
pub struct CliConfig {
    /// Text file to read
    pub input_filename: PathBuf,

    /// File to create or overwrite
    pub output_filename: PathBuf,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log process CPU and memory usage after each phase")]
    pub monitor: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn input_path(&self) -> &Path {
        &self.input_filename
    }

    fn output_path(&self) -> &Path {
        &self.output_filename
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input_filename", &self.input_filename)?;
        validate_path("output_filename", &self.output_filename)?;
        Ok(())
    }
}
