#[cfg(feature = "cli")]
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::cli::LocalStorage;
pub use crate::config::rules::DuplicationRules;
pub use crate::core::{
    duplicator::Duplicator,
    etl::{EtlEngine, RunReport},
    pipeline::DuplicationPipeline,
    rng::{RandomRepeats, ScriptedRepeats},
};
pub use crate::utils::error::{DupError, Result};
