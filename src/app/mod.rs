//! Command-line entry point.

use crate::config::cli::LocalStorage;
use crate::config::CliConfig;
use crate::core::etl::{EtlEngine, RunReport};
use crate::core::pipeline::DuplicationPipeline;
use crate::core::rng::RandomRepeats;
use crate::utils::error::Result;
use crate::utils::logger;
use crate::utils::validation::Validate;
use clap::Parser;
use std::ffi::OsString;
use std::process::ExitCode;

/// Parses `args` (program name first), runs one duplication pass and maps the outcome to an exit status.
pub fn run<I, T>(args: I) -> ExitCode
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let config = match CliConfig::try_parse_from(args) {
        Ok(config) => config,
        Err(e) => {
            // --help and --version land here too, with exit code 0.
            let _ = e.print();
            return ExitCode::from(u8::try_from(e.exit_code()).unwrap_or(2));
        }
    };

    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    match run_with_config(config) {
        Ok(report) => {
            println!(
                "Wrote {} lines ({} hex records replicated) to {}",
                report.stats.output_lines, report.stats.hex_records, report.output_path
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(
                "Duplication failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("error: {}", e.user_friendly_message());
            eprintln!("hint: {}", e.recovery_suggestion());
            ExitCode::from(e.exit_code())
        }
    }
}

/// Validates `config` and runs the pipeline against the local filesystem with an unseeded generator.
pub fn run_with_config(config: CliConfig) -> Result<RunReport> {
    config.validate()?;

    let monitor_enabled = config.monitor;
    let pipeline = DuplicationPipeline::new(
        LocalStorage::new(),
        config,
        RandomRepeats::from_thread_rng(),
    );

    EtlEngine::new_with_monitoring(pipeline, monitor_enabled).run()
}
