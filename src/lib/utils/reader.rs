use std::num::NonZeroU32;
use std::path::PathBuf;

use color_eyre::{eyre::eyre, Result};

use crate::{
    cli::input::CliArgs,
    config_file::ToolsConfigFile,
    project_model::ToolsModel,
    utils::constants::{config, error_messages},
};

/// Merges the user defaults of the configuration file with the command line arguments,
/// the latter taking precedence, into the [`ToolsModel`]
pub fn build_model(config: &ToolsConfigFile<'_>, cli_args: &CliArgs) -> Result<ToolsModel> {
    let source_path = resolve_source_path(config, cli_args)?;

    let version = cli_args
        .bal_version
        .clone()
        .or_else(|| config.default_version.as_deref().map(String::from))
        .ok_or_else(|| eyre!(error_messages::MISSING_VERSION))?;

    let benchmark_iterations = assemble_benchmark_iterations(config.benchmark_iterations)?;

    Ok(ToolsModel {
        source_path,
        version,
        benchmark_iterations,
    })
}

/// The root of the jBallerina source checkout, the only setting that the commands
/// that don't drive the `bal` executable need
pub fn resolve_source_path(config: &ToolsConfigFile<'_>, cli_args: &CliArgs) -> Result<PathBuf> {
    cli_args
        .source_path
        .clone()
        .or_else(|| config.default_source_path.as_deref().map(PathBuf::from))
        .ok_or_else(|| eyre!(error_messages::MISSING_SOURCE_PATH))
}

fn assemble_benchmark_iterations(configured: Option<u32>) -> Result<NonZeroU32> {
    let iterations = configured.unwrap_or(config::DEFAULT_BENCHMARK_ITERATIONS);
    NonZeroU32::new(iterations).ok_or_else(|| eyre!(error_messages::ZERO_ITERATIONS))
}
