pub mod benchmark;
pub mod cli;
pub mod compiler;
pub mod config_file;
pub mod dis;
pub mod domain;
pub mod project_model;
pub mod toolchain;
pub mod utils;

/// The entry point for the execution of the program.
///
/// This module existence is motivated to let us run
/// integration tests for the whole operations of the program
/// without having to do fancy work about checking the
/// data sent to stdout/stderr
pub mod worker {
    use std::path::{Path, PathBuf};

    use color_eyre::{
        eyre::{eyre, Context},
        Result,
    };

    use crate::{
        benchmark::{self, BenchmarkReport},
        cli::{
            input::{CliArgs, Command, TargetArgs},
            output::executors,
        },
        compiler::build_invocation,
        config_file::{self, ToolsConfigFile},
        dis,
        domain::operation::Operation,
        project_model::ToolsModel,
        toolchain,
        utils::{
            self,
            constants::{error_messages, DUMP_BIR_FLAG},
        },
    };

    /// The main work of the project. Runs the task inputted in the CLI, resolving
    /// relative paths and looking for the configuration file from *work_dir*
    pub fn run_tools(cli_args: &CliArgs, work_dir: &Path) -> Result<()> {
        let raw_cfg = config_file::read_config_file(cli_args.config.as_deref(), work_dir)?;
        let config: ToolsConfigFile<'_> = match raw_cfg.as_deref() {
            Some(raw) => config_file::tools_cfg_from_file(raw)
                .with_context(|| error_messages::PARSE_CFG_FILE)?,
            None => ToolsConfigFile::default(),
        };

        let load_model = || -> Result<ToolsModel> {
            let model = utils::reader::build_model(&config, cli_args)?;
            log::debug!("Working with the jBallerina model: {model:?}");
            Ok(model)
        };

        match &cli_args.command {
            Command::BuildTools { flags } => {
                let source_path = utils::reader::resolve_source_path(&config, cli_args)?;
                toolchain::build_toolchain(&source_path, flags)
            }
            Command::Build(target) => {
                drive_toolchain(&load_model()?, Operation::Build, target, work_dir)
            }
            Command::Run(target) => drive_toolchain(&load_model()?, Operation::Run, target, work_dir),
            Command::Test(target) => {
                drive_toolchain(&load_model()?, Operation::Test, target, work_dir)
            }
            Command::Bir { path } => {
                let model = load_model()?;
                let target_path = resolve_target_path(path.as_deref(), false, work_dir)?;
                let bal_path = toolchain::ensure_toolchain(&model)?;
                let invocation = build_invocation(
                    &bal_path,
                    &target_path,
                    Operation::Build,
                    false,
                    &[DUMP_BIR_FLAG],
                );
                executors::execute(&invocation)
                    .with_context(|| format!("Failed to generate the BIR of {target_path:?}"))
            }
            Command::Dis { path } => {
                let bal_path = toolchain::ensure_toolchain(&load_model()?)?;
                let dis_dir = dis::compile_and_disassemble(&bal_path, path, work_dir)?;
                log::info!("Disassembled artifact available at {dis_dir:?}");
                Ok(())
            }
        }
    }

    /// Executes the `bal` toolchain once for the requested operation, or benchmarks it
    fn drive_toolchain(
        model: &ToolsModel,
        operation: Operation,
        target: &TargetArgs,
        work_dir: &Path,
    ) -> Result<()> {
        let target_path = resolve_target_path(target.path.as_deref(), target.file, work_dir)?;
        let bal_path = toolchain::ensure_toolchain(model)?;
        let invocation =
            build_invocation(&bal_path, &target_path, operation, target.remote, &[]);

        if !target.benchmark {
            return executors::execute(&invocation)
                .with_context(|| format!("Failed to {operation} {target_path:?}"));
        }

        let iterations = target.iterations.unwrap_or(model.benchmark_iterations);
        let result = benchmark::benchmark(&invocation, iterations)
            .with_context(|| format!("Failed to benchmark `{operation}` of {target_path:?}"))?;
        log::info!("{result}");

        if target.json {
            let report = BenchmarkReport::new(operation, &target_path, &result);
            println!("{}", serde_json::to_string_pretty(&report)?);
        }

        Ok(())
    }

    /// The target given by the user, or the working directory when none was given.
    /// Working with a single file requires its path
    fn resolve_target_path(
        path: Option<&Path>,
        is_file: bool,
        work_dir: &Path,
    ) -> Result<PathBuf> {
        match path {
            Some(path) => Ok(work_dir.join(path)),
            None if is_file => Err(eyre!(error_messages::FILE_PATH_REQUIRED)),
            None => Ok(work_dir.to_path_buf()),
        }
    }

}
