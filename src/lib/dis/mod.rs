//! Compiles a target and extracts the produced jar, so the generated classes
//! can be inspected with the usual JVM tooling

use std::path::{Path, PathBuf};

use color_eyre::{eyre::eyre, eyre::Context, Result};

use crate::cli::output::executors;
use crate::compiler::build_invocation;
use crate::domain::commands::{Arguments, Invocation};
use crate::domain::operation::Operation;
use crate::project_model::target::TargetModel;
use crate::utils::{
    self,
    constants::{dir_names, JAR_TOOL},
};

/// Builds *target* with the toolchain at *toolchain_path* from *work_dir*, then moves
/// the produced jar to `<work_dir>/dis` and extracts it there.
///
/// Returns the directory holding the extracted artifact
pub fn compile_and_disassemble(
    toolchain_path: &Path,
    target: &Path,
    work_dir: &Path,
) -> Result<PathBuf> {
    let target = TargetModel::detect(work_dir.join(target))?;

    let build = build_invocation(toolchain_path, &target.path, Operation::Build, false, &[])
        .with_working_dir(work_dir);
    executors::execute(&build).with_context(|| format!("Failed to compile {:?}", target.path))?;

    let jar_name = target.expected_artifact_name()?;
    disassemble_artifact(work_dir, &jar_name)
}

/// Moves the already built *jar_name* from *work_dir* into a fresh `dis` directory and
/// extracts it there
pub fn disassemble_artifact(work_dir: &Path, jar_name: &str) -> Result<PathBuf> {
    let jar_path = work_dir.join(jar_name);
    if !jar_path.exists() {
        return Err(eyre!("Error: {jar_name} not found"));
    }

    let dis_dir = work_dir.join(dir_names::DIS);
    utils::fs::recreate_directory(&dis_dir)?;
    utils::fs::move_file(&jar_path, &dis_dir.join(jar_name))?;

    log::info!("Disassembling jar file...");
    executors::execute(&extract_jar_invocation(&dis_dir, jar_name))
        .with_context(|| format!("Error running {JAR_TOOL} command"))?;

    Ok(dis_dir)
}

/// `jar -xf <jar>`, run inside of the directory that holds the jar
pub fn extract_jar_invocation(dis_dir: &Path, jar_name: &str) -> Invocation {
    let args: Arguments = ["-xf", jar_name].into_iter().collect();
    Invocation::new(JAR_TOOL, args).with_working_dir(dis_dir)
}
