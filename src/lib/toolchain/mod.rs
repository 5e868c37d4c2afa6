//! Locating, and building when needed, the `bal` executable produced by a
//! jBallerina source checkout

use std::path::{Path, PathBuf};

use color_eyre::{eyre::Context, Result};

use crate::cli::output::executors;
use crate::domain::commands::{Arguments, Invocation};
use crate::project_model::ToolsModel;
use crate::utils::constants::{distribution, error_messages, gradle};

/// Computes where the `bal` executable of the given distribution version lives
/// inside of the source checkout.
///
/// This is a plain path join. Nothing is checked against the filesystem, see
/// [`toolchain_exists`] for that.
pub fn resolve_toolchain_path<P: AsRef<Path>>(source_root: P, version: &str) -> PathBuf {
    let mut path = source_root.as_ref().to_path_buf();
    path.extend(distribution::SEGMENTS);
    path.join(format!("{}{version}", distribution::DIR_PREFIX))
        .join(distribution::BIN_DIR)
        .join(distribution::EXECUTABLE)
}

pub fn toolchain_exists(toolchain_path: &Path) -> bool {
    toolchain_path.exists()
}

/// Creates the [`Invocation`] of the Gradle wrapper of the checkout, run from the
/// root of the checkout.
///
/// *flags* is a single space separated string, ie: `build -x check`
pub fn build_toolchain_invocation(source_root: &Path, flags: &str) -> Invocation {
    let args: Arguments = flags
        .trim()
        .split(' ')
        .filter(|flag| !flag.is_empty())
        .collect();

    Invocation::new(source_root.join(gradle::WRAPPER), args).with_working_dir(source_root)
}

/// Runs the Gradle wrapper of the checkout with the given flags
pub fn build_toolchain(source_root: &Path, flags: &str) -> Result<()> {
    let invocation = build_toolchain_invocation(source_root, flags);
    log::info!("Building the jBallerina toolchain at: {source_root:?}");
    executors::execute(&invocation).with_context(|| error_messages::FAILURE_BUILDING_TOOLCHAIN)
}

/// Ensures that the `bal` executable for the configured version is present, building
/// the toolchain with the default flags otherwise. Returns the path of the executable
pub fn ensure_toolchain(model: &ToolsModel) -> Result<PathBuf> {
    let bal_path = resolve_toolchain_path(&model.source_path, &model.version);
    if !toolchain_exists(&bal_path) {
        log::warn!("bal executable not found at {bal_path:?}. Building it first");
        build_toolchain(&model.source_path, gradle::DEFAULT_FLAGS)?;
    }
    Ok(bal_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toolchain_path_is_a_deterministic_join() {
        let path = resolve_toolchain_path("/path/to/source", "2201.9.0");
        let expected = Path::new("/path/to/source")
            .join("distribution")
            .join("zip")
            .join("jballerina-tools")
            .join("build")
            .join("extracted-distributions")
            .join("jballerina-tools-2201.9.0")
            .join("bin")
            .join(distribution::EXECUTABLE);

        assert_eq!(path, expected);
        assert_eq!(path, resolve_toolchain_path("/path/to/source", "2201.9.0"));
    }

    #[test]
    fn test_resolving_does_not_require_the_path_to_exist() {
        let path = resolve_toolchain_path("/definitely/not/here", "0.0.0");
        assert!(!toolchain_exists(&path));
    }

    #[test]
    fn test_gradle_flags_are_split_on_spaces() {
        let invocation = build_toolchain_invocation(Path::new("/src"), "  build -x check ");

        assert_eq!(invocation.program, Path::new("/src/gradlew"));
        assert_eq!(invocation.args.as_strs(), ["build", "-x", "check"]);
        assert_eq!(invocation.working_dir.as_deref(), Some(Path::new("/src")));
        assert!(invocation.env.is_empty());
    }
}
