//! Generates the command lines that drive the `bal` toolchain executable.
//!
//! The argument ordering of every operation lives here and only here:
//! - `build`: `<bal> build [extra args...] <target>`, with remote debugging
//!   requested through the `BAL_JAVA_DEBUG` environment variable
//! - `run` and `test`: `<bal> <op> [--debug 5005] <target>`

use std::path::Path;

use crate::domain::commands::{Arguments, Invocation};
use crate::domain::operation::Operation;
use crate::utils::constants::remote_debug;

/// Assembles the [`Invocation`] of the toolchain for the given operation.
///
/// *extra_args* are only meaningful for [`Operation::Build`]. The operations that
/// execute the program don't accept them, and they are ignored there
pub fn build_invocation(
    toolchain_path: &Path,
    target_path: &Path,
    operation: Operation,
    remote_debug: bool,
    extra_args: &[&str],
) -> Invocation {
    match operation {
        Operation::Build => {
            build_command(toolchain_path, target_path, remote_debug, extra_args)
        }
        Operation::Run | Operation::Test => {
            if !extra_args.is_empty() {
                log::debug!("Ignoring the extra arguments {extra_args:?} for `{operation}`");
            }
            exec_command(toolchain_path, target_path, operation, remote_debug)
        }
    }
}

fn build_command(
    toolchain_path: &Path,
    target_path: &Path,
    remote_debug: bool,
    extra_args: &[&str],
) -> Invocation {
    let mut args = Arguments::with_capacity(extra_args.len() + 2);
    args.create_and_push(Operation::Build.keyword());
    args.extend(extra_args.iter().copied());
    args.create_and_push(target_path);

    let invocation = Invocation::new(toolchain_path, args);
    if remote_debug {
        invocation.with_env(remote_debug::BUILD_ENV_VAR, remote_debug::PORT)
    } else {
        invocation
    }
}

fn exec_command(
    toolchain_path: &Path,
    target_path: &Path,
    operation: Operation,
    remote_debug: bool,
) -> Invocation {
    let mut args = Arguments::with_capacity(4);
    args.create_and_push(operation.keyword());
    if remote_debug {
        args.create_and_push(remote_debug::DEBUG_FLAG);
        args.create_and_push(remote_debug::PORT);
    }
    args.create_and_push(target_path);

    Invocation::new(toolchain_path, args)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toolchain::resolve_toolchain_path;

    const TARGET: &str = "/path/to/target";

    fn bal() -> std::path::PathBuf {
        resolve_toolchain_path("/path/to/source", "1.0.0")
    }

    #[test]
    fn test_remote_build_uses_the_env_var_instead_of_flags() {
        let invocation = build_invocation(
            &bal(),
            Path::new(TARGET),
            Operation::Build,
            true,
            &[],
        );

        assert_eq!(invocation.program, bal());
        assert_eq!(invocation.args.as_strs(), ["build", TARGET]);
        assert!(!invocation.args.iter().any(|arg| arg == "--debug"));
        assert_eq!(
            invocation.env.get("BAL_JAVA_DEBUG").map(String::as_str),
            Some("5005")
        );
        assert!(invocation.working_dir.is_none());
    }

    #[test]
    fn test_build_places_extra_args_before_the_target() {
        let invocation = build_invocation(
            &bal(),
            Path::new(TARGET),
            Operation::Build,
            false,
            &["--dump-bir", "--offline"],
        );

        assert_eq!(
            invocation.args.as_strs(),
            ["build", "--dump-bir", "--offline", TARGET]
        );
        assert!(invocation.env.is_empty());
    }

    #[test]
    fn test_remote_run_places_debug_flags_before_the_target() {
        let invocation =
            build_invocation(&bal(), Path::new(TARGET), Operation::Run, true, &[]);

        assert_eq!(invocation.args.as_strs(), ["run", "--debug", "5005", TARGET]);
        assert!(invocation.env.is_empty());
    }

    #[test]
    fn test_test_operation_without_remote_debug() {
        let invocation = build_invocation(
            &bal(),
            Path::new(TARGET),
            Operation::Test,
            false,
            &["--ignored"],
        );

        assert_eq!(invocation.args.as_strs(), ["test", TARGET]);
    }

    #[test]
    fn test_same_inputs_produce_the_same_invocation() {
        let first = build_invocation(&bal(), Path::new(TARGET), Operation::Test, true, &[]);
        let second = build_invocation(&bal(), Path::new(TARGET), Operation::Test, true, &[]);
        assert_eq!(first, second);
    }
}
