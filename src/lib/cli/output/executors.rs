//! Launches the [`Invocation`]s generated by the tool and reports how they ended

use std::process::{Command, ExitStatus, Stdio};

use thiserror::Error;

use crate::domain::commands::Invocation;

/// The ways an external process launched by the tool can fail
#[derive(Debug, Error)]
pub enum ExecutionError {
    #[error("failed to launch {program}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{program} finished with {status}")]
    Exit { program: String, status: ExitStatus },
}

/// Where the standard output of the child process goes
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Output {
    /// The child writes straight to the terminal of the user
    Inherit,
    /// Discarded. Standard error is always kept visible
    Discard,
}

impl From<Output> for Stdio {
    fn from(value: Output) -> Self {
        match value {
            Output::Inherit => Stdio::inherit(),
            Output::Discard => Stdio::null(),
        }
    }
}

/// Executes the invocation with the inherited standard streams, blocking until the
/// child process finishes
pub fn execute(invocation: &Invocation) -> Result<(), ExecutionError> {
    execute_with_output(invocation, Output::Inherit)
}

/// Executes a new [`std::process::Command`] configured from the given [`Invocation`].
///
/// The environment overrides are layered over the environment of the current process
pub fn execute_with_output(invocation: &Invocation, output: Output) -> Result<(), ExecutionError> {
    log::debug!("Executing command => {invocation}");

    let program = invocation.program.display().to_string();
    let mut command = Command::new(&invocation.program);
    command
        .args(invocation.args.iter())
        .envs(&invocation.env)
        .stdout(output)
        .stderr(Stdio::inherit());
    if let Some(dir) = &invocation.working_dir {
        command.current_dir(dir);
    }

    let status = command
        .spawn()
        .and_then(|mut child| child.wait())
        .map_err(|source| ExecutionError::Spawn {
            program: program.clone(),
            source,
        })?;

    log::debug!("{program} - Result: {status}");
    if status.success() {
        Ok(())
    } else {
        Err(ExecutionError::Exit { program, status })
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::domain::commands::Arguments;
    use tempfile::tempdir;

    fn sh(script: &str) -> Invocation {
        let args: Arguments = ["-c", script].into_iter().collect();
        Invocation::new("sh", args)
    }

    #[test]
    fn test_successful_command() {
        assert!(execute(&sh("exit 0")).is_ok());
    }

    #[test]
    fn test_non_zero_exit_is_reported() {
        let err = execute_with_output(&sh("exit 3"), Output::Discard).unwrap_err();
        match err {
            ExecutionError::Exit { status, .. } => assert_eq!(status.code(), Some(3)),
            other => panic!("Unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_missing_executable_is_a_spawn_failure() {
        let invocation = Invocation::new("/definitely/not/a/bal", Arguments::default());
        assert!(matches!(
            execute(&invocation),
            Err(ExecutionError::Spawn { .. })
        ));
    }

    #[test]
    fn test_env_and_working_dir_are_applied() {
        let temp = tempdir().unwrap();
        let invocation = sh("[ \"$BAL_JAVA_DEBUG\" = 5005 ] && touch marker")
            .with_env("BAL_JAVA_DEBUG", "5005")
            .with_working_dir(temp.path());

        execute_with_output(&invocation, Output::Discard).unwrap();
        assert!(temp.path().join("marker").exists());
    }
}
