use std::path::{Path, PathBuf};

use indexmap::IndexMap;

use super::arguments::Arguments;

/// Environment variables layered over the inherited environment of the child process
pub type EnvVars = IndexMap<String, String>;

/// A fully specified description of an external process launch.
///
/// Built once by the command builders and consumed by the executors. Nothing
/// is launched while an [`Invocation`] is being assembled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: PathBuf,
    pub args: Arguments,
    pub working_dir: Option<PathBuf>,
    pub env: EnvVars,
}

impl Invocation {
    pub fn new<P: Into<PathBuf>>(program: P, args: Arguments) -> Self {
        Self {
            program: program.into(),
            args,
            working_dir: None,
            env: EnvVars::new(),
        }
    }

    pub fn with_working_dir<P: AsRef<Path>>(mut self, dir: P) -> Self {
        self.working_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    pub fn with_env<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.env.insert(key.into(), value.into());
        self
    }
}

impl core::fmt::Display for Invocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (key, value) in &self.env {
            write!(f, "{key}={value} ")?;
        }
        write!(f, "{}", self.program.display())?;
        if !self.args.is_empty() {
            write!(f, " {}", self.args)?;
        }
        if let Some(dir) = &self.working_dir {
            write!(f, " (in {})", dir.display())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_renders_env_program_and_args() {
        let invocation = Invocation::new("bal", ["build", "main.bal"].into_iter().collect())
            .with_env("BAL_JAVA_DEBUG", "5005")
            .with_working_dir("/tmp");

        assert_eq!(
            invocation.to_string(),
            "BAL_JAVA_DEBUG=5005 bal build main.bal (in /tmp)"
        );
    }
}
