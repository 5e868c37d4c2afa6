//! The operations that the `bal` toolchain executable understands

use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::commands::InvocationError;

/// [`Operation`] The subcommand handed to the toolchain executable as its first argument
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Run,
    Build,
    Test,
}

impl Operation {
    /// The keyword that the toolchain expects for this operation
    pub fn keyword(&self) -> &'static str {
        match *self {
            Operation::Run => "run",
            Operation::Build => "build",
            Operation::Test => "test",
        }
    }
}

impl AsRef<str> for Operation {
    fn as_ref(&self) -> &str {
        self.keyword()
    }
}

impl Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.keyword())
    }
}

impl FromStr for Operation {
    type Err = InvocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "run" => Ok(Operation::Run),
            "build" => Ok(Operation::Build),
            "test" => Ok(Operation::Test),
            other => Err(InvocationError::UnsupportedOperation(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords_roundtrip_through_from_str() {
        for op in [Operation::Run, Operation::Build, Operation::Test] {
            assert_eq!(op.keyword().parse::<Operation>().unwrap(), op);
        }
    }

    #[test]
    fn test_unknown_keyword_is_rejected() {
        let err = "compile".parse::<Operation>().unwrap_err();
        assert_eq!(
            err,
            InvocationError::UnsupportedOperation("compile".to_string())
        );
        assert!(err.to_string().contains("compile"));
    }
}
