//! The description of the external processes launched by the tool
pub mod arguments;
pub mod invocation;

pub use arguments::{Argument, Arguments};
pub use invocation::{EnvVars, Invocation};

use thiserror::Error;

/// Failures that can happen while assembling an [`Invocation`]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvocationError {
    #[error("unknown command: {0}")]
    UnsupportedOperation(String),
}
