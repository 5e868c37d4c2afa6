pub mod target;

use std::num::NonZeroU32;
use std::path::PathBuf;

/// The read only configuration of a run of the tool, assembled once from the
/// configuration file and the command line arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolsModel {
    /// The root of the jBallerina source checkout
    pub source_path: PathBuf,
    /// The version of the distribution built from the checkout
    pub version: String,
    pub benchmark_iterations: NonZeroU32,
}
