use std::num::NonZeroU32;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::utils::constants::gradle;

/// [`CliArgs`] is the command line arguments parser
///
/// #Test
/// ```rust
/// use clap::Parser;
/// use jbal_tools::cli::input::{CliArgs, Command};
///
/// let parser = CliArgs::parse_from(["", "-v", "build-tools"]);
/// assert_eq!(1, parser.verbose);
/// assert_eq!(parser.command, Command::BuildTools { flags: String::from("build -x check") });
///
/// let parser = CliArgs::parse_from(["", "-s", "/src/ballerina-lang", "--bal-version", "2201.9.0", "build", "-rb", "main.bal"]);
/// assert_eq!(parser.source_path.as_deref(), Some(std::path::Path::new("/src/ballerina-lang")));
/// assert_eq!(parser.bal_version.as_deref(), Some("2201.9.0"));
/// match parser.command {
///     Command::Build(target) => {
///         assert!(target.remote);
///         assert!(target.benchmark);
///         assert!(!target.file);
///         assert_eq!(target.path, Some(std::path::PathBuf::from("main.bal")));
///     }
///     _ => panic!("Expected the build command"),
/// }
/// ```
#[derive(Parser, Debug)]
#[command(name = "jBalCompTools")]
#[command(author = "Heshan Padmasiri")]
#[command(version)]
#[command(about = "Collection of useful commands for jBallerina compiler debugging")]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, action = clap::ArgAction::Count, global = true, help = "Maximum allowed verbosity level is: '-v'")]
    pub verbose: u8,

    #[arg(short, long, global = true, help = "Path to jBallerina source code")]
    pub source_path: Option<PathBuf>,

    #[arg(long, global = true, help = "Version of jBallerina")]
    pub bal_version: Option<String>,

    #[arg(short, long, global = true, help = "Path of the configuration file to use")]
    pub config: Option<PathBuf>,
}

/// [`Command`] -  The core enum commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Build jBallerina compiler
    BuildTools {
        #[arg(long, default_value = gradle::DEFAULT_FLAGS, help = "Flags to pass to the gradle wrapper")]
        flags: String,
    },
    /// Build project or file
    Build(TargetArgs),
    /// Run the current project or file
    Run(TargetArgs),
    /// Run the tests of the current project or file
    Test(TargetArgs),
    /// Generate BIR for a given source file
    Bir {
        path: Option<PathBuf>,
    },
    /// Compile and dissemble a given file or project
    Dis {
        path: PathBuf,
    },
}

impl Command {
    /// Whether the command writes a machine readable report to the standard output
    pub fn prints_json(&self) -> bool {
        match self {
            Command::Build(target) | Command::Run(target) | Command::Test(target) => target.json,
            Command::BuildTools { .. } | Command::Bir { .. } | Command::Dis { .. } => false,
        }
    }
}

/// The arguments shared by the commands that hand a target to the toolchain
#[derive(Args, Debug, PartialEq, Eq, Default)]
pub struct TargetArgs {
    /// The file or project to work with. Defaults to the current working directory
    pub path: Option<PathBuf>,

    #[arg(short, long, help = "Work with the given file instead of a project")]
    pub file: bool,

    #[arg(short, long, help = "Remote debug the compiler")]
    pub remote: bool,

    #[arg(short, long, help = "Benchmark the compiler")]
    pub benchmark: bool,

    #[arg(long, requires = "benchmark", help = "Number of benchmark iterations")]
    pub iterations: Option<NonZeroU32>,

    #[arg(long, requires = "benchmark", help = "Print the benchmark summary as JSON")]
    pub json: bool,
}
