//! Constant value definitions to use across the whole program

pub const JBAL_TOOLS: &str = "jBalCompTools";

/// The names of the directories that the tool reads or creates, not their paths
pub mod dir_names {
    pub const DIS: &str = "dis";
}

/// The pieces of the path where the jBallerina distribution gets extracted
/// inside of the compiler source checkout
pub mod distribution {
    pub const SEGMENTS: [&str; 5] = [
        "distribution",
        "zip",
        "jballerina-tools",
        "build",
        "extracted-distributions",
    ];
    pub const DIR_PREFIX: &str = "jballerina-tools-";
    pub const BIN_DIR: &str = "bin";
    pub const EXECUTABLE: &str = if cfg!(target_os = "windows") {
        "bal.bat"
    } else {
        "bal"
    };
}

pub mod remote_debug {
    pub const PORT: &str = "5005";
    pub const DEBUG_FLAG: &str = "--debug";
    pub const BUILD_ENV_VAR: &str = "BAL_JAVA_DEBUG";
}

pub mod gradle {
    pub const WRAPPER: &str = if cfg!(target_os = "windows") {
        "gradlew.bat"
    } else {
        "gradlew"
    };
    pub const DEFAULT_FLAGS: &str = "build -x check";
}

pub mod config {
    pub const FILE_NAME: &str = "config.toml";
    pub const DEFAULT_BENCHMARK_ITERATIONS: u32 = 10;
}

pub mod error_messages {
    pub const READ_CFG_FILE: &str = "Could not read the configuration file";
    pub const PARSE_CFG_FILE: &str = "Could not parse the configuration file";
    pub const MISSING_SOURCE_PATH: &str =
        "No jBallerina source path was given. Use `--source-path` or set `defaultSourcePath` in the configuration file";
    pub const MISSING_VERSION: &str =
        "No jBallerina version was given. Use `--bal-version` or set `defaultVersion` in the configuration file";
    pub const ZERO_ITERATIONS: &str = "The number of benchmark iterations must be at least 1";
    pub const READ_MANIFEST: &str = "Error reading Ballerina.toml file";
    pub const PARSE_MANIFEST: &str = "Error unmarshaling Ballerina.toml file";
    pub const FILE_PATH_REQUIRED: &str = "Please provide a file to compile";
    pub const FAILURE_BUILDING_TOOLCHAIN: &str = "Failed to build the jBallerina toolchain";
    pub const FAILURE_GATHERING_CWD: &str = "Error getting current working directory";
}

pub const MANIFEST_FILE_NAME: &str = "Ballerina.toml";
pub const BAL_SOURCE_EXTENSION: &str = ".bal";
pub const JAR_EXTENSION: &str = ".jar";
pub const DUMP_BIR_FLAG: &str = "--dump-bir";
pub const JAR_TOOL: &str = "jar";
