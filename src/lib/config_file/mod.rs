//! root file for the crate where the datastructures that holds the TOML
//! parsed data lives.
pub mod manifest;

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use color_eyre::{
    eyre::{eyre, Context},
    Result,
};
use serde::{Deserialize, Serialize};

use crate::utils::constants::{config, error_messages, JBAL_TOOLS};

/// The [`ToolsConfigFile`] is the type that holds the user defaults
/// for the tool, written in the `config.toml` file
///
/// ```rust
/// use jbal_tools::config_file::{self, ToolsConfigFile};
///
/// const CONFIG_FILE_MOCK: &str = r#"
///     defaultSourcePath = '/home/heshan/ballerina-lang'
///     defaultVersion = '2201.9.0-SNAPSHOT'
///     benchmarkIterations = 5
/// "#;
///
/// let config: ToolsConfigFile = config_file::tools_cfg_from_file(CONFIG_FILE_MOCK)
///     .expect("A failure happened parsing the configuration file");
///
/// assert_eq!(config.default_source_path.as_deref(), Some("/home/heshan/ballerina-lang"));
/// assert_eq!(config.default_version.as_deref(), Some("2201.9.0-SNAPSHOT"));
/// assert_eq!(config.benchmark_iterations, Some(5));
/// ```
#[derive(Serialize, Deserialize, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ToolsConfigFile<'a> {
    #[serde(borrow)]
    pub default_source_path: Option<Cow<'a, str>>,
    #[serde(borrow)]
    pub default_version: Option<Cow<'a, str>>,
    pub benchmark_iterations: Option<u32>,
}

pub fn tools_cfg_from_file(cfg: &'_ str) -> Result<ToolsConfigFile<'_>, toml::de::Error> {
    <ToolsConfigFile>::deserialize(&mut toml::Deserializer::new(cfg))
}

/// The places where a `config.toml` is searched for, in order of preference
pub fn config_file_candidates(cwd: &Path) -> Vec<PathBuf> {
    let mut candidates = vec![cwd.join(config::FILE_NAME)];
    if let Some(user_cfg_dir) = dirs::config_dir() {
        candidates.push(user_cfg_dir.join(JBAL_TOOLS).join(config::FILE_NAME));
    }
    candidates
}

/// Reads the raw content of the configuration file.
///
/// An explicitly requested file must exist. Otherwise, the first of the
/// [`config_file_candidates`] present is used, and its absence is not an error
pub fn read_config_file(explicit: Option<&Path>, cwd: &Path) -> Result<Option<String>> {
    let path = match explicit {
        Some(path) if !path.exists() => {
            return Err(eyre!("The configuration file {path:?} does not exist"))
        }
        Some(path) => Some(path.to_path_buf()),
        None => config_file_candidates(cwd).into_iter().find(|p| p.is_file()),
    };

    match path {
        Some(path) => {
            log::debug!("Loading the configuration file: {path:?}");
            std::fs::read_to_string(&path)
                .with_context(|| format!("{}: {:?}", error_messages::READ_CFG_FILE, path))
                .map(Some)
        }
        None => {
            log::warn!("Can't read config: no {} found", config::FILE_NAME);
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_empty_config_file_is_valid() -> Result<()> {
        let config = tools_cfg_from_file("")?;
        assert_eq!(config, ToolsConfigFile::default());
        Ok(())
    }

    #[test]
    fn test_wrongly_typed_keys_are_rejected() {
        assert!(tools_cfg_from_file("benchmarkIterations = 'ten'").is_err());
    }

    #[test]
    fn test_explicit_missing_config_file_is_an_error() -> Result<()> {
        let temp = tempdir()?;
        let missing = temp.path().join("nope.toml");
        assert!(read_config_file(Some(&missing), temp.path()).is_err());
        Ok(())
    }

    #[test]
    fn test_config_file_in_the_working_directory_is_found() -> Result<()> {
        let temp = tempdir()?;
        std::fs::write(temp.path().join("config.toml"), "defaultVersion = '1.0.0'")?;

        let raw = read_config_file(None, temp.path())?;
        assert_eq!(raw.as_deref(), Some("defaultVersion = '1.0.0'"));
        Ok(())
    }
}
