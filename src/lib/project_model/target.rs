//! What the user points the toolchain at: a single source file or a whole project

use std::borrow::Cow;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use color_eyre::{eyre::Context, Result};

use crate::config_file::manifest;
use crate::utils::constants::{
    error_messages, BAL_SOURCE_EXTENSION, JAR_EXTENSION, MANIFEST_FILE_NAME,
};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TargetKind {
    SourceFile,
    Project,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetModel {
    pub path: PathBuf,
    pub kind: TargetKind,
}

impl TargetModel {
    /// Inspects the filesystem to determine whether *path* is a Ballerina project
    pub fn detect<P: Into<PathBuf>>(path: P) -> Result<Self> {
        let path = path.into();
        let kind = if is_ballerina_project(&path)? {
            TargetKind::Project
        } else {
            TargetKind::SourceFile
        };
        Ok(Self { path, kind })
    }

    /// The name of the jar that the toolchain produces when building this target
    pub fn expected_artifact_name(&self) -> Result<String> {
        match self.kind {
            TargetKind::Project => project_expected_output(&self.path),
            TargetKind::SourceFile => Ok(source_file_expected_output(&self.path)),
        }
    }
}

/// Computes the name of the jar produced for the given target path
pub fn resolve_expected_artifact_name(path: &Path) -> Result<String> {
    TargetModel::detect(path)?.expected_artifact_name()
}

/// A path is a project whenever it's a directory holding a `Ballerina.toml` file.
///
/// A path that doesn't exist isn't a project. Any other failure while reading the
/// metadata of the path is reported as an error
pub fn is_ballerina_project(path: &Path) -> Result<bool> {
    let metadata = match std::fs::metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(false),
        Err(e) => {
            return Err(e).with_context(|| format!("Error getting file info at path {path:?}"))
        }
    };

    Ok(metadata.is_dir() && path.join(MANIFEST_FILE_NAME).exists())
}

fn source_file_expected_output(path: &Path) -> String {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy())
        .unwrap_or(Cow::Borrowed(""));
    let stem = file_name
        .strip_suffix(BAL_SOURCE_EXTENSION)
        .unwrap_or(file_name.as_ref());
    format!("{stem}{JAR_EXTENSION}")
}

fn project_expected_output(path: &Path) -> Result<String> {
    let manifest_path = path.join(MANIFEST_FILE_NAME);
    let raw = std::fs::read_to_string(&manifest_path)
        .with_context(|| format!("{}: {:?}", error_messages::READ_MANIFEST, manifest_path))?;
    let manifest = manifest::manifest_from_file(&raw)
        .with_context(|| format!("{}: {:?}", error_messages::PARSE_MANIFEST, manifest_path))?;

    Ok(format!("{}{JAR_EXTENSION}", manifest.package.name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_single_file_strips_the_bal_extension() {
        assert_eq!(
            source_file_expected_output(Path::new("/some/dir/main.bal")),
            "main.jar"
        );
        assert_eq!(source_file_expected_output(Path::new("hello.bal")), "hello.jar");
    }

    #[test]
    fn test_only_the_bal_extension_is_stripped() {
        assert_eq!(
            source_file_expected_output(Path::new("notes.txt")),
            "notes.txt.jar"
        );
        assert_eq!(
            source_file_expected_output(Path::new("archive.bal.bal")),
            "archive.bal.jar"
        );
    }

    #[test]
    fn test_non_existent_path_is_not_a_project() -> Result<()> {
        let temp = tempdir()?;
        assert!(!is_ballerina_project(&temp.path().join("missing"))?);
        Ok(())
    }

    #[test]
    fn test_directory_without_manifest_is_not_a_project() -> Result<()> {
        let temp = tempdir()?;
        assert!(!is_ballerina_project(temp.path())?);

        let target = TargetModel::detect(temp.path())?;
        assert_eq!(target.kind, TargetKind::SourceFile);
        Ok(())
    }

    #[test]
    fn test_project_artifact_uses_the_package_name() -> Result<()> {
        let temp = tempdir()?;
        std::fs::write(
            temp.path().join(MANIFEST_FILE_NAME),
            "[package]\norg = \"heshan\"\nname = \"BalProject\"\nversion = \"0.1.0\"\n",
        )?;

        let target = TargetModel::detect(temp.path())?;
        assert_eq!(target.kind, TargetKind::Project);
        assert_eq!(target.expected_artifact_name()?, "BalProject.jar");
        Ok(())
    }

    #[test]
    fn test_corrupted_manifest_is_an_error() -> Result<()> {
        let temp = tempdir()?;
        std::fs::write(temp.path().join(MANIFEST_FILE_NAME), "[package\nname =")?;

        assert!(resolve_expected_artifact_name(temp.path()).is_err());
        Ok(())
    }

    #[test]
    fn test_stat_failures_other_than_not_found_are_errors() -> Result<()> {
        let temp = tempdir()?;
        let file = temp.path().join("main.bal");
        std::fs::write(&file, "public function main() {}")?;
        let below_a_file = file.join("child");

        let err = is_ballerina_project(&below_a_file).unwrap_err();
        assert!(err.to_string().contains("Error getting file info at path"));
        assert!(resolve_expected_artifact_name(&below_a_file).is_err());
        Ok(())
    }

    #[test]
    fn test_missing_source_file_still_has_an_expected_artifact() -> Result<()> {
        let temp = tempdir()?;
        assert_eq!(
            resolve_expected_artifact_name(&temp.path().join("missing.bal"))?,
            "missing.jar"
        );
        Ok(())
    }

    #[test]
    fn test_unreadable_manifest_is_an_error() -> Result<()> {
        let temp = tempdir()?;
        std::fs::create_dir(temp.path().join(MANIFEST_FILE_NAME))?;

        let target = TargetModel::detect(temp.path())?;
        assert_eq!(target.kind, TargetKind::Project);

        let err = target.expected_artifact_name().unwrap_err();
        assert!(err.to_string().contains(error_messages::READ_MANIFEST));
        Ok(())
    }
}
