use std::{
    fs::DirBuilder,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use color_eyre::{eyre::Context, Result};

use super::constants::error_messages;

pub fn create_directory(path_create: &Path) -> Result<()> {
    DirBuilder::new()
        .recursive(true)
        .create(path_create)
        .with_context(|| format!("Could not create directory {path_create:?}"))
}

/// Wipes out *path* (if exists) and creates it again, empty
pub fn recreate_directory(path: &Path) -> Result<()> {
    match std::fs::remove_dir_all(path) {
        Ok(()) => log::debug!("Deleted the existing directory {path:?}"),
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => {
            return Err(e)
                .with_context(|| format!("Error deleting existing directory {path:?}"))
        }
    }
    create_directory(path)
}

pub fn move_file(from: &Path, to: &Path) -> Result<()> {
    std::fs::rename(from, to).with_context(|| format!("Error moving {from:?} to {to:?}"))
}

pub fn current_working_dir() -> Result<PathBuf> {
    std::env::current_dir().with_context(|| error_messages::FAILURE_GATHERING_CWD)
}
