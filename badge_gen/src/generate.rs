use std::env;
use std::io;
use std::path::{Path, PathBuf};

use lib_badge::constants::{icon_file_name, ICON_SIZES};
use lib_badge::{create_icon, BadgeError, IconSize, LetterFont};
use log::debug;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DriverError {
    #[error("Could not locate the running executable: {0}")]
    ExecutableLocation(#[source] io::Error),

    #[error("Executable path has no parent directory: {0}")]
    NoParentDirectory(PathBuf),

    #[error(transparent)]
    Badge(#[from] BadgeError),
}

/// Directory holding the running binary; icons are written next to it.
pub fn program_dir() -> Result<PathBuf, DriverError> {
    let exe = env::current_exe().map_err(DriverError::ExecutableLocation)?;
    let dir = exe
        .parent()
        .ok_or_else(|| DriverError::NoParentDirectory(exe.clone()))?
        .to_path_buf();
    debug!("Output directory: {}", dir.display());
    Ok(dir)
}

/// One finished icon, for progress reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated {
    pub size: u32,
    pub path: PathBuf,
}

/// Writes every icon in [`ICON_SIZES`] into `dir`, in order.
///
/// `on_done` runs after each file is written. Stops at the first failure.
pub fn generate_all(
    dir: &Path,
    font: &LetterFont,
    mut on_done: impl FnMut(&Generated),
) -> Result<Vec<Generated>, DriverError> {
    let mut generated = Vec::with_capacity(ICON_SIZES.len());

    for px in ICON_SIZES {
        let size = IconSize::new(px)?;
        let path = dir.join(icon_file_name(px));
        create_icon(size, &path, font)?;

        let icon = Generated { size: px, path };
        on_done(&icon);
        generated.push(icon);
    }

    Ok(generated)
}
