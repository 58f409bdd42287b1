//! Writes the sample document to disk.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::FixtureError;
use crate::model::merchant_summary;
use crate::render::{select_renderer, Backend, Render};

/// Output location relative to the repository root.
pub const DEFAULT_OUTPUT_PATH: &str = "data/sample_merchant_summary.pdf";

/// Outcome of a successful generation run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Generated {
    /// File that was written.
    pub path: PathBuf,
    /// Strategy that produced the bytes.
    pub backend: Backend,
    /// Size of the written file.
    pub bytes_written: usize,
}

/// Renders the merchant summary with the best available renderer and writes it to `path`.
pub fn generate(path: impl AsRef<Path>) -> Result<Generated, FixtureError> {
    let renderer = select_renderer();
    generate_with(renderer.as_ref(), path)
}

/// Renders the merchant summary with `renderer` and writes it to `path`.
///
/// The parent directory is created when missing and an existing file is
/// overwritten.
pub fn generate_with(
    renderer: &dyn Render,
    path: impl AsRef<Path>,
) -> Result<Generated, FixtureError> {
    let path = path.as_ref();
    let bytes = renderer.render(&merchant_summary())?;

    if let Some(parent) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| FixtureError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    fs::write(path, &bytes).map_err(|source| FixtureError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(
        "wrote {} bytes to {} ({})",
        bytes.len(),
        path.display(),
        renderer.backend()
    );

    Ok(Generated {
        path: path.to_path_buf(),
        backend: renderer.backend(),
        bytes_written: bytes.len(),
    })
}
