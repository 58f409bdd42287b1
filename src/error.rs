//! Error type for fixture generation.

use std::io;
use std::path::PathBuf;

/// Errors raised while rendering or writing the sample PDF.
///
/// A missing styled renderer is not represented here: the generator falls
/// back to the minimal renderer instead of failing.
#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    /// The output directory could not be created.
    #[error("failed to create output directory {}", .path.display())]
    CreateDir {
        /// Directory that was being created.
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The rendered bytes could not be written.
    #[error("failed to write {}", .path.display())]
    Write {
        /// File that was being written.
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The layout engine failed after the styled renderer was acquired.
    #[cfg(feature = "styled")]
    #[error("styled rendering failed")]
    Render(#[from] genpdf::error::Error),
}
