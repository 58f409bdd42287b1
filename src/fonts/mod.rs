//! Font discovery for the styled renderer.
//!
//! `genpdf` needs TrueType metrics to lay out text, so the styled renderer is
//! only usable when a complete font family can be found on disk. The search
//! order is:
//!
//! 1. the directory named by `PDF_FIXTURE_FONTS_DIR`,
//! 2. `assets/fonts` next to the running executable,
//! 3. `assets/fonts` under this crate's manifest directory.

use std::env;
use std::io;
use std::path::{Path, PathBuf};

use genpdf::error::Error;
use genpdf::fonts::{self, FontData, FontFamily};
use log::debug;

/// Environment variable that overrides the font search path.
pub const FONTS_DIR_ENV: &str = "PDF_FIXTURE_FONTS_DIR";

/// Name of the font family loaded for styled output.
pub const FONT_FAMILY_NAME: &str = "Roboto";

const FONT_FILES: &[&str] = &[
    "Roboto-Regular.ttf",
    "Roboto-Bold.ttf",
    "Roboto-Italic.ttf",
    "Roboto-BoldItalic.ttf",
];

/// Font directory shipped alongside the crate sources.
pub fn bundled_fonts_source_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets/fonts")
}

fn push_unique(candidates: &mut Vec<PathBuf>, candidate: PathBuf) {
    if !candidates.contains(&candidate) {
        candidates.push(candidate);
    }
}

fn font_directory_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    if let Some(value) = env::var_os(FONTS_DIR_ENV) {
        if !value.is_empty() {
            candidates.push(PathBuf::from(value));
        }
    }

    if let Some(bin_dir) = env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
    {
        push_unique(&mut candidates, bin_dir.join("assets/fonts"));
    }

    push_unique(&mut candidates, bundled_fonts_source_dir());
    candidates
}

fn missing_font_files(directory: &Path) -> Vec<&'static str> {
    FONT_FILES
        .iter()
        .copied()
        .filter(|name| !directory.join(name).is_file())
        .collect()
}

/// Returns the first candidate directory that holds every required font file.
pub fn resolve_font_directory() -> Result<PathBuf, Error> {
    let mut attempts = Vec::new();

    for candidate in font_directory_candidates() {
        if !candidate.is_dir() {
            attempts.push(format!("{} (directory missing)", candidate.display()));
            continue;
        }

        let missing = missing_font_files(&candidate);
        if missing.is_empty() {
            return Ok(candidate);
        }
        attempts.push(format!(
            "{} (missing files [{}])",
            candidate.display(),
            missing.join(", ")
        ));
    }

    Err(Error::new(
        format!(
            "Unable to locate the {} font family. Checked: {}. Set {} to a directory containing {}.",
            FONT_FAMILY_NAME,
            attempts.join(", "),
            FONTS_DIR_ENV,
            FONT_FILES.join(", ")
        ),
        io::Error::new(io::ErrorKind::NotFound, "font directory not found"),
    ))
}

/// Loads the font family used by the styled renderer.
pub fn default_font_family() -> Result<FontFamily<FontData>, Error> {
    let directory = resolve_font_directory()?;
    debug!("loading {} fonts from {}", FONT_FAMILY_NAME, directory.display());

    fonts::from_files(&directory, FONT_FAMILY_NAME, None).map_err(|err| {
        Error::new(
            format!(
                "Failed to load font family '{}' from {}: {}",
                FONT_FAMILY_NAME,
                directory.display(),
                err
            ),
            io::Error::new(io::ErrorKind::Other, err.to_string()),
        )
    })
}

/// Indicates whether a complete font family can be found.
pub fn default_fonts_available() -> bool {
    resolve_font_directory().is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_files_are_reported_for_empty_directory() {
        let dir = tempfile::tempdir().expect("temp dir");
        assert_eq!(missing_font_files(dir.path()), FONT_FILES.to_vec());
    }

    #[test]
    fn complete_directory_has_no_missing_files() {
        let dir = tempfile::tempdir().expect("temp dir");
        for name in FONT_FILES {
            std::fs::write(dir.path().join(name), b"").expect("write placeholder");
        }
        assert!(missing_font_files(dir.path()).is_empty());
    }

    #[test]
    fn manifest_directory_is_always_a_candidate() {
        assert!(font_directory_candidates().contains(&bundled_fonts_source_dir()));
    }
}
