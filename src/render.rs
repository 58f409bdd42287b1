//! The rendering interface shared by both output strategies.
//!
//! [`select_renderer`] decides between them once at startup: the styled
//! renderer when the `styled` feature is compiled in and its fonts can be
//! loaded, otherwise the dependency-free minimal renderer.

use std::fmt;

use log::debug;

use crate::error::FixtureError;
use crate::minimal;
use crate::model::SampleDocument;

/// Which strategy produced a document.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Backend {
    /// Layout delegated to `genpdf`.
    Styled,
    /// Hand-assembled single-page PDF.
    Minimal,
}

impl Backend {
    /// Short human-readable description used in console output.
    pub fn label(self) -> &'static str {
        match self {
            Backend::Styled => "styled, genpdf",
            Backend::Minimal => "minimal, no genpdf",
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Turns a [`SampleDocument`] into PDF bytes.
pub trait Render {
    /// The strategy implemented by this renderer.
    fn backend(&self) -> Backend;

    /// Renders the complete PDF file.
    fn render(&self, document: &SampleDocument) -> Result<Vec<u8>, FixtureError>;
}

/// Renderer backed by [`minimal::assemble`]. Always available.
#[derive(Clone, Copy, Debug, Default)]
pub struct MinimalRenderer;

impl Render for MinimalRenderer {
    fn backend(&self) -> Backend {
        Backend::Minimal
    }

    fn render(&self, document: &SampleDocument) -> Result<Vec<u8>, FixtureError> {
        Ok(minimal::assemble(&document.lines()))
    }
}

/// Renderer backed by `genpdf`, holding the font family it lays text out with.
#[cfg(feature = "styled")]
pub struct StyledRenderer {
    font_family: genpdf::fonts::FontFamily<genpdf::fonts::FontData>,
}

#[cfg(feature = "styled")]
impl StyledRenderer {
    /// Loads the fonts the styled renderer needs, or returns `None` when they are unavailable.
    pub fn acquire() -> Option<Self> {
        match crate::fonts::default_font_family() {
            Ok(font_family) => Some(Self { font_family }),
            Err(err) => {
                debug!("styled renderer unavailable: {}", err);
                None
            }
        }
    }
}

#[cfg(feature = "styled")]
impl Render for StyledRenderer {
    fn backend(&self) -> Backend {
        Backend::Styled
    }

    fn render(&self, document: &SampleDocument) -> Result<Vec<u8>, FixtureError> {
        Ok(crate::styled::render(document, self.font_family.clone())?)
    }
}

/// Picks the styled renderer when it can be acquired and falls back to the minimal one.
pub fn select_renderer() -> Box<dyn Render> {
    #[cfg(feature = "styled")]
    {
        if let Some(renderer) = StyledRenderer::acquire() {
            return Box::new(renderer);
        }
    }

    #[cfg(not(feature = "styled"))]
    debug!("built without the `styled` feature");

    Box::new(MinimalRenderer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::merchant_summary;

    #[test]
    fn labels_name_the_strategy() {
        assert_eq!(Backend::Styled.label(), "styled, genpdf");
        assert_eq!(Backend::Minimal.to_string(), "minimal, no genpdf");
    }

    #[test]
    fn minimal_renderer_matches_assembler() {
        let document = merchant_summary();
        let bytes = MinimalRenderer.render(&document).expect("render");
        assert_eq!(bytes, minimal::assemble(&document.lines()));
        assert_eq!(MinimalRenderer.backend(), Backend::Minimal);
    }

    #[test]
    fn selection_reports_backend_consistent_with_fonts() {
        let renderer = select_renderer();
        #[cfg(feature = "styled")]
        let expected = if crate::fonts::default_fonts_available() {
            Backend::Styled
        } else {
            Backend::Minimal
        };
        #[cfg(not(feature = "styled"))]
        let expected = Backend::Minimal;
        assert_eq!(renderer.backend(), expected);
    }
}
