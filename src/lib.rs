//! Generator for the sample merchant underwriting summary PDF.
//!
//! The fixture can be produced two ways. With the `styled` feature and a font
//! family on disk, `genpdf` lays the document out with titles, headings and
//! wrapped paragraphs. Otherwise a minimal single-page PDF is assembled by
//! hand. [`generator::generate`] picks between them and writes the file.

pub mod error;
pub mod generator;
pub mod minimal;
pub mod model;
pub mod render;

#[cfg(feature = "styled")]
pub mod builder;
#[cfg(feature = "styled")]
pub mod fonts;
#[cfg(feature = "styled")]
pub mod styled;

pub use error::FixtureError;
pub use generator::{generate, generate_with, Generated, DEFAULT_OUTPUT_PATH};
pub use render::{Backend, MinimalRenderer, Render};
