//! Construction helpers for `genpdf` documents.

use genpdf::fonts::{FontData, FontFamily};
use genpdf::{self, Margins, SimplePageDecorator, Size};

/// Builder for `genpdf::Document` instances with paper, margin and text defaults applied.
#[derive(Default)]
pub struct DocumentBuilder {
    title: Option<String>,
    paper_size: Option<Size>,
    margins: Option<Margins>,
    font_size: Option<u8>,
    line_spacing: Option<f64>,
}

impl DocumentBuilder {
    /// Creates a new builder instance with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the title stored in the PDF metadata.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the paper size used for the document.
    pub fn with_paper_size(mut self, paper_size: impl Into<Size>) -> Self {
        self.paper_size = Some(paper_size.into());
        self
    }

    /// Sets the page margins applied through the page decorator.
    pub fn with_margins(mut self, margins: impl Into<Margins>) -> Self {
        self.margins = Some(margins.into());
        self
    }

    /// Sets the default font size for unstyled text.
    pub fn with_font_size(mut self, font_size: u8) -> Self {
        self.font_size = Some(font_size);
        self
    }

    /// Sets the default line spacing factor.
    pub fn with_line_spacing(mut self, line_spacing: f64) -> Self {
        self.line_spacing = Some(line_spacing);
        self
    }

    /// Builds the configured `genpdf::Document` around the given font family.
    pub fn build(self, font_family: FontFamily<FontData>) -> genpdf::Document {
        let mut document = genpdf::Document::new(font_family);

        if let Some(title) = self.title {
            document.set_title(title);
        }

        if let Some(paper_size) = self.paper_size {
            document.set_paper_size(paper_size);
        }

        if let Some(font_size) = self.font_size {
            document.set_font_size(font_size);
        }

        if let Some(line_spacing) = self.line_spacing {
            document.set_line_spacing(line_spacing);
        }

        let mut decorator = SimplePageDecorator::new();
        if let Some(margins) = self.margins {
            decorator.set_margins(margins);
        }
        document.set_page_decorator(decorator);

        document
    }
}
