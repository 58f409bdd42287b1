//! Logical content of the sample merchant summary.
//!
//! The types here describe *what* the fixture says, independent of how it is
//! rendered. The minimal renderer flattens a [`SampleDocument`] into plain
//! lines, while the styled renderer maps titles, headings and paragraphs onto
//! `genpdf` elements.

/// A paragraph made of one or more source lines.
///
/// The minimal renderer draws each line on its own baseline. The styled
/// renderer joins the lines with a single space and lets the layout engine
/// wrap the result.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Paragraph {
    lines: Vec<String>,
}

impl Paragraph {
    /// Creates a paragraph from the provided lines.
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the source lines of the paragraph.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Returns the paragraph as a single string suitable for wrapping.
    pub fn joined(&self) -> String {
        self.lines.join(" ")
    }
}

/// A headed section of the document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Section {
    heading: String,
    paragraphs: Vec<Paragraph>,
}

impl Section {
    /// Creates a new section with the provided heading.
    pub fn new(heading: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            paragraphs: Vec::new(),
        }
    }

    /// Returns the section heading.
    pub fn heading(&self) -> &str {
        &self.heading
    }

    /// Returns the paragraphs contained in the section.
    pub fn paragraphs(&self) -> &[Paragraph] {
        &self.paragraphs
    }

    /// Appends a paragraph and returns the updated section.
    pub fn with_paragraph(mut self, paragraph: Paragraph) -> Self {
        self.paragraphs.push(paragraph);
        self
    }
}

/// The complete fixture document: a title, intro paragraphs and sections.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SampleDocument {
    title: String,
    intro: Vec<Paragraph>,
    sections: Vec<Section>,
}

impl SampleDocument {
    /// Creates an empty document with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            intro: Vec::new(),
            sections: Vec::new(),
        }
    }

    /// Returns the document title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the paragraphs shown between the title and the first section.
    pub fn intro(&self) -> &[Paragraph] {
        &self.intro
    }

    /// Returns the document sections in order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Appends an intro paragraph and returns the updated document.
    pub fn with_intro(mut self, paragraph: Paragraph) -> Self {
        self.intro.push(paragraph);
        self
    }

    /// Appends a section and returns the updated document.
    pub fn with_section(mut self, section: Section) -> Self {
        self.sections.push(section);
        self
    }

    /// Flattens the document into the ordered line list drawn by the minimal renderer.
    ///
    /// The title comes first, then each block (intro group or section) is
    /// preceded by one empty line. Paragraph lines are emitted as-is, so the
    /// text still carries any non-ASCII punctuation from the model.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![self.title.clone()];

        if !self.intro.is_empty() {
            lines.push(String::new());
            lines.extend(self.intro.iter().flat_map(|p| p.lines().iter().cloned()));
        }

        for section in &self.sections {
            lines.push(String::new());
            lines.push(section.heading.clone());
            lines.extend(
                section
                    .paragraphs
                    .iter()
                    .flat_map(|p| p.lines().iter().cloned()),
            );
        }

        lines
    }
}

/// Returns the fixed merchant underwriting summary used as fixture content.
pub fn merchant_summary() -> SampleDocument {
    SampleDocument::new("Merchant Underwriting Summary (Sample)")
        .with_intro(Paragraph::new([
            "This document is a sample merchant terms and summary for use in the MLE take-home.",
            "Process this PDF asynchronously and extract text for the collated view or report.",
        ]))
        .with_section(
            Section::new("Section 1 \u{2013} Merchant overview").with_paragraph(Paragraph::new([
                "Merchant: Sample Merchant Ltd. Country: United Kingdom. Registration: 09446239.",
                "Monthly volume band: 50k\u{2013}150k GBP.",
            ])),
        )
        .with_section(
            Section::new("Section 2 \u{2013} Key terms (abbreviated)").with_paragraph(
                Paragraph::new([
                    "Standard BNPL terms apply. Disputes handled per scheme rules.",
                    "Chargeback liability: merchant responsible for fraud and service disputes. Settlement: T+2.",
                ]),
            ),
        )
        .with_section(
            Section::new("Section 3 \u{2013} Risk team notes").with_paragraph(Paragraph::new([
                "Internal flag: medium. Last review 2025-01-10. No sanctions hits. Company active.",
            ])),
        )
}
