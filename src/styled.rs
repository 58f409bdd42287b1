//! Styled rendering of the sample document through `genpdf`.
//!
//! Layout follows a plain report look: A4 paper with one-inch margins, a
//! centered bold title, bold section headings and 10pt body paragraphs that
//! the layout engine wraps. Vertical rhythm comes from bottom padding on each
//! element rather than from explicit spacer elements.

use genpdf::elements::Paragraph;
use genpdf::error::Error;
use genpdf::fonts::{FontData, FontFamily};
use genpdf::style::Style;
use genpdf::{Alignment, Element, Margins, Mm, PaperSize};

use crate::builder::DocumentBuilder;
use crate::model::SampleDocument;

const MM_PER_INCH: f64 = 25.4;
const PAGE_MARGIN_IN: f64 = 1.0;

const TITLE_FONT_SIZE: u8 = 18;
const HEADING_FONT_SIZE: u8 = 14;
const BODY_FONT_SIZE: u8 = 10;
const LINE_SPACING: f64 = 1.2;

const AFTER_TITLE_IN: f64 = 0.25;
const AFTER_INTRO_IN: f64 = 0.2;
const BETWEEN_SECTIONS_IN: f64 = 0.15;
const AFTER_HEADING_MM: f64 = 2.0;

fn mm_from_f64(value: f64) -> Mm {
    Mm::from(printpdf::Mm(value))
}

fn inches(value: f64) -> Mm {
    mm_from_f64(value * MM_PER_INCH)
}

fn bottom(space: Mm) -> Margins {
    let zero = mm_from_f64(0.0);
    Margins::trbl(zero, zero, space, zero)
}

fn title_style() -> Style {
    Style::new().bold().with_font_size(TITLE_FONT_SIZE)
}

fn heading_style() -> Style {
    Style::new().bold().with_font_size(HEADING_FONT_SIZE)
}

fn body_style() -> Style {
    Style::new().with_font_size(BODY_FONT_SIZE)
}

/// Lays out `document` into a ready-to-render `genpdf::Document`.
pub fn layout(document: &SampleDocument, font_family: FontFamily<FontData>) -> genpdf::Document {
    let margin = inches(PAGE_MARGIN_IN);
    let mut pdf = DocumentBuilder::new()
        .with_title(document.title())
        .with_paper_size(PaperSize::A4)
        .with_margins(Margins::trbl(margin, margin, margin, margin))
        .with_font_size(BODY_FONT_SIZE)
        .with_line_spacing(LINE_SPACING)
        .build(font_family);

    pdf.push(
        Paragraph::new(document.title())
            .aligned(Alignment::Center)
            .styled(title_style())
            .padded(bottom(inches(AFTER_TITLE_IN))),
    );

    let intro = document.intro();
    for (index, paragraph) in intro.iter().enumerate() {
        let space = if index + 1 == intro.len() {
            inches(AFTER_INTRO_IN)
        } else {
            mm_from_f64(AFTER_HEADING_MM)
        };
        pdf.push(
            Paragraph::new(paragraph.joined())
                .styled(body_style())
                .padded(bottom(space)),
        );
    }

    let sections = document.sections();
    for (section_index, section) in sections.iter().enumerate() {
        pdf.push(
            Paragraph::new(section.heading())
                .styled(heading_style())
                .padded(bottom(mm_from_f64(AFTER_HEADING_MM))),
        );

        let last_section = section_index + 1 == sections.len();
        let paragraphs = section.paragraphs();
        for (index, paragraph) in paragraphs.iter().enumerate() {
            let space = if index + 1 < paragraphs.len() {
                mm_from_f64(AFTER_HEADING_MM)
            } else if last_section {
                mm_from_f64(0.0)
            } else {
                inches(BETWEEN_SECTIONS_IN)
            };
            pdf.push(
                Paragraph::new(paragraph.joined())
                    .styled(body_style())
                    .padded(bottom(space)),
            );
        }
    }

    pdf
}

/// Renders `document` to PDF bytes with the given font family.
pub fn render(
    document: &SampleDocument,
    font_family: FontFamily<FontData>,
) -> Result<Vec<u8>, Error> {
    let mut bytes = Vec::new();
    layout(document, font_family).render(&mut bytes)?;
    Ok(bytes)
}
