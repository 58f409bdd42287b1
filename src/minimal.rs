//! Dependency-free PDF assembly.
//!
//! This module writes a single-page PDF 1.4 file by hand: a catalog, a page
//! tree with one page, one content stream of text operators and a classic
//! cross-reference table. It exists so the fixture can be produced even when
//! the styled renderer is not available.

use std::fmt::Write as _;

/// PDF version written to the file header.
pub const PDF_VERSION: &str = "1.4";

/// US Letter width in PDF units.
pub const PAGE_WIDTH: u32 = 612;

/// US Letter height in PDF units.
pub const PAGE_HEIGHT: u32 = 792;

/// Font size used for every line.
pub const FONT_SIZE: u32 = 12;

/// Vertical advance between consecutive lines.
pub const LEADING: u32 = 14;

/// Horizontal start of every line.
pub const LEFT_MARGIN: u32 = 50;

/// Baseline of the first line.
pub const FIRST_BASELINE: u32 = 700;

const FREE_LIST_HEAD: &str = "0000000000 65535 f \n";

/// Escapes `\`, `(` and `)` so the text can sit inside a PDF literal string.
///
/// Every other character is passed through untouched.
pub fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        if matches!(ch, '\\' | '(' | ')') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

/// Encodes text as single bytes for a Type1 base font.
///
/// Latin-1 characters keep their code point. Typographic dashes and quotes
/// collapse to their ASCII forms and anything else becomes `?`.
pub fn encode_text(text: &str) -> Vec<u8> {
    text.chars()
        .map(|ch| match ch {
            '\u{2013}' | '\u{2014}' | '\u{2212}' => b'-',
            '\u{2018}' | '\u{2019}' => b'\'',
            '\u{201C}' | '\u{201D}' => b'"',
            ch if (ch as u32) <= 0xFF => ch as u8,
            _ => b'?',
        })
        .collect()
}

/// Builds the page content stream: one `Tj T*` pair per line inside a text object.
pub fn content_stream<S: AsRef<str>>(lines: &[S]) -> Vec<u8> {
    let mut stream = format!(
        "BT /F1 {FONT_SIZE} Tf {LEADING} TL {LEFT_MARGIN} {FIRST_BASELINE} Td\n"
    )
    .into_bytes();

    for line in lines {
        stream.push(b'(');
        stream.extend(encode_text(&escape_text(line.as_ref())));
        stream.extend_from_slice(b") Tj T*\n");
    }

    stream.extend_from_slice(b"ET");
    stream
}

/// Appends numbered indirect objects to a buffer and remembers where each one starts.
///
/// Object numbers are handed out sequentially from 1. Offsets are captured at
/// write time, so the xref table never depends on searching the output.
#[derive(Debug)]
pub struct ObjectWriter {
    buffer: Vec<u8>,
    offsets: Vec<usize>,
}

impl ObjectWriter {
    /// Starts a new file with the `%PDF-<version>` header line.
    pub fn new(version: &str) -> Self {
        Self {
            buffer: format!("%PDF-{version}\n").into_bytes(),
            offsets: Vec::new(),
        }
    }

    /// Number the next written object will receive.
    pub fn next_object_number(&self) -> u32 {
        self.offsets.len() as u32 + 1
    }

    /// Byte offsets of the objects written so far, indexed by object number - 1.
    pub fn offsets(&self) -> &[usize] {
        &self.offsets
    }

    /// Writes `<n> 0 obj\n<body>\nendobj\n` and returns the object number.
    pub fn write_object(&mut self, body: &[u8]) -> u32 {
        let number = self.begin_object();
        self.buffer.extend_from_slice(body);
        self.buffer.extend_from_slice(b"\nendobj\n");
        number
    }

    /// Writes a stream object whose `/Length` is the exact size of `data`.
    pub fn write_stream(&mut self, data: &[u8]) -> u32 {
        let number = self.begin_object();
        self.buffer
            .extend_from_slice(format!("<< /Length {} >>\nstream\n", data.len()).as_bytes());
        self.buffer.extend_from_slice(data);
        self.buffer.extend_from_slice(b"\nendstream\nendobj\n");
        number
    }

    fn begin_object(&mut self) -> u32 {
        let number = self.next_object_number();
        self.offsets.push(self.buffer.len());
        self.buffer
            .extend_from_slice(format!("{number} 0 obj\n").as_bytes());
        number
    }

    /// Appends the xref table and trailer pointing at `root`, returning the finished file.
    pub fn finish(mut self, root: u32) -> Vec<u8> {
        let xref_offset = self.buffer.len();
        let size = self.offsets.len() + 1;

        let mut tail = format!("xref\n0 {size}\n");
        tail.push_str(FREE_LIST_HEAD);
        for offset in &self.offsets {
            let _ = write!(tail, "{offset:010} 00000 n \n");
        }
        let _ = write!(
            tail,
            "trailer\n<< /Size {size} /Root {root} 0 R >>\nstartxref\n{xref_offset}\n%%EOF\n"
        );

        self.buffer.extend_from_slice(tail.as_bytes());
        self.buffer
    }
}

/// Assembles a complete single-page PDF drawing `lines` in 12pt Helvetica.
pub fn assemble<S: AsRef<str>>(lines: &[S]) -> Vec<u8> {
    let mut writer = ObjectWriter::new(PDF_VERSION);

    let catalog = writer.next_object_number();
    let pages = catalog + 1;
    let page = pages + 1;
    let contents = page + 1;

    writer.write_object(format!("<< /Type /Catalog /Pages {pages} 0 R >>").as_bytes());
    writer.write_object(format!("<< /Type /Pages /Kids [{page} 0 R] /Count 1 >>").as_bytes());
    writer.write_object(
        format!(
            "<< /Type /Page /Parent {pages} 0 R /MediaBox [0 0 {PAGE_WIDTH} {PAGE_HEIGHT}] \
             /Resources << /Font << /F1 << /Type /Font /Subtype /Type1 /BaseFont /Helvetica >> >> >> \
             /Contents {contents} 0 R >>"
        )
        .as_bytes(),
    );
    writer.write_stream(&content_stream(lines));

    writer.finish(catalog)
}
