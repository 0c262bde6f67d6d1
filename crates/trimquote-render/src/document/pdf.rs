//! Minimal PDF 1.4 writer
//!
//! Emits text runs and horizontal rules using the two standard Helvetica
//! faces, so no fonts are embedded. Text is encoded as WinAnsi.

use std::io::Write;
use trimquote_common::RenderError;

/// US Letter, in points
pub const PAGE_WIDTH: f32 = 612.0;
pub const PAGE_HEIGHT: f32 = 792.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Font {
    Regular,
    Bold,
}

// Standard AFM advance widths for ' '..='~', in 1/1000 em
#[rustfmt::skip]
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

// Upper bound used for anything outside printable ASCII
const WIDE_GLYPH: u16 = 1000;

impl Font {
    fn resource_name(&self) -> &'static str {
        match self {
            Font::Regular => "F1",
            Font::Bold => "F2",
        }
    }

    /// Advance width of `text` set at `size`, in points
    pub fn text_width(&self, text: &str, size: f32) -> f32 {
        let widths = match self {
            Font::Regular => &HELVETICA_WIDTHS,
            Font::Bold => &HELVETICA_BOLD_WIDTHS,
        };
        let units: u32 = text
            .chars()
            .map(|ch| match ch {
                ' '..='~' => u32::from(widths[ch as usize - 32]),
                _ => u32::from(WIDE_GLYPH),
            })
            .sum();
        units as f32 * size / 1000.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    Text {
        font: Font,
        size: f32,
        x: f32,
        y: f32,
        text: String,
    },
    Rule {
        x1: f32,
        x2: f32,
        y: f32,
    },
}

/// Drawing operations for one page
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub ops: Vec<Op>,
}

impl Page {
    fn content_stream(&self) -> Vec<u8> {
        let mut out = Vec::new();
        for op in &self.ops {
            match op {
                Op::Text {
                    font,
                    size,
                    x,
                    y,
                    text,
                } => {
                    out.extend_from_slice(
                        format!(
                            "BT /{} {:.1} Tf {:.2} {:.2} Td (",
                            font.resource_name(),
                            size,
                            x,
                            y
                        )
                        .as_bytes(),
                    );
                    out.extend(encode_text(text));
                    out.extend_from_slice(b") Tj ET\n");
                }
                Op::Rule { x1, x2, y } => {
                    out.extend_from_slice(
                        format!("0.75 w {:.2} {:.2} m {:.2} {:.2} l S\n", x1, y, x2, y).as_bytes(),
                    );
                }
            }
        }
        out
    }
}

/// Map a char to its WinAnsi byte, `?` when there is none
fn win_ansi(ch: char) -> u8 {
    match ch {
        '\u{20}'..='\u{7e}' => ch as u8,
        '\u{a0}'..='\u{ff}' => ch as u32 as u8,
        '€' => 0x80,
        '‘' => 0x91,
        '’' => 0x92,
        '“' => 0x93,
        '”' => 0x94,
        '•' => 0x95,
        '–' => 0x96,
        '—' => 0x97,
        _ => b'?',
    }
}

/// Encode a string as the body of a PDF literal string
pub fn encode_text(text: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(text.len());
    for ch in text.chars() {
        let byte = win_ansi(ch);
        if matches!(byte, b'(' | b')' | b'\\') {
            out.push(b'\\');
        }
        out.push(byte);
    }
    out
}

/// Serialize pages into a complete PDF file
pub fn write_pdf(pages: &[Page], title: &str) -> Result<Vec<u8>, RenderError> {
    if pages.is_empty() {
        return Err(RenderError::Document("document has no pages".to_string()));
    }

    // 1 catalog, 2 page tree, 3-4 fonts, 5 info, then (page, content) pairs
    const FIRST_PAGE_ID: usize = 6;
    let page_ids: Vec<usize> = (0..pages.len()).map(|i| FIRST_PAGE_ID + i * 2).collect();
    let object_count = FIRST_PAGE_ID - 1 + pages.len() * 2;

    let mut pdf = PdfBuffer::default();
    pdf.raw(b"%PDF-1.4\n%\xe2\xe3\xcf\xd3\n")?;

    pdf.object(1, b"<< /Type /Catalog /Pages 2 0 R >>")?;

    let kids = page_ids
        .iter()
        .map(|id| format!("{} 0 R", id))
        .collect::<Vec<_>>()
        .join(" ");
    pdf.object(
        2,
        format!("<< /Type /Pages /Kids [{}] /Count {} >>", kids, pages.len()).as_bytes(),
    )?;
    pdf.object(
        3,
        b"<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica /Encoding /WinAnsiEncoding >>",
    )?;
    pdf.object(
        4,
        b"<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica-Bold /Encoding /WinAnsiEncoding >>",
    )?;

    let mut info = b"<< /Title (".to_vec();
    info.extend(encode_text(title));
    info.extend_from_slice(b") /Producer (trimquote) >>");
    pdf.object(5, &info)?;

    for (page, &page_id) in pages.iter().zip(&page_ids) {
        let content_id = page_id + 1;
        pdf.object(
            page_id,
            format!(
                "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {} {}] \
                 /Resources << /Font << /F1 3 0 R /F2 4 0 R >> >> /Contents {} 0 R >>",
                PAGE_WIDTH, PAGE_HEIGHT, content_id
            )
            .as_bytes(),
        )?;

        let stream = page.content_stream();
        let mut body = format!("<< /Length {} >>\nstream\n", stream.len()).into_bytes();
        body.extend(stream);
        body.extend_from_slice(b"endstream");
        pdf.object(content_id, &body)?;
    }

    pdf.finish(object_count)
}

/// Output buffer that records object offsets for the xref table
#[derive(Default)]
struct PdfBuffer {
    bytes: Vec<u8>,
    offsets: Vec<(usize, usize)>,
}

impl PdfBuffer {
    fn raw(&mut self, data: &[u8]) -> Result<(), RenderError> {
        self.bytes.write_all(data).map_err(io_err)
    }

    fn object(&mut self, id: usize, body: &[u8]) -> Result<(), RenderError> {
        self.offsets.push((id, self.bytes.len()));
        write!(self.bytes, "{} 0 obj\n", id).map_err(io_err)?;
        self.raw(body)?;
        self.raw(b"\nendobj\n")
    }

    fn finish(mut self, object_count: usize) -> Result<Vec<u8>, RenderError> {
        self.offsets.sort_unstable();
        let ids: Vec<usize> = self.offsets.iter().map(|(id, _)| *id).collect();
        if ids != (1..=object_count).collect::<Vec<_>>() {
            return Err(RenderError::Document(format!(
                "object ids {:?} are not contiguous",
                ids
            )));
        }

        let xref_offset = self.bytes.len();
        write!(self.bytes, "xref\n0 {}\n0000000000 65535 f \n", object_count + 1)
            .map_err(io_err)?;
        for (_, offset) in &self.offsets {
            write!(self.bytes, "{:010} 00000 n \n", offset).map_err(io_err)?;
        }
        write!(
            self.bytes,
            "trailer\n<< /Size {} /Root 1 0 R /Info 5 0 R >>\nstartxref\n{}\n%%EOF\n",
            object_count + 1,
            xref_offset
        )
        .map_err(io_err)?;
        Ok(self.bytes)
    }
}

fn io_err(err: std::io::Error) -> RenderError {
    RenderError::Document(err.to_string())
}
