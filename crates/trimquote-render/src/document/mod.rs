//! Paginated quote document
//!
//! Lays the quote sections out top to bottom on US Letter pages. A normal
//! quote fits on one page; longer content continues on the next page rather
//! than running off the bottom margin, and lines wider than the text column
//! wrap at word boundaries.

pub mod pdf;

use crate::sections::QuoteSections;
use pdf::{Font, Op, Page, PAGE_HEIGHT, PAGE_WIDTH};
use trimquote_common::RenderError;

const MARGIN: f32 = 72.0;
const BUSINESS_NAME_SIZE: f32 = 20.0;
const TITLE_SIZE: f32 = 14.0;
const BODY_SIZE: f32 = 11.0;
const SMALL_SIZE: f32 = 9.5;
const SECTION_GAP: f32 = 10.0;
const TEXT_WIDTH: f32 = PAGE_WIDTH - 2.0 * MARGIN;

/// Line height for a font size
fn leading(size: f32) -> f32 {
    size * 1.45
}

/// Split `text` into lines that fit `max_width`. Words longer than a whole
/// line are broken between characters.
fn wrap(font: Font, size: f32, text: &str, max_width: f32) -> Vec<String> {
    if font.text_width(text, size) <= max_width {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{} {}", current, word)
        };
        if font.text_width(&candidate, size) <= max_width {
            current = candidate;
            continue;
        }
        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        for ch in word.chars() {
            current.push(ch);
            if font.text_width(&current, size) > max_width && current.chars().count() > 1 {
                current.pop();
                lines.push(std::mem::replace(&mut current, ch.to_string()));
            }
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Cursor that places lines and breaks pages
struct Layout {
    pages: Vec<Page>,
    current: Page,
    y: f32,
}

impl Layout {
    fn new() -> Self {
        Self {
            pages: Vec::new(),
            current: Page::default(),
            y: PAGE_HEIGHT - MARGIN,
        }
    }

    fn ensure_room(&mut self, height: f32) {
        if self.y - height < MARGIN && !self.current.ops.is_empty() {
            let full = std::mem::take(&mut self.current);
            self.pages.push(full);
            self.y = PAGE_HEIGHT - MARGIN;
        }
    }

    fn line(&mut self, font: Font, size: f32, text: &str) {
        let height = leading(size);
        for text in wrap(font, size, text, TEXT_WIDTH) {
            self.ensure_room(height);
            self.y -= size;
            self.current.ops.push(Op::Text {
                font,
                size,
                x: MARGIN,
                y: self.y,
                text,
            });
            self.y -= height - size;
        }
    }

    fn block(&mut self, font: Font, size: f32, lines: &[String]) {
        for text in lines {
            self.line(font, size, text);
        }
    }

    fn rule(&mut self) {
        self.ensure_room(SECTION_GAP);
        self.y -= SECTION_GAP / 2.0;
        self.current.ops.push(Op::Rule {
            x1: MARGIN,
            x2: PAGE_WIDTH - MARGIN,
            y: self.y,
        });
        self.y -= SECTION_GAP / 2.0;
    }

    fn gap(&mut self) {
        self.y -= SECTION_GAP;
    }

    fn finish(mut self) -> Vec<Page> {
        if !self.current.ops.is_empty() {
            self.pages.push(self.current);
        }
        self.pages
    }
}

/// Arrange the sections into pages
pub fn layout(sections: &QuoteSections) -> Vec<Page> {
    let mut layout = Layout::new();

    if let Some((name, rest)) = sections.letterhead.split_first() {
        layout.line(Font::Bold, BUSINESS_NAME_SIZE, name);
        layout.block(Font::Regular, SMALL_SIZE, rest);
    }
    layout.rule();
    layout.gap();

    layout.line(Font::Bold, TITLE_SIZE, &sections.title);
    layout.gap();
    layout.block(Font::Regular, BODY_SIZE, &sections.client);
    layout.gap();
    layout.block(Font::Regular, BODY_SIZE, &sections.parameters);
    layout.gap();
    layout.block(Font::Regular, BODY_SIZE, &sections.items);
    layout.rule();
    layout.line(Font::Bold, BODY_SIZE, &sections.total);
    layout.gap();
    layout.gap();
    layout.block(Font::Regular, BODY_SIZE, &sections.closing);

    layout.finish()
}

/// Render the sections as PDF bytes
pub fn render(sections: &QuoteSections) -> Result<Vec<u8>, RenderError> {
    let pages = layout(sections);
    pdf::write_pdf(&pages, &sections.title)
}
