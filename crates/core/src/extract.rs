//! Content extracted from a saved presentation.
//!
//! The reader in `deck-pptx` produces these types from a .pptx file, and
//! [`ExtractedDeck::from_deck`] produces them from the in-memory model, so
//! the two can be compared directly.

use crate::color::Rgb;
use crate::types::{Deck, ShapeKind, Slide};
use serde::{Deserialize, Serialize};

/// Text and tables of an entire presentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedDeck {
    /// Source filename (without path).
    pub filename: String,

    /// Slides in presentation order.
    pub slides: Vec<ExtractedSlide>,
}

impl ExtractedDeck {
    pub fn new(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            slides: Vec::new(),
        }
    }

    /// Extract the content a reader would find in `deck` once saved.
    ///
    /// Slides are numbered by position, as they are when written.
    pub fn from_deck(deck: &Deck, filename: impl Into<String>) -> Self {
        let mut extracted = Self::new(filename);
        for (idx, slide) in deck.slides.iter().enumerate() {
            extracted.add_slide(ExtractedSlide::from_slide(slide, idx + 1));
        }
        extracted
    }

    pub fn add_slide(&mut self, slide: ExtractedSlide) {
        self.slides.push(slide);
    }

    /// All text from all slides, flattened: shape text, then table cells.
    pub fn all_lines(&self) -> Vec<&str> {
        self.slides.iter().flat_map(|s| s.all_lines()).collect()
    }
}

/// A single extracted slide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedSlide {
    /// 1-based slide number.
    pub number: usize,

    /// Text of each text-bearing shape, in reading order.
    pub lines: Vec<SlideText>,

    /// Tables in document order.
    pub tables: Vec<ExtractedTable>,
}

impl ExtractedSlide {
    pub fn new(number: usize) -> Self {
        Self {
            number,
            lines: Vec::new(),
            tables: Vec::new(),
        }
    }

    fn from_slide(slide: &Slide, number: usize) -> Self {
        let mut extracted = Self::new(number);
        for shape in &slide.shapes {
            if let Some(ref text) = shape.text {
                let joined = text.lines().join("\n");
                let joined = joined.trim();
                if !joined.is_empty() {
                    extracted.add_line_with_position(joined, shape.frame.top.get(), shape.frame.left.get());
                }
            }
            if let ShapeKind::Table(ref table) = shape.kind {
                let rows = table
                    .rows
                    .iter()
                    .map(|row| {
                        row.cells
                            .iter()
                            .map(|cell| {
                                let first = cell.text.paragraphs.first().and_then(|p| p.runs.first());
                                ExtractedCell {
                                    text: cell.text.lines().join("\n").trim().to_string(),
                                    bold: first.map(|r| r.font.bold).unwrap_or(false),
                                    color: first.and_then(|r| r.font.color),
                                }
                            })
                            .collect()
                    })
                    .collect();
                extracted.tables.push(ExtractedTable { rows });
            }
        }
        extracted.sort_by_position();
        extracted
    }

    /// Add a text line with position information.
    pub fn add_line_with_position(&mut self, text: impl Into<String>, y: i64, x: i64) {
        self.lines.push(SlideText::with_position(text, y, x));
    }

    /// Sort lines by position (top-to-bottom, then left-to-right).
    ///
    /// The sort is stable, so shapes at the same offset keep z-order.
    pub fn sort_by_position(&mut self) {
        self.lines
            .sort_by_key(|l| (l.y_position.unwrap_or(i64::MAX), l.x_position.unwrap_or(i64::MAX)));
    }

    /// Shape text followed by table cell text, row-major.
    pub fn all_lines(&self) -> Vec<&str> {
        let shapes = self.lines.iter().map(|l| l.text.as_str());
        let cells = self
            .tables
            .iter()
            .flat_map(|t| t.rows.iter().flatten().map(|c| c.text.as_str()));
        shapes.chain(cells).collect()
    }
}

/// Text content from a shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlideText {
    /// Paragraphs of the shape joined by newlines.
    pub text: String,

    /// Y offset in EMU. None if unknown.
    pub y_position: Option<i64>,

    /// X offset in EMU. None if unknown.
    pub x_position: Option<i64>,
}

impl SlideText {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            y_position: None,
            x_position: None,
        }
    }

    pub fn with_position(text: impl Into<String>, y: i64, x: i64) -> Self {
        Self {
            text: text.into(),
            y_position: Some(y),
            x_position: Some(x),
        }
    }
}

/// A table read back from a slide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedTable {
    pub rows: Vec<Vec<ExtractedCell>>,
}

impl ExtractedTable {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.rows.first().map(Vec::len).unwrap_or(0)
    }

    pub fn header(&self) -> &[ExtractedCell] {
        self.rows.first().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn body(&self) -> &[Vec<ExtractedCell>] {
        self.rows.get(1..).unwrap_or(&[])
    }
}

/// Text and leading-run style of one table cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedCell {
    pub text: String,
    pub bold: bool,
    pub color: Option<Rgb>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{DeckBuilder, TableStyle};
    use crate::units::Rect;

    #[test]
    fn test_sort_by_position() {
        let mut slide = ExtractedSlide::new(1);
        slide.add_line_with_position("bottom", 200, 0);
        slide.add_line_with_position("right", 100, 50);
        slide.add_line_with_position("left", 100, 10);
        slide.sort_by_position();
        let texts: Vec<_> = slide.lines.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, vec!["left", "right", "bottom"]);
    }

    #[test]
    fn test_from_deck() {
        let mut builder = DeckBuilder::new("Test");
        builder
            .add_slide()
            .add_background()
            .add_section_label("escala")
            .add_title("Projeção", Some("Sub"))
            .add_table(
                Rect::inches(0.4, 1.9, 9.6, 3.8),
                &[["H1", "H2"], ["a", "b"]],
                &TableStyle::default(),
            )
            .unwrap();
        let deck = builder.finish();

        let extracted = ExtractedDeck::from_deck(&deck, "test.pptx");
        assert_eq!(extracted.slides.len(), 1);
        let slide = &extracted.slides[0];
        // the ellipse has no text and is skipped
        assert_eq!(slide.lines.len(), 2);
        assert_eq!(slide.lines[0].text, "ESCALA");
        assert_eq!(slide.lines[1].text, "Projeção\nSub");

        let table = &slide.tables[0];
        assert_eq!((table.row_count(), table.column_count()), (2, 2));
        assert!(table.header().iter().all(|c| c.bold));
        assert!(table.body().iter().flatten().all(|c| !c.bold));
        assert_eq!(
            extracted.all_lines(),
            vec!["ESCALA", "Projeção\nSub", "H1", "H2", "a", "b"]
        );
    }
}
