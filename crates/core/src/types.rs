//! Document model for a generated presentation.

use crate::color::Rgb;
use crate::table::Table;
use crate::text::TextFrame;
use crate::units::{inches, Emu, Rect};
use serde::{Deserialize, Serialize};

/// An entire presentation: an ordered sequence of slides.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deck {
    /// Document title, written to the core properties.
    pub title: String,

    /// Language tag applied to every text run.
    pub language: String,

    pub slide_width: Emu,
    pub slide_height: Emu,

    /// Slides in presentation order.
    pub slides: Vec<Slide>,
}

impl Deck {
    /// Create an empty 10" x 7.5" deck.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            language: "pt-BR".to_string(),
            slide_width: inches(10.0),
            slide_height: inches(7.5),
            slides: Vec::new(),
        }
    }

    /// Append a blank slide and return it.
    pub fn add_slide(&mut self) -> &mut Slide {
        let number = self.slides.len() + 1;
        self.slides.push(Slide::new(number));
        let last = self.slides.len() - 1;
        &mut self.slides[last]
    }

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// All text lines of all slides, flattened.
    pub fn all_lines(&self) -> Vec<String> {
        self.slides.iter().flat_map(Slide::text_lines).collect()
    }
}

/// One page of the deck.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Slide {
    /// 1-based slide number.
    pub number: usize,

    /// Solid background fill. `None` follows the master.
    pub background: Option<Rgb>,

    /// Shapes in z-order (first is bottom-most).
    pub shapes: Vec<Shape>,
}

impl Slide {
    pub fn new(number: usize) -> Self {
        Self {
            number,
            background: None,
            shapes: Vec::new(),
        }
    }

    /// Add a shape and return it for further styling.
    ///
    /// Shape ids start at 2; id 1 is the slide's root group.
    pub fn add_shape(&mut self, kind: ShapeKind, frame: Rect) -> &mut Shape {
        let id = self.shapes.len() as u32 + 2;
        let name = format!("{} {}", kind.base_name(), id - 1);
        self.shapes.push(Shape {
            id,
            name,
            kind,
            frame,
            rotation: 0.0,
            fill: None,
            line: None,
            shadow: true,
            text: None,
        });
        let last = self.shapes.len() - 1;
        &mut self.shapes[last]
    }

    /// Tables on this slide, in z-order.
    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.shapes.iter().filter_map(|s| match &s.kind {
            ShapeKind::Table(table) => Some(table),
            _ => None,
        })
    }

    /// Text of this slide, one line per paragraph; table cells row-major.
    pub fn text_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        for shape in &self.shapes {
            if let Some(ref text) = shape.text {
                lines.extend(text.lines());
            }
            if let ShapeKind::Table(ref table) = shape.kind {
                for row in &table.rows {
                    for cell in &row.cells {
                        lines.extend(cell.text.lines());
                    }
                }
            }
        }
        lines
    }
}

/// DrawingML preset geometries used by the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Geometry {
    Rectangle,
    RoundedRectangle,
    Ellipse,
}

impl Geometry {
    /// Value of `a:prstGeom/@prst`.
    pub fn preset(self) -> &'static str {
        match self {
            Self::Rectangle => "rect",
            Self::RoundedRectangle => "roundRect",
            Self::Ellipse => "ellipse",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ShapeKind {
    TextBox,
    AutoShape(Geometry),
    Table(Table),
}

impl ShapeKind {
    /// Prefix of the shape's display name.
    fn base_name(&self) -> &'static str {
        match self {
            Self::TextBox => "TextBox",
            Self::AutoShape(Geometry::Rectangle) => "Rectangle",
            Self::AutoShape(Geometry::RoundedRectangle) => "Rounded Rectangle",
            Self::AutoShape(Geometry::Ellipse) => "Oval",
            Self::Table(_) => "Table",
        }
    }
}

/// A positioned element on a slide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    pub id: u32,
    pub name: String,
    pub kind: ShapeKind,
    pub frame: Rect,

    /// Clockwise rotation in degrees.
    pub rotation: f64,

    pub fill: Option<Rgb>,
    pub line: Option<Rgb>,

    /// Inherit the theme's shadow effect. `false` writes an empty effect list.
    pub shadow: bool,

    pub text: Option<TextFrame>,
}

impl Shape {
    pub fn is_table(&self) -> bool {
        matches!(self.kind, ShapeKind::Table(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::{Font, Paragraph};

    #[test]
    fn test_slides_numbered_in_order() {
        let mut deck = Deck::new("Test");
        deck.add_slide();
        deck.add_slide();
        assert_eq!(deck.slide_count(), 2);
        assert_eq!(deck.slides[0].number, 1);
        assert_eq!(deck.slides[1].number, 2);
    }

    #[test]
    fn test_default_slide_size() {
        let deck = Deck::new("Test");
        assert_eq!(deck.slide_width, Emu(9_144_000));
        assert_eq!(deck.slide_height, Emu(6_858_000));
    }

    #[test]
    fn test_shape_ids_and_names() {
        let mut slide = Slide::new(1);
        slide.add_shape(ShapeKind::AutoShape(Geometry::Ellipse), Rect::default());
        slide.add_shape(ShapeKind::TextBox, Rect::default());
        assert_eq!(slide.shapes[0].id, 2);
        assert_eq!(slide.shapes[0].name, "Oval 1");
        assert_eq!(slide.shapes[1].id, 3);
        assert_eq!(slide.shapes[1].name, "TextBox 2");
    }

    #[test]
    fn test_text_lines_include_tables() {
        let mut slide = Slide::new(1);
        slide.add_shape(ShapeKind::TextBox, Rect::default()).text = Some(
            TextFrame::new().with_paragraph(Paragraph::new("Title", Font::default())),
        );
        let mut table = Table::new(1, 2, Rect::inches(0.0, 0.0, 2.0, 1.0)).unwrap();
        for (col, text) in ["A", "B"].iter().enumerate() {
            table.cell_mut(0, col).unwrap().text =
                TextFrame::new().with_paragraph(Paragraph::new(*text, Font::default()));
        }
        slide.add_shape(ShapeKind::Table(table), Rect::default());

        assert_eq!(slide.text_lines(), vec!["Title", "A", "B"]);
        assert_eq!(slide.tables().count(), 1);
        assert!(slide.shapes[1].is_table());
    }
}
