//! Text frames, paragraphs and runs.

use crate::color::Rgb;
use serde::{Deserialize, Serialize};

/// Character formatting for a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Font {
    /// Size in points. `None` inherits from the master.
    pub size: Option<f64>,
    pub bold: bool,
    pub color: Option<Rgb>,
}

impl Font {
    pub fn new(size: f64, color: Rgb) -> Self {
        Self {
            size: Some(size),
            bold: false,
            color: Some(color),
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

/// A span of text sharing one font.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Run {
    pub text: String,
    pub font: Font,
}

/// Horizontal paragraph alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Align {
    Left,
    Center,
    Right,
}

impl Align {
    /// Value of `a:pPr/@algn`.
    pub fn as_ooxml(self) -> &'static str {
        match self {
            Self::Left => "l",
            Self::Center => "ctr",
            Self::Right => "r",
        }
    }
}

/// Vertical placement of text inside its frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Anchor {
    Top,
    Middle,
    Bottom,
}

impl Anchor {
    /// Value of `a:bodyPr/@anchor` and `a:tcPr/@anchor`.
    pub fn as_ooxml(self) -> &'static str {
        match self {
            Self::Top => "t",
            Self::Middle => "ctr",
            Self::Bottom => "b",
        }
    }
}

/// One paragraph of a text frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    pub runs: Vec<Run>,
    pub align: Option<Align>,
    /// Outline level (0-8).
    pub level: u8,
}

impl Paragraph {
    /// A paragraph holding a single run.
    pub fn new(text: impl Into<String>, font: Font) -> Self {
        Self {
            runs: vec![Run {
                text: text.into(),
                font,
            }],
            align: None,
            level: 0,
        }
    }

    pub fn aligned(mut self, align: Align) -> Self {
        self.align = Some(align);
        self
    }

    /// Concatenated text of all runs.
    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }
}

/// The text body of a shape or table cell.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextFrame {
    pub paragraphs: Vec<Paragraph>,
    /// Wrap lines at the frame edge. Text boxes default to no wrapping.
    pub word_wrap: bool,
    pub anchor: Option<Anchor>,
}

impl TextFrame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_paragraph(mut self, paragraph: Paragraph) -> Self {
        self.paragraphs.push(paragraph);
        self
    }

    pub fn add_paragraph(&mut self, paragraph: Paragraph) {
        self.paragraphs.push(paragraph);
    }

    /// Paragraph texts, one line each.
    pub fn lines(&self) -> Vec<String> {
        self.paragraphs.iter().map(Paragraph::text).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraph_text_joins_runs() {
        let mut p = Paragraph::new("R$ ", Font::default());
        p.runs.push(Run {
            text: "249".to_string(),
            font: Font::default().bold(),
        });
        assert_eq!(p.text(), "R$ 249");
    }

    #[test]
    fn test_frame_lines() {
        let frame = TextFrame::new()
            .with_paragraph(Paragraph::new("one", Font::default()))
            .with_paragraph(Paragraph::new("two", Font::default()).aligned(Align::Center));
        assert_eq!(frame.lines(), vec!["one", "two"]);
        assert_eq!(frame.paragraphs[1].align, Some(Align::Center));
    }
}
