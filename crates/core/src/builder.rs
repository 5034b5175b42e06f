//! Deck builder: layout helpers that place branded blocks on slides.
//!
//! Each slide is produced by the same recipe: background, section label,
//! title, then one or more content blocks (cards, bullet lists, tables).

use crate::color::{Palette, Rgb};
use crate::error::Result;
use crate::table::{CellMargins, Table};
use crate::text::{Align, Anchor, Font, Paragraph, TextFrame};
use crate::types::{Deck, Geometry, ShapeKind, Slide};
use crate::units::{Emu, Rect};

/// Decorative ellipse bleeding off the top-left corner.
const ACCENT_ELLIPSE: (f64, f64, f64, f64) = (-1.2, -1.2, 4.5, 4.5);
const ACCENT_ROTATION: f64 = 15.0;

const SECTION_LABEL_FRAME: (f64, f64, f64, f64) = (0.6, 0.3, 2.5, 0.4);
const SECTION_LABEL_SIZE: f64 = 12.0;

const TITLE_FRAME: (f64, f64, f64, f64) = (0.6, 0.5, 9.0, 1.5);
const TITLE_SIZE: f64 = 44.0;
const SUBTITLE_SIZE: f64 = 20.0;

const CARD_ICON_SIZE: f64 = 26.0;
const CARD_TITLE_SIZE: f64 = 16.0;
const CARD_VALUE_SIZE: f64 = 24.0;
const CARD_CAPTION_SIZE: f64 = 13.0;

/// Default bullet font size in points.
pub const BULLET_SIZE: f64 = 18.0;

const TABLE_HEADER_SIZE: f64 = 13.0;
const TABLE_BODY_SIZE: f64 = 12.0;

fn frame((left, top, width, height): (f64, f64, f64, f64)) -> Rect {
    Rect::inches(left, top, width, height)
}

/// Content of an icon card.
#[derive(Debug, Clone, Copy)]
pub struct Card<'a> {
    pub icon: &'a str,
    pub title: &'a str,
    pub value: &'a str,
    pub caption: &'a str,
    /// Outline and icon color. Defaults to the palette's secondary color.
    pub accent: Option<Rgb>,
}

/// Fills and widths for [`SlideBuilder::add_table`].
#[derive(Debug, Clone, Default)]
pub struct TableStyle {
    pub header_fill: Option<Rgb>,
    /// Fill for odd body rows; even body rows are white.
    pub body_fill: Option<Rgb>,
    /// Explicit column widths; an equal split when `None`.
    pub column_widths: Option<Vec<Emu>>,
}

impl TableStyle {
    pub fn filled(header: Rgb, body: Rgb) -> Self {
        Self {
            header_fill: Some(header),
            body_fill: Some(body),
            column_widths: None,
        }
    }
}

/// Owns the deck under construction.
#[derive(Debug)]
pub struct DeckBuilder {
    deck: Deck,
    palette: Palette,
}

impl DeckBuilder {
    /// Start a new deck with the default palette.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            deck: Deck::new(title),
            palette: Palette::default(),
        }
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Append a blank slide and return a builder for it.
    pub fn add_slide(&mut self) -> SlideBuilder<'_> {
        let slide = self.deck.add_slide();
        log::debug!("Building slide {}", slide.number);
        SlideBuilder {
            slide,
            palette: &self.palette,
        }
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Finish construction and hand over the deck.
    pub fn finish(self) -> Deck {
        self.deck
    }
}

/// Places blocks on one slide.
pub struct SlideBuilder<'a> {
    slide: &'a mut Slide,
    palette: &'a Palette,
}

impl SlideBuilder<'_> {
    /// Paint the solid background and the rotated accent ellipse.
    pub fn add_background(&mut self) -> &mut Self {
        self.slide.background = Some(self.palette.background);

        let accent = self.palette.secondary;
        let ellipse = self.slide.add_shape(
            ShapeKind::AutoShape(Geometry::Ellipse),
            frame(ACCENT_ELLIPSE),
        );
        ellipse.fill = Some(accent);
        ellipse.line = Some(accent);
        ellipse.shadow = false;
        ellipse.rotation = ACCENT_ROTATION;
        self
    }

    /// Small upper-case label in the top-left corner.
    pub fn add_section_label(&mut self, text: &str) -> &mut Self {
        let font = Font::new(SECTION_LABEL_SIZE, self.palette.secondary).bold();
        let label = self
            .slide
            .add_shape(ShapeKind::TextBox, frame(SECTION_LABEL_FRAME));
        label.text = Some(TextFrame::new().with_paragraph(Paragraph::new(text.to_uppercase(), font)));
        self
    }

    /// Large bold title with an optional subtitle paragraph.
    ///
    /// An empty subtitle is treated as absent.
    pub fn add_title(&mut self, title: &str, subtitle: Option<&str>) -> &mut Self {
        let mut text = TextFrame::new().with_paragraph(Paragraph::new(
            title,
            Font::new(TITLE_SIZE, self.palette.primary).bold(),
        ));
        if let Some(subtitle) = subtitle.filter(|s| !s.is_empty()) {
            text.add_paragraph(Paragraph::new(
                subtitle,
                Font::new(SUBTITLE_SIZE, self.palette.subtitle),
            ));
        }

        self.slide
            .add_shape(ShapeKind::TextBox, frame(TITLE_FRAME))
            .text = Some(text);
        self
    }

    /// Rounded card with icon, title, value and caption stacked.
    ///
    /// Only the icon line is centered; the rest keep the default alignment.
    pub fn add_icon_card(&mut self, rect: Rect, card: &Card<'_>) -> &mut Self {
        let accent = card.accent.unwrap_or(self.palette.secondary);
        let palette = self.palette;

        let text = TextFrame {
            paragraphs: vec![
                Paragraph::new(card.icon, Font::new(CARD_ICON_SIZE, accent)).aligned(Align::Center),
                Paragraph::new(card.title, Font::new(CARD_TITLE_SIZE, palette.primary).bold()),
                Paragraph::new(card.value, Font::new(CARD_VALUE_SIZE, Rgb::BLACK).bold()),
                Paragraph::new(card.caption, Font::new(CARD_CAPTION_SIZE, palette.text)),
            ],
            word_wrap: true,
            anchor: Some(Anchor::Middle),
        };

        let shape = self
            .slide
            .add_shape(ShapeKind::AutoShape(Geometry::RoundedRectangle), rect);
        shape.fill = Some(Rgb::WHITE);
        shape.line = Some(accent);
        shape.shadow = true;
        shape.text = Some(text);
        self
    }

    /// Word-wrapped text box with one paragraph per item, at [`BULLET_SIZE`].
    pub fn add_bullets<S: AsRef<str>>(&mut self, rect: Rect, items: &[S]) -> &mut Self {
        self.add_bullets_sized(rect, items, BULLET_SIZE)
    }

    /// Like [`add_bullets`](Self::add_bullets) with an explicit font size.
    pub fn add_bullets_sized<S: AsRef<str>>(
        &mut self,
        rect: Rect,
        items: &[S],
        size: f64,
    ) -> &mut Self {
        let font = Font::new(size, self.palette.text);
        let text = TextFrame {
            paragraphs: items
                .iter()
                .map(|item| Paragraph::new(item.as_ref(), font))
                .collect(),
            word_wrap: true,
            anchor: None,
        };

        self.slide.add_shape(ShapeKind::TextBox, rect).text = Some(text);
        self
    }

    /// Table from a rectangular grid of strings. Row 0 is styled as header.
    pub fn add_table<R, S>(&mut self, rect: Rect, grid: &[R], style: &TableStyle) -> Result<&mut Self>
    where
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        let (rows, cols) = Table::grid_dimensions(grid)?;
        let mut table = Table::new(rows, cols, rect)?;
        if let Some(ref widths) = style.column_widths {
            table.set_column_widths(widths)?;
        }

        for (r, (source, row)) in grid.iter().zip(table.rows.iter_mut()).enumerate() {
            let header = r == 0;
            let font = if header {
                Font::new(TABLE_HEADER_SIZE, self.palette.primary).bold()
            } else {
                Font::new(TABLE_BODY_SIZE, self.palette.text)
            };
            let fill = if header {
                style.header_fill
            } else {
                style
                    .body_fill
                    .map(|body| if r % 2 == 1 { body } else { Rgb::WHITE })
            };

            for (value, cell) in source.as_ref().iter().zip(row.cells.iter_mut()) {
                cell.text = TextFrame {
                    paragraphs: vec![Paragraph::new(value.as_ref(), font).aligned(Align::Left)],
                    word_wrap: true,
                    anchor: Some(Anchor::Middle),
                };
                cell.fill = fill;
                cell.margins = CellMargins::compact();
            }
        }

        let frame = Rect {
            width: table.width(),
            ..rect
        };
        log::debug!(
            "Slide {}: table {}x{} at ({}, {})",
            self.slide.number,
            rows,
            cols,
            frame.left.get(),
            frame.top.get()
        );
        self.slide.add_shape(ShapeKind::Table(table), frame);
        Ok(self)
    }

    pub fn slide(&self) -> &Slide {
        &*self.slide
    }
}
