//! Document model, layout helpers and extracted-content types for
//! generating PowerPoint decks.

pub mod builder;
pub mod color;
pub mod error;
pub mod extract;
pub mod table;
pub mod text;
pub mod types;
pub mod units;

pub use builder::{Card, DeckBuilder, SlideBuilder, TableStyle};
pub use color::{Palette, Rgb};
pub use error::{Error, Result};
pub use extract::{ExtractedCell, ExtractedDeck, ExtractedSlide, ExtractedTable, SlideText};
pub use table::{CellMargins, Table, TableCell, TableRow};
pub use text::{Align, Anchor, Font, Paragraph, Run, TextFrame};
pub use types::{Deck, Geometry, Shape, ShapeKind, Slide};
pub use units::{inches, Emu, Rect};
