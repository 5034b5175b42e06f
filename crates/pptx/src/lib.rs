//! PPTX (Office Open XML) backend: writes decks as .pptx packages and
//! reads their text back.
//!
//! A .pptx file is a ZIP archive of XML parts.

mod parts;
pub mod parser;
mod slide;
pub mod writer;

pub use parser::PptxParser;
pub use writer::PptxWriter;
