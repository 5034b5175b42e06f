//! PPTX package writer.

use crate::parts;
use crate::slide::slide_xml;
use deck_core::{Deck, Error, Result};
use std::fs::File;
use std::io::{BufWriter, Cursor, Seek, Write};
use std::path::Path;
use zip::result::ZipError;
use zip::write::FileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

/// Writer for PPTX (Office Open XML) files.
pub struct PptxWriter;

impl PptxWriter {
    /// Create a new PPTX writer.
    pub fn new() -> Self {
        Self
    }

    /// Serialize `deck` as a .pptx package into `sink`, returning the sink.
    ///
    /// Parts are written in a fixed order with a fixed timestamp, so the
    /// same deck always produces the same bytes. Slide parts are numbered
    /// by position in `deck.slides`; the stored `Slide::number` is ignored.
    pub fn write<W: Write + Seek>(&self, deck: &Deck, sink: W) -> Result<W> {
        let mut zip = ZipWriter::new(sink);

        add_part(&mut zip, parts::CONTENT_TYPES_PATH, &parts::content_types_xml(deck.slide_count())?)?;
        add_part(&mut zip, parts::ROOT_RELS_PATH, &parts::root_rels_xml()?)?;
        add_part(&mut zip, parts::APP_PROPS_PATH, &parts::app_props_xml(deck)?)?;
        add_part(&mut zip, parts::CORE_PROPS_PATH, &parts::core_props_xml(deck)?)?;
        add_part(&mut zip, parts::PRESENTATION_PATH, &parts::presentation_xml(deck)?)?;
        add_part(
            &mut zip,
            parts::PRESENTATION_RELS_PATH,
            &parts::presentation_rels_xml(deck.slide_count())?,
        )?;
        add_part(&mut zip, parts::PRES_PROPS_PATH, parts::PRES_PROPS_XML)?;
        add_part(&mut zip, parts::VIEW_PROPS_PATH, parts::VIEW_PROPS_XML)?;
        add_part(&mut zip, parts::TABLE_STYLES_PATH, parts::TABLE_STYLES_XML)?;
        add_part(&mut zip, parts::THEME_PATH, parts::THEME_XML)?;
        add_part(&mut zip, parts::MASTER_PATH, parts::SLIDE_MASTER_XML)?;
        add_part(&mut zip, parts::MASTER_RELS_PATH, &parts::master_rels_xml()?)?;
        add_part(&mut zip, parts::LAYOUT_PATH, parts::SLIDE_LAYOUT_XML)?;
        add_part(&mut zip, parts::LAYOUT_RELS_PATH, &parts::layout_rels_xml()?)?;

        let slide_rels = parts::slide_rels_xml()?;
        for (idx, slide) in deck.slides.iter().enumerate() {
            let number = idx + 1;
            log::debug!("Writing slide {} ({} shapes)", number, slide.shapes.len());
            add_part(&mut zip, &parts::slide_path(number), &slide_xml(slide, &deck.language)?)?;
            add_part(&mut zip, &parts::slide_rels_path(number), &slide_rels)?;
        }

        zip.finish().map_err(zip_error)
    }

    /// Serialize `deck` into an in-memory buffer.
    pub fn to_bytes(&self, deck: &Deck) -> Result<Vec<u8>> {
        Ok(self.write(deck, Cursor::new(Vec::new()))?.into_inner())
    }

    /// Write `deck` to `path`, replacing any existing file.
    ///
    /// The parent directory must already exist.
    pub fn save(&self, deck: &Deck, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path)?;
        let mut out = self.write(deck, BufWriter::new(file))?;
        out.flush()?;

        log::info!(
            "Saved {} slides to {}",
            deck.slide_count(),
            path.display()
        );
        Ok(())
    }
}

impl Default for PptxWriter {
    fn default() -> Self {
        Self::new()
    }
}

fn add_part<W: Write + Seek>(zip: &mut ZipWriter<W>, name: &str, content: &str) -> Result<()> {
    let options = FileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .last_modified_time(DateTime::default());

    zip.start_file(name, options).map_err(zip_error)?;
    zip.write_all(content.as_bytes())?;
    Ok(())
}

/// I/O failures stay I/O errors; everything else is a ZIP error.
fn zip_error(e: ZipError) -> Error {
    match e {
        ZipError::Io(io) => Error::IoError(io),
        other => Error::ZipError(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PptxParser;
    use deck_core::{DeckBuilder, ExtractedDeck};
    use std::io::Read;
    use zip::ZipArchive;

    fn sample_deck() -> Deck {
        let mut builder = DeckBuilder::new("Sample");
        builder
            .add_slide()
            .add_background()
            .add_section_label("snapshot")
            .add_title("Visão Rápida", None);
        builder.add_slide().add_bullets(deck_core::Rect::inches(0.7, 1.8, 9.5, 3.6), &["a", "b"]);
        builder.finish()
    }

    #[test]
    fn test_package_contains_required_parts() {
        let bytes = PptxWriter::new().to_bytes(&sample_deck()).unwrap();
        let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();

        for name in [
            "[Content_Types].xml",
            "_rels/.rels",
            "ppt/presentation.xml",
            "ppt/_rels/presentation.xml.rels",
            "ppt/slideMasters/slideMaster1.xml",
            "ppt/slideLayouts/slideLayout1.xml",
            "ppt/theme/theme1.xml",
            "ppt/slides/slide1.xml",
            "ppt/slides/slide2.xml",
            "ppt/slides/_rels/slide2.xml.rels",
            "docProps/core.xml",
        ] {
            assert!(archive.by_name(name).is_ok(), "missing part {}", name);
        }
        assert!(archive.by_name("ppt/slides/slide3.xml").is_err());

        let mut content_types = String::new();
        archive
            .by_name("[Content_Types].xml")
            .unwrap()
            .read_to_string(&mut content_types)
            .unwrap();
        assert!(content_types.contains("/ppt/slides/slide2.xml"));
    }

    #[test]
    fn test_slides_are_numbered_by_position() {
        let mut deck = sample_deck();
        deck.slides.remove(0);
        assert_eq!(deck.slides[0].number, 2);

        let bytes = PptxWriter::new().to_bytes(&deck).unwrap();
        let mut archive = ZipArchive::new(Cursor::new(bytes.clone())).unwrap();
        assert!(archive.by_name("ppt/slides/slide1.xml").is_ok());
        assert!(archive.by_name("ppt/slides/slide2.xml").is_err());

        let parsed = PptxParser::new().parse(Cursor::new(bytes), "deck.pptx").unwrap();
        assert_eq!(parsed.slides.len(), 1);
        assert_eq!(parsed.slides[0].number, 1);
        assert_eq!(parsed, ExtractedDeck::from_deck(&deck, "deck.pptx"));
    }

    #[test]
    fn test_output_is_deterministic() {
        let writer = PptxWriter::new();
        let first = writer.to_bytes(&sample_deck()).unwrap();
        let second = writer.to_bytes(&sample_deck()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_save_and_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deck.pptx");
        std::fs::write(&path, b"stale").unwrap();

        PptxWriter::new().save(&sample_deck(), &path).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"PK\x03\x04"));
    }

    #[test]
    fn test_save_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("deck.pptx");

        let err = PptxWriter::new().save(&sample_deck(), &path).unwrap_err();
        match err {
            Error::IoError(io) => assert_eq!(io.kind(), std::io::ErrorKind::NotFound),
            other => panic!("expected I/O error, got {:?}", other),
        }
        assert!(!path.exists());
    }
}
