//! PPTX reader: extracts slide text and tables from a saved package.

use deck_core::{Error, ExtractedCell, ExtractedDeck, ExtractedSlide, ExtractedTable, Result, Rgb};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::collections::HashMap;
use std::io::{Read, Seek};
use zip::ZipArchive;

/// Parser for PPTX (Office Open XML) files.
pub struct PptxParser;

impl PptxParser {
    /// Create a new PPTX parser.
    pub fn new() -> Self {
        Self
    }

    /// Parse a PPTX file from a reader.
    pub fn parse<R: Read + Seek>(&self, reader: R, filename: &str) -> Result<ExtractedDeck> {
        let mut archive =
            ZipArchive::new(reader).map_err(|e| Error::ZipError(format!("Failed to open ZIP: {}", e)))?;

        let mut deck = ExtractedDeck::new(filename);

        let slide_order = self.get_slide_order(&mut archive)?;
        log::debug!("{}: {} slides", filename, slide_order.len());

        for (idx, slide_path) in slide_order.iter().enumerate() {
            let slide = self.parse_slide(&mut archive, slide_path, idx + 1)?;
            deck.add_slide(slide);
        }

        Ok(deck)
    }

    /// Ordered slide part paths.
    ///
    /// Follows `p:sldIdLst` in presentation.xml; when that list is missing,
    /// falls back to the numbering of the slide relationships.
    fn get_slide_order<R: Read + Seek>(&self, archive: &mut ZipArchive<R>) -> Result<Vec<String>> {
        let rels_content = self.read_file_from_archive(archive, "ppt/_rels/presentation.xml.rels")?;
        let targets = slide_relationships(&rels_content)?;

        let presentation = self.read_file_from_archive(archive, "ppt/presentation.xml")?;
        let listed = slide_id_list(&presentation)?;

        if !listed.is_empty() {
            return listed
                .iter()
                .map(|rel_id| {
                    targets.get(rel_id).cloned().ok_or_else(|| {
                        Error::CorruptedFile(format!("slide relationship '{}' not found", rel_id))
                    })
                })
                .collect();
        }

        let mut slides: Vec<(String, Option<usize>)> = targets
            .into_iter()
            .map(|(id, path)| {
                let order = extract_slide_number(&id).or_else(|| extract_slide_number(&path));
                (path, order)
            })
            .collect();

        slides.sort_by(|a, b| match (a.1, b.1) {
            (Some(na), Some(nb)) => na.cmp(&nb),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => a.0.cmp(&b.0),
        });

        Ok(slides.into_iter().map(|(path, _)| path).collect())
    }

    /// Parse a single slide from the archive.
    fn parse_slide<R: Read + Seek>(
        &self,
        archive: &mut ZipArchive<R>,
        slide_path: &str,
        slide_number: usize,
    ) -> Result<ExtractedSlide> {
        let content = self.read_file_from_archive(archive, slide_path)?;
        let mut slide = ExtractedSlide::new(slide_number);

        let (shapes, tables) = extract_shapes_from_xml(&content);
        for shape in shapes {
            if !shape.text.is_empty() {
                slide.add_line_with_position(shape.text, shape.y, shape.x);
            }
        }
        slide.tables = tables;

        // Sort by position (top-to-bottom, left-to-right)
        slide.sort_by_position();

        Ok(slide)
    }

    /// Read a file from the ZIP archive.
    fn read_file_from_archive<R: Read + Seek>(
        &self,
        archive: &mut ZipArchive<R>,
        path: &str,
    ) -> Result<String> {
        let mut file = archive
            .by_name(path)
            .map_err(|e| Error::ZipError(format!("File not found in archive '{}': {}", path, e)))?;

        let mut content = String::new();
        file.read_to_string(&mut content)
            .map_err(|e| Error::ZipError(format!("Failed to read '{}': {}", path, e)))?;

        Ok(content)
    }
}

impl Default for PptxParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Map of relationship id to part path for every slide relationship.
fn slide_relationships(rels_content: &str) -> Result<HashMap<String, String>> {
    let mut targets = HashMap::new();
    let mut reader = Reader::from_str(rels_content);
    reader.trim_text(true);

    loop {
        match reader.read_event() {
            Ok(Event::Empty(ref e)) | Ok(Event::Start(ref e)) if e.name().as_ref() == b"Relationship" => {
                let rel_type = attribute(e, b"Type").unwrap_or_default();
                let target = attribute(e, b"Target").unwrap_or_default();
                let id = attribute(e, b"Id").unwrap_or_default();

                if rel_type.ends_with("/slide") {
                    let full_path = match target.strip_prefix('/') {
                        Some(absolute) => absolute.to_string(),
                        None => format!("ppt/{}", target),
                    };
                    targets.insert(id, full_path);
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(Error::XmlError(format!(
                    "Error parsing relationships: {}",
                    e
                )));
            }
            _ => {}
        }
    }

    Ok(targets)
}

/// Relationship ids from `p:sldIdLst`, in presentation order.
fn slide_id_list(presentation: &str) -> Result<Vec<String>> {
    let mut ids = Vec::new();
    let mut reader = Reader::from_str(presentation);
    reader.trim_text(true);

    loop {
        match reader.read_event() {
            Ok(Event::Empty(ref e)) | Ok(Event::Start(ref e))
                if local_name(e.name().as_ref()) == b"sldId" =>
            {
                if let Some(id) = attribute(e, b"r:id") {
                    ids.push(id);
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(Error::XmlError(format!(
                    "Error parsing presentation: {}",
                    e
                )));
            }
            _ => {}
        }
    }

    Ok(ids)
}

/// Information about a text shape extracted from XML.
#[derive(Debug, Default)]
struct ShapeInfo {
    text: String,
    x: i64,
    y: i64,
    positioned: bool,
    is_table: bool,
}

/// Cell being read; style comes from the first run.
#[derive(Debug, Default)]
struct CellInfo {
    paragraphs: Vec<String>,
    bold: bool,
    color: Option<Rgb>,
    styled: bool,
}

/// Walk a slide's XML and collect text shapes and tables.
fn extract_shapes_from_xml(xml_content: &str) -> (Vec<ShapeInfo>, Vec<ExtractedTable>) {
    let mut shapes = Vec::new();
    let mut tables = Vec::new();
    // Run text keeps its edge whitespace; only the joined shape or cell
    // text is trimmed.
    let mut reader = Reader::from_str(xml_content);

    let mut current_shape: Option<ShapeInfo> = None;
    let mut paragraphs: Vec<String> = Vec::new();
    let mut current_table: Option<Vec<Vec<ExtractedCell>>> = None;
    let mut current_cell: Option<CellInfo> = None;
    let mut in_text_body = false;
    let mut in_paragraph = false;
    let mut in_run_text = false;
    let mut in_run_props = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => {
                let name = e.name();
                match local_name(name.as_ref()) {
                    b"sp" | b"pic" | b"graphicFrame" => {
                        current_shape = Some(ShapeInfo::default());
                        paragraphs.clear();
                    }
                    b"tbl" => {
                        current_table = Some(Vec::new());
                        if let Some(ref mut shape) = current_shape {
                            shape.is_table = true;
                        }
                    }
                    b"tr" => {
                        if let Some(ref mut rows) = current_table {
                            rows.push(Vec::new());
                        }
                    }
                    b"tc" => current_cell = Some(CellInfo::default()),
                    b"txBody" => in_text_body = true,
                    b"p" if in_text_body => {
                        in_paragraph = true;
                        match current_cell {
                            Some(ref mut cell) => cell.paragraphs.push(String::new()),
                            None => paragraphs.push(String::new()),
                        }
                    }
                    b"t" if in_paragraph => in_run_text = true,
                    b"rPr" => {
                        in_run_props = true;
                        read_run_props(e, current_cell.as_mut());
                    }
                    b"off" => read_offset(e, current_shape.as_mut()),
                    _ => {}
                }
            }
            Ok(Event::Empty(ref e)) => {
                let name = e.name();
                match local_name(name.as_ref()) {
                    b"off" => read_offset(e, current_shape.as_mut()),
                    b"rPr" => {
                        read_run_props(e, current_cell.as_mut());
                        if let Some(ref mut cell) = current_cell {
                            cell.styled = true;
                        }
                    }
                    b"srgbClr" if in_run_props => {
                        if let Some(ref mut cell) = current_cell {
                            if !cell.styled && cell.color.is_none() {
                                cell.color = attribute(e, b"val").and_then(|v| Rgb::from_hex(&v));
                            }
                        }
                    }
                    _ => {}
                }
            }
            Ok(Event::Text(ref e)) => {
                if in_run_text {
                    let text = e.unescape().unwrap_or_default();
                    let target = match current_cell {
                        Some(ref mut cell) => cell.paragraphs.last_mut(),
                        None => paragraphs.last_mut(),
                    };
                    if let Some(paragraph) = target {
                        paragraph.push_str(&text);
                    }
                }
            }
            Ok(Event::End(ref e)) => {
                let name = e.name();
                match local_name(name.as_ref()) {
                    b"sp" | b"pic" | b"graphicFrame" => {
                        if let Some(mut shape) = current_shape.take() {
                            if !shape.is_table {
                                shape.text = paragraphs.join("\n").trim().to_string();
                                shapes.push(shape);
                            }
                        }
                        paragraphs.clear();
                        in_text_body = false;
                        in_paragraph = false;
                    }
                    b"tbl" => {
                        if let Some(rows) = current_table.take() {
                            tables.push(ExtractedTable { rows });
                        }
                    }
                    b"tc" => {
                        if let (Some(cell), Some(rows)) = (current_cell.take(), current_table.as_mut()) {
                            if let Some(row) = rows.last_mut() {
                                row.push(ExtractedCell {
                                    text: cell.paragraphs.join("\n").trim().to_string(),
                                    bold: cell.bold,
                                    color: cell.color,
                                });
                            }
                        }
                    }
                    b"rPr" => {
                        in_run_props = false;
                        if let Some(ref mut cell) = current_cell {
                            cell.styled = true;
                        }
                    }
                    b"txBody" => in_text_body = false,
                    b"p" => in_paragraph = false,
                    b"t" => in_run_text = false,
                    _ => {}
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                log::warn!("XML parsing error (keeping shapes read so far): {}", e);
                break;
            }
            _ => {}
        }
    }

    (shapes, tables)
}

/// Record the first offset seen inside a shape.
fn read_offset(e: &BytesStart<'_>, shape: Option<&mut ShapeInfo>) {
    let Some(shape) = shape else { return };
    if shape.positioned {
        return;
    }
    let coord = |key: &[u8]| attribute(e, key).and_then(|v| v.parse::<i64>().ok());
    if let (Some(x), Some(y)) = (coord(b"x"), coord(b"y")) {
        shape.x = x;
        shape.y = y;
        shape.positioned = true;
    }
}

/// Bold flag of the first run in a cell.
fn read_run_props(e: &BytesStart<'_>, cell: Option<&mut CellInfo>) {
    let Some(cell) = cell else { return };
    if cell.styled {
        return;
    }
    cell.bold = matches!(attribute(e, b"b").as_deref(), Some("1") | Some("true"));
}

/// Value of attribute `key`, unescaped.
fn attribute(e: &BytesStart<'_>, key: &[u8]) -> Option<String> {
    e.attributes()
        .flatten()
        .find(|attr| attr.key.as_ref() == key)
        .and_then(|attr| attr.unescape_value().ok().map(|v| v.into_owned()))
}

/// Extract the local name from a potentially namespaced XML element name.
fn local_name(name: &[u8]) -> &[u8] {
    if let Some(pos) = name.iter().position(|&b| b == b':') {
        &name[pos + 1..]
    } else {
        name
    }
}

/// Extract a slide number from a string like "rId2" or "slide3.xml".
fn extract_slide_number(s: &str) -> Option<usize> {
    let s = s.trim_end_matches(".xml").trim_end_matches(".rels");

    let digits: String = s.chars().rev().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    let digits: String = digits.chars().rev().collect();
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PptxWriter;
    use deck_core::{DeckBuilder, Rect, Run, TableStyle};
    use std::io::Cursor;

    #[test]
    fn test_extract_slide_number() {
        assert_eq!(extract_slide_number("rId1"), Some(1));
        assert_eq!(extract_slide_number("rId12"), Some(12));
        assert_eq!(extract_slide_number("slide1.xml"), Some(1));
        assert_eq!(extract_slide_number("slide123.xml"), Some(123));
        assert_eq!(extract_slide_number("nodigits"), None);
    }

    #[test]
    fn test_local_name() {
        assert_eq!(local_name(b"p:sp"), b"sp");
        assert_eq!(local_name(b"a:t"), b"t");
        assert_eq!(local_name(b"sp"), b"sp");
    }

    #[test]
    fn test_slide_id_list_order() {
        let xml = r#"<p:presentation xmlns:p="p" xmlns:r="r"><p:sldIdLst>
            <p:sldId id="257" r:id="rId7"/><p:sldId id="256" r:id="rId3"/>
            </p:sldIdLst></p:presentation>"#;
        assert_eq!(slide_id_list(xml).unwrap(), vec!["rId7", "rId3"]);
    }

    #[test]
    fn test_slide_relationships_skip_layouts() {
        let xml = r#"<Relationships>
            <Relationship Id="rId1" Type="http://x/relationships/slideMaster" Target="slideMasters/slideMaster1.xml"/>
            <Relationship Id="rId2" Type="http://x/relationships/slide" Target="slides/slide1.xml"/>
            <Relationship Id="rId3" Type="http://x/relationships/slide" Target="/ppt/slides/slide2.xml"/>
            </Relationships>"#;
        let targets = slide_relationships(xml).unwrap();
        assert_eq!(targets.len(), 2);
        assert_eq!(targets["rId2"], "ppt/slides/slide1.xml");
        assert_eq!(targets["rId3"], "ppt/slides/slide2.xml");
    }

    #[test]
    fn test_table_cells_and_header_style() {
        let xml = r#"<p:sld xmlns:p="p" xmlns:a="a"><p:cSld><p:spTree>
            <p:graphicFrame><p:xfrm><a:off x="10" y="20"/></p:xfrm>
            <a:graphic><a:graphicData><a:tbl><a:tblPr><a:tableStyleId>{X}</a:tableStyleId></a:tblPr>
            <a:tr h="1"><a:tc><a:txBody><a:bodyPr/><a:p><a:r><a:rPr b="1"><a:solidFill><a:srgbClr val="191970"/></a:solidFill></a:rPr><a:t>Plano</a:t></a:r></a:p></a:txBody></a:tc></a:tr>
            <a:tr h="1"><a:tc><a:txBody><a:bodyPr/><a:p><a:r><a:rPr lang="pt-BR"/><a:t>R$ 249</a:t></a:r></a:p></a:txBody></a:tc></a:tr>
            </a:tbl></a:graphicData></a:graphic></p:graphicFrame>
            </p:spTree></p:cSld></p:sld>"#;
        let (shapes, tables) = extract_shapes_from_xml(xml);
        assert!(shapes.is_empty());
        assert_eq!(tables.len(), 1);

        let table = &tables[0];
        assert_eq!((table.row_count(), table.column_count()), (2, 1));
        assert_eq!(table.rows[0][0].text, "Plano");
        assert!(table.rows[0][0].bold);
        assert_eq!(table.rows[0][0].color, Some(Rgb(25, 25, 112)));
        assert_eq!(table.rows[1][0].text, "R$ 249");
        assert!(!table.rows[1][0].bold);
        assert_eq!(table.rows[1][0].color, None);
    }

    #[test]
    fn test_round_trip_matches_model() {
        let mut builder = DeckBuilder::new("Round trip");
        builder
            .add_slide()
            .add_background()
            .add_section_label("infraestrutura")
            .add_title("Stack Obrigatório", Some("Serviços & custos"))
            .add_table(
                Rect::inches(0.5, 1.9, 9.4, 4.0),
                &[["Serviço", "R$/mês"], ["Vercel", "220"], ["Ably", "270"]],
                &TableStyle::filled(Rgb(229, 235, 248), Rgb(241, 247, 255)),
            )
            .unwrap();
        builder
            .add_slide()
            .add_bullets(Rect::inches(0.6, 1.9, 4.6, 3.5), &["um", "dois"]);
        let deck = builder.finish();

        let bytes = PptxWriter::new().to_bytes(&deck).unwrap();
        let parsed = PptxParser::new().parse(Cursor::new(bytes), "deck.pptx").unwrap();

        assert_eq!(parsed, ExtractedDeck::from_deck(&deck, "deck.pptx"));
        assert_eq!(parsed.slides[1].lines[0].text, "um\ndois");
    }

    #[test]
    fn test_round_trip_keeps_run_whitespace() {
        let mut builder = DeckBuilder::new("Espaços");
        builder
            .add_slide()
            .add_bullets(Rect::inches(0.6, 1.9, 4.6, 3.5), &["a", " recuado"]);
        builder
            .add_slide()
            .add_bullets(Rect::inches(0.6, 1.9, 4.6, 3.5), &["R$ "]);
        let mut deck = builder.finish();

        let paragraph = &mut deck.slides[1].shapes[0]
            .text
            .as_mut()
            .unwrap()
            .paragraphs[0];
        let font = paragraph.runs[0].font;
        paragraph.runs.push(Run {
            text: "249".to_string(),
            font,
        });

        let bytes = PptxWriter::new().to_bytes(&deck).unwrap();
        let parsed = PptxParser::new().parse(Cursor::new(bytes), "deck.pptx").unwrap();

        assert_eq!(parsed, ExtractedDeck::from_deck(&deck, "deck.pptx"));
        assert_eq!(parsed.slides[0].lines[0].text, "a\n recuado");
        assert_eq!(parsed.slides[1].lines[0].text, "R$ 249");
    }

    #[test]
    fn test_whitespace_between_elements_is_ignored() {
        let xml = "<p:sld xmlns:p=\"p\" xmlns:a=\"a\"><p:cSld><p:spTree>\n  <p:sp>\n    <p:txBody>\n      <a:p>\n        <a:r><a:t>Plano</a:t></a:r>\n      </a:p>\n    </p:txBody>\n  </p:sp>\n</p:spTree></p:cSld></p:sld>";
        let (shapes, _) = extract_shapes_from_xml(xml);
        assert_eq!(shapes.len(), 1);
        assert_eq!(shapes[0].text, "Plano");
    }

    #[test]
    fn test_not_a_zip() {
        let err = PptxParser::new()
            .parse(Cursor::new(b"not a zip".to_vec()), "bad.pptx")
            .unwrap_err();
        assert!(matches!(err, Error::ZipError(_)));
    }
}
