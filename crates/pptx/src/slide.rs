//! Slide XML serialization.

use crate::parts::{fmt_err, NS_A, NS_P, NS_R, SP_TREE_HEADER, TABLE_STYLE_ID, XML_DECLARATION};
use deck_core::{Paragraph, Rect, Result, Rgb, Shape, ShapeKind, Slide, Table, TextFrame};
use quick_xml::escape::escape;
use std::fmt::Write as FmtWrite;

/// DrawingML angles are expressed in 60000ths of a degree.
const ANGLE_UNITS_PER_DEGREE: f64 = 60_000.0;

/// Theme references applied to auto shapes, as PowerPoint inserts them.
const AUTO_SHAPE_STYLE: &str = concat!(
    r#"<p:style><a:lnRef idx="1"><a:schemeClr val="accent1"/></a:lnRef>"#,
    r#"<a:fillRef idx="3"><a:schemeClr val="accent1"/></a:fillRef>"#,
    r#"<a:effectRef idx="2"><a:schemeClr val="accent1"/></a:effectRef>"#,
    r#"<a:fontRef idx="minor"><a:schemeClr val="lt1"/></a:fontRef></p:style>"#
);

/// Serialize one slide to `ppt/slides/slideN.xml` content.
pub(crate) fn slide_xml(slide: &Slide, language: &str) -> Result<String> {
    let mut xml = String::with_capacity(4096 + slide.shapes.len() * 1024);

    xml.push_str(XML_DECLARATION);
    write!(
        xml,
        r#"<p:sld xmlns:a="{}" xmlns:r="{}" xmlns:p="{}">"#,
        NS_A, NS_R, NS_P
    )
    .map_err(fmt_err)?;
    xml.push_str("<p:cSld>");

    // Background must come before the shape tree
    if let Some(color) = slide.background {
        xml.push_str("<p:bg><p:bgPr>");
        write_solid_fill(&mut xml, color)?;
        xml.push_str("<a:effectLst/></p:bgPr></p:bg>");
    }

    xml.push_str("<p:spTree>");
    xml.push_str(SP_TREE_HEADER);
    for shape in &slide.shapes {
        match shape.kind {
            ShapeKind::Table(ref table) => write_table_frame(&mut xml, shape, table, language)?,
            _ => write_shape(&mut xml, shape, language)?,
        }
    }
    xml.push_str("</p:spTree>");
    xml.push_str("</p:cSld>");
    xml.push_str("<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>");
    xml.push_str("</p:sld>");

    Ok(xml)
}

fn write_solid_fill(xml: &mut String, color: Rgb) -> Result<()> {
    write!(xml, r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill>"#, color.hex()).map_err(fmt_err)
}

fn write_offset_extent(xml: &mut String, frame: &Rect) -> Result<()> {
    write!(
        xml,
        r#"<a:off x="{}" y="{}"/><a:ext cx="{}" cy="{}"/>"#,
        frame.left.get(),
        frame.top.get(),
        frame.width.get(),
        frame.height.get()
    )
    .map_err(fmt_err)
}

/// Text box or auto shape (`p:sp`).
fn write_shape(xml: &mut String, shape: &Shape, language: &str) -> Result<()> {
    let text_box = matches!(shape.kind, ShapeKind::TextBox);
    let preset = match shape.kind {
        ShapeKind::AutoShape(geometry) => geometry.preset(),
        _ => "rect",
    };

    xml.push_str("<p:sp><p:nvSpPr>");
    write!(
        xml,
        r#"<p:cNvPr id="{}" name="{}"/>"#,
        shape.id,
        escape(&shape.name)
    )
    .map_err(fmt_err)?;
    xml.push_str(if text_box {
        r#"<p:cNvSpPr txBox="1"/>"#
    } else {
        "<p:cNvSpPr/>"
    });
    xml.push_str("<p:nvPr/></p:nvSpPr>");

    xml.push_str("<p:spPr>");
    let rotation = (shape.rotation * ANGLE_UNITS_PER_DEGREE).round() as i64;
    if rotation != 0 {
        write!(xml, r#"<a:xfrm rot="{}">"#, rotation).map_err(fmt_err)?;
    } else {
        xml.push_str("<a:xfrm>");
    }
    write_offset_extent(xml, &shape.frame)?;
    xml.push_str("</a:xfrm>");
    write!(xml, r#"<a:prstGeom prst="{}"><a:avLst/></a:prstGeom>"#, preset).map_err(fmt_err)?;

    match shape.fill {
        Some(color) => write_solid_fill(xml, color)?,
        None if text_box => xml.push_str("<a:noFill/>"),
        None => {}
    }
    if let Some(color) = shape.line {
        xml.push_str("<a:ln>");
        write_solid_fill(xml, color)?;
        xml.push_str("</a:ln>");
    }
    if !shape.shadow {
        xml.push_str("<a:effectLst/>");
    }
    xml.push_str("</p:spPr>");

    if !text_box {
        xml.push_str(AUTO_SHAPE_STYLE);
    }

    let empty = TextFrame::new();
    let text = shape.text.as_ref().unwrap_or(&empty);
    write_text_body(xml, "p:txBody", text, text_box, language)?;

    xml.push_str("</p:sp>");
    Ok(())
}

/// `p:txBody` / `a:txBody`. Text boxes shrink-wrap their text.
fn write_text_body(
    xml: &mut String,
    element: &str,
    text: &TextFrame,
    auto_fit: bool,
    language: &str,
) -> Result<()> {
    write!(xml, "<{}>", element).map_err(fmt_err)?;

    xml.push_str("<a:bodyPr");
    xml.push_str(if text.word_wrap {
        r#" wrap="square""#
    } else {
        r#" wrap="none""#
    });
    xml.push_str(r#" rtlCol="0""#);
    if let Some(anchor) = text.anchor {
        write!(xml, r#" anchor="{}""#, anchor.as_ooxml()).map_err(fmt_err)?;
    }
    if auto_fit {
        xml.push_str("><a:spAutoFit/></a:bodyPr>");
    } else {
        xml.push_str("/>");
    }
    xml.push_str("<a:lstStyle/>");

    if text.paragraphs.is_empty() {
        xml.push_str("<a:p/>");
    }
    for paragraph in &text.paragraphs {
        write_paragraph(xml, paragraph, language)?;
    }

    write!(xml, "</{}>", element).map_err(fmt_err)?;
    Ok(())
}

fn write_paragraph(xml: &mut String, paragraph: &Paragraph, language: &str) -> Result<()> {
    xml.push_str("<a:p>");

    if paragraph.align.is_some() || paragraph.level > 0 {
        xml.push_str("<a:pPr");
        if paragraph.level > 0 {
            write!(xml, r#" lvl="{}""#, paragraph.level).map_err(fmt_err)?;
        }
        if let Some(align) = paragraph.align {
            write!(xml, r#" algn="{}""#, align.as_ooxml()).map_err(fmt_err)?;
        }
        xml.push_str("/>");
    }

    for run in &paragraph.runs {
        xml.push_str("<a:r>");
        write!(xml, r#"<a:rPr lang="{}""#, escape(language)).map_err(fmt_err)?;
        if let Some(size) = run.font.size {
            // Hundredths of a point
            write!(xml, r#" sz="{}""#, (size * 100.0).round() as u32).map_err(fmt_err)?;
        }
        if run.font.bold {
            xml.push_str(r#" b="1""#);
        }
        xml.push_str(r#" dirty="0""#);
        match run.font.color {
            Some(color) => {
                xml.push('>');
                write_solid_fill(xml, color)?;
                xml.push_str("</a:rPr>");
            }
            None => xml.push_str("/>"),
        }
        write!(xml, "<a:t>{}</a:t>", escape(&run.text)).map_err(fmt_err)?;
        xml.push_str("</a:r>");
    }

    xml.push_str("</a:p>");
    Ok(())
}

/// Table wrapped in its `p:graphicFrame`.
fn write_table_frame(xml: &mut String, shape: &Shape, table: &Table, language: &str) -> Result<()> {
    xml.push_str("<p:graphicFrame><p:nvGraphicFramePr>");
    write!(
        xml,
        r#"<p:cNvPr id="{}" name="{}"/>"#,
        shape.id,
        escape(&shape.name)
    )
    .map_err(fmt_err)?;
    xml.push_str(r#"<p:cNvGraphicFramePr><a:graphicFrameLocks noGrp="1"/></p:cNvGraphicFramePr><p:nvPr/>"#);
    xml.push_str("</p:nvGraphicFramePr>");

    xml.push_str("<p:xfrm>");
    write_offset_extent(xml, &shape.frame)?;
    xml.push_str("</p:xfrm>");

    xml.push_str(r#"<a:graphic><a:graphicData uri="http://schemas.openxmlformats.org/drawingml/2006/table">"#);
    xml.push_str("<a:tbl>");
    write!(
        xml,
        r#"<a:tblPr firstRow="1" bandRow="1"><a:tableStyleId>{}</a:tableStyleId></a:tblPr>"#,
        TABLE_STYLE_ID
    )
    .map_err(fmt_err)?;

    xml.push_str("<a:tblGrid>");
    for width in &table.columns {
        write!(xml, r#"<a:gridCol w="{}"/>"#, width.get()).map_err(fmt_err)?;
    }
    xml.push_str("</a:tblGrid>");

    for row in &table.rows {
        write!(xml, r#"<a:tr h="{}">"#, row.height.get()).map_err(fmt_err)?;
        for cell in &row.cells {
            xml.push_str("<a:tc>");
            write_text_body(xml, "a:txBody", &cell.text, false, language)?;

            let m = &cell.margins;
            write!(
                xml,
                r#"<a:tcPr marL="{}" marR="{}" marT="{}" marB="{}""#,
                m.left.get(),
                m.right.get(),
                m.top.get(),
                m.bottom.get()
            )
            .map_err(fmt_err)?;
            if let Some(anchor) = cell.text.anchor {
                write!(xml, r#" anchor="{}""#, anchor.as_ooxml()).map_err(fmt_err)?;
            }
            match cell.fill {
                Some(color) => {
                    xml.push('>');
                    write_solid_fill(xml, color)?;
                    xml.push_str("</a:tcPr>");
                }
                None => xml.push_str("/>"),
            }
            xml.push_str("</a:tc>");
        }
        xml.push_str("</a:tr>");
    }

    xml.push_str("</a:tbl></a:graphicData></a:graphic></p:graphicFrame>");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use deck_core::{Card, DeckBuilder, TableStyle};

    fn single_slide<F: FnOnce(&mut deck_core::SlideBuilder<'_>)>(f: F) -> String {
        let mut builder = DeckBuilder::new("Test");
        f(&mut builder.add_slide());
        let deck = builder.finish();
        slide_xml(&deck.slides[0], &deck.language).unwrap()
    }

    #[test]
    fn test_background_and_rotated_ellipse() {
        let xml = single_slide(|s| {
            s.add_background();
        });
        assert!(xml.contains(r#"<p:bg><p:bgPr><a:solidFill><a:srgbClr val="F5F7FC"/></a:solidFill>"#));
        assert!(xml.contains(r#"<a:xfrm rot="900000"><a:off x="-1097280" y="-1097280"/><a:ext cx="4114800" cy="4114800"/>"#));
        assert!(xml.contains(r#"<a:prstGeom prst="ellipse">"#));
        assert!(xml.contains("<a:effectLst/></p:spPr>"));
    }

    #[test]
    fn test_text_box_runs() {
        let xml = single_slide(|s| {
            s.add_title("Break-even & Payback", Some("Sub"));
        });
        assert!(xml.contains(r#"<p:cNvSpPr txBox="1"/>"#));
        assert!(xml.contains(r#"<a:bodyPr wrap="none" rtlCol="0"><a:spAutoFit/></a:bodyPr>"#));
        assert!(xml.contains(
            r#"<a:rPr lang="pt-BR" sz="4400" b="1" dirty="0"><a:solidFill><a:srgbClr val="191970"/></a:solidFill></a:rPr><a:t>Break-even &amp; Payback</a:t>"#
        ));
        assert!(xml.contains(r#"sz="2000" dirty="0""#));
    }

    #[test]
    fn test_card_shape() {
        let card = Card {
            icon: "🎯",
            title: "Meta 5-3-1",
            value: "R$ 4,641",
            caption: "c",
            accent: None,
        };
        let xml = single_slide(|s| {
            s.add_icon_card(deck_core::Rect::inches(0.5, 1.8, 3.3, 1.9), &card);
        });
        assert!(xml.contains(r#"<a:prstGeom prst="roundRect">"#));
        assert!(xml.contains(r#"<a:solidFill><a:srgbClr val="FFFFFF"/></a:solidFill><a:ln><a:solidFill><a:srgbClr val="00A2AE"/></a:solidFill></a:ln></p:spPr><p:style>"#));
        assert_eq!(xml.matches(r#"<a:pPr algn="ctr"/>"#).count(), 1);
        assert!(xml.contains("<a:t>R$ 4,641</a:t>"));
    }

    #[test]
    fn test_table_frame() {
        let grid: &[&[&str]] = &[&["Plano", "Preço"], &["Básico", "R$ 249"], &["Pro", "R$ 699"]];
        let xml = single_slide(|s| {
            s.add_table(
                deck_core::Rect::inches(0.4, 1.9, 9.6, 3.9),
                grid,
                &TableStyle::filled(Rgb(253, 237, 218), Rgb(255, 248, 237)),
            )
            .unwrap();
        });
        assert_eq!(xml.matches("<a:gridCol ").count(), 2);
        assert_eq!(xml.matches("<a:tr ").count(), 3);
        assert_eq!(xml.matches("<a:tc>").count(), 6);
        assert!(xml.contains(r#"<a:gridCol w="4389120"/>"#));
        assert!(xml.contains(r#"<a:tcPr marL="45720" marR="45720" marT="36576" marB="36576" anchor="ctr"><a:solidFill><a:srgbClr val="FDEDDA"/>"#));
        assert!(xml.contains(TABLE_STYLE_ID));
    }

    #[test]
    fn test_empty_slide_is_well_formed() {
        let xml = slide_xml(&Slide::new(1), "pt-BR").unwrap();
        assert!(!xml.contains("<p:bg>"));
        assert!(xml.ends_with("</p:sld>"));
    }
}
