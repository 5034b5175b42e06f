//! CLI tool that generates the monthly financial plan deck.

use anyhow::{Context, Result};
use clap::Parser;
use deck_core::{ExtractedDeck, ExtractedSlide};
use deck_plan::content::DEFAULT_OUTPUT_PATH;
use deck_pptx::{PptxParser, PptxWriter};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Generate the monthly financial plan deck (.pptx).
///
/// With no arguments the deck is regenerated at the default path,
/// overwriting any previous version.
#[derive(Parser, Debug)]
#[command(name = "finance-deck")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Output file; its directory must already exist
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    output: PathBuf,

    /// Print the deck's slide text as JSON instead of writing the file
    #[arg(long, conflicts_with = "inspect")]
    outline: bool,

    /// Print the slide text of an existing .pptx file
    #[arg(long, value_name = "FILE")]
    inspect: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    if args.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    if let Some(ref input) = args.inspect {
        let deck = read_deck(input)?;
        print!("{}", render_text(&deck));
        return Ok(());
    }

    if args.outline {
        let deck = deck_plan::build_deck().context("Failed to build the deck")?;
        let filename = args
            .output
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("deck.pptx");
        let outline = ExtractedDeck::from_deck(&deck, filename);
        println!("{}", serde_json::to_string_pretty(&outline)?);
        return Ok(());
    }

    println!("{}", generate(&args.output)?);
    Ok(())
}

/// Build the deck and save it to `output`, returning the confirmation line.
fn generate(output: &Path) -> Result<String> {
    let deck = deck_plan::build_deck().context("Failed to build the deck")?;
    PptxWriter::new()
        .save(&deck, output)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    Ok(format!("Presentation written to {}", output.display()))
}

/// Parse a .pptx file from disk.
fn read_deck(path: &Path) -> Result<ExtractedDeck> {
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let filename = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("unknown");

    log::debug!("Parsing {} as PPTX", path.display());
    let deck = PptxParser::new()
        .parse(BufReader::new(file), filename)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(deck)
}

/// Plain-text listing: one block per slide, table rows tab-separated.
fn render_text(deck: &ExtractedDeck) -> String {
    deck.slides
        .iter()
        .map(render_slide)
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_slide(slide: &ExtractedSlide) -> String {
    let mut out = format!("--- Slide {} ---\n", slide.number);
    for line in &slide.lines {
        out.push_str(&line.text);
        out.push('\n');
    }
    for table in &slide.tables {
        for row in &table.rows {
            let cells: Vec<&str> = row.iter().map(|c| c.text.as_str()).collect();
            out.push_str(&cells.join("\t"));
            out.push('\n');
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use deck_core::{ExtractedCell, ExtractedTable};

    #[test]
    fn test_args_are_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_no_arguments_uses_default_path() {
        let args = Args::try_parse_from(["finance-deck"]).unwrap();
        assert_eq!(args.output, PathBuf::from(DEFAULT_OUTPUT_PATH));
        assert!(!args.outline);
        assert!(args.inspect.is_none());
    }

    #[test]
    fn test_outline_conflicts_with_inspect() {
        assert!(Args::try_parse_from(["finance-deck", "--outline", "--inspect", "x.pptx"]).is_err());
    }

    #[test]
    fn test_render_slide() {
        let mut slide = ExtractedSlide::new(3);
        slide.add_line_with_position("INFRAESTRUTURA", 0, 0);
        let cell = |text: &str| ExtractedCell {
            text: text.to_string(),
            bold: false,
            color: None,
        };
        slide.tables.push(ExtractedTable {
            rows: vec![vec![cell("Serviço"), cell("R$/mês")], vec![cell("Vercel"), cell("220")]],
        });

        assert_eq!(
            render_slide(&slide),
            "--- Slide 3 ---\nINFRAESTRUTURA\nServiço\tR$/mês\nVercel\t220\n"
        );
    }

    #[test]
    fn test_generate_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deck.pptx");

        let message = generate(&path).unwrap();
        assert_eq!(message, format!("Presentation written to {}", path.display()));
        assert_eq!(read_deck(&path).unwrap().slides.len(), 8);
    }

    #[test]
    fn test_generate_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("docs").join("finance").join("deck.pptx");

        let err = generate(&path).unwrap_err();
        assert!(format!("{:#}", err).contains(&format!("Failed to write {}", path.display())));
        assert!(err.chain().any(|cause| cause
            .downcast_ref::<deck_core::Error>()
            .map_or(false, |e| matches!(e, deck_core::Error::IoError(_)))));
        assert!(!path.exists());
    }

    #[test]
    fn test_inspect_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deck.pptx");
        PptxWriter::new()
            .save(&deck_plan::build_deck().unwrap(), &path)
            .unwrap();

        let text = render_text(&read_deck(&path).unwrap());
        assert_eq!(text.matches("--- Slide ").count(), 8);
        assert!(text.contains("Básico\tAté 3 usuários\t50 processos / 1 GB / 500 docs\tR$ 249\tR$ 2.490"));
    }
}
