//! The monthly financial plan deck: eight fixed slides built from literal
//! content.

pub mod content;

use content::*;
use deck_core::{Card, Deck, DeckBuilder, Palette, Rect, Result, Rgb, SlideBuilder, TableStyle};

/// Build the complete deck, slides in presentation order.
pub fn build_deck() -> Result<Deck> {
    let mut builder = DeckBuilder::new(DECK_TITLE);
    let palette = *builder.palette();

    cover(&mut builder.add_slide(), &palette);
    snapshot(&mut builder.add_slide());
    fixed_infrastructure(&mut builder.add_slide())?;
    variable_envelope(&mut builder.add_slide())?;
    subscription_plans(&mut builder.add_slide())?;
    break_even(&mut builder.add_slide(), &palette)?;
    scale_projection(&mut builder.add_slide())?;
    next_steps(&mut builder.add_slide());

    let deck = builder.finish();
    log::debug!("Built '{}' with {} slides", deck.title, deck.slide_count());
    Ok(deck)
}

/// Background, section label and title shared by every slide.
fn header(slide: &mut SlideBuilder<'_>, label: &str, title: &str, subtitle: &str) {
    slide
        .add_background()
        .add_section_label(label)
        .add_title(title, Some(subtitle));
}

/// A row of three cards: secondary, primary and tertiary accents.
fn card_row(slide: &mut SlideBuilder<'_>, palette: &Palette, cards: &[CardText; 3], lefts: [f64; 3], top: f64, width: f64) {
    let accents = [None, Some(palette.primary), Some(palette.tertiary)];
    for ((text, left), accent) in cards.iter().zip(lefts).zip(accents) {
        let card = Card {
            icon: text.icon,
            title: text.title,
            value: text.value,
            caption: text.caption,
            accent,
        };
        slide.add_icon_card(Rect::inches(left, top, width, 1.9), &card);
    }
}

fn cover(slide: &mut SlideBuilder<'_>, palette: &Palette) {
    header(slide, COVER_LABEL, COVER_TITLE, COVER_SUBTITLE);
    card_row(slide, palette, &COVER_CARDS, [0.6, 3.9, 7.2], 2.2, 3.1);
}

fn snapshot(slide: &mut SlideBuilder<'_>) {
    header(slide, SNAPSHOT_LABEL, SNAPSHOT_TITLE, SNAPSHOT_SUBTITLE);
    slide.add_bullets(Rect::inches(0.7, 1.8, 9.5, 3.6), SNAPSHOT_BULLETS);
}

fn fixed_infrastructure(slide: &mut SlideBuilder<'_>) -> Result<()> {
    header(slide, INFRA_LABEL, INFRA_TITLE, INFRA_SUBTITLE);
    slide.add_table(
        Rect::inches(0.5, 1.9, 9.4, 4.0),
        INFRA_TABLE,
        &TableStyle::filled(INFRA_HEADER_FILL, INFRA_BODY_FILL),
    )?;
    Ok(())
}

fn variable_envelope(slide: &mut SlideBuilder<'_>) -> Result<()> {
    header(slide, VARIABLE_LABEL, VARIABLE_TITLE, VARIABLE_SUBTITLE);
    slide.add_table(
        Rect::inches(0.5, 1.9, 9.4, 4.0),
        VARIABLE_TABLE,
        &TableStyle::filled(VARIABLE_HEADER_FILL, VARIABLE_BODY_FILL),
    )?;
    Ok(())
}

fn subscription_plans(slide: &mut SlideBuilder<'_>) -> Result<()> {
    header(slide, PLANS_LABEL, PLANS_TITLE, PLANS_SUBTITLE);
    slide
        .add_table(
            Rect::inches(0.4, 1.9, 9.6, 3.9),
            PLANS_TABLE,
            &TableStyle::filled(PLANS_HEADER_FILL, PLANS_BODY_FILL),
        )?
        .add_bullets_sized(Rect::inches(0.5, 5.1, 9.4, 1.0), PLANS_BULLETS, FOOTNOTE_SIZE);
    Ok(())
}

fn break_even(slide: &mut SlideBuilder<'_>, palette: &Palette) -> Result<()> {
    header(slide, BREAK_EVEN_LABEL, BREAK_EVEN_TITLE, BREAK_EVEN_SUBTITLE);
    card_row(slide, palette, &BREAK_EVEN_CARDS, [0.5, 3.9, 7.3], 1.8, 3.3);
    slide.add_table(
        Rect::inches(0.5, 3.9, 9.6, 2.1),
        BREAK_EVEN_TABLE,
        &TableStyle::filled(BREAK_EVEN_HEADER_FILL, BREAK_EVEN_BODY_FILL),
    )?;
    Ok(())
}

fn scale_projection(slide: &mut SlideBuilder<'_>) -> Result<()> {
    header(slide, SCALE_LABEL, SCALE_TITLE, SCALE_SUBTITLE);
    slide
        .add_table(
            Rect::inches(0.4, 1.9, 9.6, 3.8),
            SCALE_TABLE,
            &TableStyle::filled(SCALE_HEADER_FILL, SCALE_BODY_FILL),
        )?
        .add_bullets_sized(Rect::inches(0.5, 5.0, 9.4, 1.1), SCALE_BULLETS, FOOTNOTE_SIZE);
    Ok(())
}

fn next_steps(slide: &mut SlideBuilder<'_>) {
    header(slide, NEXT_STEPS_LABEL, NEXT_STEPS_TITLE, NEXT_STEPS_SUBTITLE);
    slide
        .add_bullets(Rect::inches(0.6, 1.9, 4.6, 3.5), NEXT_STEPS_LEFT)
        .add_bullets(Rect::inches(5.3, 1.9, 4.6, 3.5), NEXT_STEPS_RIGHT);
}

/// Header fill of every table in the deck, in slide order.
pub fn table_header_fills() -> [Rgb; 5] {
    [
        INFRA_HEADER_FILL,
        VARIABLE_HEADER_FILL,
        PLANS_HEADER_FILL,
        BREAK_EVEN_HEADER_FILL,
        SCALE_HEADER_FILL,
    ]
}
