use super::{json_pretty, DeckSource, EXIT_SUCCESS};

pub fn run(source: &DeckSource, json: bool) -> Result<u8, String> {
    let deck = source.load()?;
    if json {
        let payload = serde_json::json!({
            "status": "valid",
            "deck_version": deck.deck_version,
            "slides": deck.slides.len(),
            "autoplay": deck.carousel.autoplay,
            "interval_ms": deck.carousel.interval_ms,
        });
        println!("{}", json_pretty(&payload)?);
    } else {
        println!(
            "deck ok: {} slide(s), interval {}ms, autoplay {}",
            deck.slides.len(),
            deck.carousel.interval_ms,
            if deck.carousel.autoplay { "on" } else { "off" }
        );
        if deck.slides.is_empty() {
            println!("note: an empty deck never rotates");
        }
    }
    Ok(EXIT_SUCCESS)
}
