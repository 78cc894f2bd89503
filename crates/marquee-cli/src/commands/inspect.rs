use super::{json_pretty, DeckSource, EXIT_SUCCESS};

pub fn run(source: &DeckSource, json: bool) -> Result<u8, String> {
    let deck = source.load()?;
    if json {
        println!("{}", json_pretty(&deck.slides)?);
    } else if deck.slides.is_empty() {
        println!("no slides in deck");
    } else {
        println!("{:<4} {:<32} {:<8} ACTION", "#", "TITLE", "ICON");
        for (i, slide) in deck.slides.iter().enumerate() {
            let icon = slide.icon.as_deref().unwrap_or("-");
            let action = slide.action.as_ref().map_or_else(
                || "-".to_owned(),
                |a| format!("{} → {}", a.label(), a.target),
            );
            println!("{:<4} {:<32} {:<8} {action}", i + 1, slide.title, icon);
        }
    }
    Ok(EXIT_SUCCESS)
}
