use super::{build_carousel, json_pretty, DeckSource, PlaybackOverrides, EXIT_SUCCESS};
use marquee_core::SystemTimer;

pub fn run(source: &DeckSource, overrides: PlaybackOverrides, json: bool) -> Result<u8, String> {
    let carousel = build_carousel(source, overrides, SystemTimer::new())?;
    let triggered = marquee_tui::run(carousel)?;
    if json {
        let payload = serde_json::json!({ "triggered": triggered });
        println!("{}", json_pretty(&payload)?);
    } else {
        for target in &triggered {
            println!("action: {target}");
        }
    }
    Ok(EXIT_SUCCESS)
}
