use super::{json_pretty, EXIT_SUCCESS};
use marquee_schema::list_presets;

pub fn run(json: bool) -> Result<u8, String> {
    let presets = list_presets();
    if json {
        let payload: Vec<_> = presets
            .iter()
            .map(|p| {
                let slides = p.parse().map(|d| d.slides.len()).unwrap_or(0);
                serde_json::json!({
                    "name": p.name,
                    "description": p.description,
                    "slides": slides,
                })
            })
            .collect();
        println!("{}", json_pretty(&payload)?);
    } else {
        println!("{:<16} DESCRIPTION", "NAME");
        for p in presets {
            println!("{:<16} {}", p.name, p.description);
        }
    }
    Ok(EXIT_SUCCESS)
}
