use super::{json_pretty, DEFAULT_DECK, EXIT_SUCCESS};
use dialoguer::{Confirm, Input, Select};
use marquee_schema::{get_preset, list_presets, DeckV1, Slide, DEFAULT_INTERVAL_MS};
use std::io::{stderr, stdin, IsTerminal};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

fn load_preset(name: &str) -> Result<DeckV1, String> {
    let preset = get_preset(name).ok_or_else(|| {
        let known: Vec<&str> = list_presets().iter().map(|p| p.name).collect();
        format!("unknown preset '{name}' (expected: {})", known.join(", "))
    })?;
    preset.parse().map_err(|e| format!("preset parse error: {e}"))
}

fn write_atomic(dest: &Path, content: &str) -> Result<(), String> {
    let dir = dest
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map_or_else(|| PathBuf::from("."), Path::to_path_buf);
    let mut tmp = NamedTempFile::new_in(&dir).map_err(|e| format!("write temp file: {e}"))?;
    use std::io::Write;
    tmp.write_all(content.as_bytes())
        .map_err(|e| format!("write temp file: {e}"))?;
    tmp.as_file()
        .sync_all()
        .map_err(|e| format!("fsync temp file: {e}"))?;
    tmp.persist(dest)
        .map_err(|e| format!("persist deck: {}", e.error))?;
    Ok(())
}

fn ensure_can_write(dest: &Path, force: bool, is_tty: bool) -> Result<(), String> {
    if !dest.exists() || force {
        return Ok(());
    }
    let refusal = format!(
        "refusing to overwrite existing {} (pass --force)",
        dest.display()
    );
    if !is_tty {
        return Err(refusal);
    }
    let overwrite = Confirm::new()
        .with_prompt(format!("overwrite {}?", dest.display()))
        .default(false)
        .interact()
        .map_err(|e| format!("prompt failed: {e}"))?;
    if overwrite {
        Ok(())
    } else {
        Err(refusal)
    }
}

fn prompt_deck() -> Result<DeckV1, String> {
    let prompt_err = |e: dialoguer::Error| format!("prompt failed: {e}");

    let mut deck = DeckV1::new(Vec::new());
    deck.carousel.interval_ms = Input::new()
        .with_prompt("autoplay interval (ms)")
        .default(DEFAULT_INTERVAL_MS)
        .validate_with(|ms: &u64| if *ms == 0 { Err("must be positive") } else { Ok(()) })
        .interact_text()
        .map_err(prompt_err)?;
    deck.carousel.autoplay = Confirm::new()
        .with_prompt("start playing automatically?")
        .default(true)
        .interact()
        .map_err(prompt_err)?;

    let icons = ["none", "shield", "clock", "award", "users"];
    loop {
        let title: String = Input::new()
            .with_prompt(format!("slide {} title (empty to finish)", deck.slides.len() + 1))
            .allow_empty(true)
            .interact_text()
            .map_err(prompt_err)?;
        if title.trim().is_empty() {
            break;
        }
        let description: String = Input::new()
            .with_prompt("description")
            .allow_empty(true)
            .interact_text()
            .map_err(prompt_err)?;
        let mut slide = Slide::new(title.trim(), description.trim());

        let icon = Select::new()
            .with_prompt("icon")
            .items(&icons)
            .default(0)
            .interact()
            .map_err(prompt_err)?;
        if icon > 0 {
            slide = slide.with_icon(icons[icon]);
        }

        let target: String = Input::new()
            .with_prompt("action target (empty for none)")
            .allow_empty(true)
            .interact_text()
            .map_err(prompt_err)?;
        if !target.trim().is_empty() {
            let label: String = Input::new()
                .with_prompt("action label (empty for \"Learn More\")")
                .allow_empty(true)
                .interact_text()
                .map_err(prompt_err)?;
            let label = Some(label.trim()).filter(|l| !l.is_empty());
            slide = slide.with_action(label, target.trim());
        }
        deck.slides.push(slide);
    }
    Ok(deck)
}

fn print_result(dest: &Path, deck: &DeckV1, preset: Option<&str>, json: bool) -> Result<(), String> {
    if json {
        let payload = serde_json::json!({
            "status": "written",
            "path": dest.display().to_string(),
            "slides": deck.slides.len(),
            "preset": preset,
        });
        println!("{}", json_pretty(&payload)?);
    } else {
        println!("wrote {} ({} slide(s))", dest.display(), deck.slides.len());
        if let Some(name) = preset {
            println!("preset: {name}");
        }
    }
    Ok(())
}

pub fn run(
    path: Option<&Path>,
    preset: Option<&str>,
    force: bool,
    json: bool,
) -> Result<u8, String> {
    let dest = path.unwrap_or_else(|| Path::new(DEFAULT_DECK));
    let is_tty = stdin().is_terminal() && stderr().is_terminal();

    let deck = if let Some(name) = preset {
        let deck = load_preset(name)?;
        ensure_can_write(dest, force, is_tty)?;
        deck
    } else {
        ensure_can_write(dest, force, is_tty)?;
        if !is_tty {
            return Err("no --preset provided and stdin is not a TTY".to_owned());
        }
        prompt_deck()?
    };
    deck.validate().map_err(|e| format!("deck error: {e}"))?;

    let toml = deck
        .to_toml_string()
        .map_err(|e| format!("TOML serialization failed: {e}"))?;
    write_atomic(dest, &toml)?;
    print_result(dest, &deck, preset, json)?;
    Ok(EXIT_SUCCESS)
}
