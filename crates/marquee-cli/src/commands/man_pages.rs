use super::{json_pretty, EXIT_SUCCESS};
use clap::{Command, CommandFactory};
use std::path::{Path, PathBuf};

const BIN: &str = "marquee";

fn write_page(dir: &Path, name: &str, cmd: Command) -> Result<PathBuf, String> {
    let mut buf = Vec::new();
    clap_mangen::Man::new(cmd)
        .render(&mut buf)
        .map_err(|e| format!("man page render failed for {name}: {e}"))?;
    let path = dir.join(format!("{name}.1"));
    std::fs::write(&path, &buf).map_err(|e| format!("failed to write {}: {e}", path.display()))?;
    Ok(path)
}

/// Render `marquee.1` plus one `marquee-<command>.1` per subcommand.
pub fn write_pages(cmd: &Command, dir: &Path) -> Result<Vec<PathBuf>, String> {
    std::fs::create_dir_all(dir).map_err(|e| format!("failed to create dir: {e}"))?;
    let mut written = vec![write_page(dir, BIN, cmd.clone())?];
    for sub in cmd.get_subcommands().filter(|s| s.get_name() != "help") {
        let name = format!("{BIN}-{}", sub.get_name());
        written.push(write_page(dir, &name, sub.clone())?);
    }
    Ok(written)
}

pub fn run<C: CommandFactory>(dir: &Path, json: bool) -> Result<u8, String> {
    let written = write_pages(&C::command(), dir)?;
    if json {
        let payload = serde_json::json!({
            "dir": dir.display().to_string(),
            "pages": written
                .iter()
                .filter_map(|p| p.file_name())
                .map(|n| n.to_string_lossy().into_owned())
                .collect::<Vec<_>>(),
        });
        println!("{}", json_pretty(&payload)?);
    } else {
        println!("{} man page(s) written to {}", written.len(), dir.display());
    }
    Ok(EXIT_SUCCESS)
}
