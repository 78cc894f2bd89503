mod commands;

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use commands::{DeckSource, PlaybackOverrides, EXIT_DECK_ERROR, EXIT_FAILURE};
use marquee_core::install_signal_handler;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(
    name = "marquee",
    version,
    about = "Autoplaying slide carousel for the terminal"
)]
struct Cli {
    /// Output results as structured JSON.
    #[arg(long, default_value_t = false, global = true)]
    json: bool,

    /// Enable verbose (debug) logging output.
    #[arg(short, long, default_value_t = false, global = true)]
    verbose: bool,

    /// Enable trace-level logging (more detailed than --verbose).
    #[arg(long, default_value_t = false, global = true)]
    trace: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Play a deck interactively in the terminal.
    Play {
        #[command(flatten)]
        source: DeckSource,
        #[command(flatten)]
        overrides: PlaybackOverrides,
    },
    /// Play a deck headless, printing each slide as autoplay reaches it.
    Run {
        #[command(flatten)]
        source: DeckSource,
        #[command(flatten)]
        overrides: PlaybackOverrides,
        /// Stop after this many autoplay advances (default: until Ctrl-C).
        #[arg(long)]
        ticks: Option<usize>,
    },
    /// Replay a scripted session against a virtual clock.
    Simulate {
        #[command(flatten)]
        source: DeckSource,
        #[command(flatten)]
        overrides: PlaybackOverrides,
        /// Comma-separated steps: next, prev, goto:N, play, pause, toggle, wait:MS, dispose.
        #[arg(long, value_delimiter = ',', default_value = "")]
        script: Vec<String>,
    },
    /// Check a deck file for errors.
    Validate {
        #[command(flatten)]
        source: DeckSource,
    },
    /// List the slides in a deck.
    Inspect {
        #[command(flatten)]
        source: DeckSource,
    },
    /// List built-in deck presets.
    Presets,
    /// Write a new deck file, from a preset or interactive prompts.
    New {
        /// Destination path (defaults to ./marquee.toml).
        path: Option<PathBuf>,
        /// Start from a built-in preset.
        #[arg(long)]
        preset: Option<String>,
        /// Overwrite an existing file without asking.
        #[arg(long, default_value_t = false)]
        force: bool,
    },
    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
    /// Generate man pages.
    ManPages {
        /// Output directory for man pages.
        #[arg(default_value = "man")]
        dir: PathBuf,
    },
}

fn main() -> ExitCode {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let msg = info.to_string();
        if msg.contains("Broken pipe")
            || msg.contains("broken pipe")
            || msg.contains("os error 32")
            || msg.contains("failed printing to stdout")
        {
            std::process::exit(0);
        }
        default_hook(info);
    }));

    let cli = Cli::parse();

    let default_level = if cli.trace {
        "trace"
    } else if cli.verbose {
        "debug"
    } else {
        "warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("MARQUEE_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    let json_output = cli.json;

    let result = match cli.command {
        Commands::Play { source, overrides } => {
            commands::play::run(&source, overrides, json_output)
        }
        Commands::Run {
            source,
            overrides,
            ticks,
        } => {
            install_signal_handler();
            commands::run::run(&source, overrides, ticks, json_output)
        }
        Commands::Simulate {
            source,
            overrides,
            script,
        } => commands::simulate::run(&source, overrides, &script, json_output),
        Commands::Validate { source } => commands::validate::run(&source, json_output),
        Commands::Inspect { source } => commands::inspect::run(&source, json_output),
        Commands::Presets => commands::presets::run(json_output),
        Commands::New {
            path,
            preset,
            force,
        } => commands::new::run(path.as_deref(), preset.as_deref(), force, json_output),
        Commands::Completions { shell } => commands::completions::run::<Cli>(shell),
        Commands::ManPages { dir } => commands::man_pages::run::<Cli>(&dir, json_output),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(msg) => {
            eprintln!("error: {msg}");
            let code = if msg.starts_with("deck error:") {
                EXIT_DECK_ERROR
            } else {
                EXIT_FAILURE
            };
            ExitCode::from(code)
        }
    }
}
