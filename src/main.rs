mod app;
mod clipboard;
mod color;
mod config;
mod history;
mod input;
mod tui;

use anyhow::Context;
use clap::{Parser, Subcommand};
use color::{Rgb, mixer, palette};
use std::path::{Path, PathBuf};

#[derive(Debug, Parser)]
#[command(
    name = "tincture",
    version,
    about = "Mix a base color with a random one and name the result"
)]
struct Cli {
    /// Override config file path.
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the interactive TUI (default).
    Tui,
    /// Print freshly mixed colors to stdout (headless).
    Mix {
        /// Base color as #rrggbb; white when missing or malformed.
        #[arg(short, long)]
        base: Option<String>,
        /// How many colors to mix.
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,
        /// Also write color-history.json into this directory.
        #[arg(long)]
        export: Option<PathBuf>,
    },
    /// Print the palette name closest to a color.
    Name { hex: String },
    /// Find the first palette color whose name contains QUERY.
    Search { query: String },
    /// List the reference palette.
    Palette,
}

impl Command {
    /// The TUI draws on the alternate screen, so nothing else may write to the terminal.
    fn owns_terminal(&self) -> bool {
        matches!(self, Command::Tui)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cfg = config::load(cli.config.as_deref()).context("load config")?;
    let cfg_path = match cli.config.clone() {
        Some(p) => p,
        None => config::default_config_path().context("default config path")?,
    };

    let command = cli.command.unwrap_or(Command::Tui);
    init_logging(&cfg.paths.data_dir, command.owns_terminal());
    tracing::debug!(path = %cfg_path.display(), "loaded config");

    match command {
        Command::Tui => {
            let mut terminal = tui::TerminalGuard::enter(cfg.input.mouse).context("init terminal")?;
            let mut app = app::App::new(cfg, cfg_path);
            app.run(terminal.terminal_mut()).await?;
        }
        Command::Mix {
            base,
            count,
            export,
        } => {
            let base = mixer::base_or_white(base.as_deref());
            let mut rng = rand::rng();
            let mut history = history::History::new();
            for _ in 0..count {
                let mix = mixer::generate(base, &mut rng);
                let hex = mix.hex();
                print_color(&hex, &mix.composition());
                history.record(hex);
            }
            if let Some(dir) = export {
                let path = history.export_to(&dir)?;
                println!("Saved {} colors to {}", history.len(), path.display());
            }
        }
        Command::Name { hex } => {
            let rgb = Rgb::from_hex(&hex).with_context(|| format!("not a #rrggbb color: {hex}"))?;
            let entry = palette::closest(rgb);
            println!("{}  ({}, distance {:.1})", entry.name, entry.hex, rgb.distance(entry.rgb()));
        }
        Command::Search { query } => {
            let entry = palette::search(&query).context("No matching color found.")?;
            println!("{}  {}", entry.hex, entry.name);
        }
        Command::Palette => {
            for entry in palette::PALETTE.iter() {
                println!("{}  {}", entry.hex, entry.name);
            }
        }
    }

    Ok(())
}

/// Log lines go to a file under the data dir. Without it, headless commands
/// log to stderr and the TUI drops them.
fn init_logging(data_dir: &Path, owns_terminal: bool) {
    let file = std::fs::create_dir_all(data_dir).and_then(|_| {
        std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(data_dir.join("tincture.log"))
    });

    let builder = tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true);
    match file {
        Ok(f) => builder
            .with_ansi(false)
            .with_writer(std::sync::Mutex::new(f))
            .init(),
        Err(_) if owns_terminal => builder.with_writer(std::io::sink).init(),
        Err(_) => builder.with_writer(std::io::stderr).init(),
    }
}

fn print_color(hex: &str, composition: &str) {
    let name = color::closest_color_name(hex).unwrap_or("?");
    println!("{hex}  {name:<12} {composition}");
}
