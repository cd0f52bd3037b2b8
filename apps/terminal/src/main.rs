use std::io::{self, BufRead};

use anyhow::{Context, Result};
use clap::Parser;
use client_core::{CatalogSession, HttpProductSource, UiEvent};
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod surface;

use commands::{parse_command, Command, HELP};
use config::{load_settings, parse_products_url};
use surface::TerminalSurface;

#[derive(Parser, Debug)]
#[command(name = "catalog", about = "Browse a product catalog from the terminal")]
struct Args {
    /// Product listing endpoint; overrides catalog.toml and the environment.
    #[arg(long)]
    products_url: Option<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(io::stderr)
        .init();
    let args = Args::parse();

    let mut settings = load_settings();
    if let Some(url) = args.products_url {
        settings.products_url = url;
    }
    let url = parse_products_url(&settings.products_url)?;

    let source = HttpProductSource::new(url);
    let mut session = CatalogSession::load(&source)
        .await
        .with_context(|| format!("failed to load products from {}", source.url()))?;

    let stdout = io::stdout();
    let mut surface = TerminalSurface::new(stdout.lock());
    session.start(&mut surface);
    surface.line("type 'help' for commands");

    for line in io::stdin().lock().lines() {
        let line = line.context("failed to read command")?;
        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(error) => {
                tracing::warn!(input = %line, %error, "rejected command");
                surface.line(error.to_string());
                continue;
            }
        };

        match command {
            Command::Ui(event) => {
                let is_toggle = matches!(
                    event,
                    UiEvent::ToggleColor { .. }
                        | UiEvent::ToggleSize { .. }
                        | UiEvent::TogglePriceRange { .. }
                );
                session.handle(event, &mut surface);
                if is_toggle {
                    surface.line("filtro selecionado; 'apply' para aplicar");
                }
            }
            Command::FlipSize(size) => {
                let on = !session.pending_filters().sizes().contains(&size);
                session.handle(UiEvent::ToggleSize { size, on }, &mut surface);
                surface.line("filtro selecionado; 'apply' para aplicar");
            }
            Command::Buy(quantity) => {
                for _ in 0..quantity {
                    session.handle(UiEvent::Buy, &mut surface);
                }
            }
            Command::Help => surface.line(HELP),
            Command::Quit => break,
        }
    }

    Ok(())
}
