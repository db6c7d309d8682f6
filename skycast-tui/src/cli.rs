use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use crossterm::event::EventStream;
use futures::StreamExt;
use inquire::{Password, PasswordDisplayMode};
use skycast_core::{
    Config, WeatherProvider,
    config::{API_KEY_ENV, resolve_api_key},
    provider::provider_with_key,
};
use tokio::sync::mpsc;

use crate::{app::App, ui};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "skycast", version, about = "Debounced city weather lookup for the terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// OpenWeather API key; overrides the environment and the config file.
    #[arg(long)]
    pub api_key: Option<String>,

    /// Quiet period in milliseconds before a lookup fires.
    #[arg(long)]
    pub debounce_ms: Option<u64>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key in the config file.
    Configure,
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Some(Command::Configure) => configure(),
            None => lookup(self.api_key, self.debounce_ms).await,
        }
    }
}

fn configure() -> Result<()> {
    let mut config = Config::load()?;

    let api_key = Password::new("OpenWeather API key:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;

    config.set_api_key(api_key);
    config.save()?;

    println!("Saved configuration to {}", Config::config_file_path()?.display());
    Ok(())
}

/// Run the interactive lookup screen until the user quits.
async fn lookup(api_key_flag: Option<String>, debounce_ms: Option<u64>) -> Result<()> {
    let config = Config::load()?;
    let api_key = resolve_api_key(api_key_flag, std::env::var(API_KEY_ENV).ok(), &config)?;
    let provider = provider_with_key(api_key);
    let debounce = Duration::from_millis(debounce_ms.unwrap_or(config.debounce_ms));

    let mut terminal = ratatui::init();
    let result = event_loop(&mut terminal, provider, debounce).await;
    ratatui::restore();
    result
}

/// Single-task event loop: terminal events, a tick driving the debouncer,
/// and completions of spawned fetches. Each fetch carries its sequence
/// number back so the app can drop superseded results.
async fn event_loop(
    terminal: &mut ratatui::DefaultTerminal,
    provider: Arc<dyn WeatherProvider>,
    debounce: Duration,
) -> Result<()> {
    let mut app = App::new(debounce);
    let mut events = EventStream::new();
    let mut tick = tokio::time::interval(Duration::from_millis(50));
    let (tx, mut rx) = mpsc::unbounded_channel();

    while !app.should_quit() {
        terminal.draw(|frame| ui::draw(frame, &app))?;

        tokio::select! {
            maybe_event = events.next() => {
                match maybe_event {
                    Some(event) => {
                        let event = event.context("Failed to read terminal event")?;
                        app.handle_event(&event, Instant::now());
                    }
                    None => break,
                }
            }
            _ = tick.tick() => {
                if let Some(cmd) = app.tick(Instant::now()) {
                    let provider = Arc::clone(&provider);
                    let tx = tx.clone();
                    tokio::spawn(async move {
                        let result = provider.current(&cmd.city).await;
                        // Receiver gone means the screen is shutting down.
                        let _ = tx.send((cmd.seq, result));
                    });
                }
            }
            Some((seq, result)) = rx.recv() => {
                app.apply_fetch(seq, result);
            }
        }
    }

    Ok(())
}
