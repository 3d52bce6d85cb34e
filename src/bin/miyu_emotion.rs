use std::io::{self, BufRead};
use std::path::PathBuf;

use clap::Parser;
use miyu_emotion::{ConversationSession, PersonaConfig};
use tracing_subscriber::EnvFilter;

/// Feed messages through a Miyu session and print the emotional state after each one.
#[derive(Debug, Parser)]
#[command(name = "miyu-emotion", version, about)]
struct Cli {
    /// Persona config in TOML
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long)]
    verbose: bool,

    /// Messages to process; stdin lines are read when none are given
    messages: Vec<String>,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match &cli.config {
        Some(path) => PersonaConfig::from_file(path)?,
        None => PersonaConfig::default(),
    };

    let mut session = ConversationSession::new(&config)?;

    let mut process = |text: &str| -> Result<(), Box<dyn std::error::Error>> {
        let snapshot = session.process_message(text)?;
        println!("{}", serde_json::to_string(&snapshot)?);
        Ok(())
    };

    if cli.messages.is_empty() {
        for line in io::stdin().lock().lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            process(&line)?;
        }
    } else {
        for message in &cli.messages {
            process(message)?;
        }
    }

    Ok(())
}
