//! Nanote CLI - encode notes into Nano amounts and read them back.

use clap::{Parser, Subcommand};

mod commands;
mod output;

use commands::{charsets, decode, encode, inspect};

#[derive(Parser)]
#[command(name = "nanote")]
#[command(about = "Encode text into Nano amounts and decode it back")]
struct Cli {
    /// Log charset choices and failure reasons to stderr
    #[arg(long, global = true)]
    verbose: bool,
    /// Protocol configuration file (JSON)
    #[arg(long, global = true)]
    config: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode text into an amount
    Encode {
        /// Text to encode (or stdin if not provided)
        text: Option<String>,
        /// Print the digit-only form without a decimal point
        #[arg(long)]
        raw: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Decode an amount back into text
    Decode {
        /// Amount to decode
        amount: String,
        /// Amount is in digit-only form
        #[arg(long)]
        raw: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the fields carried by an amount
    Inspect {
        /// Amount to inspect
        amount: String,
        /// Amount is in digit-only form
        #[arg(long)]
        raw: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the charset catalog
    Charsets {
        /// Output as JSON
        #[arg(long)]
        json: bool,
        /// Stop after N charsets (default: all)
        #[arg(long)]
        limit: Option<usize>,
    },
}

fn main() {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::from_default_env()
                    .add_directive(tracing::Level::DEBUG.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }

    let result = commands::load_engine(cli.config.as_deref(), cli.verbose).and_then(|engine| {
        match cli.command {
            Commands::Encode { text, raw, json } => encode::run(&engine, text, raw, json),
            Commands::Decode { amount, raw, json } => decode::run(&engine, amount, raw, json),
            Commands::Inspect { amount, raw, json } => inspect::run(&engine, amount, raw, json),
            Commands::Charsets { json, limit } => charsets::run(&engine, json, limit),
        }
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
