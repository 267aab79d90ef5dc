//! PerC CLI - serve the solver API or solve a single problem locally.

use std::net::IpAddr;

use anyhow::Result;
use clap::{Parser, Subcommand};
use perc_core::{ExplanationStyle, SelectionMode};
use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;

/// PerC AI - permutation & combination solver with AI explanations.
#[derive(Parser, Debug)]
#[command(name = "perc", author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API (`GET /`, `POST /solve`).
    ///
    /// Requires NVIDIA_API_KEY in the environment or a `.env` file.
    Serve {
        /// Address to bind.
        #[arg(long, env = "PERC_HOST", default_value = "0.0.0.0")]
        host: IpAddr,

        /// Port to listen on.
        #[arg(short, long, env = "PERC_PORT", default_value_t = 8000)]
        port: u16,

        /// The single origin allowed to call the API with credentials.
        #[arg(long, env = "PERC_ALLOWED_ORIGIN")]
        origin: Option<String>,
    },

    /// Solve one problem and print the result as JSON.
    Solve {
        /// Comma-separated item labels, e.g. `A,B,C`.
        #[arg(short, long, value_delimiter = ',', required = true)]
        items: Vec<String>,

        /// Selection size.
        #[arg(short, allow_negative_numbers = true)]
        r: i64,

        /// Calculation type: perm or comb.
        #[arg(short = 't', long = "type")]
        mode: SelectionMode,

        /// Also request an explanation from the language model.
        #[arg(short, long)]
        explain: bool,

        /// Explanation style: Tutor or Expert.
        #[arg(short, long, default_value = "Tutor")]
        style: ExplanationStyle,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing based on verbosity; RUST_LOG wins when set
    let level = if cli.quiet {
        Level::ERROR
    } else if cli.verbose {
        Level::DEBUG
    } else {
        Level::WARN // Default to less noise
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_str().to_lowercase()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_span_events(FmtSpan::CLOSE)
        .with_target(false)
        .init();

    config::load_dotenv();

    match cli.command {
        Commands::Serve { host, port, origin } => {
            commands::serve::execute(host, port, origin.as_deref()).await
        }
        Commands::Solve {
            items,
            r,
            mode,
            explain,
            style,
        } => commands::solve::execute(items, r, mode, explain, style).await,
    }
}
