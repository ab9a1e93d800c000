//! RCA Console - terminal front-end for the incident RCA backend
//!
//! Fetch root-cause-analysis reports by ticket number, or route free-text
//! questions to the backend agent. Runs as one-shot commands or as an
//! interactive TUI console (the default).

use anyhow::Result;
use clap::{Parser, Subcommand};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "rcactl")]
#[command(about = "RCA console - root-cause reports and agentic incident queries", long_about = None)]
#[command(version = VERSION)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the RCA report for a ticket number
    Ticket {
        /// Ticket number (an RTSK task number unless --ritm is set)
        number: String,

        /// Look the number up as a RITM request item
        #[arg(long)]
        ritm: bool,

        /// Copy the report (pretty-printed JSON) to the clipboard
        #[arg(long)]
        copy: bool,

        /// Print the raw report as pretty-printed JSON
        #[arg(long)]
        json: bool,
    },

    /// Ask the backend agent a free-text question
    Ask {
        /// The question
        query: String,

        /// Copy the answer text to the clipboard
        #[arg(long)]
        copy: bool,
    },

    /// Show the resolved configuration
    Config,

    /// Open the interactive console (default)
    Tui,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Ticket {
            number,
            ritm,
            copy,
            json,
        }) => rcactl::commands::ticket(number, ritm, copy, json).await,
        Some(Commands::Ask { query, copy }) => rcactl::commands::ask(query, copy).await,
        Some(Commands::Config) => rcactl::commands::config().await,
        Some(Commands::Tui) | None => rcactl::tui::run().await,
    }
}
