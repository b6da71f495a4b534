//! CLI for wikiseek.

mod commands;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;
use wikiseek_core::config;

use commands::{run_completions, run_lookup, run_man, run_serve, ServeArgs};

/// Top-level CLI for wikiseek.
#[derive(Debug, Parser)]
#[command(name = "wikiseek")]
#[command(about = "wikiseek: jump from a search box straight to the Wikipedia article", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Serve the search page over HTTP.
    Serve {
        /// TCP port to listen on (default from config, 8080).
        port: Option<u16>,
        /// Address to bind (default from config, 127.0.0.1).
        #[arg(long, value_name = "ADDR")]
        bind: Option<String>,
        /// HTML file to serve instead of the built-in page.
        #[arg(long, value_name = "FILE")]
        page: Option<PathBuf>,
    },

    /// Print the article URL a search would navigate to (nothing for a blank query).
    Lookup {
        /// Search words; joined with single spaces.
        #[arg(value_name = "QUERY")]
        query: Vec<String>,
        /// Print the resulting action as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Generate a shell completion script.
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Print the man page (roff) to stdout.
    Man,
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Serve { port, bind, page } => {
                let cfg = config::load_or_init()?;
                tracing::debug!("loaded config: {:?}", cfg);
                run_serve(cfg, ServeArgs { port, bind, page }).await?;
            }
            CliCommand::Lookup { query, json } => {
                let cfg = config::load_or_init()?;
                run_lookup(&cfg, &query.join(" "), json)?;
            }
            CliCommand::Completions { shell } => run_completions(shell, &mut Cli::command()),
            CliCommand::Man => run_man(Cli::command())?,
        }

        Ok(())
    }
}
