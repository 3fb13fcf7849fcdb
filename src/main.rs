//! Blocktally CLI - serve, inspect, and export the block tracking database

use blocktally::config;
use blocktally::export;
use blocktally::server;
use blocktally::storage::SqliteStore;
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "blocktally")]
#[command(version = "0.1.0")]
#[command(about = "Staff productivity tracker for block cutting")]
#[command(long_about = r#"
Blocktally tracks staff members and their daily "blocks cut" counts in a
SQLite database and serves them over a small REST API.

Example usage:
  blocktally serve --port 10000
  blocktally stats
  blocktally export --output blocks.csv
"#)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP server
    Serve {
        /// Port to listen on (default 10000, or the config file's port)
        #[arg(short, long)]
        port: Option<u16>,

        /// Path to the database file
        #[arg(short, long)]
        database: Option<PathBuf>,

        /// Path to a blocktally.toml config file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Show row counts for the database
    Stats {
        /// Path to the database file
        #[arg(short, long, default_value = "block_tracking.db")]
        database: PathBuf,
    },

    /// Export all entries as CSV
    Export {
        /// Path to the database file
        #[arg(short, long, default_value = "block_tracking.db")]
        database: PathBuf,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Delete all entries and all staff
    Reset {
        /// Path to the database file
        #[arg(short, long, default_value = "block_tracking.db")]
        database: PathBuf,

        /// Confirm the reset
        #[arg(long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    match cli.command {
        Commands::Serve {
            port,
            database,
            config,
        } => {
            let file_config = config::load_config(config.as_deref())?.unwrap_or_default();

            let database = database
                .or_else(|| file_config.database.as_ref().map(PathBuf::from))
                .unwrap_or_else(config::default_database_path);
            let port = port
                .or(file_config.port)
                .unwrap_or(config::DEFAULT_PORT);

            config::ensure_db_dir(&database)?;

            tracing::info!("Database: {:?}", database);
            println!("🌍 Serving block tracking API on http://0.0.0.0:{}", port);
            server::start_server(port, database).await?;
        }

        Commands::Stats { database } => {
            let store = SqliteStore::open(&database)?;
            let stats = store.stats()?;

            println!("📊 Blocktally Statistics ({:?})", database);
            println!("------------------------------------");
            println!("{}", stats);
        }

        Commands::Export { database, output } => {
            let store = SqliteStore::open(&database)?;
            let bytes = export::export_csv(&store)?;

            match output {
                Some(path) => {
                    std::fs::write(&path, &bytes)?;
                    println!("✅ Exported {} bytes to {:?}", bytes.len(), path);
                }
                None => {
                    std::io::stdout().write_all(&bytes)?;
                }
            }
        }

        Commands::Reset { database, yes } => {
            if !yes {
                anyhow::bail!("refusing to reset without --yes");
            }

            let store = SqliteStore::open(&database)?;
            store.reset()?;
            println!("✅ All data reset.");
        }
    }

    Ok(())
}
