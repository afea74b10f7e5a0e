//! CLI entry point for mdfeed

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "mdfeed")]
#[command(version)]
#[command(about = "A JSON API server for markdown blog collections", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    /// Development mode (use the configured dev base URL)
    #[arg(long, global = true)]
    dev: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new content workspace
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        folder: PathBuf,
    },

    /// Start the API server
    #[command(alias = "s")]
    Serve {
        /// Port to listen on (defaults to the configured port)
        #[arg(short, long)]
        port: Option<u16>,

        /// IP address to bind to (defaults to the configured address)
        #[arg(short, long)]
        ip: Option<String>,

        /// Open the API in a browser
        #[arg(short, long)]
        open: bool,

        /// Serve without watching for content changes
        #[arg(long)]
        r#static: bool,
    },

    /// List the posts of a collection
    List {
        /// Collection name (defaults to the configured default collection)
        collection: Option<String>,
    },

    /// List available collections
    Collections,

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "mdfeed=debug,info"
    } else {
        "mdfeed=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::Init { folder } => {
            let target_dir = if folder.is_absolute() {
                folder
            } else {
                base_dir.join(folder)
            };
            tracing::info!("Initializing content workspace in {:?}", target_dir);
            mdfeed::commands::init::init_site(&target_dir)?;
            println!("Initialized content workspace in {:?}", target_dir);
        }

        Commands::Serve {
            port,
            ip,
            open,
            r#static,
        } => {
            let site = mdfeed::Site::new(&base_dir, cli.dev)?;
            let port = port.unwrap_or(site.config.server.port);
            let ip = ip.unwrap_or_else(|| site.config.server.ip.clone());

            tracing::info!("Starting server at http://{}:{}", ip, port);
            mdfeed::server::start(&site, &ip, port, !r#static, open).await?;
        }

        Commands::List { collection } => {
            let site = mdfeed::Site::new(&base_dir, cli.dev)?;
            mdfeed::commands::list::run(&site, collection.as_deref())?;
        }

        Commands::Collections => {
            let site = mdfeed::Site::new(&base_dir, cli.dev)?;
            mdfeed::commands::list::run_collections(&site)?;
        }

        Commands::Version => {
            println!("mdfeed version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
