//! CLI entry point for knowledge-hub

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "knowledge-hub")]
#[command(version)]
#[command(about = "A server-rendered article front end for a headless CMS", long_about = None)]
struct Cli {
    /// Set the base directory holding _config.yml (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the article pages
    #[command(alias = "s")]
    Server {
        /// Port to listen on (defaults to server.port in _config.yml)
        #[arg(short, long)]
        port: Option<u16>,

        /// IP address to bind to (defaults to server.ip in _config.yml)
        #[arg(short, long)]
        ip: Option<String>,
    },

    /// List displayable articles
    List {
        /// Also show records hidden because of a missing slug or title
        #[arg(short, long)]
        all: bool,

        /// Print the articles as JSON
        #[arg(long, conflicts_with = "all")]
        json: bool,
    },

    /// Show one article by slug or path
    Show {
        /// Article slug, or a path such as /articles/intro-to-x
        target: String,

        /// Print the rendered HTML page instead of text
        #[arg(long)]
        html: bool,
    },

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "knowledge_hub=debug,info"
    } else {
        "knowledge_hub=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::Server { port, ip } => {
            let hub = knowledge_hub::KnowledgeHub::new(&base_dir)?;
            let ip = ip.unwrap_or_else(|| hub.config.server.ip.clone());
            let port = port.unwrap_or(hub.config.server.port);

            tracing::info!("Starting server at http://{}:{}", ip, port);
            knowledge_hub::server::start(&hub, &ip, port).await?;
        }

        Commands::List { all, json } => {
            let hub = knowledge_hub::KnowledgeHub::new(&base_dir)?;
            knowledge_hub::commands::list::run(&hub, all, json).await?;
        }

        Commands::Show { target, html } => {
            let hub = knowledge_hub::KnowledgeHub::new(&base_dir)?;
            knowledge_hub::commands::show::run(&hub, &target, html).await?;
        }

        Commands::Version => {
            println!("knowledge-hub version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
