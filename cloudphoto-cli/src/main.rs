mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cloudphoto_core::{Config, Storage};

#[derive(Parser)]
#[command(name = "cloudphoto")]
#[command(about = "CLI tool for an S3-hosted personal photo archive", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the bucket and write the config file
    Init,

    /// Upload .jpg/.jpeg photos from a directory into an album
    Upload {
        /// Album name
        #[arg(long)]
        album: String,

        /// Directory containing photos
        #[arg(long, default_value = ".")]
        path: PathBuf,
    },

    /// Download an album's photos into a directory
    Download {
        /// Album name
        #[arg(long)]
        album: String,

        /// Directory to save photos to
        #[arg(long, default_value = ".")]
        path: PathBuf,
    },

    /// List albums, or photos within an album
    List {
        /// Album name
        #[arg(long)]
        album: Option<String>,
    },

    /// Delete a photo or an entire album
    Delete {
        /// Album name
        #[arg(long)]
        album: String,

        /// Photo filename within the album
        #[arg(long)]
        photo: Option<String>,
    },

    /// Regenerate and publish the static gallery site
    Mksite,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cloudphoto_cli=info,cloudphoto_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match run(Cli::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config_path = Config::default_path()?;

    // Every command except `init` requires an existing config
    if matches!(cli.command, Commands::Init) {
        return commands::init::execute(&config_path).await;
    }

    let config = Config::load(&config_path)?;
    let storage = Storage::new(&config).await?;

    match cli.command {
        Commands::Init => unreachable!("handled above"),
        Commands::Upload { album, path } => {
            commands::upload::execute(&storage, &album, &path).await
        }
        Commands::Download { album, path } => {
            commands::download::execute(&storage, &album, &path).await
        }
        Commands::List { album } => commands::list::execute(&storage, album.as_deref()).await,
        Commands::Delete { album, photo } => {
            commands::delete::execute(&storage, &album, photo.as_deref()).await
        }
        Commands::Mksite => commands::mksite::execute(&storage).await,
    }
}
