use anyhow::{Context, Result};
use std::io::{self, Write};
use std::path::Path;

use cloudphoto_core::{Config, Storage};

/// Prompt for credentials and a bucket name, create the bucket, and write
/// the config file.
pub async fn execute(config_path: &Path) -> Result<()> {
    let aws_access_key_id = prompt("Enter AWS Access Key ID: ")?;
    let aws_secret_access_key = prompt("Enter AWS Secret Access Key: ")?;
    let bucket = prompt("Enter bucket name: ")?;

    let config = Config::new(aws_access_key_id, aws_secret_access_key, bucket);
    let storage = Storage::new(&config).await?;

    // The bucket may already exist; that is not a reason to discard the
    // entered credentials.
    if let Err(err) = storage.create_bucket().await {
        tracing::warn!("Could not create bucket '{}': {err:#}", config.bucket);
    }

    config.save(config_path)?;
    println!("Configuration written to {}", config_path.display());

    Ok(())
}

fn prompt(label: &str) -> Result<String> {
    print!("{label}");
    io::stdout().flush().context("Failed to flush stdout")?;

    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .context("Failed to read from stdin")?;

    Ok(line.trim().to_string())
}
