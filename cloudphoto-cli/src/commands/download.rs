use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use cloudphoto_core::{album, Storage};

pub async fn execute(storage: &Storage, album_name: &str, path: &Path) -> Result<()> {
    let keys = storage.list_keys(&album::prefix(album_name)).await?;

    // A missing album is reported but is not a failure for download
    if keys.is_empty() {
        println!("Album '{album_name}' not found in bucket '{}'.", storage.bucket());
        return Ok(());
    }

    fs::create_dir_all(path).with_context(|| format!("Failed to create {}", path.display()))?;

    for key in keys {
        if album::is_placeholder(&key) {
            continue;
        }

        let filename = album::basename(&key);
        let local_path = path.join(filename);

        match download_one(storage, &key, &local_path).await {
            Ok(()) => println!("Downloaded '{filename}' to '{}'", local_path.display()),
            Err(err) => {
                tracing::warn!("Failed to download {key}: {err:#}");
            }
        }
    }

    Ok(())
}

async fn download_one(storage: &Storage, key: &str, local_path: &Path) -> Result<()> {
    let bytes = storage.download_bytes(key).await?;
    fs::write(local_path, bytes).with_context(|| format!("Failed to write {}", local_path.display()))
}
