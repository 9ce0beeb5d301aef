use anyhow::Result;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use cloudphoto_core::{album, Error, Storage};

pub async fn execute(storage: &Storage, album_name: &str, path: &Path) -> Result<()> {
    let photos = collect_photo_paths(path);

    if photos.is_empty() {
        return Err(Error::NoPhotos(path.to_path_buf()).into());
    }

    for local_path in photos {
        let filename = local_path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        let key = album::photo_key(album_name, &filename);

        // Partial-failure tolerant: one bad file does not stop the rest
        match storage.upload_file(&local_path, &key).await {
            Ok(()) => println!("Uploaded '{filename}' to album '{album_name}'"),
            Err(err) => {
                tracing::warn!("Failed to upload {}: {err:#}", local_path.display());
            }
        }
    }

    Ok(())
}

/// Eligible photos directly inside `path`, sorted for stable upload order.
/// Subdirectories are not descended into.
fn collect_photo_paths(path: &Path) -> Vec<PathBuf> {
    let mut photos: Vec<PathBuf> = WalkDir::new(path)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.into_path())
        .filter(|entry_path| album::is_photo_file(entry_path))
        .collect();

    photos.sort();
    photos
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn collects_only_jpeg_files_at_the_top_level() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.jpg", "a.JPEG", "notes.txt", "c.png"] {
            fs::write(dir.path().join(name), b"x").unwrap();
        }
        // Photos inside subdirectories stay out of the album
        let sub = dir.path().join("nested");
        fs::create_dir(&sub).unwrap();
        fs::write(sub.join("deep.jpg"), b"x").unwrap();

        let photos = collect_photo_paths(dir.path());
        let names: Vec<_> = photos
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();

        assert_eq!(names, vec!["a.JPEG", "b.jpg"]);
    }

    #[test]
    fn empty_directory_yields_no_photos() {
        let dir = tempfile::tempdir().unwrap();
        assert!(collect_photo_paths(dir.path()).is_empty());
    }

    #[test]
    fn missing_directory_yields_no_photos() {
        let dir = tempfile::tempdir().unwrap();
        assert!(collect_photo_paths(&dir.path().join("absent")).is_empty());
    }
}
