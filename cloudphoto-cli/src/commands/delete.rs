use anyhow::Result;

use cloudphoto_core::album::{self, DeletePlan};
use cloudphoto_core::{Error, Storage};

pub async fn execute(storage: &Storage, album_name: &str, photo: Option<&str>) -> Result<()> {
    let albums = storage.list_albums().await?;
    if !albums.iter().any(|existing| existing == album_name) {
        return Err(Error::AlbumNotFound(album_name.to_string()).into());
    }

    if let Some(photo) = photo {
        return delete_photo(storage, album_name, photo).await;
    }

    delete_album(storage, album_name).await
}

/// Delete exactly one photo; the album and its other photos stay untouched.
async fn delete_photo(storage: &Storage, album_name: &str, photo: &str) -> Result<()> {
    let key = album::photo_key(album_name, photo);

    if !storage.object_exists(&key).await? {
        return Err(Error::PhotoNotFound {
            album: album_name.to_string(),
            photo: photo.to_string(),
        }
        .into());
    }

    storage.delete_object(&key).await?;
    println!("Deleted photo '{photo}' from album '{album_name}'");

    Ok(())
}

async fn delete_album(storage: &Storage, album_name: &str) -> Result<()> {
    let listed = storage.list_keys(&album::prefix(album_name)).await?;

    match DeletePlan::for_album(album_name, &listed) {
        DeletePlan::PlaceholderOnly { placeholder } => {
            storage.delete_object(&placeholder).await?;
        }
        DeletePlan::Objects { keys, placeholder } => {
            storage.delete_objects(&keys).await?;
            // Idempotent: clears any placeholder so no empty-prefix marker
            // keeps the album alive in listings
            storage.delete_object(&placeholder).await?;
        }
    }

    println!("Deleted album '{album_name}'");
    Ok(())
}
