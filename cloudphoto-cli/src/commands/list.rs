use anyhow::Result;

use cloudphoto_core::{album, Error, Storage};

pub async fn execute(storage: &Storage, album_name: Option<&str>) -> Result<()> {
    match album_name {
        None => list_albums(storage).await,
        Some(album_name) => list_photos(storage, album_name).await,
    }
}

async fn list_albums(storage: &Storage) -> Result<()> {
    let albums = storage.list_albums().await?;

    if albums.is_empty() {
        return Err(Error::NoAlbums.into());
    }

    for album_name in albums {
        println!("{album_name}");
    }

    Ok(())
}

async fn list_photos(storage: &Storage, album_name: &str) -> Result<()> {
    let keys = storage.list_keys(&album::prefix(album_name)).await?;

    let photos: Vec<&str> = keys
        .iter()
        .filter(|key| !album::is_placeholder(key))
        .map(|key| album::basename(key))
        .collect();

    if photos.is_empty() {
        return Err(Error::EmptyAlbum(album_name.to_string()).into());
    }

    for photo in photos {
        println!("{photo}");
    }

    Ok(())
}
