use anyhow::Result;

use cloudphoto_core::{album, site, Storage};

/// Regenerate the whole site from bucket contents and publish it.
///
/// Unlike uploads/downloads there is no per-file tolerance here: a failed
/// page upload aborts the run, since a half-published site is worse than
/// the previous complete one.
pub async fn execute(storage: &Storage) -> Result<()> {
    storage.make_public_readable().await?;

    let albums = storage.list_albums().await?;

    let mut pages = vec![site::index_page(&albums), site::error_page()];
    for (i, album_name) in albums.iter().enumerate() {
        let keys = storage.list_keys(&album::prefix(album_name)).await?;
        let photos: Vec<String> = keys
            .iter()
            .filter(|key| !album::is_placeholder(key))
            .map(|key| album::basename(key).to_string())
            .collect();

        pages.push(site::album_page(storage.bucket(), album_name, i + 1, &photos));
    }

    for page in pages {
        storage.upload_bytes(page.html.into_bytes(), &page.key).await?;
    }

    storage
        .configure_website(site::INDEX_DOCUMENT, site::ERROR_DOCUMENT)
        .await?;

    println!("{}", site::website_url(storage.bucket()));
    Ok(())
}
