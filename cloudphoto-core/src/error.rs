use std::path::PathBuf;

/// Domain errors with a user-facing message each. Every variant maps to
/// exit code 1 in the CLI; storage-level failures travel as `anyhow`
/// context on top of these.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("configuration file not found at {0}, run 'cloudphoto init' first")]
    ConfigMissing(PathBuf),

    #[error("configuration file is malformed: missing field '{0}'")]
    ConfigMalformed(&'static str),

    #[error("album '{0}' not found")]
    AlbumNotFound(String),

    #[error("photo '{photo}' not found in album '{album}'")]
    PhotoNotFound { album: String, photo: String },

    #[error("no albums found in the bucket")]
    NoAlbums,

    #[error("album '{0}' contains no photos")]
    EmptyAlbum(String),

    #[error("no .jpg/.jpeg photos found in {0}")]
    NoPhotos(PathBuf),
}
