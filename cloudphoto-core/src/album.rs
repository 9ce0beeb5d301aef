//! Album/key model.
//!
//! An album is not a stored entity: it is a view over the object listing. An
//! album exists when at least one key lives under the prefix `"{name}/"`, or
//! when a zero-byte placeholder key `"{name}/"` itself exists (left behind by
//! console-created "folders").

use std::path::Path;

/// Key prefix for an album.
pub fn prefix(album: &str) -> String {
    format!("{album}/")
}

/// Object key for a photo inside an album.
pub fn photo_key(album: &str, filename: &str) -> String {
    format!("{album}/{filename}")
}

/// Placeholder keys mark an empty prefix and are never photos.
pub fn is_placeholder(key: &str) -> bool {
    key.ends_with('/')
}

/// Final path segment of a key.
pub fn basename(key: &str) -> &str {
    key.rsplit('/').next().unwrap_or(key)
}

pub fn is_photo_file(path: &Path) -> bool {
    if !path.is_file() {
        return false;
    }
    match path.extension() {
        Some(ext) => matches!(
            ext.to_str().unwrap_or("").to_lowercase().as_str(),
            "jpg" | "jpeg"
        ),
        None => false,
    }
}

/// The exact set of keys an album deletion must remove.
///
/// Deleting the placeholder after the objects guarantees the album leaves no
/// residual empty-prefix marker; the placeholder delete is idempotent when no
/// such key ever existed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeletePlan {
    /// The album only ever existed as a placeholder/implicit prefix.
    PlaceholderOnly { placeholder: String },
    /// Batch-delete the objects, then the placeholder.
    Objects {
        keys: Vec<String>,
        placeholder: String,
    },
}

impl DeletePlan {
    /// Build the plan from a raw listing of every key under the album prefix.
    pub fn for_album(album: &str, listed_keys: &[String]) -> Self {
        let placeholder = prefix(album);
        let keys: Vec<String> = listed_keys
            .iter()
            .filter(|key| !is_placeholder(key))
            .cloned()
            .collect();

        if keys.is_empty() {
            DeletePlan::PlaceholderOnly { placeholder }
        } else {
            DeletePlan::Objects { keys, placeholder }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn photo_file_extensions_are_case_insensitive() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["a.jpg", "b.JPEG", "c.Jpg"] {
            let path = dir.path().join(name);
            fs::write(&path, b"x").unwrap();
            assert!(is_photo_file(&path), "{name} should be eligible");
        }
        for name in ["d.png", "e.txt", "f"] {
            let path = dir.path().join(name);
            fs::write(&path, b"x").unwrap();
            assert!(!is_photo_file(&path), "{name} should not be eligible");
        }
    }

    #[test]
    fn directories_are_not_photo_files() {
        let dir = tempfile::tempdir().unwrap();
        let sub = dir.path().join("sub.jpg");
        fs::create_dir(&sub).unwrap();
        assert!(!is_photo_file(&sub));
    }

    #[test]
    fn basename_strips_the_album_prefix() {
        assert_eq!(basename("vacation/beach.jpg"), "beach.jpg");
        assert_eq!(basename("plain.jpg"), "plain.jpg");
    }

    #[test]
    fn empty_album_deletes_only_the_placeholder() {
        let plan = DeletePlan::for_album("vacation", &["vacation/".to_string()]);
        assert_eq!(
            plan,
            DeletePlan::PlaceholderOnly {
                placeholder: "vacation/".to_string()
            }
        );

        // Same plan when the prefix was purely implicit and nothing listed.
        let plan = DeletePlan::for_album("vacation", &[]);
        assert_eq!(
            plan,
            DeletePlan::PlaceholderOnly {
                placeholder: "vacation/".to_string()
            }
        );
    }

    #[test]
    fn populated_album_deletes_objects_then_placeholder() {
        let listed = vec![
            "vacation/".to_string(),
            "vacation/a.jpg".to_string(),
            "vacation/b.jpg".to_string(),
        ];
        let plan = DeletePlan::for_album("vacation", &listed);
        assert_eq!(
            plan,
            DeletePlan::Objects {
                keys: vec!["vacation/a.jpg".to_string(), "vacation/b.jpg".to_string()],
                placeholder: "vacation/".to_string(),
            }
        );
    }
}
