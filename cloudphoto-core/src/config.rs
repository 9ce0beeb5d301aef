use anyhow::{Context, Result};
use ini::Ini;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Error;

pub const DEFAULT_ENDPOINT: &str = "https://storage.yandexcloud.net";
pub const DEFAULT_REGION: &str = "ru-central1";

const CONFIG_DIR: &str = "cloudphoto";
const CONFIG_FILE: &str = "cloudphotorc";

/// Tool configuration, written once by `init` and read-only afterwards.
///
/// Credentials are stored in plaintext in the config file. That matches the
/// scope of a personal archive tool but is worth knowing before pointing it
/// at shared credentials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub aws_access_key_id: String,
    pub aws_secret_access_key: String,
    pub bucket: String,
    pub endpoint_url: String,
    pub region: String,
}

impl Config {
    pub fn new(aws_access_key_id: String, aws_secret_access_key: String, bucket: String) -> Self {
        Self {
            aws_access_key_id,
            aws_secret_access_key,
            bucket,
            endpoint_url: DEFAULT_ENDPOINT.to_string(),
            region: DEFAULT_REGION.to_string(),
        }
    }

    /// `~/.config/cloudphoto/cloudphotorc` (platform equivalent via `dirs`).
    pub fn default_path() -> Result<PathBuf> {
        let base = dirs::config_dir().context("Could not determine the user config directory")?;
        Ok(base.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// Write the config file, overwriting any existing one.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let mut ini = Ini::new();
        ini.with_section(None::<String>)
            .set("aws_access_key_id", &self.aws_access_key_id)
            .set("aws_secret_access_key", &self.aws_secret_access_key)
            .set("bucket_name", &self.bucket)
            .set("region_name", &self.region)
            .set("endpoint_url", &self.endpoint_url);

        ini.write_to_file(path)
            .with_context(|| format!("Failed to write config file {}", path.display()))?;

        tracing::debug!("Config written to {}", path.display());
        Ok(())
    }

    /// Read the config file. Endpoint and region fall back to the Yandex
    /// Object Storage defaults when a config predates those fields.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::ConfigMissing(path.to_path_buf()).into());
        }

        let ini = Ini::load_from_file(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let section = ini.general_section();

        let required = |field: &'static str| -> Result<String> {
            section
                .get(field)
                .map(str::to_string)
                .ok_or_else(|| Error::ConfigMalformed(field).into())
        };

        Ok(Self {
            aws_access_key_id: required("aws_access_key_id")?,
            aws_secret_access_key: required("aws_secret_access_key")?,
            bucket: required("bucket_name")?,
            region: section
                .get("region_name")
                .unwrap_or(DEFAULT_REGION)
                .to_string(),
            endpoint_url: section
                .get("endpoint_url")
                .unwrap_or(DEFAULT_ENDPOINT)
                .to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Config {
        Config::new(
            "AKIAEXAMPLE".to_string(),
            "secret-key".to_string(),
            "my-photos".to_string(),
        )
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cloudphotorc");

        let config = sample();
        config.save(&path).unwrap();

        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn save_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("cloudphoto").join("cloudphotorc");

        sample().save(&path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn load_missing_file_is_config_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent");

        let err = Config::load(&path).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::ConfigMissing(_))
        ));
    }

    #[test]
    fn load_without_required_field_is_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cloudphotorc");
        std::fs::write(&path, "aws_access_key_id=AKIAEXAMPLE\n").unwrap();

        let err = Config::load(&path).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::ConfigMalformed("aws_secret_access_key"))
        ));
    }

    #[test]
    fn load_defaults_endpoint_and_region() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cloudphotorc");
        std::fs::write(
            &path,
            "aws_access_key_id=a\naws_secret_access_key=b\nbucket_name=c\n",
        )
        .unwrap();

        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded.endpoint_url, DEFAULT_ENDPOINT);
        assert_eq!(loaded.region, DEFAULT_REGION);
    }
}
