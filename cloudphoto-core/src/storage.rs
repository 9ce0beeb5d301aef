use anyhow::{Context, Result};
use aws_credential_types::Credentials;
use aws_sdk_s3::{
    primitives::ByteStream,
    types::{BucketCannedAcl, Delete, ErrorDocument, IndexDocument, ObjectIdentifier, WebsiteConfiguration},
    Client,
};
use std::path::Path;

use crate::config::Config;

/// Handle to the configured bucket.
///
/// Constructed once per process from the loaded [`Config`] and passed by
/// reference into each command. The original tool kept a module-level
/// singleton that silently ignored credentials supplied after the first
/// construction; an owned value has no such failure mode.
#[derive(Clone)]
pub struct Storage {
    client: Client,
    bucket: String,
}

impl Storage {
    pub async fn new(config: &Config) -> Result<Self> {
        let credentials = Credentials::new(
            config.aws_access_key_id.clone(),
            config.aws_secret_access_key.clone(),
            None,
            None,
            "cloudphoto-config",
        );

        let sdk_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .credentials_provider(credentials)
            .endpoint_url(&config.endpoint_url)
            .region(aws_config::Region::new(config.region.clone()))
            .load()
            .await;

        // S3-compatible endpoints want path-style addressing
        let s3_config = aws_sdk_s3::config::Builder::from(&sdk_config)
            .force_path_style(true)
            .build();

        Ok(Self {
            client: Client::from_conf(s3_config),
            bucket: config.bucket.clone(),
        })
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    pub async fn create_bucket(&self) -> Result<()> {
        tracing::debug!("S3 CreateBucket: bucket={}", self.bucket);

        self.client
            .create_bucket()
            .bucket(&self.bucket)
            .send()
            .await
            .with_context(|| format!("Failed to create bucket {}", self.bucket))?;

        Ok(())
    }

    /// Upload a local file.
    pub async fn upload_file(&self, local_path: &Path, key: &str) -> Result<()> {
        tracing::debug!("S3 PUT: bucket={}, key={}, local_path={:?}", self.bucket, key, local_path);

        let body = ByteStream::from_path(local_path)
            .await
            .with_context(|| format!("Failed to read {}", local_path.display()))?;

        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(body)
            .content_type(Self::guess_content_type(key))
            .send()
            .await
            .with_context(|| format!("Failed to upload {key}"))?;

        tracing::debug!("S3 PUT success: key={}", key);
        Ok(())
    }

    /// Upload in-memory bytes (generated site pages).
    pub async fn upload_bytes(&self, data: Vec<u8>, key: &str) -> Result<()> {
        tracing::debug!("S3 PUT (bytes): bucket={}, key={}, size={} bytes", self.bucket, key, data.len());

        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(ByteStream::from(data))
            .content_type(Self::guess_content_type(key))
            .send()
            .await
            .with_context(|| format!("Failed to upload {key}"))?;

        Ok(())
    }

    /// Download an object into memory.
    pub async fn download_bytes(&self, key: &str) -> Result<Vec<u8>> {
        tracing::debug!("S3 GET: bucket={}, key={}", self.bucket, key);

        let response = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .with_context(|| format!("Failed to download {key}"))?;

        let data = response
            .body
            .collect()
            .await
            .with_context(|| format!("Failed to read body of {key}"))?;

        let bytes = data.to_vec();
        tracing::debug!("S3 GET success: key={}, size={} bytes", key, bytes.len());
        Ok(bytes)
    }

    /// Every key under a prefix, placeholders included. One page only; large
    /// buckets are out of scope for this tool.
    pub async fn list_keys(&self, prefix: &str) -> Result<Vec<String>> {
        tracing::debug!("S3 LIST: bucket={}, prefix={}", self.bucket, prefix);

        let response = self
            .client
            .list_objects_v2()
            .bucket(&self.bucket)
            .prefix(prefix)
            .send()
            .await
            .with_context(|| format!("Failed to list objects under {prefix}"))?;

        Ok(response
            .contents()
            .iter()
            .filter_map(|object| object.key().map(str::to_string))
            .collect())
    }

    /// Top-level common prefixes, with the trailing slash stripped. The
    /// storage API makes no ordering promise and none is imposed here.
    pub async fn list_albums(&self) -> Result<Vec<String>> {
        tracing::debug!("S3 LIST (delimited): bucket={}", self.bucket);

        let response = self
            .client
            .list_objects_v2()
            .bucket(&self.bucket)
            .delimiter("/")
            .send()
            .await
            .context("Failed to list albums")?;

        Ok(response
            .common_prefixes()
            .iter()
            .filter_map(|common| common.prefix())
            .map(|prefix| prefix.trim_end_matches('/').to_string())
            .collect())
    }

    /// Head probe; any failure reads as "does not exist".
    pub async fn object_exists(&self, key: &str) -> Result<bool> {
        match self
            .client
            .head_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
        {
            Ok(_) => Ok(true),
            Err(_) => Ok(false),
        }
    }

    pub async fn delete_object(&self, key: &str) -> Result<()> {
        tracing::debug!("S3 DELETE: bucket={}, key={}", self.bucket, key);

        self.client
            .delete_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .with_context(|| format!("Failed to delete {key}"))?;

        Ok(())
    }

    /// Batch-delete a set of keys in one request.
    pub async fn delete_objects(&self, keys: &[String]) -> Result<()> {
        tracing::debug!("S3 DELETE (batch): bucket={}, count={}", self.bucket, keys.len());

        let identifiers = keys
            .iter()
            .map(|key| {
                ObjectIdentifier::builder()
                    .key(key)
                    .build()
                    .with_context(|| format!("Invalid object key {key}"))
            })
            .collect::<Result<Vec<_>>>()?;

        let delete = Delete::builder()
            .set_objects(Some(identifiers))
            .build()
            .context("Failed to build batch delete request")?;

        self.client
            .delete_objects()
            .bucket(&self.bucket)
            .delete(delete)
            .send()
            .await
            .context("Failed to batch-delete objects")?;

        Ok(())
    }

    /// Make bucket contents publicly readable, as the static site requires.
    pub async fn make_public_readable(&self) -> Result<()> {
        tracing::debug!("S3 PutBucketAcl: bucket={}, acl=public-read", self.bucket);

        self.client
            .put_bucket_acl()
            .bucket(&self.bucket)
            .acl(BucketCannedAcl::PublicRead)
            .send()
            .await
            .with_context(|| format!("Failed to set public-read ACL on {}", self.bucket))?;

        Ok(())
    }

    /// Enable static website hosting with the given index and error pages.
    pub async fn configure_website(&self, index_document: &str, error_document: &str) -> Result<()> {
        tracing::debug!(
            "S3 PutBucketWebsite: bucket={}, index={}, error={}",
            self.bucket,
            index_document,
            error_document
        );

        let website = WebsiteConfiguration::builder()
            .index_document(
                IndexDocument::builder()
                    .suffix(index_document)
                    .build()
                    .context("Failed to build index document config")?,
            )
            .error_document(
                ErrorDocument::builder()
                    .key(error_document)
                    .build()
                    .context("Failed to build error document config")?,
            )
            .build();

        self.client
            .put_bucket_website()
            .bucket(&self.bucket)
            .website_configuration(website)
            .send()
            .await
            .with_context(|| format!("Failed to configure website hosting on {}", self.bucket))?;

        Ok(())
    }

    fn guess_content_type(key: &str) -> &'static str {
        if key.ends_with(".jpg") || key.ends_with(".jpeg") {
            "image/jpeg"
        } else if key.ends_with(".html") {
            "text/html"
        } else {
            "application/octet-stream"
        }
    }
}
