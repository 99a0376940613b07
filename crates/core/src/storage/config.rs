//! Storage configuration types.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use sekolah_shared::StorageSettings;

use super::error::StorageError;

/// Storage provider configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StorageProvider {
    /// S3-compatible storage: Supabase Storage, Cloudflare R2, AWS S3, MinIO
    S3 {
        /// S3 endpoint URL.
        endpoint: String,
        /// S3 bucket name.
        bucket: String,
        /// Access key ID.
        access_key_id: String,
        /// Secret access key.
        secret_access_key: String,
        /// Region.
        region: String,
    },
    /// Local filesystem under a directory the API serves itself.
    LocalFs {
        /// Root directory path.
        root: PathBuf,
    },
    /// Process memory, lost on restart.
    Memory,
}

impl StorageProvider {
    /// Create S3-compatible provider.
    #[must_use]
    pub fn s3(
        endpoint: impl Into<String>,
        bucket: impl Into<String>,
        access_key_id: impl Into<String>,
        secret_access_key: impl Into<String>,
        region: impl Into<String>,
    ) -> Self {
        Self::S3 {
            endpoint: endpoint.into(),
            bucket: bucket.into(),
            access_key_id: access_key_id.into(),
            secret_access_key: secret_access_key.into(),
            region: region.into(),
        }
    }

    /// Create local filesystem provider.
    #[must_use]
    pub fn local_fs(root: impl Into<PathBuf>) -> Self {
        Self::LocalFs { root: root.into() }
    }

    /// Get the provider name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::S3 { .. } => "s3",
            Self::LocalFs { .. } => "local",
            Self::Memory => "memory",
        }
    }

    /// Base URL used when none is configured.
    fn default_public_base_url(&self) -> String {
        match self {
            Self::S3 {
                endpoint, bucket, ..
            } => format!("{}/{bucket}", endpoint.trim_end_matches('/')),
            Self::LocalFs { .. } | Self::Memory => StorageConfig::DEFAULT_LOCAL_MOUNT.to_string(),
        }
    }
}

/// Storage service configuration.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Storage provider configuration.
    pub provider: StorageProvider,
    /// Maximum file size in bytes.
    pub max_file_size: u64,
    /// Allowed MIME types for upload.
    pub allowed_mime_types: Vec<String>,
    /// Base URL prepended to keys in responses.
    pub public_base_url: Option<String>,
}

impl StorageConfig {
    /// Default max file size: 5MB.
    pub const DEFAULT_MAX_FILE_SIZE: u64 = 5 * 1024 * 1024;
    /// Path under which locally stored files are served.
    pub const DEFAULT_LOCAL_MOUNT: &'static str = "/uploads";

    /// Create a new storage config with default settings.
    #[must_use]
    pub fn new(provider: StorageProvider) -> Self {
        Self {
            provider,
            max_file_size: Self::DEFAULT_MAX_FILE_SIZE,
            allowed_mime_types: Self::default_mime_types(),
            public_base_url: None,
        }
    }

    /// Build the config from the `[storage]` section of the app config.
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown provider or missing S3 credentials.
    pub fn from_settings(settings: &StorageSettings) -> Result<Self, StorageError> {
        let provider = match settings.provider.as_str() {
            "local" => StorageProvider::local_fs(&settings.root),
            "memory" => StorageProvider::Memory,
            "s3" => {
                let required = |value: &Option<String>, name: &str| {
                    value
                        .clone()
                        .ok_or_else(|| StorageError::configuration(format!("storage.{name} is required for s3")))
                };
                StorageProvider::s3(
                    required(&settings.endpoint, "endpoint")?,
                    required(&settings.bucket, "bucket")?,
                    required(&settings.access_key_id, "access_key_id")?,
                    required(&settings.secret_access_key, "secret_access_key")?,
                    settings.region.clone(),
                )
            }
            other => {
                return Err(StorageError::configuration(format!(
                    "unknown storage provider '{other}'"
                )));
            }
        };

        let mut config = Self::new(provider)
            .with_max_file_size(settings.max_file_size_mb.saturating_mul(1024 * 1024));
        if let Some(url) = &settings.public_base_url {
            config = config.with_public_base_url(url.clone());
        }
        Ok(config)
    }

    /// Set maximum file size.
    #[must_use]
    pub fn with_max_file_size(mut self, size: u64) -> Self {
        self.max_file_size = size;
        self
    }

    /// Set allowed MIME types.
    #[must_use]
    pub fn with_allowed_mime_types(mut self, types: Vec<String>) -> Self {
        self.allowed_mime_types = types;
        self
    }

    /// Set the public base URL.
    #[must_use]
    pub fn with_public_base_url(mut self, url: impl Into<String>) -> Self {
        self.public_base_url = Some(url.into());
        self
    }

    /// Base URL under which stored keys are reachable, without trailing slash.
    #[must_use]
    pub fn public_base_url(&self) -> String {
        self.public_base_url
            .clone()
            .unwrap_or_else(|| self.provider.default_public_base_url())
            .trim_end_matches('/')
            .to_string()
    }

    /// Route and directory the HTTP server must serve itself.
    ///
    /// Only the local filesystem backend with a path-only base URL needs this.
    #[must_use]
    pub fn local_mount(&self) -> Option<(String, PathBuf)> {
        let StorageProvider::LocalFs { root } = &self.provider else {
            return None;
        };
        let base = self.public_base_url();
        base.starts_with('/').then(|| (base, root.clone()))
    }

    /// Default allowed MIME types for uploads.
    ///
    /// SVG is left out: uploads may be served from the API origin, and SVG can
    /// carry script.
    #[must_use]
    pub fn default_mime_types() -> Vec<String> {
        vec![
            // Images
            "image/png".to_string(),
            "image/jpeg".to_string(),
            "image/gif".to_string(),
            "image/webp".to_string(),
            // Documents
            "application/pdf".to_string(),
            "application/msword".to_string(),
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document".to_string(),
            "application/vnd.ms-excel".to_string(),
            "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet".to_string(),
        ]
    }

    /// Check if a MIME type is allowed.
    ///
    /// Parameters such as `; charset=binary` are ignored.
    #[must_use]
    pub fn is_mime_type_allowed(&self, mime_type: &str) -> bool {
        let essence = mime_type.split(';').next().unwrap_or_default().trim();
        self.allowed_mime_types
            .iter()
            .any(|t| t.eq_ignore_ascii_case(essence))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_provider_s3() {
        let provider = StorageProvider::s3(
            "https://project.supabase.co/storage/v1/s3",
            "sekolah",
            "access_key",
            "secret_key",
            "auto",
        );
        assert_eq!(provider.name(), "s3");
    }

    #[test]
    fn test_storage_provider_local() {
        let provider = StorageProvider::local_fs("./uploads");
        assert_eq!(provider.name(), "local");
        assert_eq!(StorageProvider::Memory.name(), "memory");
    }

    #[test]
    fn test_storage_config_defaults() {
        let config = StorageConfig::new(StorageProvider::local_fs("./uploads"));
        assert_eq!(config.max_file_size, StorageConfig::DEFAULT_MAX_FILE_SIZE);
        assert!(!config.allowed_mime_types.is_empty());
        assert_eq!(config.public_base_url(), "/uploads");
    }

    #[test]
    fn test_mime_type_validation() {
        let config = StorageConfig::new(StorageProvider::Memory);
        assert!(config.is_mime_type_allowed("application/pdf"));
        assert!(config.is_mime_type_allowed("image/png"));
        assert!(config.is_mime_type_allowed("IMAGE/JPEG"));
        assert!(config.is_mime_type_allowed("image/png; charset=binary"));
        assert!(!config.is_mime_type_allowed("application/x-executable"));
        assert!(!config.is_mime_type_allowed("text/html"));
        assert!(!config.is_mime_type_allowed("image/svg+xml"));
    }

    #[test]
    fn test_public_base_url_s3_default() {
        let config = StorageConfig::new(StorageProvider::s3(
            "https://s3.example.com/",
            "school",
            "a",
            "b",
            "auto",
        ));
        assert_eq!(config.public_base_url(), "https://s3.example.com/school");
        assert!(config.local_mount().is_none());
    }

    #[test]
    fn test_public_base_url_override_trims_slash() {
        let config = StorageConfig::new(StorageProvider::Memory)
            .with_public_base_url("https://cdn.sekolah.sch.id/files/");
        assert_eq!(config.public_base_url(), "https://cdn.sekolah.sch.id/files");
    }

    #[test]
    fn test_local_mount() {
        let config = StorageConfig::new(StorageProvider::local_fs("./data/uploads"));
        let (route, root) = config.local_mount().expect("local backend is mounted");
        assert_eq!(route, "/uploads");
        assert_eq!(root, PathBuf::from("./data/uploads"));

        let behind_cdn = StorageConfig::new(StorageProvider::local_fs("./data/uploads"))
            .with_public_base_url("https://static.sekolah.sch.id");
        assert!(behind_cdn.local_mount().is_none());

        assert!(StorageConfig::new(StorageProvider::Memory).local_mount().is_none());
    }

    #[test]
    fn test_from_settings_local() {
        let settings = StorageSettings {
            max_file_size_mb: 2,
            ..StorageSettings::default()
        };
        let config = StorageConfig::from_settings(&settings).unwrap();
        assert_eq!(config.provider.name(), "local");
        assert_eq!(config.max_file_size, 2 * 1024 * 1024);
    }

    #[test]
    fn test_from_settings_s3_requires_credentials() {
        let settings = StorageSettings {
            provider: "s3".to_string(),
            endpoint: Some("https://s3.example.com".to_string()),
            ..StorageSettings::default()
        };
        let err = StorageConfig::from_settings(&settings).unwrap_err();
        assert!(matches!(err, StorageError::Configuration(msg) if msg.contains("bucket")));
    }

    #[test]
    fn test_from_settings_unknown_provider() {
        let settings = StorageSettings {
            provider: "ftp".to_string(),
            ..StorageSettings::default()
        };
        assert!(matches!(
            StorageConfig::from_settings(&settings),
            Err(StorageError::Configuration(_))
        ));
    }
}
