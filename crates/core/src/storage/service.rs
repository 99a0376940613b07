//! Storage service implementation using Apache OpenDAL.

use bytes::Bytes;
use opendal::{ErrorKind, Operator, services};

use super::backend::{BlobStore, Deletion};
use super::config::{StorageConfig, StorageProvider};
use super::error::StorageError;

/// Storage service for uploaded files.
#[derive(Debug, Clone)]
pub struct StorageService {
    operator: Operator,
    config: StorageConfig,
}

impl StorageService {
    /// Create a new storage service from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage provider cannot be initialized.
    pub fn from_config(config: StorageConfig) -> Result<Self, StorageError> {
        let operator = Self::create_operator(&config.provider)?;
        Ok(Self { operator, config })
    }

    /// In-memory service with default limits.
    ///
    /// # Errors
    ///
    /// Returns an error if the memory backend cannot be initialized.
    pub fn in_memory() -> Result<Self, StorageError> {
        Self::from_config(StorageConfig::new(StorageProvider::Memory))
    }

    /// Create OpenDAL operator from provider config.
    fn create_operator(provider: &StorageProvider) -> Result<Operator, StorageError> {
        let operator = match provider {
            StorageProvider::S3 {
                endpoint,
                bucket,
                access_key_id,
                secret_access_key,
                region,
            } => {
                let builder = services::S3::default()
                    .endpoint(endpoint)
                    .bucket(bucket)
                    .access_key_id(access_key_id)
                    .secret_access_key(secret_access_key)
                    .region(region);

                Operator::new(builder)
                    .map_err(|e| StorageError::configuration(e.to_string()))?
                    .finish()
            }
            StorageProvider::LocalFs { root } => {
                let builder = services::Fs::default().root(
                    root.to_str()
                        .ok_or_else(|| StorageError::configuration("invalid path"))?,
                );

                Operator::new(builder)
                    .map_err(|e| StorageError::configuration(e.to_string()))?
                    .finish()
            }
            StorageProvider::Memory => Operator::new(services::Memory::default())
                .map_err(|e| StorageError::configuration(e.to_string()))?
                .finish(),
        };

        Ok(operator)
    }

    /// Validate an upload against config constraints.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is empty, too large or of a disallowed MIME type.
    pub fn validate_upload(&self, content_type: &str, size: u64) -> Result<(), StorageError> {
        if size == 0 {
            return Err(StorageError::EmptyFile);
        }

        if size > self.config.max_file_size {
            return Err(StorageError::file_too_large(
                size,
                self.config.max_file_size,
            ));
        }

        if !self.config.is_mime_type_allowed(content_type) {
            return Err(StorageError::invalid_mime_type(content_type));
        }

        Ok(())
    }

    /// Check if a file exists in storage.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be reached.
    pub async fn exists(&self, key: &str) -> Result<bool, StorageError> {
        match self.operator.stat(key).await {
            Ok(_) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    /// Get the storage provider name.
    #[must_use]
    pub fn provider_name(&self) -> &'static str {
        self.config.provider.name()
    }

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &StorageConfig {
        &self.config
    }
}

impl BlobStore for StorageService {
    async fn put(&self, key: &str, bytes: Bytes, content_type: &str) -> Result<String, StorageError> {
        self.validate_upload(content_type, bytes.len() as u64)?;

        if self
            .operator
            .info()
            .full_capability()
            .write_with_content_type
        {
            self.operator
                .write_with(key, bytes)
                .content_type(content_type)
                .await?;
        } else {
            self.operator.write(key, bytes).await?;
        }

        Ok(key.to_string())
    }

    async fn read(&self, reference: &str) -> Result<Bytes, StorageError> {
        match self.operator.read(reference).await {
            Ok(buffer) => Ok(buffer.to_bytes()),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(StorageError::not_found(reference)),
            Err(e) => Err(e.into()),
        }
    }

    async fn delete(&self, reference: &str) -> Result<Deletion, StorageError> {
        // Most backends report success for missing keys, so existence is checked first.
        if !self.exists(reference).await? {
            return Ok(Deletion::AlreadyAbsent);
        }
        self.operator.delete(reference).await?;
        Ok(Deletion::Deleted)
    }

    fn public_url(&self, reference: &str) -> String {
        format!("{}/{reference}", self.config.public_base_url())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn png(size: usize) -> Bytes {
        Bytes::from(vec![0x89; size])
    }

    #[test]
    fn test_validate_upload_size() {
        let config = StorageConfig::new(StorageProvider::Memory).with_max_file_size(1024);
        let service = StorageService::from_config(config).expect("should create service");

        assert!(service.validate_upload("application/pdf", 512).is_ok());
        assert!(service.validate_upload("application/pdf", 1024).is_ok());

        let err = service
            .validate_upload("application/pdf", 2048)
            .unwrap_err();
        assert!(matches!(err, StorageError::FileTooLarge { .. }));
    }

    #[test]
    fn test_validate_upload_empty() {
        let service = StorageService::in_memory().unwrap();
        let err = service.validate_upload("image/png", 0).unwrap_err();
        assert!(matches!(err, StorageError::EmptyFile));
    }

    #[test]
    fn test_validate_upload_mime_type() {
        let service = StorageService::in_memory().unwrap();

        assert!(service.validate_upload("application/pdf", 1024).is_ok());
        assert!(service.validate_upload("image/png", 1024).is_ok());

        let err = service
            .validate_upload("application/x-executable", 1024)
            .unwrap_err();
        assert!(matches!(err, StorageError::InvalidMimeType { .. }));
    }

    #[tokio::test]
    async fn test_put_then_read_round_trip() {
        let service = StorageService::in_memory().unwrap();
        let payload = png(500);

        let reference = service
            .put("news/photo.png", payload.clone(), "image/png")
            .await
            .unwrap();
        let fetched = service.read(&reference).await.unwrap();

        assert_eq!(reference, "news/photo.png");
        assert_eq!(fetched, payload);
    }

    #[tokio::test]
    async fn test_put_rejected_writes_nothing() {
        let config = StorageConfig::new(StorageProvider::Memory).with_max_file_size(100);
        let service = StorageService::from_config(config).unwrap();

        let err = service
            .put("news/big.png", png(101), "image/png")
            .await
            .unwrap_err();

        assert!(err.is_rejection());
        assert!(!service.exists("news/big.png").await.unwrap());
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let service = StorageService::in_memory().unwrap();
        let reference = service
            .put("gallery/a.png", png(10), "image/png")
            .await
            .unwrap();

        assert_eq!(service.delete(&reference).await.unwrap(), Deletion::Deleted);
        assert_eq!(
            service.delete(&reference).await.unwrap(),
            Deletion::AlreadyAbsent
        );
        assert!(matches!(
            service.read(&reference).await,
            Err(StorageError::NotFound { .. })
        ));
    }

    #[test]
    fn test_public_url() {
        let service = StorageService::in_memory().unwrap();
        assert_eq!(
            service.public_url("news/abc-photo.png"),
            "/uploads/news/abc-photo.png"
        );

        let config = StorageConfig::new(StorageProvider::Memory)
            .with_public_base_url("https://cdn.example.com/");
        let service = StorageService::from_config(config).unwrap();
        assert_eq!(
            service.public_url("news/abc-photo.png"),
            "https://cdn.example.com/news/abc-photo.png"
        );
    }

    #[test]
    fn test_every_provider_builds_an_operator() {
        let s3 = StorageService::from_config(StorageConfig::new(StorageProvider::s3(
            "https://s3.example.com",
            "sekolah",
            "access_key",
            "secret_key",
            "auto",
        )))
        .expect("s3 operator");
        assert_eq!(s3.provider_name(), "s3");

        let local = StorageService::from_config(StorageConfig::new(StorageProvider::local_fs(
            std::env::temp_dir(),
        )))
        .expect("fs operator");
        assert_eq!(local.provider_name(), "local");

        let memory = StorageService::in_memory().expect("memory operator");
        assert_eq!(memory.provider_name(), "memory");
    }

    #[test]
    fn test_provider_name() {
        let service = StorageService::in_memory().unwrap();
        assert_eq!(service.provider_name(), "memory");
    }
}
