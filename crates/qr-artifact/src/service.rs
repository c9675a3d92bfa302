//! Generate-then-persist pipeline.

use tracing::{debug, info};

use crate::{ArtifactId, ArtifactStore, PersistedArtifact, Result, StyleConfig, generate};

/// One rendering job: what to encode, where to store it, and the caption.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodeRequest {
    pub payload: String,
    pub identifier: ArtifactId,
    pub label: String,
}

impl EncodeRequest {
    pub fn new(payload: impl Into<String>, identifier: ArtifactId, label: impl Into<String>) -> Self {
        Self {
            payload: payload.into(),
            identifier,
            label: label.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RenderedArtifact {
    pub persisted: PersistedArtifact,
    pub data_uri: String,
}

/// Renders requests with a fixed style and publishes them to a store.
///
/// Every call regenerates and overwrites; there is no freshness check.
#[derive(Debug, Clone)]
pub struct QrArtifactService {
    store: ArtifactStore,
    style: StyleConfig,
}

impl QrArtifactService {
    pub fn new(store: ArtifactStore, style: StyleConfig) -> Self {
        Self { store, style }
    }

    pub fn store(&self) -> &ArtifactStore {
        &self.store
    }

    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    pub fn render(&self, request: &EncodeRequest) -> Result<RenderedArtifact> {
        debug!(identifier = %request.identifier, "Rendering QR artifact");
        let artifact = generate(&request.payload, &request.label, &self.style)?;
        let persisted = self.store.persist(artifact.png(), &request.identifier)?;
        info!(
            identifier = %request.identifier,
            generated_at = %artifact.generated_at().to_rfc3339(),
            width = artifact.width(),
            height = artifact.height(),
            "QR artifact rendered"
        );
        Ok(RenderedArtifact {
            persisted,
            data_uri: artifact.data_uri(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ArtifactError, BaseUrlResolver, PublicUrlResolver};
    use image_engine::PNG_MAGIC;

    #[test]
    fn renders_example_request_to_expected_location() {
        let root = tempfile::tempdir().unwrap();
        let service = QrArtifactService::new(ArtifactStore::new(root.path()), StyleConfig::default());
        let request = EncodeRequest::new(
            "https://example.com/app",
            ArtifactId::parse("42").unwrap(),
            "My App",
        );

        let rendered = service.render(&request).unwrap();

        assert!(rendered.persisted.path.ends_with("qr-code/42.png"));
        let bytes = std::fs::read(&rendered.persisted.path).unwrap();
        assert!(bytes.starts_with(&PNG_MAGIC));
        assert!(rendered.data_uri.starts_with("data:image/png;base64,"));

        let url = BaseUrlResolver::new("https://example.com/files").public_url(&rendered.persisted);
        assert!(url.ends_with("/qr-code/42.png"));
    }

    #[test]
    fn failed_generation_writes_nothing() {
        let root = tempfile::tempdir().unwrap();
        let service = QrArtifactService::new(ArtifactStore::new(root.path()), StyleConfig::default());
        let request = EncodeRequest::new("", ArtifactId::parse("42").unwrap(), "My App");

        let result = service.render(&request);

        assert!(matches!(result, Err(ArtifactError::Encoding(_))));
        assert!(!service.store().path_for(&request.identifier).exists());
    }

    #[test]
    fn failed_generation_keeps_previous_file() {
        let root = tempfile::tempdir().unwrap();
        let store = ArtifactStore::new(root.path());
        let identifier = ArtifactId::parse("42").unwrap();
        store.persist(b"previous", &identifier).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let style = StyleConfig::default().with_logo_path(dir.path().join("missing.png"));
        let service = QrArtifactService::new(store, style);
        let request = EncodeRequest::new("https://example.com/app", identifier.clone(), "");

        assert!(matches!(
            service.render(&request),
            Err(ArtifactError::AssetMissing { .. })
        ));
        assert_eq!(std::fs::read(service.store().path_for(&identifier)).unwrap(), b"previous");
    }
}
