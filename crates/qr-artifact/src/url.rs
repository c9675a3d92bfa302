//! Mapping persisted artifacts to externally reachable URLs.

use crate::PersistedArtifact;

/// Resolves the public URL of a published artifact.
pub trait PublicUrlResolver: Send + Sync {
    fn public_url(&self, artifact: &PersistedArtifact) -> String;
}

/// Serves artifacts from a fixed base URL that maps onto the storage root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseUrlResolver {
    base_url: String,
}

impl BaseUrlResolver {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl PublicUrlResolver for BaseUrlResolver {
    fn public_url(&self, artifact: &PersistedArtifact) -> String {
        let encoded: Vec<String> = artifact
            .relative_path
            .split('/')
            .filter(|segment| !segment.is_empty())
            .map(|segment| urlencoding::encode(segment).into_owned())
            .collect();
        format!("{}/{}", self.base_url, encoded.join("/"))
    }
}
