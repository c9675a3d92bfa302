//! The product QR code block.
//!
//! Reads the purchase link of a node, renders and publishes its code, and
//! wraps the public URL in an `<img>` tag. A URL is only built after the
//! file has been completely written.

use std::sync::Arc;

use qr_artifact::{
    ArtifactError, ArtifactId, ArtifactStore, BaseUrlResolver, EncodeRequest, PublicUrlResolver,
    QrArtifactService,
};
use tracing::{debug, warn};

use crate::config::AppConfig;
use crate::node::Node;

/// Rendered block content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockOutput {
    pub markup: String,
    pub url: String,
    pub data_uri: String,
}

#[derive(Clone)]
pub struct ProductQrBlock {
    service: QrArtifactService,
    resolver: Arc<dyn PublicUrlResolver>,
}

impl ProductQrBlock {
    pub fn new(service: QrArtifactService, resolver: impl PublicUrlResolver + 'static) -> Self {
        Self {
            service,
            resolver: Arc::new(resolver),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        let service = QrArtifactService::new(ArtifactStore::new(&config.storage_root), config.style());
        Self::new(service, BaseUrlResolver::new(&config.public_base_url))
    }

    /// Build the block for `node`.
    ///
    /// Returns `Ok(None)` without rendering anything when the node has no
    /// purchase link.
    pub fn build(&self, node: &Node) -> Result<Option<BlockOutput>, ArtifactError> {
        let Some(request) = encode_request(node)? else {
            debug!(node = node.id, "Node has no purchase link, skipping QR code");
            return Ok(None);
        };

        let rendered = self.service.render(&request)?;
        let url = self.resolver.public_url(&rendered.persisted);

        let markup = format!(
            r#"<img src="{}" alt="{}"/>"#,
            escape_attr(&url),
            escape_attr(&node.title)
        );

        Ok(Some(BlockOutput {
            markup,
            url,
            data_uri: rendered.data_uri,
        }))
    }

    /// Like [`build`](Self::build), but logs failures and omits the block.
    pub fn build_or_omit(&self, node: &Node) -> Option<BlockOutput> {
        match self.build(node) {
            Ok(output) => output,
            Err(e) => {
                warn!(node = node.id, "Failed to render QR code block: {e}");
                None
            }
        }
    }
}

/// The encode request for `node`, or `None` when its purchase link is blank.
///
/// A whitespace-only link counts as blank; any other link is encoded exactly
/// as stored.
fn encode_request(node: &Node) -> Result<Option<EncodeRequest>, ArtifactError> {
    if node.purchase_link.trim().is_empty() {
        return Ok(None);
    }
    Ok(Some(EncodeRequest::new(
        node.purchase_link.as_str(),
        ArtifactId::try_from(node.id)?,
        node.title.as_str(),
    )))
}

/// Escape a value for use inside a double-quoted HTML attribute.
fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}
