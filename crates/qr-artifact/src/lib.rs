//! Styled QR code artifacts cached to a public storage area.
//!
//! [`generate`] renders a payload into PNG bytes with a logo and caption,
//! [`ArtifactStore`] publishes those bytes under `qr-code/<id>.png` with an
//! atomic rename, and a [`PublicUrlResolver`] turns the published location
//! into an externally reachable URL.

pub mod error;
pub mod generator;
pub mod identifier;
pub mod service;
pub mod store;
pub mod style;
pub mod url;

pub use error::ArtifactError;
pub use generator::{Artifact, generate, render_symbol};
pub use identifier::ArtifactId;
pub use service::{EncodeRequest, QrArtifactService, RenderedArtifact};
pub use store::{ArtifactStore, PersistedArtifact};
pub use style::{Rgb, StyleConfig};
pub use url::{BaseUrlResolver, PublicUrlResolver};

/// Subdirectory of the storage root holding generated codes.
pub const QR_CODE_DIR: &str = "qr-code";

pub type Result<T, E = ArtifactError> = std::result::Result<T, E>;
