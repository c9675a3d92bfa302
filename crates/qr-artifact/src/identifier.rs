//! Storage key validation.
//!
//! An [`ArtifactId`] is always exactly one path segment, so joining it onto
//! the storage directory can never escape that directory.

use std::fmt;

use crate::ArtifactError;

/// Maximum identifier length in bytes: the common 255-byte file name limit
/// minus the `.png` extension. Temporary files use a fixed short name, so
/// only the published file name depends on the identifier.
pub(crate) const MAX_ID_LEN: usize = 251;

/// A validated, filesystem-safe artifact key (usually a content item id).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArtifactId(String);

impl ArtifactId {
    pub fn parse(value: impl Into<String>) -> Result<Self, ArtifactError> {
        let value = value.into();
        let reject = |reason| ArtifactError::InvalidIdentifier {
            value: value.clone(),
            reason,
        };

        if value.is_empty() {
            return Err(reject("identifier cannot be empty"));
        }
        if value == "." || value == ".." {
            return Err(reject("relative path segments are not allowed"));
        }
        if value.contains(['/', '\\']) {
            return Err(reject("path separators are not allowed"));
        }
        if value.chars().any(char::is_control) {
            return Err(reject("control characters are not allowed"));
        }
        if value.len() > MAX_ID_LEN {
            return Err(reject("identifier is too long"));
        }

        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// File name of the artifact stored under this id.
    pub fn file_name(&self) -> String {
        format!("{}.png", self.0)
    }
}

impl fmt::Display for ArtifactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<&str> for ArtifactId {
    type Error = ArtifactError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl TryFrom<u64> for ArtifactId {
    type Error = ArtifactError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::parse(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rejected(value: &str) -> bool {
        matches!(
            ArtifactId::parse(value),
            Err(ArtifactError::InvalidIdentifier { .. })
        )
    }

    #[test]
    fn accepts_plain_segments() {
        assert_eq!(ArtifactId::parse("42").unwrap().file_name(), "42.png");
        assert!(ArtifactId::parse("product-7_a").is_ok());
        assert!(ArtifactId::parse("a..b").is_ok());
        assert_eq!(ArtifactId::try_from(42u64).unwrap().as_str(), "42");
    }

    #[test]
    fn rejects_traversal_and_separators() {
        assert!(rejected(""));
        assert!(rejected("."));
        assert!(rejected(".."));
        assert!(rejected("../evil"));
        assert!(rejected("a/b"));
        assert!(rejected("a\\b"));
        assert!(rejected("/etc"));
    }

    #[test]
    fn rejects_control_characters_and_long_values() {
        assert!(rejected("a\0b"));
        assert!(rejected("line\nbreak"));
        assert!(rejected(&"x".repeat(MAX_ID_LEN + 1)));
        assert!(ArtifactId::parse("x".repeat(MAX_ID_LEN)).is_ok());
    }
}
