//! The content item fields the block reads.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub id: u64,
    pub title: String,
    /// Link encoded into the code. Empty when the product has none.
    #[serde(default)]
    pub purchase_link: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn purchase_link_defaults_to_empty() {
        let node: Node = serde_json::from_str(r#"{"id": 7, "title": "Widget"}"#).unwrap();
        assert_eq!(node.id, 7);
        assert!(node.purchase_link.is_empty());
    }
}
