//! Product QR code block.
//!
//! Turns a content item with a purchase link into an `<img>` tag pointing at
//! a cached, styled QR code of that link.

pub mod block;
pub mod bootstrap;
pub mod config;
pub mod node;

pub use block::{BlockOutput, ProductQrBlock};
pub use config::AppConfig;
pub use node::Node;
