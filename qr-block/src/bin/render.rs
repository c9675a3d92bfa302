//! Batch renderer: builds the QR code block for every node in a JSON file.
//!
//! Usage: qr-block-render <nodes.json>
//!
//! Prints one `<id>\t<markup>` line per node that produced a block. Nodes
//! are rendered concurrently on the blocking thread pool.

use std::sync::Arc;

use anyhow::Context;

use qr_block::config::ConfigError;
use qr_block::config::defaults::SETTINGS;
use qr_block::{AppConfig, Node, ProductQrBlock, bootstrap};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    bootstrap::init_tracing();
    bootstrap::load_dotenv();

    let path = std::env::args()
        .nth(1)
        .context("usage: qr-block-render <nodes.json>")?;

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e @ ConfigError::Missing(_)) => {
            eprintln!("{e}\n\nSettings:");
            for def in SETTINGS {
                let required = if def.required { "required" } else { "optional" };
                eprintln!("  {:<20} {required:<9} {}", def.key, def.description);
            }
            std::process::exit(2);
        }
        Err(e) => return Err(e.into()),
    };
    tracing::info!(
        storage_root = %config.storage_root.display(),
        base_url = %config.public_base_url,
        "Configuration loaded"
    );

    let raw = tokio::fs::read_to_string(&path)
        .await
        .with_context(|| format!("failed to read {path}"))?;
    let nodes: Vec<Node> = serde_json::from_str(&raw).context("invalid node list")?;

    let block = Arc::new(ProductQrBlock::from_config(&config));
    let handles: Vec<_> = nodes
        .into_iter()
        .map(|node| {
            let block = block.clone();
            tokio::task::spawn_blocking(move || {
                let output = block.build_or_omit(&node);
                (node.id, output)
            })
        })
        .collect();

    let mut rendered = 0usize;
    for handle in handles {
        let (id, output) = handle.await?;
        match output {
            Some(output) => {
                println!("{id}\t{}", output.markup);
                rendered += 1;
            }
            None => tracing::info!(node = id, "No QR code block for node"),
        }
    }

    tracing::info!(rendered, "Batch render finished");
    Ok(())
}
