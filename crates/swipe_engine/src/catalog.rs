use std::fs;
use std::io;
use std::path::Path;

use serde::Deserialize;
use swipe_core::Item;
use swipe_logging::swipe_info;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),
}

/// Accepts either a bare array or `{ "items": [...] }`.
#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogFile {
    Bare(Vec<Item>),
    Wrapped { items: Vec<Item> },
}

pub fn parse_catalog(text: &str) -> Result<Vec<Item>, LoadError> {
    let items = match serde_json::from_str(text)? {
        CatalogFile::Bare(items) => items,
        CatalogFile::Wrapped { items } => items,
    };
    Ok(items)
}

pub fn load_catalog(path: &Path) -> Result<Vec<Item>, LoadError> {
    let text = fs::read_to_string(path)?;
    let items = parse_catalog(&text)?;
    swipe_info!("loaded {} items from {}", items.len(), path.display());
    Ok(items)
}
