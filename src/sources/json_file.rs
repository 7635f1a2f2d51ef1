use crate::models::Listing;
use crate::sources::traits::ListingSource;
use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, info};

/// File name of the combined dataset inside an output directory
pub const DATASET_FILE: &str = "listings.json";

/// Directory holding one JSON file per listing
pub const PER_LISTING_DIR: &str = "listings";

/// Reads a dataset previously written by [`write_dataset`]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ListingSource for JsonFileSource {
    async fn load(&self) -> Result<Vec<Listing>> {
        info!("Loading listings from {}", self.path.display());

        let json = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read {}", self.path.display()))?;
        let listings: Vec<Listing> = serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse listings in {}", self.path.display()))?;

        let mut seen = HashSet::new();
        for listing in &listings {
            if !seen.insert(listing.id.as_str()) {
                bail!("Duplicate listing id {} in {}", listing.id, self.path.display());
            }
        }

        debug!("Loaded {} listings", listings.len());
        Ok(listings)
    }

    fn source_name(&self) -> &'static str {
        "json-file"
    }
}

/// Ids become file names, so each must be a single plain path component
fn check_file_safe_id(id: &str) -> Result<()> {
    let mut components = Path::new(id).components();
    let single_normal = matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    );
    if !single_normal || id.contains(['/', '\\']) {
        bail!("Listing id {:?} cannot be used as a file name", id);
    }
    Ok(())
}

/// Save the dataset as `listings.json` plus one file per listing under `listings/`
pub async fn write_dataset(dir: &Path, listings: &[Listing]) -> Result<()> {
    for listing in listings {
        check_file_safe_id(&listing.id)
            .with_context(|| format!("Refusing to write listings to {}", dir.display()))?;
    }

    tokio::fs::create_dir_all(dir.join(PER_LISTING_DIR))
        .await
        .with_context(|| format!("Failed to create {}", dir.display()))?;

    let json = serde_json::to_string_pretty(listings)?;
    let dataset = dir.join(DATASET_FILE);
    tokio::fs::write(&dataset, json)
        .await
        .with_context(|| format!("Failed to write {}", dataset.display()))?;
    info!("Saved all listings to {}", dataset.display());

    for listing in listings {
        let filename = dir
            .join(PER_LISTING_DIR)
            .join(format!("{}.json", listing.id));
        let listing_json = serde_json::to_string_pretty(listing)?;
        tokio::fs::write(&filename, listing_json)
            .await
            .with_context(|| format!("Failed to write {}", filename.display()))?;
    }

    info!(
        "Saved {} individual listing files to {}",
        listings.len(),
        dir.join(PER_LISTING_DIR).display()
    );

    Ok(())
}
