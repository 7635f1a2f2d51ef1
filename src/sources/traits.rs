use crate::models::Listing;
use anyhow::Result;
use async_trait::async_trait;

/// Common trait for anything that can supply the listing dataset.
/// The generator is one source; a JSON dump from an earlier run is another.
#[async_trait]
pub trait ListingSource: Send + Sync {
    /// Load the full dataset
    async fn load(&self) -> Result<Vec<Listing>>;

    /// Get the name of the source
    fn source_name(&self) -> &'static str;
}
