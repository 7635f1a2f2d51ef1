pub mod generator;
pub mod json_file;
pub mod seeds;
pub mod traits;
pub mod types;
pub mod vocab;
pub mod weighted;

pub use generator::{generate_listings, ListingGenerator};
pub use json_file::{write_dataset, JsonFileSource};
pub use seeds::{SeedAddress, SeedPatch, SEED_PATCHES};
pub use traits::ListingSource;
pub use types::GeneratorConfig;
pub use weighted::WeightedChoice;
