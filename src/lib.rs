//! Rental listing catalogue: a synthetic dataset generator and the
//! filter engine the listing pages call into.

pub mod catalog;
pub mod config;
pub mod display;
pub mod error;
pub mod filter;
pub mod logging;
pub mod models;
pub mod sources;

pub use catalog::Catalog;
pub use config::{CliArgs, LogFormat};
pub use error::{ListingError, ListingResult};
pub use filter::{filter_listings, FilterCriteria, FilterOptions, HeroSearch};
pub use logging::init_logging;
pub use models::{Address, BerRating, Listing, ListingStatus, PropertyType};
pub use sources::{generate_listings, GeneratorConfig, JsonFileSource, ListingGenerator, ListingSource};
