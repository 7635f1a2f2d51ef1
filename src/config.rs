use crate::filter::{FilterCriteria, DEFAULT_PRICE_MAX};
use crate::models::PropertyType;
use crate::sources::types::{GeneratorConfig, DEFAULT_LISTING_COUNT};
use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable output
    Pretty,
    /// One JSON object per line
    Json,
}

#[derive(Debug, Clone, Parser)]
#[command(
    name = "rental-listings",
    about = "Generate, filter and inspect rental property listings"
)]
pub struct CliArgs {
    /// Number of listings to generate
    #[arg(long, env = "RENTAL_COUNT", default_value_t = DEFAULT_LISTING_COUNT)]
    pub count: usize,

    /// Seed for reproducible datasets
    #[arg(long, env = "RENTAL_SEED")]
    pub seed: Option<u64>,

    /// Load listings from a JSON dataset instead of generating them
    #[arg(long, env = "RENTAL_INPUT")]
    pub input: Option<PathBuf>,

    /// Directory to write the dataset and per-listing files to
    #[arg(long, env = "RENTAL_OUTPUT")]
    pub output: Option<PathBuf>,

    #[arg(long, env = "RENTAL_LOG_FORMAT", value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,

    /// Free-text search over title, area, county, street and type
    #[arg(long, default_value = "")]
    pub search: String,

    #[arg(long, default_value_t = 0)]
    pub price_min: u32,

    #[arg(long, default_value_t = DEFAULT_PRICE_MAX)]
    pub price_max: u32,

    /// Minimum bedroom count
    #[arg(long)]
    pub bedrooms: Option<u32>,

    #[arg(long)]
    pub property_type: Option<PropertyType>,

    /// Exact area or county name
    #[arg(long)]
    pub location: Option<String>,

    /// Only list featured properties
    #[arg(long)]
    pub featured: bool,

    /// Print the full details of one listing id
    #[arg(long, conflicts_with = "output")]
    pub show: Option<String>,
}

impl CliArgs {
    pub fn generator_config(&self) -> GeneratorConfig {
        GeneratorConfig {
            count: self.count,
            seed: self.seed,
            ..GeneratorConfig::default()
        }
    }

    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            search: self.search.clone(),
            price_min: self.price_min,
            price_max: self.price_max,
            bedrooms: self.bedrooms,
            property_type: self.property_type,
            location: self.location.clone(),
        }
    }
}
