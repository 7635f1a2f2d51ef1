use crate::error::{ListingError, ListingResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Number of listings produced when nothing else is asked for
pub const DEFAULT_LISTING_COUNT: usize = 70;

/// Parameters for synthetic listing generation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneratorConfig {
    /// How many listings to produce
    pub count: usize,
    /// Fixed RNG seed; `None` draws from OS entropy
    pub seed: Option<u64>,
    /// "Now" for availability and creation dates; `None` uses the clock
    pub reference_time: Option<DateTime<Utc>>,
    /// Probability a listing is placed in Dublin
    pub dublin_share: f64,
    pub featured_chance: f64,
    pub new_chance: f64,
    pub virtual_tour_chance: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_LISTING_COUNT,
            seed: None,
            reference_time: None,
            dublin_share: 0.6,
            featured_chance: 0.1,
            new_chance: 0.15,
            virtual_tour_chance: 0.3,
        }
    }
}

impl GeneratorConfig {
    pub fn validate(&self) -> ListingResult<()> {
        if self.count == 0 {
            return Err(ListingError::invalid_config("count must be at least 1"));
        }
        let chances = [
            ("dublin_share", self.dublin_share),
            ("featured_chance", self.featured_chance),
            ("new_chance", self.new_chance),
            ("virtual_tour_chance", self.virtual_tour_chance),
        ];
        for (name, value) in chances {
            if !(0.0..=1.0).contains(&value) {
                return Err(ListingError::invalid_config(format!(
                    "{name} must be between 0 and 1, got {value}"
                )));
            }
        }
        Ok(())
    }
}
