use crate::error::ListingResult;
use crate::models::{Address, BerRating, Listing, ListingStatus, PropertyType};
use crate::sources::seeds::{apply_seed_patches, SEED_PATCHES};
use crate::sources::traits::ListingSource;
use crate::sources::types::GeneratorConfig;
use crate::sources::vocab::{
    BER_WEIGHTS, DESCRIPTION_CHOICES, DUBLIN, DUBLIN_AREAS, EIRCODE_LETTERS, FEATURES,
    OTHER_COUNTIES, PRESTIGE_AREAS, PROPERTY_TYPE_WEIGHTS, STOCK_IMAGE_COUNT, STREET_NAMES,
    STREET_SUFFIXES, TITLE_PREFIXES, VIRTUAL_TOUR_URL,
};
use crate::sources::weighted::WeightedChoice;
use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::ops::Range;
use tracing::{debug, info, warn};

const PRICE_PER_BEDROOM: f64 = 300.0;
const DUBLIN_PREMIUM: f64 = 1.3;
const PRESTIGE_PREMIUM: f64 = 1.2;

/// Monthly base rent for a property type, before bedrooms and location
pub fn base_price(kind: PropertyType) -> u32 {
    match kind {
        PropertyType::Apartment => 1800,
        PropertyType::House => 2200,
        PropertyType::Studio => 1400,
        PropertyType::Duplex => 2000,
        PropertyType::Penthouse => 3500,
        PropertyType::Bungalow => 2300,
        PropertyType::Cottage => 1900,
        PropertyType::Farmhouse => 2400,
        PropertyType::Villa => 3000,
        PropertyType::Land => 1000,
    }
}

/// Rent before random jitter: base + per-bedroom, then regional premiums
pub fn list_price(kind: PropertyType, bedrooms: u32, county: &str, area: &str) -> f64 {
    let mut price = f64::from(base_price(kind)) + f64::from(bedrooms) * PRICE_PER_BEDROOM;
    if county == DUBLIN {
        price *= DUBLIN_PREMIUM;
    }
    if PRESTIGE_AREAS.contains(&area) {
        price *= PRESTIGE_PREMIUM;
    }
    price
}

/// Square meter range for a property type
pub fn size_range(kind: PropertyType) -> Range<u32> {
    match kind {
        PropertyType::Studio => 35..55,
        PropertyType::Apartment => 60..90,
        PropertyType::House => 100..150,
        PropertyType::Penthouse => 120..160,
        PropertyType::Land => 1000..6000,
        _ => 80..120,
    }
}

/// Synthetic listing generator
pub struct ListingGenerator {
    config: GeneratorConfig,
    property_types: WeightedChoice<PropertyType>,
    ber_ratings: WeightedChoice<BerRating>,
}

impl ListingGenerator {
    /// Create a generator with the default configuration (70 listings, random seed)
    pub fn new() -> ListingResult<Self> {
        Self::with_config(GeneratorConfig::default())
    }

    /// Create a generator with a custom configuration
    pub fn with_config(config: GeneratorConfig) -> ListingResult<Self> {
        config.validate()?;

        Ok(Self {
            config,
            property_types: WeightedChoice::new(PROPERTY_TYPE_WEIGHTS)?,
            ber_ratings: WeightedChoice::new(BER_WEIGHTS)?,
        })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Produce the full dataset, curated listings included
    pub fn generate(&self) -> Vec<Listing> {
        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let now = self.config.reference_time.unwrap_or_else(Utc::now);

        info!("Generating {} listings", self.config.count);

        let mut listings: Vec<Listing> = (1..=self.config.count)
            .map(|number| self.generate_one(&mut rng, number, now))
            .collect();

        apply_seed_patches(&mut listings, SEED_PATCHES, now);

        debug!(
            "Generated {} listings ({} featured)",
            listings.len(),
            listings.iter().filter(|l| l.is_featured).count()
        );

        listings
    }

    fn generate_one<R: Rng>(&self, rng: &mut R, number: usize, now: DateTime<Utc>) -> Listing {
        let (county, area) = self.pick_region(rng);

        let property_type = *self.property_types.pick(rng);
        let bedrooms = if property_type == PropertyType::Studio {
            0
        } else {
            rng.gen_range(1..=4)
        };
        let extra_bathroom = u32::from(rng.gen_bool(0.3));
        let bathrooms = (bedrooms * 7 / 10 + extra_bathroom).max(1);

        let jitter = rng.gen_range(0.9..1.1);
        let price = (list_price(property_type, bedrooms, county, area) * jitter).round() as u32;
        let size_sqm = rng.gen_range(size_range(property_type));

        let is_featured = rng.gen_bool(self.config.featured_chance);
        let is_new = rng.gen_bool(self.config.new_chance);
        let title = Self::title(rng, property_type, bedrooms, area);

        Listing {
            id: format!("prop-{:03}", number),
            title,
            property_type,
            address: Address {
                street: Self::street(rng),
                area: area.to_string(),
                county: county.to_string(),
                eircode: Some(Self::eircode(rng)),
            },
            price,
            bedrooms,
            bathrooms,
            size_sqm,
            description: Self::description(rng, property_type, bedrooms, area, county),
            features: Self::features(rng),
            images: Self::images(rng),
            available_from: now + Duration::days(rng.gen_range(1..=60)),
            created_at: now - Duration::days(rng.gen_range(1..=30)),
            status: ListingStatus::Available,
            ber: *self.ber_ratings.pick(rng),
            is_featured,
            is_new,
            virtual_tour: rng
                .gen_bool(self.config.virtual_tour_chance)
                .then(|| VIRTUAL_TOUR_URL.to_string()),
        }
    }

    fn pick_region<R: Rng>(&self, rng: &mut R) -> (&'static str, &'static str) {
        if rng.gen_bool(self.config.dublin_share) {
            return (DUBLIN, pick_str(rng, DUBLIN_AREAS));
        }
        match OTHER_COUNTIES.choose(rng) {
            Some((county, areas)) => (*county, pick_str(rng, areas)),
            None => (DUBLIN, pick_str(rng, DUBLIN_AREAS)),
        }
    }

    fn features<R: Rng>(rng: &mut R) -> Vec<String> {
        let count = rng.gen_range(3..=10);
        FEATURES
            .choose_multiple(rng, count)
            .map(|feature| feature.to_string())
            .collect()
    }

    fn title<R: Rng>(rng: &mut R, kind: PropertyType, bedrooms: u32, area: &str) -> String {
        let prefix = pick_str(rng, TITLE_PREFIXES);
        if kind == PropertyType::Studio {
            format!("{} Studio Apartment in {}", prefix, area)
        } else {
            format!("{} {} Bedroom {} in {}", prefix, bedrooms, kind.label(), area)
        }
    }

    fn street<R: Rng>(rng: &mut R) -> String {
        let number = rng.gen_range(1..=100);
        let name = pick_str(rng, STREET_NAMES);
        let suffix = pick_str(rng, STREET_SUFFIXES);
        format!("{} {} {}", number, name, suffix)
    }

    fn eircode<R: Rng>(rng: &mut R) -> String {
        let district = rng.gen_range(1..=24);
        let letters = pick_str(rng, EIRCODE_LETTERS);
        let a = rng.gen_range(0..10);
        let b = rng.gen_range(0..10);
        format!("D{} {}{}{}", district, letters, a, b)
    }

    fn description<R: Rng>(
        rng: &mut R,
        kind: PropertyType,
        bedrooms: u32,
        area: &str,
        county: &str,
    ) -> String {
        let mut text = format!(
            "Beautiful {} bedroom {} located in the heart of {}, {}. \
             This property offers spacious accommodation throughout and is presented in excellent condition.",
            bedrooms, kind, area, county
        );
        for (first, second) in DESCRIPTION_CHOICES {
            text.push(' ');
            text.push_str(if rng.gen_bool(0.5) { first } else { second });
        }
        text.push_str(" Available for immediate viewing.");
        text
    }

    fn images<R: Rng>(rng: &mut R) -> Vec<String> {
        let count = rng.gen_range(3..=5);
        (0..count)
            .map(|_| format!("/property-{}.jpg", rng.gen_range(1..=STOCK_IMAGE_COUNT)))
            .collect()
    }
}

fn pick_str<R: Rng>(rng: &mut R, options: &[&'static str]) -> &'static str {
    options.choose(rng).copied().unwrap_or_default()
}

#[async_trait]
impl ListingSource for ListingGenerator {
    async fn load(&self) -> Result<Vec<Listing>> {
        Ok(self.generate())
    }

    fn source_name(&self) -> &'static str {
        "generator"
    }
}

/// Generate the default dataset.
///
/// The built-in configuration is always valid, so this never fails; an
/// impossible construction error is logged and yields no listings.
pub fn generate_listings() -> Vec<Listing> {
    match ListingGenerator::new() {
        Ok(generator) => generator.generate(),
        Err(e) => {
            warn!("Listing generator unavailable: {}", e);
            Vec::new()
        }
    }
}
