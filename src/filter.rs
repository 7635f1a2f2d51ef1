use crate::models::{Listing, PropertyType};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Upper price bound that means "no constraint"
pub const DEFAULT_PRICE_MAX: u32 = 10_000;

/// Price ceiling preselected by the hero search form
pub const HERO_PRICE_MAX: u32 = 5_000;

/// User-chosen constraints narrowing the visible listings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Free text matched against title, area, county, street and type
    pub search: String,
    pub price_min: u32,
    pub price_max: u32,
    /// Minimum bedroom count
    pub bedrooms: Option<u32>,
    pub property_type: Option<PropertyType>,
    /// Exact area or county name
    pub location: Option<String>,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            search: String::new(),
            price_min: 0,
            price_max: DEFAULT_PRICE_MAX,
            bedrooms: None,
            property_type: None,
            location: None,
        }
    }
}

impl FilterCriteria {
    /// True when any field differs from the unconstrained default
    pub fn is_active(&self) -> bool {
        *self != Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Fold a hero search submission into the current criteria.
    /// Minimum price and location are left as they were.
    pub fn apply_hero_search(&mut self, hero: &HeroSearch) {
        self.search = hero.search.clone();
        self.property_type = hero.property_type;
        self.bedrooms = hero.bedrooms;
        self.price_max = hero.price_max;
    }

    /// Whether a single listing satisfies every active predicate
    pub fn matches(&self, listing: &Listing) -> bool {
        self.matches_search(listing)
            && self.matches_price(listing)
            && self.matches_bedrooms(listing)
            && self.matches_type(listing)
            && self.matches_location(listing)
    }

    fn matches_search(&self, listing: &Listing) -> bool {
        let needle = self.search.trim();
        if needle.is_empty() {
            return true;
        }
        let needle = needle.to_lowercase();

        [
            listing.title.as_str(),
            listing.address.area.as_str(),
            listing.address.county.as_str(),
            listing.address.street.as_str(),
            listing.property_type.as_str(),
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
    }

    fn matches_price(&self, listing: &Listing) -> bool {
        self.price_min <= listing.price && listing.price <= self.price_max
    }

    fn matches_bedrooms(&self, listing: &Listing) -> bool {
        self.bedrooms.map_or(true, |min| listing.bedrooms >= min)
    }

    fn matches_type(&self, listing: &Listing) -> bool {
        self.property_type
            .map_or(true, |kind| listing.property_type == kind)
    }

    // Exact and case-sensitive: "Dublin" does not match a "Dublin 22" county.
    fn matches_location(&self, listing: &Listing) -> bool {
        self.location.as_deref().map_or(true, |token| {
            listing.address.area == token || listing.address.county == token
        })
    }
}

/// The reduced form submitted from the home page hero
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HeroSearch {
    pub search: String,
    pub property_type: Option<PropertyType>,
    pub bedrooms: Option<u32>,
    pub price_max: u32,
}

impl Default for HeroSearch {
    fn default() -> Self {
        Self {
            search: String::new(),
            property_type: None,
            bedrooms: None,
            price_max: HERO_PRICE_MAX,
        }
    }
}

/// Return the listings matching `criteria`, in their original order.
///
/// Pure: the input is only read, and an empty result is a normal outcome.
pub fn filter_listings(listings: &[Listing], criteria: &FilterCriteria) -> Vec<Listing> {
    listings
        .iter()
        .filter(|listing| criteria.matches(listing))
        .cloned()
        .collect()
}

/// Dropdown choices derived from the dataset, each sorted and deduplicated
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct FilterOptions {
    pub areas: Vec<String>,
    pub counties: Vec<String>,
    pub property_types: Vec<PropertyType>,
}

impl FilterOptions {
    pub fn from_listings(listings: &[Listing]) -> Self {
        let areas: BTreeSet<&str> = listings.iter().map(|l| l.address.area.as_str()).collect();
        let counties: BTreeSet<&str> = listings.iter().map(|l| l.address.county.as_str()).collect();
        // Sorted by name, matching how the dropdown lists them.
        let mut property_types: Vec<PropertyType> = listings
            .iter()
            .map(|l| l.property_type)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        property_types.sort_by_key(|kind| kind.as_str());

        Self {
            areas: areas.into_iter().map(str::to_string).collect(),
            counties: counties.into_iter().map(str::to_string).collect(),
            property_types,
        }
    }
}
