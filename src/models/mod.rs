mod kinds;

pub use kinds::{BerBand, BerRating, ListingStatus, PropertyType};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Shown when a listing has no images of its own
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

/// Postal address of a listing
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Address {
    pub street: String,
    /// Neighbourhood, e.g. "Ranelagh"
    pub area: String,
    pub county: String,
    pub eircode: Option<String>,
}

impl Address {
    /// "street, area, county" with the eircode appended when known
    pub fn one_line(&self) -> String {
        let mut line = format!("{}, {}, {}", self.street, self.area, self.county);
        if let Some(eircode) = &self.eircode {
            line.push_str(", ");
            line.push_str(eircode);
        }
        line
    }
}

/// Core rental listing data model
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Listing {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub property_type: PropertyType,
    pub address: Address,
    /// Monthly rent in whole euro
    pub price: u32,
    pub bedrooms: u32,
    pub bathrooms: u32,
    /// Floor or lot size in square meters
    pub size_sqm: u32,
    pub description: String,
    pub features: Vec<String>,
    pub images: Vec<String>,
    pub available_from: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub status: ListingStatus,
    pub ber: BerRating,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub is_new: bool,
    #[serde(default)]
    pub virtual_tour: Option<String>,
}

impl Listing {
    /// First image, or the placeholder when there are none
    pub fn cover_image(&self) -> &str {
        self.images
            .first()
            .map(String::as_str)
            .unwrap_or(PLACEHOLDER_IMAGE)
    }

    /// A past or present availability date means the listing can be moved into now
    pub fn is_available_now(&self, now: DateTime<Utc>) -> bool {
        self.available_from <= now
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;
    use chrono::TimeZone;

    pub fn reference_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 14, 9, 0, 0).unwrap()
    }

    pub fn listing(id: &str, price: u32, bedrooms: u32, property_type: PropertyType) -> Listing {
        Listing {
            id: id.to_string(),
            title: format!("Test {} {}", bedrooms, property_type.label()),
            property_type,
            address: Address {
                street: "12 Main Street".to_string(),
                area: "Ranelagh".to_string(),
                county: "Dublin".to_string(),
                eircode: None,
            },
            price,
            bedrooms,
            bathrooms: 1,
            size_sqm: 70,
            description: String::new(),
            features: vec![],
            images: vec![],
            available_from: reference_time(),
            created_at: reference_time(),
            status: ListingStatus::Available,
            ber: BerRating::C1,
            is_featured: false,
            is_new: false,
            virtual_tour: None,
        }
    }
}
