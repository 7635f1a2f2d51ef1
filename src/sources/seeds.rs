//! Curated listings injected over generated filler.

use crate::models::{Address, Listing, PropertyType};
use crate::sources::generator::size_range;
use chrono::{DateTime, Duration, Utc};
use tracing::debug;

/// Address fields of a curated listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedAddress {
    pub street: &'static str,
    pub area: &'static str,
    pub county: &'static str,
    pub eircode: Option<&'static str>,
}

/// Fields replaced on the listing at `index`. `None` keeps the generated value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedPatch {
    pub index: usize,
    pub title: Option<&'static str>,
    pub property_type: Option<PropertyType>,
    pub address: Option<SeedAddress>,
    pub price: Option<u32>,
    pub bedrooms: Option<u32>,
    pub bathrooms: Option<u32>,
    /// When unset and the type changes, the generated size is pulled into the new type's range
    pub size_sqm: Option<u32>,
    pub images: Option<&'static [&'static str]>,
    /// Days after the reference time; zero or negative means available now
    pub available_in_days: Option<i64>,
    pub description: Option<&'static str>,
}

impl SeedPatch {
    pub const EMPTY: SeedPatch = SeedPatch {
        index: 0,
        title: None,
        property_type: None,
        address: None,
        price: None,
        bedrooms: None,
        bathrooms: None,
        size_sqm: None,
        images: None,
        available_in_days: None,
        description: None,
    };

    pub fn apply(&self, listing: &mut Listing, now: DateTime<Utc>) {
        if let Some(title) = self.title {
            listing.title = title.to_string();
        }
        if let Some(kind) = self.property_type {
            listing.property_type = kind;
        }
        if let Some(address) = self.address {
            listing.address = Address {
                street: address.street.to_string(),
                area: address.area.to_string(),
                county: address.county.to_string(),
                eircode: address.eircode.map(str::to_string),
            };
        }
        if let Some(size) = self.size_sqm {
            listing.size_sqm = size;
        } else if self.property_type.is_some() {
            let range = size_range(listing.property_type);
            listing.size_sqm = listing.size_sqm.clamp(range.start, range.end - 1);
        }
        if let Some(price) = self.price {
            listing.price = price;
        }
        if let Some(bedrooms) = self.bedrooms {
            listing.bedrooms = bedrooms;
        }
        if let Some(bathrooms) = self.bathrooms {
            listing.bathrooms = bathrooms;
        }
        if let Some(images) = self.images {
            listing.images = images.iter().map(|s| s.to_string()).collect();
        }
        if let Some(days) = self.available_in_days {
            listing.available_from = now + Duration::days(days);
        }
        if let Some(description) = self.description {
            listing.description = description.to_string();
        }
    }
}

pub const SEED_PATCHES: &[SeedPatch] = &[
    SeedPatch {
        index: 4,
        title: Some("2 Bedroom Apartment on Hanover Quay"),
        property_type: Some(PropertyType::Apartment),
        address: Some(SeedAddress {
            street: "Hanover Quay",
            area: "Grand Canal Dock",
            county: "Dublin",
            eircode: Some("D02 KX40"),
        }),
        price: Some(2850),
        bedrooms: Some(2),
        bathrooms: Some(2),
        size_sqm: Some(78),
        images: Some(&["/property-2.jpg", "/property-4.jpg", "/property-5.jpg"]),
        available_in_days: Some(0),
        description: Some(
            "Bright 2 bedroom apartment on Hanover Quay overlooking Grand Canal Dock. \
             Open plan living area with balcony, two double bedrooms and a secure \
             underground parking space. A short walk to the city centre and the Luas. \
             Available now.",
        ),
    },
    SeedPatch {
        index: 26,
        title: Some("3 Bedroom House in Lindisfarne Green"),
        property_type: Some(PropertyType::House),
        address: Some(SeedAddress {
            street: "Lindisfarne Green",
            area: "Clondalkin",
            county: "Dublin",
            eircode: Some("D22 XY12"),
        }),
        price: Some(2062),
        bedrooms: Some(3),
        bathrooms: Some(2),
        size_sqm: Some(112),
        images: Some(&["/property-1.jpg", "/property-3.jpg", "/property-5.jpg"]),
        available_in_days: Some(0),
        description: Some(
            "Beautiful 3 bedroom house located in Lindisfarne Green, Clondalkin, Dublin 22. \
             This property offers spacious accommodation throughout and is presented in \
             excellent condition. Features include a modern kitchen, comfortable living \
             areas, and a well-maintained garden. Close to local amenities including shops, \
             schools, and public transport. Available for immediate viewing.",
        ),
    },
    SeedPatch {
        index: 48,
        title: Some("Stone Cottage near Salthill Promenade"),
        property_type: Some(PropertyType::Cottage),
        address: Some(SeedAddress {
            street: "Seapoint Lane",
            area: "Salthill",
            county: "Galway",
            eircode: None,
        }),
        price: Some(1750),
        bedrooms: Some(2),
        bathrooms: Some(1),
        size_sqm: Some(95),
        images: Some(&["/property-3.jpg", "/property-1.jpg", "/property-2.jpg"]),
        available_in_days: Some(21),
        description: Some(
            "Restored two bedroom stone cottage a few minutes from Salthill Promenade. \
             Solid fuel stove, enclosed rear garden and off-street parking. \
             Available from next month.",
        ),
    },
];

/// Apply `patches` in order. Patches pointing past the end are skipped.
pub fn apply_seed_patches(listings: &mut [Listing], patches: &[SeedPatch], now: DateTime<Utc>) {
    for patch in patches {
        match listings.get_mut(patch.index) {
            Some(listing) => {
                patch.apply(listing, now);
                debug!("Applied curated listing at index {} ({})", patch.index, listing.id);
            }
            None => {
                debug!(
                    "Skipping curated listing at index {}: only {} listings generated",
                    patch.index,
                    listings.len()
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures::{listing, reference_time};

    #[test]
    fn patch_overrides_only_given_fields() {
        let mut l = listing("prop-001", 1200, 1, PropertyType::Apartment);
        l.features = vec!["Dishwasher".to_string()];
        let patch = SeedPatch {
            index: 0,
            price: Some(1999),
            bedrooms: Some(3),
            available_in_days: Some(5),
            ..SeedPatch::EMPTY
        };
        patch.apply(&mut l, reference_time());

        assert_eq!(l.id, "prop-001");
        assert_eq!(l.price, 1999);
        assert_eq!(l.bedrooms, 3);
        assert_eq!(l.bathrooms, 1);
        assert_eq!(l.features, vec!["Dishwasher"]);
        assert_eq!(l.available_from, reference_time() + Duration::days(5));
    }

    #[test]
    fn type_change_pulls_size_into_range() {
        let mut l = listing("prop-001", 1200, 0, PropertyType::Land);
        l.size_sqm = 4200;
        let patch = SeedPatch {
            property_type: Some(PropertyType::House),
            ..SeedPatch::EMPTY
        };
        patch.apply(&mut l, reference_time());
        assert_eq!(l.size_sqm, 149);

        l.size_sqm = 45;
        patch.apply(&mut l, reference_time());
        assert_eq!(l.size_sqm, 100);

        let sized = SeedPatch {
            property_type: Some(PropertyType::Cottage),
            size_sqm: Some(95),
            ..SeedPatch::EMPTY
        };
        sized.apply(&mut l, reference_time());
        assert_eq!(l.size_sqm, 95);
    }

    #[test]
    fn curated_sizes_match_curated_types() {
        for patch in SEED_PATCHES {
            let (Some(kind), Some(size)) = (patch.property_type, patch.size_sqm) else {
                panic!("curated listing at {} needs a type and size", patch.index);
            };
            assert!(size_range(kind).contains(&size), "index {}", patch.index);
        }
    }

    #[test]
    fn out_of_range_patches_are_skipped() {
        let mut listings = vec![listing("prop-001", 1200, 1, PropertyType::Apartment)];
        let before = listings.clone();
        apply_seed_patches(&mut listings, SEED_PATCHES, reference_time());
        assert_eq!(listings, before);
    }

    #[test]
    fn curated_table_has_unique_indices() {
        let mut indices: Vec<usize> = SEED_PATCHES.iter().map(|p| p.index).collect();
        indices.sort_unstable();
        indices.dedup();
        assert_eq!(indices.len(), SEED_PATCHES.len());
    }
}
