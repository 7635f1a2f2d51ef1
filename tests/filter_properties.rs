use chrono::{TimeZone, Utc};
use proptest::prelude::*;
use rental_listings::{
    filter_listings, Address, BerRating, FilterCriteria, GeneratorConfig, Listing,
    ListingGenerator, ListingStatus, PropertyType,
};

fn listing(id: &str, price: u32, bedrooms: u32, property_type: PropertyType, county: &str) -> Listing {
    let at = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
    Listing {
        id: id.to_string(),
        title: format!("{} Bedroom {}", bedrooms, property_type.label()),
        property_type,
        address: Address {
            street: "3 Oak Lane".to_string(),
            area: "Rathmines".to_string(),
            county: county.to_string(),
            eircode: None,
        },
        price,
        bedrooms,
        bathrooms: 1,
        size_sqm: 80,
        description: String::new(),
        features: vec!["Dishwasher".to_string()],
        images: vec!["/property-1.jpg".to_string()],
        available_from: at,
        created_at: at,
        status: ListingStatus::Available,
        ber: BerRating::B2,
        is_featured: false,
        is_new: false,
        virtual_tour: None,
    }
}

fn dataset(seed: u64) -> Vec<Listing> {
    ListingGenerator::with_config(GeneratorConfig {
        count: 70,
        seed: Some(seed),
        reference_time: Some(Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()),
        ..GeneratorConfig::default()
    })
    .unwrap()
    .generate()
}

fn any_property_type() -> impl Strategy<Value = PropertyType> {
    prop::sample::select(PropertyType::ALL.to_vec())
}

fn any_criteria() -> impl Strategy<Value = FilterCriteria> {
    (
        prop::sample::select(vec!["", "dublin", "Howth", "house", "  apartment ", "zzz"]),
        0u32..6000,
        0u32..12000,
        prop::option::of(0u32..5),
        prop::option::of(any_property_type()),
        prop::option::of(prop::sample::select(vec!["Dublin", "Cork", "Salthill", "Clondalkin"])),
    )
        .prop_map(|(search, price_min, price_max, bedrooms, property_type, location)| FilterCriteria {
            search: search.to_string(),
            price_min,
            price_max,
            bedrooms,
            property_type,
            location: location.map(str::to_string),
        })
}

#[test]
fn conjunctive_combination_selects_only_matching_listing() {
    let a = listing("A", 1000, 1, PropertyType::Studio, "Dublin");
    let b = listing("B", 2000, 2, PropertyType::House, "Dublin");
    let c = listing("C", 3000, 3, PropertyType::House, "Dublin");
    let criteria = FilterCriteria {
        price_max: 2500,
        property_type: Some(PropertyType::House),
        ..FilterCriteria::default()
    };

    assert_eq!(filter_listings(&[a, b.clone(), c], &criteria), vec![b]);
}

#[test]
fn empty_dataset_yields_empty_result() {
    let criteria = FilterCriteria {
        search: "anything".to_string(),
        bedrooms: Some(3),
        ..FilterCriteria::default()
    };
    assert!(filter_listings(&[], &criteria).is_empty());
    assert!(filter_listings(&[], &FilterCriteria::default()).is_empty());
}

#[test]
fn search_ignores_case() {
    let listings = vec![
        listing("prop-001", 1500, 2, PropertyType::Apartment, "Dublin"),
        listing("prop-002", 1500, 2, PropertyType::Apartment, "Cork"),
    ];
    let lower = FilterCriteria {
        search: "dublin".to_string(),
        ..FilterCriteria::default()
    };
    let upper = FilterCriteria {
        search: "Dublin".to_string(),
        ..FilterCriteria::default()
    };

    let found = filter_listings(&listings, &lower);
    assert_eq!(found, filter_listings(&listings, &upper));
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, "prop-001");
}

#[test]
fn bedroom_minimum_includes_exact_match() {
    let listings: Vec<Listing> = (0..5)
        .map(|beds| listing(&format!("prop-{beds}"), 1500, beds, PropertyType::House, "Dublin"))
        .collect();
    let criteria = FilterCriteria {
        bedrooms: Some(2),
        ..FilterCriteria::default()
    };

    let found = filter_listings(&listings, &criteria);
    assert!(found.iter().all(|l| l.bedrooms >= 2));
    assert!(found.iter().any(|l| l.bedrooms == 2));
    assert_eq!(found.len(), 3);
}

#[test]
fn unmatched_search_is_empty_not_error() {
    let criteria = FilterCriteria {
        search: "atlantis".to_string(),
        ..FilterCriteria::default()
    };
    assert!(filter_listings(&dataset(4), &criteria).is_empty());
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        ..ProptestConfig::default()
    })]

    /// Property: default criteria is the identity filter.
    #[test]
    fn default_criteria_returns_input_unchanged(seed in any::<u64>()) {
        let listings = dataset(seed);
        prop_assert_eq!(filter_listings(&listings, &FilterCriteria::default()), listings);
    }

    /// Property: every result is within the price bounds, and every listing
    /// dropped while all other predicates pass is outside them.
    #[test]
    fn price_bounds_partition_the_dataset(seed in 0u64..1000, min in 0u32..5000, span in 0u32..5000) {
        let listings = dataset(seed);
        let criteria = FilterCriteria {
            price_min: min,
            price_max: min + span,
            ..FilterCriteria::default()
        };
        let found = filter_listings(&listings, &criteria);

        for l in &found {
            prop_assert!(min <= l.price && l.price <= min + span);
        }
        for l in listings.iter().filter(|l| !found.contains(l)) {
            prop_assert!(l.price < min || l.price > min + span);
        }
    }

    /// Property: the result is an order-preserving subsequence of the input
    /// that satisfies the criteria, and the input is left untouched.
    #[test]
    fn filtering_is_pure_and_stable(seed in 0u64..1000, criteria in any_criteria()) {
        let listings = dataset(seed);
        let snapshot = listings.clone();

        let first = filter_listings(&listings, &criteria);
        let second = filter_listings(&listings, &criteria);

        prop_assert_eq!(&listings, &snapshot);
        prop_assert_eq!(&first, &second);
        prop_assert!(first.iter().all(|l| criteria.matches(l)));

        let expected: Vec<&Listing> = listings.iter().filter(|l| criteria.matches(l)).collect();
        let actual: Vec<&Listing> = first.iter().collect();
        prop_assert_eq!(actual, expected);
    }

    /// Property: a minimum bedroom count never admits smaller listings.
    #[test]
    fn bedroom_minimum_holds(seed in 0u64..1000, min in 0u32..5) {
        let criteria = FilterCriteria { bedrooms: Some(min), ..FilterCriteria::default() };
        for l in filter_listings(&dataset(seed), &criteria) {
            prop_assert!(l.bedrooms >= min);
        }
    }
}
