use crate::error::{ListingError, ListingResult};
use crate::filter::{filter_listings, FilterCriteria, FilterOptions};
use crate::models::Listing;

/// The immutable dataset the site serves, loaded once at startup
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    listings: Vec<Listing>,
}

impl Catalog {
    pub fn new(listings: Vec<Listing>) -> Self {
        Self { listings }
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    /// Look up a listing by id, as the detail page does
    pub fn find(&self, id: &str) -> ListingResult<&Listing> {
        self.listings
            .iter()
            .find(|listing| listing.id == id)
            .ok_or_else(|| ListingError::not_found(id))
    }

    pub fn featured(&self) -> impl Iterator<Item = &Listing> {
        self.listings.iter().filter(|listing| listing.is_featured)
    }

    pub fn new_listings(&self) -> impl Iterator<Item = &Listing> {
        self.listings.iter().filter(|listing| listing.is_new)
    }

    pub fn filter(&self, criteria: &FilterCriteria) -> Vec<Listing> {
        filter_listings(&self.listings, criteria)
    }

    pub fn options(&self) -> FilterOptions {
        FilterOptions::from_listings(&self.listings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures::listing;
    use crate::models::PropertyType;

    fn catalog() -> Catalog {
        let mut featured = listing("prop-002", 2000, 2, PropertyType::House);
        featured.is_featured = true;
        let mut fresh = listing("prop-003", 3000, 3, PropertyType::House);
        fresh.is_new = true;
        Catalog::new(vec![
            listing("prop-001", 1000, 0, PropertyType::Studio),
            featured,
            fresh,
        ])
    }

    #[test]
    fn find_returns_listing_or_not_found() {
        let catalog = catalog();
        assert_eq!(catalog.find("prop-002").unwrap().price, 2000);
        assert_eq!(
            catalog.find("prop-999").unwrap_err(),
            ListingError::NotFound("prop-999".to_string())
        );
    }

    #[test]
    fn featured_and_new_are_flag_driven() {
        let catalog = catalog();
        let featured: Vec<&str> = catalog.featured().map(|l| l.id.as_str()).collect();
        let fresh: Vec<&str> = catalog.new_listings().map(|l| l.id.as_str()).collect();
        assert_eq!(featured, vec!["prop-002"]);
        assert_eq!(fresh, vec!["prop-003"]);
    }

    #[test]
    fn filter_delegates_to_criteria() {
        let catalog = catalog();
        let criteria = FilterCriteria {
            price_max: 2500,
            property_type: Some(PropertyType::House),
            ..FilterCriteria::default()
        };
        let ids: Vec<String> = catalog.filter(&criteria).into_iter().map(|l| l.id).collect();
        assert_eq!(ids, vec!["prop-002"]);
        assert_eq!(catalog.options().counties, vec!["Dublin"]);
    }
}
