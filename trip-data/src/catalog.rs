use std::collections::HashSet;

use rust_decimal::Decimal;

use trip_core::flows::PricingUnit;

use crate::loader::{CatalogError, ListingRecord};
use crate::records::{Listing, ListingKind};

/// In-memory listing catalog, built from the rows of a CSV export.
///
/// Construction checks every row, so a catalog never holds a listing with
/// an unknown kind or unit, a duplicate reference, or a negative price.
pub struct Catalog {
    listings: Vec<Listing>,
}

impl Catalog {
    pub fn from_records(records: Vec<ListingRecord>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        let mut listings = Vec::with_capacity(records.len());

        for record in records {
            let kind = ListingKind::parse(&record.kind)
                .ok_or_else(|| CatalogError::UnknownKind(record.kind.clone()))?;
            let unit = PricingUnit::parse(&record.unit)
                .ok_or_else(|| CatalogError::UnknownUnit(record.unit.clone()))?;
            if record.unit_price < Decimal::ZERO {
                return Err(CatalogError::NegativePrice {
                    reference: record.reference,
                    price: record.unit_price,
                });
            }
            if !seen.insert(record.reference.clone()) {
                return Err(CatalogError::DuplicateReference(record.reference));
            }
            listings.push(Listing {
                reference: record.reference,
                kind,
                title: record.title,
                city: record.city,
                unit_price: record.unit_price,
                unit,
                rating: record.rating,
            });
        }

        Ok(Self { listings })
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    /// Every listing, in export order.
    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn find(&self, reference: &str) -> Option<&Listing> {
        self.listings.iter().find(|l| l.reference == reference)
    }

    /// Listings matching every given filter, in export order. City matching
    /// ignores ASCII case.
    pub fn search(
        &self,
        kind: Option<ListingKind>,
        city: Option<&str>,
        max_price: Option<Decimal>,
    ) -> Vec<&Listing> {
        self.listings
            .iter()
            .filter(|l| kind.is_none_or(|k| l.kind == k))
            .filter(|l| city.is_none_or(|c| l.city.eq_ignore_ascii_case(c)))
            .filter(|l| max_price.is_none_or(|max| l.unit_price <= max))
            .collect()
    }

    /// The `limit` best-rated listings, best first. Unrated listings never
    /// appear; ties keep export order.
    pub fn top_rated(&self, limit: usize) -> Vec<&Listing> {
        let mut rated: Vec<&Listing> = self
            .listings
            .iter()
            .filter(|l| l.rating.is_some())
            .collect();
        rated.sort_by(|a, b| b.rating.cmp(&a.rating));
        rated.truncate(limit);
        rated
    }
}
