pub mod catalog;
pub mod loader;
pub mod records;

pub use catalog::Catalog;
pub use loader::{CatalogError, CatalogLoader, ListingRecord};
pub use records::{Listing, ListingKind};
