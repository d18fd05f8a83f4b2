use std::io::Read;

use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when reading a catalog export.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("CSV parse error: {0}")]
    CsvParse(String),

    #[error("unknown listing kind '{0}'")]
    UnknownKind(String),

    #[error("unknown pricing unit '{0}'")]
    UnknownUnit(String),

    #[error("duplicate listing reference '{0}'")]
    DuplicateReference(String),

    #[error("listing '{reference}' has a negative unit price ({price})")]
    NegativePrice { reference: String, price: Decimal },
}

impl From<csv::Error> for CatalogError {
    fn from(err: csv::Error) -> Self {
        CatalogError::CsvParse(err.to_string())
    }
}

/// A single row from the catalog CSV export.
///
/// Columns:
/// - `reference`: Unique listing reference, e.g. `ST-1001`
/// - `kind`: Listing kind code (`stay`, `coworking`, `experience`, `service`)
/// - `title`: Display title
/// - `city`: City the listing is in
/// - `unit_price`: Price per pricing unit
/// - `unit`: Pricing unit code (`night`, `day`, `month`, `km`)
/// - `rating`: Average guest rating (empty when unrated)
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ListingRecord {
    pub reference: String,
    pub kind: String,
    pub title: String,
    pub city: String,
    pub unit_price: Decimal,
    pub unit: String,
    #[serde(deserialize_with = "deserialize_optional_decimal")]
    pub rating: Option<Decimal>,
}

fn deserialize_optional_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => s
            .trim()
            .parse::<Decimal>()
            .map(Some)
            .map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

/// Reader for catalog CSV exports.
///
/// Parsing keeps the rows as raw [`ListingRecord`]s; building a
/// [`crate::Catalog`] from them is where kinds, units, and prices are
/// checked.
pub struct CatalogLoader;

impl CatalogLoader {
    /// Parse listing records from a CSV reader.
    ///
    /// The reader can be any type that implements `Read`, such as a file
    /// or a byte slice.
    pub fn parse<R: Read>(reader: R) -> Result<Vec<ListingRecord>, CatalogError> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut records = Vec::new();

        for result in csv_reader.deserialize() {
            let record: ListingRecord = result?;
            records.push(record);
        }

        Ok(records)
    }
}
