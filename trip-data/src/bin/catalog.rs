use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rust_decimal::Decimal;
use trip_data::{Catalog, CatalogLoader, ListingKind};

/// Browse a listing catalog exported as CSV.
///
/// The CSV file should have the following columns:
/// - reference: Unique listing reference (e.g., ST-1001)
/// - kind: Listing kind (stay, coworking, experience, service)
/// - title: Display title
/// - city: City the listing is in
/// - unit_price: Price per pricing unit
/// - unit: Pricing unit (night, day, month, km)
/// - rating: Average guest rating (empty when unrated)
#[derive(Parser, Debug)]
#[command(name = "trip-catalog")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the CSV file containing the catalog export
    #[arg(short, long)]
    file: PathBuf,

    /// Only show listings of this kind (stay, coworking, experience, service)
    #[arg(short, long)]
    kind: Option<String>,

    /// Only show listings in this city
    #[arg(short, long)]
    city: Option<String>,

    /// Only show listings at or below this unit price
    #[arg(short, long)]
    max_price: Option<Decimal>,

    /// Sort the results by unit price, cheapest first
    #[arg(short, long, default_value_t = false)]
    sort_by_price: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    println!("Loading catalog from: {}", args.file.display());

    let file = File::open(&args.file)
        .with_context(|| format!("Failed to open: {}", args.file.display()))?;

    let records = CatalogLoader::parse(file)
        .with_context(|| format!("Failed to parse CSV: {}", args.file.display()))?;

    println!("Parsed {} rows from CSV", records.len());

    let catalog = Catalog::from_records(records).context("Failed to build the catalog")?;

    let kind = match args.kind.as_deref() {
        Some(code) => Some(
            ListingKind::parse(code)
                .with_context(|| format!("Unknown listing kind: {}", code))?,
        ),
        None => None,
    };

    let mut listings = catalog.search(kind, args.city.as_deref(), args.max_price);
    if args.sort_by_price {
        listings.sort_by(|a, b| a.unit_price.cmp(&b.unit_price));
    }

    println!("{} listing(s) match:", listings.len());
    for listing in &listings {
        let price = format!("{}/{}", listing.unit_price, listing.unit.as_str());
        let rating = listing
            .rating
            .map(|r| r.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "  {:<8}  {:<10}  {:<28}  {:<10}  {:>12}  {}",
            listing.reference,
            listing.kind.as_str(),
            listing.title,
            listing.city,
            price,
            rating
        );
    }

    Ok(())
}
