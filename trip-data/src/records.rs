use rust_decimal::Decimal;

use trip_core::flows::PricingUnit;
use trip_core::models::FlowKind;

/// Kind of a catalog listing. The code form (`"stay"`, `"coworking"`,
/// `"experience"`, `"service"`) is what the CSV export carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListingKind {
    Stay,
    Coworking,
    Experience,
    Service,
}

impl ListingKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListingKind::Stay => "stay",
            ListingKind::Coworking => "coworking",
            ListingKind::Experience => "experience",
            ListingKind::Service => "service",
        }
    }

    pub fn parse(code: &str) -> Option<Self> {
        match code {
            "stay" => Some(ListingKind::Stay),
            "coworking" => Some(ListingKind::Coworking),
            "experience" => Some(ListingKind::Experience),
            "service" => Some(ListingKind::Service),
            _ => None,
        }
    }

    /// Wizard flow that books a listing of this kind. Experiences and
    /// services are browse-only here; their wizard flows create listings
    /// rather than book them.
    pub fn booking_flow(&self) -> Option<FlowKind> {
        match self {
            ListingKind::Stay => Some(FlowKind::StayBooking),
            ListingKind::Coworking => Some(FlowKind::CoworkingBooking),
            ListingKind::Experience | ListingKind::Service => None,
        }
    }
}

/// One bookable or browsable item from the catalog export.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    pub reference: String,
    pub kind: ListingKind,
    pub title: String,
    pub city: String,
    pub unit_price: Decimal,
    pub unit: PricingUnit,
    pub rating: Option<Decimal>,
}
