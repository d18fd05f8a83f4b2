use serde::{Deserialize, Serialize};

/// The five wizard flows the product ships.
///
/// Booking flows charge the user at the end; listing flows publish inventory
/// and only show a pricing preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlowKind {
    StayBooking,
    CoworkingBooking,
    HostProfile,
    ServiceListing,
    ExperienceListing,
}

impl FlowKind {
    pub const ALL: [FlowKind; 5] = [
        FlowKind::StayBooking,
        FlowKind::CoworkingBooking,
        FlowKind::HostProfile,
        FlowKind::ServiceListing,
        FlowKind::ExperienceListing,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::StayBooking => "stay",
            Self::CoworkingBooking => "coworking",
            Self::HostProfile => "host_profile",
            Self::ServiceListing => "service_listing",
            Self::ExperienceListing => "experience_listing",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "stay" => Some(Self::StayBooking),
            "coworking" => Some(Self::CoworkingBooking),
            "host_profile" => Some(Self::HostProfile),
            "service_listing" => Some(Self::ServiceListing),
            "experience_listing" => Some(Self::ExperienceListing),
            _ => None,
        }
    }
}
