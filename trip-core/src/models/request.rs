use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::contact::ContactDetails;
use super::field_value::FieldValue;
use super::flow_kind::FlowKind;
use super::quote::PricingQuote;

/// The payload handed to the booking service, assembled from a validated
/// session. This is the only data that crosses the gateway boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingRequest {
    pub flow: FlowKind,
    /// Catalog reference of the item being booked; `None` for listing and
    /// profile creation flows.
    pub item_reference: Option<String>,
    pub contact: ContactDetails,
    /// The full form state at submission time.
    pub fields: BTreeMap<String, FieldValue>,
    /// Source references for attached images, in attachment order.
    pub image_refs: Vec<String>,
    /// The quote the user saw; `None` for unpriced flows or when an optional
    /// preview quantity was left out.
    pub quote: Option<PricingQuote>,
}
