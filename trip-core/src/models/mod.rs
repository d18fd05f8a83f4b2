mod confirmation;
mod contact;
mod field_value;
mod flow_kind;
mod quote;
mod request;
mod snapshot;
mod status;

pub use confirmation::BookingConfirmation;
pub use contact::ContactDetails;
pub use field_value::{FieldKind, FieldValue};
pub use flow_kind::FlowKind;
pub use quote::PricingQuote;
pub use request::BookingRequest;
pub use snapshot::SessionSnapshot;
pub use status::SessionStatus;
