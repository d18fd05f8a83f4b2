//! The wizard session engine shared by every booking and listing flow.
//!
//! A [`WizardSession`] owns the complete state of one in-progress flow: the
//! step cursor, the form field map, attached images with their preview
//! handles, and the submission status machine. The five shipped flows are
//! pure data ([`crate::flows`]); the engine here is flow-independent.
//!
//! # Status machine
//!
//! | status       | edits & navigation | submit                        |
//! |--------------|--------------------|-------------------------------|
//! | `editing`    | allowed            | allowed                       |
//! | `submitting` | blocked            | rejected, no service call     |
//! | `failed`     | allowed            | allowed (retry)               |
//! | `confirmed`  | blocked            | rejected, no service call     |
//!
//! `confirmed` is terminal: no operation moves a session out of it. A failed
//! attempt keeps the service's message and reopens the session for edits.
//!
//! # Example
//!
//! ```
//! use trip_core::models::{FieldValue, FlowKind};
//! use trip_core::session::WizardSession;
//!
//! let mut session = WizardSession::start(FlowKind::StayBooking)?;
//! session.set_field("nights", FieldValue::count(3))?;
//! session.advance();
//!
//! assert_eq!(session.current_step(), 2);
//! assert_eq!(session.progress_fraction(), 0.5);
//! # Ok::<(), trip_core::session::SessionError>(())
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::warn;

use crate::flows::{self, FieldSchema, FlowConfig, FlowConfigError, StepSchema};
use crate::gateway::{BookingError, BookingService};
use crate::media::{LocalPreviewStore, PreviewHandle, PreviewStore};
use crate::models::{
    BookingConfirmation, BookingRequest, ContactDetails, FieldKind, FieldValue, FlowKind,
    PricingQuote, SessionSnapshot, SessionStatus,
};
use crate::pricing;

/// Errors for session state operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    /// The session is submitting or already confirmed.
    #[error("session is not editable while {0}")]
    NotEditable(SessionStatus),

    /// `toggle_selection` was called on a field holding a non-set value.
    #[error("field '{0}' does not hold a selection set")]
    NotASelectionField(String),

    /// `remove_image` was called with an index past the end.
    #[error("image index {index} is out of range ({count} images attached)")]
    ImageIndexOutOfRange { index: usize, count: usize },

    /// `finish` was called before the booking was confirmed.
    #[error("booking is not confirmed")]
    NotConfirmed,

    /// The flow definition failed its consistency checks.
    #[error(transparent)]
    InvalidFlow(#[from] FlowConfigError),
}

/// Errors for the pre-submission field checks.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("required field '{0}' is missing")]
    MissingRequiredField(String),

    #[error("field '{field}' must be a non-negative number, got '{value}'")]
    InvalidNumericInput { field: String, value: String },
}

/// Errors from a submission attempt.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubmitError {
    /// A previous submission is still in flight; no new call was made.
    #[error("a submission is already in flight")]
    InFlight,

    /// The session is already confirmed; no new call was made.
    #[error("booking already confirmed")]
    AlreadyConfirmed,

    /// Validation failed before any call was made.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The booking service rejected or failed the attempt.
    #[error(transparent)]
    Service(#[from] BookingError),
}

/// One in-progress wizard flow.
///
/// Created per flow instance and driven by the display layer: navigation and
/// field edits while `editing`, one [`submit`](Self::submit) at the end,
/// then [`finish`](Self::finish) or [`cancel`](Self::cancel). Every preview
/// handle the session acquired is revoked when it ends, whichever way it
/// ends.
pub struct WizardSession {
    config: FlowConfig,
    current_step: u32,
    fields: BTreeMap<String, FieldValue>,
    image_refs: Vec<String>,
    previews: Vec<PreviewHandle>,
    status: SessionStatus,
    item_reference: Option<String>,
    confirmation: Option<BookingConfirmation>,
    preview_store: Arc<dyn PreviewStore>,
}

impl WizardSession {
    /// Creates a session for `config`, validating the flow definition first.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::InvalidFlow`] if the definition is
    /// inconsistent (no steps, duplicate fields, bad tax rate, or a rule
    /// naming an undeclared field).
    pub fn new(
        config: FlowConfig,
        preview_store: Arc<dyn PreviewStore>,
    ) -> Result<Self, SessionError> {
        config.validate()?;
        Ok(Self {
            config,
            current_step: 1,
            fields: BTreeMap::new(),
            image_refs: Vec::new(),
            previews: Vec::new(),
            status: SessionStatus::Editing,
            item_reference: None,
            confirmation: None,
            preview_store,
        })
    }

    /// Creates a session for the shipped definition of `kind`, backed by an
    /// in-memory preview store.
    pub fn start(kind: FlowKind) -> Result<Self, SessionError> {
        Self::new(flows::config(kind), Arc::new(LocalPreviewStore::new()))
    }

    // ── step controller ──────────────────────────────────────────────────

    /// 1-based step cursor, always within `1..=total_steps`.
    pub fn current_step(&self) -> u32 {
        self.current_step
    }

    pub fn total_steps(&self) -> u32 {
        self.config.total_steps()
    }

    /// Schema of the step the cursor is on.
    pub fn current_step_schema(&self) -> &StepSchema {
        // The cursor is clamped to 1..=len and validate() rejects empty
        // step lists, so this index is always in range.
        &self.config.steps[(self.current_step - 1) as usize]
    }

    /// Moves to the next step. Requests past the last step, and any request
    /// while the session is not editable, are ignored.
    pub fn advance(&mut self) {
        if self.status.is_editable() && self.current_step < self.total_steps() {
            self.current_step += 1;
        }
    }

    /// Moves to the previous step. Requests before the first step, and any
    /// request while the session is not editable, are ignored.
    pub fn retreat(&mut self) {
        if self.status.is_editable() && self.current_step > 1 {
            self.current_step -= 1;
        }
    }

    /// Progress through the wizard in (0, 1].
    pub fn progress_fraction(&self) -> f64 {
        f64::from(self.current_step) / f64::from(self.total_steps())
    }

    // ── form state ───────────────────────────────────────────────────────

    /// Inserts or replaces the single named field; every other field is
    /// untouched. The store does no validation here — values are checked
    /// at quote time and at submission.
    pub fn set_field(&mut self, name: &str, value: FieldValue) -> Result<(), SessionError> {
        self.ensure_editable()?;
        self.fields.insert(name.to_string(), value);
        Ok(())
    }

    /// Removes `item` from the named selection set if present, inserts it
    /// otherwise. A missing field becomes a one-element set.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NotASelectionField`] without mutating when
    /// the field holds a non-set value.
    pub fn toggle_selection(&mut self, name: &str, item: &str) -> Result<(), SessionError> {
        self.ensure_editable()?;
        match self.fields.get_mut(name) {
            Some(FieldValue::Selections(items)) => {
                if !items.remove(item) {
                    items.insert(item.to_string());
                }
                Ok(())
            }
            Some(_) => Err(SessionError::NotASelectionField(name.to_string())),
            None => {
                self.fields
                    .insert(name.to_string(), FieldValue::selections([item]));
                Ok(())
            }
        }
    }

    pub fn field(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    pub fn fields(&self) -> &BTreeMap<String, FieldValue> {
        &self.fields
    }

    /// Catalog reference of the item this session books, for booking flows.
    pub fn set_item_reference(
        &mut self,
        reference: impl Into<String>,
    ) -> Result<(), SessionError> {
        self.ensure_editable()?;
        self.item_reference = Some(reference.into());
        Ok(())
    }

    pub fn item_reference(&self) -> Option<&str> {
        self.item_reference.as_deref()
    }

    // ── image attachments ────────────────────────────────────────────────

    /// Attaches images by source reference, acquiring a preview handle for
    /// each. The reference and handle sequences grow in lockstep and stay
    /// index-aligned.
    pub fn add_images<I, S>(&mut self, refs: I) -> Result<(), SessionError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ensure_editable()?;
        for r in refs {
            let image_ref = r.into();
            let handle = self.preview_store.create(&image_ref);
            self.image_refs.push(image_ref);
            self.previews.push(handle);
        }
        Ok(())
    }

    /// Removes the image at `index` from both sequences and revokes its
    /// preview handle. A failed revoke is logged and otherwise ignored; the
    /// pair is removed regardless.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::ImageIndexOutOfRange`] without mutating
    /// either sequence when `index` is past the end.
    pub fn remove_image(&mut self, index: usize) -> Result<(), SessionError> {
        self.ensure_editable()?;
        if index >= self.image_refs.len() {
            return Err(SessionError::ImageIndexOutOfRange {
                index,
                count: self.image_refs.len(),
            });
        }
        let image_ref = self.image_refs.remove(index);
        let handle = self.previews.remove(index);
        if let Err(e) = self.preview_store.revoke(&handle) {
            warn!(image_ref = %image_ref, error = %e, "failed to revoke preview handle");
        }
        Ok(())
    }

    pub fn image_count(&self) -> usize {
        self.image_refs.len()
    }

    pub fn image_refs(&self) -> &[String] {
        &self.image_refs
    }

    pub fn preview_handles(&self) -> &[PreviewHandle] {
        &self.previews
    }

    // ── derived pricing ──────────────────────────────────────────────────

    /// The quote derived from current field values, recomputed on every
    /// call.
    ///
    /// `None` when the flow is unpriced, when either pricing field is
    /// absent, or when a field holds a value that does not read as a
    /// non-negative number (logged as a warning).
    pub fn quote(&self) -> Option<PricingQuote> {
        let rule = self.config.pricing.as_ref()?;
        let unit_price = self.numeric_field(&rule.unit_price_field)?;
        let quantity = self.numeric_field(&rule.quantity_field)?;
        match pricing::compute_quote(unit_price, quantity, rule.tax_rate) {
            Ok(quote) => Some(quote),
            Err(e) => {
                warn!(flow = self.config.kind.as_str(), error = %e, "quote unavailable");
                None
            }
        }
    }

    fn numeric_field(&self, name: &str) -> Option<Decimal> {
        match self.fields.get(name)? {
            FieldValue::Amount(d) => Some(*d),
            FieldValue::Count(n) => Some(Decimal::from(*n)),
            FieldValue::Text(s) => parse_numeric_text(s),
            FieldValue::Selections(_) => {
                warn!(field = name, "selection set where a number was expected");
                None
            }
        }
    }

    // ── submission ───────────────────────────────────────────────────────

    pub fn status(&self) -> &SessionStatus {
        &self.status
    }

    pub fn confirmation(&self) -> Option<&BookingConfirmation> {
        self.confirmation.as_ref()
    }

    /// Validates the form and makes exactly one call to the booking
    /// service.
    ///
    /// Gated and invalid attempts make no call at all: a session that is
    /// already `submitting` or `confirmed` is rejected immediately, and a
    /// validation failure leaves the status exactly as it was. On success
    /// the session becomes `confirmed` and keeps the returned confirmation;
    /// on a service error it becomes `failed` with the service's message
    /// and may be edited and resubmitted.
    ///
    /// If the returned future is dropped mid-call the session stays
    /// `submitting` and further submissions are rejected; the display layer
    /// awaits the future it issued, so this only guards programming errors.
    ///
    /// # Errors
    ///
    /// * [`SubmitError::InFlight`] / [`SubmitError::AlreadyConfirmed`] —
    ///   status gate, no service call.
    /// * [`SubmitError::Validation`] — a required field is missing or a
    ///   numeric field does not parse; no service call.
    /// * [`SubmitError::Service`] — the service rejected or failed the
    ///   attempt.
    pub async fn submit(
        &mut self,
        service: &dyn BookingService,
    ) -> Result<BookingConfirmation, SubmitError> {
        match self.status {
            SessionStatus::Submitting => return Err(SubmitError::InFlight),
            SessionStatus::Confirmed => return Err(SubmitError::AlreadyConfirmed),
            SessionStatus::Editing | SessionStatus::Failed(_) => {}
        }

        self.validate_for_submit()?;
        let request = self.build_request()?;

        self.status = SessionStatus::Submitting;
        match service.submit(request).await {
            Ok(confirmation) => {
                self.status = SessionStatus::Confirmed;
                self.confirmation = Some(confirmation.clone());
                Ok(confirmation)
            }
            Err(e) => {
                warn!(flow = self.config.kind.as_str(), error = %e, "booking submission failed");
                self.status = SessionStatus::Failed(e.to_string());
                Err(SubmitError::Service(e))
            }
        }
    }

    fn validate_for_submit(&self) -> Result<(), ValidationError> {
        for step in &self.config.steps {
            for field in &step.fields {
                self.validate_field(field)?;
            }
        }
        self.contact_details()?;
        Ok(())
    }

    fn validate_field(&self, schema: &FieldSchema) -> Result<(), ValidationError> {
        let missing = || ValidationError::MissingRequiredField(schema.name.clone());
        let Some(value) = self.fields.get(&schema.name) else {
            return if schema.required { Err(missing()) } else { Ok(()) };
        };
        if value.is_empty() {
            return if schema.required { Err(missing()) } else { Ok(()) };
        }
        if matches!(schema.kind, FieldKind::Amount | FieldKind::Count) {
            numeric_or_error(&schema.name, value)?;
        }
        Ok(())
    }

    fn contact_details(&self) -> Result<ContactDetails, ValidationError> {
        Ok(ContactDetails {
            name: self.required_text(&self.config.contact.name_field)?,
            email: self.required_text(&self.config.contact.email_field)?,
        })
    }

    fn required_text(&self, name: &str) -> Result<String, ValidationError> {
        match self.fields.get(name) {
            Some(value) if !value.is_empty() => Ok(value.to_string()),
            _ => Err(ValidationError::MissingRequiredField(name.to_string())),
        }
    }

    fn build_request(&self) -> Result<BookingRequest, ValidationError> {
        Ok(BookingRequest {
            flow: self.config.kind,
            item_reference: self.item_reference.clone(),
            contact: self.contact_details()?,
            fields: self.fields.clone(),
            image_refs: self.image_refs.clone(),
            quote: self.quote(),
        })
    }

    // ── terminal handling ────────────────────────────────────────────────

    /// Abandons the session: every preview handle is revoked and the
    /// session is discarded. The booking service is never contacted.
    pub fn cancel(mut self) {
        self.release_previews();
    }

    /// Consumes a confirmed session and hands the confirmation out,
    /// revoking every preview handle on the way.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NotConfirmed`] when no confirmation is held;
    /// the session is discarded (and its previews released) either way.
    pub fn finish(mut self) -> Result<BookingConfirmation, SessionError> {
        self.release_previews();
        self.confirmation.take().ok_or(SessionError::NotConfirmed)
    }

    /// Point-in-time view for the display layer.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            current_step: self.current_step,
            total_steps: self.total_steps(),
            step_title: self.current_step_schema().title.clone(),
            fields: self.fields.clone(),
            quote: self.quote(),
            status: self.status.clone(),
        }
    }

    pub fn flow(&self) -> &FlowConfig {
        &self.config
    }

    pub fn flow_kind(&self) -> FlowKind {
        self.config.kind
    }

    fn ensure_editable(&self) -> Result<(), SessionError> {
        if self.status.is_editable() {
            Ok(())
        } else {
            Err(SessionError::NotEditable(self.status.clone()))
        }
    }

    fn release_previews(&mut self) {
        let refs = std::mem::take(&mut self.image_refs);
        let handles = std::mem::take(&mut self.previews);
        for (image_ref, handle) in refs.iter().zip(handles.iter()) {
            if let Err(e) = self.preview_store.revoke(handle) {
                warn!(image_ref = %image_ref, error = %e, "failed to revoke preview handle");
            }
        }
    }
}

impl Drop for WizardSession {
    // Backstop for sessions dropped without cancel or finish.
    fn drop(&mut self) {
        self.release_previews();
    }
}

impl fmt::Debug for WizardSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WizardSession")
            .field("flow", &self.config.kind)
            .field("current_step", &self.current_step)
            .field("status", &self.status)
            .field("fields", &self.fields)
            .field("images", &self.image_refs.len())
            .finish_non_exhaustive()
    }
}

/// Reads user-typed text as a number: trims whitespace, drops thousands
/// separators, and logs a warning when non-empty text does not parse.
fn parse_numeric_text(s: &str) -> Option<Decimal> {
    let normalized = s.trim().replace(',', "");
    if normalized.is_empty() {
        return None;
    }
    normalized.parse().map_or_else(
        |e| {
            warn!(input = %s, "field text is not numeric: {}", e);
            None
        },
        Some,
    )
}

fn numeric_or_error(field: &str, value: &FieldValue) -> Result<Decimal, ValidationError> {
    let amount = match value {
        FieldValue::Amount(d) => Some(*d),
        FieldValue::Count(n) => Some(Decimal::from(*n)),
        FieldValue::Text(s) => parse_numeric_text(s),
        FieldValue::Selections(_) => None,
    };
    match amount {
        Some(a) if a >= Decimal::ZERO => Ok(a),
        _ => Err(ValidationError::InvalidNumericInput {
            field: field.to_string(),
            value: value.to_string(),
        }),
    }
}
