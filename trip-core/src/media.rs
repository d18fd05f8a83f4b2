//! Preview handles for image attachments.
//!
//! When the user attaches an image, the display layer needs a handle it can
//! hand to whatever renders the preview. Handles hold a real resource on
//! that side, so they must be explicitly revoked when an image is removed
//! or a session ends; they are not reclaimed by going out of scope alone.
//! [`WizardSession`](crate::session::WizardSession) owns that lifecycle and
//! revokes every outstanding handle on cancel, finish, and drop.

use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PreviewError {
    /// The handle was never issued by this store, or was already revoked.
    #[error("preview handle {0} is not active")]
    UnknownHandle(Uuid),
}

/// Opaque identity of one issued preview.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PreviewHandle {
    id: Uuid,
}

impl PreviewHandle {
    pub fn new(id: Uuid) -> Self {
        Self { id }
    }

    pub fn generate() -> Self {
        Self { id: Uuid::new_v4() }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }
}

/// Issues and revokes preview handles for image references.
///
/// The display layer provides the real implementation (backed by whatever
/// its renderer uses for object URLs); [`LocalPreviewStore`] is the
/// in-memory implementation used by tests and the simulated stack.
pub trait PreviewStore: Send + Sync {
    /// Issue a handle for an image reference. Creating is infallible;
    /// a store that cannot render a reference still tracks the handle.
    fn create(&self, image_ref: &str) -> PreviewHandle;

    /// Release a handle. Revoking a handle this store did not issue (or
    /// already revoked) is an error; callers treat that as non-fatal.
    fn revoke(&self, handle: &PreviewHandle) -> Result<(), PreviewError>;

    /// Number of handles issued and not yet revoked.
    fn active_count(&self) -> usize;
}

/// In-memory [`PreviewStore`] tracking active handles in a set.
#[derive(Debug, Default)]
pub struct LocalPreviewStore {
    active: Mutex<HashSet<Uuid>>,
}

impl LocalPreviewStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock_active(&self) -> MutexGuard<'_, HashSet<Uuid>> {
        match self.active.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl PreviewStore for LocalPreviewStore {
    fn create(&self, _image_ref: &str) -> PreviewHandle {
        let handle = PreviewHandle::generate();
        self.lock_active().insert(handle.id());
        handle
    }

    fn revoke(&self, handle: &PreviewHandle) -> Result<(), PreviewError> {
        if self.lock_active().remove(&handle.id()) {
            Ok(())
        } else {
            Err(PreviewError::UnknownHandle(handle.id()))
        }
    }

    fn active_count(&self) -> usize {
        self.lock_active().len()
    }
}
