//! Async operation status for UI conditionals.

/// The lifecycle state of an asynchronous operation.
///
/// Replaces pairs of boolean flags (`is_loading`, `has_failed`, ...)
/// with one value that is always in exactly one of four states. Query
/// methods cover each state for use in rendering conditionals.
///
/// ```
/// use formwork::AsyncStatus;
///
/// let status = AsyncStatus::default();
/// assert!(status.is_not_started());
///
/// let status = AsyncStatus::Pending;
/// assert!(status.is_pending());
/// assert!(!status.is_succeeded());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AsyncStatus {
    /// The operation has not been started.
    #[default]
    NotStarted,
    /// The operation is in flight.
    Pending,
    /// The operation finished successfully.
    Succeeded,
    /// The operation finished with an error.
    Failed,
}

impl AsyncStatus {
    /// Check if the operation has not been started.
    pub fn is_not_started(&self) -> bool {
        matches!(self, Self::NotStarted)
    }

    /// Check if the operation is in flight.
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Check if the operation finished successfully.
    pub fn is_succeeded(&self) -> bool {
        matches!(self, Self::Succeeded)
    }

    /// Check if the operation finished with an error.
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed)
    }
}
