//! Moderation state machine for submitted assets.
//!
//! An asset moves `pending -> approved` or `pending -> rejected` through an
//! admin decision. Neither terminal state returns to `pending`; approved
//! assets can only leave the system through an admin hard delete. Re-applying
//! the same decision is a no-op so repeated admin clicks never duplicate side
//! effects.

use crate::error::CoreError;

/// Asset awaiting an admin decision; hidden from public listings.
pub const STATUS_PENDING: &str = "pending";

/// Asset accepted for public listing.
pub const STATUS_APPROVED: &str = "approved";

/// Asset refused; hidden from public listings but still visible to its owner.
pub const STATUS_REJECTED: &str = "rejected";

/// All valid asset statuses.
pub const VALID_STATUSES: &[&str] = &[STATUS_PENDING, STATUS_APPROVED, STATUS_REJECTED];

/// How an asset entered the system. The channel deterministically selects the
/// initial moderation status rather than branching on caller role implicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionChannel {
    /// Regular user submission; enters the moderation queue.
    SelfService,
    /// Admin direct publish; visible immediately.
    AdminDirect,
}

impl SubmissionChannel {
    /// The moderation status a newly created asset starts in.
    pub fn initial_status(self) -> &'static str {
        match self {
            SubmissionChannel::SelfService => STATUS_PENDING,
            SubmissionChannel::AdminDirect => STATUS_APPROVED,
        }
    }
}

/// An admin moderation decision on a pending asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Approve,
    Reject,
}

impl Decision {
    /// The status this decision moves an asset into.
    pub fn target_status(self) -> &'static str {
        match self {
            Decision::Approve => STATUS_APPROVED,
            Decision::Reject => STATUS_REJECTED,
        }
    }
}

/// Result of validating a moderation transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The status changes; persist the new status.
    Apply,
    /// The asset is already in the target status; do nothing.
    Noop,
}

/// Validate a decision against the asset's current status.
///
/// - `pending` accepts either decision.
/// - Re-applying the decision an asset already carries is a [`Transition::Noop`].
/// - Crossing between the terminal states is a conflict.
pub fn validate_transition(current: &str, decision: Decision) -> Result<Transition, CoreError> {
    if !VALID_STATUSES.contains(&current) {
        return Err(CoreError::Internal(format!(
            "Asset carries unknown status '{current}'"
        )));
    }

    if current == STATUS_PENDING {
        return Ok(Transition::Apply);
    }

    if current == decision.target_status() {
        return Ok(Transition::Noop);
    }

    Err(CoreError::Conflict(format!(
        "Cannot move asset from '{current}' to '{}'",
        decision.target_status()
    )))
}

/// Validate the metadata of a new submission.
///
/// The image variant is always mandatory. Self-service submissions must also
/// carry a title and category; the admin direct-publish path historically
/// accepted bare uploads and keeps doing so.
pub fn validate_submission(
    channel: SubmissionChannel,
    title: &str,
    category: &str,
    has_image: bool,
) -> Result<(), CoreError> {
    if !has_image {
        return Err(CoreError::Validation(
            "Main image is required".to_string(),
        ));
    }

    if channel == SubmissionChannel::SelfService {
        if title.trim().is_empty() {
            return Err(CoreError::Validation("Title is required".to_string()));
        }
        if category.trim().is_empty() {
            return Err(CoreError::Validation("Category is required".to_string()));
        }
    }

    Ok(())
}
