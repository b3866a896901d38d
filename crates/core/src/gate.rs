//! Download access gate for restricted asset variants.
//!
//! Decides, per download request, whether the caller gets the resource
//! immediately, must sign in first, or must visit the external monetization
//! link to obtain a fresh access token. The token is a bare client-held
//! expiry instant; the gate only checks that it lies in the future. There is
//! no server-side proof that the monetization step actually completed --
//! inherited trust gap, kept as-is.

use crate::types::UnixMillis;
use crate::variant::VariantKind;

/// Access-token lifetime: one hour from issuance.
pub const TOKEN_TTL_MS: UnixMillis = 60 * 60 * 1000;

/// A monetization link shorter than this is treated as not configured.
pub const MIN_SHORTLINK_LEN: usize = 5;

/// Outcome of a gate evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateOutcome {
    /// Hand back the resource location and record the download.
    Allow,
    /// Caller must authenticate; nothing is recorded.
    RequireAuth,
    /// Caller must obtain a token via the monetization link.
    RequireToken {
        /// A stale token was presented and must be purged client-side.
        purge_stale_token: bool,
    },
}

/// Whether a configured shortlink value actually enables the gate.
///
/// The historical threshold: the value must be strictly longer than five
/// characters. Empty or trivially short values disable monetization.
pub fn shortlink_enabled(shortlink: Option<&str>) -> bool {
    shortlink.is_some_and(|s| s.len() > MIN_SHORTLINK_LEN)
}

/// Evaluate a download request.
///
/// `token_expires_at` is the expiry instant the client has stored, if any.
/// Expired tokens are treated exactly like absent ones, except the outcome
/// additionally instructs the client to purge the stale value (lazy
/// eviction; there is no background sweep).
pub fn evaluate(
    variant: VariantKind,
    authenticated: bool,
    shortlink: Option<&str>,
    token_expires_at: Option<UnixMillis>,
    now: UnixMillis,
) -> GateOutcome {
    if !variant.is_restricted() {
        return GateOutcome::Allow;
    }

    if !authenticated {
        return GateOutcome::RequireAuth;
    }

    if !shortlink_enabled(shortlink) {
        return GateOutcome::Allow;
    }

    match token_expires_at {
        Some(expiry) if expiry > now => GateOutcome::Allow,
        Some(_) => GateOutcome::RequireToken {
            purge_stale_token: true,
        },
        None => GateOutcome::RequireToken {
            purge_stale_token: false,
        },
    }
}

/// Expiry instant for a token issued at `now`.
pub fn issue_expiry(now: UnixMillis) -> UnixMillis {
    now + TOKEN_TTL_MS
}
