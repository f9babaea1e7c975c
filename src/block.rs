//! Host-boundary contract for the vertical block being rendered.
//!
//! The host pipeline owns the block object model; this crate only sees the
//! three capabilities below. Optional behavior is modelled as explicit
//! capabilities rather than probing the block for attributes.

use serde::Serialize;

use crate::error::Result;

// ── Tag verification state ───────────────────────────────────────────────────

/// Verification state of a block's skill tags.
///
/// `Unknown` suppresses the widget exactly like `Verified` does; only a
/// block that is explicitly unverified is offered for verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagVerificationStatus {
    /// The block does not report a verification state.
    Unknown,
    /// The block's tags have already been verified.
    Verified,
    /// The block's tags are awaiting verification.
    Unverified,
}

// ── Skill records ────────────────────────────────────────────────────────────

/// Opaque skill record produced by the host's fetcher.
///
/// The step never interprets the shape; records are forwarded verbatim
/// into the template context, so a malformed record can only surface as a
/// template render error.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SkillRecord(pub serde_json::Value);

// ── Capabilities ─────────────────────────────────────────────────────────────

/// Capability for fetching the skill tags suggested for a block.
pub trait SkillFetcher {
    /// Return the suggested tags. An empty sequence means there is nothing
    /// to verify and the widget is suppressed.
    fn fetch(&self) -> Result<Vec<SkillRecord>>;
}

/// The structural content block handed to the pipeline step by the host.
pub trait VerticalBlock {
    /// Current verification state of the block's tags.
    fn verification_status(&self) -> TagVerificationStatus;

    /// Fetch capability, if this block supports skill tagging at all.
    fn skill_fetcher(&self) -> Option<&dyn SkillFetcher>;

    /// Resolve the invocation URL for a named handler on this block.
    fn handler_url(&self, action: &str) -> Result<String>;
}
