//! Bounds evaluation: does a measured resolution satisfy the configured limits?
//!
//! Two combination policies:
//! - [`MatchPolicy::All`]: reject if any enabled bound is violated
//! - [`MatchPolicy::Any`]: accept if any enabled bound is satisfied, even when
//!   other enabled bounds are violated
//!
//! A disabled bound (`0`) never causes rejection under either policy, and with
//! no bound enabled every resolution is accepted.

use probe::Resolution;
use settings::{Bound, ResolutionBounds, ResolutionSettings};

/// How multiple enabled bounds combine into one decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchPolicy {
    /// Every enabled bound must hold.
    #[default]
    All,
    /// A single satisfied bound is enough.
    Any,
}

impl MatchPolicy {
    pub fn from_require_all(require_all: bool) -> Self {
        if require_all {
            MatchPolicy::All
        } else {
            MatchPolicy::Any
        }
    }
}

impl From<&ResolutionSettings> for MatchPolicy {
    fn from(settings: &ResolutionSettings) -> Self {
        MatchPolicy::from_require_all(settings.every_condition_must_be_true)
    }
}

/// Decide whether `resolution` is within `bounds` under `policy`.
///
/// `resolution` must have both dimensions positive.
pub fn evaluate(bounds: &ResolutionBounds, resolution: Resolution, policy: MatchPolicy) -> bool {
    let satisfied = |(bound, limit): (Bound, u32)| bound.is_satisfied(limit, measured(bound, resolution));

    match policy {
        MatchPolicy::All => bounds.enabled().all(satisfied),
        MatchPolicy::Any => bounds.is_unconstrained() || bounds.enabled().any(satisfied),
    }
}

/// The enabled bounds that `resolution` fails, in check order.
pub fn violations(bounds: &ResolutionBounds, resolution: Resolution) -> Vec<Bound> {
    bounds
        .enabled()
        .filter(|&(bound, limit)| !bound.is_satisfied(limit, measured(bound, resolution)))
        .map(|(bound, _)| bound)
        .collect()
}

fn measured(bound: Bound, resolution: Resolution) -> u32 {
    if bound.is_width() {
        resolution.width
    } else {
        resolution.height
    }
}
