// Lifecycle classification from stat-map presence.

use crate::player::PlayerRecord;

/// A player's lifecycle tag, derived once per record from which stat maps
/// are present. Replaces exception-driven detection with explicit presence
/// checks; nothing here is shared between players.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// Played the prior season and has a projection.
    Regular,
    /// Has only a projection; no prior-season history.
    Rookie,
    /// Neither map usable; excluded from the draft pool.
    NotApplicable,
}

impl Classification {
    /// Short label for log lines.
    pub fn display_str(&self) -> &'static str {
        match self {
            Classification::Regular => "regular",
            Classification::Rookie => "rookie",
            Classification::NotApplicable => "na",
        }
    }
}

/// Classify a record. An empty map counts as absent, so a structurally
/// hollow record falls through to NotApplicable rather than erroring.
pub fn classify(record: &PlayerRecord) -> Classification {
    let has_prior = record.prior.as_ref().is_some_and(|s| !s.is_empty());
    let has_projected = record.projected.as_ref().is_some_and(|s| !s.is_empty());

    match (has_prior, has_projected) {
        (true, true) => Classification::Regular,
        (false, true) => Classification::Rookie,
        // Prior-only players have no projection to score against, so they
        // land in NotApplicable alongside fully empty records.
        _ => Classification::NotApplicable,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
