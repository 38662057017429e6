// The rating equation, per classification.

use crate::config::CategoryWeights;
use crate::evaluator::classify::Classification;
use crate::player::{PlayerRecord, StatLine};

/// Regular rating: for each category present in *both* seasons, accumulate
/// `weight * (prior + projected) / 2`. Categories missing from either map
/// are skipped, not zero-filled; sparse players are therefore summed over
/// fewer categories, which is the documented behavior of the equation.
pub fn regular_score(prior: &StatLine, projected: &StatLine, weights: &CategoryWeights) -> f64 {
    prior
        .iter()
        .filter_map(|(category, &prior_value)| {
            projected.get(category).map(|&projected_value| {
                weights.multiplier(*category) * (prior_value + projected_value) / 2.0
            })
        })
        .sum()
}

/// Rookie rating: `weight * projected` over every projected category. No
/// averaging, since only one season of data exists.
pub fn rookie_score(projected: &StatLine, weights: &CategoryWeights) -> f64 {
    projected
        .iter()
        .map(|(category, &value)| weights.multiplier(*category) * value)
        .sum()
}

/// Score a record under an already-computed classification.
///
/// Callers must not pass `NotApplicable`; such records carry nothing to
/// score and the result is 0.0.
pub fn score_record(
    record: &PlayerRecord,
    classification: Classification,
    weights: &CategoryWeights,
) -> f64 {
    match classification {
        Classification::Regular => {
            // Regular implies both maps are present and non-empty.
            match (&record.prior, &record.projected) {
                (Some(prior), Some(projected)) => regular_score(prior, projected, weights),
                _ => 0.0,
            }
        }
        Classification::Rookie => match &record.projected {
            Some(projected) => rookie_score(projected, weights),
            None => 0.0,
        },
        Classification::NotApplicable => 0.0,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
