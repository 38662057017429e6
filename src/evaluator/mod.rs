// Player evaluation: lifecycle classification and weighted rating.

pub mod classify;
pub mod score;

use tracing::{debug, info};

use crate::config::CategoryWeights;
use crate::draft::pool::{DraftPool, RankedPlayer};
use crate::player::PlayerRecord;

use classify::Classification;

/// Classify and score every record, returning the ranked draft pool.
///
/// NotApplicable players are dropped here and never enter the pool. Ties in
/// score keep the order in which players were first encountered in the
/// source data.
pub fn rank_players(records: &[PlayerRecord], weights: &CategoryWeights) -> DraftPool {
    let mut ranked = Vec::new();
    let mut regulars = 0usize;
    let mut rookies = 0usize;
    let mut not_applicable = 0usize;

    for record in records {
        let classification = classify::classify(record);
        debug!(
            "Scoring {}'s stats - {}",
            record.name,
            classification.display_str()
        );

        match classification {
            Classification::NotApplicable => {
                not_applicable += 1;
                continue;
            }
            Classification::Regular => regulars += 1,
            Classification::Rookie => rookies += 1,
        }

        let rating = score::score_record(record, classification, weights);
        ranked.push(RankedPlayer {
            name: record.name.clone(),
            score: rating,
        });
    }

    info!(
        "Classified {} regulars, {} rookies, {} not-applicable",
        regulars, rookies, not_applicable
    );

    DraftPool::from_unranked(ranked)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::{Category, StatLine};

    fn weights() -> CategoryWeights {
        CategoryWeights {
            PTS: 4,
            AST: 2,
            REB: 4,
            STL: 2,
            FG_PCT: 4,
            FG3M: 4,
            BLK: 1,
            FT_PCT: 4,
            TOV: -1,
        }
    }

    fn stat_line(entries: &[(Category, f64)]) -> StatLine {
        entries.iter().copied().collect()
    }

    #[test]
    fn ranks_regular_and_rookie_and_drops_na() {
        // The worked example: weights {PTS: 4, TOV: -1}, only PTS varies.
        let records = vec![
            PlayerRecord {
                name: "Player A".into(),
                prior: Some(stat_line(&[(Category::Points, 20.0)])),
                projected: Some(stat_line(&[(Category::Points, 30.0)])),
            },
            PlayerRecord {
                name: "Player B".into(),
                prior: None,
                projected: Some(stat_line(&[(Category::Points, 10.0)])),
            },
            PlayerRecord::new("Player C"),
        ];

        let pool = rank_players(&records, &weights());
        assert_eq!(pool.len(), 2);

        let entries = pool.players();
        assert_eq!(entries[0].name, "Player A");
        assert!((entries[0].score - 100.0).abs() < 1e-9);
        assert_eq!(entries[1].name, "Player B");
        assert!((entries[1].score - 40.0).abs() < 1e-9);
    }

    #[test]
    fn ties_keep_discovery_order() {
        let records = vec![
            PlayerRecord {
                name: "First Seen".into(),
                prior: None,
                projected: Some(stat_line(&[(Category::Points, 10.0)])),
            },
            PlayerRecord {
                name: "Second Seen".into(),
                prior: None,
                projected: Some(stat_line(&[(Category::Points, 10.0)])),
            },
            PlayerRecord {
                name: "Third Seen".into(),
                prior: None,
                projected: Some(stat_line(&[(Category::Points, 25.0)])),
            },
        ];

        let pool = rank_players(&records, &weights());
        let names: Vec<&str> = pool.players().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Third Seen", "First Seen", "Second Seen"]);
    }

    #[test]
    fn empty_record_set_yields_empty_pool() {
        let pool = rank_players(&[], &weights());
        assert!(pool.is_empty());
    }

    #[test]
    fn duplicate_names_keep_first_occurrence() {
        let records = vec![
            PlayerRecord {
                name: "Dupe".into(),
                prior: None,
                projected: Some(stat_line(&[(Category::Points, 10.0)])),
            },
            PlayerRecord {
                name: "Dupe".into(),
                prior: None,
                projected: Some(stat_line(&[(Category::Points, 99.0)])),
            },
        ];

        let pool = rank_players(&records, &weights());
        assert_eq!(pool.len(), 1);
        assert!((pool.players()[0].score - 40.0).abs() < 1e-9);
    }
}
