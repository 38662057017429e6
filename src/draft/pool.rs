// The ranked pool of undrafted players.

use std::collections::HashSet;

use tracing::warn;

/// One pool entry: a player name and its computed rating.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedPlayer {
    pub name: String,
    pub score: f64,
}

/// Result of asking the pool to remove a name.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RemoveOutcome {
    /// The player was present; carries the removed rating.
    Removed(f64),
    /// The name is not in the pool (never was, or already drafted).
    NotFound,
}

/// The ranked, shrinking collection of undrafted players.
///
/// Sorted descending by score at construction and never re-sorted; removal
/// is the only mutation. Each name appears at most once.
#[derive(Debug, Clone, Default)]
pub struct DraftPool {
    players: Vec<RankedPlayer>,
}

impl DraftPool {
    /// Build a pool from unsorted entries.
    ///
    /// Duplicate names keep their first occurrence (later ones are logged
    /// and dropped). The sort is stable, so equal scores retain the order
    /// in which players were first encountered.
    pub fn from_unranked(entries: Vec<RankedPlayer>) -> Self {
        let mut seen: HashSet<String> = HashSet::with_capacity(entries.len());
        let mut players: Vec<RankedPlayer> = Vec::with_capacity(entries.len());
        for entry in entries {
            if seen.insert(entry.name.clone()) {
                players.push(entry);
            } else {
                warn!("duplicate player '{}' dropped from pool", entry.name);
            }
        }

        players.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        DraftPool { players }
    }

    /// The top `n` remaining players, in pool order.
    pub fn top(&self, n: usize) -> &[RankedPlayer] {
        &self.players[..n.min(self.players.len())]
    }

    /// All remaining players, in pool order.
    pub fn players(&self) -> &[RankedPlayer] {
        &self.players
    }

    /// Remove a player by exact name. Absent names leave the pool
    /// untouched and report `NotFound`.
    pub fn remove(&mut self, name: &str) -> RemoveOutcome {
        match self.players.iter().position(|p| p.name == name) {
            Some(idx) => {
                let removed = self.players.remove(idx);
                RemoveOutcome::Removed(removed.score)
            }
            None => RemoveOutcome::NotFound,
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.players.iter().any(|p| p.name == name)
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, score: f64) -> RankedPlayer {
        RankedPlayer {
            name: name.into(),
            score,
        }
    }

    #[test]
    fn sorts_descending_by_score() {
        let pool = DraftPool::from_unranked(vec![
            entry("Low", 10.0),
            entry("High", 90.0),
            entry("Mid", 50.0),
        ]);
        let names: Vec<&str> = pool.players().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["High", "Mid", "Low"]);
    }

    #[test]
    fn stable_sort_preserves_tie_order() {
        let pool = DraftPool::from_unranked(vec![
            entry("Tied First", 50.0),
            entry("Tied Second", 50.0),
            entry("Top", 80.0),
            entry("Tied Third", 50.0),
        ]);
        let names: Vec<&str> = pool.players().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Top", "Tied First", "Tied Second", "Tied Third"]
        );
    }

    #[test]
    fn top_caps_at_pool_size() {
        let pool = DraftPool::from_unranked(vec![entry("A", 3.0), entry("B", 2.0)]);
        assert_eq!(pool.top(10).len(), 2);
        assert_eq!(pool.top(1).len(), 1);
        assert_eq!(pool.top(1)[0].name, "A");
        assert_eq!(pool.top(0).len(), 0);
    }

    #[test]
    fn remove_present_player() {
        let mut pool =
            DraftPool::from_unranked(vec![entry("A", 100.0), entry("B", 40.0)]);

        assert_eq!(pool.remove("A"), RemoveOutcome::Removed(100.0));
        assert_eq!(pool.len(), 1);
        assert!(!pool.contains("A"));
        assert!(pool.contains("B"));
    }

    #[test]
    fn remove_is_idempotent_for_absent_names() {
        let mut pool =
            DraftPool::from_unranked(vec![entry("A", 100.0), entry("B", 40.0)]);

        assert_eq!(pool.remove("A"), RemoveOutcome::Removed(100.0));
        // Second removal of the same name: no mutation, no panic.
        assert_eq!(pool.remove("A"), RemoveOutcome::NotFound);
        assert_eq!(pool.len(), 1);
        // Never-present name behaves the same.
        assert_eq!(pool.remove("Nobody"), RemoveOutcome::NotFound);
        assert_eq!(pool.len(), 1);
    }

    #[test]
    fn removing_top_entry_preserves_remaining_order() {
        let mut pool = DraftPool::from_unranked(vec![
            entry("A", 90.0),
            entry("B", 70.0),
            entry("C", 50.0),
            entry("D", 30.0),
        ]);
        pool.remove("A");
        let names: Vec<&str> = pool.players().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["B", "C", "D"]);
    }

    #[test]
    fn exhaustion_empties_the_pool() {
        let mut pool = DraftPool::from_unranked(vec![
            entry("A", 90.0),
            entry("B", 70.0),
            entry("C", 50.0),
        ]);
        for name in ["A", "B", "C"] {
            assert!(matches!(pool.remove(name), RemoveOutcome::Removed(_)));
        }
        assert!(pool.is_empty());
    }

    #[test]
    fn duplicates_keep_first_occurrence() {
        let pool = DraftPool::from_unranked(vec![
            entry("Dupe", 40.0),
            entry("Other", 60.0),
            entry("Dupe", 99.0),
        ]);
        assert_eq!(pool.len(), 2);
        assert_eq!(pool.players()[0].name, "Other");
        assert!((pool.players()[1].score - 40.0).abs() < f64::EPSILON);
    }

    #[test]
    fn exact_match_only() {
        let mut pool = DraftPool::from_unranked(vec![entry("Jamal Murray", 80.0)]);
        assert_eq!(pool.remove("jamal murray"), RemoveOutcome::NotFound);
        assert_eq!(pool.remove("Jamal"), RemoveOutcome::NotFound);
        assert_eq!(pool.len(), 1);
    }
}
