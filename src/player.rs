// Player records and the fixed statistical category set.

use std::collections::HashMap;
use std::fmt;

// ---------------------------------------------------------------------------
// ESPN stat id constants (from ESPN Fantasy API v3, basketball)
// ---------------------------------------------------------------------------

pub const ESPN_STAT_PTS: u16 = 0;
pub const ESPN_STAT_BLK: u16 = 1;
pub const ESPN_STAT_STL: u16 = 2;
pub const ESPN_STAT_AST: u16 = 3;
pub const ESPN_STAT_REB: u16 = 6;
pub const ESPN_STAT_TOV: u16 = 11;
pub const ESPN_STAT_FG3M: u16 = 17;
pub const ESPN_STAT_FG_PCT: u16 = 19;
pub const ESPN_STAT_FT_PCT: u16 = 20;

/// One statistical dimension used by the rating equation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Points,
    Assists,
    Rebounds,
    Steals,
    FieldGoalPct,
    ThreesMade,
    Blocks,
    FreeThrowPct,
    Turnovers,
}

/// All categories, in display order.
pub const ALL_CATEGORIES: [Category; 9] = [
    Category::Points,
    Category::Assists,
    Category::Rebounds,
    Category::Steals,
    Category::FieldGoalPct,
    Category::ThreesMade,
    Category::Blocks,
    Category::FreeThrowPct,
    Category::Turnovers,
];

impl Category {
    /// Map an ESPN stat id to a category. Ids outside the nine scored
    /// categories return `None` and are skipped by callers.
    pub fn from_stat_id(id: u16) -> Option<Self> {
        match id {
            ESPN_STAT_PTS => Some(Category::Points),
            ESPN_STAT_AST => Some(Category::Assists),
            ESPN_STAT_REB => Some(Category::Rebounds),
            ESPN_STAT_STL => Some(Category::Steals),
            ESPN_STAT_FG_PCT => Some(Category::FieldGoalPct),
            ESPN_STAT_FG3M => Some(Category::ThreesMade),
            ESPN_STAT_BLK => Some(Category::Blocks),
            ESPN_STAT_FT_PCT => Some(Category::FreeThrowPct),
            ESPN_STAT_TOV => Some(Category::Turnovers),
            _ => None,
        }
    }

    /// The ESPN stat id for this category.
    pub fn stat_id(&self) -> u16 {
        match self {
            Category::Points => ESPN_STAT_PTS,
            Category::Assists => ESPN_STAT_AST,
            Category::Rebounds => ESPN_STAT_REB,
            Category::Steals => ESPN_STAT_STL,
            Category::FieldGoalPct => ESPN_STAT_FG_PCT,
            Category::ThreesMade => ESPN_STAT_FG3M,
            Category::Blocks => ESPN_STAT_BLK,
            Category::FreeThrowPct => ESPN_STAT_FT_PCT,
            Category::Turnovers => ESPN_STAT_TOV,
        }
    }

    /// Short display label, matching the weights.toml keys.
    pub fn display_str(&self) -> &'static str {
        match self {
            Category::Points => "PTS",
            Category::Assists => "AST",
            Category::Rebounds => "REB",
            Category::Steals => "STL",
            Category::FieldGoalPct => "FG_PCT",
            Category::ThreesMade => "FG3M",
            Category::Blocks => "BLK",
            Category::FreeThrowPct => "FT_PCT",
            Category::Turnovers => "TOV",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_str())
    }
}

/// Per-season average values keyed by category.
pub type StatLine = HashMap<Category, f64>;

/// One player's raw input: a name plus up to two seasons of average stats.
/// Which of the two maps are present decides the player's classification;
/// the record itself is never mutated after loading.
#[derive(Debug, Clone, Default)]
pub struct PlayerRecord {
    pub name: String,
    /// Actual averages from the completed prior season, if the player
    /// appeared in it.
    pub prior: Option<StatLine>,
    /// Projected averages for the upcoming season, if a projection exists.
    pub projected: Option<StatLine>,
}

impl PlayerRecord {
    pub fn new(name: impl Into<String>) -> Self {
        PlayerRecord {
            name: name.into(),
            prior: None,
            projected: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stat_id_roundtrip_for_all_categories() {
        for cat in ALL_CATEGORIES {
            assert_eq!(Category::from_stat_id(cat.stat_id()), Some(cat));
        }
    }

    #[test]
    fn unknown_stat_id_maps_to_none() {
        // 42 is a real ESPN stat id (minutes-adjacent), just not one we score.
        assert_eq!(Category::from_stat_id(42), None);
        assert_eq!(Category::from_stat_id(u16::MAX), None);
    }

    #[test]
    fn display_labels_match_config_keys() {
        assert_eq!(Category::Points.to_string(), "PTS");
        assert_eq!(Category::FieldGoalPct.to_string(), "FG_PCT");
        assert_eq!(Category::Turnovers.to_string(), "TOV");
    }
}
