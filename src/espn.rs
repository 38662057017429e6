// ESPN player data loading and normalization.
//
// Reads the fantasy v3 `kona_player_info` payload, either fetched from the
// ESPN API or loaded from a saved JSON file. Each player entry carries a
// `stats` array of blocks keyed by seasonId/statSourceId; the blocks'
// `averageStats` maps (stringified stat-id -> value) become StatLines.

use serde::Deserialize;
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;
use tracing::warn;

use crate::config::LeagueConfig;
use crate::player::{Category, PlayerRecord, StatLine};

// ---------------------------------------------------------------------------
// Stat source
// ---------------------------------------------------------------------------

/// Which kind of stat block to read from a player entry.
///     - Actual (completed season):    statSourceId = 0
///     - Projected:                    statSourceId = 1
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatSource {
    Actual,
    Projected,
}

impl StatSource {
    /// ESPN statSourceId corresponding to this source.
    pub fn id(self) -> u8 {
        match self {
            StatSource::Actual => 0,
            StatSource::Projected => 1,
        }
    }
}

/// statSplitTypeId for full-season blocks (the only split carrying the
/// season-average stats we score).
const SPLIT_SEASON_TOTAL: u8 = 0;

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("failed to read file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("JSON error in {path}: {source}")]
    Json {
        path: String,
        source: serde_json::Error,
    },

    #[error("ESPN request failed: {0}")]
    Http(#[from] reqwest::Error),
}

// ---------------------------------------------------------------------------
// Raw JSON serde structs (private) — kona_player_info format
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct PlayerPage {
    #[serde(default)]
    players: Vec<PlayerEntry>,
}

#[derive(Debug, Deserialize)]
struct PlayerEntry {
    player: RawPlayer,
}

/// One player as ESPN sends it. The `stats` array is absent entirely for
/// players with neither history nor projections.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPlayer {
    full_name: String,
    #[serde(default)]
    stats: Option<Vec<RawStatBlock>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawStatBlock {
    season_id: u16,
    stat_source_id: u8,
    #[serde(default)]
    stat_split_type_id: u8,
    /// Stringified stat-id -> average value. Absent on some blocks.
    #[serde(default)]
    average_stats: Option<HashMap<String, f64>>,
}

// ---------------------------------------------------------------------------
// Conversion
// ---------------------------------------------------------------------------

/// Convert an ESPN averageStats map into a StatLine. Unknown stat ids and
/// non-finite values are silently skipped.
fn to_stat_line(name: &str, raw: &HashMap<String, f64>) -> StatLine {
    let mut line = StatLine::new();
    for (stat_id_str, &value) in raw {
        // ESPN stat keys are strings; convert to u16
        let Ok(stat_id) = stat_id_str.parse::<u16>() else {
            continue;
        };
        let Some(category) = Category::from_stat_id(stat_id) else {
            continue;
        };
        if !value.is_finite() {
            warn!(
                "skipping non-finite {} value for '{}'",
                category.display_str(),
                name
            );
            continue;
        }
        line.insert(category, value);
    }
    line
}

/// Select the season-average stats for a specific season and source.
fn select_average_stats(
    name: &str,
    blocks: &[RawStatBlock],
    season: u16,
    source: StatSource,
) -> Option<StatLine> {
    blocks
        .iter()
        .find(|b| {
            b.season_id == season
                && b.stat_source_id == source.id()
                && b.stat_split_type_id == SPLIT_SEASON_TOTAL
        })
        .and_then(|b| b.average_stats.as_ref())
        .map(|stats| to_stat_line(name, stats))
}

/// Convert a full payload into player records for the given projection
/// season. Prior-season actuals come from `season - 1`; a player missing one
/// or both blocks simply ends up with `None` for those maps.
fn convert_page(page: PlayerPage, season: u16) -> Vec<PlayerRecord> {
    let prior_season = season - 1;
    page.players
        .into_iter()
        .map(|entry| {
            let name = entry.player.full_name.trim().to_string();
            let (prior, projected) = match &entry.player.stats {
                Some(blocks) => (
                    select_average_stats(&name, blocks, prior_season, StatSource::Actual),
                    select_average_stats(&name, blocks, season, StatSource::Projected),
                ),
                None => (None, None),
            };
            PlayerRecord {
                name,
                prior,
                projected,
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Reader-based loader (private, enables testing without temp files)
// ---------------------------------------------------------------------------

fn load_players_from_reader<R: Read>(
    rdr: R,
    season: u16,
) -> Result<Vec<PlayerRecord>, serde_json::Error> {
    let page: PlayerPage = serde_json::from_reader(rdr)?;
    Ok(convert_page(page, season))
}

// ---------------------------------------------------------------------------
// Public loaders
// ---------------------------------------------------------------------------

/// Load player records from a saved kona_player_info JSON file.
pub fn load_players_file(path: &Path, season: u16) -> Result<Vec<PlayerRecord>, SourceError> {
    let file = std::fs::File::open(path).map_err(|e| SourceError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    let records =
        load_players_from_reader(std::io::BufReader::new(file), season).map_err(|e| {
            SourceError::Json {
                path: path.display().to_string(),
                source: e,
            }
        })?;
    if records.is_empty() {
        warn!("player file {} produced zero records", path.display());
    }
    Ok(records)
}

/// Fetch player records from the ESPN fantasy basketball API.
///
/// The x-fantasy-filter header asks for actuals from the prior season and
/// projections for the configured season; everything else about the request
/// is the endpoint's league-defaults view.
pub async fn fetch_players(league: &LeagueConfig) -> Result<Vec<PlayerRecord>, SourceError> {
    let url = format!(
        "https://lm-api-reads.fantasy.espn.com/apis/v3/games/fba/seasons/{}/segments/0/leaguedefaults/1?view=kona_player_info",
        league.season
    );

    let filter = serde_json::json!({
        "players": {
            "filterStatsForExternalIds": { "value": [league.season - 1, league.season] },
            "filterStatsForSourceIds": { "value": [0, 1] },
            "useFullProjectionTable": { "value": true },
            "limit": league.fetch_limit,
        }
    });

    let client = reqwest::Client::new();
    let page: PlayerPage = client
        .get(&url)
        .header("accept", "application/json")
        .header("x-fantasy-filter", filter.to_string())
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;

    let records = convert_page(page, league.season);
    if records.is_empty() {
        warn!("ESPN returned zero players for season {}", league.season);
    }
    Ok(records)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
