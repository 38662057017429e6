// Configuration loading and parsing (league.toml, weights.toml).

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::player::Category;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("failed to parse config file {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("validation error for field `{field}`: {message}")]
    ValidationError { field: String, message: String },

    #[error("failed to initialize config from defaults: {message}")]
    DefaultsCopyError { message: String },
}

// ---------------------------------------------------------------------------
// Top-level assembled Config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct Config {
    pub league: LeagueConfig,
    pub source: SourceConfig,
    pub logging: LoggingConfig,
    pub weights: CategoryWeights,
}

// ---------------------------------------------------------------------------
// league.toml structs
// ---------------------------------------------------------------------------

/// Raw deserialization target for the entire league.toml file.
#[derive(Debug, Clone, Deserialize)]
struct LeagueFile {
    league: LeagueConfig,
    #[serde(default)]
    source: SourceConfig,
    #[serde(default)]
    logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LeagueConfig {
    pub name: String,
    /// The projection season (e.g. 2024). Prior-season actuals are season - 1.
    pub season: u16,
    /// How many of the top-ranked remaining players to show per draft turn.
    pub display_count: usize,
    /// Row limit passed to the ESPN player endpoint.
    pub fetch_limit: usize,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct SourceConfig {
    /// When set, load the player payload from this JSON file instead of
    /// fetching from ESPN.
    #[serde(default)]
    pub players_file: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub dir: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig { dir: "logs".into() }
    }
}

// ---------------------------------------------------------------------------
// weights.toml structs
// ---------------------------------------------------------------------------

/// Wrapper for the top-level `[weights]` table in weights.toml.
#[derive(Debug, Clone, Deserialize)]
struct WeightsFile {
    weights: CategoryWeights,
}

/// Category multipliers for the rating equation. The field names use
/// UPPERCASE to match the TOML keys. Favorable categories take integers in
/// [1, 4]; turnovers are penalized and take integers in [-4, -1].
#[derive(Debug, Clone, Deserialize)]
#[allow(non_snake_case)]
pub struct CategoryWeights {
    pub PTS: i32,
    pub AST: i32,
    pub REB: i32,
    pub STL: i32,
    pub FG_PCT: i32,
    pub FG3M: i32,
    pub BLK: i32,
    pub FT_PCT: i32,
    pub TOV: i32,
}

impl CategoryWeights {
    /// The multiplier for a category, as an f64 ready for the equation.
    pub fn multiplier(&self, category: Category) -> f64 {
        let w = match category {
            Category::Points => self.PTS,
            Category::Assists => self.AST,
            Category::Rebounds => self.REB,
            Category::Steals => self.STL,
            Category::FieldGoalPct => self.FG_PCT,
            Category::ThreesMade => self.FG3M,
            Category::Blocks => self.BLK,
            Category::FreeThrowPct => self.FT_PCT,
            Category::Turnovers => self.TOV,
        };
        w as f64
    }
}

// ---------------------------------------------------------------------------
// Loading logic
// ---------------------------------------------------------------------------

/// Load and validate configuration from `config/league.toml` and
/// `config/weights.toml`, relative to the given `base_dir`.
///
/// This is the lower-level loading primitive that does not auto-copy
/// defaults. Prefer `load_config()` which handles default initialization.
pub(crate) fn load_config_from(base_dir: &Path) -> Result<Config, ConfigError> {
    let config_dir = base_dir.join("config");

    // --- league.toml (required) ---
    let league_path = config_dir.join("league.toml");
    let league_text = read_file(&league_path)?;
    let league_file: LeagueFile =
        toml::from_str(&league_text).map_err(|e| ConfigError::ParseError {
            path: league_path.clone(),
            source: e,
        })?;

    // --- weights.toml (required) ---
    let weights_path = config_dir.join("weights.toml");
    let weights_text = read_file(&weights_path)?;
    let weights_file: WeightsFile =
        toml::from_str(&weights_text).map_err(|e| ConfigError::ParseError {
            path: weights_path.clone(),
            source: e,
        })?;

    let config = Config {
        league: league_file.league,
        source: league_file.source,
        logging: league_file.logging,
        weights: weights_file.weights,
    };

    validate(&config)?;

    Ok(config)
}

/// Ensure all config files exist by copying missing ones from `defaults/`.
/// Returns the list of files that were copied. Skips `.example` files.
pub fn ensure_config_files(base_dir: &Path) -> Result<Vec<PathBuf>, ConfigError> {
    let defaults_dir = base_dir.join("defaults");
    let config_dir = base_dir.join("config");

    if !defaults_dir.exists() {
        if !config_dir.exists() {
            return Err(ConfigError::DefaultsCopyError {
                message: format!(
                    "neither defaults/ nor config/ directory found in {}; \
                     run from the project root or ensure defaults/ is present",
                    base_dir.display()
                ),
            });
        }
        return Ok(vec![]);
    }

    std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::DefaultsCopyError {
        message: format!("failed to create config directory: {e}"),
    })?;

    let mut copied = Vec::new();

    let entries = std::fs::read_dir(&defaults_dir).map_err(|e| ConfigError::DefaultsCopyError {
        message: format!("failed to read defaults directory: {e}"),
    })?;

    for entry in entries {
        let entry = entry.map_err(|e| ConfigError::DefaultsCopyError {
            message: format!("failed to read defaults entry: {e}"),
        })?;
        let path = entry.path();

        if !path.is_file() {
            continue;
        }
        let Some(file_name) = path.file_name() else {
            continue;
        };

        // Skip .example template files
        if file_name.to_str().is_some_and(|n| n.ends_with(".example")) {
            continue;
        }
        let target = config_dir.join(file_name);

        match std::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&target)
        {
            Ok(mut dest) => {
                let content = std::fs::read(&path).map_err(|e| ConfigError::DefaultsCopyError {
                    message: format!("failed to read {}: {e}", path.display()),
                })?;
                std::io::Write::write_all(&mut dest, &content).map_err(|e| {
                    ConfigError::DefaultsCopyError {
                        message: format!("failed to write {}: {e}", target.display()),
                    }
                })?;
                copied.push(target);
            }
            Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
                // File already exists in config/, skip it
            }
            Err(e) => {
                return Err(ConfigError::DefaultsCopyError {
                    message: format!("failed to create {}: {e}", target.display()),
                });
            }
        }
    }

    Ok(copied)
}

/// Convenience wrapper: loads config relative to the current working
/// directory. Ensures default config files are copied before loading.
pub fn load_config() -> Result<Config, ConfigError> {
    let cwd = std::env::current_dir().map_err(|_| ConfigError::FileNotFound {
        path: PathBuf::from("."),
    })?;
    ensure_config_files(&cwd)?;
    load_config_from(&cwd)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn read_file(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
        path: path.to_path_buf(),
    })
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn validate(config: &Config) -> Result<(), ConfigError> {
    // League validations
    if config.league.season == 0 {
        return Err(ConfigError::ValidationError {
            field: "league.season".into(),
            message: "must be a four-digit season year".into(),
        });
    }

    if config.league.display_count == 0 {
        return Err(ConfigError::ValidationError {
            field: "league.display_count".into(),
            message: "must be greater than 0".into(),
        });
    }

    if config.league.fetch_limit == 0 {
        return Err(ConfigError::ValidationError {
            field: "league.fetch_limit".into(),
            message: "must be greater than 0".into(),
        });
    }

    // Favorable category weights must be integers in [1, 4]
    let w = &config.weights;
    let favorable: &[(&str, i32)] = &[
        ("weights.PTS", w.PTS),
        ("weights.AST", w.AST),
        ("weights.REB", w.REB),
        ("weights.STL", w.STL),
        ("weights.FG_PCT", w.FG_PCT),
        ("weights.FG3M", w.FG3M),
        ("weights.BLK", w.BLK),
        ("weights.FT_PCT", w.FT_PCT),
    ];
    for (name, val) in favorable {
        if !(1..=4).contains(val) {
            return Err(ConfigError::ValidationError {
                field: name.to_string(),
                message: format!("must be between 1 and 4 inclusive, got {val}"),
            });
        }
    }

    // Turnovers are a penalty category: [-4, -1]
    if !(-4..=-1).contains(&w.TOV) {
        return Err(ConfigError::ValidationError {
            field: "weights.TOV".into(),
            message: format!("must be between -4 and -1 inclusive, got {}", w.TOV),
        });
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
