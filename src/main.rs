// Draft board entry point.
//
// Startup sequence:
// 1. Load config (auto-copying defaults on first run)
// 2. Initialize tracing (log to file, not the terminal the prompt owns)
// 3. Load player records (saved JSON file, or ESPN fetch)
// 4. Classify and score the pool
// 5. Run the draft tracking loop on stdin/stdout

use std::path::Path;

use draft_board::config;
use draft_board::draft;
use draft_board::espn;
use draft_board::evaluator;

use anyhow::Context;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load config
    let config = config::load_config().context("failed to load configuration")?;

    // 2. Initialize tracing (log file location comes from config)
    init_tracing(&config.logging.dir)?;
    info!("Draft board starting up");
    info!(
        "Config loaded: league={}, season {}, showing top {}",
        config.league.name, config.league.season, config.league.display_count
    );

    // 3. Load player records
    let records = match &config.source.players_file {
        Some(path) => {
            info!("Loading players from {}", path);
            espn::load_players_file(Path::new(path), config.league.season)
                .context("failed to load player file")?
        }
        None => {
            info!("Fetching players from ESPN for season {}", config.league.season);
            espn::fetch_players(&config.league)
                .await
                .context("failed to fetch players from ESPN")?
        }
    };
    info!("Loaded {} player records", records.len());

    // 4. Classify and score
    let mut pool = evaluator::rank_players(&records, &config.weights);
    info!("Ranked pool holds {} draftable players", pool.len());

    // 5. Run the draft loop (blocking until the pool empties or the
    // operator stops)
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let reason = draft::tracker::run(
        &mut pool,
        &mut stdin.lock(),
        &mut stdout.lock(),
        config.league.display_count,
    )
    .context("draft loop failed")?;

    match reason {
        draft::tracker::StopReason::Exhausted => info!("Draft complete: pool exhausted"),
        draft::tracker::StopReason::Quit => {
            info!("Draft ended by operator with {} players remaining", pool.len())
        }
        draft::tracker::StopReason::EndOfInput => {
            info!("Input closed with {} players remaining", pool.len())
        }
    }

    info!("Draft board shut down cleanly");
    Ok(())
}

/// Initialize tracing to log to a file (not the terminal, which is used by
/// the interactive draft prompt).
fn init_tracing(log_dir: &str) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let log_dir = std::env::current_dir()?.join(log_dir);
    std::fs::create_dir_all(&log_dir)?;

    let log_file = std::fs::File::create(log_dir.join("draft-board.log"))?;

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("draft_board=info,warn")),
        )
        .with_writer(log_file)
        .with_ansi(false)
        .with_target(true)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    Ok(())
}
