// Interactive draft tracking loop.
//
// Two phases: Active while the pool holds players, Done when it empties.
// Each turn prints the top remaining players, reads one drafted name, and
// removes it if present. The prompt read is the program's only pause; it
// blocks until the operator acts.

use std::io::{BufRead, Write};

use tracing::{debug, info};

use crate::draft::pool::{DraftPool, RemoveOutcome};

/// Operator command to end the loop before the pool is exhausted.
const QUIT_COMMAND: &str = "quit";

/// Why the tracking loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// Every player was drafted.
    Exhausted,
    /// The operator entered the quit command.
    Quit,
    /// Input closed (EOF) before the pool emptied.
    EndOfInput,
}

/// Run the draft loop over `pool`, reading drafted names from `input` and
/// writing the board to `output`.
///
/// Unknown or already-drafted names get an informational message and leave
/// the pool untouched. The loop ends when the pool is exhausted, the
/// operator quits, or input closes.
pub fn run<R: BufRead, W: Write>(
    pool: &mut DraftPool,
    input: &mut R,
    output: &mut W,
    display_count: usize,
) -> std::io::Result<StopReason> {
    let mut line = String::new();

    loop {
        if pool.is_empty() {
            writeln!(output)?;
            writeln!(output, "All players have been drafted.")?;
            return Ok(StopReason::Exhausted);
        }

        writeln!(output)?;
        writeln!(output, "Players to draft")?;
        for player in pool.top(display_count) {
            writeln!(output, "  {:<28} {:>8.1}", player.name, player.score)?;
        }
        writeln!(output)?;
        write!(output, "Which player has been drafted: ")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            info!("input closed with {} players remaining", pool.len());
            return Ok(StopReason::EndOfInput);
        }

        let name = line.trim();
        if name.is_empty() {
            continue;
        }
        if name.eq_ignore_ascii_case(QUIT_COMMAND) {
            info!("operator quit with {} players remaining", pool.len());
            return Ok(StopReason::Quit);
        }

        match pool.remove(name) {
            RemoveOutcome::Removed(score) => {
                debug!("removed '{}' (rating {:.1}) from pool", name, score);
                writeln!(output, "{name} has been drafted")?;
            }
            RemoveOutcome::NotFound => {
                writeln!(output, "{name} has already been removed")?;
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
