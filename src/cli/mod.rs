//! CLI argument definitions and parsing.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::league::ids::PlayerId;
use crate::league::types::{Availability, LineupSide};

/// Common arguments for commands that update a match document.
#[derive(Debug, Args)]
pub struct MatchFileArgs {
    /// Path to the match document (JSON).
    #[clap(long = "match", short, value_name = "FILE")]
    pub match_file: PathBuf,

    /// Save the updated document in place instead of printing it.
    #[clap(long)]
    pub write: bool,
}

#[derive(Debug, Parser)]
#[clap(name = "rackscore", about = "Pool league match scoring CLI")]
pub struct Rackscore {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Validate recorded games and recompute every player-match and
    /// team-match score.
    ///
    /// Scoring flags are read from the environment (see
    /// `DISABLE_GAMESWON_FALLBACK` and `ENABLE_BONUS_POINTS`).
    Recompute {
        #[clap(flatten)]
        file: MatchFileArgs,

        /// Report per-pairing aggregates on stderr while recomputing.
        #[clap(long)]
        verbose: bool,
    },

    /// Recompute scores, then mark the match completed.
    Finalize {
        #[clap(flatten)]
        file: MatchFileArgs,
    },

    /// Print the scoring summary for a match.
    Summary {
        /// Path to the match document (JSON).
        #[clap(long = "match", short, value_name = "FILE")]
        match_file: PathBuf,

        /// Print raw JSON instead of the table.
        #[clap(long)]
        json: bool,
    },

    /// Lineup plan operations: validation, totals, locking, availability.
    Lineup {
        #[clap(subcommand)]
        cmd: LineupCmd,
    },
}

#[derive(Debug, Subcommand)]
pub enum LineupCmd {
    /// Validate the embedded lineup plan against both rosters and record
    /// the submission.
    Validate {
        #[clap(flatten)]
        file: MatchFileArgs,

        /// Path to the home team's active roster (JSON).
        #[clap(long, value_name = "FILE")]
        home_roster: PathBuf,

        /// Path to the away team's active roster (JSON).
        #[clap(long, value_name = "FILE")]
        away_roster: PathBuf,

        /// Acting user recorded in the lineup history.
        #[clap(long)]
        by: String,
    },

    /// Print recomputed skill totals and cap compliance.
    Totals {
        /// Path to the match document (JSON).
        #[clap(long = "match", short, value_name = "FILE")]
        match_file: PathBuf,
    },

    /// Lock the lineup plan against further changes.
    Lock {
        #[clap(flatten)]
        file: MatchFileArgs,

        /// Acting user recorded as the locker.
        #[clap(long)]
        by: String,
    },

    /// Mark a lineup player available or unavailable.
    Availability {
        #[clap(flatten)]
        file: MatchFileArgs,

        /// Which side of the lineup the player is on: home | away.
        #[clap(long)]
        side: LineupSide,

        /// The player to update.
        #[clap(long)]
        player: PlayerId,

        /// New availability: available | unavailable.
        #[clap(long)]
        availability: Availability,

        /// Acting user recorded in the lineup history.
        #[clap(long)]
        by: String,
    },

    /// Apply a changed skill level wherever the player appears in the plan.
    Skill {
        #[clap(flatten)]
        file: MatchFileArgs,

        /// The player whose skill level changed.
        #[clap(long)]
        player: PlayerId,

        /// The new skill level.
        #[clap(long)]
        skill: i32,

        /// Acting user recorded in the lineup history.
        #[clap(long)]
        by: String,
    },
}
