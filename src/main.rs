//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use rackscore::{
    cli::{Commands, LineupCmd, Rackscore},
    commands::{
        lineup::{handle_availability, handle_lock, handle_skill, handle_totals, handle_validate},
        recompute::{handle_finalize, handle_recompute},
        summary::handle_summary,
    },
    Result,
};

/// Run the CLI.
fn main() -> Result<()> {
    let app = Rackscore::parse();

    match app.command {
        Commands::Recompute { file, verbose } => {
            handle_recompute(&file.match_file, file.write, verbose)?
        }

        Commands::Finalize { file } => handle_finalize(&file.match_file, file.write)?,

        Commands::Summary { match_file, json } => handle_summary(&match_file, json)?,

        Commands::Lineup { cmd } => match cmd {
            LineupCmd::Validate {
                file,
                home_roster,
                away_roster,
                by,
            } => handle_validate(&file.match_file, &home_roster, &away_roster, &by, file.write)?,

            LineupCmd::Totals { match_file } => handle_totals(&match_file)?,

            LineupCmd::Lock { file, by } => handle_lock(&file.match_file, &by, file.write)?,

            LineupCmd::Availability {
                file,
                side,
                player,
                availability,
                by,
            } => handle_availability(
                &file.match_file,
                side,
                &player,
                availability,
                &by,
                file.write,
            )?,

            LineupCmd::Skill {
                file,
                player,
                skill,
                by,
            } => handle_skill(&file.match_file, &player, skill, &by, file.write)?,
        },
    }

    Ok(())
}
