//! Common utilities and helper functions shared across commands.
//!
//! This module contains shared functionality that would otherwise be duplicated
//! across different command implementations.

use std::fs;
use std::path::Path;

use crate::league::types::{MatchDocument, Roster};
use crate::Result;

#[cfg(test)]
mod tests;

/// Read a match document from a JSON file.
pub fn load_match_document(path: &Path) -> Result<MatchDocument> {
    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

/// Read an active-roster document from a JSON file.
pub fn load_roster(path: &Path) -> Result<Roster> {
    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

/// Write a match document back to disk as pretty JSON.
pub fn write_match_document(path: &Path, doc: &MatchDocument) -> Result<()> {
    let mut contents = serde_json::to_string_pretty(doc)?;
    contents.push('\n');
    fs::write(path, contents)?;
    Ok(())
}

/// Save the updated document in place, or print it to stdout.
pub fn emit_match_document(path: &Path, doc: &MatchDocument, write: bool) -> Result<()> {
    if write {
        write_match_document(path, doc)?;
        eprintln!("Updated: {}", path.display());
    } else {
        println!("{}", serde_json::to_string_pretty(doc)?);
    }
    Ok(())
}
