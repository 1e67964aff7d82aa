//! ID types for league documents.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for division IDs.
///
/// League documents reference each other by opaque string IDs; wrapping
/// them prevents mixing up a division ID with, say, a team ID when both
/// are plain strings on the wire.
///
/// # Examples
///
/// ```rust
/// use rackscore::DivisionId;
///
/// let division_id = DivisionId::new("DIV123");
/// assert_eq!(division_id.as_str(), "DIV123");
/// assert_eq!(division_id.to_string(), "DIV123");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DivisionId(pub String);

/// Type-safe wrapper for team IDs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TeamId(pub String);

/// Type-safe wrapper for player IDs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub String);

/// Type-safe wrapper for team-match IDs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MatchId(pub String);

/// Type-safe wrapper for player-match IDs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerMatchId(pub String);

/// Type-safe wrapper for game (rack) IDs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GameId(pub String);

macro_rules! string_id_impls {
    ($($id:ident),+ $(,)?) => {
        $(
            impl $id {
                /// Create a new ID from any string-like value.
                pub fn new(id: impl Into<String>) -> Self {
                    Self(id.into())
                }

                /// Get the underlying string value.
                pub fn as_str(&self) -> &str {
                    &self.0
                }
            }

            impl fmt::Display for $id {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    write!(f, "{}", self.0)
                }
            }

            impl From<&str> for $id {
                fn from(id: &str) -> Self {
                    Self(id.to_string())
                }
            }

            impl From<String> for $id {
                fn from(id: String) -> Self {
                    Self(id)
                }
            }

            impl FromStr for $id {
                type Err = Infallible;

                fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                    Ok(Self(s.to_string()))
                }
            }
        )+
    };
}

string_id_impls!(DivisionId, TeamId, PlayerId, MatchId, PlayerMatchId, GameId);
