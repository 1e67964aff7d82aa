//! Feature flags that alter recomputation behavior.
//!
//! Flags are plain data threaded into the scoring functions as a parameter
//! so the functions stay pure and testable. `from_env` exists for binaries
//! that configure the process through the environment.

use std::env;

/// Set to `true` to disable the games-won fallback for team scores.
pub const DISABLE_GAMESWON_FALLBACK_ENV_VAR: &str = "DISABLE_GAMESWON_FALLBACK";

/// Set to `true` to enable the bonus-point adjustment step.
pub const ENABLE_BONUS_POINTS_ENV_VAR: &str = "ENABLE_BONUS_POINTS";

/// Toggles consumed by team-match recomputation.
///
/// The default keeps the games-won fallback enabled and bonus points
/// disabled, matching a league that has not opted into either behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FeatureFlags {
    /// When set, a team match with no recorded points stays 0-0 instead of
    /// falling back to games won.
    pub disable_games_won_fallback: bool,
    /// When set, the bonus adjuster's output is recorded on the team match.
    pub enable_bonus_points: bool,
}

impl FeatureFlags {
    /// Read flags from the process environment, keeping defaults for
    /// variables that are unset, empty, or unparseable.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            disable_games_won_fallback: get_bool_env(
                DISABLE_GAMESWON_FALLBACK_ENV_VAR,
                defaults.disable_games_won_fallback,
            ),
            enable_bonus_points: get_bool_env(
                ENABLE_BONUS_POINTS_ENV_VAR,
                defaults.enable_bonus_points,
            ),
        }
    }
}

fn get_bool_env(name: &str, default: bool) -> bool {
    match env::var(name) {
        Ok(value) if !value.is_empty() => value.parse().unwrap_or(default),
        _ => default,
    }
}
