//! Running score and its stored representation

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::choice::Outcome;

/// Cumulative tally, persisted across sessions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRecord {
    pub player_score: u32,
    pub opponent_score: u32,
}

impl ScoreRecord {
    pub fn new(player_score: u32, opponent_score: u32) -> Self {
        Self {
            player_score,
            opponent_score,
        }
    }

    /// Decode a stored payload, falling back to `{0, 0}` when it is unusable.
    ///
    /// Both fields must be non-negative integers in `u32` range (a string
    /// holding one is accepted). A missing, negative, fractional or
    /// non-numeric field zeroes the whole record.
    pub fn from_json_lossy(json: &str) -> Self {
        let map = match serde_json::from_str::<Value>(json) {
            Ok(Value::Object(map)) => map,
            Ok(_) | Err(_) => {
                log::warn!("Stored score is not an object, resetting to 0-0");
                return Self::default();
            }
        };
        match (
            parse_score(map.get("playerScore")),
            parse_score(map.get("opponentScore")),
        ) {
            (Some(player_score), Some(opponent_score)) => Self {
                player_score,
                opponent_score,
            },
            _ => {
                log::warn!("Malformed stored score {:?}, resetting to 0-0", map);
                Self::default()
            }
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

fn parse_score(value: Option<&Value>) -> Option<u32> {
    match value? {
        Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        Value::String(s) => s.trim().parse::<u32>().ok(),
        _ => None,
    }
}

/// Return the record after one round
pub fn apply_outcome(score: ScoreRecord, outcome: Outcome) -> ScoreRecord {
    match outcome {
        Outcome::Win => ScoreRecord {
            player_score: score.player_score.saturating_add(1),
            ..score
        },
        Outcome::Lose => ScoreRecord {
            opponent_score: score.opponent_score.saturating_add(1),
            ..score
        },
        Outcome::Tie => score,
    }
}
