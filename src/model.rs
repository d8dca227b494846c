use crate::error::FfResult;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use strum_macros::{Display, EnumIter, EnumString};

/// Broad classification of an in-game action.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, Display, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum MoveType {
    Normal,
    Special,
    Grab,
    Throw,
}

/// How a punishing option is executed after the incoming move connects
/// with the defender's shield (or is avoided).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, Display, Serialize, Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum PunishMethod {
    Normal,
    OutOfShield,
    OosJump,
    OosUpSpecial,
    OosGrab,
    PerfectShield,
    SpotDodge,
    Roll,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveProperties {
    #[serde(default)]
    pub is_kill_move: bool,
}

/// Static frame-data descriptor of a move. Loaded externally, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Move {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(rename = "type")]
    pub move_type: MoveType,
    pub startup: u32,
    pub recovery: u32,
    #[serde(default)]
    pub properties: MoveProperties,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fighter {
    pub id: String,
    pub name: String,
}

/// One candidate punish against a specific incoming move.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PunishMove {
    #[serde(rename = "move")]
    pub punish_move: Move,
    pub damage: f64,
    pub method: PunishMethod,
    pub is_guaranteed: bool,
    pub total_frames: u32,
    /// Percent at which this option takes a stock. `None` means never under
    /// the current calculation options.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kill_percent: Option<f64>,
}

/// Every punish computed for one defender against the attacking move.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PunishResult {
    pub defender: Fighter,
    pub punishing_moves: Vec<PunishMove>,
}

impl PunishResult {
    pub fn load_all_from_file<P: AsRef<Path>>(path: P) -> FfResult<Vec<PunishResult>> {
        let content = fs::read_to_string(path)?;
        let results = serde_json::from_str(&content)?;
        Ok(results)
    }
}
