use crate::error::{FfResult, FrameForgeError};
use crate::model::MoveType;
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use strum_macros::{Display, EnumIter, EnumString};
use tracing::debug;

/// Absent kill percents rank as if the option killed at this percent.
pub const KILL_PERCENT_SENTINEL: f64 = 999.0;

pub const DEFAULT_MAX_DAMAGE: f64 = 999.0;

// === SORTING ===

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, Display)]
#[strum(serialize_all = "camelCase", ascii_case_insensitive)]
pub enum SortOption {
    Name,
    Damage,
    Startup,
    Recovery,
    Total,
    KillPercent,
}

impl SortOption {
    /// Unknown option names rank by damage.
    pub fn from_str_lossy(s: &str) -> Self {
        Self::from_str(s.trim()).unwrap_or_else(|_| {
            debug!("Unknown sort option '{}', ranking by damage", s);
            Self::Damage
        })
    }
}

pub fn parse_sort_option(s: &str) -> Result<SortOption, Infallible> {
    Ok(SortOption::from_str_lossy(s))
}

impl Serialize for SortOption {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for SortOption {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::from_str_lossy(&raw))
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, Display, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

#[derive(Args, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SortConfig {
    #[arg(
        long = "sort",
        default_value_t = SortOption::Damage,
        value_parser = parse_sort_option
    )]
    pub option: SortOption,
    #[arg(long, default_value_t = SortDirection::Desc)]
    pub direction: SortDirection,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            option: SortOption::Damage,
            direction: SortDirection::Desc,
        }
    }
}

// === FILTERING ===

/// Either a single move type or every type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MoveTypeFilter {
    #[default]
    All,
    Only(MoveType),
}

impl MoveTypeFilter {
    pub fn admits(&self, move_type: MoveType) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => *wanted == move_type,
        }
    }
}

impl fmt::Display for MoveTypeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Only(t) => write!(f, "{}", t),
        }
    }
}

impl FromStr for MoveTypeFilter {
    type Err = strum::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        MoveType::from_str(s).map(Self::Only)
    }
}

impl Serialize for MoveTypeFilter {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for MoveTypeFilter {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::from_str(&raw)
            .map_err(|_| serde::de::Error::custom(format!("unknown move type '{}'", raw)))
    }
}

/// Predicate parameters for the filter stage. `min_damage > max_damage` is
/// accepted and simply admits nothing.
#[derive(Args, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FilterConfig {
    #[arg(long, default_value_t = false)]
    pub guaranteed_only: bool,
    #[arg(long, default_value_t = false)]
    pub kill_moves_only: bool,
    #[arg(long, default_value_t = MoveTypeFilter::All)]
    pub move_type: MoveTypeFilter,
    #[arg(long, default_value_t = 0.0)]
    pub min_damage: f64,
    #[arg(long, default_value_t = DEFAULT_MAX_DAMAGE)]
    pub max_damage: f64,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            guaranteed_only: false,
            kill_moves_only: false,
            move_type: MoveTypeFilter::All,
            min_damage: 0.0,
            max_damage: DEFAULT_MAX_DAMAGE,
        }
    }
}

impl FilterConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> FfResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            FrameForgeError::Config(format!(
                "Failed to read filter file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Copies every field the user typed on the command line over the
    /// values loaded from file. Defaults filled in by clap are ignored.
    pub fn merge_from_cli(&mut self, cli_filter: &FilterConfig, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($field:ident, $arg_name:expr) => {
                if matches.value_source($arg_name) == Some(ValueSource::CommandLine) {
                    self.$field = cli_filter.$field.clone();
                }
            };
        }

        update_if_present!(guaranteed_only, "guaranteed_only");
        update_if_present!(kill_moves_only, "kill_moves_only");
        update_if_present!(move_type, "move_type");
        update_if_present!(min_damage, "min_damage");
        update_if_present!(max_damage, "max_damage");
    }
}

// === CALCULATION ===

/// Parameters handed to the punish calculator. This is the only state that
/// is persisted between sessions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CalculationOptions {
    pub include_out_of_shield: bool,
    pub include_perfect_shield: bool,
    pub include_evasive: bool,
    pub minimum_damage: f64,
    pub stale_moves: bool,
}

impl Default for CalculationOptions {
    fn default() -> Self {
        Self {
            include_out_of_shield: true,
            include_perfect_shield: true,
            include_evasive: false,
            minimum_damage: 0.0,
            stale_moves: false,
        }
    }
}

/// A partial update of [`CalculationOptions`]; `None` leaves a field as is.
#[derive(Args, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CalculationOptionsPatch {
    #[arg(long)]
    pub include_out_of_shield: Option<bool>,
    #[arg(long)]
    pub include_perfect_shield: Option<bool>,
    #[arg(long)]
    pub include_evasive: Option<bool>,
    #[arg(long)]
    pub minimum_damage: Option<f64>,
    #[arg(long)]
    pub stale_moves: Option<bool>,
}

impl CalculationOptionsPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl CalculationOptions {
    pub fn merge(&mut self, patch: &CalculationOptionsPatch) {
        macro_rules! merge_if_some {
            ($field:ident) => {
                if let Some(value) = patch.$field {
                    self.$field = value;
                }
            };
        }

        merge_if_some!(include_out_of_shield);
        merge_if_some!(include_perfect_shield);
        merge_if_some!(include_evasive);
        merge_if_some!(minimum_damage);
        merge_if_some!(stale_moves);
    }
}
