#![allow(dead_code)] // Not every test binary uses every helper

use frameforge::api::PunishCalculator;
use frameforge::config::CalculationOptions;
use frameforge::model::{
    Fighter, Move, MoveProperties, MoveType, PunishMethod, PunishMove, PunishResult,
};
use frameforge::pipeline::FlattenedResult;
use frameforge::store::Selection;
use frameforge::{FfResult, FrameForgeError};
use std::cell::Cell;

/// Builder for PunishMove to keep fixtures short
pub struct PunishBuilder {
    punish: PunishMove,
}

impl PunishBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            punish: PunishMove {
                punish_move: Move {
                    id: id.to_string(),
                    name: id.to_string(),
                    category: "ground".to_string(),
                    move_type: MoveType::Normal,
                    startup: 5,
                    recovery: 10,
                    properties: MoveProperties::default(),
                },
                damage: 10.0,
                method: PunishMethod::Normal,
                is_guaranteed: true,
                total_frames: 15,
                kill_percent: None,
            },
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.punish.punish_move.name = name.to_string();
        self
    }

    pub fn damage(mut self, damage: f64) -> Self {
        self.punish.damage = damage;
        self
    }

    pub fn method(mut self, method: PunishMethod) -> Self {
        self.punish.method = method;
        self
    }

    pub fn guaranteed(mut self, is_guaranteed: bool) -> Self {
        self.punish.is_guaranteed = is_guaranteed;
        self
    }

    pub fn kill_move(mut self, is_kill_move: bool) -> Self {
        self.punish.punish_move.properties.is_kill_move = is_kill_move;
        self
    }

    pub fn move_type(mut self, move_type: MoveType) -> Self {
        self.punish.punish_move.move_type = move_type;
        self
    }

    pub fn frames(mut self, startup: u32, recovery: u32, total: u32) -> Self {
        self.punish.punish_move.startup = startup;
        self.punish.punish_move.recovery = recovery;
        self.punish.total_frames = total;
        self
    }

    pub fn kill_percent(mut self, kill_percent: Option<f64>) -> Self {
        self.punish.kill_percent = kill_percent;
        self
    }

    pub fn build(self) -> PunishMove {
        self.punish
    }
}

pub fn fighter(id: &str) -> Fighter {
    Fighter {
        id: id.to_string(),
        name: id.to_uppercase(),
    }
}

pub fn result(defender: &str, moves: Vec<PunishMove>) -> PunishResult {
    PunishResult {
        defender: fighter(defender),
        punishing_moves: moves,
    }
}

pub fn damages(rows: &[FlattenedResult<'_>]) -> Vec<f64> {
    rows.iter().map(|r| r.punish.damage).collect()
}

pub fn keys(rows: &[FlattenedResult<'_>]) -> Vec<String> {
    rows.iter().map(|r| r.key.clone()).collect()
}

/// The two-defender set used by the end-to-end scenario.
pub fn scenario_results() -> Vec<PunishResult> {
    vec![
        result(
            "mario",
            vec![
                PunishBuilder::new("fair").damage(12.0).build(),
                PunishBuilder::new("jab").damage(8.0).build(),
            ],
        ),
        result(
            "fox",
            vec![
                PunishBuilder::new("usmash").damage(20.0).build(),
                PunishBuilder::new("nair").damage(5.0).build(),
            ],
        ),
    ]
}

/// Returns a canned outcome and counts calls.
pub struct FixedCalculator {
    outcome: Result<Vec<PunishResult>, String>,
    calls: Cell<usize>,
}

impl FixedCalculator {
    pub fn ok(results: Vec<PunishResult>) -> Self {
        Self {
            outcome: Ok(results),
            calls: Cell::new(0),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            outcome: Err(message.to_string()),
            calls: Cell::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl PunishCalculator for FixedCalculator {
    fn calculate(
        &self,
        _options: &CalculationOptions,
        _selection: &Selection,
    ) -> FfResult<Vec<PunishResult>> {
        self.calls.set(self.calls.get() + 1);
        match &self.outcome {
            Ok(results) => Ok(results.clone()),
            Err(msg) => Err(FrameForgeError::Calculation(msg.clone())),
        }
    }
}

fn is_out_of_shield(method: PunishMethod) -> bool {
    matches!(
        method,
        PunishMethod::OutOfShield
            | PunishMethod::OosJump
            | PunishMethod::OosUpSpecial
            | PunishMethod::OosGrab
    )
}

fn is_evasive(method: PunishMethod) -> bool {
    matches!(method, PunishMethod::SpotDodge | PunishMethod::Roll)
}

/// Serves a fixed punish table, trimmed by the calculation options the way
/// a real calculator would honour them.
pub struct TableCalculator {
    pub table: Vec<PunishResult>,
}

impl PunishCalculator for TableCalculator {
    fn calculate(
        &self,
        options: &CalculationOptions,
        selection: &Selection,
    ) -> FfResult<Vec<PunishResult>> {
        let defenders = self
            .table
            .iter()
            .filter(|r| match &selection.defender {
                Some(d) => d.id == r.defender.id,
                None => true,
            })
            .map(|r| PunishResult {
                defender: r.defender.clone(),
                punishing_moves: r
                    .punishing_moves
                    .iter()
                    .filter(|p| options.include_out_of_shield || !is_out_of_shield(p.method))
                    .filter(|p| options.include_evasive || !is_evasive(p.method))
                    .filter(|p| {
                        options.include_perfect_shield || p.method != PunishMethod::PerfectShield
                    })
                    .filter(|p| p.damage >= options.minimum_damage)
                    .cloned()
                    .collect(),
            })
            .collect();
        Ok(defenders)
    }
}
