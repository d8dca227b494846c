use crate::model::{PunishMove, PunishResult};

/// One (defender, punish) pair lifted out of its result group.
#[derive(Debug, Clone, PartialEq)]
pub struct FlattenedResult<'a> {
    pub result: &'a PunishResult,
    pub punish: &'a PunishMove,
    /// `{defender}-{move}-{method}`; unique as long as the calculator never
    /// emits the same triple twice.
    pub key: String,
    pub(crate) origin: (usize, usize),
}

impl<'a> FlattenedResult<'a> {
    pub(crate) fn new(result: &'a PunishResult, result_idx: usize, move_idx: usize) -> Self {
        let punish = &result.punishing_moves[move_idx];
        Self {
            result,
            punish,
            key: record_key(result, punish),
            origin: (result_idx, move_idx),
        }
    }
}

fn record_key(result: &PunishResult, punish: &PunishMove) -> String {
    format!(
        "{}-{}-{}",
        result.defender.id, punish.punish_move.id, punish.method
    )
}

/// Expands result groups into one record per punish, keeping group order
/// and the order of moves inside each group.
pub fn flatten(results: &[PunishResult]) -> Vec<FlattenedResult<'_>> {
    let total: usize = results.iter().map(|r| r.punishing_moves.len()).sum();
    let mut flat = Vec::with_capacity(total);

    for (result_idx, result) in results.iter().enumerate() {
        for move_idx in 0..result.punishing_moves.len() {
            flat.push(FlattenedResult::new(result, result_idx, move_idx));
        }
    }

    flat
}
