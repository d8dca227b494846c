use crate::config::FilterConfig;
use crate::pipeline::FlattenedResult;

/// True when the record satisfies every predicate in `cfg`.
pub fn passes(record: &FlattenedResult<'_>, cfg: &FilterConfig) -> bool {
    let punish = record.punish;
    let mv = &punish.punish_move;

    if cfg.guaranteed_only && !punish.is_guaranteed {
        return false;
    }
    if cfg.kill_moves_only && !mv.properties.is_kill_move {
        return false;
    }
    if !cfg.move_type.admits(mv.move_type) {
        return false;
    }

    // Inverted bounds admit nothing.
    punish.damage >= cfg.min_damage && punish.damage <= cfg.max_damage
}

/// Keeps the records that pass `cfg`, in their original order.
pub fn apply_filters<'a, I>(flattened: I, cfg: &FilterConfig) -> Vec<FlattenedResult<'a>>
where
    I: IntoIterator<Item = FlattenedResult<'a>>,
{
    flattened
        .into_iter()
        .filter(|record| passes(record, cfg))
        .collect()
}
