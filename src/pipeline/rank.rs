use crate::config::{SortConfig, SortDirection, SortOption, KILL_PERCENT_SENTINEL};
use crate::pipeline::FlattenedResult;
use icu_collator::options::{CollatorOptions, Strength};
use icu_collator::{Collator, CollatorBorrowed};
use std::cmp::Ordering;
use std::sync::LazyLock;
use tracing::warn;

// Root locale, tertiary strength: accents and kana order like a locale
// collator and lowercase sorts before uppercase.
static COLLATOR: LazyLock<Option<CollatorBorrowed<'static>>> = LazyLock::new(|| {
    let mut options = CollatorOptions::default();
    options.strength = Some(Strength::Tertiary);
    match Collator::try_new(Default::default(), options) {
        Ok(collator) => Some(collator),
        Err(e) => {
            warn!("Collation data unavailable, names compare by case-folded text: {}", e);
            None
        }
    }
});

/// The value a record is ordered by under one sort option.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SortValue<'a> {
    Text(&'a str),
    Number(f64),
}

pub fn project<'a>(record: &FlattenedResult<'a>, option: SortOption) -> SortValue<'a> {
    let punish = record.punish;
    match option {
        SortOption::Name => SortValue::Text(&punish.punish_move.name),
        SortOption::Damage => SortValue::Number(punish.damage),
        SortOption::Startup => SortValue::Number(punish.punish_move.startup as f64),
        SortOption::Recovery => SortValue::Number(punish.punish_move.recovery as f64),
        SortOption::Total => SortValue::Number(punish.total_frames as f64),
        SortOption::KillPercent => {
            SortValue::Number(punish.kill_percent.unwrap_or(KILL_PERCENT_SENTINEL))
        }
    }
}

/// Locale order for move names. Names the collator cannot tell apart fall
/// back to code points, lowercase first.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    let collated = match COLLATOR.as_ref() {
        Some(collator) => collator.compare(a, b),
        None => a
            .chars()
            .flat_map(char::to_lowercase)
            .cmp(b.chars().flat_map(char::to_lowercase)),
    };

    collated.then_with(|| b.cmp(a))
}

pub fn compare_values(a: SortValue<'_>, b: SortValue<'_>) -> Ordering {
    match (a, b) {
        // NaN sorts after every number and ties with itself; -0.0 == 0.0.
        (SortValue::Number(x), SortValue::Number(y)) => x
            .partial_cmp(&y)
            .unwrap_or_else(|| x.is_nan().cmp(&y.is_nan())),
        (SortValue::Text(x), SortValue::Text(y)) => compare_names(x, y),
        // A single option always projects to one kind.
        _ => Ordering::Equal,
    }
}

/// Reorders `filtered` by the active sort key. The sort is stable in both
/// directions: ties keep the order they arrived in.
pub fn rank<'a>(
    mut filtered: Vec<FlattenedResult<'a>>,
    cfg: &SortConfig,
) -> Vec<FlattenedResult<'a>> {
    let option = cfg.option;
    let direction = cfg.direction;

    filtered.sort_by(|a, b| {
        let ord = compare_values(project(a, option), project(b, option));
        match direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    });

    filtered
}

/// Reselecting the active option flips its direction; picking another
/// option starts it ascending.
pub fn toggle_sort(current: SortConfig, option: SortOption) -> SortConfig {
    if current.option == option {
        SortConfig {
            option,
            direction: current.direction.flipped(),
        }
    } else {
        SortConfig {
            option,
            direction: SortDirection::Asc,
        }
    }
}
