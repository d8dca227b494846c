use criterion::{criterion_group, criterion_main, Criterion};
use frameforge::config::{FilterConfig, SortConfig, SortDirection, SortOption};
use frameforge::model::{
    Fighter, Move, MoveProperties, MoveType, PunishMethod, PunishMove, PunishResult,
};
use frameforge::pipeline::{derive_view, ViewCache};
use std::hint::black_box;
use std::sync::Arc;

const METHODS: [PunishMethod; 4] = [
    PunishMethod::Normal,
    PunishMethod::OosJump,
    PunishMethod::OosGrab,
    PunishMethod::PerfectShield,
];

// 80 defenders with 25 punishes each, roughly a full roster against one move
fn setup_results() -> Vec<PunishResult> {
    (0..80)
        .map(|f| PunishResult {
            defender: Fighter {
                id: format!("fighter{}", f),
                name: format!("Fighter {}", f),
            },
            punishing_moves: (0..25)
                .map(|m| {
                    let seed = (f * 31 + m * 17) % 97;
                    PunishMove {
                        punish_move: Move {
                            id: format!("move{}", m),
                            name: format!("Move {}", seed),
                            category: "ground".to_string(),
                            move_type: if m % 5 == 0 {
                                MoveType::Grab
                            } else {
                                MoveType::Normal
                            },
                            startup: 3 + (seed % 20) as u32,
                            recovery: 10 + (seed % 30) as u32,
                            properties: MoveProperties {
                                is_kill_move: seed % 4 == 0,
                            },
                        },
                        damage: (seed % 25) as f64 + 0.5,
                        method: METHODS[m % METHODS.len()],
                        is_guaranteed: seed % 3 != 0,
                        total_frames: 5 + (seed % 40) as u32,
                        kill_percent: (seed % 4 == 0).then(|| 60.0 + seed as f64),
                    }
                })
                .collect(),
        })
        .collect()
}

fn criterion_benchmark(c: &mut Criterion) {
    let results = Arc::new(setup_results());
    let filter = FilterConfig {
        guaranteed_only: true,
        min_damage: 4.0,
        ..Default::default()
    };
    let sort = SortConfig {
        option: SortOption::Name,
        direction: SortDirection::Asc,
    };

    c.bench_function("derive_view (2k punishes, name asc)", |b| {
        b.iter(|| derive_view(black_box(&results), black_box(&filter), black_box(&sort)).rows.len())
    });

    let mut cache = ViewCache::new();
    cache.view(&results, &filter, &sort);
    c.bench_function("cached view hit (2k punishes)", |b| {
        b.iter(|| cache.view(black_box(&results), black_box(&filter), black_box(&sort)).rows.len())
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
