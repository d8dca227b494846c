use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use frameforge::config::{CalculationOptions, SortConfig, SortDirection, SortOption};
use frameforge::pipeline::{FlattenedResult, ResultView};
use frameforge::FfResult;
use serde::Serialize;
use std::path::Path;

const COLUMNS: [(&str, Option<SortOption>); 11] = [
    ("#", None),
    ("Defender", None),
    ("Move", Some(SortOption::Name)),
    ("Type", None),
    ("Method", None),
    ("Damage", Some(SortOption::Damage)),
    ("Startup", Some(SortOption::Startup)),
    ("Recovery", Some(SortOption::Recovery)),
    ("Total", Some(SortOption::Total)),
    ("Kill %", Some(SortOption::KillPercent)),
    ("Safe", None),
];

fn header_cell(label: &str, column: Option<SortOption>, sort: &SortConfig) -> Cell {
    match column {
        Some(option) if option == sort.option => {
            let arrow = match sort.direction {
                SortDirection::Asc => "▲",
                SortDirection::Desc => "▼",
            };
            Cell::new(format!("{} {}", label, arrow))
                .add_attribute(Attribute::Bold)
                .fg(Color::Cyan)
        }
        _ => Cell::new(label).add_attribute(Attribute::Bold),
    }
}

fn format_kill_percent(kill_percent: Option<f64>) -> String {
    match kill_percent {
        Some(p) => format!("{:.0}%", p),
        None => "-".to_string(),
    }
}

pub fn print_ranked_table(view: &ResultView<'_>, sort: &SortConfig, limit: Option<usize>) {
    println!(
        "\nShowing {} of {} punishes (sorted by {} {})",
        view.filtered_count, view.total_count, sort.option, sort.direction
    );

    if view.is_empty() {
        println!("No punishes match the current filters.");
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(
        COLUMNS
            .iter()
            .map(|(label, column)| header_cell(label, *column, sort))
            .collect::<Vec<_>>(),
    );

    for i in [0, 5, 6, 7, 8, 9] {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    let shown = limit.unwrap_or(view.rows.len());
    for (rank, row) in view.rows.iter().take(shown).enumerate() {
        let punish = row.punish;
        let mv = &punish.punish_move;

        let name_cell = if mv.properties.is_kill_move {
            Cell::new(&mv.name).fg(Color::Red)
        } else {
            Cell::new(&mv.name)
        };
        let safe_cell = if punish.is_guaranteed {
            Cell::new("yes").fg(Color::Green)
        } else {
            Cell::new("no")
        };

        table.add_row(vec![
            Cell::new(rank + 1),
            Cell::new(&row.result.defender.name),
            name_cell,
            Cell::new(mv.move_type),
            Cell::new(punish.method),
            Cell::new(format!("{:.1}", punish.damage)),
            Cell::new(mv.startup),
            Cell::new(mv.recovery),
            Cell::new(punish.total_frames),
            Cell::new(format_kill_percent(punish.kill_percent)),
            safe_cell,
        ]);
    }
    println!("{}", table);

    if shown < view.rows.len() {
        println!("... {} more not shown", view.rows.len() - shown);
    }
}

#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    rank: usize,
    key: &'a str,
    defender: &'a str,
    #[serde(rename = "move")]
    move_name: &'a str,
    move_type: String,
    method: String,
    damage: f64,
    startup: u32,
    recovery: u32,
    total_frames: u32,
    kill_percent: Option<f64>,
    guaranteed: bool,
}

impl<'a> CsvRow<'a> {
    fn from_record(rank: usize, row: &'a FlattenedResult<'_>) -> Self {
        let punish = row.punish;
        Self {
            rank,
            key: &row.key,
            defender: &row.result.defender.name,
            move_name: &punish.punish_move.name,
            move_type: punish.punish_move.move_type.to_string(),
            method: punish.method.to_string(),
            damage: punish.damage,
            startup: punish.punish_move.startup,
            recovery: punish.punish_move.recovery,
            total_frames: punish.total_frames,
            kill_percent: punish.kill_percent,
            guaranteed: punish.is_guaranteed,
        }
    }
}

pub fn write_csv<P: AsRef<Path>>(path: P, view: &ResultView<'_>) -> FfResult<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for (i, row) in view.rows.iter().enumerate() {
        writer.serialize(CsvRow::from_record(i + 1, row))?;
    }
    writer.flush()?;
    Ok(())
}

pub fn print_options(options: &CalculationOptions) {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);
    table.set_header(vec![
        Cell::new("Option").add_attribute(Attribute::Bold),
        Cell::new("Value").add_attribute(Attribute::Bold),
    ]);

    table.add_row(vec![
        Cell::new("include-out-of-shield"),
        Cell::new(options.include_out_of_shield),
    ]);
    table.add_row(vec![
        Cell::new("include-perfect-shield"),
        Cell::new(options.include_perfect_shield),
    ]);
    table.add_row(vec![
        Cell::new("include-evasive"),
        Cell::new(options.include_evasive),
    ]);
    table.add_row(vec![
        Cell::new("minimum-damage"),
        Cell::new(format!("{:.1}", options.minimum_damage)),
    ]);
    table.add_row(vec![
        Cell::new("stale-moves"),
        Cell::new(options.stale_moves),
    ]);

    println!("{}", table);
}
