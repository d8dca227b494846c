use crate::reports;
use clap::{ArgMatches, Args};
use frameforge::api::Session;
use frameforge::config::{parse_sort_option, FilterConfig, SortConfig, SortOption};
use frameforge::model::PunishResult;
use frameforge::store::{CalculationStore, ViewConfigStore};
use frameforge::FfResult;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct RankArgs {
    /// JSON array of punish results, as produced by the calculator.
    #[arg(short, long)]
    pub results: PathBuf,

    /// JSON filter preset; flags typed on the command line win over it.
    #[arg(long)]
    pub filters: Option<PathBuf>,

    #[command(flatten)]
    pub filter: FilterConfig,

    #[command(flatten)]
    pub sort: SortConfig,

    /// Column clicks applied in order after --sort/--direction.
    #[arg(long, value_parser = parse_sort_option)]
    pub toggle: Vec<SortOption>,

    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Also write the ranked rows to this CSV file.
    #[arg(long)]
    pub export: Option<PathBuf>,
}

pub fn run(args: &RankArgs, matches: &ArgMatches) -> FfResult<()> {
    info!("📂 Loading results: {}", args.results.display());
    let results = PunishResult::load_all_from_file(&args.results)?;

    let filter = match &args.filters {
        Some(path) => {
            info!("🔎 Loading filter preset: {}", path.display());
            let mut preset = FilterConfig::load_from_file(path)?;
            preset.merge_from_cli(&args.filter, matches);
            preset
        }
        None => args.filter.clone(),
    };

    let mut view_config = ViewConfigStore::new(args.sort, filter);
    for &option in &args.toggle {
        view_config.toggle_sort(option);
    }

    let mut calculation = CalculationStore::in_memory();
    calculation.set_results(results);

    let mut session = Session::new(calculation, view_config);
    let sort = *session.view_config().sort();
    let view = session.view();

    reports::print_ranked_table(&view, &sort, args.limit);

    if let Some(path) = &args.export {
        reports::write_csv(path, &view)?;
        info!("💾 Exported {} rows to {}", view.rows.len(), path.display());
    }

    Ok(())
}
