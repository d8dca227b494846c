use crate::reports;
use clap::Args;
use frameforge::config::CalculationOptionsPatch;
use frameforge::store::{CalculationStore, JsonFileKv};
use frameforge::FfResult;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct OptionsArgs {
    /// Settings file backing the key-value store.
    #[arg(long, default_value = "frameforge-settings.json")]
    pub store: PathBuf,

    #[command(flatten)]
    pub patch: CalculationOptionsPatch,
}

pub fn run(args: &OptionsArgs) -> FfResult<()> {
    let mut calculation = CalculationStore::new(JsonFileKv::new(&args.store));

    if !args.patch.is_empty() {
        calculation.set_options(&args.patch);
        info!("⚖️  Options saved to {}", args.store.display());
    }

    reports::print_options(calculation.options());
    Ok(())
}
