use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use std::process;
use tracing::{error, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Filter and rank a saved set of punish results.
    Rank(cmd::rank::RankArgs),
    /// Show or change the saved calculation options.
    Options(cmd::options::OptionsArgs),
}

fn main() {
    // Raw matches are kept so file-based filters can tell typed flags from defaults.
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let sub_matches = match matches.subcommand() {
        Some((_, sub)) => sub,
        None => {
            error!("No command given");
            process::exit(2);
        }
    };

    let outcome = match &cli.command {
        Commands::Rank(args) => cmd::rank::run(args, sub_matches),
        Commands::Options(args) => cmd::options::run(args),
    };

    if let Err(e) = outcome {
        error!("{}", e);
        process::exit(1);
    }
}
