use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::error;

use household_budget::cli::{
    handle_config_command, handle_init_command, handle_project_command, handle_ratios_command,
    handle_split_command, handle_summary_command, ProjectCommands, RatiosArgs, SplitArgs,
    SummaryArgs,
};
use household_budget::config::{BudgetPaths, Settings};
use household_budget::log::init_logging;

#[derive(Parser)]
#[command(
    name = "household",
    version,
    about = "Shared household budget for two people",
    long_about = "Splits a two-person household's variable spending, fixed charges and \
                  savings provisions between its members, and works out what each \
                  member still has to put into the shared account."
)]
struct Cli {
    /// Print debug logs to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Monthly summary of a scenario file
    #[command(alias = "sum")]
    Summary(SummaryArgs),

    /// Split a single amount between the two members
    Split(SplitArgs),

    /// Savings, expense and debt ratios with a health score
    Ratios(RatiosArgs),

    /// What-if projections
    #[command(subcommand)]
    Project(ProjectCommands),

    /// Create the configuration directory and a starter scenario
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(err) = run(cli) {
        error!(error = %err, "command failed");
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let paths = BudgetPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Summary(args)) => handle_summary_command(&paths, &settings, args)?,
        Some(Commands::Split(args)) => handle_split_command(&settings, args)?,
        Some(Commands::Ratios(args)) => handle_ratios_command(&settings, args)?,
        Some(Commands::Project(cmd)) => handle_project_command(&settings, cmd)?,
        Some(Commands::Init) => handle_init_command(&paths, &settings)?,
        Some(Commands::Config) => handle_config_command(&paths, &settings)?,
        None => {
            println!("Household budget - shared expenses for two");
            println!();
            println!("Run 'household --help' for usage information.");
            println!("Run 'household init' to create a starter scenario.");
        }
    }

    Ok(())
}
