use anyhow::Result;
use clap::{Args, CommandFactory, Parser, Subcommand};
use fleetcheck::commands::{plan, status, Overrides};
use clap_complete::Shell;
use fleetcheck::completions::generate_completions;
use fleetcheck::logging::init_logging;
use fleetcheck::models::status::ResourceTypeId;
use fleetcheck::validation::clap_resource_type_validator;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fleetcheck")]
#[command(about = "Decide which instance types still need a live verification run", long_about = None)]
#[command(version)]
struct Cli {
    /// Config file (default: $FLEETCHECK_CONFIG, ./fleetcheck.toml, or the user config dir)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct SelectionArgs {
    /// Instance types to consider (comma-separated); replaces the configured list
    #[arg(short, long, value_delimiter = ',', value_parser = clap_resource_type_validator)]
    types: Vec<String>,

    /// Status store snapshot (.json or .toml)
    #[arg(short, long, value_name = "FILE")]
    store: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show which instance types are confirmed and which need verification
    Plan {
        #[command(flatten)]
        selection: SelectionArgs,

        /// Also re-verify types whose earlier attempt was inconclusive
        #[arg(short, long)]
        retry: bool,

        /// Print the plan as JSON
        #[arg(long)]
        json: bool,
    },

    /// List recorded verification statuses
    Status {
        #[command(flatten)]
        selection: SelectionArgs,
    },

    /// Generate shell completion script
    Completions {
        /// Target shell
        #[arg(value_enum, ignore_case = true)]
        shell: Shell,
    },
}

fn overrides(selection: SelectionArgs, retry: bool) -> Overrides {
    Overrides {
        types: selection
            .types
            .into_iter()
            .map(ResourceTypeId::from)
            .collect(),
        retry,
        store: selection.store,
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = cli.config.as_deref();
    match cli.command {
        Commands::Plan {
            selection,
            retry,
            json,
        } => plan::execute(config, overrides(selection, retry), json),
        Commands::Status { selection } => status::execute(config, overrides(selection, false)),
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            generate_completions(&mut cmd, shell);
            Ok(())
        }
    }
}
