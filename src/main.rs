use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use tradewatch::cli::select::SelectionChange;
use tradewatch::core::log::init_logging;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional settings file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl From<Commands> for tradewatch::AppCommand {
    fn from(cmd: Commands) -> tradewatch::AppCommand {
        match cmd {
            Commands::Status { all, json } => tradewatch::AppCommand::Status { all, json },
            Commands::Watch { count } => tradewatch::AppCommand::Watch { count },
            Commands::List => tradewatch::AppCommand::List,
            Commands::Select {
                all,
                none,
                enable,
                disable,
            } => tradewatch::AppCommand::Select(SelectionChange {
                all,
                none,
                enable,
                disable,
            }),
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create a settings file with every exchange enabled
    Setup,
    /// Show which selected exchanges are open right now
    Status {
        /// Include exchanges that are not selected
        #[arg(short, long)]
        all: bool,
        /// Print the status as JSON
        #[arg(long)]
        json: bool,
    },
    /// Keep the status on screen, refreshing every second
    Watch {
        /// Stop after this many refreshes
        #[arg(short = 'n', long, value_parser = clap::value_parser!(u64).range(1..))]
        count: Option<u64>,
    },
    /// List every known exchange and whether it is shown
    List,
    /// Choose which exchanges are shown
    Select {
        /// Select every exchange
        #[arg(long, conflicts_with = "none")]
        all: bool,
        /// Clear the selection
        #[arg(long)]
        none: bool,
        /// Show this exchange (repeatable)
        #[arg(short, long, value_name = "NAME")]
        enable: Vec<String>,
        /// Hide this exchange (repeatable)
        #[arg(short, long, value_name = "NAME")]
        disable: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => setup(cli.config_path.as_deref()),
        Some(cmd) => tradewatch::run_command(cmd.into(), cli.config_path.as_deref()).await,
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}

fn setup(config_path: Option<&str>) -> Result<()> {
    let definitions = tradewatch::core::builtin_exchanges();
    match config_path {
        Some(path) => tradewatch::cli::setup::setup_at_path(path, definitions),
        None => tradewatch::cli::setup::setup(definitions),
    }
}
