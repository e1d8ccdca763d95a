use anyhow::Result;
use clap::{Parser, Subcommand};
use dynlist_cli::{commands, GrowthArg};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "dynlist")]
#[command(about = "Dynlist - Growable lists with recorded allocation status", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Append JSON values to a list and report the outcome
    Build {
        /// Input JSON file (array of values)
        #[arg(short, long)]
        input: String,

        /// Output JSON file for the report
        #[arg(short, long)]
        output: Option<String>,

        /// Treat input as one JSON value per line
        #[arg(long)]
        jsonl: bool,

        /// Pre-size the list with this many null elements
        #[arg(long, allow_negative_numbers = true)]
        init: Option<i64>,

        /// Growth policy
        #[arg(long, value_enum, default_value_t = GrowthArg::Doubling)]
        growth: GrowthArg,

        /// Refuse to hold more than this many elements
        #[arg(long)]
        max_elements: Option<usize>,
    },

    /// Print the status code table
    Codes,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    // Execute command
    match cli.command {
        Commands::Build {
            input,
            output,
            jsonl,
            init,
            growth,
            max_elements,
        } => {
            let options = commands::build::BuildOptions {
                jsonl,
                init,
                growth,
                max_elements,
            };
            commands::build::execute(&input, output.as_deref(), &options).map(|_| ())
        }

        Commands::Codes => {
            commands::codes::execute();
            Ok(())
        }
    }
}
