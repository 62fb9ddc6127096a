mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "boletim",
    version,
    about = "Extract and persist line items from measurement bulletins"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract line items from a bulletin PDF (without saving)
    Extract {
        /// Path to the PDF file
        input_file: PathBuf,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Write the extraction to a JSON file for later saving
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,
    },
    /// Save an extracted batch under a week label, replacing any prior
    /// batch saved with the same label
    Save {
        /// Path to an extraction JSON produced by `extract --out`
        input_file: PathBuf,

        /// Week label to save the batch under
        #[arg(short, long)]
        week: String,

        /// Path to the SQLite database file
        #[arg(long, default_value = "boletim.db")]
        db: PathBuf,
    },
    /// Show the aggregate summary over all saved weeks
    Summary {
        /// Path to the SQLite database file
        #[arg(long, default_value = "boletim.db")]
        db: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Extract {
            input_file,
            output,
            out,
        } => commands::extract::run(input_file, &output, out),
        Commands::Save {
            input_file,
            week,
            db,
        } => commands::save::run(input_file, &week, db),
        Commands::Summary { db } => commands::summary::run(db),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
