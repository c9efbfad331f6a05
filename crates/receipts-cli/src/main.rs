mod commands;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use receipts_core::model::{ExtractOptions, OrphanPolicy};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "receipts",
    version,
    about = "Consignment receipt extraction and sales reporting tool"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract flat sales records from a receipt PDF
    Extract {
        /// Path to the receipt PDF
        input_file: PathBuf,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Write extracted records to a JSON file
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,

        /// Show parse events (skipped headers, dropped items) on stderr
        #[arg(long)]
        trace: bool,

        #[command(flatten)]
        extract: ExtractArgs,
    },
    /// Summarize a receipt PDF into one aggregate view
    Report {
        /// Path to the receipt PDF
        input_file: PathBuf,

        /// Which aggregate view to print
        #[arg(short, long, value_enum, default_value = "account")]
        view: View,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Hide items sold fewer than this many times (item view)
        #[arg(long, default_value_t = 0)]
        min_count: usize,

        /// Number of customers to rank (customer view)
        #[arg(long, default_value_t = 20)]
        top: usize,

        /// Bucket the date view by month instead of day
        #[arg(long)]
        monthly: bool,

        #[command(flatten)]
        extract: ExtractArgs,
    },
}

#[derive(clap::Args)]
struct ExtractArgs {
    /// Items found before any customer: drop them or attach to the next one
    #[arg(long, value_enum, default_value = "drop")]
    orphans: Orphans,

    /// Minimum digits in an account number token
    #[arg(long, default_value_t = 3)]
    min_account_digits: usize,

    /// Maximum digits in an account number token
    #[arg(long, default_value_t = 5)]
    max_account_digits: usize,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum View {
    Account,
    Category,
    Item,
    ItemName,
    ItemDetailed,
    Date,
    Customer,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Orphans {
    Drop,
    Attach,
}

impl ExtractArgs {
    fn to_options(&self) -> ExtractOptions {
        ExtractOptions {
            min_account_digits: self.min_account_digits,
            max_account_digits: self.max_account_digits,
            orphan_policy: match self.orphans {
                Orphans::Drop => OrphanPolicy::Drop,
                Orphans::Attach => OrphanPolicy::AttachToNextCustomer,
            },
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Extract {
            input_file,
            output,
            out,
            trace,
            extract,
        } => commands::extract::run(input_file, &output, out, trace, &extract.to_options()),
        Commands::Report {
            input_file,
            view,
            output,
            min_count,
            top,
            monthly,
            extract,
        } => commands::report::run(
            input_file,
            view,
            &output,
            min_count,
            top,
            monthly,
            &extract.to_options(),
        ),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
