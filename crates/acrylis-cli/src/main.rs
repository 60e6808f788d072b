mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "acrylis",
    version,
    about = "Screen cosmetic ingredient lists for acrylates and fungal acne triggers"
)]
struct Cli {
    /// Show debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Screen an ingredient list (from --text, a file, or stdin)
    Classify {
        /// Path to a text file holding the ingredient list
        input_file: Option<PathBuf>,

        /// Ingredient list given inline
        #[arg(short, long, conflicts_with = "input_file")]
        text: Option<String>,

        /// Also screen for fungal acne (Malassezia) triggers
        #[arg(short, long, env = "ACRYLIS_FUNGAL_ACNE")]
        fungal_acne: bool,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Inspect and validate term lists
    Terms {
        #[command(subcommand)]
        action: TermsAction,
    },
}

#[derive(Subcommand)]
enum TermsAction {
    /// List built-in term lists
    List,
    /// Show every term in a built-in list, grouped
    Explain {
        /// Term list name (e.g., "acrylates", "fungal-acne")
        preset: String,
    },
    /// Print the JSON term list schema with an example
    Schema,
    /// Validate a JSON term list file
    Validate {
        /// Path to JSON term list
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Classify {
            input_file,
            text,
            fungal_acne,
            output,
        } => commands::classify::run(input_file, text, fungal_acne, &output),
        Commands::Terms { action } => match action {
            TermsAction::List => commands::terms::list(),
            TermsAction::Explain { preset } => commands::terms::explain(&preset),
            TermsAction::Schema => commands::terms::schema(),
            TermsAction::Validate { file } => commands::terms::validate(&file),
        },
    };

    if let Err(e) = result {
        tracing::debug!(error = ?e, "command failed");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

/// Logs go to stderr so JSON on stdout stays machine-readable.
fn init_tracing(verbose: bool) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("acrylis=debug,acrylis_core=debug")
    } else {
        EnvFilter::try_from_env("ACRYLIS_LOG")
            .or_else(|_| EnvFilter::try_from_default_env())
            .unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
