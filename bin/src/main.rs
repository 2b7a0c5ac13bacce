//! unitcost CLI - Per-user monthly cost calculator for AI question-answering services.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

mod commands;
mod display;
mod inputs;

use display::Format;
use inputs::ParamArgs;

#[derive(Parser)]
#[command(name = "unitcost")]
#[command(about = "Per-user monthly cost calculator for AI question-answering services", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (suppress titles and notes)
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the monthly metrics
    Calc {
        #[command(flatten)]
        params: ParamArgs,

        /// Output format
        #[arg(short, long, value_enum, default_value = "table")]
        format: Format,

        /// Show unrounded intermediate values instead of the metrics
        #[arg(short, long)]
        breakdown: bool,
    },

    /// List input parameters with their labels and current values
    Fields {
        #[command(flatten)]
        params: ParamArgs,

        /// Output format
        #[arg(short, long, value_enum, default_value = "table")]
        format: Format,
    },

    /// Recompute the metrics across a range of values of one parameter
    Sweep {
        /// Parameter to vary (e.g., numUsers, num_users)
        parameter: String,

        /// First value
        #[arg(long, allow_hyphen_values = true)]
        from: f64,

        /// Last value
        #[arg(long, allow_hyphen_values = true)]
        to: f64,

        /// Number of values, endpoints included
        #[arg(long, default_value = "5")]
        steps: usize,

        #[command(flatten)]
        params: ParamArgs,

        /// Output format
        #[arg(short, long, value_enum, default_value = "table")]
        format: Format,
    },

    /// Edit parameters one at a time and watch the metrics update
    Interactive {
        #[command(flatten)]
        params: ParamArgs,
    },
}

/// Installs the stderr log subscriber. `RUST_LOG` overrides the flags.
fn init_tracing(verbose: u8, quiet: bool) {
    let default_level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    // Show help if no command provided
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Calc {
            params,
            format,
            breakdown,
        } => commands::calc::calc(&params, format, breakdown, cli.quiet),
        Commands::Fields { params, format } => commands::fields::list_fields(&params, format),
        Commands::Sweep {
            parameter,
            from,
            to,
            steps,
            params,
            format,
        } => commands::sweep::sweep(&parameter, from, to, steps, &params, format),
        Commands::Interactive { params } => commands::interactive::interactive(&params),
    }
}
