use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "campus",
    about = "Campus — seat students in the nearest classroom and rebalance idle buildings",
    version,
    propagate_version = true,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Args)]
struct Inputs {
    /// Roster file with students and buildings (TOML, or JSON by extension)
    #[arg(short, long)]
    roster: String,
    /// campus.toml with [rebalance] settings (defaults apply when omitted)
    #[arg(short, long)]
    config: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Seat every roster student, audit utilization, print the result.
    ///
    /// Runs the intake pass, then drains buildings below the utilization
    /// threshold and retries the pending list once.
    Assign {
        #[command(flatten)]
        inputs: Inputs,
        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: String,
    },
    /// Run the same cycle as `assign` and list students left pending
    Pending {
        #[command(flatten)]
        inputs: Inputs,
    },
    /// Seat roster students (no audit) and show per-building utilization
    Utilization {
        #[command(flatten)]
        inputs: Inputs,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("campus=info".parse()?)
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Assign { inputs, format } => {
            commands::run::assign(&inputs.roster, inputs.config.as_deref(), &format)
        }
        Commands::Pending { inputs } => {
            commands::run::pending(&inputs.roster, inputs.config.as_deref())
        }
        Commands::Utilization { inputs } => {
            commands::run::utilization(&inputs.roster, inputs.config.as_deref())
        }
    }
}
