use anyhow::Result;
use clap::{Args, Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "lmk")]
#[command(about = "Ledger, investment projection and exit quotes", long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Reconstruct the portfolio summary from wallet + transaction exports
    Summary {
        /// Wallet JSON export ({"balance": <minor units>, "currency_code": ".."})
        #[arg(long)]
        wallet: String,

        /// Transaction export (.json array or .csv with header)
        #[arg(long)]
        transactions: String,

        #[command(flatten)]
        config: ConfigArgs,

        /// Print the summary as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Project cost, payout and profit of buying quotas
    Project {
        /// Price of one quota in major units (e.g. 500.00)
        #[arg(long)]
        quota_price: String,

        /// Gross return for the whole term, in percent (e.g. 12 or 12.5)
        #[arg(long)]
        rate: String,

        #[arg(long)]
        term_months: u32,

        #[arg(long)]
        quotas: u32,

        /// Available balance in major units
        #[arg(long, conflicts_with = "wallet", required_unless_present = "wallet")]
        balance: Option<String>,

        /// Take the available balance from a wallet JSON export
        #[arg(long)]
        wallet: Option<String>,

        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Quote an early exit of a position
    ExitQuote {
        /// Amount originally invested, major units
        #[arg(long, default_value = "0")]
        invested: String,

        /// Amount already received, major units
        #[arg(long, default_value = "0")]
        received: String,

        /// Amount still receivable, major units
        #[arg(long)]
        receivable: String,

        #[command(flatten)]
        config: ConfigArgs,

        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Compute layered config hash + print canonical JSON
    ConfigHash {
        /// Paths in merge order (base -> overlays)
        #[arg(required = true)]
        paths: Vec<String>,
    },
}

#[derive(Args)]
struct ConfigArgs {
    /// Layered config paths in merge order
    #[arg(long = "config")]
    config_paths: Vec<String>,

    /// Fail instead of warn when the config carries keys nothing reads
    #[arg(long, default_value_t = false)]
    strict_config: bool,
}

fn main() -> Result<()> {
    let _ = dotenvy::from_filename(".env.local");
    init_tracing();

    let cli = Cli::parse();

    match cli.cmd {
        Commands::Summary {
            wallet,
            transactions,
            config,
            json,
        } => commands::summary::run(
            &wallet,
            &transactions,
            &config.config_paths,
            config.strict_config,
            json,
        ),

        Commands::Project {
            quota_price,
            rate,
            term_months,
            quotas,
            balance,
            wallet,
            json,
        } => commands::invest::project(
            commands::invest::ProjectArgs {
                quota_price: &quota_price,
                rate: &rate,
                term_months,
                quotas,
                balance: balance.as_deref(),
                wallet: wallet.as_deref(),
            },
            json,
        ),

        Commands::ExitQuote {
            invested,
            received,
            receivable,
            config,
            json,
        } => commands::invest::exit_quote(
            &invested,
            &received,
            &receivable,
            &config.config_paths,
            config.strict_config,
            json,
        ),

        Commands::ConfigHash { paths } => {
            let loaded = lmk_config::load_layered_yaml(&paths)?;
            println!("config_hash={}", loaded.config_hash);
            println!("{}", loaded.canonical_json);
            Ok(())
        }
    }
}

/// Logs go to stderr; stdout carries only command output.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();
}
