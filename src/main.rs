use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use configuration::{ExportFormat, Language, Logging};
use core_types::{Field, FieldUpdate};
use report::SystemClock;
use risk::FormState;
use std::io;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

mod app;
mod session;

use app::App;

/// The main entry point for the trade risk calculator.
fn main() -> Result<()> {
    // Optional overrides for the RISKCALC__* settings
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = configuration::load_config(cli.config.as_deref())
        .context("Failed to load configuration")?;
    if let Some(language) = cli.language {
        config.report.language = language;
    }
    if let Some(currency) = cli.currency {
        config.report.currency = Some(currency);
    }

    // Keep the guard alive so buffered log lines are flushed on exit.
    let _log_guard = init_tracing(&config.logging)?;

    let app = App::new(config, SystemClock)?;

    match cli.command {
        Commands::Calc(args) => handle_calc(&app, args),
        Commands::Export(args) => handle_export(&app, args),
        Commands::Session => {
            let stdin = io::stdin();
            let mut stdout = io::stdout();
            session::run(&app, stdin.lock(), &mut stdout)
        }
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Sizes a trade from capital, risk tolerance and price targets.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a TOML configuration file (default: ./config.toml if present).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Language of the summary labels.
    #[arg(long, global = true, value_enum)]
    language: Option<Language>,

    /// Currency unit shown next to amounts.
    #[arg(long, global = true)]
    currency: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute and print the trade summary.
    Calc(CalcArgs),
    /// Compute the trade summary and write it as a document.
    Export(ExportArgs),
    /// Edit the form interactively, one `field=value` line at a time.
    Session,
}

/// The form fields. Values are taken as typed, so "1,000,000" is accepted.
#[derive(Args)]
struct TradeArgs {
    /// Symbol name shown on the summary.
    #[arg(long)]
    symbol: Option<String>,

    /// Total capital available.
    #[arg(long)]
    investment: Option<String>,

    /// Share of capital to risk, 0-100.
    #[arg(long, conflicts_with = "risk_price")]
    risk_percent: Option<String>,

    /// Absolute amount to risk.
    #[arg(long)]
    risk_price: Option<String>,

    /// Take-profit price.
    #[arg(long)]
    profit: Option<String>,

    /// Entry price.
    #[arg(long)]
    buy: Option<String>,

    /// Stop-loss price.
    #[arg(long)]
    loss: Option<String>,
}

impl TradeArgs {
    /// The given fields as input events, in form order.
    fn updates(&self) -> Vec<FieldUpdate> {
        [
            (Field::SymbolName, &self.symbol),
            (Field::InvestmentAmount, &self.investment),
            (Field::RiskPercent, &self.risk_percent),
            (Field::RiskPrice, &self.risk_price),
            (Field::ProfitLimit, &self.profit),
            (Field::BuyPrice, &self.buy),
            (Field::LossLimit, &self.loss),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.as_ref().map(|v| FieldUpdate::new(field, v.as_str())))
        .collect()
    }

    fn into_form(self) -> FormState {
        let mut form = FormState::new();
        for update in self.updates() {
            form.apply(&update);
        }
        form
    }
}

#[derive(Args)]
struct CalcArgs {
    #[command(flatten)]
    trade: TradeArgs,

    /// Also write the summary document into this directory.
    #[arg(long)]
    export: Option<PathBuf>,

    /// Document format used with --export.
    #[arg(long, value_enum, requires = "export")]
    format: Option<ExportFormat>,
}

#[derive(Args)]
struct ExportArgs {
    #[command(flatten)]
    trade: TradeArgs,

    /// Output directory (default: report.export_dir).
    #[arg(long)]
    dir: Option<PathBuf>,

    /// Document format (default: report.export_format).
    #[arg(long, value_enum)]
    format: Option<ExportFormat>,
}

// ==============================================================================
// Command Logic
// ==============================================================================

fn handle_calc(app: &App, args: CalcArgs) -> Result<()> {
    let form = args.trade.into_form();
    let view = app.view(form.params())?;

    app.write_summary(&view, &mut io::stdout().lock())?;

    if let Some(dir) = args.export {
        let path = app.export(&view, Some(&dir), args.format)?;
        println!("Exported to {}", path.display());
    }
    Ok(())
}

fn handle_export(app: &App, args: ExportArgs) -> Result<()> {
    let form = args.trade.into_form();
    let view = app.view(form.params())?;
    let path = app.export(&view, args.dir.as_deref(), args.format)?;
    println!("{}", path.display());
    Ok(())
}

/// Logs go to stderr, or to `riskcalc.log` when a log directory is configured.
/// `RUST_LOG` takes precedence over `logging.filter`.
fn init_tracing(logging: &Logging) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&logging.filter))
        .context("Invalid log filter")?;

    match &logging.directory {
        Some(dir) => {
            let appender = tracing_appender::rolling::never(dir, "riskcalc.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let subscriber = FmtSubscriber::builder()
                .with_env_filter(filter)
                .with_writer(writer)
                .with_ansi(false)
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
            Ok(Some(guard))
        }
        None => {
            let subscriber = FmtSubscriber::builder()
                .with_env_filter(filter)
                .with_writer(io::stderr)
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
            Ok(None)
        }
    }
}
