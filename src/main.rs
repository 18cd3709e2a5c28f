use analytics::{AnalyticsEngine, AnalyticsReport, TradeQuery};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use comfy_table::{Cell, ContentArrangement, Table, presets::UTF8_FULL};
use configuration::LogFormat;
use core_types::{Direction, Session, Trade};
use rust_decimal::Decimal;
use std::path::{Path, PathBuf};

/// The main entry point for the trading journal analytics tool.
#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file, if one exists
    dotenvy::dotenv().ok();

    // Parse command-line arguments
    let cli = Cli::parse();

    let mut config = configuration::load_config(cli.config.as_deref())
        .context("Failed to load configuration")?;
    if let Some(format) = cli.log_format {
        config.logging.format = format;
    }
    let _guard = configuration::init_logging(&config.logging)?;

    let engine = AnalyticsEngine::new(&config.analytics);

    // Execute the appropriate command
    match cli.command {
        Commands::Analyze(args) => handle_analyze(args, &engine),
        Commands::Serve => web_server::run_server(&config.server, engine).await,
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Performance analytics for a personal trading journal.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the configuration file (defaults to ./journal.toml when present).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Overrides the configured console log format.
    #[arg(long, global = true, value_enum)]
    log_format: Option<LogFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a performance report from a JSON file of trades.
    Analyze(AnalyzeArgs),
    /// Serve the analytics endpoint over HTTP.
    Serve,
}

#[derive(Args)]
struct AnalyzeArgs {
    /// JSON file holding an array of trade records.
    #[arg(long, short)]
    input: PathBuf,

    /// First trade day to include (format: YYYY-MM-DD).
    #[arg(long)]
    from: Option<NaiveDate>,

    /// Last trade day to include (format: YYYY-MM-DD).
    #[arg(long)]
    to: Option<NaiveDate>,

    #[arg(long)]
    instrument: Option<String>,

    #[arg(long)]
    strategy: Option<String>,

    /// London, NY, Asian or Overlap.
    #[arg(long)]
    session: Option<Session>,

    /// Long or Short.
    #[arg(long)]
    direction: Option<Direction>,

    /// Only include backtested trades.
    #[arg(long, conflicts_with = "live")]
    backtest: bool,

    /// Only include live trades.
    #[arg(long)]
    live: bool,

    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Full report as pretty-printed JSON.
    Json,
    /// Overview and leaderboards as tables.
    Table,
}

impl AnalyzeArgs {
    fn query(&self) -> TradeQuery {
        TradeQuery {
            from: self.from,
            to: self.to,
            instrument: self.instrument.clone(),
            strategy: self.strategy.clone(),
            session: self.session,
            direction: self.direction,
            is_backtest: match (self.backtest, self.live) {
                (true, _) => Some(true),
                (_, true) => Some(false),
                _ => None,
            },
        }
    }
}

// ==============================================================================
// Analyze Command Logic
// ==============================================================================

fn handle_analyze(args: AnalyzeArgs, engine: &AnalyticsEngine) -> Result<()> {
    let trades = read_trades(&args.input)?;
    let selected = args.query().apply(&trades);
    tracing::info!(
        file = %args.input.display(),
        loaded = trades.len(),
        selected = selected.len(),
        "Trades loaded."
    );

    let report = engine.generate(&selected);

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Table => print_tables(&report),
    }
    Ok(())
}

fn read_trades(path: &Path) -> Result<Vec<Trade>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read trades from {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("Invalid trade data in {}", path.display()))
}

fn print_tables(report: &AnalyticsReport) {
    let o = &report.overview;
    let mut overview = Table::new();
    overview
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Metric", "Value"]);

    let rows: [(&str, String); 14] = [
        ("Total trades", o.total_trades.to_string()),
        ("Wins / Losses / BE", format!("{} / {} / {}", o.winning_trades, o.losing_trades, o.break_even_trades)),
        ("Total P&L", money(o.total_pnl)),
        ("Average P&L", money(o.avg_pnl)),
        ("Win rate", format!("{}%", o.win_rate)),
        ("Average win", money(o.avg_win)),
        ("Average loss", money(o.avg_loss)),
        ("Profit factor", o.profit_factor.to_string()),
        ("Payoff ratio", o.payoff_ratio.to_string()),
        ("Expectancy", money(o.expectancy)),
        ("Best / Worst trade", format!("{} / {}", money(o.best_trade), money(o.worst_trade))),
        ("Max drawdown", format!("{} ({}%)", money(report.drawdown.max_drawdown), report.drawdown.max_drawdown_percent)),
        ("Longest win / loss streak", format!("{} / {}", report.streaks.max_win_streak, report.streaks.max_loss_streak)),
        ("Avg execution score", o.avg_execution_score.to_string()),
    ];
    for (metric, value) in rows {
        overview.add_row(vec![Cell::new(metric), Cell::new(value)]);
    }
    println!("{overview}");

    for (title, rows) in [
        ("Instrument", &report.instruments),
        ("Strategy", &report.strategies),
        ("Session", &report.sessions),
    ] {
        if rows.is_empty() {
            continue;
        }
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_header(vec![title, "Trades", "Win rate", "P&L", "Avg P&L"]);
        for row in rows {
            table.add_row(vec![
                Cell::new(&row.name),
                Cell::new(row.trades),
                Cell::new(format!("{}%", row.win_rate)),
                Cell::new(money(row.pnl)),
                Cell::new(money(row.avg_pnl)),
            ]);
        }
        println!("{table}");
    }
}

fn money(value: Decimal) -> String {
    if value.is_sign_negative() && !value.is_zero() {
        format!("-${:.2}", value.abs())
    } else {
        format!("${:.2}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn formats_money_with_sign_before_symbol() {
        assert_eq!(money(dec!(12.5)), "$12.50");
        assert_eq!(money(dec!(-7)), "-$7.00");
        assert_eq!(money(Decimal::ZERO), "$0.00");
    }

    #[test]
    fn backtest_and_live_flags_map_to_query() {
        let cli = Cli::parse_from(["journal", "analyze", "--input", "t.json", "--live", "--session", "ny"]);
        let Commands::Analyze(args) = cli.command else {
            panic!("expected analyze");
        };
        let query = args.query();
        assert_eq!(query.is_backtest, Some(false));
        assert_eq!(query.session, Some(Session::NewYork));
    }

    #[test]
    fn backtest_conflicts_with_live() {
        let result = Cli::try_parse_from(["journal", "analyze", "-i", "t.json", "--backtest", "--live"]);
        assert!(result.is_err());
    }
}
