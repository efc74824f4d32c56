use std::process;

use clap::Parser;
use time::{Date, OffsetDateTime};
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

use spendwatch::{
    Config, DateRange, Error, TransactionClient, compute_metrics, default_range, format_date,
    parse_date, summary_text, transaction_list_text,
};

/// Prints a card-spending summary for a date range.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The first day of the range as YYYY-MM-DD. Defaults to the last Monday.
    #[arg(long)]
    start: Option<String>,

    /// The last day of the range as YYYY-MM-DD. Defaults to today.
    #[arg(long)]
    end: Option<String>,

    /// Overrides the transaction service base URL from the environment.
    #[arg(long)]
    api_url: Option<String>,
}

#[tokio::main]
async fn main() {
    setup_logging();

    let args = Args::parse();

    if let Err(error) = run(args).await {
        eprintln!("{error}");
        process::exit(1);
    }
}

async fn run(args: Args) -> Result<(), Error> {
    let mut config = Config::from_env()?;
    if let Some(ref api_url) = args.api_url {
        config.base_url = api_url.clone();
    }

    let today = local_today();
    let range = resolve_range(&args, today)?;

    let client = TransactionClient::new(config.base_url, config.credential);
    let transactions = client.fetch_transactions(range).await?;
    let metrics = compute_metrics(&transactions, today);

    println!(
        "Period: {} - {}",
        format_date(range.start),
        format_date(range.end)
    );
    println!();
    print!("{}", summary_text(&metrics));
    println!();
    print!("{}", transaction_list_text(&transactions));

    Ok(())
}

fn resolve_range(args: &Args, today: Date) -> Result<DateRange, Error> {
    let defaults = default_range(today);

    let start = match &args.start {
        Some(text) => parse_date(text)?,
        None => defaults.start,
    };
    let end = match &args.end {
        Some(text) => parse_date(text)?,
        None => defaults.end,
    };

    if start > end {
        eprintln!("--start must not be after --end");
        process::exit(2);
    }

    Ok(DateRange { start, end })
}

fn local_today() -> Date {
    OffsetDateTime::now_local()
        .map(|now| now.date())
        .unwrap_or_else(|_| OffsetDateTime::now_utc().date())
}

fn setup_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer().pretty().with_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            ),
        )
        .init();
}
