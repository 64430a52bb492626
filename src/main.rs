mod commands;
mod context;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};
use context::{Context, Overrides};
use plic_core::CalendarDay;
use plic_core::month_view::YearMonth;
use tracing_subscriber::EnvFilter;
use url::Url;

#[derive(Parser)]
#[command(name = "plic")]
#[command(about = "Browse the cultural events calendar and share links to events")]
struct Cli {
    /// Events source (path or http(s) URL), overrides the config
    #[arg(long, global = true)]
    events: Option<String>,

    /// Time zone that defines calendar days (IANA name or "local")
    #[arg(long, global = true)]
    timezone: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a month with days coloured by number of events
    Calendar {
        /// Month to show (YYYY-MM), defaults to the selected day's month
        #[arg(short, long)]
        month: Option<YearMonth>,

        /// Selected day (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<CalendarDay>,
    },
    /// List the events of a day
    Events {
        /// Day to list (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<CalendarDay>,

        /// Restore the selection from a shared link
        #[arg(long)]
        link: Option<Url>,
    },
    /// Print a shareable link that opens an event
    Share {
        /// Event id, as shown by `plic events`
        event_id: String,

        /// Link to build on (defaults to base_url from config)
        #[arg(long)]
        from: Option<Url>,
    },
    /// Open a shared link: show the linked event, or the linked day
    Open {
        url: Url,

        /// Also open the event's page in the browser
        #[arg(short, long)]
        browser: bool,
    },
    /// Show the config file location and effective settings
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();
    let overrides = Overrides {
        events: cli.events,
        timezone: cli.timezone,
    };

    match cli.command {
        Commands::Calendar { month, date } => {
            let ctx = Context::load(&overrides).await?;
            commands::calendar::run(&ctx, month, date)
        }
        Commands::Events { date, link } => {
            let ctx = Context::load(&overrides).await?;
            commands::events::run(&ctx, date, link.as_ref())
        }
        Commands::Share { event_id, from } => {
            let ctx = Context::load(&overrides).await?;
            commands::share::run(&ctx, &event_id, from)
        }
        Commands::Open { url, browser } => {
            let ctx = Context::load(&overrides).await?;
            commands::open::run(&ctx, &url, browser)
        }
        Commands::Config => commands::config::run(&overrides),
    }
}

/// Diagnostics go to stderr, filtered by PLIC_LOG (default: warnings only).
fn init_logging() {
    let filter = EnvFilter::try_from_env("PLIC_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
