use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use staff_calendar::api::{AppState, create_router};
use staff_calendar::calculation::{parse_date, span_length_text, upcoming_events_from_source};
use staff_calendar::config::ConfigLoader;
use staff_calendar::source::SqliteSource;

#[derive(Parser)]
#[command(name = "staff-calendar")]
#[command(about = "Leave spans, upcoming personnel events and dashboard figures")]
struct Cli {
    /// Path to the YAML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the HTTP API
    Serve {
        /// Port for HTTP API
        #[arg(short, long, default_value = "3000")]
        port: u16,
    },
    /// Print the upcoming events as JSON
    Events {
        /// Reference date (YYYY-MM-DD); defaults to today
        #[arg(long)]
        today: Option<String>,
    },
    /// Count the days between two dates (inclusive)
    Span {
        /// First day (YYYY-MM-DD)
        start: String,
        /// Last day (YYYY-MM-DD)
        end: String,
        /// Count Saturdays and Sundays as well
        #[arg(long)]
        include_weekends: bool,
    },
}

/// Initialize tracing on stderr so command output on stdout stays clean
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "staff_calendar=info".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn load_config(path: Option<PathBuf>) -> anyhow::Result<ConfigLoader> {
    match path {
        Some(path) => ConfigLoader::load(&path)
            .with_context(|| format!("loading configuration from {}", path.display())),
        None => Ok(ConfigLoader::default()),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    match cli.command {
        Commands::Serve { port } => {
            let config = load_config(cli.config)?;
            let source = SqliteSource::open(config.database_path())?;
            let app = create_router(AppState::new(config, Arc::new(source)));

            let addr = format!("0.0.0.0:{}", port);
            tracing::info!("Starting staff calendar API on {}", addr);
            let listener = tokio::net::TcpListener::bind(&addr).await?;
            axum::serve(listener, app).await?;
        }
        Commands::Events { today } => {
            let config = load_config(cli.config)?;
            let source = SqliteSource::open(config.database_path())?;
            let today: NaiveDate = match today {
                Some(raw) => parse_date("today", &raw)?,
                None => Local::now().date_naive(),
            };

            let result = upcoming_events_from_source(&source, today, config.events())?;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        Commands::Span {
            start,
            end,
            include_weekends,
        } => {
            let days = span_length_text(&start, &end, include_weekends)?;
            println!("{}", days);
        }
    }

    Ok(())
}
