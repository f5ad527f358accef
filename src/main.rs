use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{ArgGroup, Parser, Subcommand};
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::EnvFilter;

mod actions;
mod config;
mod curriculum;
mod dashboard;
mod db;
mod error;
mod models;
mod progress;
mod report;
mod status;
mod suggest;
mod trends;
mod validate;

#[derive(Parser)]
#[command(name = "weekend-tracker")]
#[command(about = "Progress tracker for the ten-weekend AI curriculum", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create or upgrade the database schema
    InitDb,
    /// Reset the store and load the curriculum
    Seed,
    /// Show overall progress, the suggested next weekend and every weekend's status
    Overview {
        #[arg(long)]
        json: bool,
    },
    /// Show one weekend with its work items, done criteria and scorecard
    Show {
        #[arg(allow_negative_numbers = true)]
        weekend_id: i64,
    },
    /// Mark a work item complete, or incomplete again
    Toggle {
        #[arg(allow_negative_numbers = true)]
        item_id: i64,
    },
    /// Replace a weekend's notes
    #[command(group(
        ArgGroup::new("source")
            .args(["text", "file"])
            .required(true)
            .multiple(false)
    ))]
    Notes {
        #[arg(allow_negative_numbers = true)]
        weekend_id: i64,
        #[arg(long)]
        text: Option<String>,
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Replace a weekend's scorecard notes
    #[command(group(
        ArgGroup::new("source")
            .args(["text", "file"])
            .required(true)
            .multiple(false)
    ))]
    ScorecardNotes {
        #[arg(allow_negative_numbers = true)]
        weekend_id: i64,
        #[arg(long)]
        text: Option<String>,
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Rate a weekend on one scorecard criterion (0-5; use_again is 0 or 1)
    Rate {
        #[arg(allow_negative_numbers = true)]
        weekend_id: i64,
        criterion: String,
        #[arg(allow_negative_numbers = true)]
        rating: i64,
    },
    /// Import scorecard ratings from a CSV file
    ImportRatings {
        #[arg(long)]
        csv: PathBuf,
    },
    /// Show average scorecard ratings per weekend
    Trends,
    /// Generate a markdown report
    Report {
        #[arg(long, default_value = "report.md")]
        out: PathBuf,
    },
}

fn read_text(text: Option<String>, file: Option<PathBuf>) -> anyhow::Result<String> {
    match (text, file) {
        (Some(text), _) => Ok(text),
        (None, Some(path)) => std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display())),
        (None, None) => anyhow::bail!("either --text or --file is required"),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let config = config::Config::from_env()?;

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await
        .context("failed to connect to Postgres")?;

    match cli.command {
        Commands::InitDb => {
            db::init_db(&pool).await?;
            println!("Schema ready.");
        }
        Commands::Seed => {
            db::seed(&pool).await?;
            println!("Curriculum loaded ({} weekends).", curriculum::CURRICULUM.len());
        }
        Commands::Overview { json } => {
            let weekends = db::fetch_all_weekends_with_item_flags(&pool).await?;
            let dashboard = dashboard::Dashboard::build(&weekends);
            if json {
                println!("{}", serde_json::to_string_pretty(&dashboard)?);
            } else {
                print!("{}", report::render_overview(&dashboard));
            }
        }
        Commands::Show { weekend_id } => {
            let id = validate::id("weekend id", weekend_id)?;
            match db::fetch_weekend_detail(&pool, id).await? {
                Some(weekend) => print!("{}", report::render_weekend(&weekend)),
                None => println!("Weekend {id} not found."),
            }
        }
        Commands::Toggle { item_id } => match actions::toggle_work_item(&pool, item_id).await? {
            Some(outcome) => {
                println!(
                    "Item {item_id} marked {}.",
                    if outcome.is_completed { "complete" } else { "incomplete" }
                );
                if outcome.just_completed {
                    println!("Weekend {} complete!", outcome.weekend_number);
                } else if !outcome.weekend_completed {
                    println!(
                        "Weekend {} still has open core items (see `show {}`).",
                        outcome.weekend_number, outcome.weekend_id
                    );
                }
            }
            None => println!("Item {item_id} not found, nothing changed."),
        },
        Commands::Notes {
            weekend_id,
            text,
            file,
        } => {
            let notes = read_text(text, file)?;
            report_saved(
                actions::save_notes(&pool, weekend_id, &notes).await?,
                weekend_id,
                "Notes",
            );
        }
        Commands::ScorecardNotes {
            weekend_id,
            text,
            file,
        } => {
            let notes = read_text(text, file)?;
            report_saved(
                actions::save_scorecard_notes(&pool, weekend_id, &notes).await?,
                weekend_id,
                "Scorecard notes",
            );
        }
        Commands::Rate {
            weekend_id,
            criterion,
            rating,
        } => match actions::save_rating(&pool, weekend_id, &criterion, rating).await? {
            Some(criterion) => println!(
                "Weekend {weekend_id}: {} rated {rating}.",
                criterion.label()
            ),
            None => println!("Weekend {weekend_id} not found."),
        },
        Commands::ImportRatings { csv } => {
            let applied = import(&pool, &csv).await?;
            println!("Applied {applied} ratings from {}.", csv.display());
        }
        Commands::Trends => {
            let rows = trends::chart_rows(&db::fetch_score_trends(&pool).await?);
            print!("{}", report::render_trends(&rows));
        }
        Commands::Report { out } => {
            let weekends = db::fetch_all_weekends_with_item_flags(&pool).await?;
            let dashboard = dashboard::Dashboard::build(&weekends);
            let rows = trends::chart_rows(&db::fetch_score_trends(&pool).await?);
            let report = report::build_report(&dashboard, &rows, chrono::Utc::now());
            std::fs::write(&out, report)
                .with_context(|| format!("failed to write {}", out.display()))?;
            println!("Report written to {}.", out.display());
        }
    }

    Ok(())
}

async fn import(pool: &sqlx::PgPool, csv: &Path) -> anyhow::Result<usize> {
    db::import_ratings_csv(pool, csv)
        .await
        .with_context(|| format!("rating import from {} failed", csv.display()))
}

fn report_saved(updated: bool, weekend_id: i64, what: &str) {
    if updated {
        println!("{what} saved for weekend {weekend_id}.");
    } else {
        println!("Weekend {weekend_id} not found.");
    }
}
