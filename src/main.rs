//! placementd - batch lifecycle operator tool
//!
//! Applies migrations, runs auto-graduation sweeps and resyncs placement
//! statistics for the placement-management backend.

#![allow(missing_docs)]

use anyhow::Context;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use placement_rs::utils::logging::init_logging;
use placement_rs::{
    BatchService, Config, GraduationScheduler, StorageLayer, generate_batch_code,
};
use placement_rs::services::shutdown_on;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;
use uuid::Uuid;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("PLACEMENT_GIT_HASH"),
    ")"
);

#[derive(Debug, Parser)]
#[command(name = "placementd", version, long_version = LONG_VERSION, about)]
struct Cli {
    /// YAML configuration file; `PLACEMENT_*` environment variables are used
    /// when omitted
    #[arg(short, long, global = true, env = "PLACEMENT_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the batch code for a start year and course type
    Code {
        #[arg(long)]
        start_year: i32,
        /// UG, PG, Diploma or Certificate
        #[arg(long)]
        course_type: String,
    },
    #[command(flatten)]
    Storage(StorageCommand),
}

/// Commands that open the configured database
#[derive(Debug, Subcommand)]
enum StorageCommand {
    /// Apply database migrations
    Migrate,
    /// Run one auto-graduation sweep
    Graduate {
        /// Sweep as of this date instead of today (YYYY-MM-DD)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Recompute cached placement statistics
    Recompute(RecomputeArgs),
    /// Apply migrations, then sweep on the configured interval until Ctrl-C
    Run,
}

#[derive(Debug, Args)]
#[group(required = true, multiple = false)]
struct RecomputeArgs {
    /// A single batch
    #[arg(long)]
    batch: Option<Uuid>,
    /// Every batch of a department
    #[arg(long)]
    department: Option<Uuid>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        // Code generation is pure; no configuration or database needed
        Command::Code {
            start_year,
            course_type,
        } => {
            println!("{}", generate_batch_code(start_year, &course_type));
            Ok(())
        }
        Command::Storage(command) => run_with_storage(cli.config, command).await,
    }
}

async fn run_with_storage(
    config_path: Option<PathBuf>,
    command: StorageCommand,
) -> anyhow::Result<()> {
    let config = match &config_path {
        Some(path) => Config::from_file(path).await?,
        None => Config::from_env()?,
    };
    init_logging(config.logging())?;

    let storage = StorageLayer::new(config.storage())
        .await
        .context("failed to open database")?;
    let batches = BatchService::with_database_students(storage.database.clone());

    match command {
        StorageCommand::Migrate => {
            storage.migrate().await?;
            println!("Migrations applied");
        }
        StorageCommand::Graduate { date } => {
            let today = date.unwrap_or_else(|| chrono::Local::now().date_naive());
            let graduated = batches.auto_graduate_completed_batches(today).await?;
            for batch in &graduated {
                println!("{}\t{}\t{}", batch.id, batch.department_id, batch.display_name());
            }
            println!("Graduated {} batches as of {}", graduated.len(), today);
        }
        StorageCommand::Recompute(args) => {
            if let Some(batch_id) = args.batch {
                let statistics = batches.recompute_statistics(batch_id).await?;
                println!("{}\t{}", batch_id, serde_json::to_string(&statistics)?);
            } else if let Some(department_id) = args.department {
                let results = batches.recompute_department_statistics(department_id).await?;
                for (batch, statistics) in &results {
                    println!(
                        "{}\t{}\t{}",
                        batch.id,
                        batch.display_name(),
                        serde_json::to_string(statistics)?
                    );
                }
            }
        }
        StorageCommand::Run => {
            storage.migrate().await?;
            let health = storage.health_check().await;
            anyhow::ensure!(health.overall, "storage health check failed");

            info!(
                "placementd {} started ({} backend)",
                LONG_VERSION,
                if config.database().is_sqlite() { "sqlite" } else { "postgres" }
            );

            let scheduler = GraduationScheduler::new(batches, config.graduation().clone());
            scheduler
                .run_until(shutdown_on(tokio::signal::ctrl_c()))
                .await;
            info!("placementd stopped");
        }
    }

    Ok(())
}
