//! SignAI - Sign-language video translation pipeline
//! 
//! Command-line front end: runs the upload -> translate pipeline on local
//! video files and renders pipeline status while it works.

use anyhow::Result;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{info, Level};
use tracing_appender::{non_blocking, rolling};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use signai::cli::{Args, Commands};
use signai::config::Config;
use signai::history::{History, TranslationRecord};
use signai::media::{MediaUploaderFactory, derive_thumbnail_url};
use signai::source::{FileSource, PickedMediaSource};
use signai::status::PipelineStatus;
use signai::translate::TranslationServiceFactory;
use signai::workflow::Workflow;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Setup logging to both console and file
    setup_logging(args.verbose)?;

    // Load configuration
    let config = match &args.config {
        Some(config_path) => Config::from_file(config_path)?,
        None => {
            if Path::new("signai.toml").exists() {
                info!("Found signai.toml in current directory, loading...");
                Config::from_file("signai.toml")?
            } else {
                Config::default()
            }
        }
    };

    match args.command {
        Commands::Process { input, history: history_path } => {
            let workflow = Workflow::new(&config)?;
            let (pb, watcher) = status_spinner(workflow.subscribe());

            let mut history = History::new();
            let result = workflow.process_single_file(&input, &mut history).await;
            watcher.abort();
            pb.finish_and_clear();

            let record = result?;
            print_record(&record);
            if let Some(path) = history_path {
                history.save_json(path).await?;
            }
        }
        Commands::Batch { input_dir, history: history_path } => {
            let workflow = Workflow::new(&config)?;
            let (pb, watcher) = status_spinner(workflow.subscribe());

            let mut history = History::new();
            let result = workflow.process_directory(&input_dir, &mut history).await;
            watcher.abort();
            pb.finish_and_clear();

            let failures = result?;
            for record in history.iter() {
                print_record(record);
            }
            println!("{} translated, {} failed", history.len(), failures);
            if let Some(path) = history_path {
                history.save_json(path).await?;
            }
        }
        Commands::Upload { input } => {
            let uploader = MediaUploaderFactory::create_uploader(&config)?;
            let bytes = FileSource::new(&input).read_bytes().await?;
            let hosted_url = uploader.upload(bytes).await?;
            println!("{}", hosted_url);
        }
        Commands::Fetch { url } => {
            let service = TranslationServiceFactory::create_service(&config)?;
            let translation = service.translate(&url).await?;
            println!("{}\n\n{}", translation.title, translation.text);
        }
        Commands::Thumbnail { url } => {
            println!("{}", derive_thumbnail_url(&url));
        }
        Commands::InitConfig { output } => {
            Config::default().save_to_file(&output)?;
            println!("Wrote default configuration to {}", output.display());
        }
    }

    Ok(())
}

/// Spinner mirroring the pipeline's transient status message
fn status_spinner(mut rx: watch::Receiver<PipelineStatus>) -> (ProgressBar, JoinHandle<()>) {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        pb.set_style(style);
    }
    pb.enable_steady_tick(Duration::from_millis(120));

    let spinner = pb.clone();
    let watcher = tokio::spawn(async move {
        while rx.changed().await.is_ok() {
            let status = *rx.borrow_and_update();
            spinner.set_message(status.message().unwrap_or_default());
        }
    });

    (pb, watcher)
}

fn print_record(record: &TranslationRecord) {
    println!("== {} ==", record.title);
    println!("{}", record.text);
    if let Some(thumbnail) = &record.thumbnail_url {
        println!("thumbnail: {}", thumbnail);
    }
    println!();
}

fn setup_logging(verbose: bool) -> Result<()> {
    // Create log directory
    let log_dir = std::env::current_dir()?.join(".signai").join("logs");
    std::fs::create_dir_all(&log_dir)?;

    // Set up file appender with daily rotation
    let file_appender = rolling::daily(&log_dir, "signai.log");
    let (non_blocking_file, guard) = non_blocking(file_appender);
    // Keep the guard alive for the duration of the program
    std::mem::forget(guard);

    let log_level = if verbose { Level::DEBUG } else { Level::INFO };

    let console_layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    let file_layer = fmt::layer()
        .with_writer(non_blocking_file)
        .with_target(false)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(log_level.into()))
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    info!("Logging initialized - console: {}, file: {}",
          log_level, log_dir.join("signai.log").display());

    Ok(())
}
