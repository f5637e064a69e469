use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use pipeline::filters::ResolutionFileTest;
use pipeline::{evaluate, violations, FileTestPipeline, FileTestTask, MatchPolicy};
use probe::{FfprobeProber, Resolution};
use rayon::prelude::*;
use settings::{
    FileSettingsProvider, LibraryId, ResolutionBounds, ResolutionSettings, SettingField,
    SettingsIndex, SettingsProvider,
};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use walkdir::WalkDir;

/// resolution-filter - exclude library files by video resolution
#[derive(Parser)]
#[command(name = "resolution-filter")]
#[command(about = "Decide which library files are queued for processing based on video resolution", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Probe files and report which would be queued or excluded
    Check {
        /// Files or directories (searched recursively) to test
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        #[command(flatten)]
        source: SettingsSource,

        /// ffprobe program to run
        #[arg(long, default_value = probe::ffprobe::DEFAULT_FFPROBE)]
        ffprobe: String,

        /// Print the resulting task records as JSON
        #[arg(long)]
        json: bool,
    },

    /// Evaluate a resolution against bounds without probing anything
    Evaluate {
        /// Measured width in pixels
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        width: u32,

        /// Measured height in pixels
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        height: u32,

        #[command(flatten)]
        bounds: BoundsArgs,
    },

    /// Show the resolved settings with their labels
    Settings {
        #[command(flatten)]
        source: SettingsSource,
    },
}

/// Inline bounds, used when no settings file is given
#[derive(Args, Clone, Copy)]
struct BoundsArgs {
    /// Minimum width (zero disables the minimum)
    #[arg(long, default_value = "0")]
    min_width: u32,

    /// Minimum height (zero disables the minimum)
    #[arg(long, default_value = "0")]
    min_height: u32,

    /// Maximum width (zero disables the maximum)
    #[arg(long, default_value = "0")]
    max_width: u32,

    /// Maximum height (zero disables the maximum)
    #[arg(long, default_value = "0")]
    max_height: u32,

    /// Accept a file when any single limit holds instead of all of them
    #[arg(long)]
    match_any: bool,
}

impl BoundsArgs {
    fn to_settings(self) -> ResolutionSettings {
        ResolutionSettings {
            bounds: ResolutionBounds {
                min_width: self.min_width,
                min_height: self.min_height,
                max_width: self.max_width,
                max_height: self.max_height,
            },
            every_condition_must_be_true: !self.match_any,
        }
    }
}

#[derive(Args)]
struct SettingsSource {
    /// JSON settings file with "global" and "libraries" sections
    #[arg(
        long,
        conflicts_with_all = ["min_width", "min_height", "max_width", "max_height", "match_any"]
    )]
    settings: Option<PathBuf>,

    /// Library whose settings apply
    #[arg(long)]
    library_id: Option<LibraryId>,

    #[command(flatten)]
    bounds: BoundsArgs,
}

fn main() -> Result<()> {
    // Initialize tracing (stderr, so --json output stays clean)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Check {
            paths,
            source,
            ffprobe,
            json,
        } => handle_check(&paths, &source, ffprobe, json)?,
        Commands::Evaluate {
            width,
            height,
            bounds,
        } => handle_evaluate(Resolution::new(width, height), bounds.to_settings()),
        Commands::Settings { source } => handle_settings(&source)?,
    }

    Ok(())
}

/// Build the settings provider for a command.
///
/// A settings file is validated once up front, then re-read for every file
/// test so edits apply to files tested later in the same run.
fn settings_provider(source: &SettingsSource) -> Result<Arc<dyn SettingsProvider>> {
    match &source.settings {
        Some(path) => {
            SettingsIndex::load_from_file(path)
                .with_context(|| format!("Invalid settings file {}", path.display()))?;
            Ok(Arc::new(FileSettingsProvider::new(path)))
        }
        None => Ok(Arc::new(SettingsIndex::new(source.bounds.to_settings()))),
    }
}

/// Handle the 'check' command
fn handle_check(paths: &[PathBuf], source: &SettingsSource, ffprobe: String, json: bool) -> Result<()> {
    let files = collect_files(paths)?;
    tracing::info!("Testing {} files", files.len());

    let pipeline = FileTestPipeline::new().add_test(ResolutionFileTest::new(
        settings_provider(source)?,
        Arc::new(FfprobeProber::with_program(ffprobe)),
    ));

    let start = Instant::now();
    let tasks: Vec<FileTestTask> = files
        .into_par_iter()
        .map(|path| {
            let mut task = FileTestTask::new(path);
            task.library_id = source.library_id;
            pipeline.apply(task)
        })
        .collect::<Result<_>>()?;

    let excluded = tasks
        .iter()
        .filter(|task| !task.add_file_to_pending_tasks)
        .count();
    tracing::info!(
        "Tested {} files in {:?} ({} excluded)",
        tasks.len(),
        start.elapsed(),
        excluded
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&tasks)?);
    } else {
        print_tasks(&tasks);
        println!(
            "{} files: {} queued, {} excluded",
            tasks.len(),
            (tasks.len() - excluded).to_string().green(),
            excluded.to_string().red()
        );
    }

    Ok(())
}

/// Handle the 'evaluate' command
fn handle_evaluate(resolution: Resolution, settings: ResolutionSettings) {
    let policy = MatchPolicy::from(&settings);

    if evaluate(&settings.bounds, resolution, policy) {
        println!("{} {}", "accept".green(), resolution);
    } else {
        let violated = violations(&settings.bounds, resolution)
            .iter()
            .map(|bound| bound.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        println!("{} {} (violated: {})", "reject".red(), resolution, violated);
    }
}

/// Handle the 'settings' command
fn handle_settings(source: &SettingsSource) -> Result<()> {
    let settings = settings_provider(source)?
        .resolution_settings(source.library_id)
        .context("Failed to resolve settings")?;

    match source.library_id {
        Some(id) => println!("{}", format!("Settings for library {}:", id).bold().blue()),
        None => println!("{}", "Global settings:".bold().blue()),
    }
    for field in SettingField::ALL {
        println!(
            "{}{} = {}",
            "• ".green(),
            field.key(),
            field.display_value(&settings)
        );
        println!("    {}", field.label().dimmed());
    }

    Ok(())
}

/// Expand directories into the files beneath them, sorted by path.
fn collect_files(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for path in paths {
        if path.is_file() {
            files.push(path.clone());
        } else if path.is_dir() {
            for entry in WalkDir::new(path) {
                let entry = entry.with_context(|| format!("Failed to walk {}", path.display()))?;
                if entry.file_type().is_file() {
                    files.push(entry.into_path());
                }
            }
        } else {
            bail!("Path not found: {}", path.display());
        }
    }

    files.sort();
    files.dedup();
    Ok(files)
}

/// Helper function to print one line per task, with issues beneath
fn print_tasks(tasks: &[FileTestTask]) {
    for task in tasks {
        if task.add_file_to_pending_tasks {
            println!("{} {}", "✓".green(), task.path.display());
        } else {
            println!("{} {}", "✗".red(), task.path.display());
            for issue in &task.issues {
                println!("    {}: {}", issue.id.bold(), issue.message);
            }
        }
    }
}
