// file: src/main.rs
// description: commandline application entry point with command handling
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use pdf_corpus::utils::logging::{format_summary, init_logger};
use pdf_corpus::{Config, Pipeline, StopwordSet, TextSanitizer, TreeWalker};
use std::io::Read;
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "pdf_corpus")]
#[command(author = "cipher")]
#[command(version = "0.1.0")]
#[command(about = "Extract departmental PDF trees into a cleaned JSON corpus", long_about = None)]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "config/default.toml"
    )]
    config: PathBuf,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract every department PDF and write the JSON corpus
    Run {
        #[arg(short, long, value_name = "DIR")]
        root: Option<PathBuf>,

        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Write single-line JSON instead of indented output
        #[arg(long)]
        compact: bool,

        #[arg(long)]
        no_progress: bool,
    },

    /// List the PDFs a run would process without extracting them
    Scan {
        #[arg(short, long, value_name = "DIR")]
        root: Option<PathBuf>,
    },

    /// Sanitize TEXT (or stdin) and print the cleaned result
    Clean { text: Option<String> },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logger(cli.color, cli.verbose);

    let mut config = if cli.config.exists() {
        info!("Loading configuration from: {}", cli.config.display());
        Config::load(Some(cli.config.as_path())).context("Failed to load configuration")?
    } else {
        warn!(
            "Config file {} not found, using default configuration",
            cli.config.display()
        );
        Config::load(None).unwrap_or_else(|e| {
            warn!("Falling back to built-in defaults: {}", e);
            Config::default_config()
        })
    };

    match cli.command {
        Commands::Run {
            root,
            output,
            compact,
            no_progress,
        } => {
            if let Some(root) = root {
                config.input.root_dir = root;
            }
            if let Some(output) = output {
                config.output.path = output;
            }
            if compact {
                config.output.pretty = false;
            }
            cmd_run(&config, !no_progress, cli.color)?;
        }
        Commands::Scan { root } => {
            if let Some(root) = root {
                config.input.root_dir = root;
            }
            cmd_scan(&config)?;
        }
        Commands::Clean { text } => {
            cmd_clean(&config, text)?;
        }
    }

    Ok(())
}

fn cmd_run(config: &Config, progress: bool, color: bool) -> Result<()> {
    config.validate().context("Invalid configuration")?;

    let mut pipeline = Pipeline::from_config(config);
    if progress {
        pipeline = pipeline.with_progress(color);
    }

    let summary = pipeline.run().context("Corpus build failed")?;

    for line in format_summary(&summary) {
        println!("{}", line);
    }

    if !summary.saved {
        return Err(anyhow::anyhow!(
            "Output could not be written to {}",
            summary.output_path.display()
        ));
    }

    Ok(())
}

fn cmd_scan(config: &Config) -> Result<()> {
    config.validate().context("Invalid configuration")?;

    let walker = TreeWalker::from_config(config);
    let entries = walker
        .discover(&config.input.root_dir)
        .context("Failed to scan directory")?;

    if entries.is_empty() {
        println!("No PDFs found under {}", config.input.root_dir.display());
        return Ok(());
    }

    let mut current_department: Option<&str> = None;
    for entry in &entries {
        if current_department != Some(entry.department.as_str()) {
            println!("{}/", entry.department);
            current_department = Some(entry.department.as_str());
        }
        println!("  {} -> {}", entry.path.display(), entry.title);
    }
    println!("\n{} PDF file(s)", entries.len());

    Ok(())
}

fn cmd_clean(config: &Config, text: Option<String>) -> Result<()> {
    let raw = match text {
        Some(text) => text,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read stdin")?;
            buffer
        }
    };

    let sanitizer = TextSanitizer::new(StopwordSet::with_extra(
        &config.sanitizer.extra_stopwords,
    ));
    println!("{}", sanitizer.sanitize(&raw));

    Ok(())
}
