use clap::{Parser, Subcommand};
use log::{info, LevelFilter};
use std::path::PathBuf;

use image_sampler_core::{Config, ImageSampler, LogLevel};

#[derive(Parser)]
#[command(name = "image-sampler")]
#[command(about = "Randomly sample image files into an annotation directory")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sample images from a source directory and move them
    Sample {
        /// Directory to draw image files from
        source: PathBuf,

        /// Directory to move the sampled files into (created if missing)
        destination: PathBuf,

        /// Number of files to sample
        #[arg(short = 'n', long, default_value_t = 50)]
        count: usize,

        /// List the selection without moving any files
        #[arg(long)]
        dry_run: bool,

        /// Verbosity level
        #[arg(short, long, action = clap::ArgAction::Count)]
        verbose: u8,

        /// Path to configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Generate default configuration file
    GenerateConfig {
        /// Path to save configuration file
        #[arg(default_value = "image-sampler.json")]
        path: PathBuf,
    },
}

fn main() -> Result<(), anyhow::Error> {
    // Parse command line arguments
    let cli = Cli::parse();

    match cli.command {
        Commands::Sample {
            source,
            destination,
            count,
            dry_run,
            verbose,
            config,
        } => {
            // Set up configuration
            let mut config = if let Some(config_path) = config {
                // Load config from file
                Config::from_file(&config_path)?
            } else {
                Config::default()
            };

            // Override config with command line arguments
            config.source_dir = source;
            config.destination_dir = destination;
            config.sample_size = count;
            config.dry_run = dry_run;

            // Set log level based on verbosity
            config.log_level = match verbose {
                0 => LogLevel::Info,
                1 => LogLevel::Debug,
                _ => LogLevel::Trace,
            };
            init_logger(config.log_level);

            // Validate configuration
            config.validate()?;

            // Run the sampling process
            let sampler = ImageSampler::new(config);
            info!("Starting image sampling...");
            let report = sampler.run()?;
            info!("Sampling complete");

            println!("{report}");
            Ok(())
        }

        Commands::GenerateConfig { path } => {
            init_logger(LogLevel::Info);
            let config = Config::default();
            config.save_to_file(&path)?;
            println!("Configuration file generated at: {}", path.display());
            Ok(())
        }
    }
}

/// Initialize the logger, letting RUST_LOG override the verbosity flag
fn init_logger(level: LogLevel) {
    let filter = match level {
        LogLevel::Error => LevelFilter::Error,
        LogLevel::Warn => LevelFilter::Warn,
        LogLevel::Info => LevelFilter::Info,
        LogLevel::Debug => LevelFilter::Debug,
        LogLevel::Trace => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(filter)
        .parse_default_env()
        .init();
}
