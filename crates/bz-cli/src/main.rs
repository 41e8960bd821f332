mod commands;

use std::path::PathBuf;

use bz_core::config::Config;
use clap::{Parser, Subcommand};

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

/// bazaar CLI -- check and shrink listing photos with the same rules the
/// upload widget applies in the browser.
#[derive(Parser)]
#[command(name = "bz", version, about)]
struct Cli {
    /// Config file (defaults to ~/.bazaar/config.toml).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Emit logs as JSON lines on stderr.
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a file against the upload accept list and size ceiling.
    Validate {
        /// File to check.
        path: PathBuf,
        /// Override the accept list, e.g. "image/*,.pdf".
        #[arg(long)]
        accept: Option<String>,
        /// Override the size ceiling in MB.
        #[arg(long)]
        max_size_mb: Option<f64>,
    },

    /// Downscale and re-encode an image until it fits the size budget.
    Compress {
        /// Image to compress.
        path: PathBuf,
        /// Output file (defaults to `<stem>.compressed.<ext>` next to the input).
        #[arg(short, long)]
        out: Option<PathBuf>,
        #[arg(long)]
        max_width: Option<u32>,
        #[arg(long)]
        max_height: Option<u32>,
        /// Starting quality in (0, 1].
        #[arg(long)]
        quality: Option<f64>,
        /// Size budget in MB.
        #[arg(long)]
        max_size_mb: Option<f64>,
        /// Print the result summary as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Rough compressed size for a payload of the given byte count.
    Estimate {
        bytes: u64,
    },

    /// Print the effective configuration as TOML.
    Config,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cfg = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    if cli.log_json {
        bz_telemetry::init_logging_json("bz", &cfg.general.log_level);
    } else {
        bz_telemetry::init_logging("bz", &cfg.general.log_level);
    }

    match cli.command {
        Commands::Validate {
            path,
            accept,
            max_size_mb,
        } => {
            let mut upload = cfg.upload.clone();
            if let Some(accept) = accept {
                upload.accept = accept;
            }
            if let Some(max) = max_size_mb {
                upload.max_size_mb = max;
            }
            commands::validate::run(&path, &upload.rules()).await?;
        }
        Commands::Compress {
            path,
            out,
            max_width,
            max_height,
            quality,
            max_size_mb,
            json,
        } => {
            let mut opts = cfg.compression.clone();
            if let Some(v) = max_width {
                opts.max_width = v;
            }
            if let Some(v) = max_height {
                opts.max_height = v;
            }
            if let Some(v) = quality {
                opts.quality = v;
            }
            if let Some(v) = max_size_mb {
                opts.max_size_mb = v;
            }
            commands::compress::run(&path, out.as_deref(), &opts, json).await?;
        }
        Commands::Estimate { bytes } => {
            commands::estimate::run(bytes);
        }
        Commands::Config => {
            print!("{}", cfg.to_toml()?);
        }
    }

    Ok(())
}
