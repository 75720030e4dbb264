//! retouch - interactive image retouching
//!
//! Lists the images in a directory, lets the user pick one and applies
//! menu-driven adjustments, rewriting a preview PNG after every change.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use retouch_cli::{Prompter, Session, Settings};
use retouch_io::{DirectoryCatalog, PngPresenter};
use std::io;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "retouch")]
#[command(author, version, about = "Interactive image retouching")]
#[command(long_about = "
Pick an image from a directory and edit it from a numbered menu:
brightness, contrast, grayscale, flip, stacking, blur, reset.
The working image is written to a preview PNG after every change.

Examples:
  retouch                               # images in the current directory
  retouch ~/pictures -p /tmp/view.png   # custom directory and preview
  retouch -c retouch.yaml -vv           # settings file, trace logging
  RUST_LOG=retouch_ops=trace retouch    # per-crate log filter
")]
struct Cli {
    /// Directory to pick images from
    directory: Option<PathBuf>,

    /// Preview PNG rewritten after every change
    #[arg(short, long)]
    preview: Option<PathBuf>,

    /// YAML settings file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Run every pixel operation on the calling thread
    #[arg(long)]
    sequential: bool,

    /// Number of threads (0 = auto)
    #[arg(short = 'j', long)]
    threads: Option<usize>,

    /// Verbose logging (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    /// Settings file (if any) with command-line overrides applied.
    fn settings(&self) -> Result<Settings> {
        let mut settings = Settings::load(self.config.as_deref())?;
        if let Some(dir) = &self.directory {
            settings.directory = dir.clone();
        }
        if let Some(preview) = &self.preview {
            settings.preview = preview.clone();
        }
        if self.sequential {
            settings.parallel = false;
        }
        if let Some(threads) = self.threads {
            settings.threads = threads;
        }
        Ok(settings)
    }
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let settings = cli.settings()?;
    info!(?settings, "starting");

    // Configure thread pool
    if settings.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(settings.threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    let catalog = DirectoryCatalog::new(settings.directory.clone());
    let presenter = PngPresenter::new(settings.preview.clone());
    let mut session = Session::new(catalog, presenter, settings.engine_options());

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut prompt = Prompter::new(stdin.lock(), stdout.lock());
    session
        .run(&mut prompt)
        .with_context(|| format!("Session in {} failed", settings.directory.display()))?;

    if session.presenter().written() > 0 {
        println!("Last preview: {}", session.presenter().path().display());
    }
    Ok(())
}
