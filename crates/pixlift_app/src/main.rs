//! Pixlift - batch restoration of downscaled images.
//!
//! Pairs the files of an original-resolution directory with their
//! downscaled counterparts by filename stem and resamples each downscaled
//! image back up to its original's exact pixel dimensions using
//! nearest-neighbor sampling.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use pixlift_core::{RestoreEvent, Restorer};
use pixlift_io::FileCodec;

#[derive(Parser, Debug)]
#[command(name = "pixlift")]
#[command(author, version, about = "Restore downscaled images to their original resolution", long_about = None)]
struct Args {
    /// Directory holding the original-resolution images
    #[arg(long)]
    original: PathBuf,

    /// Directory holding the downscaled images
    #[arg(long)]
    downscaled: PathBuf,

    /// Directory the restored images are written into (created if absent)
    #[arg(long)]
    restored: PathBuf,

    /// Suppress the per-file output lines
    #[arg(short, long, default_value_t = false)]
    quiet: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let start = Instant::now();

    let restorer = Restorer::new(
        FileCodec::new(),
        &args.original,
        &args.downscaled,
        &args.restored,
    );

    let mut bar: Option<ProgressBar> = None;
    let summary = restorer
        .run(|event| match event {
            RestoreEvent::Started { total } => {
                let pb = ProgressBar::new(total as u64);
                pb.set_style(
                    ProgressStyle::default_bar()
                        .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len}")
                        .expect("invalid progress bar template - this is a bug")
                        .progress_chars("##-"),
                );
                bar = Some(pb);
            }
            RestoreEvent::FileRestored(file) => {
                if let Some(pb) = &bar {
                    if !args.quiet {
                        pb.println(format!("Restored image saved: {}", file.path.display()));
                    }
                    pb.inc(1);
                }
            }
        })
        .with_context(|| {
            format!(
                "failed to restore {} against {}",
                args.downscaled.display(),
                args.original.display()
            )
        })?;

    if let Some(pb) = bar {
        pb.finish_and_clear();
    }

    println!(
        "{} files restored in {:.2?}",
        summary.files_restored,
        start.elapsed()
    );

    Ok(())
}
