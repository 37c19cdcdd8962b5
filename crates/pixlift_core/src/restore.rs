use std::path::PathBuf;

use crate::align::{AlignmentScan, Pair};
use crate::codec::ImageCodec;
use crate::error::Result;
use crate::listing;

/// Progress signal emitted after each successful write.
#[derive(Debug, Clone)]
pub struct RestoredFile {
    /// Filename of the restored file (identical to its downscaled source).
    pub file_name: String,
    /// Full path of the file written into the restored directory.
    pub path: PathBuf,
    /// Target width the image was resampled to.
    pub width: u32,
    /// Target height the image was resampled to.
    pub height: u32,
}

/// Events reported while a run progresses.
#[derive(Debug, Clone)]
pub enum RestoreEvent {
    /// Listings validated and counted; processing is about to begin.
    Started { total: usize },
    /// One downscaled entry was matched, resampled and written.
    FileRestored(RestoredFile),
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RestoreSummary {
    pub files_restored: u64,
}

/// Drives one restoration run: validate, list, align, then resample and
/// write each matched pair in order.
///
/// The run is strictly sequential and halts on the first error. Files
/// written before the failure stay on disk; there is no rollback and no
/// retry.
pub struct Restorer<C: ImageCodec> {
    codec: C,
    original_dir: PathBuf,
    downscaled_dir: PathBuf,
    restored_dir: PathBuf,
}

impl<C: ImageCodec> Restorer<C> {
    pub fn new(
        codec: C,
        original_dir: impl Into<PathBuf>,
        downscaled_dir: impl Into<PathBuf>,
        restored_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            codec,
            original_dir: original_dir.into(),
            downscaled_dir: downscaled_dir.into(),
            restored_dir: restored_dir.into(),
        }
    }

    /// Runs the full restoration, invoking `on_event` once at start and
    /// once per restored file.
    pub fn run(&self, mut on_event: impl FnMut(RestoreEvent)) -> Result<RestoreSummary> {
        let originals = listing::list_entries(&self.original_dir)?;
        let downscaled = listing::list_entries(&self.downscaled_dir)?;
        listing::prepare_restored_dir(&self.restored_dir)?;

        let scan = AlignmentScan::new(originals, downscaled)?;
        on_event(RestoreEvent::Started { total: scan.total() });

        let mut summary = RestoreSummary::default();
        for pair in scan {
            let restored = self.restore_pair(&pair?)?;
            summary.files_restored += 1;
            on_event(RestoreEvent::FileRestored(restored));
        }
        Ok(summary)
    }

    /// Resamples one matched pair up to the original's dimensions and
    /// writes it under the downscaled file's name.
    fn restore_pair(&self, pair: &Pair) -> Result<RestoredFile> {
        let original_path = self.original_dir.join(pair.original.file_name());
        let downscaled_path = self.downscaled_dir.join(pair.downscaled.file_name());
        let restored_path = self.restored_dir.join(pair.downscaled.file_name());

        let (width, height) = self.codec.dimensions(&original_path)?;
        let downscaled_image = self.codec.decode(&downscaled_path)?;
        let upscaled = self.codec.resize_nearest(&downscaled_image, width, height);
        self.codec.encode(&upscaled, &restored_path)?;

        Ok(RestoredFile {
            file_name: pair.downscaled.file_name().to_string(),
            path: restored_path,
            width,
            height,
        })
    }
}
