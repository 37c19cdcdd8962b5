//! `image`-crate-backed implementation of the core imaging port.

use std::path::Path;

use image::DynamicImage;
use image::imageops::FilterType;
use pixlift_core::{CoreError, ImageCodec, Result};

/// Codec reading and writing images on the local filesystem.
///
/// Dimension introspection probes the file header only (`imagesize`),
/// without decoding pixel data. Decoding and encoding go through the
/// `image` crate, which picks the container format from the file content
/// and the output path's extension respectively.
///
/// # Example
///
/// ```ignore
/// use pixlift_core::ImageCodec;
/// use pixlift_io::FileCodec;
///
/// let codec = FileCodec::new();
/// let (width, height) = codec.dimensions(Path::new("original/img001.png"))?;
/// let small = codec.decode(Path::new("downscaled/img001_small.png"))?;
/// let restored = codec.resize_nearest(&small, width, height);
/// codec.encode(&restored, Path::new("restored/img001_small.png"))?;
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct FileCodec;

impl FileCodec {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ImageCodec for FileCodec {
    type Image = DynamicImage;

    fn dimensions(&self, path: &Path) -> Result<(u32, u32)> {
        let size = imagesize::size(path).map_err(|e| CoreError::Probe {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Ok((size.width as u32, size.height as u32))
    }

    fn decode(&self, path: &Path) -> Result<DynamicImage> {
        Ok(image::open(path)?)
    }

    fn resize_nearest(&self, image: &DynamicImage, width: u32, height: u32) -> DynamicImage {
        image.resize_exact(width, height, FilterType::Nearest)
    }

    fn encode(&self, image: &DynamicImage, path: &Path) -> Result<()> {
        image.save(path)?;
        Ok(())
    }
}
