//! The imaging port the aligner depends on.
//!
//! The restore loop needs exactly three capabilities from an imaging
//! library: dimension introspection, nearest-neighbor resampling to an
//! arbitrary target size, and format-aware decode/encode. This trait
//! keeps the pairing and orchestration logic independent of any concrete
//! codec implementation.

use std::path::Path;

use crate::error::Result;

/// Narrow interface over an image codec/resampling library.
///
/// The decoded image representation is opaque to the core; callers move
/// values of `Self::Image` between the trait's operations and never look
/// inside.
///
/// # Example
///
/// ```ignore
/// use pixlift_core::ImageCodec;
///
/// struct MyCodec;
///
/// impl ImageCodec for MyCodec {
///     type Image = Vec<u8>;
///
///     fn dimensions(&self, path: &Path) -> Result<(u32, u32)> {
///         // Read width x height from the file header
///     }
///
///     fn decode(&self, path: &Path) -> Result<Self::Image> {
///         // Full decode
///     }
///
///     fn resize_nearest(&self, image: &Self::Image, width: u32, height: u32) -> Self::Image {
///         // Each destination pixel copies its nearest source pixel
///     }
///
///     fn encode(&self, image: &Self::Image, path: &Path) -> Result<()> {
///         // Container chosen from the path's extension
///     }
/// }
/// ```
pub trait ImageCodec {
    /// Decoded image representation.
    type Image;

    /// Pixel dimensions (width, height) of the image stored at `path`.
    ///
    /// Implementations are free to probe headers only; a full decode is
    /// not required.
    fn dimensions(&self, path: &Path) -> Result<(u32, u32)>;

    /// Decodes the image stored at `path`.
    fn decode(&self, path: &Path) -> Result<Self::Image>;

    /// Resamples `image` to exactly `width` x `height` using
    /// nearest-neighbor sampling: each destination pixel copies the value
    /// of its nearest source pixel, with no blending.
    fn resize_nearest(&self, image: &Self::Image, width: u32, height: u32) -> Self::Image;

    /// Encodes `image` to `path`, choosing the container format from the
    /// path's extension.
    fn encode(&self, image: &Self::Image, path: &Path) -> Result<()>;
}
