use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Invalid input path: {} is not a directory", path.display())]
    InvalidInputPath { path: PathBuf },

    #[error("Invalid output path: {} exists and is not a directory", path.display())]
    InvalidOutputPath { path: PathBuf },

    #[error("Not enough originals: {originals} original files for {downscaled} downscaled files")]
    InsufficientOriginals { originals: usize, downscaled: usize },

    #[error("Could not find match for downscaled file: {file_name}")]
    NoMatchFound { file_name: String },

    #[error("File name is not valid UTF-8: {}", path.display())]
    NonUtf8Name { path: PathBuf },

    #[error("Could not read dimensions of {}: {reason}", path.display())]
    Probe { path: PathBuf, reason: String },

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CoreError>;
