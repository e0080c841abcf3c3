use std::io;

use image::ImageError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BadgeError {
    #[error("Icon size must be a positive number of pixels, got {0}")]
    InvalidSize(u32),
    #[error("Imaging capability unavailable: {0}")]
    MissingCapability(&'static str),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("PNG encoding failed: {0}")]
    Encode(#[from] ImageError),
}
