use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::ImageFormat;
use log::{debug, info};

use crate::error::BadgeError;
use crate::font::LetterFont;
use crate::render::render_icon;

/// Edge length of a square icon, in pixels. Never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IconSize(u32);

impl IconSize {
    pub fn new(px: u32) -> Result<Self, BadgeError> {
        if px == 0 {
            return Err(BadgeError::InvalidSize(px));
        }
        Ok(Self(px))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

/// Fails with [`BadgeError::MissingCapability`] if the linked `image` build
/// cannot encode PNG.
pub fn ensure_png_support() -> Result<(), BadgeError> {
    if !ImageFormat::Png.writing_enabled() {
        return Err(BadgeError::MissingCapability(
            "PNG encoding is not compiled into the image backend",
        ));
    }
    debug!("PNG encoder available");
    Ok(())
}

/// Renders an icon and writes it as PNG to `output_path`, replacing any
/// existing file.
pub fn create_icon(
    size: IconSize,
    output_path: &Path,
    font: &LetterFont,
) -> Result<(), BadgeError> {
    info!("Rendering {}x{} icon", size.get(), size.get());
    let canvas = render_icon(size, font);

    let mut writer = BufWriter::new(File::create(output_path)?);
    canvas.write_to(&mut writer, ImageFormat::Png)?;
    writer.flush()?;

    info!("Wrote {}", output_path.display());
    Ok(())
}
