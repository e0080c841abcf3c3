pub mod builtin;

use std::fs;
use std::path::{Path, PathBuf};

use ab_glyph::{point, Font, FontVec, PxScale};
use log::{debug, info};
use thiserror::Error;

use crate::constants::FONT_CANDIDATES;

#[derive(Error, Debug)]
pub enum FontLoadError {
    #[error("Failed to read font file {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Not a usable font: {}", .path.display())]
    Parse { path: PathBuf },
}

/// Per-pixel ink coverage of one rendered glyph, row-major, in `0.0..=1.0`.
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphMask {
    pub width: u32,
    pub height: u32,
    pub coverage: Vec<f32>,
}

impl GlyphMask {
    pub fn at(&self, x: u32, y: u32) -> f32 {
        self.coverage[(y * self.width + x) as usize]
    }
}

/// The font the letter is drawn with, as produced by [`FontChain::load`].
pub enum LetterFont {
    Outline(FontVec),
    Builtin,
}

impl LetterFont {
    pub fn is_builtin(&self) -> bool {
        matches!(self, LetterFont::Builtin)
    }

    /// Rasterizes `letter` at `px` pixels, cropped to its ink bounds.
    ///
    /// Returns `None` for characters the font has no outline or bitmap for.
    pub fn rasterize(&self, letter: char, px: f32) -> Option<GlyphMask> {
        match self {
            LetterFont::Outline(font) => rasterize_outline(font, letter, px),
            LetterFont::Builtin => builtin::rasterize(letter, px),
        }
    }
}

/// Scale that makes one em `px` pixels tall.
///
/// `PxScale` measures ascent to descent, which is taller than the em box in
/// most fonts.
fn em_scale(font: &FontVec, px: f32) -> PxScale {
    match font.units_per_em() {
        Some(upem) if upem > 0.0 => PxScale::from(px * font.height_unscaled() / upem),
        _ => PxScale::from(px),
    }
}

fn rasterize_outline(font: &FontVec, letter: char, px: f32) -> Option<GlyphMask> {
    let glyph = font
        .glyph_id(letter)
        .with_scale_and_position(em_scale(font, px), point(0.0, 0.0));
    let outlined = font.outline_glyph(glyph)?;

    let bounds = outlined.px_bounds();
    let width = bounds.width() as u32;
    let height = bounds.height() as u32;
    if width == 0 || height == 0 {
        return None;
    }

    let mut coverage = vec![0.0; (width * height) as usize];
    outlined.draw(|x, y, c| {
        if x < width && y < height {
            coverage[(y * width + x) as usize] = c.clamp(0.0, 1.0);
        }
    });

    Some(GlyphMask {
        width,
        height,
        coverage,
    })
}

/// Ordered list of font files tried before falling back to the built-in font.
#[derive(Debug, Clone)]
pub struct FontChain {
    candidates: Vec<PathBuf>,
}

impl FontChain {
    pub fn new<I, P>(candidates: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            candidates: candidates.into_iter().map(Into::into).collect(),
        }
    }

    /// The usual Linux and macOS locations of a bold sans-serif face.
    pub fn system() -> Self {
        Self::new(FONT_CANDIDATES)
    }

    /// Returns the first candidate that loads, or [`LetterFont::Builtin`].
    ///
    /// Failures are logged and never returned.
    pub fn load(&self) -> LetterFont {
        for path in &self.candidates {
            match load_font_file(path) {
                Ok(font) => {
                    info!("Using font {}", path.display());
                    return LetterFont::Outline(font);
                }
                Err(e) => debug!("Skipping font candidate: {}", e),
            }
        }

        info!("No font candidate could be loaded, using built-in glyphs");
        LetterFont::Builtin
    }
}

/// Loads a TrueType/OpenType file; collections (`.ttc`) yield their first face.
pub fn load_font_file(path: &Path) -> Result<FontVec, FontLoadError> {
    let data = fs::read(path).map_err(|source| FontLoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    FontVec::try_from_vec_and_index(data, 0).map_err(|_| FontLoadError::Parse {
        path: path.to_path_buf(),
    })
}
