pub mod layout;

use image::{Pixel, Rgba, RgbaImage};
use imageproc::drawing::{
    draw_filled_ellipse_mut, draw_filled_rect_mut, draw_hollow_rect_mut, draw_line_segment_mut,
};
use log::debug;

use crate::constants::{
    BACK_PAGE_FILL, BACK_PAGE_OUTLINE, BADGE_LETTER, BORDER_COLOR, FILL_COLOR, FRONT_PAGE_FILL,
    FRONT_PAGE_OUTLINE, TEXT_COLOR, TEXT_LINE_COLOR, TRANSPARENT,
};
use crate::font::{GlyphMask, LetterFont};
use crate::icon::IconSize;

pub use layout::{BadgeLayout, LineSpan, PagesLayout, PixelBox};

/// Renders one complete icon into a fresh transparent canvas.
pub fn render_icon(size: IconSize, font: &LetterFont) -> RgbaImage {
    let layout = BadgeLayout::for_size(size.get());
    let mut canvas = RgbaImage::from_pixel(layout.size, layout.size, TRANSPARENT);

    draw_badge(&mut canvas, &layout);
    match &layout.pages {
        Some(pages) => draw_stacked_pages(&mut canvas, pages),
        None => draw_letter(&mut canvas, &layout, font, BADGE_LETTER),
    }

    canvas
}

/// Filled circle with a border ring of `layout.stroke` pixels.
pub fn draw_badge(canvas: &mut RgbaImage, layout: &BadgeLayout) {
    debug!(
        "Badge: center={:?} radius={} stroke={}",
        layout.center, layout.radius, layout.stroke
    );
    draw_filled_ellipse_mut(
        canvas,
        layout.center,
        layout.radius,
        layout.radius,
        BORDER_COLOR,
    );
    draw_filled_ellipse_mut(
        canvas,
        layout.center,
        layout.inner_radius(),
        layout.inner_radius(),
        FILL_COLOR,
    );
}

/// Back page, front page on top, then two strokes standing in for text.
pub fn draw_stacked_pages(canvas: &mut RgbaImage, pages: &PagesLayout) {
    debug!("Pages: back={:?} front={:?}", pages.back, pages.front);
    draw_page(canvas, &pages.back, BACK_PAGE_FILL, BACK_PAGE_OUTLINE);
    draw_page(canvas, &pages.front, FRONT_PAGE_FILL, FRONT_PAGE_OUTLINE);

    for line in &pages.lines {
        draw_line_segment_mut(
            canvas,
            (line.x0 as f32, line.y as f32),
            (line.x1 as f32, line.y as f32),
            TEXT_LINE_COLOR,
        );
    }
}

fn draw_page(canvas: &mut RgbaImage, page: &PixelBox, fill: Rgba<u8>, outline: Rgba<u8>) {
    let rect = page.to_rect();
    draw_filled_rect_mut(canvas, rect, fill);
    draw_hollow_rect_mut(canvas, rect, outline);
}

/// Draws `letter` with its ink box centred on the canvas centre.
///
/// Nothing is drawn if the font has no glyph for `letter`.
pub fn draw_letter(canvas: &mut RgbaImage, layout: &BadgeLayout, font: &LetterFont, letter: char) {
    let Some(mask) = font.rasterize(letter, layout.font_px) else {
        debug!("No glyph for {:?}", letter);
        return;
    };

    let left = layout.center.0 - (mask.width / 2) as i32;
    let top = layout.center.1 - (mask.height / 2) as i32;
    debug!(
        "Letter {:?}: {}x{} at ({}, {})",
        letter, mask.width, mask.height, left, top
    );
    blend_mask(canvas, &mask, left, top, TEXT_COLOR);
}

fn blend_mask(canvas: &mut RgbaImage, mask: &GlyphMask, left: i32, top: i32, color: Rgba<u8>) {
    let (width, height) = canvas.dimensions();

    for y in 0..mask.height {
        for x in 0..mask.width {
            let coverage = mask.at(x, y);
            if coverage <= 0.0 {
                continue;
            }

            let px = left + x as i32;
            let py = top + y as i32;
            if px < 0 || py < 0 || px as u32 >= width || py as u32 >= height {
                continue;
            }

            let alpha = (color[3] as f32 * coverage).round() as u8;
            let ink = Rgba([color[0], color[1], color[2], alpha]);
            canvas.get_pixel_mut(px as u32, py as u32).blend(&ink);
        }
    }
}
