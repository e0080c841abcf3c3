#![allow(dead_code)]

use image::{Rgba, RgbaImage};
use lib_badge::constants::TEXT_COLOR;

/// Inclusive bounds `(left, top, right, bottom)` of pixels matching `keep`.
pub fn bounds_where(canvas: &RgbaImage, keep: impl Fn(&Rgba<u8>) -> bool) -> Option<(u32, u32, u32, u32)> {
    let mut found: Option<(u32, u32, u32, u32)> = None;
    for (x, y, pixel) in canvas.enumerate_pixels() {
        if !keep(pixel) {
            continue;
        }
        found = Some(match found {
            None => (x, y, x, y),
            Some((l, t, r, b)) => (l.min(x), t.min(y), r.max(x), b.max(y)),
        });
    }
    found
}

/// Pixels carrying any amount of the white letter over the blue badge.
pub fn is_letter_ink(pixel: &Rgba<u8>) -> bool {
    *pixel == TEXT_COLOR || (pixel[0] > 74 && pixel[1] > 144 && pixel[3] == 255)
}

pub fn center_of(bounds: (u32, u32, u32, u32)) -> (f32, f32) {
    let (l, t, r, b) = bounds;
    ((l + r) as f32 / 2.0, (t + b) as f32 / 2.0)
}
