use super::GlyphMask;

pub const CELL_WIDTH: u32 = 5;
pub const CELL_HEIGHT: u32 = 7;

// 5x7 capitals, one byte per row, bit 4 is the leftmost column.
static CAPITALS: [[u8; 7]; 26] = [
    [0x0E, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11], // A
    [0x1E, 0x11, 0x11, 0x1E, 0x11, 0x11, 0x1E], // B
    [0x0E, 0x11, 0x10, 0x10, 0x10, 0x11, 0x0E], // C
    [0x1C, 0x12, 0x11, 0x11, 0x11, 0x12, 0x1C], // D
    [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x1F], // E
    [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x10], // F
    [0x0E, 0x11, 0x10, 0x17, 0x11, 0x11, 0x0F], // G
    [0x11, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11], // H
    [0x0E, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0E], // I
    [0x07, 0x02, 0x02, 0x02, 0x02, 0x12, 0x0C], // J
    [0x11, 0x12, 0x14, 0x18, 0x14, 0x12, 0x11], // K
    [0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x1F], // L
    [0x11, 0x1B, 0x15, 0x15, 0x11, 0x11, 0x11], // M
    [0x11, 0x11, 0x19, 0x15, 0x13, 0x11, 0x11], // N
    [0x0E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E], // O
    [0x1E, 0x11, 0x11, 0x1E, 0x10, 0x10, 0x10], // P
    [0x0E, 0x11, 0x11, 0x11, 0x15, 0x12, 0x0D], // Q
    [0x1E, 0x11, 0x11, 0x1E, 0x14, 0x12, 0x11], // R
    [0x0F, 0x10, 0x10, 0x0E, 0x01, 0x01, 0x1E], // S
    [0x1F, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04], // T
    [0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E], // U
    [0x11, 0x11, 0x11, 0x11, 0x11, 0x0A, 0x04], // V
    [0x11, 0x11, 0x11, 0x15, 0x15, 0x15, 0x0A], // W
    [0x11, 0x11, 0x0A, 0x04, 0x0A, 0x11, 0x11], // X
    [0x11, 0x11, 0x11, 0x0A, 0x04, 0x04, 0x04], // Y
    [0x1F, 0x01, 0x02, 0x04, 0x08, 0x10, 0x1F], // Z
];

fn rows(letter: char) -> Option<&'static [u8; 7]> {
    letter
        .is_ascii_uppercase()
        .then(|| &CAPITALS[(letter as u8 - b'A') as usize])
}

/// Integer upscale factor so the glyph is roughly `px` tall.
pub fn scale_for(px: f32) -> u32 {
    ((px as u32) / CELL_HEIGHT).max(1)
}

/// Nearest-neighbour rendering of a built-in capital at `px` pixels.
pub fn rasterize(letter: char, px: f32) -> Option<GlyphMask> {
    let rows = rows(letter)?;
    let scale = scale_for(px);
    let width = CELL_WIDTH * scale;
    let height = CELL_HEIGHT * scale;

    let mut coverage = vec![0.0; (width * height) as usize];
    for y in 0..height {
        let bits = rows[(y / scale) as usize];
        for x in 0..width {
            let column = x / scale;
            if bits & (0x10 >> column) != 0 {
                coverage[(y * width + x) as usize] = 1.0;
            }
        }
    }

    Some(GlyphMask {
        width,
        height,
        coverage,
    })
}
