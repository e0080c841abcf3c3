use image::Rgba;

/// Edge lengths the generator produces, in order.
pub const ICON_SIZES: [u32; 3] = [16, 48, 128];

/// Sizes at or above this get the stacked pages, smaller ones the letter.
pub const PAGES_MIN_SIZE: u32 = 48;

pub const FILE_PREFIX: &str = "icon";
pub const FILE_EXT: &str = "png";

pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

// Badge palette
pub const FILL_COLOR: Rgba<u8> = Rgba([74, 144, 226, 255]); // #4a90e2
pub const BORDER_COLOR: Rgba<u8> = Rgba([53, 122, 189, 255]); // #357abd
pub const TEXT_COLOR: Rgba<u8> = Rgba([255, 255, 255, 255]);

// Stacked pages
pub const BACK_PAGE_FILL: Rgba<u8> = Rgba([255, 255, 255, 200]);
pub const BACK_PAGE_OUTLINE: Rgba<u8> = Rgba([200, 200, 200, 255]);
pub const FRONT_PAGE_FILL: Rgba<u8> = Rgba([255, 255, 255, 255]);
pub const FRONT_PAGE_OUTLINE: Rgba<u8> = Rgba([180, 180, 180, 255]);
pub const TEXT_LINE_COLOR: Rgba<u8> = Rgba([100, 100, 100, 255]);

/// Letter drawn on the small icons.
pub const BADGE_LETTER: char = 'P';

/// Font pixel size relative to the icon edge.
pub const FONT_SCALE: f32 = 0.7;

/// System fonts tried, in order, before the built-in bitmap font.
pub const FONT_CANDIDATES: [&str; 2] = [
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/System/Library/Fonts/Helvetica.ttc",
];

/// `icon<size>.png`
pub fn icon_file_name(size: u32) -> String {
    format!("{}{}.{}", FILE_PREFIX, size, FILE_EXT)
}
