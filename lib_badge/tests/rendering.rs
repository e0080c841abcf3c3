mod common;

use common::{bounds_where, center_of, is_letter_ink};
use lib_badge::constants::{
    BACK_PAGE_FILL, BACK_PAGE_OUTLINE, BORDER_COLOR, FILL_COLOR, FRONT_PAGE_FILL,
    FRONT_PAGE_OUTLINE, ICON_SIZES, TEXT_LINE_COLOR, TRANSPARENT,
};
use lib_badge::render::BadgeLayout;
use lib_badge::{create_icon, render_icon, FontChain, IconSize, LetterFont};

fn size(px: u32) -> IconSize {
    IconSize::new(px).unwrap()
}

#[test]
fn test_written_dimensions() {
    let dir = tempfile::tempdir().unwrap();
    let font = FontChain::system().load();

    for px in ICON_SIZES {
        let path = dir.path().join(format!("icon{}.png", px));
        create_icon(size(px), &path, &font).unwrap();

        let decoded = image::open(&path).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (px, px));
    }
}

#[test]
fn test_overwrites_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("icon48.png");
    std::fs::write(&path, b"stale").unwrap();

    create_icon(size(48), &path, &LetterFont::Builtin).unwrap();

    let decoded = image::open(&path).unwrap().to_rgba8();
    assert_eq!(decoded.dimensions(), (48, 48));
}

#[test]
fn test_pages_are_offset() {
    for px in [48, 128] {
        let canvas = render_icon(size(px), &LetterFont::Builtin);
        let pages = BadgeLayout::for_size(px).pages.unwrap();
        let (back, front) = (pages.back, pages.front);

        // Each outline sits on its own box corner
        let front_outline = bounds_where(&canvas, |p| *p == FRONT_PAGE_OUTLINE).unwrap();
        assert_eq!(
            front_outline,
            (front.left as u32, front.top as u32, front.right as u32, front.bottom as u32)
        );
        assert_eq!(
            *canvas.get_pixel(back.right as u32, back.bottom as u32),
            BACK_PAGE_OUTLINE
        );

        // Offset holds on both axes
        assert_eq!(back.left - front.left, (px / 12) as i32);
        assert_eq!(back.top - front.top, (px / 12) as i32);

        // Back page shows beside and below the front page
        assert_eq!(
            *canvas.get_pixel(back.right as u32 - 1, back.bottom as u32 - 1),
            BACK_PAGE_FILL
        );
        assert_eq!(
            *canvas.get_pixel(front.left as u32 + 1, front.bottom as u32 - 1),
            FRONT_PAGE_FILL
        );
    }
}

#[test]
fn test_text_lines_on_front_page() {
    let canvas = render_icon(size(128), &LetterFont::Builtin);
    let pages = BadgeLayout::for_size(128).pages.unwrap();

    for line in pages.lines {
        for x in line.x0..=line.x1 {
            assert_eq!(*canvas.get_pixel(x as u32, line.y as u32), TEXT_LINE_COLOR);
        }
        assert_eq!(*canvas.get_pixel(line.x0 as u32 - 1, line.y as u32), FRONT_PAGE_FILL);
    }
}

#[test]
fn test_badge_circle_inscribed() {
    for px in ICON_SIZES {
        let canvas = render_icon(size(px), &LetterFont::Builtin);
        let layout = BadgeLayout::for_size(px);

        let badge = bounds_where(&canvas, |p| *p != TRANSPARENT).unwrap();
        let m = layout.margin;
        assert_eq!(badge, (m, m, px - m, px - m));
        assert_eq!(*canvas.get_pixel(m, px / 2), BORDER_COLOR);
    }
}

#[test]
fn test_builtin_letter_centered() {
    let canvas = render_icon(size(16), &LetterFont::Builtin);

    let ink = bounds_where(&canvas, is_letter_ink).unwrap();
    let (cx, cy) = center_of(ink);
    assert!((cx - 8.0).abs() <= 1.0, "x center {}", cx);
    assert!((cy - 8.0).abs() <= 1.0, "y center {}", cy);

    // Letter sits inside the fill, never on the ring
    assert_eq!(*canvas.get_pixel(8, 2), FILL_COLOR);
}

#[test]
fn test_system_font_letter_near_center() {
    let font = FontChain::system().load();
    let canvas = render_icon(size(16), &font);

    let ink = bounds_where(&canvas, is_letter_ink).expect("letter was drawn");
    let (cx, cy) = center_of(ink);
    assert!((cx - 8.0).abs() <= 1.0, "x center {}", cx);
    assert!((cy - 8.0).abs() <= 1.0, "y center {}", cy);
}

#[test]
fn test_output_is_deterministic() {
    let dir = tempfile::tempdir().unwrap();
    let font = FontChain::system().load();

    for px in ICON_SIZES {
        let first = dir.path().join("first.png");
        let second = dir.path().join("second.png");
        create_icon(size(px), &first, &font).unwrap();
        create_icon(size(px), &second, &font).unwrap();

        assert_eq!(std::fs::read(first).unwrap(), std::fs::read(second).unwrap());
    }
}
