use imageproc::rect::Rect;

use crate::constants::{FONT_SCALE, PAGES_MIN_SIZE};

/// Axis-aligned box with inclusive pixel corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelBox {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl PixelBox {
    pub fn centered(center: (i32, i32), width: i32, height: i32) -> Self {
        Self {
            left: center.0 - width / 2,
            top: center.1 - height / 2,
            right: center.0 + width / 2,
            bottom: center.1 + height / 2,
        }
    }

    pub fn shifted(&self, by: i32) -> Self {
        Self {
            left: self.left + by,
            top: self.top + by,
            right: self.right + by,
            bottom: self.bottom + by,
        }
    }

    pub fn width(&self) -> u32 {
        (self.right - self.left + 1) as u32
    }

    pub fn height(&self) -> u32 {
        (self.bottom - self.top + 1) as u32
    }

    pub fn to_rect(&self) -> Rect {
        Rect::at(self.left, self.top).of_size(self.width(), self.height())
    }
}

/// A 1 px horizontal stroke from `x0` to `x1` inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineSpan {
    pub x0: i32,
    pub x1: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagesLayout {
    pub offset: i32,
    pub back: PixelBox,
    pub front: PixelBox,
    pub lines: [LineSpan; 2],
}

impl PagesLayout {
    fn for_size(size: u32, center: (i32, i32)) -> Self {
        let size = size as i32;
        let page_width = size / 3;
        let page_height = size / 4;
        let offset = size / 12;

        let front = PixelBox::centered(center, page_width, page_height);
        let back = front.shifted(offset);

        let line_width = page_width / 2;
        let line_at = |y| LineSpan {
            x0: center.0 - line_width / 2,
            x1: center.0 + line_width / 2,
            y,
        };

        Self {
            offset,
            back,
            front,
            lines: [line_at(center.1 - page_height / 4), line_at(center.1)],
        }
    }
}

/// Every coordinate the renderer needs for one icon size.
///
/// All values derive from the edge length through integer division, so the
/// same size always yields the same layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BadgeLayout {
    pub size: u32,
    pub center: (i32, i32),
    pub margin: u32,
    pub stroke: u32,
    /// Outer radius of the badge circle, border included.
    pub radius: i32,
    /// `None` below [`PAGES_MIN_SIZE`], where the letter is drawn instead.
    pub pages: Option<PagesLayout>,
    pub font_px: f32,
}

impl BadgeLayout {
    pub fn for_size(size: u32) -> Self {
        let margin = (size / 16).max(1);
        let stroke = (size / 32).max(1);
        let half = (size / 2) as i32;
        let center = (half, half);
        let radius = (size.saturating_sub(2 * margin) / 2) as i32;

        let pages = (size >= PAGES_MIN_SIZE).then(|| PagesLayout::for_size(size, center));

        Self {
            size,
            center,
            margin,
            stroke,
            radius,
            pages,
            font_px: (size as f32 * FONT_SCALE).floor(),
        }
    }

    /// Radius of the fill disc inside the border ring.
    pub fn inner_radius(&self) -> i32 {
        (self.radius - self.stroke as i32).max(0)
    }
}
