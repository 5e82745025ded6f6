//! Per-device corner touch-ups.
//!
//! Some frames have a corner radius large enough that a screenshot still peeks out at the screen
//! corners after mask clipping. Those devices are listed here by name, with the squares that must
//! show frame only. New devices showing the same artifact need their own entry and a visual check;
//! nothing here is derived from the mask.

use crate::foundation::core::ScreenRect;

/// Corner of the screen rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScreenCorner {
    /// Top-left corner.
    TopLeft,
    /// Top-right corner.
    TopRight,
    /// Bottom-left corner.
    BottomLeft,
    /// Bottom-right corner.
    BottomRight,
}

/// Square of `size` pixels anchored at one corner of the screen rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CornerPatch {
    /// Anchor corner.
    pub corner: ScreenCorner,
    /// Edge length in pixels.
    pub size: u32,
}

impl CornerPatch {
    const fn new(corner: ScreenCorner, size: u32) -> Self {
        Self { corner, size }
    }

    /// Patch square in frame coordinates, clamped to `screen`.
    pub fn square(self, screen: ScreenRect) -> ScreenRect {
        let w = self.size.min(screen.width);
        let h = self.size.min(screen.height);
        let right = screen.x + (screen.width - w);
        let bottom = screen.y + (screen.height - h);
        match self.corner {
            ScreenCorner::TopLeft => ScreenRect::new(screen.x, screen.y, w, h),
            ScreenCorner::TopRight => ScreenRect::new(right, screen.y, w, h),
            ScreenCorner::BottomLeft => ScreenRect::new(screen.x, bottom, w, h),
            ScreenCorner::BottomRight => ScreenRect::new(right, bottom, w, h),
        }
    }
}

const ALL_CORNERS_5PX: &[CornerPatch] = &[
    CornerPatch::new(ScreenCorner::TopLeft, 5),
    CornerPatch::new(ScreenCorner::TopRight, 5),
    CornerPatch::new(ScreenCorner::BottomLeft, 5),
    CornerPatch::new(ScreenCorner::BottomRight, 5),
];

static CORNER_PATCHES: &[(&str, &[CornerPatch])] = &[("iPhone 12 Pro Max", ALL_CORNERS_5PX)];

/// Corner patches registered for `device_name` (empty for most devices).
pub fn corner_patches(device_name: &str) -> &'static [CornerPatch] {
    CORNER_PATCHES
        .iter()
        .find(|(name, _)| *name == device_name)
        .map(|(_, patches)| *patches)
        .unwrap_or(&[])
}

#[cfg(test)]
#[path = "../../tests/unit/render/patches.rs"]
mod tests;
