use rayon::prelude::*;

use crate::foundation::core::{Raster, try_alloc_zeroed};
use crate::foundation::error::{FramerError, FramerResult};

/// Single-channel clip mask derived from a frame's alpha channel.
///
/// One byte per frame pixel, row-major: [`ScreenMask::OUTSIDE`] where screenshot content must be
/// discarded, [`ScreenMask::INSIDE`] where it shows through.
#[derive(Clone, PartialEq, Eq)]
pub struct ScreenMask {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl std::fmt::Debug for ScreenMask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScreenMask")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

impl ScreenMask {
    /// Mask value for pixels outside the screen opening.
    pub const OUTSIDE: u8 = 0xFF;
    /// Mask value for pixels inside the screen opening.
    pub const INSIDE: u8 = 0x00;

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Mask bytes, one per pixel.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Mask value at `(x, y)`, or `None` when out of bounds.
    pub fn get(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.data[y as usize * self.width as usize + x as usize])
    }

    /// Return `true` when screenshot content at `(x, y)` is kept.
    pub fn is_inside(&self, x: u32, y: u32) -> bool {
        self.get(x, y) == Some(Self::INSIDE)
    }

    /// Mask row `y`.
    ///
    /// # Panics
    ///
    /// When `y >= height`.
    pub fn row(&self, y: u32) -> &[u8] {
        let w = self.width as usize;
        let start = y as usize * w;
        &self.data[start..start + w]
    }
}

/// Derive the screen mask of `frame`.
///
/// Each row is scanned inwards from both ends: everything up to the first fully opaque pixel on
/// either side is outside, everything from that pixel to its counterpart on the other side is
/// inside. Translucent pixels between the two opaque borders (anti-aliased inner bezel edges)
/// therefore count as screen. A row without any opaque pixel is entirely outside.
///
/// Both opaque border pixels are themselves inside: the span is `[first, last]`, not the
/// half-open `[first, last)`. The frame is drawn over the clipped screenshot, so an opaque border
/// hides whatever the mask lets through there and both choices give the same output.
///
/// Rows are independent and are scanned in parallel on the current rayon pool; the call returns
/// once every row is done.
#[tracing::instrument(skip(frame), fields(width = frame.width(), height = frame.height()))]
pub fn build_screen_mask(frame: &Raster) -> FramerResult<ScreenMask> {
    let (w, h) = (frame.width() as usize, frame.height() as usize);
    let len = w
        .checked_mul(h)
        .ok_or_else(|| FramerError::graphics("screen mask size overflow"))?;
    let mut data = try_alloc_zeroed(len)?;

    if len > 0 {
        data.par_chunks_exact_mut(w)
            .zip(frame.data().par_chunks_exact(w * 4))
            .for_each(|(mask_row, frame_row)| scan_row(frame_row, mask_row));
    }

    Ok(ScreenMask {
        width: frame.width(),
        height: frame.height(),
        data,
    })
}

fn scan_row(frame_row: &[u8], mask_row: &mut [u8]) {
    let opaque = |px: &[u8]| px[3] == 0xFF;
    let Some(first) = frame_row.chunks_exact(4).position(opaque) else {
        mask_row.fill(ScreenMask::OUTSIDE);
        return;
    };
    let last = frame_row
        .chunks_exact(4)
        .rposition(opaque)
        .unwrap_or(first);

    mask_row[..first].fill(ScreenMask::OUTSIDE);
    mask_row[first..=last].fill(ScreenMask::INSIDE);
    mask_row[last + 1..].fill(ScreenMask::OUTSIDE);
}

#[cfg(test)]
#[path = "../../tests/unit/render/mask.rs"]
mod tests;
