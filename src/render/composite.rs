use image::imageops::{self, FilterType};

use crate::foundation::core::{Raster, ScreenRect};
use crate::foundation::error::{FramerError, FramerResult};
use crate::foundation::math::mul_div255_u8;
use crate::render::mask::ScreenMask;
use crate::render::patches::CornerPatch;

/// One premultiplied RGBA8 pixel.
pub type PremulRgba8 = [u8; 4];

/// Premultiplied source-over.
pub fn over(dst: PremulRgba8, src: PremulRgba8) -> PremulRgba8 {
    match src[3] {
        0 => return dst,
        255 => return src,
        _ => {}
    }

    let inv = 255u16 - u16::from(src[3]);
    let mut out = [0u8; 4];
    for i in 0..4 {
        out[i] = src[i].saturating_add(mul_div255_u8(u16::from(dst[i]), inv));
    }
    out
}

/// Layer `src` over `dst` pixel by pixel; both are premultiplied RGBA8 of equal length.
pub fn over_in_place(dst: &mut [u8], src: &[u8]) -> FramerResult<()> {
    if dst.len() != src.len() || !dst.len().is_multiple_of(4) {
        return Err(FramerError::validation(
            "over_in_place expects equal-length rgba8 buffers",
        ));
    }
    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        let out = over([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]]);
        d.copy_from_slice(&out);
    }
    Ok(())
}

/// Put `screenshot` behind `frame`.
///
/// The screenshot is placed at `screen` (scaled to it when sizes differ), clipped by `mask`, then
/// covered by the frame. `patches` squares finally get their screenshot contribution removed,
/// leaving only frame pixels there. The result has the frame's dimensions.
#[tracing::instrument(skip_all, fields(screen = %screen, patches = patches.len()))]
pub fn composite(
    screenshot: &Raster,
    frame: &Raster,
    mask: &ScreenMask,
    screen: ScreenRect,
    patches: &[CornerPatch],
) -> FramerResult<Raster> {
    if (mask.width(), mask.height()) != (frame.width(), frame.height()) {
        return Err(FramerError::validation(format!(
            "screen mask is {}x{} but frame is {}",
            mask.width(),
            mask.height(),
            frame.size()
        )));
    }
    if !screen.fits_within(frame.size()) {
        return Err(FramerError::validation(format!(
            "screen rect {screen} exceeds frame {}",
            frame.size()
        )));
    }

    let scaled;
    let fitted = if screenshot.size() == screen.size() {
        screenshot
    } else {
        scaled = scale_to(screenshot, screen)?;
        &scaled
    };

    let mut out = clip_screenshot(fitted, mask, screen)?;
    over_in_place(out.data_mut(), frame.data())?;

    for patch in patches {
        restore_frame_only(&mut out, frame, patch.square(screen));
    }
    Ok(out)
}

/// Draw `shot` into a transparent mask-sized canvas at `screen`, keeping inside pixels only.
fn clip_screenshot(shot: &Raster, mask: &ScreenMask, screen: ScreenRect) -> FramerResult<Raster> {
    let mut out = Raster::transparent(mask.width(), mask.height())?;
    if shot.width() == 0 || shot.height() == 0 {
        return Ok(out);
    }

    let stride = out.stride();
    let x0 = screen.x as usize;
    let x1 = x0 + screen.width as usize;
    let mask_w = mask.width() as usize;

    let out_rows = out
        .data_mut()
        .chunks_exact_mut(stride)
        .skip(screen.y as usize);
    let mask_rows = mask.data().chunks_exact(mask_w).skip(screen.y as usize);
    let shot_rows = shot.data().chunks_exact(shot.stride());

    for ((out_row, mask_row), shot_row) in out_rows.zip(mask_rows).zip(shot_rows) {
        let dst = out_row[x0 * 4..x1 * 4].chunks_exact_mut(4);
        for ((d, s), &m) in dst.zip(shot_row.chunks_exact(4)).zip(&mask_row[x0..x1]) {
            if m == ScreenMask::INSIDE {
                d.copy_from_slice(s);
            }
        }
    }
    Ok(out)
}

/// Stretch `shot` onto the screen size. Premultiplied data filters correctly as-is.
fn scale_to(shot: &Raster, screen: ScreenRect) -> FramerResult<Raster> {
    if shot.width() == 0 || shot.height() == 0 || screen.width == 0 || screen.height == 0 {
        return Raster::transparent(screen.width, screen.height);
    }
    let buf = image::RgbaImage::from_raw(shot.width(), shot.height(), shot.data().to_vec())
        .ok_or_else(|| FramerError::graphics("screenshot buffer does not match its dimensions"))?;
    let resized = imageops::resize(&buf, screen.width, screen.height, FilterType::Triangle);
    Raster::from_premul_rgba8(screen.width, screen.height, resized.into_raw())
}

fn restore_frame_only(out: &mut Raster, frame: &Raster, square: ScreenRect) {
    let src = frame.data();
    for y in square.y..square.y + square.height {
        let start = out.offset(square.x, y);
        let end = start + square.width as usize * 4;
        out.data_mut()[start..end].copy_from_slice(&src[start..end]);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/composite.rs"]
mod tests;
