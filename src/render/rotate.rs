use std::f64::consts::FRAC_PI_2;

use kurbo::{Affine, Point, Vec2};

use crate::foundation::core::{PixelSize, Raster};
use crate::foundation::error::FramerResult;

/// Transform that maps source coordinates into a canvas rotated by `turns` clockwise quarter
/// turns, plus that canvas' size.
///
/// Built as: move the origin to the output center, rotate, then move back by the *input*
/// half-extent. Using the input extent for the last step is what keeps odd turns from cropping.
pub(crate) fn rotation_affine(src: PixelSize, turns: u8) -> (Affine, PixelSize) {
    let turns = turns % 4;
    let dst = if turns % 2 == 1 {
        src.transposed()
    } else {
        src
    };
    let affine = Affine::translate(Vec2::new(
        f64::from(dst.width) / 2.0,
        f64::from(dst.height) / 2.0,
    )) * Affine::rotate(f64::from(turns) * FRAC_PI_2)
        * Affine::translate(Vec2::new(
            -f64::from(src.width) / 2.0,
            -f64::from(src.height) / 2.0,
        ));
    (affine, dst)
}

/// Rotate `image` clockwise by `turns` quarter turns (taken mod 4).
///
/// Sampling is nearest-neighbour at pixel centers, so every output pixel is an exact copy of one
/// source pixel and rotations compose losslessly.
#[tracing::instrument(skip(image), fields(width = image.width(), height = image.height()))]
pub fn rotate(image: &Raster, turns: u8) -> FramerResult<Raster> {
    let (affine, dst) = rotation_affine(image.size(), turns);
    let mut out = Raster::transparent(dst.width, dst.height)?;
    if dst.width == 0 || dst.height == 0 {
        return Ok(out);
    }

    let inv = affine.inverse();
    let (src_w, src_h) = (f64::from(image.width()), f64::from(image.height()));
    let src = image.data();
    let stride = out.stride();

    for (dy, row) in out.data_mut().chunks_exact_mut(stride).enumerate() {
        for (dx, px) in row.chunks_exact_mut(4).enumerate() {
            let p = inv * Point::new(dx as f64 + 0.5, dy as f64 + 0.5);
            let (sx, sy) = (p.x.floor(), p.y.floor());
            if sx < 0.0 || sy < 0.0 || sx >= src_w || sy >= src_h {
                continue;
            }
            let i = image.offset(sx as u32, sy as u32);
            px.copy_from_slice(&src[i..i + 4]);
        }
    }
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/render/rotate.rs"]
mod tests;
