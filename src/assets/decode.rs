use std::io::Cursor;

use anyhow::Context;

use crate::foundation::core::Raster;
use crate::foundation::error::FramerResult;

/// Decode PNG bytes into a premultiplied raster.
pub fn decode_png(bytes: &[u8]) -> FramerResult<Raster> {
    let dyn_img = image::load_from_memory_with_format(bytes, image::ImageFormat::Png)
        .context("decode png from memory")?;
    Ok(Raster::from_straight_rgba8(dyn_img.to_rgba8()))
}

/// Encode a raster as straight-alpha RGBA8 PNG bytes.
pub fn encode_png(raster: &Raster) -> FramerResult<Vec<u8>> {
    let rgba = raster.to_straight_rgba8()?;
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(rgba)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .context("encode png")?;
    Ok(buf)
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
