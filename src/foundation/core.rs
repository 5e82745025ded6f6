use crate::foundation::error::{FramerError, FramerResult};
use crate::foundation::math::{premultiply_rgba8_in_place, unpremultiply_rgba8_in_place};

/// Width and height of an image in pixels.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize, Default,
)]
pub struct PixelSize {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl PixelSize {
    /// Construct a size from width and height.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Same size with width and height exchanged.
    pub const fn transposed(self) -> Self {
        Self {
            width: self.height,
            height: self.width,
        }
    }
}

impl std::fmt::Display for PixelSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Axis-aligned pixel rectangle in image coordinates (origin top-left, y down).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct ScreenRect {
    /// Left edge.
    pub x: u32,
    /// Top edge.
    pub y: u32,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl ScreenRect {
    /// Construct a rectangle from origin and size.
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Size of the rectangle.
    pub const fn size(self) -> PixelSize {
        PixelSize::new(self.width, self.height)
    }

    /// Exclusive right edge.
    pub fn right(self) -> u64 {
        u64::from(self.x) + u64::from(self.width)
    }

    /// Exclusive bottom edge.
    pub fn bottom(self) -> u64 {
        u64::from(self.y) + u64::from(self.height)
    }

    /// Return `true` when the rectangle lies entirely within an image of `bounds`.
    pub fn fits_within(self, bounds: PixelSize) -> bool {
        self.right() <= u64::from(bounds.width) && self.bottom() <= u64::from(bounds.height)
    }

    pub(crate) fn to_kurbo(self) -> kurbo::Rect {
        kurbo::Rect::new(
            f64::from(self.x),
            f64::from(self.y),
            self.right() as f64,
            self.bottom() as f64,
        )
    }

    /// Snap a transformed rectangle back onto the pixel grid.
    pub(crate) fn from_kurbo_rounded(r: kurbo::Rect) -> Self {
        let r = r.round();
        Self {
            x: r.x0.max(0.0) as u32,
            y: r.y0.max(0.0) as u32,
            width: r.width().max(0.0) as u32,
            height: r.height().max(0.0) as u32,
        }
    }
}

impl std::fmt::Display for ScreenRect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({}, {}, {}, {})",
            self.x, self.y, self.width, self.height
        )
    }
}

/// Premultiplied RGBA8 (r,g,b already multiplied by a).
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8Premul {
    /// Red channel premultiplied by alpha.
    pub r: u8,
    /// Green channel premultiplied by alpha.
    pub g: u8,
    /// Blue channel premultiplied by alpha.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8Premul {
    /// Fully transparent black.
    pub fn transparent() -> Self {
        Self {
            r: 0,
            g: 0,
            b: 0,
            a: 0,
        }
    }

    /// Convert straight-alpha RGBA8 into premultiplied RGBA8.
    pub fn from_straight_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        let mut px = [r, g, b, a];
        premultiply_rgba8_in_place(&mut px);
        Self::from(px)
    }

    /// Channels in memory order.
    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl From<[u8; 4]> for Rgba8Premul {
    fn from(px: [u8; 4]) -> Self {
        Self {
            r: px[0],
            g: px[1],
            b: px[2],
            a: px[3],
        }
    }
}

/// Owned raster image: premultiplied RGBA8, tightly packed, row-major.
///
/// Every pipeline stage (decode, rotate, composite) hands back a fresh `Raster`; buffers are never
/// shared between stages except through `Arc` caches, which never mutate.
#[derive(Clone, PartialEq, Eq)]
pub struct Raster {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl std::fmt::Debug for Raster {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Raster")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bytes", &self.data.len())
            .finish()
    }
}

impl Raster {
    /// Allocate a fully transparent raster.
    pub fn transparent(width: u32, height: u32) -> FramerResult<Self> {
        let len = rgba8_len(width, height)?;
        Ok(Self {
            width,
            height,
            data: try_alloc_zeroed(len)?,
        })
    }

    /// Allocate a raster filled with one premultiplied color.
    pub fn filled(width: u32, height: u32, color: Rgba8Premul) -> FramerResult<Self> {
        let mut out = Self::transparent(width, height)?;
        let px = color.to_array();
        for dst in out.data.chunks_exact_mut(4) {
            dst.copy_from_slice(&px);
        }
        Ok(out)
    }

    /// Wrap an existing premultiplied RGBA8 buffer.
    pub fn from_premul_rgba8(width: u32, height: u32, data: Vec<u8>) -> FramerResult<Self> {
        let expected = rgba8_len(width, height)?;
        if data.len() != expected {
            return Err(FramerError::validation(format!(
                "raster {width}x{height} expects {expected} bytes, got {}",
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Convert a straight-alpha image (as decoded from PNG) into a premultiplied raster.
    pub fn from_straight_rgba8(img: image::RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        let mut data = img.into_raw();
        premultiply_rgba8_in_place(&mut data);
        Self {
            width,
            height,
            data,
        }
    }

    /// Straight-alpha copy suitable for PNG encoding.
    pub fn to_straight_rgba8(&self) -> FramerResult<image::RgbaImage> {
        let mut data = self.data.clone();
        unpremultiply_rgba8_in_place(&mut data);
        image::RgbaImage::from_raw(self.width, self.height, data)
            .ok_or_else(|| FramerError::graphics("raster buffer does not match its dimensions"))
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Width and height.
    pub fn size(&self) -> PixelSize {
        PixelSize::new(self.width, self.height)
    }

    /// Premultiplied RGBA8 bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub(crate) fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consume the raster and return its premultiplied bytes.
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Pixel at `(x, y)`, or `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba8Premul> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = self.offset(x, y);
        Some(Rgba8Premul::from([
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ]))
    }

    /// Byte stride of one row.
    pub(crate) fn stride(&self) -> usize {
        self.width as usize * 4
    }

    pub(crate) fn offset(&self, x: u32, y: u32) -> usize {
        y as usize * self.stride() + x as usize * 4
    }
}

/// Byte length of a tightly packed RGBA8 buffer, failing on overflow.
pub(crate) fn rgba8_len(width: u32, height: u32) -> FramerResult<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|v| v.checked_mul(4))
        .ok_or_else(|| FramerError::graphics(format!("rgba8 buffer size overflow ({width}x{height})")))
}

/// Allocate a zeroed byte buffer, reporting allocator failure instead of aborting.
pub(crate) fn try_alloc_zeroed(len: usize) -> FramerResult<Vec<u8>> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(len)
        .map_err(|e| FramerError::graphics(format!("could not allocate {len} byte buffer: {e}")))?;
    buf.resize(len, 0);
    Ok(buf)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
