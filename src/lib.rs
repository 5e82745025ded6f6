//! framer puts app screenshots into device bezel frames.
//!
//! The pipeline for one screenshot:
//!
//! - Resolve a device and orientation, from the screenshot size or from what the caller pinned
//!   down ([`resolve`])
//! - Fetch the frame image and its screen mask ([`ScreenshotFramer`], cached per orientation)
//! - Clip the screenshot through the mask and layer the frame on top ([`ScreenshotFramer::frame`])
//!
//! All images are premultiplied RGBA8 [`Raster`]s; PNG conversion happens at the edges
//! ([`decode_png`], [`encode_png`]).
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// Frame asset sources, PNG codec and caches.
pub mod assets;
/// Device catalog and resolution.
pub mod device;
mod framer;
/// Rotation, masking and compositing.
pub mod render;
mod warning;

pub use crate::assets::decode::{decode_png, encode_png};
pub use crate::assets::source::{DirFrameSource, FrameSource, MemoryFrameSource};
pub use crate::assets::store::FrameStore;
pub use crate::device::catalog::{DEVICES, Device, DeviceInfo, OrientationInfo};
pub use crate::device::orientation::DeviceOrientation;
pub use crate::device::resolve::{
    Resolution, resolve, resolve_by_dimensions, resolve_orientation, validate,
};
pub use crate::foundation::core::{PixelSize, Raster, Rgba8Premul, ScreenRect};
pub use crate::foundation::error::{FramerError, FramerResult};
pub use crate::framer::{Framed, FramerOpts, ScreenshotFramer};
pub use crate::render::mask::{ScreenMask, build_screen_mask};
pub use crate::render::rotate::rotate;
pub use crate::warning::FramerWarning;
