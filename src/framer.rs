use std::sync::Arc;

use crate::assets::source::FrameSource;
use crate::assets::store::FrameStore;
use crate::device::catalog::Device;
use crate::device::orientation::DeviceOrientation;
use crate::foundation::core::{Raster, ScreenRect};
use crate::foundation::error::{FramerError, FramerResult};
use crate::render::composite::composite;
use crate::render::mask::ScreenMask;
use crate::render::patches::corner_patches;
use crate::warning::FramerWarning;

/// Framing configuration.
#[derive(Clone, Debug, Default)]
pub struct FramerOpts {
    /// Worker threads for screen mask construction. `None` uses the global rayon pool.
    pub threads: Option<usize>,
}

/// A framed screenshot plus the warnings raised while producing it.
#[derive(Debug)]
pub struct Framed {
    /// Composited image, sized like the frame.
    pub image: Raster,
    /// Non-fatal conditions, in the order they were raised.
    pub warnings: Vec<FramerWarning>,
}

/// Entry point for framing screenshots.
///
/// Owns the frame/mask cache, so one `ScreenshotFramer` should be reused across screenshots; it is
/// `Send + Sync` and can be shared between threads.
#[derive(Debug)]
pub struct ScreenshotFramer {
    store: FrameStore,
}

impl ScreenshotFramer {
    /// Framer loading frame assets from `source`.
    pub fn new(source: impl FrameSource + 'static, opts: FramerOpts) -> FramerResult<Self> {
        let pool = opts.threads.map(build_thread_pool).transpose()?;
        Ok(Self {
            store: FrameStore::new(source, pool),
        })
    }

    /// Frame image for `device` in `orientation`.
    pub fn frame_image(
        &self,
        device: &Device,
        orientation: DeviceOrientation,
    ) -> FramerResult<Arc<Raster>> {
        self.store.frame(device, orientation)
    }

    /// Screen mask for `device` in `orientation`.
    pub fn screen_mask(
        &self,
        device: &Device,
        orientation: DeviceOrientation,
    ) -> FramerResult<Arc<ScreenMask>> {
        self.store.mask(device, orientation)
    }

    /// Composite `screenshot` into the frame of `device` held in `orientation`.
    ///
    /// A screenshot whose size differs from the device screen still gets framed (scaled into the
    /// screen rectangle) and yields a [`FramerWarning::DimensionMismatch`].
    #[tracing::instrument(skip(self, screenshot, device), fields(device = device.name()))]
    pub fn frame(
        &self,
        screenshot: &Raster,
        device: &Device,
        orientation: DeviceOrientation,
    ) -> FramerResult<Framed> {
        let screen = screen_rect(device, orientation)?;

        let mut warnings = Vec::new();
        if screenshot.size() != screen.size() {
            warnings.push(FramerWarning::DimensionMismatch {
                expected: screen.size(),
                actual: screenshot.size(),
            });
        }

        let frame = self.store.frame(device, orientation)?;
        let mask = self.store.mask(device, orientation)?;
        let image = composite(
            screenshot,
            &frame,
            &mask,
            screen,
            corner_patches(device.name()),
        )?;

        Ok(Framed { image, warnings })
    }
}

fn screen_rect(device: &Device, orientation: DeviceOrientation) -> FramerResult<ScreenRect> {
    device
        .screen_rect(orientation)
        .ok_or_else(|| FramerError::orientation_not_supported(device.name(), orientation))
}

fn build_thread_pool(threads: usize) -> FramerResult<rayon::ThreadPool> {
    if threads == 0 {
        return Err(FramerError::validation(
            "framer 'threads' must be >= 1 when set",
        ));
    }
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .thread_name(|i| format!("framer-mask-{i}"))
        .build()
        .map_err(|e| FramerError::graphics(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../tests/unit/framer.rs"]
mod tests;
