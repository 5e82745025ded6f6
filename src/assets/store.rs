use std::sync::{Arc, OnceLock};

use crate::assets::source::FrameSource;
use crate::device::catalog::{DEVICES, Device};
use crate::device::orientation::DeviceOrientation;
use crate::foundation::core::Raster;
use crate::foundation::error::{FramerError, FramerResult};
use crate::render::mask::{ScreenMask, build_screen_mask};
use crate::render::rotate::rotate;

#[derive(Default)]
struct Slot {
    frame: OnceLock<Arc<Raster>>,
    mask: OnceLock<Arc<ScreenMask>>,
}

/// Lazily loaded frames and screen masks, one write-once slot per catalog
/// `(device, orientation)`.
///
/// Reads never lock. Two threads filling the same slot at once both compute the value and the
/// first publish wins; the loser's copy is dropped.
pub struct FrameStore {
    source: Box<dyn FrameSource>,
    slots: Vec<Slot>,
    pool: Option<rayon::ThreadPool>,
}

impl std::fmt::Debug for FrameStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FrameStore")
            .field("slots", &self.slots.len())
            .field("dedicated_pool", &self.pool.is_some())
            .finish_non_exhaustive()
    }
}

impl FrameStore {
    /// Store reading canonical frames from `source`. Masks are built on `pool` when given, on the
    /// global rayon pool otherwise.
    pub fn new(source: impl FrameSource + 'static, pool: Option<rayon::ThreadPool>) -> Self {
        let slots = std::iter::repeat_with(Slot::default)
            .take(DEVICES.len() * DeviceOrientation::ALL.len())
            .collect();
        Self {
            source: Box::new(source),
            slots,
            pool,
        }
    }

    fn slot(&self, device: &Device, orientation: DeviceOrientation) -> FramerResult<&Slot> {
        if !device.supports(orientation) {
            return Err(FramerError::orientation_not_supported(
                device.name(),
                orientation,
            ));
        }
        let index = device.index().ok_or_else(|| {
            FramerError::validation(format!("'{}' is not a catalog device", device.name()))
        })?;
        self.slots
            .get(index * DeviceOrientation::ALL.len() + orientation.index())
            .ok_or_else(|| FramerError::validation("frame slot index out of range"))
    }

    /// Frame image of `device` in `orientation`.
    ///
    /// The canonical asset is loaded once; other orientations are rotated from it on first use.
    pub fn frame(
        &self,
        device: &Device,
        orientation: DeviceOrientation,
    ) -> FramerResult<Arc<Raster>> {
        let slot = self.slot(device, orientation)?;
        if let Some(frame) = slot.frame.get() {
            return Ok(Arc::clone(frame));
        }

        let turns = device.turns_for(orientation);
        let frame = if turns == 0 {
            self.load_canonical(device)?
        } else {
            let canonical = self.frame(device, device.canonical_orientation())?;
            tracing::debug!(device = device.name(), %orientation, turns, "rotating frame");
            rotate(&canonical, turns)?
        };
        Ok(publish(&slot.frame, Arc::new(frame)))
    }

    /// Screen mask of `device` in `orientation`, built from [`FrameStore::frame`].
    pub fn mask(
        &self,
        device: &Device,
        orientation: DeviceOrientation,
    ) -> FramerResult<Arc<ScreenMask>> {
        let slot = self.slot(device, orientation)?;
        if let Some(mask) = slot.mask.get() {
            return Ok(Arc::clone(mask));
        }

        let frame = self.frame(device, orientation)?;
        tracing::debug!(device = device.name(), %orientation, "building screen mask");
        let mask = match &self.pool {
            Some(pool) => pool.install(|| build_screen_mask(&frame))?,
            None => build_screen_mask(&frame)?,
        };
        Ok(publish(&slot.mask, Arc::new(mask)))
    }

    fn load_canonical(&self, device: &Device) -> FramerResult<Raster> {
        tracing::debug!(device = device.name(), "loading frame asset");
        let frame = self.source.load(device)?.ok_or_else(|| {
            FramerError::asset(format!("no frame asset for '{}'", device.name()))
        })?;

        let expected = device.frame_size(device.canonical_orientation());
        if Some(frame.size()) != expected {
            return Err(FramerError::asset(format!(
                "frame for '{}' is {} but the catalog expects {}",
                device.name(),
                frame.size(),
                expected.unwrap_or_default()
            )));
        }
        Ok(frame)
    }
}

fn publish<T>(cell: &OnceLock<Arc<T>>, value: Arc<T>) -> Arc<T> {
    match cell.set(Arc::clone(&value)) {
        Ok(()) => value,
        Err(_) => cell.get().cloned().unwrap_or(value),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/store.rs"]
mod tests;
