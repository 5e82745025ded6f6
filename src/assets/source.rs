use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::assets::decode::decode_png;
use crate::device::catalog::Device;
use crate::foundation::core::Raster;
use crate::foundation::error::FramerResult;

/// Supplier of canonical (unrotated) frame images.
///
/// Returning `Ok(None)` means the device simply has no asset; errors are reserved for assets that
/// exist but cannot be read.
pub trait FrameSource: Send + Sync {
    /// Load the canonical frame of `device`.
    fn load(&self, device: &Device) -> FramerResult<Option<Raster>>;
}

/// Reads `<root>/<device name>.png`.
#[derive(Clone, Debug)]
pub struct DirFrameSource {
    root: PathBuf,
}

impl DirFrameSource {
    /// Source rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory the frames are read from.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Asset path for `device`.
    pub fn path_for(&self, device: &Device) -> PathBuf {
        self.root.join(format!("{}.png", device.name()))
    }
}

impl FrameSource for DirFrameSource {
    fn load(&self, device: &Device) -> FramerResult<Option<Raster>> {
        let path = self.path_for(device);
        if !path.is_file() {
            return Ok(None);
        }
        let bytes =
            std::fs::read(&path).with_context(|| format!("read frame '{}'", path.display()))?;
        let raster = decode_png(&bytes)
            .map_err(anyhow::Error::from)
            .with_context(|| format!("decode frame '{}'", path.display()))?;
        Ok(Some(raster))
    }
}

/// Frames held in memory, keyed by device name.
#[derive(Clone, Debug, Default)]
pub struct MemoryFrameSource {
    frames: HashMap<String, Raster>,
}

impl MemoryFrameSource {
    /// Empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the canonical frame for the device called `name`.
    pub fn insert(&mut self, name: impl Into<String>, frame: Raster) {
        self.frames.insert(name.into(), frame);
    }

    /// Builder form of [`MemoryFrameSource::insert`].
    pub fn with(mut self, name: impl Into<String>, frame: Raster) -> Self {
        self.insert(name, frame);
        self
    }
}

impl FrameSource for MemoryFrameSource {
    fn load(&self, device: &Device) -> FramerResult<Option<Raster>> {
        Ok(self.frames.get(device.name()).cloned())
    }
}
