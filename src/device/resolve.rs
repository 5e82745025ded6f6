//! Mapping screenshots to a `(device, orientation)` pair.
//!
//! All matching is exact; a screenshot one pixel off any catalog screen is not detected.

use crate::device::catalog::{self, Device};
use crate::device::orientation::DeviceOrientation;
use crate::foundation::core::PixelSize;
use crate::foundation::error::{FramerError, FramerResult};
use crate::warning::FramerWarning;

/// Detect device and orientation from a screenshot's size.
pub fn resolve_by_dimensions(
    width: u32,
    height: u32,
) -> Option<(&'static Device, DeviceOrientation)> {
    catalog::find_by_screen_size(PixelSize::new(width, height))
}

/// Detect the orientation of a screenshot taken on a known device.
pub fn resolve_orientation(device: &Device, width: u32, height: u32) -> Option<DeviceOrientation> {
    catalog::find_orientation(device, PixelSize::new(width, height))
}

/// Return `true` when `device` supports `orientation`.
pub fn validate(device: &Device, orientation: DeviceOrientation) -> bool {
    device.supports(orientation)
}

/// Outcome of [`resolve`].
#[derive(Debug)]
pub struct Resolution {
    /// Chosen device.
    pub device: &'static Device,
    /// Chosen orientation, always supported by `device`.
    pub orientation: DeviceOrientation,
    /// Non-fatal conditions met while resolving.
    pub warnings: Vec<FramerWarning>,
}

/// Settle on a device and orientation from whatever the caller pinned down.
///
/// - No device: both are detected from `screenshot`; a pinned orientation is ignored.
/// - Device only: the orientation is detected, falling back to the device's canonical orientation
///   with a warning.
/// - Both: the pair is validated.
pub fn resolve(
    screenshot: PixelSize,
    device_name: Option<&str>,
    orientation: Option<DeviceOrientation>,
) -> FramerResult<Resolution> {
    let mut warnings = Vec::new();

    let Some(name) = device_name else {
        if let Some(o) = orientation {
            warnings.push(FramerWarning::OrientationIgnored { orientation: o });
        }
        let (device, orientation) = resolve_by_dimensions(screenshot.width, screenshot.height)
            .ok_or_else(|| {
                FramerError::device_not_found(format!(
                    "no device has a {screenshot} screen; pass a device name explicitly"
                ))
            })?;
        return Ok(Resolution {
            device,
            orientation,
            warnings,
        });
    };

    let device = catalog::find_by_name(name)
        .ok_or_else(|| FramerError::device_not_found(format!("unknown device '{name}'")))?;

    let orientation = match orientation {
        Some(o) if validate(device, o) => o,
        Some(o) => return Err(FramerError::orientation_not_supported(device.name(), o)),
        None => match resolve_orientation(device, screenshot.width, screenshot.height) {
            Some(o) => o,
            None => {
                let fallback = device.canonical_orientation();
                let w = FramerWarning::OrientationUndetected {
                    device: device.name(),
                    fallback,
                };
                warnings.push(w);
                fallback
            }
        },
    };

    Ok(Resolution {
        device,
        orientation,
        warnings,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/device/resolve.rs"]
mod tests;
