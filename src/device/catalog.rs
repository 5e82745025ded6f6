use crate::device::orientation::DeviceOrientation;
use crate::foundation::core::{PixelSize, ScreenRect};
use crate::render::rotate::rotation_affine;

/// A supported device: its canonical (upright) frame geometry plus the orientations it can be
/// framed in.
///
/// Devices only exist as entries of the static [`DEVICES`] table.
#[derive(Debug, PartialEq, Eq)]
pub struct Device {
    name: &'static str,
    frame_size: PixelSize,
    screen: ScreenRect,
    orientations: &'static [DeviceOrientation],
}

const PHONE: &[DeviceOrientation] = &[
    DeviceOrientation::Portrait,
    DeviceOrientation::LandscapeLeft,
    DeviceOrientation::LandscapeRight,
];

const WATCH: &[DeviceOrientation] = &[DeviceOrientation::Standard];

/// Device catalog in registration order.
///
/// Size detection walks this table front to back, and each device's orientations in listed order,
/// so when two `(device, orientation)` pairs share a screen size the earlier one wins:
///
/// - "iPhone 12" shadows "iPhone 12 Pro", which has identical geometry and can only be selected
///   by name.
/// - On every phone, landscape-left and landscape-right have the same screen size. Landscape-left
///   is listed first, so a landscape screenshot is always detected as landscape-left;
///   landscape-right has to be requested explicitly.
pub static DEVICES: &[Device] = &[
    Device::new(
        "iPhone 12",
        PixelSize::new(1370, 2732),
        ScreenRect::new(100, 90, 1170, 2532),
        PHONE,
    ),
    Device::new(
        "iPhone 12 mini",
        PixelSize::new(1325, 2616),
        ScreenRect::new(100, 90, 1125, 2436),
        PHONE,
    ),
    Device::new(
        "iPhone 12 Pro",
        PixelSize::new(1370, 2732),
        ScreenRect::new(100, 90, 1170, 2532),
        PHONE,
    ),
    Device::new(
        "iPhone 12 Pro Max",
        PixelSize::new(1484, 2978),
        ScreenRect::new(100, 100, 1284, 2778),
        PHONE,
    ),
    Device::new(
        "Apple Watch Series 6 44mm",
        PixelSize::new(480, 858),
        ScreenRect::new(56, 205, 368, 448),
        WATCH,
    ),
];

impl Device {
    const fn new(
        name: &'static str,
        frame_size: PixelSize,
        screen: ScreenRect,
        orientations: &'static [DeviceOrientation],
    ) -> Self {
        Self {
            name,
            frame_size,
            screen,
            orientations,
        }
    }

    /// Human-readable unique name, also the frame asset's file stem.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Supported orientations; the first one is the canonical (unrotated) orientation.
    pub fn orientations(&self) -> &'static [DeviceOrientation] {
        self.orientations
    }

    /// Orientation the frame asset is authored in.
    pub fn canonical_orientation(&self) -> DeviceOrientation {
        self.orientations
            .first()
            .copied()
            .unwrap_or(DeviceOrientation::Portrait)
    }

    /// Return `true` when the device can be framed in `orientation`.
    pub fn supports(&self, orientation: DeviceOrientation) -> bool {
        self.orientations.contains(&orientation)
    }

    /// Quarter turns between the canonical asset and `orientation`.
    pub(crate) fn turns_for(&self, orientation: DeviceOrientation) -> u8 {
        let base = self.canonical_orientation().quarter_turns();
        (orientation.quarter_turns() + 4 - base) % 4
    }

    /// Frame image size in `orientation`.
    pub fn frame_size(&self, orientation: DeviceOrientation) -> Option<PixelSize> {
        if !self.supports(orientation) {
            return None;
        }
        Some(match self.turns_for(orientation) % 2 {
            0 => self.frame_size,
            _ => self.frame_size.transposed(),
        })
    }

    /// Screen rectangle in `orientation`, in that orientation's frame coordinates.
    ///
    /// Rotated rectangles are derived from the canonical one with the same transform that rotates
    /// the frame asset, so the two always line up.
    pub fn screen_rect(&self, orientation: DeviceOrientation) -> Option<ScreenRect> {
        if !self.supports(orientation) {
            return None;
        }
        let turns = self.turns_for(orientation);
        if turns == 0 {
            return Some(self.screen);
        }
        let (affine, _) = rotation_affine(self.frame_size, turns);
        Some(ScreenRect::from_kurbo_rounded(
            affine.transform_rect_bbox(self.screen.to_kurbo()),
        ))
    }

    /// Position of this device in [`DEVICES`].
    pub(crate) fn index(&self) -> Option<usize> {
        DEVICES.iter().position(|d| std::ptr::eq(d, self))
    }

    /// Serializable summary of the device's geometry in every orientation.
    pub fn describe(&self) -> DeviceInfo {
        DeviceInfo {
            name: self.name,
            orientations: self
                .orientations
                .iter()
                .filter_map(|&orientation| {
                    Some(OrientationInfo {
                        orientation,
                        frame: self.frame_size(orientation)?,
                        screen: self.screen_rect(orientation)?,
                    })
                })
                .collect(),
        }
    }
}

/// Serializable view of a [`Device`], used by `list-devices --json`.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct DeviceInfo {
    /// Device name.
    pub name: &'static str,
    /// Geometry per supported orientation.
    pub orientations: Vec<OrientationInfo>,
}

/// Geometry of one device orientation.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct OrientationInfo {
    /// Orientation tag.
    pub orientation: DeviceOrientation,
    /// Frame image size.
    pub frame: PixelSize,
    /// Screen rectangle inside the frame.
    pub screen: ScreenRect,
}

/// Look a device up by its exact name.
pub fn find_by_name(name: &str) -> Option<&'static Device> {
    DEVICES.iter().find(|d| d.name == name)
}

/// First `(device, orientation)` in registration order whose screen is exactly `size`.
pub fn find_by_screen_size(size: PixelSize) -> Option<(&'static Device, DeviceOrientation)> {
    DEVICES
        .iter()
        .find_map(|d| find_orientation(d, size).map(|o| (d, o)))
}

/// First orientation of `device` whose screen is exactly `size`.
///
/// Orientations are tried in the device's listed order. Landscape-left and landscape-right share a
/// size, so this never returns landscape-right for a phone.
pub fn find_orientation(device: &Device, size: PixelSize) -> Option<DeviceOrientation> {
    device
        .orientations
        .iter()
        .copied()
        .find(|&o| device.screen_rect(o).is_some_and(|r| r.size() == size))
}

#[cfg(test)]
#[path = "../../tests/unit/device/catalog.rs"]
mod tests;
