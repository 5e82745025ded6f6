use crate::device::orientation::DeviceOrientation;
use crate::foundation::core::PixelSize;

/// Non-fatal conditions reported alongside a result.
///
/// Warnings never abort a request. They are returned to the caller, which decides how to report
/// them; the library does not log them itself.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FramerWarning {
    /// Screenshot size differs from the device's screen; the screenshot is scaled to fit.
    DimensionMismatch {
        /// Declared screen size.
        expected: PixelSize,
        /// Actual screenshot size.
        actual: PixelSize,
    },
    /// No orientation of the chosen device matches the screenshot size.
    OrientationUndetected {
        /// Device name.
        device: &'static str,
        /// Orientation used instead.
        fallback: DeviceOrientation,
    },
    /// An orientation was given without a device and has no effect.
    OrientationIgnored {
        /// The ignored orientation.
        orientation: DeviceOrientation,
    },
}

impl std::fmt::Display for FramerWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DimensionMismatch { expected, actual } => write!(
                f,
                "screenshot is {actual} but the device screen is {expected}; result may be distorted"
            ),
            Self::OrientationUndetected { device, fallback } => write!(
                f,
                "could not detect the orientation of the '{device}' screenshot from its size; using {fallback}, result may be wrong"
            ),
            Self::OrientationIgnored { orientation } => write!(
                f,
                "orientation '{orientation}' is ignored since no device is set"
            ),
        }
    }
}
