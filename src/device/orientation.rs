use crate::foundation::error::FramerError;

/// Named layout state of a device.
///
/// Each orientation maps to a number of clockwise quarter turns applied to the device's canonical
/// frame asset (which is always stored upright).
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum DeviceOrientation {
    /// Upright, home indicator at the bottom.
    Portrait,
    /// Rotated half a turn.
    UpsideDown,
    /// Device top pointing left (rotated a quarter turn counter-clockwise).
    LandscapeLeft,
    /// Device top pointing right (rotated a quarter turn clockwise).
    LandscapeRight,
    /// The single orientation of devices that cannot rotate (watches).
    Standard,
}

impl DeviceOrientation {
    /// Every orientation, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::Portrait,
        Self::UpsideDown,
        Self::LandscapeLeft,
        Self::LandscapeRight,
        Self::Standard,
    ];

    /// Clockwise quarter turns from the canonical asset to this orientation.
    pub fn quarter_turns(self) -> u8 {
        match self {
            Self::Portrait | Self::Standard => 0,
            Self::LandscapeRight => 1,
            Self::UpsideDown => 2,
            Self::LandscapeLeft => 3,
        }
    }

    /// Stable kebab-case name, as accepted on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Portrait => "portrait",
            Self::UpsideDown => "upside-down",
            Self::LandscapeLeft => "landscape-left",
            Self::LandscapeRight => "landscape-right",
            Self::Standard => "standard",
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for DeviceOrientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for DeviceOrientation {
    type Err = FramerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|o| o.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                let names = Self::ALL.map(Self::as_str).join(", ");
                FramerError::validation(format!("unknown orientation '{s}' (expected one of {names})"))
            })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/device/orientation.rs"]
mod tests;
