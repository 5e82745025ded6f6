/// Convenience result type used across framer.
pub type FramerResult<T> = Result<T, FramerError>;

/// Top-level error taxonomy used by the framing APIs.
#[derive(thiserror::Error, Debug)]
pub enum FramerError {
    /// No catalog device matches the requested name or screenshot size.
    #[error("device not found: {0}")]
    DeviceNotFound(String),

    /// The requested orientation is not one the device supports.
    #[error("orientation '{orientation}' is not supported for '{device}'")]
    OrientationNotSupported {
        /// Device name.
        device: String,
        /// Requested orientation, as displayed to users.
        orientation: String,
    },

    /// Pixel buffer allocation or sizing failed while rotating, masking or compositing.
    #[error("graphics error: {0}")]
    Graphics(String),

    /// A frame asset is missing or does not match the catalog geometry.
    #[error("frame asset error: {0}")]
    Asset(String),

    /// Invalid caller-provided data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FramerError {
    /// Build a [`FramerError::DeviceNotFound`] value.
    pub fn device_not_found(msg: impl Into<String>) -> Self {
        Self::DeviceNotFound(msg.into())
    }

    /// Build a [`FramerError::OrientationNotSupported`] value.
    pub fn orientation_not_supported(
        device: impl Into<String>,
        orientation: impl std::fmt::Display,
    ) -> Self {
        Self::OrientationNotSupported {
            device: device.into(),
            orientation: orientation.to_string(),
        }
    }

    /// Build a [`FramerError::Graphics`] value.
    pub fn graphics(msg: impl Into<String>) -> Self {
        Self::Graphics(msg.into())
    }

    /// Build a [`FramerError::Asset`] value.
    pub fn asset(msg: impl Into<String>) -> Self {
        Self::Asset(msg.into())
    }

    /// Build a [`FramerError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Process exit status used by the `framer` binary for this error kind.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::DeviceNotFound(_) => 3,
            Self::OrientationNotSupported { .. } => 4,
            Self::Graphics(_) => 5,
            Self::Asset(_) => 6,
            Self::Validation(_) | Self::Other(_) => 1,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
