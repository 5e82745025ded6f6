//! Device catalog, orientations and screenshot-to-device resolution.

/// Static device table and lookups.
pub mod catalog;
/// Orientation tags.
pub mod orientation;
/// Screenshot-to-device resolution.
pub mod resolve;
