//! Pixel operations: rotation, screen masks and compositing.

/// Clip-and-layer compositing.
pub mod composite;
/// Screen mask construction.
pub mod mask;
/// Per-device corner touch-ups.
pub mod patches;
/// Quarter-turn rotation.
pub mod rotate;
