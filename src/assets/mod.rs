//! Frame asset loading, PNG codec and the frame/mask cache.

/// PNG decode/encode.
pub mod decode;
/// Frame asset sources.
pub mod source;
/// Write-once frame and mask cache.
pub mod store;
