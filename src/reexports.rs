//! Reexports of crates, that are part of the public api, for convenience

pub use bitflags;
#[cfg(feature = "backend_drm")]
pub use drm;
pub use tracing;
