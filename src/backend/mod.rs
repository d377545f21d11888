//! Backend helpers
//!
//! Glue retrieving the raw inputs of the decoders from the operating system:
//!
//! - `drm` reads EDIDs from DRM connector properties
//!   (`backend_drm` feature)
//!
//! DisplayPort AUX access lives in [`crate::dp`].

#[cfg(feature = "backend_drm")]
pub mod drm;
