//! # EDID - Extended Display Identification Data
//!
//! This module decodes the vendor & product identification of a display's base
//! EDID block (VESA E-EDID 1.4 section 3.4) and renders it in human readable form.
//!
//! ```
//! use drm_sink_info::edid::{get_product_id, render_product_id};
//!
//! # let mut edid = [0u8; 128];
//! # edid[8..18].copy_from_slice(&[0x10, 0xac, 0x12, 0x34, 0x01, 0x00, 0x00, 0x00, 20, 30]);
//! // `edid` was read from the connector, e.g. over DDC
//! let id = get_product_id(Some(&edid[..]));
//!
//! assert_eq!(
//!     render_product_id(&id, false),
//!     "manufacturer name: DEL, product code: 13330, serial number: 1, week/year of manufacture: 20/2020"
//! );
//! ```
//!
//! Retrieval is not done here: the bytes may come from an I2C DDC read, a DP AUX
//! DDC read or the `EDID` property of a DRM connector (see
//! `backend::drm` with the `backend_drm` feature).

mod block;
mod product_id;

pub use self::block::EdidBlock;
pub use self::product_id::{
    decode_mfg_id, get_product_id, print_product_id, render_product_id, ManufactureDate,
    ManufacturerId, ProductId, DATE_BUF_SIZE, PRODUCT_ID_SIZE,
};

/// Size of one EDID block in bytes
pub const EDID_LENGTH: usize = 128;

/// Fixed pattern every base EDID block starts with
pub const EDID_HEADER: [u8; 8] = [0x00, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0x00];

/// Errors returned when validating a base EDID block
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdidError {
    /// The buffer is smaller than one EDID block
    #[error("EDID buffer too short: {0} bytes, expected at least 128")]
    TooShort(usize),
    /// The block does not start with the fixed EDID header
    #[error("EDID header mismatch")]
    BadHeader,
    /// The bytes of the block do not add up to zero
    #[error("EDID checksum mismatch (block sums to {0:#04x})")]
    BadChecksum(u8),
}
