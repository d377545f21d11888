//! DPCD register addresses and bits
//!
//! Only the registers needed for capability queries are listed here.

use std::fmt;

/// Size of the receiver capability snapshot read at link setup
pub const RECEIVER_CAP_SIZE: usize = 16;

/// A receiver capability snapshot, starting at DPCD address `0x000`
pub type ReceiverCaps = [u8; RECEIVER_CAP_SIZE];

/// DPCD revision
pub const DPCD_REV: u32 = 0x000;
/// DPCD revision 1.0
pub const DPCD_REV_10: u8 = 0x10;
/// DPCD revision 1.1
pub const DPCD_REV_11: u8 = 0x11;
/// DPCD revision 1.2, first revision with MST
pub const DPCD_REV_12: u8 = 0x12;
/// DPCD revision 1.3, first revision with Adaptive-Sync SDP
pub const DPCD_REV_13: u8 = 0x13;
/// DPCD revision 1.4
pub const DPCD_REV_14: u8 = 0x14;

/// Multi-stream transport capability
pub const MSTM_CAP: u32 = 0x021;

/// Extended receiver feature enumeration list, continued
pub const DPRX_FEATURE_ENUMERATION_LIST_CONT_1: u32 = 0x2214;

/// First logical (non-physical) port number on an MST branch device
pub const MST_LOGICAL_PORT_0: u8 = 8;

bitflags::bitflags! {
    /// Bits of [`MSTM_CAP`]
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct MstmCap: u8 {
        /// The sink supports multi-stream transport
        const MST_CAP                    = 1 << 0;
        /// The sink supports sideband messaging on a single stream
        const SINGLE_STREAM_SIDEBAND_MSG = 1 << 1;
    }
}

bitflags::bitflags! {
    /// Bits of [`DPRX_FEATURE_ENUMERATION_LIST_CONT_1`]
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct DprxFeatureEnumerationListCont1: u8 {
        /// The sink accepts Adaptive-Sync SDPs
        const ADAPTIVE_SYNC_SDP_SUPPORTED                              = 1 << 0;
        /// The sink cannot handle an AS SDP in the first half line / 3840 pixel cycles
        const AS_SDP_FIRST_HALF_LINE_OR_3840_PIXEL_CYCLE_WINDOW_NOT_SUPPORTED = 1 << 1;
        /// The sink supports version 1 of the VSC extension SDP framework
        const VSC_EXT_SDP_FRAMEWORK_VERSION_1_SUPPORTED                = 1 << 4;
    }
}

/// DPCD revision of a sink, as found in the first byte of its receiver capabilities
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct DpcdRevision(pub u8);

impl DpcdRevision {
    /// Read the revision out of a capability snapshot
    ///
    /// The snapshot may be longer than [`RECEIVER_CAP_SIZE`]. An empty one reads as
    /// revision `0`, which is below every capability floor.
    pub fn from_caps(dpcd: &[u8]) -> DpcdRevision {
        DpcdRevision(dpcd.get(DPCD_REV as usize).copied().unwrap_or(0))
    }

    /// Major version
    pub fn major(&self) -> u8 {
        self.0 >> 4
    }

    /// Minor version
    pub fn minor(&self) -> u8 {
        self.0 & 0xf
    }

    /// Returns true if the revision is at least `rev`, e.g. [`DPCD_REV_12`]
    pub fn at_least(&self, rev: u8) -> bool {
        self.0 >= rev
    }
}

impl fmt::Display for DpcdRevision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major(), self.minor())
    }
}
