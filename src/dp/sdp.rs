//! Adaptive-Sync secondary data packets

use tracing::{debug, trace};

use super::{
    dpcd::{
        DpcdRevision, DprxFeatureEnumerationListCont1, DPCD_REV_13, DPRX_FEATURE_ENUMERATION_LIST_CONT_1,
    },
    DpAux,
};
use crate::utils::Printer;

/// Check if the sink supports Adaptive-Sync SDPs
///
/// Sinks below DPCD 1.3 never do and are not queried. A failed read is treated
/// the same as missing support. `dpcd` may be a snapshot of any length; an empty
/// one means no support.
pub fn as_sdp_supported<A: DpAux + ?Sized>(aux: &mut A, dpcd: &[u8]) -> bool {
    let rev = DpcdRevision::from_caps(dpcd);
    if !rev.at_least(DPCD_REV_13) {
        trace!(%rev, "DPCD revision too old for Adaptive-Sync SDP");
        return false;
    }

    match aux.dpcd_read_byte(DPRX_FEATURE_ENUMERATION_LIST_CONT_1) {
        Ok(rx_feature) => DprxFeatureEnumerationListCont1::from_bits_retain(rx_feature)
            .contains(DprxFeatureEnumerationListCont1::ADAPTIVE_SYNC_SDP_SUPPORTED),
        Err(err) => {
            debug!(?err, "Failed to read DP_DPRX_FEATURE_ENUMERATION_LIST_CONT_1");
            false
        }
    }
}

/// Operation mode of an Adaptive-Sync SDP
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum AsSdpOperationMode {
    /// Adaptive vtotal, changing dynamically
    #[default]
    AvtDynamicVtotal = 0x00,
    /// Adaptive vtotal, fixed
    AvtFixedVtotal = 0x01,
    /// Fixed average vtotal, target refresh rate not yet reached
    FavtTrrNotReached = 0x02,
    /// Fixed average vtotal, target refresh rate reached
    FavtTrrReached = 0x03,
}

impl TryFrom<u8> for AsSdpOperationMode {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0x00 => Ok(AsSdpOperationMode::AvtDynamicVtotal),
            0x01 => Ok(AsSdpOperationMode::AvtFixedVtotal),
            0x02 => Ok(AsSdpOperationMode::FavtTrrNotReached),
            0x03 => Ok(AsSdpOperationMode::FavtTrrReached),
            other => Err(other),
        }
    }
}

/// Contents of an Adaptive-Sync SDP
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AdaptiveSyncSdp {
    /// SDP revision
    pub revision: u8,
    /// Number of valid data bytes
    pub length: u8,
    /// Vertical total of the current frame
    pub vtotal: i32,
    /// Target refresh rate
    pub target_rr: i32,
    /// Successive frame duration increase, in ms
    pub duration_incr_ms: i32,
    /// Successive frame duration decrease, in ms
    pub duration_decr_ms: i32,
    /// Operation mode
    pub mode: AsSdpOperationMode,
}

impl AdaptiveSyncSdp {
    /// Print the packet to a printer
    pub fn log<P: Printer + ?Sized>(&self, p: &mut P) {
        p.print(format_args!(
            "DP SDP: AS_SDP, revision {}, length {}\n",
            self.revision, self.length
        ));
        p.print(format_args!("    vtotal: {}\n", self.vtotal));
        p.print(format_args!("    target_rr: {}\n", self.target_rr));
        p.print(format_args!("    duration_incr_ms: {}\n", self.duration_incr_ms));
        p.print(format_args!("    duration_decr_ms: {}\n", self.duration_decr_ms));
        p.print(format_args!("    operation_mode: {}\n", self.mode as u8));
    }
}
