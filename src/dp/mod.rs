//! DisplayPort sink capability queries
//!
//! A DisplayPort source learns about its sink by reading the sink's DPCD
//! (DisplayPort Configuration Data) registers over the AUX channel. This module
//! classifies a sink from its receiver capability snapshot and, where the DPCD
//! revision allows it, a single additional register read.
//!
//! The AUX channel itself is abstracted by the [`DpAux`] trait. [`DpAuxDevice`]
//! implements it on top of the kernel's `/dev/drm_dp_auxN` nodes, any closure
//! `FnMut(u32, &mut [u8]) -> Result<usize, AuxError>` does as well.
//!
//! ```no_run
//! use drm_sink_info::dp::{read_receiver_caps, DpAuxDevice, MstMode, SinkCaps};
//!
//! let mut aux = DpAuxDevice::open("/dev/drm_dp_aux0").unwrap();
//! let dpcd = read_receiver_caps(&mut aux).unwrap();
//!
//! let caps = SinkCaps::query(&mut aux, &dpcd);
//! if caps.mst_mode == MstMode::Mst {
//!     println!("Sink can drive multiple streams");
//! }
//! ```
//!
//! Querying never fails: a sink that cannot be queried is assumed to lack the
//! capability in question.

mod aux;
mod aux_dev;
pub mod dpcd;
pub mod mst;
pub mod sdp;

#[cfg(test)]
pub(crate) mod test;

pub use self::aux::{read_receiver_caps, AuxError, DpAux};
pub use self::aux_dev::DpAuxDevice;
pub use self::dpcd::{DpcdRevision, ReceiverCaps, RECEIVER_CAP_SIZE};
pub use self::mst::{read_mst_cap, MstMode};
pub use self::sdp::{as_sdp_supported, AdaptiveSyncSdp, AsSdpOperationMode};

use tracing::debug;

/// Capabilities of a DisplayPort sink
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SinkCaps {
    /// DPCD revision of the sink
    pub revision: DpcdRevision,
    /// MST mode capability
    pub mst_mode: MstMode,
    /// Whether the sink accepts Adaptive-Sync SDPs
    pub as_sdp: bool,
}

impl SinkCaps {
    /// Query all capabilities of a sink
    ///
    /// Issues at most two single byte reads on `aux`. `dpcd` is the receiver
    /// capability snapshot, [`RECEIVER_CAP_SIZE`] bytes or longer.
    pub fn query<A: DpAux + ?Sized>(aux: &mut A, dpcd: &[u8]) -> SinkCaps {
        let caps = SinkCaps {
            revision: DpcdRevision::from_caps(dpcd),
            mst_mode: read_mst_cap(aux, dpcd),
            as_sdp: as_sdp_supported(aux, dpcd),
        };
        debug!(
            revision = %caps.revision,
            mst_mode = ?caps.mst_mode,
            as_sdp = caps.as_sdp,
            "Queried DP sink capabilities"
        );
        caps
    }
}
