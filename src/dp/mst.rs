//! Multi-stream transport capability and topology helpers

use tracing::{debug, trace};

use super::{
    dpcd::{DpcdRevision, MstmCap, DPCD_REV_12, MSTM_CAP, MST_LOGICAL_PORT_0},
    DpAux,
};

/// A sink's MST mode capability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MstMode {
    /// The sink does not support MST nor single stream sideband messaging
    #[default]
    Sst,
    /// The sink supports MST, more than one stream and single stream sideband messaging
    Mst,
    /// The sink supports only one stream and single stream sideband messaging
    SstSidebandMsg,
}

impl MstMode {
    /// Returns true if sideband messages can be sent to the sink
    pub fn has_sideband_msg(&self) -> bool {
        matches!(self, MstMode::Mst | MstMode::SstSidebandMsg)
    }
}

/// Read the sink's MST mode capability
///
/// Sinks below DPCD 1.2 are [`MstMode::Sst`] without touching the AUX channel.
/// A failed read of [`MSTM_CAP`] is treated as no capability at all.
///
/// `dpcd` is the receiver capability snapshot starting at DPCD address `0x000`,
/// of any length; an empty snapshot is [`MstMode::Sst`].
pub fn read_mst_cap<A: DpAux + ?Sized>(aux: &mut A, dpcd: &[u8]) -> MstMode {
    let rev = DpcdRevision::from_caps(dpcd);
    if !rev.at_least(DPCD_REV_12) {
        trace!(%rev, "DPCD revision too old for MST");
        return MstMode::Sst;
    }

    let mstm_cap = match aux.dpcd_read_byte(MSTM_CAP) {
        Ok(value) => MstmCap::from_bits_retain(value),
        Err(err) => {
            debug!(?err, "Failed to read DP_MSTM_CAP");
            return MstMode::Sst;
        }
    };

    let mode = if mstm_cap.contains(MstmCap::MST_CAP) {
        MstMode::Mst
    } else if mstm_cap.contains(MstmCap::SINGLE_STREAM_SIDEBAND_MSG) {
        MstMode::SstSidebandMsg
    } else {
        MstMode::Sst
    };
    trace!(%rev, ?mstm_cap, ?mode, "Read MST capability");
    mode
}

/// Returns true if `port_num` names a logical port of a branch device
pub fn port_is_logical(port_num: u8) -> bool {
    port_num >= MST_LOGICAL_PORT_0
}

/// Identifies a branch device inside a [`MstTopology`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BranchId(usize);

/// Identifies a port inside a [`MstTopology`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PortId(usize);

#[derive(Debug)]
struct Branch {
    // None for the root branch
    port_parent: Option<PortId>,
}

/// A port of an MST branch device
#[derive(Debug)]
pub struct MstPort<A> {
    port_num: u8,
    parent: BranchId,
    aux: A,
}

impl<A> MstPort<A> {
    /// Port number on its branch device
    pub fn port_num(&self) -> u8 {
        self.port_num
    }

    /// The branch device this port belongs to
    pub fn parent(&self) -> BranchId {
        self.parent
    }

    /// The AUX channel reaching the device behind this port
    pub fn aux(&self) -> &A {
        &self.aux
    }

    /// Mutable access to the AUX channel of this port
    pub fn aux_mut(&mut self) -> &mut A {
        &mut self.aux
    }

    /// Returns true if this is a logical port
    pub fn is_logical(&self) -> bool {
        port_is_logical(self.port_num)
    }
}

/// Tree of branch devices and ports below a source's MST capable connector
///
/// The tree starts out with the root branch, which is the branch device directly
/// attached to the source and has no upstream port. Every further branch device
/// hangs off a port.
#[derive(Debug)]
pub struct MstTopology<A> {
    branches: Vec<Branch>,
    ports: Vec<MstPort<A>>,
}

impl<A> Default for MstTopology<A> {
    fn default() -> Self {
        MstTopology {
            branches: vec![Branch { port_parent: None }],
            ports: Vec::new(),
        }
    }
}

impl<A> MstTopology<A> {
    /// Create a topology consisting of the root branch only
    pub fn new() -> MstTopology<A> {
        MstTopology::default()
    }

    /// The root branch device
    pub fn root(&self) -> BranchId {
        BranchId(0)
    }

    /// Add a port to a branch device
    ///
    /// Returns `None` if the branch is unknown.
    pub fn add_port(&mut self, branch: BranchId, port_num: u8, aux: A) -> Option<PortId> {
        self.branches.get(branch.0)?;
        self.ports.push(MstPort {
            port_num,
            parent: branch,
            aux,
        });
        Some(PortId(self.ports.len() - 1))
    }

    /// Add a branch device behind a port
    ///
    /// Returns `None` if the port is unknown.
    pub fn add_branch(&mut self, port: PortId) -> Option<BranchId> {
        self.ports.get(port.0)?;
        self.branches.push(Branch {
            port_parent: Some(port),
        });
        Some(BranchId(self.branches.len() - 1))
    }

    /// Look up a port
    pub fn port(&self, port: PortId) -> Option<&MstPort<A>> {
        self.ports.get(port.0)
    }

    /// Look up a port mutably
    pub fn port_mut(&mut self, port: PortId) -> Option<&mut MstPort<A>> {
        self.ports.get_mut(port.0)
    }

    /// Iterate over the ports of a branch device
    pub fn ports_of(&self, branch: BranchId) -> impl Iterator<Item = (PortId, &MstPort<A>)> {
        self.ports
            .iter()
            .enumerate()
            .filter(move |(_, port)| port.parent == branch)
            .map(|(idx, port)| (PortId(idx), port))
    }

    /// Get the AUX channel of the port upstream of `port`'s branch device
    ///
    /// Returns `None` if `port` belongs to the root branch.
    pub fn aux_for_parent(&self, port: PortId) -> Option<&A> {
        let port = self.ports.get(port.0)?;
        let upstream = self.branches.get(port.parent.0)?.port_parent?;
        self.ports.get(upstream.0).map(|port| &port.aux)
    }
}
