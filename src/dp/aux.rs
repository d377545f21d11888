use std::io;

use tracing::trace;

use super::dpcd::{ReceiverCaps, DPCD_REV, RECEIVER_CAP_SIZE};

/// Errors of an AUX channel transfer
#[derive(thiserror::Error, Debug)]
pub enum AuxError {
    /// The transfer moved fewer bytes than requested
    #[error("Short AUX read at DPCD {offset:#07x}: expected {expected} bytes, got {got}")]
    ShortRead {
        /// DPCD address of the transfer
        offset: u32,
        /// Number of bytes requested
        expected: usize,
        /// Number of bytes transferred
        got: usize,
    },
    /// The sink did not reply in time
    #[error("AUX transfer timed out")]
    Timeout,
    /// The sink refused the transfer
    #[error("AUX transfer was NACKed by the sink")]
    Nack,
    /// The sink asked to retry later
    #[error("AUX transfer was deferred by the sink")]
    Defer,
    /// The underlying device failed
    #[error("AUX channel I/O error")]
    Io(#[from] io::Error),
}

/// Read access to the DPCD register space of a sink
///
/// Implemented by AUX channel transports. Closures of the form
/// `FnMut(u32, &mut [u8]) -> Result<usize, AuxError>` implement this trait as well,
/// which is handy for tests and for wrapping foreign transports.
///
/// Retries and timeouts are the transport's business; callers in this crate
/// issue every read exactly once.
pub trait DpAux {
    /// Read `buf.len()` bytes starting at DPCD address `offset`
    ///
    /// Returns the number of bytes actually transferred.
    fn dpcd_read(&mut self, offset: u32, buf: &mut [u8]) -> Result<usize, AuxError>;

    /// Read a single DPCD register
    ///
    /// Any transfer that does not yield exactly one byte is an error.
    fn dpcd_read_byte(&mut self, offset: u32) -> Result<u8, AuxError> {
        let mut buf = [0u8; 1];
        match self.dpcd_read(offset, &mut buf)? {
            1 => Ok(buf[0]),
            got => Err(AuxError::ShortRead {
                offset,
                expected: 1,
                got,
            }),
        }
    }
}

impl<F> DpAux for F
where
    F: FnMut(u32, &mut [u8]) -> Result<usize, AuxError>,
{
    fn dpcd_read(&mut self, offset: u32, buf: &mut [u8]) -> Result<usize, AuxError> {
        self(offset, buf)
    }
}

/// Read the receiver capability snapshot of a sink
///
/// This is usually done once when the link is set up; the snapshot is then
/// handed to the capability queries.
pub fn read_receiver_caps<A: DpAux + ?Sized>(aux: &mut A) -> Result<ReceiverCaps, AuxError> {
    let mut caps = [0u8; RECEIVER_CAP_SIZE];
    let got = aux.dpcd_read(DPCD_REV, &mut caps)?;
    if got != RECEIVER_CAP_SIZE {
        return Err(AuxError::ShortRead {
            offset: DPCD_REV,
            expected: RECEIVER_CAP_SIZE,
            got,
        });
    }
    trace!(rev = caps[0], "Read DPCD receiver caps");
    Ok(caps)
}
