//! AUX channel access through the kernel's `drm_dp_aux` character devices
//!
//! With `CONFIG_DRM_DP_AUX_CHARDEV` the kernel exposes the DPCD of every
//! DisplayPort connector as `/dev/drm_dp_auxN`, where the file offset is the DPCD
//! address.

use std::{
    io,
    os::unix::io::{AsFd, BorrowedFd, OwnedFd},
    path::{Path, PathBuf},
};

use rustix::{
    fs::{Mode, OFlags},
    io::Errno,
};
use tracing::{debug, instrument};

use super::{AuxError, DpAux};

/// An opened `drm_dp_aux` device node
#[derive(Debug)]
pub struct DpAuxDevice {
    fd: OwnedFd,
    path: PathBuf,
}

impl DpAuxDevice {
    /// Open the device node at `path` for reading
    #[instrument(level = "debug", err)]
    pub fn open(path: impl AsRef<Path> + std::fmt::Debug) -> Result<DpAuxDevice, AuxError> {
        let path = path.as_ref();
        let fd = rustix::fs::open(path, OFlags::RDONLY | OFlags::CLOEXEC, Mode::empty())
            .map_err(io::Error::from)?;
        debug!(path = %path.display(), "Opened DP AUX device");
        Ok(DpAuxDevice {
            fd,
            path: path.to_path_buf(),
        })
    }

    /// Path the device was opened from
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl AsFd for DpAuxDevice {
    fn as_fd(&self) -> BorrowedFd<'_> {
        self.fd.as_fd()
    }
}

impl DpAux for DpAuxDevice {
    fn dpcd_read(&mut self, offset: u32, buf: &mut [u8]) -> Result<usize, AuxError> {
        match rustix::io::pread(&self.fd, buf, offset as u64) {
            Ok(got) => Ok(got),
            Err(Errno::TIMEDOUT) => Err(AuxError::Timeout),
            Err(errno) => Err(AuxError::Io(errno.into())),
        }
    }
}
