//! Fake AUX channel used by the unit tests

use std::collections::HashMap;

use super::{AuxError, DpAux};

/// An in-memory DPCD register space that counts reads
#[derive(Debug, Default)]
pub struct FakeAux {
    registers: HashMap<u32, u8>,
    fail: bool,
    short: bool,
    reads: usize,
}

impl FakeAux {
    /// A sink reporting the given DPCD revision
    pub fn new(rev: u8) -> FakeAux {
        FakeAux::default().with_register(0x000, rev)
    }

    pub fn with_register(mut self, offset: u32, value: u8) -> FakeAux {
        self.registers.insert(offset, value);
        self
    }

    /// Every transfer fails with a timeout
    pub fn failing(mut self) -> FakeAux {
        self.fail = true;
        self
    }

    /// Every transfer moves zero bytes
    pub fn short(mut self) -> FakeAux {
        self.short = true;
        self
    }

    pub fn reads(&self) -> usize {
        self.reads
    }
}

impl DpAux for FakeAux {
    fn dpcd_read(&mut self, offset: u32, buf: &mut [u8]) -> Result<usize, AuxError> {
        self.reads += 1;
        if self.fail {
            return Err(AuxError::Timeout);
        }
        if self.short {
            return Ok(0);
        }
        for (i, byte) in buf.iter_mut().enumerate() {
            *byte = self.registers.get(&(offset + i as u32)).copied().unwrap_or(0);
        }
        Ok(buf.len())
    }
}
