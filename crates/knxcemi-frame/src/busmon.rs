//! L_Busmon.ind payload.
//!
//! In bus monitor mode the interface reports every frame it sees on the bus,
//! including ones it would normally filter. The payload is the observed frame
//! byte for byte; nothing in it is interpreted here.

use std::io::Write;

use bytes::Bytes;

use crate::code::MessageCode;
use crate::error::Result;
use crate::message::{Payload, Unpack};

/// An L_Busmon.ind message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct LBusmonInd(pub Bytes);

impl LBusmonInd {
    pub fn new(data: impl Into<Bytes>) -> Self {
        Self(data.into())
    }

    pub fn as_bytes(&self) -> &Bytes {
        &self.0
    }

    pub fn into_bytes(self) -> Bytes {
        self.0
    }
}

impl Payload for LBusmonInd {
    fn message_code(&self) -> MessageCode {
        MessageCode::L_BUSMON_IND
    }

    fn size(&self) -> usize {
        self.0.len()
    }

    fn pack(&self, buf: &mut [u8]) {
        buf[..self.0.len()].copy_from_slice(&self.0);
    }

    fn write_to<W: Write + ?Sized>(&self, w: &mut W) -> std::io::Result<usize> {
        w.write_all(&self.0)?;
        Ok(self.0.len())
    }
}

impl Unpack for LBusmonInd {
    fn unpack(&mut self, data: &[u8]) -> Result<usize> {
        // Always a fresh copy sized to `data`; a shorter frame must not inherit
        // the tail of a previous one.
        self.0 = Bytes::copy_from_slice(data);
        Ok(data.len())
    }
}
