use std::io::Write;

use bytes::Bytes;

use crate::code::MessageCode;
use crate::error::Result;
use crate::message::{Payload, Unpack};

/// Raw body of a frame whose code has no dedicated payload type.
///
/// The bytes are kept exactly as received, so code + data reproduce the
/// original frame. The code is never a registered one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UnsupportedMessage {
    code: MessageCode,
    data: Bytes,
}

impl UnsupportedMessage {
    /// Returns `None` for registered codes, which decode to their own payload type.
    pub fn new(code: MessageCode, data: impl Into<Bytes>) -> Option<Self> {
        if code.is_registered() {
            return None;
        }
        Some(Self {
            code,
            data: data.into(),
        })
    }

    pub(crate) fn empty(code: MessageCode) -> Self {
        debug_assert!(!code.is_registered());
        Self {
            code,
            data: Bytes::new(),
        }
    }

    pub fn code(&self) -> MessageCode {
        self.code
    }

    pub fn data(&self) -> &Bytes {
        &self.data
    }

    pub fn into_data(self) -> Bytes {
        self.data
    }
}

impl Payload for UnsupportedMessage {
    fn message_code(&self) -> MessageCode {
        self.code
    }

    fn size(&self) -> usize {
        self.data.len()
    }

    fn pack(&self, buf: &mut [u8]) {
        buf[..self.data.len()].copy_from_slice(&self.data);
    }

    fn write_to<W: Write + ?Sized>(&self, w: &mut W) -> std::io::Result<usize> {
        w.write_all(&self.data)?;
        Ok(self.data.len())
    }
}

impl Unpack for UnsupportedMessage {
    /// Takes all of `data`; never fails.
    fn unpack(&mut self, data: &[u8]) -> Result<usize> {
        self.data = Bytes::copy_from_slice(data);
        Ok(data.len())
    }
}
