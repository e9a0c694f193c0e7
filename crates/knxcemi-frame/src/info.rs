//! Additional information segment.
//!
//! Wire format:
//! ```text
//! ┌────────────┬──────────────────────┐
//! │ Length (1B)│ Data (Length bytes)  │
//! └────────────┴──────────────────────┘
//! ```
//!
//! The length byte caps the encoded data at 255 bytes. Longer segments are
//! clamped on every encode path and a warning is logged.

use std::io::Write;

use bytes::Bytes;

use crate::error::{FrameError, Result};

/// The additional info block carried by L_Data messages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Info(Bytes);

impl Info {
    /// Largest number of data bytes the length prefix can describe.
    pub const MAX_LEN: usize = u8::MAX as usize;

    /// Create an info segment from raw bytes.
    pub fn new(data: impl Into<Bytes>) -> Self {
        Self(data.into())
    }

    /// An empty info segment (encodes as a single zero byte).
    pub fn empty() -> Self {
        Self(Bytes::new())
    }

    /// The logical content, which may exceed what gets encoded.
    pub fn as_bytes(&self) -> &Bytes {
        &self.0
    }

    /// Logical length, before clamping.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if there is no additional info.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns true if encoding will drop bytes past [`Info::MAX_LEN`].
    pub fn is_oversized(&self) -> bool {
        self.0.len() > Self::MAX_LEN
    }

    /// Encoded size: one length byte plus at most 255 data bytes.
    pub fn size(&self) -> usize {
        1 + self.0.len().min(Self::MAX_LEN)
    }

    /// Write the segment into `buf`, which must hold at least [`Info::size`] bytes.
    pub fn pack(&self, buf: &mut [u8]) {
        let data = self.encoded_data();
        buf[0] = data.len() as u8;
        buf[1..1 + data.len()].copy_from_slice(data);
    }

    /// Write the segment to a stream, returning the number of bytes written.
    pub fn write_to<W: Write + ?Sized>(&self, w: &mut W) -> std::io::Result<usize> {
        let data = self.encoded_data();
        w.write_all(&[data.len() as u8])?;
        w.write_all(data)?;
        Ok(1 + data.len())
    }

    /// Parse a segment from the front of `data`, returning the bytes consumed.
    pub fn unpack(&mut self, data: &[u8]) -> Result<usize> {
        let Some(&length) = data.first() else {
            return Err(FrameError::Truncated {
                expected: 1,
                actual: 0,
            });
        };

        let total = 1 + length as usize;
        if data.len() < total {
            return Err(FrameError::Truncated {
                expected: total,
                actual: data.len(),
            });
        }

        self.0 = if length == 0 {
            Bytes::new()
        } else {
            Bytes::copy_from_slice(&data[1..total])
        };

        Ok(total)
    }

    /// The slice that actually goes on the wire.
    fn encoded_data(&self) -> &[u8] {
        if self.is_oversized() {
            tracing::warn!(
                len = self.0.len(),
                encoded = Self::MAX_LEN,
                "additional info exceeds 255 bytes; truncating"
            );
            return &self.0[..Self::MAX_LEN];
        }
        &self.0
    }
}

impl From<Vec<u8>> for Info {
    fn from(data: Vec<u8>) -> Self {
        Self(data.into())
    }
}

impl From<&'static [u8]> for Info {
    fn from(data: &'static [u8]) -> Self {
        Self(Bytes::from_static(data))
    }
}
