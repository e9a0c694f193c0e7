//! The payload contract and the `Message` sum type.

use std::io::Write;

use bytes::{Bytes, BytesMut};

use crate::busmon::LBusmonInd;
use crate::code::MessageCode;
use crate::error::Result;
use crate::ldata::{LDataCon, LDataInd, LDataReq};
use crate::lraw::{LRawCon, LRawInd, LRawReq};
use crate::unsupported::UnsupportedMessage;

/// Encode side of a cEMI payload.
pub trait Payload {
    /// The code written in front of this payload.
    fn message_code(&self) -> MessageCode;

    /// Number of bytes [`Payload::pack`] writes.
    fn size(&self) -> usize;

    /// Serialize into `buf[..self.size()]`.
    ///
    /// # Panics
    ///
    /// Panics if `buf` is shorter than [`Payload::size`]. Use
    /// [`crate::pack_frame`] for a checked variant.
    fn pack(&self, buf: &mut [u8]);

    /// Serialize to a stream, returning the number of bytes written.
    fn write_to<W: Write + ?Sized>(&self, w: &mut W) -> std::io::Result<usize>;
}

/// Decode side of a cEMI payload.
pub trait Unpack {
    /// Replace the receiver's content by parsing `data`, returning the bytes consumed.
    ///
    /// On error the receiver may be left partially updated; callers discard it.
    fn unpack(&mut self, data: &[u8]) -> Result<usize>;
}

/// A decoded (or to-be-encoded) cEMI message body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    LBusmonInd(LBusmonInd),
    LDataReq(LDataReq),
    LDataCon(LDataCon),
    LDataInd(LDataInd),
    LRawReq(LRawReq),
    LRawCon(LRawCon),
    LRawInd(LRawInd),
    /// Any code without a dedicated payload type.
    Unsupported(UnsupportedMessage),
}

macro_rules! each_variant {
    ($value:expr, $inner:ident => $body:expr) => {
        match $value {
            Message::LBusmonInd($inner) => $body,
            Message::LDataReq($inner) => $body,
            Message::LDataCon($inner) => $body,
            Message::LDataInd($inner) => $body,
            Message::LRawReq($inner) => $body,
            Message::LRawCon($inner) => $body,
            Message::LRawInd($inner) => $body,
            Message::Unsupported($inner) => $body,
        }
    };
}

impl Message {
    /// An empty message of the kind registered for `code`.
    ///
    /// Codes without a dedicated type yield an empty [`UnsupportedMessage`]
    /// that remembers the code.
    pub fn empty_for(code: MessageCode) -> Self {
        match code {
            MessageCode::L_BUSMON_IND => Message::LBusmonInd(LBusmonInd::default()),
            MessageCode::L_DATA_REQ => Message::LDataReq(LDataReq::default()),
            MessageCode::L_DATA_CON => Message::LDataCon(LDataCon::default()),
            MessageCode::L_DATA_IND => Message::LDataInd(LDataInd::default()),
            MessageCode::L_RAW_REQ => Message::LRawReq(LRawReq::default()),
            MessageCode::L_RAW_CON => Message::LRawCon(LRawCon::default()),
            MessageCode::L_RAW_IND => Message::LRawInd(LRawInd::default()),
            other => Message::Unsupported(UnsupportedMessage::empty(other)),
        }
    }

    /// The message code of this frame.
    pub fn code(&self) -> MessageCode {
        self.message_code()
    }

    /// True for the fallback variant.
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Message::Unsupported(_))
    }

    /// The complete frame (code byte and payload) as a fresh buffer.
    pub fn to_frame_bytes(&self) -> Bytes {
        let mut dst = BytesMut::new();
        crate::codec::encode_frame(self, &mut dst);
        dst.freeze()
    }
}

impl Payload for Message {
    fn message_code(&self) -> MessageCode {
        each_variant!(self, inner => inner.message_code())
    }

    fn size(&self) -> usize {
        each_variant!(self, inner => inner.size())
    }

    fn pack(&self, buf: &mut [u8]) {
        each_variant!(self, inner => inner.pack(buf))
    }

    fn write_to<W: Write + ?Sized>(&self, w: &mut W) -> std::io::Result<usize> {
        each_variant!(self, inner => inner.write_to(w))
    }
}

impl Unpack for Message {
    fn unpack(&mut self, data: &[u8]) -> Result<usize> {
        each_variant!(self, inner => inner.unpack(data))
    }
}

macro_rules! impl_from_variant {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for Message {
                fn from(inner: $variant) -> Self {
                    Message::$variant(inner)
                }
            }
        )*
    };
}

impl_from_variant!(LBusmonInd, LDataReq, LDataCon, LDataInd, LRawReq, LRawCon, LRawInd);

impl From<UnsupportedMessage> for Message {
    fn from(inner: UnsupportedMessage) -> Self {
        Message::Unsupported(inner)
    }
}
