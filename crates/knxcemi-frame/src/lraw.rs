//! L_Raw.req / L_Raw.con / L_Raw.ind payloads.
//!
//! Raw services carry a complete link-layer frame that the interface sends or
//! receives without interpretation, so each payload is an opaque byte run.

use std::io::Write;

use bytes::Bytes;

use crate::code::MessageCode;
use crate::error::Result;
use crate::message::{Payload, Unpack};

macro_rules! raw_message {
    ($(#[$meta:meta])* $name:ident => $code:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
        pub struct $name(pub Bytes);

        impl $name {
            pub fn new(data: impl Into<Bytes>) -> Self {
                Self(data.into())
            }

            pub fn as_bytes(&self) -> &Bytes {
                &self.0
            }
        }

        impl Payload for $name {
            fn message_code(&self) -> MessageCode {
                $code
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

        impl Unpack for $name {
            fn unpack(&mut self, data: &[u8]) -> Result<usize> {
                self.0 = Bytes::copy_from_slice(data);
                Ok(data.len())
            }
        }
    };
}

raw_message!(
    /// An L_Raw.req message.
    LRawReq => MessageCode::L_RAW_REQ
);
raw_message!(
    /// An L_Raw.con message.
    LRawCon => MessageCode::L_RAW_CON
);
raw_message!(
    /// An L_Raw.ind message.
    LRawInd => MessageCode::L_RAW_IND
);
