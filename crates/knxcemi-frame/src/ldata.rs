//! L_Data.req / L_Data.con / L_Data.ind payloads.
//!
//! Wire format:
//! ```text
//! ┌──────────────────────────┬───────────────────────────────┐
//! │ Additional info          │ Service body                  │
//! │ (length byte + data)     │ (all remaining bytes)         │
//! └──────────────────────────┴───────────────────────────────┘
//! ```
//!
//! The service body (control fields, addresses, TPDU) is kept opaque.

use std::io::Write;
use std::ops::{Deref, DerefMut};

use bytes::Bytes;

use crate::code::MessageCode;
use crate::error::Result;
use crate::info::Info;
use crate::message::{Payload, Unpack};

/// Shared body of all L_Data services.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct LData {
    pub info: Info,
    pub body: Bytes,
}

impl LData {
    pub fn new(info: Info, body: impl Into<Bytes>) -> Self {
        Self {
            info,
            body: body.into(),
        }
    }

    /// Encoded size: info segment plus body.
    pub fn size(&self) -> usize {
        self.info.size() + self.body.len()
    }

    pub fn pack(&self, buf: &mut [u8]) {
        let offset = self.info.size();
        self.info.pack(&mut buf[..offset]);
        buf[offset..offset + self.body.len()].copy_from_slice(&self.body);
    }

    pub fn write_to<W: Write + ?Sized>(&self, w: &mut W) -> std::io::Result<usize> {
        let n = self.info.write_to(w)?;
        w.write_all(&self.body)?;
        Ok(n + self.body.len())
    }

    /// Parse info then body; the body takes the rest of `data`.
    pub fn unpack(&mut self, data: &[u8]) -> Result<usize> {
        let mut info = Info::empty();
        let n = info.unpack(data)?;

        self.info = info;
        self.body = Bytes::copy_from_slice(&data[n..]);
        Ok(data.len())
    }
}

macro_rules! data_message {
    ($(#[$meta:meta])* $name:ident => $code:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
        pub struct $name(pub LData);

        impl $name {
            pub fn new(info: Info, body: impl Into<Bytes>) -> Self {
                Self(LData::new(info, body))
            }

            pub fn into_inner(self) -> LData {
                self.0
            }
        }

        impl From<LData> for $name {
            fn from(data: LData) -> Self {
                Self(data)
            }
        }

        impl Deref for $name {
            type Target = LData;

            fn deref(&self) -> &LData {
                &self.0
            }
        }

        impl DerefMut for $name {
            fn deref_mut(&mut self) -> &mut LData {
                &mut self.0
            }
        }

        impl Payload for $name {
            fn message_code(&self) -> MessageCode {
                $code
            }

            fn size(&self) -> usize {
                self.0.size()
            }

            fn pack(&self, buf: &mut [u8]) {
                self.0.pack(buf)
            }

            fn write_to<W: Write + ?Sized>(&self, w: &mut W) -> std::io::Result<usize> {
                self.0.write_to(w)
            }
        }

        impl Unpack for $name {
            fn unpack(&mut self, data: &[u8]) -> Result<usize> {
                self.0.unpack(data)
            }
        }
    };
}

data_message!(
    /// An L_Data.req message.
    LDataReq => MessageCode::L_DATA_REQ
);
data_message!(
    /// An L_Data.con message.
    LDataCon => MessageCode::L_DATA_CON
);
data_message!(
    /// An L_Data.ind message.
    LDataInd => MessageCode::L_DATA_IND
);
