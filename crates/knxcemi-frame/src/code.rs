//! cEMI message codes.
//!
//! The first byte of every frame identifies the payload kind. Only a handful of
//! codes have a dedicated payload type; every other value is still a valid
//! `MessageCode` and is carried through by [`crate::UnsupportedMessage`].

use std::fmt;

/// An 8-bit cEMI message code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MessageCode(pub u8);

impl MessageCode {
    /// L_Raw.req: raw frame to be sent on the bus.
    pub const L_RAW_REQ: MessageCode = MessageCode(0x10);

    /// L_Data.req: data frame to be sent on the bus.
    pub const L_DATA_REQ: MessageCode = MessageCode(0x11);

    /// L_Data.ind: data frame received from the bus.
    pub const L_DATA_IND: MessageCode = MessageCode(0x29);

    /// L_Busmon.ind: frame observed in bus monitor mode.
    pub const L_BUSMON_IND: MessageCode = MessageCode(0x2B);

    /// L_Raw.ind: raw frame received from the bus.
    pub const L_RAW_IND: MessageCode = MessageCode(0x2D);

    /// L_Data.con: local confirmation of an L_Data.req.
    pub const L_DATA_CON: MessageCode = MessageCode(0x2E);

    /// L_Raw.con: local confirmation of an L_Raw.req.
    pub const L_RAW_CON: MessageCode = MessageCode(0x2F);

    /// Every code with a dedicated payload type, in ascending order.
    pub const REGISTERED: [MessageCode; 7] = [
        Self::L_RAW_REQ,
        Self::L_DATA_REQ,
        Self::L_DATA_IND,
        Self::L_BUSMON_IND,
        Self::L_RAW_IND,
        Self::L_DATA_CON,
        Self::L_RAW_CON,
    ];

    /// Returns the symbolic name of a registered code.
    pub const fn name(self) -> Option<&'static str> {
        match self {
            Self::L_BUSMON_IND => Some("LBusmonInd"),
            Self::L_DATA_REQ => Some("LDataReq"),
            Self::L_DATA_IND => Some("LDataInd"),
            Self::L_DATA_CON => Some("LDataCon"),
            Self::L_RAW_REQ => Some("LRawReq"),
            Self::L_RAW_IND => Some("LRawInd"),
            Self::L_RAW_CON => Some("LRawCon"),
            _ => None,
        }
    }

    /// Returns true if the code has a dedicated payload type.
    pub const fn is_registered(self) -> bool {
        self.name().is_some()
    }

    /// Returns true for the L_Data family (req/con/ind).
    pub const fn is_data(self) -> bool {
        matches!(self, Self::L_DATA_REQ | Self::L_DATA_CON | Self::L_DATA_IND)
    }

    /// Looks up a registered code by its symbolic name (case-insensitive).
    pub fn from_name(name: &str) -> Option<MessageCode> {
        Self::REGISTERED
            .into_iter()
            .find(|code| code.name().is_some_and(|n| n.eq_ignore_ascii_case(name)))
    }
}

impl From<u8> for MessageCode {
    fn from(value: u8) -> Self {
        MessageCode(value)
    }
}

impl From<MessageCode> for u8 {
    fn from(code: MessageCode) -> Self {
        code.0
    }
}

impl fmt::Display for MessageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "{:#x}", self.0),
        }
    }
}
