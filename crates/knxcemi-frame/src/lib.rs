//! KNX cEMI frame codec.
//!
//! Every cEMI frame is a single message-code byte followed by a payload whose
//! layout depends on the code:
//! - L_Busmon.ind and L_Raw.* carry an opaque byte run
//! - L_Data.* start with a length-prefixed additional info block
//! - any other code is preserved verbatim as an [`UnsupportedMessage`]
//!
//! Decoding never rejects a frame for its code, only for truncation.

pub mod busmon;
pub mod code;
pub mod codec;
pub mod error;
pub mod info;
pub mod ldata;
pub mod lraw;
pub mod message;
pub mod unsupported;
pub mod writer;

pub use busmon::LBusmonInd;
pub use code::MessageCode;
pub use codec::{
    decode_frame, decode_frame_with_config, encode_frame, frame_size, pack_frame, write_frame,
    FrameConfig, DEFAULT_MAX_FRAME_SIZE, HEADER_SIZE,
};
pub use error::{FrameError, Result};
pub use info::Info;
pub use ldata::{LData, LDataCon, LDataInd, LDataReq};
pub use lraw::{LRawCon, LRawInd, LRawReq};
pub use message::{Message, Payload, Unpack};
pub use unsupported::UnsupportedMessage;
pub use writer::FrameWriter;
