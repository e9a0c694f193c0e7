//! KNX cEMI frame codec.
//!
//! knxcemi decodes and encodes cEMI frames, the message format KNX bus
//! interfaces speak over USB, serial links and KNXnet/IP tunnels.
//!
//! # Crate Structure
//!
//! - [`frame`] — Message codes, payload types and the frame codec
//!
//! The `knxcemi` binary (behind the `cli` feature) decodes and encodes
//! hex-encoded frames from the command line.

/// Re-export frame types.
pub mod frame {
    pub use knxcemi_frame::*;
}

pub use knxcemi_frame::{
    decode_frame, encode_frame, frame_size, write_frame, Message, MessageCode,
};
