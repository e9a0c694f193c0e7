use std::io::Write;

use bytes::{BufMut, BytesMut};

use crate::code::MessageCode;
use crate::error::{FrameError, Result};
use crate::message::{Message, Payload, Unpack};

/// Frame header: message code (1) = 1 byte.
pub const HEADER_SIZE: usize = 1;

/// Default maximum frame size accepted by [`decode_frame_with_config`] and
/// [`crate::FrameWriter`]: 4 KiB.
pub const DEFAULT_MAX_FRAME_SIZE: usize = 4 * 1024;

/// Encoded size of a frame carrying `message`.
pub fn frame_size(message: &Message) -> usize {
    HEADER_SIZE + message.size()
}

/// Encode a frame into a caller-sized buffer, returning the bytes written.
///
/// Wire format:
/// ```text
/// ┌──────────────┬──────────────────────────────┐
/// │ Code (1B)    │ Payload (code-specific)      │
/// └──────────────┴──────────────────────────────┘
/// ```
pub fn pack_frame(buf: &mut [u8], message: &Message) -> Result<usize> {
    let needed = frame_size(message);
    if buf.len() < needed {
        return Err(FrameError::BufferTooSmall {
            needed,
            actual: buf.len(),
        });
    }

    buf[0] = message.code().0;
    message.pack(&mut buf[HEADER_SIZE..needed]);
    Ok(needed)
}

/// Append an encoded frame to `dst`.
pub fn encode_frame(message: &Message, dst: &mut BytesMut) {
    let size = message.size();
    dst.reserve(HEADER_SIZE + size);
    dst.put_u8(message.code().0);

    let start = dst.len();
    dst.resize(start + size, 0);
    message.pack(&mut dst[start..]);
}

/// Write a frame to a stream, returning the number of bytes written.
pub fn write_frame<W: Write + ?Sized>(w: &mut W, message: &Message) -> Result<usize> {
    w.write_all(&[message.code().0])?;
    let n = message.write_to(w)?;
    Ok(HEADER_SIZE + n)
}

/// Decode one frame from `data`.
///
/// Returns the message and the number of bytes consumed. Codes without a
/// dedicated payload type decode to [`Message::Unsupported`]; only truncated
/// input is an error.
pub fn decode_frame(data: &[u8]) -> Result<(Message, usize)> {
    let Some((&code, rest)) = data.split_first() else {
        return Err(FrameError::Truncated {
            expected: HEADER_SIZE,
            actual: 0,
        });
    };
    let code = MessageCode(code);

    let mut message = Message::empty_for(code);
    if message.is_unsupported() {
        tracing::debug!(%code, len = rest.len(), "no payload type for message code");
    }

    let n = message.unpack(rest)?;
    tracing::trace!(%code, consumed = HEADER_SIZE + n, "decoded cEMI frame");

    Ok((message, HEADER_SIZE + n))
}

/// Decode one frame, rejecting input larger than `config.max_frame_size`.
pub fn decode_frame_with_config(data: &[u8], config: &FrameConfig) -> Result<(Message, usize)> {
    if data.len() > config.max_frame_size {
        return Err(FrameError::FrameTooLarge {
            size: data.len(),
            max: config.max_frame_size,
        });
    }
    decode_frame(data)
}

/// Configuration for the frame codec.
#[derive(Debug, Clone)]
pub struct FrameConfig {
    /// Maximum frame size in bytes (code byte included). Default: 4 KiB.
    pub max_frame_size: usize,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            max_frame_size: DEFAULT_MAX_FRAME_SIZE,
        }
    }
}
