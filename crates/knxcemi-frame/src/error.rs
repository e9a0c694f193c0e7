/// Errors that can occur during cEMI frame encoding/decoding.
#[derive(Debug, thiserror::Error)]
pub enum FrameError {
    /// The input ended before a field it declares was complete.
    #[error("truncated frame (expected {expected} bytes, got {actual})")]
    Truncated { expected: usize, actual: usize },

    /// The caller-supplied buffer cannot hold the encoded frame.
    #[error("buffer too small ({actual} bytes, need {needed})")]
    BufferTooSmall { needed: usize, actual: usize },

    /// The frame exceeds the configured maximum size.
    #[error("frame too large ({size} bytes, max {max})")]
    FrameTooLarge { size: usize, max: usize },

    /// An I/O error occurred while writing frames.
    #[error("frame I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The sink stopped accepting bytes before the frame was written.
    #[error("sink closed (incomplete frame)")]
    Closed,
}

pub type Result<T> = std::result::Result<T, FrameError>;
