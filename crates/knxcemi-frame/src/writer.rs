use std::io::{ErrorKind, Write};

use bytes::BytesMut;

use crate::codec::{encode_frame, frame_size, FrameConfig};
use crate::error::{FrameError, Result};
use crate::message::Message;

const INITIAL_BUFFER_CAPACITY: usize = 512;

/// Writes complete cEMI frames to any `Write` stream.
pub struct FrameWriter<T> {
    inner: T,
    buf: BytesMut,
    config: FrameConfig,
}

impl<T: Write> FrameWriter<T> {
    /// Create a new frame writer with default configuration.
    pub fn new(inner: T) -> Self {
        Self::with_config(inner, FrameConfig::default())
    }

    /// Create a new frame writer with explicit configuration.
    pub fn with_config(inner: T, config: FrameConfig) -> Self {
        Self {
            inner,
            buf: BytesMut::with_capacity(INITIAL_BUFFER_CAPACITY),
            config,
        }
    }

    /// Encode and write one frame (blocking), then flush.
    pub fn write_message(&mut self, message: &Message) -> Result<()> {
        let size = frame_size(message);
        if size > self.config.max_frame_size {
            return Err(FrameError::FrameTooLarge {
                size,
                max: self.config.max_frame_size,
            });
        }

        self.buf.clear();
        encode_frame(message, &mut self.buf);

        let mut offset = 0usize;
        while offset < self.buf.len() {
            match self.inner.write(&self.buf[offset..]) {
                Ok(0) => return Err(FrameError::Closed),
                Ok(n) => offset += n,
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) if err.kind() == ErrorKind::WouldBlock => continue,
                Err(err) => return Err(FrameError::Io(err)),
            }
        }

        tracing::trace!(code = %message.code(), size, "wrote cEMI frame");
        self.flush()
    }

    /// Flush the underlying stream.
    pub fn flush(&mut self) -> Result<()> {
        loop {
            match self.inner.flush() {
                Ok(()) => return Ok(()),
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) if err.kind() == ErrorKind::WouldBlock => continue,
                Err(err) => return Err(FrameError::Io(err)),
            }
        }
    }

    /// Borrow the underlying stream.
    pub fn get_ref(&self) -> &T {
        &self.inner
    }

    /// Mutably borrow the underlying stream.
    pub fn get_mut(&mut self) -> &mut T {
        &mut self.inner
    }

    /// Consume the writer and return the inner stream.
    pub fn into_inner(self) -> T {
        self.inner
    }

    /// Update maximum frame size for subsequent writes.
    pub fn set_max_frame_size(&mut self, max_frame_size: usize) {
        self.config.max_frame_size = max_frame_size;
    }

    /// Current frame writer configuration.
    pub fn config(&self) -> &FrameConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    use super::*;
    use crate::busmon::LBusmonInd;
    use crate::codec::decode_frame;
    use crate::info::Info;
    use crate::ldata::LDataReq;
    use crate::unsupported::UnsupportedMessage;
    use crate::MessageCode;

    fn busmon(data: &[u8]) -> Message {
        Message::from(LBusmonInd::new(data.to_vec()))
    }

    #[test]
    fn write_single_frame() {
        let mut writer = FrameWriter::new(Cursor::new(Vec::<u8>::new()));
        writer.write_message(&busmon(b"\x01\x02")).unwrap();

        let wire = writer.into_inner().into_inner();
        assert_eq!(wire, vec![0x2B, 0x01, 0x02]);
    }

    #[test]
    fn write_multiple_frames() {
        let mut writer = FrameWriter::new(Cursor::new(Vec::<u8>::new()));
        let req = Message::from(LDataReq::new(Info::empty(), vec![0xBC, 0xE0]));
        let other = UnsupportedMessage::new(MessageCode(0xFC), vec![0x01]).unwrap();
        let other = Message::from(other);

        writer.write_message(&req).unwrap();
        writer.write_message(&other).unwrap();

        let wire = writer.into_inner().into_inner();
        assert_eq!(wire, vec![0x11, 0x00, 0xBC, 0xE0, 0xFC, 0x01]);

        let (first, n) = decode_frame(&wire[..4]).unwrap();
        assert_eq!(n, 4);
        assert_eq!(first, req);
        let (second, _) = decode_frame(&wire[4..]).unwrap();
        assert_eq!(second, other);
    }

    #[test]
    fn frame_too_large_rejected() {
        let cfg = FrameConfig { max_frame_size: 4 };
        let mut writer = FrameWriter::with_config(Cursor::new(Vec::<u8>::new()), cfg);

        let err = writer.write_message(&busmon(b"oversized")).unwrap_err();
        assert!(matches!(err, FrameError::FrameTooLarge { size: 10, .. }));
        assert!(writer.get_ref().get_ref().is_empty());
    }

    #[test]
    fn set_max_frame_size_applies() {
        let mut writer = FrameWriter::new(Cursor::new(Vec::<u8>::new()));
        writer.set_max_frame_size(2);
        assert_eq!(writer.config().max_frame_size, 2);
        assert!(writer.write_message(&busmon(b"\x01\x02")).is_err());
    }

    #[test]
    fn flush_propagates() {
        let sink = FlushTrackingWriter::default();
        let flag = Arc::clone(&sink.flushed);
        let mut writer = FrameWriter::new(sink);

        writer.write_message(&busmon(b"x")).unwrap();

        assert!(flag.load(Ordering::SeqCst));
    }

    #[test]
    fn accessors_and_into_inner() {
        let mut writer = FrameWriter::new(Cursor::new(Vec::<u8>::new()));

        let _ = writer.get_ref();
        let _ = writer.get_mut();
        let _inner = writer.into_inner();
    }

    #[test]
    fn handles_interrupted_write_and_flush() {
        let writer_impl = InterruptedWriteThenFlush {
            wrote_once: false,
            flush_interrupted: false,
            data: Vec::new(),
        };

        let mut writer = FrameWriter::new(writer_impl);
        writer.write_message(&busmon(b"retry")).unwrap();

        let inner = writer.into_inner();
        assert_eq!(inner.data, b"\x2Bretry".to_vec());
    }

    #[test]
    fn closed_when_write_returns_zero() {
        let mut writer = FrameWriter::new(ZeroWriter);
        let err = writer.write_message(&busmon(b"x")).unwrap_err();
        assert!(matches!(err, FrameError::Closed));
    }

    #[test]
    fn io_error_propagates() {
        let mut writer = FrameWriter::new(BrokenPipeWriter);
        let err = writer.write_message(&busmon(b"x")).unwrap_err();
        assert!(matches!(err, FrameError::Io(e) if e.kind() == ErrorKind::BrokenPipe));
    }

    #[test]
    fn partial_writes_are_completed() {
        let mut writer = FrameWriter::new(OneByteWriter::default());
        writer.write_message(&busmon(b"\x0A\x0B\x0C")).unwrap();
        assert_eq!(writer.into_inner().data, vec![0x2B, 0x0A, 0x0B, 0x0C]);
    }

    #[derive(Default)]
    struct FlushTrackingWriter {
        flushed: Arc<AtomicBool>,
        data: Vec<u8>,
    }

    impl Write for FlushTrackingWriter {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.data.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            self.flushed.store(true, Ordering::SeqCst);
            Ok(())
        }
    }

    struct InterruptedWriteThenFlush {
        wrote_once: bool,
        flush_interrupted: bool,
        data: Vec<u8>,
    }

    impl Write for InterruptedWriteThenFlush {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            if !self.wrote_once {
                self.wrote_once = true;
                return Err(std::io::Error::from(ErrorKind::Interrupted));
            }
            self.data.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            if !self.flush_interrupted {
                self.flush_interrupted = true;
                return Err(std::io::Error::from(ErrorKind::Interrupted));
            }
            Ok(())
        }
    }

    #[derive(Default)]
    struct OneByteWriter {
        data: Vec<u8>,
    }

    impl Write for OneByteWriter {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            match buf.first() {
                Some(b) => {
                    self.data.push(*b);
                    Ok(1)
                }
                None => Ok(0),
            }
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    struct ZeroWriter;

    impl Write for ZeroWriter {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Ok(0)
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    struct BrokenPipeWriter;

    impl Write for BrokenPipeWriter {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::from(ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }
}
