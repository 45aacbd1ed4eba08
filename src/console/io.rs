//! Byte transport seam
//!
//! The session never touches hardware. Firmware wraps its UART driver,
//! tests wrap a pair of in-memory queues.

/// Output half: fire-and-forget byte writes
pub trait Sink {
    /// Write bytes. Failures are the transport's business.
    fn write_bytes(&mut self, bytes: &[u8]);
}

/// Input half plus output
pub trait Transport: Sink {
    /// Read one byte. `None` means nothing available this tick.
    fn read_byte(&mut self) -> Option<u8>;
}

impl<S: Sink + ?Sized> Sink for &mut S {
    fn write_bytes(&mut self, bytes: &[u8]) {
        (**self).write_bytes(bytes);
    }
}

impl<T: Transport + ?Sized> Transport for &mut T {
    fn read_byte(&mut self) -> Option<u8> {
        (**self).read_byte()
    }
}
