use crate::buffer::FixedBuffer;
use core::fmt;
use std::io;

// Lets the buffer be the destination of io::copy() and friends. A write which
// does not fit is rejected entirely with an io::Error wrapping
// BufferError::BufferFull: this is never a partial write.
impl<S: AsRef<[u8]> + AsMut<[u8]>> io::Write for FixedBuffer<S> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        Ok(self.write_bytes(buf)?)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

// Every write_str() call made by the formatter is written or rejected as a
// whole. A write!() failing midway keeps what earlier calls wrote.
impl<S: AsRef<[u8]> + AsMut<[u8]>> fmt::Write for FixedBuffer<S> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        FixedBuffer::write_str(self, s)?;
        Ok(())
    }
}
