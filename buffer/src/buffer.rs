use crate::error::BufferError;
use core::fmt;
use core::str::Utf8Error;
use log::debug;
use std::borrow::Cow;

// Append-only writer over a storage region whose length never changes. The
// region is either borrowed from the caller (&mut [u8]) or owned (Vec<u8>,
// [u8; N]). Its initial contents are not part of the written data, they are
// just the bytes that will be overwritten.
#[derive(Default, Clone)]
pub struct FixedBuffer<S> {
    pub(crate) storage: S,
    pub(crate) cursor: usize,
}

impl<S: AsRef<[u8]>> FixedBuffer<S> {
    pub fn new(storage: S) -> Self {
        Self { storage, cursor: 0 }
    }

    pub fn into_inner(self) -> S {
        self.storage
    }

    /// Bytes written since construction or the last `reset()`.
    pub fn bytes(&self) -> &[u8] {
        &self.storage.as_ref()[..self.cursor]
    }

    pub fn as_str(&self) -> Result<&str, Utf8Error> {
        core::str::from_utf8(self.bytes())
    }

    /// Written bytes as text. Invalid UTF-8 sequences are replaced instead of
    /// reported, this is meant for logs and debugging.
    pub fn to_text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(self.bytes())
    }

    pub fn text_or_nil(buffer: Option<&Self>) -> Cow<'_, str> {
        match buffer {
            Some(buffer) => buffer.to_text(),
            None => Cow::Borrowed("<nil>"),
        }
    }

    pub fn len(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.cursor == 0
    }

    pub fn capacity(&self) -> usize {
        self.storage.as_ref().len()
    }

    pub fn remaining(&self) -> usize {
        self.capacity() - self.cursor
    }

    pub fn is_full(&self) -> bool {
        self.cursor == self.capacity()
    }

    // Checks that the buffer has space for n more bytes, and returns the
    // offset where they should be written.
    fn check_len(&self, n: usize) -> Result<usize, BufferError> {
        let remaining = self.remaining();
        if n > remaining {
            debug!(
                "Refusing to write {} bytes, only {} of {} bytes left",
                n,
                remaining,
                self.capacity()
            );
            return Err(BufferError::BufferFull {
                requested: n,
                remaining,
            });
        }
        Ok(self.cursor)
    }
}

impl<S: AsRef<[u8]> + AsMut<[u8]>> FixedBuffer<S> {
    /// Written bytes, mutable in place. Changes are visible through `bytes()`
    /// until the next reset.
    pub fn bytes_mut(&mut self) -> &mut [u8] {
        let cursor = self.cursor;
        &mut self.storage.as_mut()[..cursor]
    }

    /// Rewinds the cursor. The storage is not cleared.
    pub fn reset(&mut self) {
        self.cursor = 0;
    }

    /// Appends `data` entirely, or not at all.
    pub fn write_bytes(&mut self, data: &[u8]) -> Result<usize, BufferError> {
        let offset = self.check_len(data.len())?;
        let end = offset + data.len();
        self.storage.as_mut()[offset..end].copy_from_slice(data);
        self.cursor = end;
        Ok(data.len())
    }

    pub fn write_str(&mut self, s: &str) -> Result<usize, BufferError> {
        self.write_bytes(s.as_bytes())
    }

    pub fn write_byte(&mut self, b: u8) -> Result<(), BufferError> {
        let offset = self.check_len(1)?;
        self.storage.as_mut()[offset] = b;
        self.cursor += 1;
        Ok(())
    }

    /// Appends the UTF-8 encoding of `c` and returns its length.
    ///
    /// ASCII characters always report `Ok(1)`, even when the buffer is full
    /// and nothing could be written. Callers depend on this, check `len()` if
    /// the difference matters. Multi-byte characters are written entirely or
    /// rejected with `BufferError::BufferFull`.
    pub fn write_char(&mut self, c: char) -> Result<usize, BufferError> {
        if c.is_ascii() {
            let _ = self.write_byte(c as u8);
            return Ok(1);
        }
        let mut scratch = [0u8; 4];
        let encoded = c.encode_utf8(&mut scratch);
        self.write_bytes(encoded.as_bytes())
    }
}

impl<S: AsRef<[u8]>> fmt::Display for FixedBuffer<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

impl<S: AsRef<[u8]>> fmt::Debug for FixedBuffer<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FixedBuffer")
            .field("written", &self.bytes())
            .field("capacity", &self.capacity())
            .finish()
    }
}
