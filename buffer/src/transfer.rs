use crate::buffer::FixedBuffer;
use log::debug;
use std::io::{self, Read};

// Why a read_from() loop stopped.
#[derive(Debug)]
pub enum TransferEnd {
    // The reader returned Ok(0) while there was still room in the buffer
    EndOfStream,
    // The reader returned Ok(0) for an empty window: the buffer is full
    Completed,
    // The reader failed. Bytes read before the failure stay in the buffer.
    Failed(io::Error),
}

#[derive(Debug)]
pub struct Transfer {
    pub transferred: u64,
    pub end: TransferEnd,
}

impl Transfer {
    pub fn reached_end_of_stream(&self) -> bool {
        matches!(self.end, TransferEnd::EndOfStream)
    }

    // Collapses end of stream and a full buffer into success, for callers
    // which only care about errors.
    pub fn into_result(self) -> io::Result<u64> {
        match self.end {
            TransferEnd::EndOfStream | TransferEnd::Completed => Ok(self.transferred),
            TransferEnd::Failed(e) => Err(e),
        }
    }
}

impl<S: AsRef<[u8]> + AsMut<[u8]>> FixedBuffer<S> {
    /// Reads from `reader` directly into the unwritten part of the storage,
    /// until the reader reports end of stream, fails, or returns no bytes.
    ///
    /// The buffer never grows: once full, the reader is handed an empty slice,
    /// and most readers answer with `Ok(0)`, which ends the loop. There is no
    /// retry, `ErrorKind::Interrupted` is reported like any other error.
    pub fn read_from<R: Read + ?Sized>(&mut self, reader: &mut R) -> Transfer {
        let mut transferred = 0u64;
        loop {
            let (cursor, capacity) = (self.cursor, self.capacity());
            let window = &mut self.storage.as_mut()[cursor..capacity];
            let window_len = window.len();
            let end = match reader.read(window) {
                Ok(0) if window_len == 0 => TransferEnd::Completed,
                Ok(0) => TransferEnd::EndOfStream,
                Ok(n) if n > window_len => TransferEnd::Failed(io::Error::new(
                    io::ErrorKind::InvalidData,
                    "reader reported more bytes than the slice it was given",
                )),
                Ok(n) => {
                    self.cursor += n;
                    transferred += n as u64;
                    continue;
                }
                Err(e) => TransferEnd::Failed(e),
            };
            if let TransferEnd::Failed(e) = &end {
                debug!(
                    "Read into fixed buffer stopped after {} bytes: {}",
                    transferred, e
                );
            }
            return Transfer { transferred, end };
        }
    }
}
