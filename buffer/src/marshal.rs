use crate::buffer::FixedBuffer;
use crate::error::BufferError;
use log::debug;
use serde::Serialize;

impl<S: AsRef<[u8]> + AsMut<[u8]>> FixedBuffer<S> {
    /// Serializes `msg` with postcard right after the bytes already written,
    /// and returns the encoded length.
    ///
    /// If the encoding does not fit, the cursor does not move and
    /// `BufferError::BufferFull` is returned. The unwritten part of the
    /// storage may have been overwritten in the attempt.
    pub fn write_serialized<T: Serialize + ?Sized>(
        &mut self,
        msg: &T,
    ) -> Result<usize, BufferError> {
        let (cursor, capacity) = (self.cursor, self.capacity());
        let window = &mut self.storage.as_mut()[cursor..capacity];
        let remaining = window.len();
        let written = match postcard::to_slice(msg, window) {
            Ok(encoded) => encoded.len(),
            Err(postcard::Error::SerializeBufferFull) => {
                // Only computed on this slow path, to report how far off we were
                let requested = postcard::to_allocvec(msg)
                    .map(|v| v.len())
                    .unwrap_or(remaining + 1);
                debug!(
                    "Refusing to serialize {} bytes, only {} of {} bytes left",
                    requested, remaining, capacity
                );
                return Err(BufferError::BufferFull {
                    requested,
                    remaining,
                });
            }
            Err(e) => {
                return Err(BufferError::InternalSerializationError {
                    description: serialization_failure(&e),
                })
            }
        };
        self.cursor += written;
        Ok(written)
    }
}

// SerializeBufferFull is reported as BufferError::BufferFull by the caller
fn serialization_failure(e: &postcard::Error) -> &'static str {
    match e {
        postcard::Error::SerializeSeqLengthUnknown => "sequences need a known length",
        postcard::Error::CollectStrError => "value could not be formatted as a string",
        postcard::Error::SerdeSerCustom => "value refused to serialize itself",
        postcard::Error::WontImplement | postcard::Error::NotYetImplemented => {
            "value uses a serde feature postcard does not support"
        }
        _ => "unknown postcard error",
    }
}
