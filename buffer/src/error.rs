use core::fmt;
use std::io;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BufferError {
    // A write needed more bytes than what is left between the cursor and the
    // end of the storage region. Nothing was written.
    BufferFull {
        requested: usize,
        remaining: usize,
    },
    InternalSerializationError {
        description: &'static str,
    },
}

impl fmt::Display for BufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BufferFull {
                requested,
                remaining,
            } => write!(
                f,
                "fixed buffer full: {} bytes requested, {} bytes remaining",
                requested, remaining
            ),
            Self::InternalSerializationError { description } => {
                write!(f, "unable to serialize into fixed buffer: {}", description)
            }
        }
    }
}

impl std::error::Error for BufferError {}

impl From<BufferError> for io::Error {
    fn from(e: BufferError) -> Self {
        // io::copy() and write_all() retry on Interrupted, WriteZero stops them
        io::Error::new(io::ErrorKind::WriteZero, e)
    }
}

impl From<BufferError> for fmt::Error {
    fn from(_: BufferError) -> Self {
        fmt::Error
    }
}

// Recover the BufferError carried by an io::Error produced by our io::Write
// implementation, if any.
pub fn downcast_io_error(e: &io::Error) -> Option<&BufferError> {
    e.get_ref()
        .and_then(|inner| inner.downcast_ref::<BufferError>())
}
