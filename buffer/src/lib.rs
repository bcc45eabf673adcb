// Fixed-capacity, append-only byte buffer over a caller-supplied storage region.
// Writes never reallocate: anything which does not fit is rejected as a whole.

mod buffer;
mod error;
mod marshal;
mod sink;
mod stackbuffer;
mod transfer;

pub use buffer::FixedBuffer;
pub use error::{downcast_io_error, BufferError};
pub use stackbuffer::StackBuffer;
pub use transfer::{Transfer, TransferEnd};
