use crate::buffer::FixedBuffer;

// For places where we cannot allocate dynamic memory: the storage lives
// wherever the buffer itself lives, usually on the stack.
pub type StackBuffer<const SIZE: usize> = FixedBuffer<[u8; SIZE]>;

impl<const SIZE: usize> FixedBuffer<[u8; SIZE]> {
    pub const fn zeroed() -> Self {
        Self {
            storage: [0u8; SIZE],
            cursor: 0,
        }
    }
}
