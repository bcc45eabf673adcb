use common::{common_test_setup, test_bytes, ChunkedReader};
use fixbuf::{downcast_io_error, BufferError, FixedBuffer, StackBuffer};
use std::io;

#[test]
fn copy_into_buffer_with_room() {
    common_test_setup();
    let data = test_bytes(40);
    let mut buf = FixedBuffer::new(vec![0u8; 64]);
    let copied = io::copy(&mut ChunkedReader::new(&data, 16), &mut buf).unwrap();
    assert_eq!(copied, 40);
    assert_eq!(buf.bytes(), &data[..]);
}

#[test]
fn copy_overflow_keeps_earlier_chunks() {
    common_test_setup();
    let data = test_bytes(12);
    let mut buf = StackBuffer::<10>::zeroed();
    let err = io::copy(&mut ChunkedReader::new(&data, 4), &mut buf).unwrap_err();
    assert_eq!(
        downcast_io_error(&err),
        Some(&BufferError::BufferFull {
            requested: 4,
            remaining: 2
        })
    );
    // Two chunks made it, the third one was rejected as a whole
    assert_eq!(buf.bytes(), &data[..8]);
}

#[test]
fn copy_overflow_in_one_write() {
    common_test_setup();
    let data = test_bytes(12);
    let mut buf = StackBuffer::<10>::zeroed();
    let err = io::copy(&mut &data[..], &mut buf).unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::WriteZero);
    assert!(matches!(
        downcast_io_error(&err),
        Some(BufferError::BufferFull { remaining: 10, .. })
    ));
    assert!(buf.is_empty());
}

#[test]
fn copy_into_zero_value_buffer() {
    common_test_setup();
    let mut buf: FixedBuffer<&mut [u8]> = FixedBuffer::default();
    assert_eq!(io::copy(&mut io::empty(), &mut buf).unwrap(), 0);
    assert!(io::copy(&mut &b"x"[..], &mut buf).is_err());
}
