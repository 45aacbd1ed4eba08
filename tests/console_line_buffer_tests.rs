//! Line buffer tests

use rust_serial_cli::console::line_buffer::LineBuffer;

#[test]
fn test_line_buffer_push() {
    let mut buf: LineBuffer = LineBuffer::new();

    for &c in b"help" {
        buf.push(c).unwrap();
    }

    assert_eq!(buf.as_str(), "help");
    assert_eq!(buf.len(), 4);
}

#[test]
fn test_line_buffer_pop() {
    let mut buf: LineBuffer = LineBuffer::new();

    for &c in b"help" {
        buf.push(c).unwrap();
    }
    assert_eq!(buf.pop(), Some(b'p'));
    assert_eq!(buf.pop(), Some(b'l'));

    assert_eq!(buf.as_str(), "he");
}

#[test]
fn test_line_buffer_pop_empty() {
    let mut buf: LineBuffer = LineBuffer::new();

    assert_eq!(buf.pop(), None);
    assert_eq!(buf.len(), 0);
    assert!(buf.is_empty());
}

#[test]
fn test_line_buffer_reserves_terminator_slot() {
    let mut buf = LineBuffer::<8>::new();

    for i in 0..7 {
        assert!(buf.push(b'0' + i).is_ok());
    }

    // Eighth byte would take the terminator slot
    assert_eq!(buf.push(b'x'), Err(b'x'));
    assert_eq!(buf.as_str(), "0123456");
}

#[test]
fn test_line_buffer_try_extend() {
    let mut buf = LineBuffer::<8>::new();
    buf.push(b'a').unwrap();

    // 1 + 5 < 7
    assert!(buf.try_extend(b"bcdef"));
    assert_eq!(buf.as_str(), "abcdef");

    // 6 + 1 is not < 7
    assert!(!buf.try_extend(b"g"));
    assert_eq!(buf.as_str(), "abcdef");
}

#[test]
fn test_line_buffer_clear() {
    let mut buf: LineBuffer = LineBuffer::new();

    for &c in b"test" {
        buf.push(c).unwrap();
    }
    buf.clear();

    assert!(buf.is_empty());
    assert_eq!(buf.as_str(), "");
}

#[test]
fn test_line_buffer_last_token() {
    let mut buf: LineBuffer = LineBuffer::new();
    assert!(buf.try_extend(b"set wp"));
    assert_eq!(buf.last_token(), b"wp");

    buf.push(b' ').unwrap();
    assert_eq!(buf.last_token(), b"");

    buf.clear();
    assert!(buf.try_extend(b"sh"));
    assert_eq!(buf.last_token(), b"sh");
}

#[test]
fn test_line_buffer_non_utf8() {
    let mut buf: LineBuffer = LineBuffer::new();
    buf.push(0xFF).unwrap();

    assert_eq!(buf.as_bytes(), &[0xFF]);
    assert_eq!(buf.as_str(), "");
}
