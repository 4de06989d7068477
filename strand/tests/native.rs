use strand::{
    before, begin, empty, end, front, is_native, materialize, materialize_values, pop_front,
    NativeBefore, NativeSequence,
};

/// A native sequence over the bytes of a string, counting from the front.
#[derive(Debug, Clone, PartialEq)]
struct Bytes<'a> {
    text: &'a str,
    start: usize,
    stop: usize,
}

impl<'a> Bytes<'a> {
    fn new(text: &'a str) -> Self {
        Bytes {
            text,
            start: 0,
            stop: text.len(),
        }
    }
}

impl NativeSequence for Bytes<'_> {
    type Value = u8;
    type Reference = u8;

    fn is_empty(&self) -> bool {
        self.start == self.stop
    }

    fn front(&self) -> u8 {
        self.text.as_bytes()[self.start]
    }

    fn pop_front(&mut self) {
        self.start += 1;
    }
}

impl NativeBefore for Bytes<'_> {
    fn before(&self, part: &Self) -> Self {
        Bytes {
            text: self.text,
            start: self.start,
            stop: part.start,
        }
    }
}

strand::assert_sequence!(Bytes<'static>);
strand::assert_sequence!(Bytes<'static>, u8);

#[test]
fn test_native_is_dispatched_natively() {
    assert!(is_native::<Bytes>());
}

#[test]
fn test_native_operations() {
    let mut bytes = Bytes::new("hi!");
    assert!(!empty(&bytes));
    assert_eq!(front(&bytes), b'h');
    assert_eq!(front(&bytes), b'h');
    pop_front(&mut bytes);
    assert_eq!(front(&bytes), b'i');
    pop_front(&mut bytes);
    pop_front(&mut bytes);
    assert!(empty(&bytes));
}

#[test]
fn test_native_before() {
    let whole = Bytes::new("abcd");
    let mut part = whole.clone();
    pop_front(&mut part);
    pop_front(&mut part);
    let prefix = before(&whole, &part);
    let collected: Vec<u8> = materialize(prefix);
    assert_eq!(collected, b"ab");
    // the prefix can be rebuilt as often as needed
    let again: Vec<u8> = materialize_values(before(&whole, &part));
    assert_eq!(again, b"ab");
}

#[test]
fn test_native_through_cursor() {
    let mut cursor = begin(Bytes::new("xy"));
    assert_ne!(cursor, end());
    assert_eq!(cursor.get(), b'x');
    cursor.advance();
    assert_eq!(cursor.get(), b'y');
    cursor.advance();
    assert_eq!(cursor, end());
}
