use byteorder::{BigEndian, ReadBytesExt};
use std::io::Cursor;

/// Forward-only reader over a borrowed byte slice.
///
/// Failed reads leave the position untouched.
pub struct ByteCursor<'a> {
    inner: Cursor<&'a [u8]>,
}

impl<'a> ByteCursor<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            inner: Cursor::new(data),
        }
    }

    pub fn position(&self) -> usize {
        self.inner.position() as usize
    }

    pub fn remaining(&self) -> usize {
        self.inner.get_ref().len().saturating_sub(self.position())
    }

    fn rest(&self) -> &'a [u8] {
        let data: &'a [u8] = *self.inner.get_ref();
        &data[self.position().min(data.len())..]
    }

    /// Read text up to the next NUL and consume the terminator.
    ///
    /// Invalid UTF-8 is replaced with U+FFFD. Returns `None` when no
    /// terminator is left in the buffer.
    pub fn read_null_terminated_string(&mut self) -> Option<String> {
        let rest = self.rest();
        let nul = rest.iter().position(|&b| b == 0)?;
        let s = String::from_utf8_lossy(&rest[..nul]).into_owned();
        self.inner.set_position((self.position() + nul + 1) as u64);
        Some(s)
    }

    /// Big-endian u32. A short read is `UnexpectedEof`.
    pub fn read_u32(&mut self) -> std::io::Result<u32> {
        if self.remaining() < 4 {
            return Err(std::io::ErrorKind::UnexpectedEof.into());
        }
        self.inner.read_u32::<BigEndian>()
    }

    /// Owned copy of everything after the current position.
    pub fn read_remaining(&mut self) -> Vec<u8> {
        let buf = self.rest().to_vec();
        self.inner.set_position(self.inner.get_ref().len() as u64);
        buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_strings_then_integers() {
        let mut data = b"urn:a\0\0".to_vec();
        data.extend_from_slice(&0x0102_0304u32.to_be_bytes());
        data.extend_from_slice(&[9, 9]);

        let mut cur = ByteCursor::new(&data);
        assert_eq!(cur.read_null_terminated_string().as_deref(), Some("urn:a"));
        assert_eq!(cur.read_null_terminated_string().as_deref(), Some(""));
        assert_eq!(cur.read_u32().unwrap(), 0x0102_0304);
        assert_eq!(cur.remaining(), 2);
        assert_eq!(cur.read_remaining(), vec![9, 9]);
        assert_eq!(cur.remaining(), 0);
        assert!(cur.read_remaining().is_empty());
    }

    #[test]
    fn missing_terminator_does_not_advance() {
        let mut cur = ByteCursor::new(b"abc");
        assert!(cur.read_null_terminated_string().is_none());
        assert_eq!(cur.position(), 0);
    }

    #[test]
    fn short_u32_is_eof_and_keeps_position() {
        let mut cur = ByteCursor::new(&[0, 0, 1]);
        let err = cur.read_u32().unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::UnexpectedEof);
        assert_eq!(cur.position(), 0);
    }

    #[test]
    fn invalid_utf8_is_replaced() {
        let mut cur = ByteCursor::new(&[b'a', 0xff, b'b', 0]);
        assert_eq!(cur.read_null_terminated_string().unwrap(), "a\u{fffd}b");
    }
}
