use std::io::Read;

use crate::error::{DecodeError, ErrorKind, PngResult};

/// Forward-only reader that hands out exactly the number of bytes asked for.
///
/// There's no seeking. Running out of bytes part way through a request is
/// always an [`ErrorKind::UnexpectedEnd`], because every read the decoder makes
/// is for a mandatory piece of structure.
pub(crate) struct StreamReader<R> {
  inner: R,
  position: u64,
}
impl<R: Read> StreamReader<R> {
  #[inline]
  pub(crate) fn new(inner: R) -> Self {
    Self { inner, position: 0 }
  }

  /// Bytes consumed so far.
  #[inline]
  pub(crate) const fn position(&self) -> u64 {
    self.position
  }

  /// Reads up to `n` bytes, stopping early only at end of stream.
  pub(crate) fn read_up_to(&mut self, n: usize) -> PngResult<Vec<u8>> {
    // grows with the bytes actually present, so a bogus length field can't
    // force a giant allocation up front.
    let mut buf = Vec::new();
    (&mut self.inner).take(n as u64).read_to_end(&mut buf)?;
    self.position += buf.len() as u64;
    Ok(buf)
  }

  /// Reads exactly `n` bytes.
  pub(crate) fn read(&mut self, n: usize) -> PngResult<Vec<u8>> {
    let start = self.position;
    let buf = self.read_up_to(n)?;
    if buf.len() < n {
      return Err(DecodeError::new(
        ErrorKind::UnexpectedEnd,
        format!("wanted {n} bytes at offset {start}, only {} remain", buf.len()),
      ));
    }
    Ok(buf)
  }

  #[inline]
  pub(crate) fn read_array<const N: usize>(&mut self) -> PngResult<[u8; N]> {
    let mut a = [0_u8; N];
    let start = self.position;
    match self.inner.read_exact(&mut a) {
      Ok(()) => {
        self.position += N as u64;
        Ok(a)
      }
      Err(e) if e.kind() == std::io::ErrorKind::UnexpectedEof => Err(DecodeError::new(
        ErrorKind::UnexpectedEnd,
        format!("wanted {N} bytes at offset {start}"),
      )),
      Err(e) => Err(e.into()),
    }
  }

  /// Reads a big-endian `u32`.
  #[inline]
  pub(crate) fn read_u32_be(&mut self) -> PngResult<u32> {
    self.read_array().map(u32::from_be_bytes)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_reads_are_sequential() {
    let bytes: &[u8] = &[0, 0, 1, 2, 9, 8, 7];
    let mut r = StreamReader::new(bytes);
    assert_eq!(r.read_u32_be().unwrap(), 258);
    assert_eq!(r.read(2).unwrap(), vec![9, 8]);
    assert_eq!(r.position(), 6);
    assert_eq!(r.read(1).unwrap(), vec![7]);
    assert_eq!(r.read(0).unwrap(), Vec::<u8>::new());
  }

  #[test]
  fn test_short_reads_are_unexpected_end() {
    let bytes: &[u8] = &[1, 2, 3];
    let mut r = StreamReader::new(bytes);
    assert_eq!(r.read(4).unwrap_err().kind(), ErrorKind::UnexpectedEnd);

    let mut r = StreamReader::new(bytes);
    assert_eq!(r.read_u32_be().unwrap_err().kind(), ErrorKind::UnexpectedEnd);

    let mut r = StreamReader::new(&[0_u8; 0][..]);
    assert_eq!(r.read_u32_be().unwrap_err().kind(), ErrorKind::UnexpectedEnd);
  }

  #[test]
  fn test_huge_length_does_not_preallocate() {
    let bytes: &[u8] = &[1, 2, 3];
    let mut r = StreamReader::new(bytes);
    assert_eq!(r.read(u32::MAX as usize).unwrap_err().kind(), ErrorKind::UnexpectedEnd);
  }
}
