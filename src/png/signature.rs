use std::io::Read;

use super::*;

/// The 8 bytes every PNG data stream starts with.
pub const PNG_SIGNATURE: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];

/// Checks if the PNG's initial 8 bytes are correct.
///
/// * If this is the case, the rest of the bytes are very likely PNG data.
/// * If this is *not* the case, the rest of the bytes are very likely *not* PNG
///   data.
#[inline]
#[must_use]
pub const fn is_png_header_correct(bytes: &[u8]) -> bool {
  matches!(bytes, [137, 80, 78, 71, 13, 10, 26, 10, ..])
}

/// Consumes the signature from the front of the stream.
///
/// A stream too short to hold a signature is reported as a mismatch, since it
/// can't be PNG data at all.
pub(crate) fn read_signature<R: Read>(reader: &mut StreamReader<R>) -> PngResult<()> {
  let bytes = reader.read_up_to(PNG_SIGNATURE.len())?;
  if is_png_header_correct(&bytes) {
    Ok(())
  } else {
    Err(DecodeError::new(ErrorKind::SignatureMismatch, format!("found {bytes:02X?}")))
  }
}

#[test]
fn test_read_signature() {
  let mut good = StreamReader::new(&[137_u8, 80, 78, 71, 13, 10, 26, 10, 0][..]);
  assert!(read_signature(&mut good).is_ok());
  assert_eq!(good.position(), 8);

  let mut bad = StreamReader::new(&b"GIF89a\0\0"[..]);
  assert_eq!(read_signature(&mut bad).unwrap_err().kind(), ErrorKind::SignatureMismatch);

  let mut short = StreamReader::new(&[137_u8, 80][..]);
  assert_eq!(read_signature(&mut short).unwrap_err().kind(), ErrorKind::SignatureMismatch);
}
