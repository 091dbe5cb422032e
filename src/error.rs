//! Errors that can come out of a decode.

use std::{borrow::Cow, error, fmt, io};

/// The class of failure that stopped a decode.
///
/// Every kind is fatal: no partial image is ever produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
  /// The file couldn't be opened.
  NotFound,

  /// The first 8 bytes aren't the PNG signature.
  SignatureMismatch,

  /// The data stream ended in the middle of a chunk, or before the `IEND`
  /// chunk was seen.
  UnexpectedEnd,

  /// A chunk's stored CRC doesn't match the CRC of its type and data.
  ChunkCrcMismatch,

  /// The header describes an image outside the supported profile.
  UnsupportedProfile,

  /// The concatenated chunk data isn't a usable zlib stream.
  DecompressionFailure,

  /// The chunks are in an illegal arrangement (the first chunk isn't the
  /// header, the header has the wrong length, or a second header appears).
  Structure,

  /// The header declares a width or height above the configured limit.
  DimensionsTooLarge,

  /// Reading from an already opened source failed.
  Io,
}
impl ErrorKind {
  const fn describe(self) -> &'static str {
    match self {
      Self::NotFound => "file cannot be opened",
      Self::SignatureMismatch => "not a PNG image (signature doesn't match)",
      Self::UnexpectedEnd => "unexpected end of file",
      Self::ChunkCrcMismatch => "chunk CRC mismatch",
      Self::UnsupportedProfile => "unsupported PNG profile",
      Self::DecompressionFailure => "image data cannot be decompressed",
      Self::Structure => "malformed chunk structure",
      Self::DimensionsTooLarge => "image dimensions too large",
      Self::Io => "read error",
    }
  }
}

/// An error from a decode, carrying the name of the file involved.
#[derive(Debug)]
pub struct DecodeError {
  filename: String,
  kind: ErrorKind,
  detail: Cow<'static, str>,
  source: Option<io::Error>,
}
impl DecodeError {
  /// Makes an error that isn't yet tied to any file.
  #[inline]
  #[must_use]
  pub fn new(kind: ErrorKind, detail: impl Into<Cow<'static, str>>) -> Self {
    Self { filename: String::new(), kind, detail: detail.into(), source: None }
  }

  /// Sets the file name reported by this error.
  #[inline]
  #[must_use]
  pub fn in_file(mut self, filename: impl Into<String>) -> Self {
    self.filename = filename.into();
    self
  }

  #[inline]
  #[must_use]
  pub(crate) fn caused_by(mut self, err: io::Error) -> Self {
    self.source = Some(err);
    self
  }

  /// The file being decoded when the error happened.
  #[inline]
  #[must_use]
  pub fn filename(&self) -> &str {
    &self.filename
  }

  /// What sort of error this is.
  #[inline]
  #[must_use]
  pub const fn kind(&self) -> ErrorKind {
    self.kind
  }

  /// Describes the expectation that was violated.
  #[inline]
  #[must_use]
  pub fn detail(&self) -> &str {
    &self.detail
  }
}
impl fmt::Display for DecodeError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "'{}': {}", self.filename, self.kind.describe())?;
    if !self.detail.is_empty() {
      write!(f, ": {}", self.detail)?;
    }
    Ok(())
  }
}
impl error::Error for DecodeError {
  fn source(&self) -> Option<&(dyn error::Error + 'static)> {
    match &self.source {
      Some(err) => Some(err),
      None => None,
    }
  }
}
impl From<io::Error> for DecodeError {
  #[inline]
  fn from(err: io::Error) -> Self {
    let kind = match err.kind() {
      io::ErrorKind::UnexpectedEof => ErrorKind::UnexpectedEnd,
      _ => ErrorKind::Io,
    };
    Self { filename: String::new(), kind, detail: err.to_string().into(), source: Some(err) }
  }
}

/// Shorthand for results with a [`DecodeError`].
pub type PngResult<T> = Result<T, DecodeError>;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_display_names_the_file() {
    let err = DecodeError::new(ErrorKind::ChunkCrcMismatch, "IDAT: declared 1, actual 2")
      .in_file("a.png");
    assert_eq!(err.to_string(), "'a.png': chunk CRC mismatch: IDAT: declared 1, actual 2");
    assert_eq!(err.kind(), ErrorKind::ChunkCrcMismatch);
  }

  #[test]
  fn test_io_eof_becomes_unexpected_end() {
    let err = DecodeError::from(io::Error::from(io::ErrorKind::UnexpectedEof));
    assert_eq!(err.kind(), ErrorKind::UnexpectedEnd);
    assert!(error::Error::source(&err).is_some());

    let err = DecodeError::from(io::Error::from(io::ErrorKind::PermissionDenied));
    assert_eq!(err.kind(), ErrorKind::Io);
  }
}
