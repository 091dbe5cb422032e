use super::*;

/// The four byte tag naming a chunk's type.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct ChunkType(pub AsciiArray<4>);
impl ChunkType {
  /// Image Header
  pub const IHDR: Self = Self(AsciiArray(*b"IHDR"));
  /// Image Data
  pub const IDAT: Self = Self(AsciiArray(*b"IDAT"));
  /// Image End
  pub const IEND: Self = Self(AsciiArray(*b"IEND"));

  /// The raw tag bytes.
  #[inline]
  #[must_use]
  pub const fn as_bytes(&self) -> &[u8; 4] {
    self.0.as_bytes()
  }
}
impl From<[u8; 4]> for ChunkType {
  #[inline]
  #[must_use]
  fn from(tag: [u8; 4]) -> Self {
    Self(AsciiArray(tag))
  }
}
impl Debug for ChunkType {
  #[inline]
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    Debug::fmt(&self.0, f)
  }
}
impl core::fmt::Display for ChunkType {
  #[inline]
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    core::fmt::Display::fmt(&self.0, f)
  }
}

/// Computes the CRC32 that PNG stores after each chunk.
///
/// The checksum covers the type tag and the data, but not the length field.
#[inline]
#[must_use]
pub fn png_crc(ty: ChunkType, data: &[u8]) -> u32 {
  let mut hasher = crc32fast::Hasher::new();
  hasher.update(ty.as_bytes());
  hasher.update(data);
  hasher.finalize()
}

/// A chunk whose checksum has been verified.
///
/// The only way to get one is [`Chunk::new`], which refuses to build a chunk
/// with a bad CRC. So holding a `Chunk` means holding valid chunk data.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Chunk {
  ty: ChunkType,
  data: Vec<u8>,
  declared_crc: u32,
}
impl Chunk {
  /// Validates and wraps the pieces of a chunk.
  ///
  /// ## Failure
  /// * [`ErrorKind::ChunkCrcMismatch`] if `length` isn't the length of `data`,
  ///   or if `declared_crc` isn't the CRC of `ty` and `data`.
  pub fn new(length: u32, ty: ChunkType, data: Vec<u8>, declared_crc: u32) -> PngResult<Self> {
    if usize::try_from(length).ok() != Some(data.len()) {
      return Err(DecodeError::new(
        ErrorKind::ChunkCrcMismatch,
        format!("{ty}: declared length {length}, but data is {} bytes", data.len()),
      ));
    }
    let actual = png_crc(ty, &data);
    if actual != declared_crc {
      return Err(DecodeError::new(
        ErrorKind::ChunkCrcMismatch,
        format!("{ty} ({length} bytes): declared CRC {declared_crc:#010X}, actual {actual:#010X}"),
      ));
    }
    Ok(Self { ty, data, declared_crc })
  }

  /// The chunk's type tag.
  #[inline]
  #[must_use]
  pub const fn ty(&self) -> ChunkType {
    self.ty
  }

  /// The chunk's payload.
  #[inline]
  #[must_use]
  pub fn data(&self) -> &[u8] {
    &self.data
  }

  /// The payload length, as it was declared in the stream.
  #[inline]
  #[must_use]
  #[allow(clippy::len_without_is_empty)]
  pub fn len(&self) -> u32 {
    // `new` proved this fits.
    self.data.len() as u32
  }

  /// The CRC that was stored in the stream.
  #[inline]
  #[must_use]
  pub const fn declared_crc(&self) -> u32 {
    self.declared_crc
  }

  /// Recomputes the CRC from the type and data.
  #[inline]
  #[must_use]
  pub fn actual_crc(&self) -> u32 {
    png_crc(self.ty, &self.data)
  }
}
impl Debug for Chunk {
  #[inline]
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("Chunk")
      .field("ty", &self.ty)
      .field("data", &(&self.data[..self.data.len().min(12)], self.data.len()))
      .field("declared_crc", &self.declared_crc)
      .finish()
  }
}
