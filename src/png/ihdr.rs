use super::*;

/// Image Header
///
/// The fields are kept as the raw values from the file, so that an unsupported
/// header can still be described precisely in an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IHDR {
  /// width in pixels
  pub width: u32,
  /// height in pixels
  pub height: u32,
  /// bits per channel
  pub bit_depth: u8,
  /// pixel color type (2 is RGB)
  pub color_type: u8,
  /// zlib is the only method PNG defines (0)
  pub compression_method: u8,
  /// scanline filtering method
  pub filter_method: u8,
  /// 0 for none, 1 for Adam7
  pub interlace_method: u8,
}
impl IHDR {
  /// Payload length of every header chunk.
  pub const LEN: u32 = 13;

  /// If this header is 8-bit RGB with no compression, filter, or interlace
  /// variation. That's the only kind of PNG this crate decodes.
  #[inline]
  #[must_use]
  pub const fn is_supported_profile(&self) -> bool {
    self.bit_depth == 8
      && self.color_type == 2
      && self.compression_method == 0
      && self.filter_method == 0
      && self.interlace_method == 0
  }

  /// Fails with [`ErrorKind::UnsupportedProfile`] unless
  /// [`is_supported_profile`](Self::is_supported_profile).
  pub fn check_profile(&self) -> PngResult<()> {
    if self.is_supported_profile() {
      Ok(())
    } else {
      Err(DecodeError::new(
        ErrorKind::UnsupportedProfile,
        format!(
          "{}; supported: bit depth 8, colour type 2, no compression, filter nor interlace",
          self
        ),
      ))
    }
  }

  /// Bytes per decompressed line: the filter byte plus 3 bytes per pixel.
  #[inline]
  #[must_use]
  pub fn scanline_len(&self) -> Option<usize> {
    (self.width as usize).checked_mul(3)?.checked_add(1)
  }

  /// Bytes of decompressed data that the scanlines need in total.
  #[inline]
  #[must_use]
  pub fn decompressed_len(&self) -> Option<usize> {
    self.scanline_len()?.checked_mul(self.height as usize)
  }
}
impl core::fmt::Display for IHDR {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    write!(
      f,
      "width: {}, height: {}, bit depth: {}, colour type: {}, compression method: {}, filter method: {}, interlace method: {}",
      self.width,
      self.height,
      self.bit_depth,
      self.color_type,
      self.compression_method,
      self.filter_method,
      self.interlace_method
    )
  }
}
impl TryFrom<&[u8]> for IHDR {
  type Error = DecodeError;
  fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
    match value {
      [w0, w1, w2, w3, h0, h1, h2, h3, bit_depth, color_type, compression_method, filter_method, interlace_method] => {
        Ok(Self {
          width: u32::from_be_bytes([*w0, *w1, *w2, *w3]),
          height: u32::from_be_bytes([*h0, *h1, *h2, *h3]),
          bit_depth: *bit_depth,
          color_type: *color_type,
          compression_method: *compression_method,
          filter_method: *filter_method,
          interlace_method: *interlace_method,
        })
      }
      _ => Err(DecodeError::new(
        ErrorKind::Structure,
        format!("IHDR must be {} bytes, found {}", Self::LEN, value.len()),
      )),
    }
  }
}
impl TryFrom<&Chunk> for IHDR {
  type Error = DecodeError;
  #[inline]
  fn try_from(chunk: &Chunk) -> Result<Self, Self::Error> {
    if chunk.ty() != ChunkType::IHDR {
      return Err(DecodeError::new(
        ErrorKind::Structure,
        format!("first chunk must be IHDR, found {}", chunk.ty()),
      ));
    }
    Self::try_from(chunk.data())
  }
}
