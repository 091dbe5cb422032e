//! Module for pixel formats.
//!
//! The decoder only ever produces one format: three 8-bit channels, red then
//! green then blue, exactly as they sit in a PNG scanline of color type 2.

use bytemuck::{Pod, Zeroable};

/// An 8-bit-per-channel RGB pixel.
///
/// This is `repr(C)` with no padding, so a slice of bytes whose length is a
/// multiple of 3 can be viewed as a slice of these with [`bytemuck`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(Zeroable, Pod)]
#[repr(C)]
#[allow(missing_docs)]
pub struct RGB888 {
  pub r: u8,
  pub g: u8,
  pub b: u8,
}
impl RGB888 {
  /// Makes a pixel from its three channels.
  #[inline]
  #[must_use]
  pub const fn new(r: u8, g: u8, b: u8) -> Self {
    Self { r, g, b }
  }

  /// The channels as an `(r, g, b)` tuple.
  #[inline]
  #[must_use]
  pub const fn to_tuple(self) -> (u8, u8, u8) {
    (self.r, self.g, self.b)
  }
}
impl From<[u8; 3]> for RGB888 {
  #[inline]
  #[must_use]
  fn from([r, g, b]: [u8; 3]) -> Self {
    Self { r, g, b }
  }
}
impl From<(u8, u8, u8)> for RGB888 {
  #[inline]
  #[must_use]
  fn from((r, g, b): (u8, u8, u8)) -> Self {
    Self { r, g, b }
  }
}
impl From<RGB888> for (u8, u8, u8) {
  #[inline]
  #[must_use]
  fn from(p: RGB888) -> Self {
    p.to_tuple()
  }
}
impl From<RGB888> for [u8; 3] {
  #[inline]
  #[must_use]
  fn from(RGB888 { r, g, b }: RGB888) -> Self {
    [r, g, b]
  }
}
