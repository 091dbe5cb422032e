#![forbid(unsafe_code)]

//! Provides the heap-allocated pixel matrix that a decode produces.

use core::ops::{Index, IndexMut};

use crate::pixel_formats::RGB888;

/// Converts an `(x,y)` position within a given `width` 2D space into a linear
/// index.
#[inline]
#[must_use]
pub const fn xy_width_to_index(x: u32, y: u32, width: u32) -> usize {
  (y as usize) * (width as usize) + (x as usize)
}

/// A `height` by `width` grid of RGB pixels.
///
/// Rows go top to bottom and pixels within a row go left to right, the same
/// order they're stored in the PNG. The pixels can be changed in place, but
/// the dimensions are fixed at construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct PixelMatrix {
  width: u32,
  height: u32,
  pixels: Vec<RGB888>,
}
impl PixelMatrix {
  /// Wraps row-major pixels.
  ///
  /// Returns `None` if `pixels.len()` isn't exactly `width * height`.
  #[inline]
  #[must_use]
  pub fn from_pixels(width: u32, height: u32, pixels: Vec<RGB888>) -> Option<Self> {
    let expected = (width as usize).checked_mul(height as usize)?;
    if pixels.len() == expected {
      Some(Self { width, height, pixels })
    } else {
      None
    }
  }

  /// Width in pixels.
  #[inline]
  #[must_use]
  pub const fn width(&self) -> u32 {
    self.width
  }

  /// Height in pixels.
  #[inline]
  #[must_use]
  pub const fn height(&self) -> u32 {
    self.height
  }

  /// All the pixels, row-major.
  #[inline]
  #[must_use]
  pub fn as_slice(&self) -> &[RGB888] {
    &self.pixels
  }

  /// All the pixels, row-major, mutably.
  #[inline]
  #[must_use]
  pub fn as_mut_slice(&mut self) -> &mut [RGB888] {
    &mut self.pixels
  }

  /// Mutable iterator over every pixel in row-major order.
  #[inline]
  pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, RGB888> {
    self.pixels.iter_mut()
  }

  /// Gets the pixel at the position, or `None` if the position is out of
  /// bounds.
  #[inline]
  #[must_use]
  pub fn get(&self, x: u32, y: u32) -> Option<&RGB888> {
    if x < self.width && y < self.height {
      self.pixels.get(xy_width_to_index(x, y, self.width))
    } else {
      None
    }
  }

  /// Gets the pixel at the position, or `None` if the position is out of
  /// bounds.
  #[inline]
  #[must_use]
  pub fn get_mut(&mut self, x: u32, y: u32) -> Option<&mut RGB888> {
    if x < self.width && y < self.height {
      self.pixels.get_mut(xy_width_to_index(x, y, self.width))
    } else {
      None
    }
  }

  /// The `y`th row, or `None` if out of bounds.
  #[inline]
  #[must_use]
  pub fn row(&self, y: u32) -> Option<&[RGB888]> {
    if y < self.height {
      let start = xy_width_to_index(0, y, self.width);
      self.pixels.get(start..start + self.width as usize)
    } else {
      None
    }
  }

  /// Iterates the rows from top to bottom.
  ///
  /// Always yields exactly `height` rows, even when `width` is 0.
  #[inline]
  pub fn rows(&self) -> impl Iterator<Item = &[RGB888]> + '_ {
    (0..self.height).filter_map(move |y| self.row(y))
  }

  /// Copies the pixels out as nested `(r, g, b)` rows.
  #[must_use]
  pub fn to_rows(&self) -> Vec<Vec<(u8, u8, u8)>> {
    self.rows().map(|row| row.iter().copied().map(RGB888::to_tuple).collect()).collect()
  }
}

impl Index<(u32, u32)> for PixelMatrix {
  type Output = RGB888;
  /// Indexes by `(x, y)`.
  ///
  /// ## Panics
  /// * If the position is out of bounds.
  #[inline]
  #[track_caller]
  fn index(&self, (x, y): (u32, u32)) -> &RGB888 {
    match self.get(x, y) {
      Some(p) => p,
      None => panic!("pixel ({x},{y}) out of bounds for {}x{}", self.width, self.height),
    }
  }
}
impl IndexMut<(u32, u32)> for PixelMatrix {
  #[inline]
  #[track_caller]
  fn index_mut(&mut self, (x, y): (u32, u32)) -> &mut RGB888 {
    let (width, height) = (self.width, self.height);
    match self.get_mut(x, y) {
      Some(p) => p,
      None => panic!("pixel ({x},{y}) out of bounds for {width}x{height}"),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_from_pixels_checks_len() {
    assert!(PixelMatrix::from_pixels(2, 2, vec![RGB888::default(); 3]).is_none());
    assert!(PixelMatrix::from_pixels(2, 2, vec![RGB888::default(); 4]).is_some());
  }

  #[test]
  fn test_rows_and_in_place_edit() {
    let px: Vec<RGB888> = (0..6_u8).map(|i| RGB888::new(i, i, i)).collect();
    let mut m = PixelMatrix::from_pixels(3, 2, px).unwrap();
    assert_eq!(m.row(1).unwrap()[0], RGB888::new(3, 3, 3));
    assert_eq!(m[(2, 0)], RGB888::new(2, 2, 2));
    assert!(m.get(3, 0).is_none());
    assert!(m.row(2).is_none());

    m[(0, 1)].g = 200;
    for p in m.iter_mut() {
      p.b = 9;
    }
    assert_eq!(m.to_rows()[1][0], (3, 200, 9));
    assert_eq!(m.rows().count(), 2);
  }

  #[test]
  fn test_zero_width_still_has_rows() {
    let m = PixelMatrix::from_pixels(0, 4, Vec::new()).unwrap();
    assert_eq!(m.to_rows(), vec![Vec::<(u8, u8, u8)>::new(); 4]);
  }
}
