use super::*;

/// Turns decompressed scanlines into a pixel matrix.
///
/// Each line is one filter byte followed by `width` RGB triples. The filter
/// byte is skipped without looking at it: the header's filter method was
/// already required to be 0, and no per-line filter reconstruction is done.
pub(crate) fn build_pixel_matrix(header: &IHDR, decompressed: &[u8]) -> PngResult<PixelMatrix> {
  let too_big = || DecodeError::new(ErrorKind::DimensionsTooLarge, header.to_string());
  let line_len = header.scanline_len().ok_or_else(too_big)?;
  let pixel_count = (header.width as usize).checked_mul(header.height as usize).ok_or_else(too_big)?;
  let mut pixels: Vec<RGB888> = Vec::new();
  pixels.try_reserve(pixel_count).map_err(|_| too_big())?;
  for line in decompressed.chunks_exact(line_len).take(header.height as usize) {
    let rgb = &line[1..];
    pixels.extend_from_slice(bytemuck::cast_slice::<u8, RGB888>(rgb));
  }
  PixelMatrix::from_pixels(header.width, header.height, pixels).ok_or_else(|| {
    DecodeError::new(
      ErrorKind::DecompressionFailure,
      format!("{} bytes don't cover {} scanlines of {line_len}", decompressed.len(), header.height),
    )
  })
}

#[cfg(test)]
mod tests {
  use super::*;

  fn rgb_header(width: u32, height: u32) -> IHDR {
    IHDR {
      width,
      height,
      bit_depth: 8,
      color_type: 2,
      compression_method: 0,
      filter_method: 0,
      interlace_method: 0,
    }
  }

  #[test]
  fn test_filter_byte_is_skipped() {
    let data = [7, 1, 2, 3, 4, 5, 6, 0, 10, 20, 30, 40, 50, 60];
    let m = build_pixel_matrix(&rgb_header(2, 2), &data).unwrap();
    assert_eq!(m.to_rows(), vec![vec![(1, 2, 3), (4, 5, 6)], vec![(10, 20, 30), (40, 50, 60)]]);
  }

  #[test]
  fn test_short_data_is_an_error() {
    let data = [0, 1, 2, 3, 0, 4, 5];
    let err = build_pixel_matrix(&rgb_header(1, 2), &data).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DecompressionFailure);
  }

  #[test]
  fn test_zero_dimensions() {
    let m = build_pixel_matrix(&rgb_header(0, 3), &[0, 0, 0]).unwrap();
    assert_eq!(m.to_rows().len(), 3);
    let m = build_pixel_matrix(&rgb_header(5, 0), &[]).unwrap();
    assert!(m.to_rows().is_empty());
  }
}
