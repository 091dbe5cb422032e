use miniz_oxide::{
  inflate::stream::{inflate, InflateState},
  DataFormat, MZFlush, MZStatus,
};

use super::*;

/// Inflates the concatenated payloads of `chunks` as one zlib stream.
///
/// The stream is always run to its end, so the Adler-32 trailer is checked
/// even when the scanlines are filled early. Bytes past `required` are
/// counted and dropped, never stored. A stream that ends before `required`
/// bytes, or doesn't end at all, is a [`ErrorKind::DecompressionFailure`].
pub(crate) fn inflate_chunks<'c>(
  chunks: impl IntoIterator<Item = &'c Chunk>, required: usize,
) -> PngResult<Vec<u8>> {
  let compressed: Vec<u8> = chunks.into_iter().flat_map(|c| c.data().iter().copied()).collect();
  log::trace!("inflating {} compressed bytes, {} required", compressed.len(), required);
  let mut state = InflateState::new_boxed(DataFormat::Zlib);
  let mut out: Vec<u8> = Vec::new();
  let mut out_pos = 0_usize;
  let mut scratch = [0_u8; 4096];
  let mut excess = 0_usize;
  let mut in_pos = 0_usize;
  loop {
    // grow with the data actually produced, so a huge header alone can't
    // force a huge allocation.
    if out_pos == out.len() && out.len() < required {
      let new_len = out.len().max(4096).saturating_mul(2).min(required);
      out.try_reserve_exact(new_len - out.len()).map_err(|_| {
        DecodeError::new(ErrorKind::DimensionsTooLarge, format!("can't allocate {new_len} bytes"))
      })?;
      out.resize(new_len, 0);
    }
    let filling = out_pos < required;
    let target: &mut [u8] = if filling { &mut out[out_pos..] } else { &mut scratch };
    let result = inflate(&mut state, &compressed[in_pos..], target, MZFlush::None);
    in_pos += result.bytes_consumed;
    if filling {
      out_pos += result.bytes_written;
    } else {
      excess += result.bytes_written;
    }
    match result.status {
      Ok(MZStatus::StreamEnd) => break,
      Ok(_) if result.bytes_consumed == 0 && result.bytes_written == 0 => {
        return Err(DecodeError::new(
          ErrorKind::DecompressionFailure,
          format!("zlib stream ends early after {} bytes", out_pos + excess),
        ));
      }
      Ok(_) => (),
      Err(e) => {
        return Err(DecodeError::new(ErrorKind::DecompressionFailure, format!("{e:?}")));
      }
    }
  }
  if out_pos < required {
    return Err(DecodeError::new(
      ErrorKind::DecompressionFailure,
      format!("expected {required} decompressed bytes, got {out_pos}"),
    ));
  }
  if excess > 0 {
    log::warn!("zlib stream holds {excess} bytes more than the {required} the scanlines need");
  }
  out.truncate(required);
  Ok(out)
}

#[cfg(test)]
mod tests {
  use super::*;

  fn idat(data: Vec<u8>) -> Chunk {
    let crc = png_crc(ChunkType::IDAT, &data);
    Chunk::new(data.len() as u32, ChunkType::IDAT, data, crc).unwrap()
  }

  fn long_stream() -> Vec<u8> {
    let mut raw = vec![0, 9, 8, 7];
    raw.extend_from_slice(&[0xAA; 40]);
    miniz_oxide::deflate::compress_to_vec_zlib(&raw, 6)
  }

  #[test]
  fn test_excess_is_dropped_after_the_trailer() {
    let out = inflate_chunks(&[idat(long_stream())], 4).unwrap();
    assert_eq!(out, vec![0, 9, 8, 7]);
  }

  #[test]
  fn test_bad_adler_past_required_is_caught() {
    let mut z = long_stream();
    let last = z.len() - 1;
    z[last] ^= 0xFF;
    let err = inflate_chunks(&[idat(z)], 4).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DecompressionFailure);
  }

  #[test]
  fn test_missing_trailer_past_required_is_caught() {
    let mut z = long_stream();
    z.truncate(z.len() - 4);
    let err = inflate_chunks(&[idat(z)], 4).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DecompressionFailure);
  }

  #[test]
  fn test_large_output_spans_growth_steps() {
    let raw: Vec<u8> = (0..50_000_u32).map(|i| (i % 251) as u8).collect();
    let z = miniz_oxide::deflate::compress_to_vec_zlib(&raw, 6);
    let (a, b) = z.split_at(z.len() / 2);
    let out = inflate_chunks(&[idat(a.to_vec()), idat(b.to_vec())], raw.len()).unwrap();
    assert_eq!(out, raw);
  }
}
