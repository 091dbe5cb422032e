use std::io::Read;

use super::*;

/// Everything the chunk loop collects before decompression starts.
#[derive(Debug, Clone)]
pub(crate) struct ParsedChunks {
  pub(crate) header: IHDR,
  /// Chunks between the header and the terminal `IEND`, in file order.
  pub(crate) chunks: Vec<Chunk>,
}

#[derive(Debug, Clone, Copy)]
enum State {
  ExpectHeader,
  ExpectChunkOrEnd(IHDR),
}

/// Pulls validated chunks off a [`StreamReader`].
pub(crate) struct ChunkParser<R> {
  reader: StreamReader<R>,
}
impl<R: Read> ChunkParser<R> {
  #[inline]
  pub(crate) fn new(reader: StreamReader<R>) -> Self {
    Self { reader }
  }

  /// Reads one length/type/data/crc frame and checks its CRC.
  pub(crate) fn read_chunk(&mut self) -> PngResult<Chunk> {
    let length = self.reader.read_u32_be()?;
    let ty = ChunkType::from(self.reader.read_array::<4>()?);
    let data = if length > 0 { self.reader.read(length as usize)? } else { Vec::new() };
    let declared_crc = self.reader.read_u32_be()?;
    let chunk = Chunk::new(length, ty, data, declared_crc)?;
    log::debug!("chunk {:?}: {} bytes, crc {:#010X}", chunk.ty(), chunk.len(), declared_crc);
    Ok(chunk)
  }

  /// Runs the whole signature, header, chunks, `IEND` sequence.
  ///
  /// The header is checked against the supported profile and the dimension
  /// limits as soon as it's read, before anything after it is touched.
  pub(crate) fn parse(mut self, options: &DecodeOptions) -> PngResult<ParsedChunks> {
    read_signature(&mut self.reader)?;
    let mut chunks = Vec::new();
    let mut state = State::ExpectHeader;
    loop {
      let chunk = self.read_chunk()?;
      state = match state {
        State::ExpectHeader => {
          let header = IHDR::try_from(&chunk)?;
          header.check_profile()?;
          options.check_dimensions(&header)?;
          log::debug!("header accepted: {header}");
          State::ExpectChunkOrEnd(header)
        }
        State::ExpectChunkOrEnd(header) => {
          if chunk.ty() == ChunkType::IEND {
            log::trace!("IEND at offset {}, {} chunks collected", self.reader.position(), chunks.len());
            return Ok(ParsedChunks { header, chunks });
          }
          if chunk.ty() == ChunkType::IHDR {
            return Err(DecodeError::new(ErrorKind::Structure, "more than one IHDR chunk"));
          }
          chunks.push(chunk);
          State::ExpectChunkOrEnd(header)
        }
      };
    }
  }
}
