#![forbid(unsafe_code)]

//! Module for decoding PNG data.
//!
//! * [Portable Network Graphics Specification (Second Edition)][png-spec]
//!
//! [png-spec]: https://www.w3.org/TR/2003/REC-PNG-20031110/
//!
//! ## Supported Profile
//!
//! Only one shape of PNG is decoded:
//!
//! * bit depth 8
//! * color type 2 (RGB, no palette, no alpha)
//! * compression method 0, filter method 0, interlace method 0
//!
//! Every decompressed scanline is then a single filter byte followed by
//! `width` RGB triples. The filter byte is skipped; no scanline filter
//! reconstruction (sub, up, average, Paeth) is performed.
//!
//! ## Decoding Steps
//!
//! 1) The 8 byte [signature](PNG_SIGNATURE) must match exactly.
//! 2) Chunks are read one after another. Each is a big-endian `u32` length,
//!    a 4 byte type tag, the data, and a big-endian `u32` CRC of the tag and
//!    data. Every CRC is checked, and any mismatch ends the decode.
//! 3) The first chunk must be the [`IHDR`], and it must describe the supported
//!    profile.
//! 4) All following chunks are collected until `IEND`.
//! 5) The collected payloads are concatenated and inflated as one zlib stream.
//! 6) The inflated scanlines are sliced into a [`PixelMatrix`].
//!
//! ## Parsing Errors
//!
//! Unlike a permissive decoder, nothing is skipped or patched over here. Any
//! problem at all produces a [`DecodeError`] and no [`Image`].

use core::fmt::Debug;
use std::{
  fs::File,
  io::{BufReader, Read},
  path::Path,
};

use crate::{
  ascii_array::AsciiArray,
  error::{DecodeError, ErrorKind, PngResult},
  image::PixelMatrix,
  pixel_formats::RGB888,
};

mod chunk;
pub use chunk::*;

mod ihdr;
pub use ihdr::*;

mod signature;
pub use signature::*;

mod stream_reader;
pub(crate) use stream_reader::*;

mod chunk_parser;
pub(crate) use chunk_parser::*;

mod inflate;
pub(crate) use inflate::*;

mod scanlines;
pub(crate) use scanlines::*;


/// Knobs for a decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DecodeOptions {
  /// Headers declaring a wider image fail with
  /// [`ErrorKind::DimensionsTooLarge`]. Unlimited by default.
  pub max_width: u32,

  /// Headers declaring a taller image fail with
  /// [`ErrorKind::DimensionsTooLarge`]. Unlimited by default.
  pub max_height: u32,

  /// When `false` (the default) the payload of every chunk between `IHDR` and
  /// `IEND` is fed to the decompressor. When `true` only `IDAT` payloads are,
  /// which lets files with ancillary chunks decode. Every chunk's CRC is
  /// checked either way.
  pub image_data_only: bool,
}
impl DecodeOptions {
  /// A cap on width and height that keeps hostile headers from asking for
  /// gigabytes of pixels. Opt in with [`with_max_dimension`](Self::with_max_dimension).
  pub const SAFE_MAX_DIMENSION: u32 = 17_000;

  /// Sets both `max_width` and `max_height`.
  #[inline]
  #[must_use]
  pub const fn with_max_dimension(self, max: u32) -> Self {
    Self { max_width: max, max_height: max, ..self }
  }

  pub(crate) fn check_dimensions(&self, header: &IHDR) -> PngResult<()> {
    if header.width > self.max_width || header.height > self.max_height {
      Err(DecodeError::new(
        ErrorKind::DimensionsTooLarge,
        format!(
          "{}x{} exceeds the {}x{} limit",
          header.width, header.height, self.max_width, self.max_height
        ),
      ))
    } else {
      Ok(())
    }
  }
}
impl Default for DecodeOptions {
  #[inline]
  fn default() -> Self {
    Self {
      max_width: u32::MAX,
      max_height: u32::MAX,
      image_data_only: false,
    }
  }
}

/// A fully decoded PNG.
///
/// The header and chunk list are read-only. The pixels can be edited in place
/// through [`pixels_mut`](Self::pixels_mut), for example to remap channel
/// values, without affecting the rest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
  filename: String,
  header: IHDR,
  chunks: Vec<Chunk>,
  pixels: PixelMatrix,
}
impl Image {
  /// Decodes PNG data from any reader.
  ///
  /// `filename` is only used to label the image and any error.
  pub fn from_reader<R: Read>(
    filename: impl Into<String>, reader: R, options: &DecodeOptions,
  ) -> PngResult<Self> {
    let filename = filename.into();
    match Self::decode_parts(reader, options) {
      Ok((header, chunks, pixels)) => Ok(Self { filename, header, chunks, pixels }),
      Err(e) => Err(e.in_file(filename)),
    }
  }

  fn decode_parts<R: Read>(
    reader: R, options: &DecodeOptions,
  ) -> PngResult<(IHDR, Vec<Chunk>, PixelMatrix)> {
    let ParsedChunks { header, chunks } = ChunkParser::new(StreamReader::new(reader)).parse(options)?;
    let required = header.decompressed_len().ok_or_else(|| {
      DecodeError::new(ErrorKind::DimensionsTooLarge, header.to_string())
    })?;
    let decompressed = if options.image_data_only {
      inflate_chunks(chunks.iter().filter(|c| c.ty() == ChunkType::IDAT), required)?
    } else {
      inflate_chunks(&chunks, required)?
    };
    let pixels = build_pixel_matrix(&header, &decompressed)?;
    Ok((header, chunks, pixels))
  }

  /// The name this image was decoded under.
  #[inline]
  #[must_use]
  pub fn filename(&self) -> &str {
    &self.filename
  }

  /// The image header.
  #[inline]
  #[must_use]
  pub const fn header(&self) -> &IHDR {
    &self.header
  }

  /// Chunks between the header and `IEND`, in file order.
  #[inline]
  #[must_use]
  pub fn chunks(&self) -> &[Chunk] {
    &self.chunks
  }

  /// The decoded pixels.
  #[inline]
  #[must_use]
  pub const fn pixels(&self) -> &PixelMatrix {
    &self.pixels
  }

  /// The decoded pixels, for editing in place.
  #[inline]
  #[must_use]
  pub fn pixels_mut(&mut self) -> &mut PixelMatrix {
    &mut self.pixels
  }

  /// Discards everything but the pixels.
  #[inline]
  #[must_use]
  pub fn into_pixels(self) -> PixelMatrix {
    self.pixels
  }
}

/// Decodes the PNG file at `path` with the default [`DecodeOptions`].
///
/// ## Failure
/// * [`ErrorKind::NotFound`] if the file can't be opened.
/// * Any other [`ErrorKind`] if the data isn't a valid PNG of the supported
///   profile.
#[inline]
pub fn decode<P: AsRef<Path>>(path: P) -> PngResult<Image> {
  decode_with(path, &DecodeOptions::default())
}

/// Decodes the PNG file at `path`.
///
/// The file is opened, read front to back exactly once, and closed before this
/// returns, whether or not the decode succeeded.
pub fn decode_with<P: AsRef<Path>>(path: P, options: &DecodeOptions) -> PngResult<Image> {
  let path = path.as_ref();
  let filename = path.display().to_string();
  let file = match File::open(path) {
    Ok(file) => file,
    Err(e) => {
      return Err(
        DecodeError::new(ErrorKind::NotFound, e.to_string()).caused_by(e).in_file(filename),
      );
    }
  };
  Image::from_reader(filename, BufReader::new(file), options)
}
