#![cfg_attr(docs_rs, feature(doc_cfg))]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! A strict decoder for one narrow profile of PNG.
//!
//! The supported profile is 8 bits per channel, RGB color (no palette, no
//! alpha), compression method 0, filter method 0, and no interlacing. Anything
//! else is rejected with an error rather than decoded approximately.
//!
//! The decode is all-or-nothing: every chunk checksum is verified, the first
//! failure aborts the whole decode, and a partial [`png::Image`] is never
//! returned.
//!
//! ```no_run
//! # #[cfg(feature = "png")]
//! # fn main() -> Result<(), strict_png::error::DecodeError> {
//! let mut image = strict_png::png::decode("program.png")?;
//! let (width, height) = (image.header().width, image.header().height);
//! for pixel in image.pixels_mut().iter_mut() {
//!   pixel.r = 255 - pixel.r;
//! }
//! # let _ = (width, height);
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "png"))]
//! # fn main() {}
//! ```

pub mod ascii_array;
pub use ascii_array::*;

pub mod pixel_formats;
pub use pixel_formats::*;

pub mod error;

pub mod image;

#[cfg(feature = "png")]
#[cfg_attr(docs_rs, doc(cfg(feature = "png")))]
pub mod png;
