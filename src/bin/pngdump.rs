use strict_png::png::{decode_with, DecodeOptions, Image};

use std::path::Path;

fn main() {
  let mut options = DecodeOptions::default();
  let mut paths = Vec::new();
  for arg in std::env::args().skip(1) {
    match arg.as_str() {
      "--idat-only" => options.image_data_only = true,
      _ => paths.push(arg),
    }
  }
  if paths.is_empty() {
    eprintln!("usage: pngdump [--idat-only] FILE...");
    std::process::exit(2);
  }

  let mut failures = 0;
  for path in &paths {
    if let Err(e) = dump_a_png_file(path, &options) {
      println!("{e}");
      failures += 1;
    }
  }
  if failures > 0 {
    std::process::exit(1);
  }
}

fn dump_a_png_file<P: AsRef<Path>>(
  path: P, options: &DecodeOptions,
) -> strict_png::error::PngResult<Image> {
  let image = decode_with(path, options)?;
  println!("{}:", image.filename());
  println!("  {}", image.header());
  for chunk in image.chunks() {
    println!("  {:?}", chunk);
  }
  for (y, row) in image.pixels().rows().take(4).enumerate() {
    let preview: Vec<(u8, u8, u8)> = row.iter().take(8).map(|p| p.to_tuple()).collect();
    println!("  row {y}: {preview:?}");
  }
  Ok(image)
}
