use std::path::PathBuf;

use strict_png::{
  error::ErrorKind,
  png::{decode, DecodeOptions, Image, PNG_SIGNATURE},
};
use walkdir::WalkDir;

fn asset(name: &str) -> PathBuf {
  PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("assets").join(name)
}

#[test]
fn test_decode_squares_png() {
  let image = decode(asset("squares.png")).unwrap();
  assert!(image.filename().ends_with("squares.png"));
  assert_eq!((image.header().width, image.header().height), (3, 3));
  assert_eq!(
    image.pixels().to_rows(),
    vec![
      vec![(255, 0, 0), (0, 255, 0), (0, 0, 255)],
      vec![(255, 255, 255), (127, 127, 127), (0, 0, 0)],
      vec![(255, 255, 0), (255, 0, 255), (0, 255, 255)],
    ]
  );
}

#[test]
fn test_decode_bad_png() {
  let err = decode(asset("bad.png")).unwrap_err();
  assert_eq!(err.kind(), ErrorKind::ChunkCrcMismatch);
  assert!(err.filename().ends_with("bad.png"));
}

#[test]
fn test_decode_truncated_png() {
  assert_eq!(decode(asset("truncated.png")).unwrap_err().kind(), ErrorKind::UnexpectedEnd);
}

#[test]
fn test_decode_palette_png() {
  let err = decode(asset("palette.png")).unwrap_err();
  assert_eq!(err.kind(), ErrorKind::UnsupportedProfile);
  assert!(err.to_string().contains("colour type: 3"), "{err}");
}

#[test]
fn test_decode_not_found() {
  let err = decode(asset("not.found")).unwrap_err();
  assert_eq!(err.kind(), ErrorKind::NotFound);
  assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn test_decode_files_do_not_panic() {
  // iter ALL files in the test folder, even non-png files shouldn't panic.
  for entry in WalkDir::new("tests/").into_iter().filter_map(|e| e.ok()) {
    if entry.file_type().is_dir() {
      continue;
    }
    println!("{}", entry.path().display());
    match decode(entry.path()) {
      Ok(image) => println!("ok: {}x{}", image.header().width, image.header().height),
      Err(e) => {
        println!("{e}");
        assert_ne!(e.kind(), ErrorKind::NotFound);
      }
    }
  }
}

#[test]
fn test_random_bytes_do_not_panic() {
  for _ in 0..10 {
    let v = super::rand_bytes(1024);
    assert!(Image::from_reader("random", &v[..], &DecodeOptions::default()).is_err());
  }
  // random data after a correct signature gets a bit further in
  for _ in 0..10 {
    let mut v = PNG_SIGNATURE.to_vec();
    v.extend(super::rand_bytes(1024));
    let err = Image::from_reader("random", &v[..], &DecodeOptions::default()).unwrap_err();
    assert_ne!(err.kind(), ErrorKind::SignatureMismatch);
  }
}
