use super::*;
use crate::assets::timestamp::UNKNOWN_TIMESTAMP;

#[test]
fn labeling_uses_the_filename() {
    let labeled = LabeledImage::from_source(SourceImage::new(
        "2024-03-15 143052.jpg",
        vec![1u8, 2, 3],
    ));
    assert_eq!(labeled.display_timestamp, "2024-03-15 14:30:52");
    assert_eq!(labeled.image.bytes(), &[1, 2, 3]);

    let unlabeled = LabeledImage::from_source(SourceImage::new("obraz1.jpg", Vec::new()));
    assert_eq!(unlabeled.display_timestamp, UNKNOWN_TIMESTAMP);
}

#[test]
fn clones_share_bytes() {
    let a = SourceImage::new("a.png", vec![0u8; 16]);
    let b = a.clone();
    assert_eq!(a.bytes().as_ptr(), b.bytes().as_ptr());
}

#[test]
fn debug_omits_payload() {
    let s = format!("{:?}", SourceImage::new("a.png", vec![7u8; 1024]));
    assert!(s.contains("bytes_len: 1024"));
    assert!(!s.contains("7, 7"));
}

#[test]
fn from_path_keeps_file_name_only() {
    let dir = std::path::PathBuf::from("target")
        .join("source_unit")
        .join("nested");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("2022-08-09 101112.png");
    std::fs::write(&path, b"bytes").unwrap();

    let src = SourceImage::from_path(&path).unwrap();
    assert_eq!(src.file_name(), "2022-08-09 101112.png");
    assert_eq!(src.bytes(), b"bytes");

    assert!(SourceImage::from_path(&dir.join("missing.png")).is_err());
}
