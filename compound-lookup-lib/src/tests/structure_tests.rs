use image::{Rgba, RgbaImage};

use super::*;

#[test]
fn file_name_is_identifier_plus_extension() {
    assert_eq!(structure_image_name("64-17-5", "png").as_deref(), Some("64-17-5.png"));
    assert_eq!(structure_image_name(" 64-17-5 ", ".png").as_deref(), Some("64-17-5.png"));
}

#[test]
fn unsafe_identifiers_have_no_file_name() {
    for cas in ["", "  ", ".", "..", "../secret", "a/b", "a\\b", "a\0b"] {
        assert_eq!(structure_image_name(cas, "png"), None, "{cas:?}");
    }
}

#[test]
fn missing_image_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let result = resolve_structure_image(dir.path(), "64-17-5", "png");
    assert_eq!(
        result,
        StructureImage::NotFound {
            file_name: "64-17-5.png".to_string()
        }
    );
}

#[test]
fn missing_directory_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let result = resolve_structure_image(&dir.path().join("absent"), "64-17-5", "png");
    assert!(matches!(result, StructureImage::NotFound { .. }));
}

#[test]
fn traversal_identifier_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let result = resolve_structure_image(dir.path(), "../64-17-5", "png");
    assert!(matches!(result, StructureImage::NotFound { .. }));
}

#[test]
fn valid_image_is_found_with_dimensions() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("64-17-5.png");
    RgbaImage::from_pixel(6, 4, Rgba([0, 0, 0, 255]))
        .save(&path)
        .unwrap();

    let settings = ImageSettings::new(dir.path());
    match settings.resolve("64-17-5") {
        StructureImage::Found {
            path: found,
            width,
            height,
        } => {
            assert_eq!(found, path);
            assert_eq!((width, height), (6, 4));
        }
        other => panic!("expected Found, got {other:?}"),
    }
}

#[test]
fn corrupt_image_is_unreadable() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("64-17-5.png"), b"definitely not a png").unwrap();
    let result = resolve_structure_image(dir.path(), "64-17-5", "png");
    assert!(matches!(result, StructureImage::Unreadable { .. }));
}
