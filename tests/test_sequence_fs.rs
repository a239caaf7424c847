// tests/test_sequence_fs.rs
// Filesystem-backed sequence extraction and OBJ export

use std::fs;

use image::{Rgba, RgbaImage};
use relief3d::{pipeline, GenerationConfig, MeshStyle, SequenceOptions};
use relief3d::pixels::FsDecoder;
use relief3d::sequence::FsLister;

fn write_gray_frame(dir: &std::path::Path, name: &str, level: u8) {
    RgbaImage::from_pixel(2, 2, Rgba([level, level, level, 255]))
        .save(dir.join(name))
        .expect("write test frame");
}

#[test]
fn sequence_runs_against_real_files() {
    let dir = tempfile::tempdir().unwrap();
    for (i, level) in [0u8, 64, 128, 192, 255].iter().enumerate() {
        write_gray_frame(dir.path(), &format!("tide{}.png", i), *level);
    }
    // an unrelated file in the directory must not join the family
    fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

    // weight alpha at zero so elevation equals the gray level exactly
    let config = GenerationConfig {
        style: MeshStyle::Blocks,
        weight_mode: relief3d::WeightMode::Custom([1.0, 1.0, 1.0, 0.0]),
        sequence: Some(SequenceOptions {
            max_images: 3,
            skip_images: 1,
            frame_step: 2,
        }),
        ..Default::default()
    };
    let generation = pipeline::generate(
        &dir.path().join("tide0.png"),
        &config,
        &FsDecoder,
        &FsLister,
    )
    .expect("sequence generation should succeed");

    let frames = generation.frames.as_ref().unwrap();
    assert_eq!(frames.frame_count(), 3);
    assert!(generation.warnings.is_empty());

    // frames 0, 2, 4 of the sorted siblings -> levels 0, 128, 255
    let expected = [0.0, 128.0 / 255.0, 1.0];
    for (heights, level) in frames.frame_heights.iter().zip(expected) {
        assert_eq!(heights.len(), 4);
        assert!((heights[0] - level).abs() < 1e-6);
    }
}

#[test]
fn corrupt_sibling_is_reported_not_fatal() {
    let dir = tempfile::tempdir().unwrap();
    write_gray_frame(dir.path(), "cut0.png", 10);
    fs::write(dir.path().join("cut1.png"), b"not a png").unwrap();
    write_gray_frame(dir.path(), "cut2.png", 200);

    let config = GenerationConfig {
        style: MeshStyle::Plane,
        sequence: Some(SequenceOptions {
            max_images: 3,
            skip_images: 0,
            frame_step: 1,
        }),
        ..Default::default()
    };
    let generation = pipeline::generate(
        &dir.path().join("cut0.png"),
        &config,
        &FsDecoder,
        &FsLister,
    )
    .unwrap();

    assert_eq!(generation.frames.as_ref().unwrap().frame_count(), 2);
    assert_eq!(generation.warnings.len(), 1);
    assert!(generation.warnings[0]
        .path
        .to_string_lossy()
        .ends_with("cut1.png"));
}

#[test]
fn exported_obj_contains_quad_faces() {
    let dir = tempfile::tempdir().unwrap();
    write_gray_frame(dir.path(), "lone.png", 128);

    let generation = pipeline::generate(
        &dir.path().join("lone.png"),
        &GenerationConfig::default(),
        &FsDecoder,
        &FsLister,
    )
    .unwrap();

    let out = dir.path().join("lone.obj");
    relief3d::io::export_obj_to_path(&out, &generation.mesh, &generation.uvs).unwrap();
    let text = fs::read_to_string(&out).unwrap();
    assert_eq!(text.lines().filter(|l| l.starts_with("v ")).count(), 32);
    assert_eq!(text.lines().filter(|l| l.starts_with("f ")).count(), 24);
    // quad faces carry four corners
    let first_face = text.lines().find(|l| l.starts_with("f ")).unwrap();
    assert_eq!(first_face.split_whitespace().count(), 5);
}
