// tests/end_to_end.rs

//! Drives the `circle-raster` binary the way a user would.

use std::fs;
use std::process::Command;

const RADIUS_THREE: &str = concat!(
    "  ###  \n",
    " #   # \n",
    "#     #\n",
    "#     #\n",
    "#     #\n",
    " #   # \n",
    "  ###  \n",
);

fn circle_raster() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_circle-raster"));
    command.env("RUST_LOG", "off");
    command
}

#[test]
fn test_default_radius_prints_text() {
    let output = circle_raster().output().expect("binary runs");
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), RADIUS_THREE);
}

#[test]
fn test_radius_flag() {
    let output = circle_raster().args(["-r", "0"]).output().unwrap();
    assert!(output.status.success());
    assert_eq!(output.stdout, b"#\n");

    let output = circle_raster().args(["--radius", "3"]).output().unwrap();
    assert_eq!(String::from_utf8(output.stdout).unwrap(), RADIUS_THREE);
}

#[test]
fn test_invalid_radius_exits_non_zero() {
    for bad in ["abc", "-5", "1.5"] {
        let output = circle_raster().args(["-r", bad]).output().unwrap();
        assert!(!output.status.success(), "radius {:?} was accepted", bad);
        assert!(output.stdout.is_empty());
    }
}

#[test]
fn test_radius_above_render_limit_is_an_error() {
    for args in [
        vec!["-r", "1073741824"],
        vec!["-r", "4097"],
        vec!["-r", "1073741824", "--output", "/nonexistent/circle.png"],
    ] {
        let output = circle_raster()
            .args(&args)
            .env("RUST_BACKTRACE", "0")
            .output()
            .unwrap();
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert_eq!(output.status.code(), Some(1), "args {:?}: {}", args, stderr);
        assert!(output.stdout.is_empty());
        assert!(stderr.contains("exceeds max_radius 4096"), "args {:?}: {}", args, stderr);
        assert!(!stderr.contains("panicked"), "args {:?}: {}", args, stderr);
    }
}

#[test]
fn test_config_sets_render_limit() {
    let dir = std::env::temp_dir().join(format!("circle-raster-limit-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let config = dir.join("config.json");
    fs::write(&config, r#"{ "default_radius": 1, "max_radius": 2 }"#).unwrap();

    let at_limit = circle_raster()
        .args(["-r", "2", "--config"])
        .arg(&config)
        .output()
        .unwrap();
    let above_limit = circle_raster()
        .args(["-r", "3", "--config"])
        .arg(&config)
        .output()
        .unwrap();
    let _ = fs::remove_dir_all(&dir);

    assert!(at_limit.status.success());
    assert_eq!(at_limit.stdout.len(), 5 * 6);
    assert!(!above_limit.status.success());
    assert!(String::from_utf8_lossy(&above_limit.stderr).contains("radius 3 exceeds max_radius 2"));
}

#[test]
fn test_config_file_changes_default_and_glyphs() {
    let dir = std::env::temp_dir().join(format!("circle-raster-e2e-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let config = dir.join("config.json");
    fs::write(&config, r#"{ "default_radius": 1, "text": { "stroke": "o", "background": "." } }"#)
        .unwrap();

    let output = circle_raster().arg("--config").arg(&config).output().unwrap();
    let _ = fs::remove_dir_all(&dir);
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), ".o.\no.o\n.o.\n");
}

#[test]
fn test_missing_config_file_fails() {
    let output = circle_raster()
        .args(["--config", "/nonexistent/circle-raster.json"])
        .output()
        .unwrap();
    assert!(!output.status.success());
}

#[test]
fn test_output_writes_png() {
    let dir = std::env::temp_dir().join(format!("circle-raster-png-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("circle.png");

    let output = circle_raster()
        .args(["-r", "10", "--output"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(output.stdout.is_empty());

    let image = image::open(&path).unwrap().to_rgba8();
    let _ = fs::remove_dir_all(&dir);
    assert_eq!(image.dimensions(), (21, 21));
    // Top of the circle: (0, 10) maps to column 10, row 0.
    assert_eq!(*image.get_pixel(10, 0), image::Rgba([255, 255, 255, 255]));
    assert_eq!(*image.get_pixel(10, 10), image::Rgba([0, 0, 0, 0]));
}
