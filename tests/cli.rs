//! Tests for the `mmcq` binary's output and exit codes.

use mmcq::image::{Rgb, RgbImage};
use std::{
    path::PathBuf,
    process::{Command, Output},
};

fn mmcq(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_mmcq"))
        .args(args)
        .output()
        .expect("failed to run mmcq")
}

fn write_image(name: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("mmcq-cli-{}-{}", std::process::id(), name));
    let image = RgbImage::from_fn(8, 8, |x, _| if x < 4 { Rgb([0x13, 0x25, 0x5c]) } else { Rgb([0xf8, 0xf3, 0xe9]) });
    image.save(&path).unwrap();
    path
}

#[test]
fn prints_default_sixteen_colors() {
    let path = write_image("default.png");
    let output = mmcq(&[path.to_str().unwrap()]);
    std::fs::remove_file(&path).unwrap();

    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();

    assert_eq!(lines.len(), 16);
    assert_eq!(&lines[..8], &["#13255C"; 8]);
    assert_eq!(&lines[8..], &["#F8F3E9"; 8]);
}

#[test]
fn prints_two_to_the_levels_colors() {
    let path = write_image("levels.png");
    let output = mmcq(&[path.to_str().unwrap(), "1"]);
    std::fs::remove_file(&path).unwrap();

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "#13255C\n#F8F3E9\n");
}

#[test]
fn missing_image_argument_fails() {
    let output = mmcq(&[]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn unparsable_levels_fail() {
    for levels in ["four", "-1"] {
        let output = mmcq(&["whatever.png", levels]);

        assert!(!output.status.success(), "{levels:?} should be rejected");
        assert!(output.stdout.is_empty());
    }
}

#[test]
fn unreadable_file_fails_with_message() {
    let path = std::env::temp_dir().join(format!("mmcq-cli-{}-missing.png", std::process::id()));
    let output = mmcq(&[path.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8(output.stderr).unwrap().starts_with("mmcq: failed to read"));
}

#[test]
fn undecodable_file_fails_with_message() {
    let path = std::env::temp_dir().join(format!("mmcq-cli-{}-garbage.png", std::process::id()));
    std::fs::write(&path, b"definitely not a png").unwrap();

    let output = mmcq(&[path.to_str().unwrap()]);
    std::fs::remove_file(&path).unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8(output.stderr).unwrap().starts_with("mmcq: failed to decode"));
}
