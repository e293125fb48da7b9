// SPDX-License-Identifier: MPL-2.0

use std::{ffi::OsStr, fs};

use crate::util::*;

#[test]
fn pads_to_decimal_size() {
    let dir = scratch_dir("decimal");
    let source = dir.join("app.bin");
    let destination = dir.join("app-padded.bin");
    fs::write(&source, [1u8, 2, 3]).unwrap();

    let output = pad_image([
        source.as_os_str(),
        OsStr::new("8"),
        destination.as_os_str(),
    ])
    .output()
    .unwrap();
    assert_success(&output);
    assert!(output.stdout.is_empty());
    assert_eq!(
        fs::read(&destination).unwrap(),
        [1, 2, 3, 0, 0, 0, 0, 0]
    );

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn pads_to_hex_size() {
    let dir = scratch_dir("hex");
    let source = dir.join("app.bin");
    let destination = dir.join("app-padded.bin");
    fs::write(&source, b"boot").unwrap();

    let output = pad_image([
        source.as_os_str(),
        OsStr::new("0x100"),
        destination.as_os_str(),
    ])
    .output()
    .unwrap();
    assert_success(&output);
    let padded = fs::read(&destination).unwrap();
    assert_eq!(padded.len(), 0x100);
    assert_eq!(&padded[..4], b"boot");
    assert!(padded[4..].iter().all(|&b| b == 0));

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn exact_size_is_copied_verbatim() {
    let dir = scratch_dir("exact");
    let source = dir.join("app.bin");
    let destination = dir.join("app-padded.bin");
    fs::write(&source, [9u8; 16]).unwrap();

    let output = pad_image([
        source.as_os_str(),
        OsStr::new("16"),
        destination.as_os_str(),
    ])
    .output()
    .unwrap();
    assert_success(&output);
    assert_eq!(fs::read(&destination).unwrap(), [9; 16]);

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn empty_source_to_zero_size() {
    let dir = scratch_dir("empty");
    let source = dir.join("app.bin");
    let destination = dir.join("app-padded.bin");
    fs::write(&source, b"").unwrap();

    let output = pad_image([
        source.as_os_str(),
        OsStr::new("0"),
        destination.as_os_str(),
    ])
    .output()
    .unwrap();
    assert_success(&output);
    assert!(fs::read(&destination).unwrap().is_empty());

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn oversized_source_fails() {
    let dir = scratch_dir("oversized");
    let source = dir.join("app.bin");
    let destination = dir.join("app-padded.bin");
    fs::write(&source, [1u8, 2, 3, 4, 5]).unwrap();

    let output = pad_image([
        source.as_os_str(),
        OsStr::new("4"),
        destination.as_os_str(),
    ])
    .output()
    .unwrap();
    assert_exit_code(&output, 4);
    assert_stderr_contains_msg(
        &output,
        "data of 5 bytes does not fit in target size of 4 bytes",
    );
    assert!(!destination.exists());

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn missing_source_fails() {
    let dir = scratch_dir("missing");
    let source = dir.join("absent.bin");
    let destination = dir.join("app-padded.bin");

    let output = pad_image([
        source.as_os_str(),
        OsStr::new("16"),
        destination.as_os_str(),
    ])
    .output()
    .unwrap();
    assert_exit_code(&output, 3);
    assert_stderr_contains_msg(&output, "failed to read");
    assert!(!destination.exists());

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn unwritable_destination_fails() {
    let dir = scratch_dir("unwritable");
    let source = dir.join("app.bin");
    let destination = dir.join("missing-dir").join("app-padded.bin");
    fs::write(&source, [1u8]).unwrap();

    let output = pad_image([
        source.as_os_str(),
        OsStr::new("16"),
        destination.as_os_str(),
    ])
    .output()
    .unwrap();
    assert_exit_code(&output, 5);
    assert_stderr_contains_msg(&output, "failed to write");

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn malformed_size_is_a_usage_error() {
    let dir = scratch_dir("malformed");
    let source = dir.join("app.bin");
    let destination = dir.join("app-padded.bin");
    fs::write(&source, [1u8]).unwrap();

    let output = pad_image([
        source.as_os_str(),
        OsStr::new("0xnope"),
        destination.as_os_str(),
    ])
    .output()
    .unwrap();
    assert_exit_code(&output, 2);
    assert_stderr_contains_msg(&output, "invalid size literal: 0xnope");
    assert!(!destination.exists());

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn running_twice_gives_identical_output() {
    let dir = scratch_dir("twice");
    let source = dir.join("app.bin");
    let destination = dir.join("app-padded.bin");
    fs::write(&source, b"image payload").unwrap();

    let args = [
        source.as_os_str(),
        OsStr::new("0b1000000"),
        destination.as_os_str(),
    ];
    assert_success(&pad_image(args).output().unwrap());
    let first = fs::read(&destination).unwrap();
    assert_success(&pad_image(args).output().unwrap());
    assert_eq!(fs::read(&destination).unwrap(), first);
    assert_eq!(first.len(), 64);

    fs::remove_dir_all(&dir).unwrap();
}
