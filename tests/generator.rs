use std::error::Error;
use std::fs;

use sample_pdf_fixture::{generate, generate_with, Backend, FixtureError, MinimalRenderer};

#[test]
fn default_output_path_is_under_data() {
    assert_eq!(
        sample_pdf_fixture::DEFAULT_OUTPUT_PATH,
        "data/sample_merchant_summary.pdf"
    );
}

#[test]
fn creates_missing_data_directory_and_writes_pdf() {
    let root = tempfile::tempdir().expect("temp dir");
    let path = root.path().join("data/sample_merchant_summary.pdf");
    assert!(!root.path().join("data").exists());

    let generated = generate_with(&MinimalRenderer, &path).expect("generation succeeds");

    assert!(root.path().join("data").is_dir());
    let bytes = fs::read(&path).expect("output file");
    assert!(!bytes.is_empty());
    assert!(bytes.starts_with(b"%PDF-1.4\n1 0 obj"));
    assert_eq!(generated.path, path);
    assert_eq!(generated.backend, Backend::Minimal);
    assert_eq!(generated.bytes_written, bytes.len());
}

#[test]
fn repeated_runs_produce_identical_files() {
    let root = tempfile::tempdir().expect("temp dir");
    let path = root.path().join("data/sample_merchant_summary.pdf");

    generate_with(&MinimalRenderer, &path).expect("first run");
    let first = fs::read(&path).expect("first output");
    generate_with(&MinimalRenderer, &path).expect("second run");
    let second = fs::read(&path).expect("second output");

    assert_eq!(first, second);
}

#[test]
fn existing_file_is_overwritten() {
    let root = tempfile::tempdir().expect("temp dir");
    let path = root.path().join("sample.pdf");
    fs::write(&path, b"stale contents that are longer than nothing").expect("seed file");

    generate_with(&MinimalRenderer, &path).expect("generation succeeds");

    let bytes = fs::read(&path).expect("output file");
    assert!(bytes.starts_with(b"%PDF-1.4"));
}

#[test]
fn directory_creation_failure_keeps_io_source() {
    let root = tempfile::tempdir().expect("temp dir");
    let blocker = root.path().join("data");
    fs::write(&blocker, b"not a directory").expect("blocking file");

    let err = generate_with(&MinimalRenderer, blocker.join("sample.pdf"))
        .expect_err("parent is a regular file");

    match &err {
        FixtureError::CreateDir { path, .. } => assert_eq!(path, &blocker),
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(err.source().is_some_and(|source| source.is::<std::io::Error>()));
}

#[test]
fn write_failure_is_reported_with_path() {
    let root = tempfile::tempdir().expect("temp dir");
    let target = root.path().join("occupied");
    fs::create_dir(&target).expect("directory at target path");

    let err = generate_with(&MinimalRenderer, &target).expect_err("target is a directory");

    assert!(matches!(&err, FixtureError::Write { path, .. } if path == &target));
    assert!(err.to_string().contains("occupied"));
}

#[test]
fn automatic_selection_writes_a_pdf() {
    let root = tempfile::tempdir().expect("temp dir");
    let path = root.path().join("data/sample_merchant_summary.pdf");

    let generated = generate(&path).expect("generation succeeds");

    let bytes = fs::read(&path).expect("output file");
    assert!(bytes.starts_with(b"%PDF-"));
    assert_eq!(generated.bytes_written, bytes.len());
}
