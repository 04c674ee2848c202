use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use proto_test_util::{FixtureError, GoldenConfig, GoldenFileLocator};

const GOLDEN: &str = "golden_message";

fn source_tree(root: &Path) {
    let testdata = root.join("src/google/protobuf/testdata");
    fs::create_dir_all(&testdata).expect("testdata dir");
    fs::write(testdata.join(GOLDEN), [0x08, 0x65]).expect("golden file");
}

#[test]
fn finds_golden_file_from_deep_directory() {
    let temp = tempfile::tempdir().expect("tempdir");
    source_tree(temp.path());
    let deep = temp.path().join("build/out/a/b/c/d");
    fs::create_dir_all(&deep).expect("deep dir");

    let locator = GoldenFileLocator::default().with_start_dir(&deep);
    assert_eq!(locator.source_root().expect("root"), temp.path());
    assert_eq!(
        locator.locate(GOLDEN).expect("locate"),
        temp.path().join("src/google/protobuf/testdata").join(GOLDEN)
    );
    assert_eq!(locator.read(GOLDEN).expect("read"), vec![0x08, 0x65]);
}

#[test]
fn relative_start_directory_walks_real_parents() {
    let temp = tempfile::tempdir().expect("tempdir");
    source_tree(temp.path());
    let deep = temp.path().join("a/b");
    fs::create_dir_all(&deep).expect("deep dir");

    // Reach `deep` from the working directory through `..` segments only.
    let cwd = env::current_dir().expect("cwd");
    let mut relative = PathBuf::new();
    for _ in cwd.components().skip(1) {
        relative.push("..");
    }
    relative.push(deep.strip_prefix("/").expect("absolute tempdir"));
    relative.push(".");
    assert!(relative.is_relative());

    let locator = GoldenFileLocator::default().with_start_dir(&relative);
    assert_eq!(locator.source_root().expect("root"), temp.path());
    assert_eq!(locator.read(GOLDEN).expect("read"), vec![0x08, 0x65]);
}

#[test]
fn start_directory_may_be_the_root_itself() {
    let temp = tempfile::tempdir().expect("tempdir");
    source_tree(temp.path());
    let locator = GoldenFileLocator::default().with_start_dir(temp.path());
    assert!(locator.locate(GOLDEN).is_ok());
}

#[test]
fn missing_source_root_explains_where_to_run() {
    let temp = tempfile::tempdir().expect("tempdir");
    let locator = GoldenFileLocator::default().with_start_dir(temp.path());
    match locator.locate(GOLDEN) {
        Err(FixtureError::NotFound { message }) => {
            assert!(message.contains("must be run from within the protobuf source package"));
        }
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[test]
fn missing_file_under_root_is_not_found() {
    let temp = tempfile::tempdir().expect("tempdir");
    source_tree(temp.path());
    let locator = GoldenFileLocator::default().with_start_dir(temp.path());
    assert!(matches!(
        locator.locate("golden_packed_fields_message"),
        Err(FixtureError::NotFound { .. })
    ));
}

#[test]
fn compare_golden_reports_both_payloads() {
    let temp = tempfile::tempdir().expect("tempdir");
    source_tree(temp.path());
    let locator = GoldenFileLocator::default().with_start_dir(temp.path());

    locator.compare_golden(GOLDEN, &[0x08, 0x65]).expect("identical");
    match locator.compare_golden(GOLDEN, &[0x08, 0x66]) {
        Err(FixtureError::GoldenMismatch { expected, actual, .. }) => {
            assert_eq!(expected, vec![0x08, 0x65]);
            assert_eq!(actual, vec![0x08, 0x66]);
        }
        other => panic!("expected GoldenMismatch, got {other:?}"),
    }
}

#[test]
fn custom_layout_from_config_file() {
    let temp = tempfile::tempdir().expect("tempdir");
    let root = temp.path().join("checkout");
    fs::create_dir_all(root.join("proto/golden")).expect("layout");
    fs::write(root.join("proto/golden").join(GOLDEN), b"x").expect("golden file");
    let config_path = temp.path().join("golden.toml");
    fs::write(&config_path, "source_marker = \"proto\"\ntestdata_dir = \"proto/golden\"\n")
        .expect("config");

    let config = GoldenConfig::from_path(&config_path).expect("config");
    let locator = GoldenFileLocator::new(config).with_start_dir(root.join("proto/golden"));
    assert_eq!(locator.read(GOLDEN).expect("read"), b"x".to_vec());
}
