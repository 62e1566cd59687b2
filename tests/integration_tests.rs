// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the property file store.
//!
//! These cover the store contract end to end over real files: the byte-exact
//! write scenarios of the two variants, round-trip identity, and the
//! missing-file/missing-key policies.

mod common;

use common::write_fixture;
use pipecfg::adapters::PropFileStore;
use pipecfg::domain::{LineFormat, PropError};
use pipecfg::ports::PropStore;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_read_properties() {
    let dir = tempdir().unwrap();
    let general = write_fixture(
        dir.path(),
        "general.properties",
        "buildMetadataFile=00-Build.txt\namiIdFile=amiId.properties\n",
    );
    let branch = write_fixture(
        dir.path(),
        "branch-specific.properties",
        "productName=scylla\nrepoUrl=downloads.example.com/unstable/scylla/master\n",
    );

    let general_p = PropFileStore::properties(&general, false).unwrap();
    assert_eq!(
        general_p.get_str("buildMetadataFile").unwrap().as_str(),
        "00-Build.txt"
    );

    let branch_p = PropFileStore::properties(&branch, false).unwrap();
    assert_eq!(branch_p.get_str("productName").unwrap().as_str(), "scylla");
}

#[test]
fn test_read_build_metadata() {
    let dir = tempdir().unwrap();
    let metadata = write_fixture(
        dir.path(),
        "00-Build.txt",
        "scylla-product: scylla\nami-base-os: ubuntu:20.04\nscylla-version: 5.0.0\n",
    );

    let metadata_p = PropFileStore::build_metadata(&metadata, false).unwrap();
    assert_eq!(
        metadata_p.get_str("scylla-product").unwrap().as_str(),
        "scylla"
    );
    assert_eq!(
        metadata_p.get_str("ami-base-os").unwrap().as_str(),
        "ubuntu:20.04"
    );
}

#[test]
fn test_write_properties() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("amiId.properties");

    let mut ami_p = PropFileStore::properties(&path, true).unwrap();
    ami_p.set_str("scylla_ami_id", "ami-00000000").unwrap();
    ami_p.commit().unwrap();

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "scylla_ami_id=ami-00000000\n"
    );
}

#[test]
fn test_write_build_metadata() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("00-Build.txt");

    let mut metadata_p = PropFileStore::build_metadata(&path, true).unwrap();
    metadata_p.set_str("scylla-product", "scylla").unwrap();
    metadata_p.set_str("ami-base-os", "ubuntu:20.04").unwrap();
    metadata_p.commit().unwrap();

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "scylla-product: scylla\nami-base-os: ubuntu:20.04\n"
    );
}

#[test]
fn test_file_not_found_properties() {
    let dir = tempdir().unwrap();
    let result = PropFileStore::properties(dir.path().join("amiId.properties"), false);
    assert!(matches!(result, Err(PropError::FileNotFound { .. })));
}

#[test]
fn test_file_not_found_build_metadata() {
    let dir = tempdir().unwrap();
    let result = PropFileStore::build_metadata(dir.path().join("00-Build.txt"), false);
    assert!(matches!(result, Err(PropError::FileNotFound { .. })));
}

#[test]
fn test_round_trip_preserves_unrelated_content() {
    let dir = tempdir().unwrap();
    let content = "\
# general settings for the master branch
buildMetadataFile=00-Build.txt

; legacy entry kept for older pipelines
amiIdFile=amiId.properties
";
    let path = write_fixture(dir.path(), "general.properties", content);

    let store = PropFileStore::properties(&path, false).unwrap();
    store.commit().unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), content);
}

#[test]
fn test_update_rewrites_single_line_only() {
    let dir = tempdir().unwrap();
    let content = "\
# pipeline state
scylla_ami_id=ami-olddddd
scylla_gce_id=scylla-image-1
";
    let path = write_fixture(dir.path(), "imageIds.properties", content);

    let mut store = PropFileStore::properties(&path, false).unwrap();
    store.set_str("scylla_ami_id", "ami-newwwww").unwrap();
    store.commit().unwrap();

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "\
# pipeline state
scylla_ami_id=ami-newwwww
scylla_gce_id=scylla-image-1
"
    );
}

#[test]
fn test_new_keys_append_in_order() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("00-Build.txt");

    let mut store = PropFileStore::build_metadata(&path, true).unwrap();
    store.set_str("scylla-product", "scylla").unwrap();
    store.set_str("scylla-version", "5.0.0").unwrap();
    store.set_str("scylla-release", "0.20210101.abcdef").unwrap();
    store.commit().unwrap();

    let keys: Vec<String> = store.keys().into_iter().map(|k| k.into_string()).collect();
    assert_eq!(keys, vec!["scylla-product", "scylla-version", "scylla-release"]);
}

#[test]
fn test_variant_grammars_do_not_cross_parse() {
    let dir = tempdir().unwrap();
    // a properties file read as build metadata exposes no keys, and vice versa
    let props = write_fixture(dir.path(), "a.properties", "key=value\n");
    let meta = write_fixture(dir.path(), "b.txt", "key: value\n");

    let wrong_meta = PropFileStore::open(&props, LineFormat::BUILD_METADATA, false).unwrap();
    assert!(wrong_meta.keys().is_empty());

    let wrong_props = PropFileStore::open(&meta, LineFormat::PROPERTIES, false).unwrap();
    assert!(wrong_props.keys().is_empty());
}

#[test]
fn test_get_after_set_before_commit() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("amiId.properties");

    let mut store = PropFileStore::properties(&path, true).unwrap();
    store.set_str("scylla_ami_id", "ami-00000000").unwrap();

    // visible in memory, not yet on disk
    assert_eq!(
        store.get_str("scylla_ami_id").unwrap().as_str(),
        "ami-00000000"
    );
    assert_eq!(fs::read_to_string(&path).unwrap(), "");
}
