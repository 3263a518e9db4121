// tests/profile_loading.rs

use std::io::Write;

use procburst::config::load_profile;
use procburst::errors::BurstError;
use tempfile::NamedTempFile;

#[test]
fn full_profile_is_loaded() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
repetitions = 25
client = "./bin/client"
reap_on_abort = true
"#
    )
    .unwrap();

    let profile = load_profile(file.path()).unwrap();
    assert_eq!(profile.repetitions, Some(25));
    assert_eq!(profile.client.as_deref(), Some("./bin/client"));
    assert_eq!(profile.reap_on_abort, Some(true));
}

#[test]
fn empty_profile_is_all_defaults() {
    let file = NamedTempFile::new().unwrap();
    let profile = load_profile(file.path()).unwrap();
    assert!(profile.repetitions.is_none());
    assert!(profile.client.is_none());
    assert!(profile.reap_on_abort.is_none());
}

#[test]
fn unknown_key_returns_toml_error() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "concurrency_limit = 4\n").unwrap();

    match load_profile(file.path()) {
        Err(BurstError::Toml(_)) => {}
        other => panic!("expected TOML error, got {other:?}"),
    }
}

#[test]
fn negative_profile_repetitions_rejected() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "repetitions = -1\n").unwrap();
    assert!(matches!(load_profile(file.path()), Err(BurstError::Toml(_))));
}

#[test]
fn empty_client_returns_profile_error() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "client = \"\"\n").unwrap();

    match load_profile(file.path()) {
        Err(BurstError::Profile(msg)) => assert!(msg.contains("client")),
        other => panic!("expected profile error, got {other:?}"),
    }
}

#[test]
fn missing_file_returns_profile_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = load_profile(dir.path().join("nope.toml"));
    assert!(matches!(result, Err(BurstError::Profile(_))));
}
