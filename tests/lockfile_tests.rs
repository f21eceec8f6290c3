//! Lockfile persistence tests
//!
//! Exercise the public lockfile API against real files.

mod common;

use berks_lock::{BerksError, CookbookSource, LockedCookbook, Lockfile, LockfileOptions};
use serde_json::json;

fn workspace_lockfile(workspace: &common::TestWorkspace) -> Lockfile {
    Lockfile::with_options(LockfileOptions::for_manifest(
        workspace.manifest().display().to_string(),
    ))
}

#[test]
fn test_load_missing_is_not_found() {
    let err = Lockfile::<LockedCookbook>::load("/does/not/exist.lock").unwrap_err();
    assert!(matches!(err, BerksError::LockfileNotFound { .. }));
}

#[test]
fn test_end_to_end_scenario() {
    let workspace = common::TestWorkspace::new();
    let source = LockedCookbook::site("apt", "https://supermarket.chef.io/api/v1")
        .with_locked_version("7.4.0");

    let mut lockfile = workspace_lockfile(&workspace);
    lockfile.append(source.clone()).unwrap();
    lockfile.fingerprint = Some("abc123".to_string());
    lockfile.save().unwrap();

    let document: serde_json::Value = serde_json::from_str(&workspace.read_lockfile()).unwrap();
    assert_eq!(
        document,
        json!({
            "fingerprint": "abc123",
            "sources": [source.to_hash().unwrap()],
            "options": { "manifest_path": workspace.manifest().display().to_string() }
        })
    );
}

#[test]
fn test_saved_text_ends_with_single_newline() {
    let workspace = common::TestWorkspace::new();
    workspace_lockfile(&workspace).save().unwrap();

    let content = workspace.read_lockfile();
    assert!(content.ends_with("}\n"));
    assert!(!content.ends_with("\n\n"));
}

#[test]
fn test_second_save_replaces_first() {
    let workspace = common::TestWorkspace::new();
    let mut lockfile = workspace_lockfile(&workspace);

    lockfile
        .update(vec![LockedCookbook::new("ntp"), LockedCookbook::new("apt")])
        .unwrap();
    lockfile.save().unwrap();

    lockfile.update_one(LockedCookbook::new("yum")).unwrap();
    lockfile.save().unwrap();

    let reloaded: Lockfile = Lockfile::load(workspace.lockfile()).unwrap();
    assert_eq!(reloaded.sources(), &[LockedCookbook::new("yum")]);
}

#[test]
fn test_load_ignores_field_order_and_unknown_keys() {
    let workspace = common::TestWorkspace::new();
    workspace.write_lockfile(
        r#"{
  "options": {},
  "generated_by": "berks 1.4",
  "sources": [{"path": "./cookbooks/app", "name": "app"}],
  "fingerprint": "abc"
}"#,
    );

    let lockfile: Lockfile = Lockfile::load(workspace.lockfile()).unwrap();
    assert_eq!(
        lockfile.sources(),
        &[LockedCookbook::path("app", "./cookbooks/app")]
    );
    assert_eq!(lockfile.fingerprint(), Some("abc"));
}

#[test]
fn test_load_is_case_sensitive() {
    let workspace = common::TestWorkspace::new();
    workspace.write_lockfile(r#"{"Sources": [], "options": {}}"#);

    let err = Lockfile::<LockedCookbook>::load(workspace.lockfile()).unwrap_err();
    assert!(matches!(err, BerksError::LockfileDecodeFailed { .. }));
}
