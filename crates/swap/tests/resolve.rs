//! Tests for workspace discovery, platform directory resolution, and
//! provider artifact resolution.

use std::path::Path;
use tfswap::{SwapError, Workspace, provider_artifact};

fn workspace_with_platform(dir: &Path, platform: &str) -> std::path::PathBuf {
    let platform_dir = dir.join(".terraform").join("plugins").join(platform);
    std::fs::create_dir_all(&platform_dir).unwrap();
    platform_dir
}

#[test]
fn workspace_marker_present() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir(dir.path().join(".terraform")).unwrap();
    let ws = Workspace::at(dir.path()).unwrap();
    assert_eq!(ws.root(), dir.path());
}

// The original tool compared the stat error against a fixed not-found
// sentinel that the stat call never actually returns, so a missing marker
// could slip through. These two tests pin the corrected classification.
#[test]
fn workspace_marker_missing_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let err = Workspace::at(dir.path()).unwrap_err();
    assert!(matches!(err, SwapError::NotAWorkspace { .. }), "{err}");
}

#[test]
fn workspace_marker_must_be_a_directory() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(".terraform"), "not a directory").unwrap();
    let err = Workspace::at(dir.path()).unwrap_err();
    assert!(matches!(err, SwapError::NotAWorkspace { .. }), "{err}");
}

#[test]
fn platform_dir_resolves_single_subdirectory() {
    let dir = tempfile::tempdir().unwrap();
    let platform_dir = workspace_with_platform(dir.path(), "linux_amd64");
    let ws = Workspace::at(dir.path()).unwrap();
    assert_eq!(ws.platform_dir().unwrap(), platform_dir);
}

#[test]
fn platform_dir_empty_cache_resolves_to_none() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(dir.path().join(".terraform").join("plugins")).unwrap();
    let ws = Workspace::at(dir.path()).unwrap();
    assert!(ws.platform_dir().is_none());
}

#[test]
fn platform_dir_missing_cache_resolves_to_none() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir(dir.path().join(".terraform")).unwrap();
    let ws = Workspace::at(dir.path()).unwrap();
    assert!(ws.platform_dir().is_none());
}

#[test]
fn platform_dir_ignores_plain_files() {
    let dir = tempfile::tempdir().unwrap();
    let platform_dir = workspace_with_platform(dir.path(), "darwin_arm64");
    std::fs::write(
        dir.path().join(".terraform").join("plugins").join("stray"),
        "",
    )
    .unwrap();
    let ws = Workspace::at(dir.path()).unwrap();
    assert_eq!(ws.platform_dir().unwrap(), platform_dir);
}

#[test]
fn artifact_single_match_resolves() {
    let dir = tempfile::tempdir().unwrap();
    let artifact = dir.path().join("terraform-provider-bar_v1");
    std::fs::write(&artifact, "binary").unwrap();
    assert_eq!(provider_artifact(dir.path(), "bar").unwrap(), artifact);
}

#[test]
fn artifact_no_match_resolves_to_none() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("terraform-provider-other_v1"), "binary").unwrap();
    assert!(provider_artifact(dir.path(), "bar").is_none());
}

#[test]
fn artifact_multiple_matches_are_ambiguous() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("terraform-provider-foo_v1"), "one").unwrap();
    std::fs::write(dir.path().join("terraform-provider-foo_v2"), "two").unwrap();
    // Never a first-match pick: two candidate builds of the same provider
    // must resolve to nothing.
    assert!(provider_artifact(dir.path(), "foo").is_none());
}

#[test]
fn artifact_missing_directory_resolves_to_none() {
    let dir = tempfile::tempdir().unwrap();
    assert!(provider_artifact(&dir.path().join("nope"), "foo").is_none());
}
