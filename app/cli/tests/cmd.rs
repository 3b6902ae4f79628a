//! Tests for preset command logic against a temp-backed store.

use std::path::PathBuf;
use tfswap_cli::cmd::PresetCommand;
use tfswap_cli::presets::PresetStore;

fn add_cmd(name: &str) -> PresetCommand {
    PresetCommand::Add {
        name: name.to_owned(),
        provider: "foo".to_owned(),
        bin_path: PathBuf::from("/build/terraform-provider-foo"),
        pre_update: None,
    }
}

#[test]
fn duplicate_add_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = PresetStore::load_from(dir.path().join("presets.yml")).unwrap();

    add_cmd("dev").run(&mut store).unwrap();
    let err = add_cmd("dev").run(&mut store).unwrap_err();
    assert!(err.to_string().contains("already exists"), "{err}");

    // The first preset survives untouched.
    assert_eq!(store.get("dev").unwrap().provider, "foo");
}

#[test]
fn unknown_remove_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("presets.yml");
    let mut store = PresetStore::load_from(path.clone()).unwrap();

    let err = PresetCommand::Remove {
        name: "nope".to_owned(),
    }
    .run(&mut store)
    .unwrap_err();
    assert!(err.to_string().contains("does not exist"), "{err}");
}

#[test]
fn remove_after_add_succeeds() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("presets.yml");
    let mut store = PresetStore::load_from(path.clone()).unwrap();

    add_cmd("dev").run(&mut store).unwrap();
    PresetCommand::Remove {
        name: "dev".to_owned(),
    }
    .run(&mut store)
    .unwrap();

    let reloaded = PresetStore::load_from(path).unwrap();
    assert!(reloaded.is_empty());
}

#[test]
fn add_persists_an_absolute_bin_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("presets.yml");
    let mut store = PresetStore::load_from(path.clone()).unwrap();

    PresetCommand::Add {
        name: "dev".to_owned(),
        provider: "foo".to_owned(),
        bin_path: PathBuf::from("build/terraform-provider-foo"),
        pre_update: None,
    }
    .run(&mut store)
    .unwrap();

    let reloaded = PresetStore::load_from(path).unwrap();
    assert!(reloaded.get("dev").unwrap().bin_path.is_absolute());
}

#[cfg(unix)]
mod shell {
    use tfswap_cli::shell;

    #[test]
    fn failing_command_is_an_error() {
        let err = shell::run("false").unwrap_err();
        assert!(err.to_string().contains("exited with"), "{err}");
    }

    #[test]
    fn succeeding_command_is_ok() {
        shell::run("true").unwrap();
    }
}
