use std::fs;
use std::process::Command;

fn bolticon() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_bolticon"));
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn writes_default_icons_into_working_dir() {
    let dir = tempfile::tempdir().expect("tempdir");
    let out = bolticon().current_dir(dir.path()).output().expect("run bolticon");
    assert!(out.status.success());
    for (name, size) in [("icon16.png", 16), ("icon48.png", 48), ("icon128.png", 128)] {
        let img = image::open(dir.path().join(name)).expect("decode png");
        assert_eq!(img.to_rgb8().dimensions(), (size, size));
    }
}

#[test]
fn write_failure_exits_nonzero_and_reports_once() {
    let dir = tempfile::tempdir().expect("tempdir");
    // a directory where the first file should go makes the write fail
    fs::create_dir(dir.path().join("icon16.png")).unwrap();

    let out = bolticon().current_dir(dir.path()).output().expect("run bolticon");
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert_eq!(stderr.matches("Failed to write").count(), 1, "stderr: {}", stderr);
    assert!(!dir.path().join("icon48.png").exists());
}
