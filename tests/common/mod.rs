use assert_cmd::Command;
use std::path::Path;

pub fn discipline_cmd() -> Command {
    let mut cmd = Command::cargo_bin("discipline").unwrap();
    cmd.env_remove("DISCIPLINE_ROOT");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Command running inside an initialized tracker root
pub fn tracker_cmd(root: &Path) -> Command {
    let mut cmd = discipline_cmd();
    cmd.current_dir(root);
    cmd
}

pub fn init_tracker(root: &Path) {
    discipline_cmd().arg("init").arg(root).assert().success();
}
