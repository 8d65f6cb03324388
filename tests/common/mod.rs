use assert_cmd::Command;
use std::path::Path;

pub fn scribe_cmd(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("scribe").unwrap();
    cmd.env_remove("SCRIBE_LOG");
    cmd.env("SCRIBE_HOME", home);
    cmd
}
