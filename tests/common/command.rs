use crate::common::file::{FileSpec, write_file};
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

#[fixture]
pub fn workspace_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

/// `old/` and `new/` trees with one added, one deleted, one modified and one
/// untouched file.
#[fixture]
pub fn trees_dir(workspace_dir: TempDir) -> TempDir {
    let old = workspace_dir.path().join("old");
    let new = workspace_dir.path().join("new");

    write_file(FileSpec::new(old.join("1.txt"), "one".to_string()));
    write_file(FileSpec::new(
        old.join("a").join("2.txt"),
        "two".to_string(),
    ));
    write_file(FileSpec::new(
        old.join("a").join("b").join("3.txt"),
        "three".to_string(),
    ));

    write_file(FileSpec::new(new.join("1.txt"), "one".to_string()));
    write_file(FileSpec::new(
        new.join("a").join("b").join("3.txt"),
        "three modified".to_string(),
    ));
    write_file(FileSpec::new(new.join("4.txt"), "four".to_string()));

    workspace_dir
}

pub fn run_linediff_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("linediff").expect("Failed to find linediff binary");
    cmd.envs(vec![("NO_COLOR", "1")]);
    cmd.current_dir(dir);
    cmd.args(["--no-pager", "--color", "never"]);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn stdout_of(cmd: &mut Command) -> Result<String, Box<dyn std::error::Error>> {
    let output = cmd.assert().success();
    Ok(String::from_utf8(output.get_output().stdout.clone())?)
}
