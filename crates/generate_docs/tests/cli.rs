// crates/generate_docs/tests/cli.rs

use assert_cmd::Command;
use assert_fs::prelude::*;
use assert_fs::TempDir;
use predicates::prelude::*;
use std::fs;

const HELLO: &str = "//genexample\n// Hello world\nint main() {}\n";

fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("generate_docs").unwrap();
    cmd.env_remove("GENEXAMPLE_DIR").env_remove("RUST_LOG");
    cmd
}

#[test]
fn converts_marked_examples_in_directory() {
    let temp = TempDir::new().unwrap();
    temp.child("hello.c").write_str(HELLO).unwrap();
    temp.child("hello.png").touch().unwrap();
    temp.child("util.c").write_str("int helper(void) { return 1; }\n").unwrap();

    cmd()
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("hello.c"))
        .stdout(predicate::str::contains("util.c").not());

    let page = fs::read_to_string(temp.child("hello.md").path()).unwrap();
    assert_eq!(
        page,
        "# hello\n\
![Example Screenshot](hello.png)\n\
\n\
Hello world\n\
```c\n\
int main() {}\n\
```\n\
\n\
###### Automatically generated from [hello.c](hello.c)\n"
    );
    temp.child("util.md").assert(predicate::path::missing());
}

#[test]
fn directory_from_environment() {
    let temp = TempDir::new().unwrap();
    temp.child("hello.c").write_str(HELLO).unwrap();

    cmd()
        .env("GENEXAMPLE_DIR", temp.path())
        .assert()
        .success();

    temp.child("hello.md").assert(predicate::path::exists());
}

#[test]
fn defaults_to_current_directory() {
    let temp = TempDir::new().unwrap();
    temp.child("hello.c").write_str(HELLO).unwrap();

    cmd().current_dir(temp.path()).assert().success();

    temp.child("hello.md")
        .assert(predicate::str::starts_with("# hello\nHello world\n"));
}

#[test]
fn dry_run_prints_page() {
    let temp = TempDir::new().unwrap();
    temp.child("hello.c").write_str(HELLO).unwrap();

    cmd()
        .arg(temp.path())
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains("# hello\nHello world\n```c\nint main() {}\n```\n"))
        .stdout(predicate::str::contains(
            "###### Automatically generated from [hello.c](hello.c)",
        ));

    temp.child("hello.md").assert(predicate::path::missing());
}

#[test]
fn language_and_extension_options() {
    let temp = TempDir::new().unwrap();
    temp.child("shapes.cpp")
        .write_str("//genexample\n// Shapes.\nstruct Shape {};\n")
        .unwrap();

    cmd()
        .arg(temp.path())
        .args(["--extension", "cpp", "--lang", "cpp"])
        .assert()
        .success();

    temp.child("shapes.md")
        .assert(predicate::str::contains("```cpp\nstruct Shape {};\n```\n"));
}

#[test]
fn recursive_processes_subdirectories() {
    let temp = TempDir::new().unwrap();
    temp.child("basics/hello.c").write_str(HELLO).unwrap();

    cmd().arg(temp.path()).assert().success();
    temp.child("basics/hello.md").assert(predicate::path::missing());

    cmd().arg(temp.path()).arg("--recursive").assert().success();
    temp.child("basics/hello.md").assert(predicate::path::exists());
}

#[test]
fn failed_file_does_not_stop_the_run() {
    let temp = TempDir::new().unwrap();
    temp.child("broken.c").write_str(HELLO).unwrap();
    // A directory where the page should go makes the write fail.
    temp.child("broken.md").create_dir_all().unwrap();
    temp.child("good.c").write_str(HELLO).unwrap();

    cmd()
        .arg(temp.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("good.c"))
        .stderr(predicate::str::contains("1 of 2 example(s) failed to convert"))
        .stderr(predicate::str::contains("broken.c"));

    temp.child("good.md").assert(predicate::path::exists());
}

#[test]
fn missing_directory_fails() {
    let temp = TempDir::new().unwrap();

    cmd()
        .arg(temp.path().join("nope"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to search"));
}

#[test]
fn empty_directory_succeeds() {
    let temp = TempDir::new().unwrap();
    cmd()
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}
