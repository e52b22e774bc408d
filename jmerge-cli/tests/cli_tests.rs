use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::{TempDir, tempdir};

const MAY_FIRST: &str = "01 May 2013\n-----------\n\nBla bla bla\n\nEtc\n";
const MAY_SEVENTH: &str = "07 May 2013\n-----------\n\nEven more bla bla bla.\n";

// Helper to set up a command that never picks up the user's config.
fn set_up_command(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("jmerge").unwrap();
    cmd.env_remove("JMERGE_CONFIG")
        .env_remove("RUST_LOG")
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"));
    cmd
}

fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn dates_output_is_sorted_whatever_the_file_order() {
    let tmp = tempdir().unwrap();
    let a = write(&tmp, "a.txt", MAY_SEVENTH);
    let b = write(&tmp, "b.txt", MAY_FIRST);

    set_up_command(tmp.path())
        .arg("--dates")
        .arg(&a)
        .arg(&b)
        .assert()
        .success()
        .stdout("01 May 2013\n07 May 2013\n");
}

#[test]
fn plain_output_merges_duplicates() {
    let tmp = tempdir().unwrap();
    let a = write(&tmp, "a.txt", &format!("{MAY_FIRST}\n{MAY_SEVENTH}"));
    let b = write(&tmp, "b.txt", MAY_SEVENTH);

    let assert = set_up_command(tmp.path())
        .arg(&a)
        .arg(&b)
        .assert()
        .success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert_eq!(stdout.matches("07 May 2013").count(), 1);
    assert!(stdout.ends_with("Even more bla bla bla.\n\n\n"));
}

#[test]
fn html_output_is_written_to_outfile() {
    let tmp = tempdir().unwrap();
    let a = write(&tmp, "a.txt", MAY_FIRST);
    let out = tmp.path().join("journal.html");

    set_up_command(tmp.path())
        .arg("--html")
        .arg("-o")
        .arg(&out)
        .arg(&a)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let html = fs::read_to_string(&out).unwrap();
    assert!(html.contains("<title>Journal</title>"));
    assert!(html.contains("<div class=\"date\">01 May 2013</div>"));
}

#[test]
fn dash_outfile_means_stdout() {
    let tmp = tempdir().unwrap();
    let a = write(&tmp, "a.txt", MAY_FIRST);

    set_up_command(tmp.path())
        .args(["--summary", "-o", "-"])
        .arg(&a)
        .assert()
        .success()
        .stdout(predicate::str::contains("Bla bla bla"));
}

#[test]
fn existing_outfile_is_not_overwritten() {
    let tmp = tempdir().unwrap();
    let a = write(&tmp, "a.txt", MAY_FIRST);
    let out = write(&tmp, "out.txt", "precious");

    set_up_command(tmp.path())
        .arg("-o")
        .arg(&out)
        .arg(&a)
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
    assert_eq!(fs::read_to_string(&out).unwrap(), "precious");
}

#[test]
fn missing_input_file_fails() {
    let tmp = tempdir().unwrap();
    let missing = tmp.path().join("nope.txt");

    set_up_command(tmp.path())
        .arg(&missing)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot find input file"));
}

#[test]
fn undated_file_fails_without_creating_output() {
    let tmp = tempdir().unwrap();
    let a = write(&tmp, "a.txt", "no date here\n---------\nbody\n");
    let out = tmp.path().join("out.txt");

    set_up_command(tmp.path())
        .arg("-o")
        .arg(&out)
        .arg(&a)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot parse a date"));
    assert!(!out.exists());
}

#[test]
fn crlf_and_lf_copies_merge_into_one_entry() {
    let tmp = tempdir().unwrap();
    let a = write(&tmp, "a.txt", MAY_FIRST);
    let b = write(&tmp, "b.txt", &MAY_FIRST.replace('\n', "\r\n"));

    set_up_command(tmp.path())
        .arg("--dates")
        .arg(&a)
        .arg(&b)
        .assert()
        .success()
        .stdout("01 May 2013\n");
}

#[test]
fn view_flags_conflict() {
    let tmp = tempdir().unwrap();
    let a = write(&tmp, "a.txt", MAY_FIRST);

    set_up_command(tmp.path())
        .args(["--html", "--dates"])
        .arg(&a)
        .assert()
        .failure();
}

#[test]
fn config_file_sets_html_title() {
    let tmp = tempdir().unwrap();
    let a = write(&tmp, "a.txt", MAY_FIRST);
    let config = write(&tmp, "config.toml", "html_title = \"Diario\"\n");

    set_up_command(tmp.path())
        .arg("--html")
        .arg("--config")
        .arg(&config)
        .arg(&a)
        .assert()
        .success()
        .stdout(predicate::str::contains("<title>Diario</title>"));
}

#[test]
fn logs_go_to_stderr_only() {
    let tmp = tempdir().unwrap();
    let a = write(&tmp, "a.txt", MAY_FIRST);

    set_up_command(tmp.path())
        .args(["-vv", "--dates"])
        .arg(&a)
        .assert()
        .success()
        .stdout("01 May 2013\n")
        .stderr(predicate::str::contains("merged journal"));
}
