use assertables::assert_contains;
use codestar_logo::cli::{run, Config};
use codestar_logo::Error;

use crate::utils::{command, list_dir, logo_path, workdir};

#[test]
fn test_cmdline_no_args() {
    let dir = workdir();
    command(dir.path()).assert().failure().code(2);
    assert_eq!(list_dir(dir.path()), ["logo.svg"]);
}

#[test]
fn test_cmdline_help() {
    let dir = workdir();
    let output = command(dir.path()).arg("-h").assert().success().get_output().stdout.clone();
    let output = String::from_utf8(output).expect("non-UTF8");
    assert_contains!(output, "Usage");
    assert_contains!(output, "--no-zip");
    assert_contains!(output, "monochrome");
}

#[test]
fn test_cmdline_invalid_color() {
    let dir = workdir();
    let output = command(dir.path())
        .args(["--color", "purple", "--format", "svg"])
        .assert()
        .failure()
        .get_output()
        .stderr
        .clone();
    assert_contains!(String::from_utf8_lossy(&output), "purple");
    // nothing written, no staging leftovers in the working directory
    assert_eq!(list_dir(dir.path()), ["logo.svg"]);
}

#[test]
fn test_cmdline_missing_source() {
    let dir = tempfile::tempdir().unwrap();
    command(dir.path())
        .args(["-c", "standard", "-f", "svg"])
        .assert()
        .failure()
        .code(1);
    assert!(list_dir(dir.path()).is_empty());
}

#[test]
fn test_cmdline_malformed_source() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("logo.svg"), "<svg><g></svg>").unwrap();
    let output = command(dir.path())
        .args(["-c", "standard", "-f", "svg", "-nz"])
        .assert()
        .failure()
        .get_output()
        .stderr
        .clone();
    assert_contains!(String::from_utf8_lossy(&output), "Parse");
    assert!(!dir.path().join("codestar_logos").exists());
}

#[test]
fn test_cmdline_config() {
    let config = Config::from_cmdline("codestar-logo --help");
    assert!(config.is_err());

    let out = tempfile::tempdir().unwrap();
    let dest = out.path().join("logos");
    let config = Config::from_cmdline(&format!(
        "codestar-logo -c dark -f svg -s {} -d {}",
        logo_path().display(),
        dest.display()
    ))
    .expect("cmdline should be valid");
    let target = run(config).expect("run failed");
    assert_eq!(target, out.path().join("logos.zip"));
    assert!(target.is_file());
}

#[test]
fn test_run_missing_source() {
    let out = tempfile::tempdir().unwrap();
    let config = Config::from_cmdline(&format!(
        "codestar-logo -c dark -f svg -nz -s {} -d {}",
        out.path().join("nope.svg").display(),
        out.path().join("logos").display()
    ))
    .unwrap();
    assert!(matches!(run(config), Err(Error::Io(_))));
    assert!(list_dir(out.path()).is_empty());
}

#[cfg(unix)]
#[test]
fn test_cmdline_staging_removed_on_failure() {
    let dir = workdir();
    let scratch = tempfile::tempdir().unwrap();
    // rendering succeeds, then the archive can't be created
    let output = command(dir.path())
        .env("TMPDIR", scratch.path())
        .args(["-c", "all", "-f", "svg", "-f", "png", "-W", "64"])
        .args(["-d", "missing_parent/logos"])
        .assert()
        .failure()
        .code(1)
        .get_output()
        .stderr
        .clone();
    assert_contains!(String::from_utf8_lossy(&output), "Io");
    assert!(list_dir(scratch.path()).is_empty());
    assert_eq!(list_dir(dir.path()), ["logo.svg"]);
}

#[cfg(unix)]
#[test]
fn test_cmdline_staging_removed_on_success() {
    let dir = workdir();
    let scratch = tempfile::tempdir().unwrap();
    command(dir.path())
        .env("TMPDIR", scratch.path())
        .args(["-c", "dark", "-f", "svg", "-nz"])
        .assert()
        .success();
    assert!(list_dir(scratch.path()).is_empty());
    assert_eq!(
        list_dir(&dir.path().join("codestar_logos")),
        ["codestar_logo_dark.svg"]
    );
}

#[test]
fn test_cmdline_repeated_option() {
    let dir = workdir();
    command(dir.path())
        .args(["-c", "standard", "-o", "tagline", "-o", "tagline", "-f", "svg", "-nz"])
        .assert()
        .success();
    assert_eq!(
        list_dir(&dir.path().join("codestar_logos")),
        ["codestar_logo_standard_(tagline).svg"]
    );
}
