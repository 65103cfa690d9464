//! End-to-end tests for the `iterm-theme` binary.
//!
//! These run the compiled binary and check what reaches stdout, stderr and
//! the exit status.

use assert_cmd::Command;
use predicates::prelude::*;

/// Get a Command for the iterm-theme binary.
#[allow(deprecated)]
fn theme_cmd() -> Command {
    let mut cmd = Command::cargo_bin("iterm-theme").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

fn stdout_of(args: &[&str]) -> String {
    let output = theme_cmd().args(args).output().unwrap();
    assert!(output.status.success());
    String::from_utf8(output.stdout).unwrap()
}

// =============================================================================
// Output
// =============================================================================

mod output {
    use super::*;

    #[test]
    fn prints_plist_document() {
        theme_cmd()
            .assert()
            .success()
            .stdout(predicate::str::starts_with(
                "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<!DOCTYPE plist PUBLIC",
            ))
            .stdout(predicate::str::ends_with("</dict>\n</plist>\n"))
            .stdout(predicate::str::contains("<plist version=\"1.0\">\n<dict>\n\t<key>Ansi 0 Color</key>"));
    }

    #[test]
    fn stdout_matches_library_output() {
        let expected = format!("{}\n", iterm_theme::theme_document().unwrap());
        assert_eq!(stdout_of(&[]), expected);
    }

    #[test]
    fn output_is_stable_across_runs() {
        assert_eq!(stdout_of(&[]), stdout_of(&[]));
    }

    #[test]
    fn contains_all_variants() {
        theme_cmd()
            .assert()
            .success()
            .stdout(predicate::str::contains("<key>Selection Color</key>"))
            .stdout(predicate::str::contains("<key>Selection Color (Light)</key>"))
            .stdout(predicate::str::contains("<key>Selection Color (Dark)</key>"));
    }

    #[test]
    fn quiet_stderr_by_default() {
        theme_cmd().assert().success().stderr(predicate::str::is_empty());
    }
}

// =============================================================================
// Flags
// =============================================================================

mod flags {
    use super::*;

    #[test]
    fn verbose_logs_to_stderr_only() {
        theme_cmd()
            .arg("-vv")
            .assert()
            .success()
            .stderr(predicate::str::contains("Theme section assembled"))
            .stdout(predicate::str::contains("Theme section assembled").not());
    }

    #[test]
    fn verbosity_does_not_change_document() {
        assert_eq!(stdout_of(&["-vvv"]), stdout_of(&[]));
    }

    #[test]
    fn help_flag() {
        theme_cmd()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("--verbose"));
    }

    #[test]
    fn version_flag() {
        theme_cmd()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn unknown_argument_fails() {
        theme_cmd()
            .arg("--light-only")
            .assert()
            .failure()
            .stdout(predicate::str::is_empty());
    }
}
