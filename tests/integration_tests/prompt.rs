//! End-to-end tests for `promptline bash|left|right`.

use crate::common::{TestEnv, stderr, stdout, visible};
use insta::assert_snapshot;
use promptline::styling::printable_length;
use rstest::rstest;

const MAIN_STATUS: &str = "# branch.oid 0123456789abcdef\n# branch.head main\n# branch.ab +2 -3\n1 M. N... 100644 100644 100644 a b f.txt";

#[test]
fn test_bash_prompt_plain() {
    let env = TestEnv::new();
    let output = env
        .command()
        .args(["--shell", "none", "bash", "--width", "60"])
        .args(["--current-working-dir", "/srv/app"])
        .args(["--last-exit-code", "0"])
        .args(["--git-porcelain", MAIN_STATUS])
        .output()
        .unwrap();

    assert!(output.status.success(), "{}", stderr(&output));
    let prompt = visible(&stdout(&output));
    let (line, rest) = prompt.split_once('\n').unwrap();
    assert_snapshot!(line, @"( U  ) D /srv/app ) B main ↑2 ↓3 +1 )······················");
    assert_eq!(line.chars().count(), 59);
    assert_eq!(rest, "> \n");
}

#[rstest]
#[case::narrow(50)]
#[case::standard(80)]
#[case::wide(132)]
fn test_bash_prompt_fills_the_line(#[case] width: usize) {
    let env = TestEnv::new();
    let output = env
        .command()
        .args(["bash", "--width", &width.to_string()])
        .args(["--current-working-dir", "/srv/app"])
        .args(["--last-exit-code", "1"])
        .args(["--git-porcelain", MAIN_STATUS])
        .output()
        .unwrap();

    assert!(output.status.success());
    let prompt = stdout(&output);
    let (line, _) = prompt.split_once("%{\n%}").expect("zsh newline marker");
    assert_eq!(printable_length(line), width - 1);
    assert!(line.contains("%{\x1b[41m%}"), "exit code part is on a red block");
}

#[test]
fn test_bash_prompt_uses_columns() {
    let env = TestEnv::new();
    let output = env
        .command()
        .env("COLUMNS", "70")
        .args(["--shell", "none", "bash", "--current-working-dir", "/srv/app"])
        .output()
        .unwrap();

    let prompt = stdout(&output);
    let (line, _) = prompt.split_once('\n').unwrap();
    assert_eq!(printable_length(line), 69);
}

#[test]
fn test_bash_prompt_overflow_shortens_path() {
    let env = TestEnv::new();
    let output = env
        .command()
        .args(["--shell", "none", "bash", "--width", "40"])
        .args([
            "--current-working-dir",
            "/home/dev/alpha/bravo/charlie/delta/echo",
        ])
        .output()
        .unwrap();

    let prompt = visible(&stdout(&output));
    let (line, _) = prompt.split_once('\n').unwrap();
    assert_snapshot!(line, @"( U  ) D /h/d/a/b/c/delta/echo )·······");
}

#[test]
fn test_left_prompt() {
    let env = TestEnv::new();
    let output = env
        .command()
        .args(["--shell", "none", "left", "--current-working-dir", "/srv/app"])
        .args(["--last-exit-code", "130"])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(visible(&stdout(&output)), "\n( U  ) D /srv/app ) > \n");
    // Failed command: red chevron
    assert!(stdout(&output).contains("\x1b[31m\u{f054}"));
}

#[test]
fn test_right_prompt_with_venv_and_nested_shell() {
    let env = TestEnv::new();
    let output = env
        .command()
        .env("VIRTUAL_ENV", "/home/dev/.venvs/tools")
        .env("SHLVL", "2")
        .args(["--shell", "none", "right", "--last-exit-code", "127"])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_snapshot!(visible(&stdout(&output)).trim_end(), @"( CMD NOT FOUND ( tools V ((shell)) )");
}

#[test]
fn test_right_prompt_survives_absurd_shell_level() {
    let env = TestEnv::new();
    let output = env
        .command()
        .env("SHLVL", "18446744073709551615")
        .args(["--shell", "none", "right", "--last-exit-code", "0"])
        .output()
        .unwrap();

    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(stdout(&output), "\n");
}

#[test]
fn test_right_prompt_empty_after_success() {
    let env = TestEnv::new();
    let output = env
        .command()
        .args(["right", "--last-exit-code", "0"])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(stdout(&output), "\n");
}

#[test]
fn test_ssh_session_shows_user() {
    let env = TestEnv::new();
    let output = env
        .command()
        .env("SSH_CONNECTION", "10.0.0.1 50000 10.0.0.2 22")
        .args(["--shell", "none", "left", "--current-working-dir", "/srv"])
        .output()
        .unwrap();

    let prompt = visible(&stdout(&output));
    assert!(prompt.starts_with("\n( dev@"), "{prompt}");
}

#[test]
fn test_home_directory_becomes_tilde() {
    let env = TestEnv::new();
    let project = env.home().join("project");
    let output = env
        .command()
        .args(["--shell", "none", "left", "--current-working-dir"])
        .arg(&project)
        .output()
        .unwrap();

    assert_eq!(visible(&stdout(&output)), "\n( U  ) D ~/project ) > \n");
}

#[test]
fn test_bash_markers() {
    let env = TestEnv::new();
    let output = env
        .command()
        .args(["--shell", "bash", "left", "--current-working-dir", "/srv"])
        .output()
        .unwrap();

    let prompt = stdout(&output);
    assert!(prompt.starts_with("\n\\[\x1b["), "{prompt:?}");
    assert!(!prompt.contains("%{"));
}

#[cfg(unix)]
#[test]
fn test_deleted_working_directory() {
    let env = TestEnv::new();
    let doomed = env.root().join("doomed");
    std::fs::create_dir(&doomed).unwrap();

    let bin = insta_cmd::get_cargo_bin("promptline");
    let mut cmd = std::process::Command::new("sh");
    env.configure(&mut cmd);
    let output = cmd
        .arg("-c")
        .arg(r#"cd "$1" && rmdir "$1" && exec "$2" --shell none left"#)
        .arg("sh")
        .arg(&doomed)
        .arg(&bin)
        .output()
        .unwrap();

    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(visible(&stdout(&output)), "\n( U  ) D [not found] ) > \n");
}

#[rstest]
#[case::unknown_mode(&["top"])]
#[case::missing_mode(&[])]
#[case::unknown_shell(&["--shell", "fish", "bash"])]
#[case::bad_width(&["bash", "--width", "wide"])]
fn test_usage_errors(#[case] args: &[&str]) {
    let env = TestEnv::new();
    let output = env.command().args(args).output().unwrap();

    assert_eq!(output.status.code(), Some(2));
    assert!(stdout(&output).is_empty());
    assert!(!stderr(&output).is_empty());
}
