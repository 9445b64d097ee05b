//! Configuration layering as seen from the binary.

use crate::common::{TestEnv, stderr, stdout, visible};

/// Path part colors with `--shell none`: background code, then foreground
fn path_block(bg: u8, fg: u8) -> String {
    format!("\x1b[{bg}m\x1b[{fg}m \u{f07c} /srv/")
}

#[test]
fn test_default_colors() {
    let env = TestEnv::new();
    let output = env
        .command()
        .args(["--shell", "none", "left", "--current-working-dir", "/srv/app"])
        .output()
        .unwrap();

    // White on blue
    assert!(stdout(&output).contains(&path_block(44, 37)));
}

#[test]
fn test_config_file_and_env_override() {
    let env = TestEnv::new();
    let config = env.root().join("prompt.toml");
    std::fs::write(&config, "path_fg = \"black\"\npath_bg = \"cyan\"\nspacer = \"-\"\n").unwrap();

    let output = env
        .command()
        .args(["--config"])
        .arg(&config)
        .args(["--shell", "none", "left", "--current-working-dir", "/srv/app"])
        .output()
        .unwrap();
    assert!(stdout(&output).contains(&path_block(46, 30)));

    let output = env
        .command()
        .env("PROMPT_PATH_BG", "green")
        .args(["--config"])
        .arg(&config)
        .args(["--shell", "none", "left", "--current-working-dir", "/srv/app"])
        .output()
        .unwrap();
    assert!(stdout(&output).contains(&path_block(42, 30)));
}

#[test]
fn test_spacer_from_config() {
    let env = TestEnv::new();
    let config = env.root().join("prompt.toml");
    std::fs::write(&config, "spacer = \"-\"\n").unwrap();

    let output = env
        .command()
        .args(["--config"])
        .arg(&config)
        .args(["--shell", "none", "bash", "--width", "30"])
        .args(["--current-working-dir", "/srv/app"])
        .output()
        .unwrap();

    let prompt = visible(&stdout(&output));
    let (line, _) = prompt.split_once('\n').unwrap();
    assert_eq!(line, "( U  ) D /srv/app )----------");
}

#[cfg(target_os = "linux")]
#[test]
fn test_default_config_location() {
    let env = TestEnv::new();
    let dir = env.home().join(".config").join("promptline");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("config.toml"), "user_bg = \"red\"\n").unwrap();

    let output = env
        .command()
        .args(["--shell", "none", "left", "--current-working-dir", "/srv"])
        .output()
        .unwrap();

    // Black on red identity block
    assert!(stdout(&output).contains("\x1b[1m\x1b[41m\x1b[30m \u{f31b}  "));
}

#[test]
fn test_invalid_config_falls_back_to_defaults() {
    let env = TestEnv::new();
    let config = env.root().join("prompt.toml");
    std::fs::write(&config, "path_bg = \"purple\"\n").unwrap();

    let output = env
        .command()
        .args(["-v", "--config"])
        .arg(&config)
        .args(["--shell", "none", "left", "--current-working-dir", "/srv/app"])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(stdout(&output).contains(&path_block(44, 37)));
    assert!(
        stderr(&output).contains("Ignoring invalid prompt configuration"),
        "{}",
        stderr(&output)
    );
}

#[test]
fn test_logging_is_off_by_default() {
    let env = TestEnv::new();
    let config = env.root().join("prompt.toml");
    std::fs::write(&config, "not toml at all [").unwrap();

    let output = env
        .command()
        .args(["--config"])
        .arg(&config)
        .args(["left", "--current-working-dir", "/srv"])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(stderr(&output), "");
}
