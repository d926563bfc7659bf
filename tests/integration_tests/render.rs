//! End-to-end rendering through the `gitmux` binary.

use crate::common::{MARKER_CONFIG, TestEnv, stdout};
use insta::assert_snapshot;
use rstest::rstest;

fn render(env: &TestEnv, args: &[&str], status: &str) -> String {
    let output = env.run(args, status);
    assert!(
        output.status.success(),
        "gitmux failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    stdout(&output)
}

#[rstest]
#[case::dirty_and_diverged(
    r#"{"local_branch": "main", "remote_branch": "origin/main", "ahead": 1, "behind": 2, "modified": 3, "untracked": 1}"#,
    "<c><b>B:<c><b>main<c> <c><r>origin/main <c><d>-2+1<c> <c><m>M3 <u>U1#[norm]"
)]
#[case::clean_with_stash(
    r#"{"local_branch": "main", "remote_branch": "origin/main", "is_clean": true, "stashed": 2}"#,
    "<c><b>B:<c><b>main<c> <c><r>origin/main<c> <c><st>ST2 <ok>CLEAN#[norm]"
)]
#[case::no_upstream(
    r#"{"local_branch": "HEAD"}"#,
    "<c><b>B:<c><b>HEAD<c> <c> #[norm]"
)]
#[case::every_flag(
    r#"{"local_branch": "wip", "staged": 1, "conflicts": 2, "modified": 3, "stashed": 4, "untracked": 5}"#,
    "<c><b>B:<c><b>wip<c> <c> <c><s>S1 <x>X2 <m>M3 <st>ST4 <u>U5#[norm]"
)]
fn test_render_from_stdin(#[case] status: &str, #[case] expected: &str) {
    let env = TestEnv::new();
    env.write_default_config(MARKER_CONFIG);
    assert_eq!(render(&env, &[], status), expected);
}

#[test]
fn test_render_from_file() {
    let env = TestEnv::new();
    env.write_default_config(MARKER_CONFIG);
    let status = env.write_file(
        "status.json",
        r#"{"local_branch": "main", "remote_branch": "origin/main", "behind": 4}"#,
    );

    let line = render(&env, &[status.to_str().unwrap()], "");
    assert_eq!(line, "<c><b>B:<c><b>main<c> <c><r>origin/main <c><d>-4<c> #[norm]");
}

#[test]
fn test_dash_reads_stdin() {
    let env = TestEnv::new();
    env.write_default_config(MARKER_CONFIG);
    let line = render(&env, &["-"], r#"{"local_branch": "main", "is_clean": true}"#);
    assert_eq!(line, "<c><b>B:<c><b>main<c> <c> <c><ok>CLEAN#[norm]");
}

#[test]
fn test_render_default_config() {
    let env = TestEnv::new();
    let line = render(
        &env,
        &[],
        r#"{"local_branch": "main", "remote_branch": "origin/main", "ahead": 3, "is_clean": false, "staged": 2}"#,
    );
    assert!(!line.ends_with('\n'), "status line must not end with a newline");
    assert_snapshot!(line, @"#[fg=default]#[fg=white,bold]⎇ #[fg=default]#[fg=white,bold]main#[fg=default]..#[fg=default]#[fg=cyan]origin/main #[fg=default]#[fg=default]↑·3#[fg=default] - #[fg=default]#[fg=green,bold]● 2#[norm]");
}

#[test]
fn test_render_default_config_clean() {
    let env = TestEnv::new();
    let line = render(&env, &[], r#"{"local_branch": "main", "is_clean": true}"#);
    assert_snapshot!(line, @"#[fg=default]#[fg=white,bold]⎇ #[fg=default]#[fg=white,bold]main#[fg=default]..#[fg=default] - #[fg=default]#[fg=green,bold]✔#[norm]");
}

#[test]
fn test_render_stats_layout() {
    let env = TestEnv::new();
    let config = env.write_file(
        "stats.toml",
        r#"
layout = ["stats"]

[styles]
clear = "<c>"
insertions = "<i>"
deletions = "<del>"

[symbols]
insertions = "I"
deletions = "D"
"#,
    );

    let args = ["--config", config.to_str().unwrap()];
    assert_eq!(
        render(&env, &args, r#"{"insertions": 10, "deletions": 3}"#),
        "<c><i>I10 <del>D3#[norm]"
    );
    assert_eq!(render(&env, &args, r#"{"deletions": 3}"#), "<c><del>D3#[norm]");
    assert_eq!(render(&env, &args, "{}"), "#[norm]");
}

#[test]
fn test_env_overrides_config_file() {
    let env = TestEnv::new();
    env.write_default_config(MARKER_CONFIG);

    let mut cmd = env.command();
    cmd.env("GITMUX_OPTIONS__BRANCH_MAX_LEN", "6")
        .env("GITMUX_OPTIONS__FLAGS_WITHOUT_COUNT", "true")
        .env("GITMUX_SYMBOLS__MODIFIED", "*");
    let output = env.run_with(
        cmd,
        &[],
        r#"{"local_branch": "feature/long-name", "modified": 7}"#,
    );

    assert!(output.status.success());
    assert_eq!(stdout(&output), "<c><b>B:<c><b>featu…<c> <c> <c><m>*#[norm]");
}

#[test]
fn test_truncation_options() {
    let env = TestEnv::new();
    let config = env.write_file(
        "trim.toml",
        r#"
layout = ["branch"]

[styles]
clear = ""
branch = ""

[symbols]
branch = ""

[options]
branch_max_len = 9
branch_trim = "center"
ellipsis = ".."
"#,
    );

    let line = render(
        &env,
        &["--config", config.to_str().unwrap()],
        r#"{"local_branch": "super-long-branch"}"#,
    );
    assert_eq!(line, "sup..anch#[norm]");
}

#[test]
fn test_negative_max_len_disables_truncation() {
    let env = TestEnv::new();
    env.write_default_config(MARKER_CONFIG);

    let mut cmd = env.command();
    cmd.env("GITMUX_OPTIONS__BRANCH_MAX_LEN", "-1");
    let output = env.run_with(cmd, &[], r#"{"local_branch": "feature/long-name"}"#);

    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "<c><b>B:<c><b>feature/long-name<c> <c> #[norm]"
    );
}
