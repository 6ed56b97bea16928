//! Integration tests for the folio command line

use std::fs;

use predicates::prelude::*;

use crate::helpers::FolioHome;

// ============================================================================
// ask
// ============================================================================

#[test]
fn ask_help_in_english() {
    let home = FolioHome::new();
    let (stdout, stderr, exit_code) = home.run(&["ask", "help", "--lang", "en"]);

    assert_eq!(exit_code, 0, "stderr: {}", stderr);
    insta::assert_snapshot!(stdout.trim_end(), @r"
    Commands: help, about, projects, stack, contact, hire
    More: pricing, cv, github, linkedin, clear. Or just ask in plain words.
    ");
}

#[test]
fn ask_joins_words_and_detects_intent() {
    let home = FolioHome::new();
    home.command()
        .args(["--lang", "es", "ask", "¿Cuánto", "cuesta", "una", "web?"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Cada proyecto se presupuesta segun alcance y plazos.",
        ));
}

#[test]
fn ask_unknown_prints_hint() {
    let home = FolioHome::new();
    home.command()
        .args(["ask", "xyzzy", "--lang", "en"])
        .assert()
        .success()
        .stdout("Unknown command: xyzzy. Use \"help\".\n");
}

#[test]
fn ask_resolve_prints_command_name() {
    let home = FolioHome::new();
    home.command()
        .args(["--lang", "es", "ask", "--resolve", "Sobre-Mí"])
        .assert()
        .success()
        .stdout("about\n");

    home.command()
        .args(["--lang", "es", "ask", "--resolve", "xyzzy"])
        .assert()
        .success()
        .stdout("unresolved\n");
}

#[test]
fn ask_uses_configured_locale() {
    let home = FolioHome::new();
    home.write_config("[console]\nlocale = \"en\"\n");
    home.command()
        .args(["ask", "thanks"])
        .assert()
        .success()
        .stdout("Anytime! Type \"help\" if you need anything.\n");
}

#[test]
fn ask_does_not_persist_history() {
    let home = FolioHome::new();
    let (_stdout, _stderr, exit_code) = home.run(&["ask", "about", "--lang", "en"]);
    assert_eq!(exit_code, 0);
    assert!(!home.history_file().exists());
}

#[test]
fn ask_without_text_is_usage_error() {
    let home = FolioHome::new();
    let (_stdout, stderr, exit_code) = home.run(&["ask"]);
    assert_eq!(exit_code, 2);
    assert!(stderr.contains("<TEXT>"));
}

#[test]
fn unknown_locale_is_rejected() {
    let home = FolioHome::new();
    home.command()
        .args(["--lang", "fr", "ask", "help"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("fr"));
}

// ============================================================================
// history
// ============================================================================

#[test]
fn history_show_prints_stored_lines() {
    let home = FolioHome::new();
    home.write_history(&["Welcome", "$ help", "Commands: ...", ""]);

    home.command()
        .args(["history", "show"])
        .assert()
        .success()
        .stdout("Welcome\n$ help\nCommands: ...\n\n");
}

#[test]
fn history_show_without_history_prints_nothing() {
    let home = FolioHome::new();
    home.command()
        .args(["history", "show"])
        .assert()
        .success()
        .stdout("");
}

#[test]
fn history_show_reports_malformed_file() {
    let home = FolioHome::new();
    fs::create_dir_all(home.data_dir()).unwrap();
    fs::write(home.history_file(), "not json").unwrap();

    home.command()
        .args(["history", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read console history"));
}

#[test]
fn history_clear_removes_file() {
    let home = FolioHome::new();
    home.write_history(&["$ about"]);

    home.command()
        .args(["history", "clear"])
        .assert()
        .success()
        .stdout(predicate::str::contains("History cleared"));
    assert!(!home.history_file().exists());

    // Clearing twice is fine
    home.command().args(["history", "clear"]).assert().success();
}

#[test]
fn history_path_points_into_data_dir() {
    let home = FolioHome::new();
    let (stdout, _stderr, exit_code) = home.run(&["history", "path"]);
    assert_eq!(exit_code, 0);
    assert_eq!(stdout.trim_end(), home.history_file().display().to_string());
}

#[test]
fn storage_dir_override_moves_history() {
    let home = FolioHome::new();
    let custom = home.path().join("elsewhere");
    home.write_config(&format!(
        "[storage]\ndir = {:?}\n",
        custom.display().to_string()
    ));

    let (stdout, _stderr, exit_code) = home.run(&["history", "path"]);
    assert_eq!(exit_code, 0);
    assert!(stdout.trim_end().starts_with(&custom.display().to_string()));
}

// ============================================================================
// config
// ============================================================================

#[test]
fn config_path_uses_folio_home() {
    let home = FolioHome::new();
    let (stdout, _stderr, exit_code) = home.run(&["config", "path"]);
    assert_eq!(exit_code, 0);
    assert_eq!(
        stdout.trim_end(),
        home.path().join("config.toml").display().to_string()
    );
}

#[test]
fn config_show_prints_effective_values() {
    let home = FolioHome::new();
    home.write_config("[console]\nchar_delay_ms = 5\n\n[ui]\ntheme = \"ocean\"\n");

    home.command()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("char_delay_ms = 5")
                .and(predicate::str::contains("line_delay_ms = 32"))
                .and(predicate::str::contains("theme = \"ocean\""))
                .and(predicate::str::contains("open_external = true")),
        );
}

#[test]
fn config_init_writes_defaults_once() {
    let home = FolioHome::new();
    let path = home.path().join("config.toml");

    home.command()
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote default config"));
    let written = fs::read_to_string(&path).unwrap();
    assert!(written.contains("char_delay_ms = 18"));
    assert!(written.contains("theme = \"phosphor\""));

    // An existing file is left alone
    home.write_config("[ui]\ntheme = \"ocean\"\n");
    home.command()
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "[ui]\ntheme = \"ocean\"\n"
    );
}

#[test]
fn invalid_config_fails_with_context() {
    let home = FolioHome::new();
    home.write_config("[console\n");

    home.command()
        .args(["config", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse config file"));
}

// ============================================================================
// misc
// ============================================================================

#[test]
fn only_console_and_history_write_a_log() {
    let home = FolioHome::new();
    let log = home.data_dir().join("folio.log");

    for args in [
        &["config", "path"][..],
        &["config", "show"],
        &["completions", "bash"],
        &["ask", "help"],
    ] {
        let (_stdout, stderr, exit_code) = home.run(args);
        assert_eq!(exit_code, 0, "{:?}: {}", args, stderr);
        assert!(!log.exists(), "{:?} created a log file", args);
    }

    let (_stdout, _stderr, exit_code) = home.run(&["history", "show"]);
    assert_eq!(exit_code, 0);
    assert!(log.exists());
}

#[test]
fn completions_for_bash() {
    let home = FolioHome::new();
    home.command()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("folio"));
}

#[test]
fn help_lists_subcommands() {
    let home = FolioHome::new();
    let (stdout, _stderr, exit_code) = home.run(&["--help"]);
    assert_eq!(exit_code, 0);
    for sub in ["console", "ask", "history", "config", "completions"] {
        assert!(stdout.contains(sub), "missing {} in help", sub);
    }
}

#[test]
fn version_flag() {
    let home = FolioHome::new();
    home.command()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}
