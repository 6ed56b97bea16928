//! Console behaviour over a real file-backed store

use std::fs;
use std::time::{Duration, Instant};

use tempfile::TempDir;

use folio::console::{
    content, storage, CommandId, Console, Effect, FileStore, RecordingNavigator, Submission,
    Timing, HISTORY_KEY, HISTORY_LIMIT,
};
use folio::Locale;

const DRAIN: Duration = Duration::from_secs(600);

fn open(dir: &TempDir, locale: Locale) -> (Console, RecordingNavigator) {
    let nav = RecordingNavigator::new();
    let console = Console::new(
        locale,
        Timing::from_millis(1, 1),
        Box::new(FileStore::new(dir.path())),
        Box::new(nav.clone()),
    );
    (console, nav)
}

fn stored(dir: &TempDir) -> Vec<String> {
    let raw = fs::read_to_string(FileStore::new(dir.path()).path_for(HISTORY_KEY)).unwrap();
    serde_json::from_str(&raw).unwrap()
}

#[test]
fn fresh_directory_starts_with_banner() {
    let dir = TempDir::new().unwrap();
    let (console, _) = open(&dir, Locale::Es);
    assert_eq!(console.history(), content::banner_lines(Locale::Es).as_slice());
}

#[test]
fn history_is_written_as_json_array_and_restored() {
    let dir = TempDir::new().unwrap();
    let t0 = Instant::now();
    {
        let (mut console, _) = open(&dir, Locale::En);
        console.submit("stack", t0);
        console.tick(t0 + DRAIN);
    }

    let on_disk = stored(&dir);
    assert_eq!(on_disk[3], "$ stack");
    assert_eq!(on_disk.last().map(String::as_str), Some(""));

    let (console, _) = open(&dir, Locale::Es);
    assert_eq!(console.history(), on_disk.as_slice());
}

#[test]
fn echo_is_persisted_before_response_is_typed() {
    let dir = TempDir::new().unwrap();
    let (mut console, _) = open(&dir, Locale::Es);
    console.submit("proyectos", Instant::now());

    assert!(console.is_playing());
    assert_eq!(stored(&dir).last().map(String::as_str), Some("$ proyectos"));
}

#[test]
fn abandoned_animation_loses_only_untyped_lines() {
    let dir = TempDir::new().unwrap();
    let t0 = Instant::now();
    {
        let (mut console, _) = open(&dir, Locale::En);
        console.submit("about", t0);
        // Dropped mid-response
    }

    let (console, _) = open(&dir, Locale::En);
    assert_eq!(console.history().last().map(String::as_str), Some("$ about"));
    assert!(!console.is_playing());
}

#[test]
fn corrupted_file_falls_back_to_banner() {
    let dir = TempDir::new().unwrap();
    fs::write(FileStore::new(dir.path()).path_for(HISTORY_KEY), "{broken").unwrap();

    let (console, _) = open(&dir, Locale::En);
    assert_eq!(console.history(), content::banner_lines(Locale::En).as_slice());
}

#[test]
fn oversized_file_is_truncated_on_load() {
    let dir = TempDir::new().unwrap();
    let lines: Vec<String> = (0..200).map(|i| format!("line {}", i)).collect();
    let mut store = FileStore::new(dir.path());
    storage::save_history(&mut store, &lines).unwrap();

    let (console, _) = open(&dir, Locale::En);
    assert_eq!(console.history().len(), HISTORY_LIMIT);
    assert_eq!(console.history()[0], "line 60");
}

#[test]
fn clear_persists_banner() {
    let dir = TempDir::new().unwrap();
    let t0 = Instant::now();
    let (mut console, _) = open(&dir, Locale::Es);
    console.submit("ayuda", t0);
    console.tick(t0 + DRAIN);

    assert_eq!(console.submit("limpiar", t0 + DRAIN), Submission::Cleared);
    assert_eq!(stored(&dir), content::banner_lines(Locale::Es));
}

#[test]
fn intent_questions_reach_navigation() {
    let dir = TempDir::new().unwrap();
    let (mut console, nav) = open(&dir, Locale::Es);

    assert_eq!(
        console.submit("¿Cuánto cuesta una web?", Instant::now()),
        Submission::Executed(CommandId::Pricing)
    );
    assert_eq!(nav.effects(), vec![Effect::Anchor("contacto")]);
}

#[test]
fn long_session_stays_within_limit_on_disk() {
    let dir = TempDir::new().unwrap();
    let (mut console, _) = open(&dir, Locale::En);
    let mut now = Instant::now();
    for input in ["help", "about", "projects", "stack", "pricing"].iter().cycle().take(50) {
        console.submit(input, now);
        now += DRAIN;
        console.tick(now);
    }
    assert_eq!(console.history().len(), HISTORY_LIMIT);
    assert_eq!(stored(&dir).len(), HISTORY_LIMIT);
}
