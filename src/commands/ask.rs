//! One-shot resolution without the TUI

use std::time::{Duration, Instant};

use anyhow::Result;

use folio::cli::AskArgs;
use folio::console::{resolver, Console, MemoryStore, RecordingNavigator, Submission, Timing};
use folio::{Config, Locale};

/// Far enough ahead to drain any response in one tick.
const DRAIN: Duration = Duration::from_secs(3600);

/// Print what the console would answer for the given text.
///
/// Runs a throwaway console over an in-memory store, so nothing is
/// persisted and no links are opened.
pub fn handle(config: &Config, lang: Option<Locale>, args: &AskArgs) -> Result<()> {
    let locale = config.locale(lang);
    let text = args.text.join(" ");

    if args.resolve {
        match resolver::resolve(&text, locale) {
            Some(command) => println!("{}", command),
            None => println!("unresolved"),
        }
        return Ok(());
    }

    for line in answer(&text, locale) {
        println!("{}", line);
    }
    Ok(())
}

/// Response lines for `text`, as the console would type them.
fn answer(text: &str, locale: Locale) -> Vec<String> {
    let mut console = Console::new(
        locale,
        Timing::default(),
        Box::new(MemoryStore::new()),
        Box::new(RecordingNavigator::new()),
    );
    let start = console.history().len();
    let now = Instant::now();

    match console.submit(text, now) {
        Submission::Ignored => Vec::new(),
        Submission::Cleared => console.history().to_vec(),
        Submission::Executed(_) | Submission::Unknown => {
            console.tick(now + DRAIN);
            // Skip the echo; drop the trailing spacer
            let mut lines = console.history()[start + 1..].to_vec();
            if lines.last().is_some_and(|l| l.is_empty()) {
                lines.pop();
            }
            lines
        }
    }
}
