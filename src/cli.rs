use clap::Parser;
use std::path::PathBuf;

use crate::clock::Clock;
use crate::journal_store::JournalStore;

#[derive(Debug, Parser)]
#[command(name = "journali")]
#[command(about = "Your thoughts, your story - an in-memory terminal journal")]
#[command(version)]
pub struct Cli {
    /// Start with the oldest entries first
    #[arg(long)]
    pub oldest_first: bool,

    /// Start with only bookmarked entries shown
    #[arg(long)]
    pub bookmarks_only: bool,

    /// Start with a search filter applied
    #[arg(long, value_name = "TEXT")]
    pub search: Option<String>,

    /// Write logs into this directory (logging is off without it)
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    /// Log level: trace, debug, info, warn or error
    #[arg(long, value_name = "LEVEL", default_value = "info", value_parser = parse_level)]
    pub log_level: String,
}

impl Cli {
    /// Applies the starting query flags to a fresh store.
    pub fn apply_query<C: Clock>(&self, store: &mut JournalStore<C>) {
        if self.oldest_first {
            store.toggle_sort_direction();
        }
        if self.bookmarks_only {
            store.set_bookmarks_only(true);
        }
        if let Some(text) = &self.search {
            store.set_search_text(text.as_str());
        }
        // Startup configuration is not a user change.
        store.take_events();
    }
}

fn parse_level(level: &str) -> Result<String, String> {
    crate::logging::normalize_level(level)
        .map(str::to_string)
        .map_err(|err| err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::SortOrder;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["journali"]).unwrap();
        assert!(!cli.oldest_first);
        assert!(!cli.bookmarks_only);
        assert!(cli.search.is_none());
        assert!(cli.log_dir.is_none());
        assert_eq!(cli.log_level, "info");
    }

    #[test]
    fn test_apply_query_sets_starting_state() {
        let cli = Cli::try_parse_from([
            "journali",
            "--oldest-first",
            "--bookmarks-only",
            "--search",
            "tea",
        ])
        .unwrap();
        let mut store = JournalStore::new();
        cli.apply_query(&mut store);

        assert_eq!(store.query().sort, SortOrder::OldestFirst);
        assert!(store.query().bookmarks_only);
        assert_eq!(store.query().search_text, "tea");
        assert!(store.take_events().is_empty());
    }

    #[test]
    fn test_log_level_is_normalized() {
        let cli = Cli::try_parse_from(["journali", "--log-level", "WARNING"]).unwrap();
        assert_eq!(cli.log_level, "warn");
    }

    #[test]
    fn test_rejects_unknown_log_level() {
        assert!(Cli::try_parse_from(["journali", "--log-level", "loud"]).is_err());
    }
}
