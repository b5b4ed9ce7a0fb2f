use crate::journal_entry::JournalEntry;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    NewestFirst,
    OldestFirst,
}

impl SortOrder {
    pub fn toggle(self) -> Self {
        match self {
            SortOrder::NewestFirst => SortOrder::OldestFirst,
            SortOrder::OldestFirst => SortOrder::NewestFirst,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortOrder::NewestFirst => "newest first",
            SortOrder::OldestFirst => "oldest first",
        }
    }
}

/// Parameters of the derived view: search text, bookmark filter and sort order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Query {
    pub search_text: String,
    pub bookmarks_only: bool,
    pub sort: SortOrder,
}

impl Query {
    /// Empty search text matches everything. Otherwise the text must occur in
    /// the title or the content, ignoring case.
    pub fn matches(&self, entry: &JournalEntry) -> bool {
        let text_ok = self.search_text.is_empty() || {
            let needle = self.search_text.to_lowercase();
            entry.title().to_lowercase().contains(&needle)
                || entry.content().to_lowercase().contains(&needle)
        };
        text_ok && (!self.bookmarks_only || entry.is_bookmarked())
    }

    /// Filters `entries` and sorts the survivors by date.
    ///
    /// The sort is stable, so entries sharing a date keep their input order.
    pub fn apply<'a, I>(&self, entries: I) -> Vec<&'a JournalEntry>
    where
        I: IntoIterator<Item = &'a JournalEntry>,
    {
        let mut view: Vec<&JournalEntry> = entries
            .into_iter()
            .filter(|e| self.matches(e))
            .collect();
        match self.sort {
            SortOrder::NewestFirst => view.sort_by(|a, b| b.date().cmp(&a.date())),
            SortOrder::OldestFirst => view.sort_by(|a, b| a.date().cmp(&b.date())),
        }
        view
    }
}
