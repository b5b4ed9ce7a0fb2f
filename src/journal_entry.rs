use chrono::{DateTime, Local};
use std::fmt;

/// Content lines shown under each title in the entry list.
pub const PREVIEW_LINES: usize = 2;

/// Opaque handle for a journal entry. Issued by the store, never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(u64);

impl EntryId {
    pub(crate) fn new(raw: u64) -> Self {
        EntryId(raw)
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalEntry {
    id: EntryId,
    date: DateTime<Local>,
    pub(crate) title: String,
    pub(crate) content: String,
    pub(crate) is_bookmarked: bool,
}

impl JournalEntry {
    pub(crate) fn new(id: EntryId, title: String, content: String, date: DateTime<Local>) -> Self {
        JournalEntry {
            id,
            date,
            title,
            content,
            is_bookmarked: false,
        }
    }

    pub fn id(&self) -> EntryId {
        self.id
    }

    /// Creation time. Edits never touch it.
    pub fn date(&self) -> DateTime<Local> {
        self.date
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn is_bookmarked(&self) -> bool {
        self.is_bookmarked
    }

    /// Leading lines of the content, used as the list preview.
    pub fn preview(&self) -> impl Iterator<Item = &str> + '_ {
        self.content.lines().take(PREVIEW_LINES)
    }
}
