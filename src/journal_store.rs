use crate::clock::{Clock, SystemClock};
use crate::error::StoreError;
use crate::journal_entry::{EntryId, JournalEntry};
use crate::query::Query;
use log::debug;
use std::collections::VecDeque;

/// Events kept when nobody drains them; the oldest are dropped first.
pub const MAX_PENDING_EVENTS: usize = 256;

/// A change recorded by the store, drained with [`JournalStore::take_events`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    Added(EntryId),
    Updated(EntryId),
    Deleted(EntryId),
    BookmarkToggled { id: EntryId, bookmarked: bool },
    QueryChanged,
}

/// In-memory owner of every journal entry and of the query state that shapes
/// the derived view.
pub struct JournalStore<C: Clock = SystemClock> {
    entries: Vec<JournalEntry>,
    next_id: u64,
    query: Query,
    clock: C,
    events: VecDeque<StoreEvent>,
}

impl JournalStore<SystemClock> {
    pub fn new() -> Self {
        JournalStore::with_clock(SystemClock)
    }
}

impl Default for JournalStore<SystemClock> {
    fn default() -> Self {
        JournalStore::new()
    }
}

impl<C: Clock> JournalStore<C> {
    pub fn with_clock(clock: C) -> Self {
        JournalStore {
            entries: Vec::new(),
            next_id: 1,
            query: Query::default(),
            clock,
            events: VecDeque::new(),
        }
    }

    pub fn add(&mut self, title: impl Into<String>, content: impl Into<String>) -> &JournalEntry {
        let id = EntryId::new(self.next_id);
        self.next_id += 1;
        let entry = JournalEntry::new(id, title.into(), content.into(), self.clock.now());
        debug!("event=entry_added id={id}");
        self.entries.push(entry);
        self.record(StoreEvent::Added(id));
        &self.entries[self.entries.len() - 1]
    }

    /// Replaces title and content. Date and bookmark flag stay as they were.
    pub fn update(
        &mut self,
        id: EntryId,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Result<&JournalEntry, StoreError> {
        let index = self.position(id)?;
        let entry = &mut self.entries[index];
        entry.title = title.into();
        entry.content = content.into();
        debug!("event=entry_updated id={id}");
        self.record(StoreEvent::Updated(id));
        Ok(&self.entries[index])
    }

    pub fn delete(&mut self, id: EntryId) -> Result<JournalEntry, StoreError> {
        let index = self.position(id)?;
        let removed = self.entries.remove(index);
        debug!("event=entry_deleted id={id}");
        self.record(StoreEvent::Deleted(id));
        Ok(removed)
    }

    /// Flips the bookmark flag and returns its new value.
    pub fn toggle_bookmark(&mut self, id: EntryId) -> Result<bool, StoreError> {
        let index = self.position(id)?;
        let entry = &mut self.entries[index];
        entry.is_bookmarked = !entry.is_bookmarked;
        let bookmarked = entry.is_bookmarked;
        debug!("event=bookmark_toggled id={id} bookmarked={bookmarked}");
        self.record(StoreEvent::BookmarkToggled { id, bookmarked });
        Ok(bookmarked)
    }

    pub fn get(&self, id: EntryId) -> Option<&JournalEntry> {
        self.entries.iter().find(|e| e.id() == id)
    }

    /// All entries in insertion order. The order carries no meaning.
    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn query(&self) -> &Query {
        &self.query
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        if self.query.search_text != text {
            self.query.search_text = text;
            self.record(StoreEvent::QueryChanged);
        }
    }

    pub fn set_bookmarks_only(&mut self, flag: bool) {
        if self.query.bookmarks_only != flag {
            self.query.bookmarks_only = flag;
            self.record(StoreEvent::QueryChanged);
        }
    }

    pub fn toggle_sort_direction(&mut self) {
        self.query.sort = self.query.sort.toggle();
        self.record(StoreEvent::QueryChanged);
    }

    /// Entries passing the current query, sorted by date. Recomputed on
    /// every call.
    pub fn derived_view(&self) -> Vec<&JournalEntry> {
        self.query.apply(&self.entries)
    }

    /// Drains the changes recorded since the last call, oldest first. At most
    /// [`MAX_PENDING_EVENTS`] are kept between calls.
    pub fn take_events(&mut self) -> Vec<StoreEvent> {
        self.events.drain(..).collect()
    }

    fn record(&mut self, event: StoreEvent) {
        if self.events.len() == MAX_PENDING_EVENTS {
            self.events.pop_front();
        }
        self.events.push_back(event);
    }

    fn position(&self, id: EntryId) -> Result<usize, StoreError> {
        self.entries
            .iter()
            .position(|e| e.id() == id)
            .ok_or(StoreError::NotFound(id))
    }
}
