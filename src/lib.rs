//! In-memory journal: an entry store with a filtered, sorted view, plus a
//! small terminal frontend that drives it.

pub mod app;
pub mod cli;
pub mod clock;
pub mod error;
pub mod journal_entry;
pub mod journal_store;
pub mod logging;
pub mod query;
pub mod ui;

pub use clock::{Clock, SystemClock};
pub use error::{JournaliError, StoreError};
pub use journal_entry::{EntryId, JournalEntry};
pub use journal_store::{JournalStore, StoreEvent};
pub use query::{Query, SortOrder};
