use crate::clock::{Clock, SystemClock};
use crate::journal_entry::{EntryId, JournalEntry};
use crate::journal_store::{JournalStore, StoreEvent};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use log::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorField {
    Title,
    Content,
}

/// Draft of an entry being written. `target` is `None` for a new entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Editor {
    pub target: Option<EntryId>,
    pub title: String,
    pub content: String,
    pub field: EditorField,
}

impl Editor {
    fn blank() -> Self {
        Editor {
            target: None,
            title: String::new(),
            content: String::new(),
            field: EditorField::Title,
        }
    }

    fn for_entry(entry: &JournalEntry) -> Self {
        Editor {
            target: Some(entry.id()),
            title: entry.title().to_string(),
            content: entry.content().to_string(),
            field: EditorField::Content,
        }
    }

    fn active_mut(&mut self) -> &mut String {
        match self.field {
            EditorField::Title => &mut self.title,
            EditorField::Content => &mut self.content,
        }
    }

    fn switch_field(&mut self) {
        self.field = match self.field {
            EditorField::Title => EditorField::Content,
            EditorField::Content => EditorField::Title,
        };
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    List,
    Editing(Editor),
    Searching,
    ConfirmDelete(EntryId),
}

/// Frontend state: the store plus what the screen is doing with it.
pub struct App<C: Clock = SystemClock> {
    store: JournalStore<C>,
    mode: Mode,
    selected: usize,
    status: Option<String>,
    should_quit: bool,
}

impl<C: Clock> App<C> {
    pub fn new(store: JournalStore<C>) -> Self {
        App {
            store,
            mode: Mode::List,
            selected: 0,
            status: None,
            should_quit: false,
        }
    }

    pub fn store(&self) -> &JournalStore<C> {
        &self.store
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    /// Index of the highlighted row in the derived view.
    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn selected_entry(&self) -> Option<&JournalEntry> {
        self.store.derived_view().get(self.selected).copied()
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        let mode = std::mem::replace(&mut self.mode, Mode::List);
        self.mode = match mode {
            Mode::List => self.on_list_key(key),
            Mode::Editing(editor) => self.on_editor_key(editor, key),
            Mode::Searching => self.on_search_key(key),
            Mode::ConfirmDelete(id) => self.on_confirm_key(id, key),
        };
        self.absorb_events();
        self.clamp_selection();
    }

    fn on_list_key(&mut self, key: KeyEvent) -> Mode {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
                Mode::List
            }
            KeyCode::Char('a') => Mode::Editing(Editor::blank()),
            KeyCode::Char('e') | KeyCode::Enter => match self.selected_entry() {
                Some(entry) => Mode::Editing(Editor::for_entry(entry)),
                None => Mode::List,
            },
            KeyCode::Char('d') => match self.selected_entry() {
                Some(entry) => Mode::ConfirmDelete(entry.id()),
                None => Mode::List,
            },
            KeyCode::Char('b') => {
                if let Some(id) = self.selected_entry().map(JournalEntry::id) {
                    if let Err(err) = self.store.toggle_bookmark(id) {
                        debug!("event=ignored_not_found op=toggle_bookmark error={err}");
                    }
                }
                Mode::List
            }
            KeyCode::Char('/') => Mode::Searching,
            KeyCode::Char('f') => {
                let flag = !self.store.query().bookmarks_only;
                self.store.set_bookmarks_only(flag);
                Mode::List
            }
            KeyCode::Char('s') => {
                self.store.toggle_sort_direction();
                Mode::List
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
                Mode::List
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.selected += 1;
                Mode::List
            }
            _ => Mode::List,
        }
    }

    fn on_editor_key(&mut self, mut editor: Editor, key: KeyEvent) -> Mode {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => {
                self.status = Some("Discarded changes".to_string());
                return Mode::List;
            }
            KeyCode::Char('s') if ctrl => {
                self.save(editor);
                return Mode::List;
            }
            KeyCode::Tab | KeyCode::BackTab => editor.switch_field(),
            KeyCode::Enter => match editor.field {
                EditorField::Title => editor.field = EditorField::Content,
                EditorField::Content => editor.content.push('\n'),
            },
            KeyCode::Backspace => {
                editor.active_mut().pop();
            }
            KeyCode::Char(c) if !ctrl => editor.active_mut().push(c),
            _ => {}
        }
        Mode::Editing(editor)
    }

    fn save(&mut self, editor: Editor) {
        match editor.target {
            None => {
                let id = self.store.add(editor.title, editor.content).id();
                self.select(id);
            }
            Some(id) => {
                if let Err(err) = self.store.update(id, editor.title, editor.content) {
                    debug!("event=ignored_not_found op=update error={err}");
                }
            }
        }
    }

    fn on_search_key(&mut self, key: KeyEvent) -> Mode {
        match key.code {
            KeyCode::Enter | KeyCode::Esc => return Mode::List,
            KeyCode::Backspace => {
                let mut text = self.store.query().search_text.clone();
                text.pop();
                self.store.set_search_text(text);
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                let mut text = self.store.query().search_text.clone();
                text.push(c);
                self.store.set_search_text(text);
                self.selected = 0;
            }
            _ => {}
        }
        Mode::Searching
    }

    fn on_confirm_key(&mut self, id: EntryId, key: KeyEvent) -> Mode {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => {
                if let Err(err) = self.store.delete(id) {
                    debug!("event=ignored_not_found op=delete error={err}");
                }
            }
            _ => self.status = Some("Delete cancelled".to_string()),
        }
        Mode::List
    }

    fn select(&mut self, id: EntryId) {
        if let Some(index) = self.store.derived_view().iter().position(|e| e.id() == id) {
            self.selected = index;
        }
    }

    fn clamp_selection(&mut self) {
        let len = self.store.derived_view().len();
        self.selected = self.selected.min(len.saturating_sub(1));
    }

    fn absorb_events(&mut self) {
        for event in self.store.take_events() {
            info!("event=store_change change={event:?}");
            let message = match event {
                StoreEvent::Added(_) => "Entry added",
                StoreEvent::Updated(_) => "Entry saved",
                StoreEvent::Deleted(_) => "Entry deleted",
                StoreEvent::BookmarkToggled { bookmarked: true, .. } => "Bookmarked",
                StoreEvent::BookmarkToggled { bookmarked: false, .. } => "Bookmark removed",
                StoreEvent::QueryChanged => continue,
            };
            self.status = Some(message.to_string());
        }
    }
}
