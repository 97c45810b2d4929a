use shared::constants::{MODAL_EDIT, MODAL_NEW, MSG_NO_ENTRIES, MSG_NO_TITLE};
use shared::types::{Entry, EntryId};

/// One rendered entry. All strings are shown as plain text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryCard {
    pub id: EntryId,
    pub title: String,
    pub meta: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntriesView {
    Empty(&'static str),
    Cards(Vec<EntryCard>),
}

impl EntriesView {
    pub fn render(entries: &[Entry], format_time: fn(&str) -> String) -> Self {
        if entries.is_empty() {
            return EntriesView::Empty(MSG_NO_ENTRIES);
        }
        EntriesView::Cards(entries.iter().map(|entry| EntryCard {
            id: entry.id.clone(),
            title: match entry.title.as_deref() {
                Some(title) if !title.is_empty() => title.to_string(),
                _ => MSG_NO_TITLE.to_string(),
            },
            meta: format_time(&entry.created_at),
            content: entry.content.clone().unwrap_or_default(),
        }).collect())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalView {
    pub heading: &'static str,
    pub title: String,
    pub content: String,
}

impl ModalView {
    pub fn new(editing: bool, title: &str, content: &str) -> Self {
        Self {
            heading: if editing { MODAL_EDIT } else { MODAL_NEW },
            title: title.to_string(),
            content: content.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListView {
    pub greeting: Option<String>,
    /// `None` until the first successful load.
    pub entries: Option<EntriesView>,
    pub modal: Option<ModalView>,
}
