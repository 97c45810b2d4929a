use serde::de::IgnoredAny;
use serde_json::Value;

use shared::constants::{MSG_DELETED, MSG_DELETE_CONFIRM, MSG_DELETE_FAILED, MSG_LOAD_FAILED, MSG_SAVED, MSG_SAVE_FAILED};
use shared::types::{EntriesPayload, Entry, EntryBody, EntryId, Route};

use crate::config::ClientConfig;
use crate::effect::{Controller, Effect};
use crate::error::RequestError;
use crate::reply::{identity_from_result, ApiReply};
use crate::request::ApiCall;
use crate::view::{EntriesView, ListView, ModalView};

type Effects = Vec<Effect<ListEvent>>;

#[derive(Debug, Clone, PartialEq)]
pub enum ListEvent {
    Identity(Result<Value, RequestError>),
    Loaded(Result<Value, RequestError>),
    Saved(Result<Value, RequestError>),
    Deleted(Result<Value, RequestError>),
    LoggedOut,
    /// A response to a call this page never makes.
    Stray(ApiCall),
    Refresh,
    OpenNew,
    OpenEdit(EntryId),
    CloseModal,
    /// Title and content as read from the form; the id lives in the controller.
    Submit(EntryBody),
    Delete(EntryId),
    DeleteConfirmed(EntryId),
    Logout,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Phase {
    Starting,
    Ready,
    Leaving,
}

/// Modal form contents. `entry_id == None` is create mode.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EntryForm {
    pub entry_id: Option<EntryId>,
    pub title: String,
    pub content: String,
}

impl EntryForm {
    fn edit(entry: &Entry) -> Self {
        Self {
            entry_id: Some(entry.id.clone()).filter(|id| !id.is_blank()),
            title: entry.title.clone().unwrap_or_default(),
            content: entry.content.clone().unwrap_or_default(),
        }
    }

    pub fn is_editing(&self) -> bool {
        self.entry_id.is_some()
    }
}

/// The signed-in page: greeting, entry list and the create/edit modal.
pub struct EntryListController {
    config: ClientConfig,
    format_time: fn(&str) -> String,
    phase: Phase,
    username: Option<String>,
    entries: Option<Vec<Entry>>,
    form: Option<EntryForm>,
    loading: bool,
    reload_pending: bool,
    saving: bool,
}

impl EntryListController {
    pub fn new(config: ClientConfig, format_time: fn(&str) -> String) -> Self {
        Self {
            config,
            format_time,
            phase: Phase::Starting,
            username: None,
            entries: None,
            form: None,
            loading: false,
            reload_pending: false,
            saving: false,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn form(&self) -> Option<&EntryForm> {
        self.form.as_ref()
    }

    fn notify(&self, message: impl Into<String>) -> Effect<ListEvent> {
        Effect::notify(message, self.config.notify_ms)
    }

    fn identity(&mut self, result: Result<Value, RequestError>) -> Effects {
        if self.phase != Phase::Starting {
            return vec![];
        }
        let me = identity_from_result(result);
        if !me.logged_in {
            log::info!("not signed in, leaving");
            self.phase = Phase::Leaving;
            return vec![Effect::navigate(Route::Root)];
        }
        self.phase = Phase::Ready;
        self.username = me.username;
        self.refresh()
    }

    fn refresh(&mut self) -> Effects {
        if self.loading && self.config.serialized() {
            self.reload_pending = true;
            return vec![];
        }
        self.loading = true;
        vec![Effect::Request(ApiCall::ListEntries)]
    }

    fn loaded(&mut self, result: Result<Value, RequestError>) -> Effects {
        self.loading = false;
        let mut effects = match ApiReply::<EntriesPayload>::from_result(result, MSG_LOAD_FAILED) {
            ApiReply::Success(payload) => {
                self.entries = Some(payload.entries);
                vec![]
            }
            ApiReply::Failure(message) => {
                // the previous list stays on screen
                log::warn!("entries: {message}");
                vec![self.notify(MSG_LOAD_FAILED)]
            }
        };
        if self.reload_pending {
            self.reload_pending = false;
            effects.extend(self.refresh());
        }
        effects
    }

    fn open_edit(&mut self, id: EntryId) -> Effects {
        let found = self.entries.iter().flatten().find(|entry| entry.id == id);
        match found {
            Some(entry) => self.form = Some(EntryForm::edit(entry)),
            None => log::warn!("edit: no entry with id {id}"),
        }
        vec![]
    }

    fn submit(&mut self, body: EntryBody) -> Effects {
        let Some(form) = self.form.as_mut() else {
            return vec![];
        };
        if self.saving && self.config.serialized() {
            log::debug!("save ignored, request in flight");
            return vec![];
        }
        form.title = body.title.clone();
        form.content = body.content.clone();
        let call = match &form.entry_id {
            Some(id) => ApiCall::UpdateEntry(id.clone(), body),
            None => ApiCall::CreateEntry(body),
        };
        self.saving = true;
        vec![Effect::Request(call)]
    }

    fn saved(&mut self, result: Result<Value, RequestError>) -> Effects {
        self.saving = false;
        match ApiReply::<IgnoredAny>::from_result(result, MSG_SAVE_FAILED) {
            ApiReply::Success(_) => {
                self.form = None;
                let mut effects = vec![self.notify(MSG_SAVED)];
                effects.extend(self.refresh());
                effects
            }
            ApiReply::Failure(message) => vec![self.notify(message)],
        }
    }

    fn deleted(&mut self, result: Result<Value, RequestError>) -> Effects {
        match ApiReply::<IgnoredAny>::from_result(result, MSG_DELETE_FAILED) {
            ApiReply::Success(_) => {
                let mut effects = vec![self.notify(MSG_DELETED)];
                effects.extend(self.refresh());
                effects
            }
            ApiReply::Failure(message) => vec![self.notify(message)],
        }
    }
}

impl Controller for EntryListController {
    type Event = ListEvent;
    type View = ListView;

    fn start(&mut self) -> Effects {
        self.phase = Phase::Starting;
        vec![Effect::Request(ApiCall::Me)]
    }

    fn handle(&mut self, event: ListEvent) -> Effects {
        match event {
            ListEvent::Identity(result) => return self.identity(result),
            ListEvent::LoggedOut => return vec![Effect::navigate(Route::Root)],
            ListEvent::Stray(call) => {
                log::warn!("unexpected response to {call:?}");
                return vec![];
            }
            _ => {}
        }
        if self.phase != Phase::Ready {
            log::debug!("{:?}: ignoring {event:?}", self.phase);
            return vec![];
        }
        match event {
            ListEvent::Loaded(result) => self.loaded(result),
            ListEvent::Saved(result) => self.saved(result),
            ListEvent::Deleted(result) => self.deleted(result),
            ListEvent::Refresh => self.refresh(),
            ListEvent::OpenNew => {
                self.form = Some(EntryForm::default());
                vec![]
            }
            ListEvent::OpenEdit(id) => self.open_edit(id),
            ListEvent::CloseModal => {
                self.form = None;
                vec![]
            }
            ListEvent::Submit(body) => self.submit(body),
            ListEvent::Delete(id) => vec![Effect::Confirm {
                message: MSG_DELETE_CONFIRM.to_string(),
                on_confirm: ListEvent::DeleteConfirmed(id),
            }],
            ListEvent::DeleteConfirmed(id) => vec![Effect::Request(ApiCall::DeleteEntry(id))],
            ListEvent::Logout => {
                self.phase = Phase::Leaving;
                vec![Effect::Request(ApiCall::Logout)]
            }
            ListEvent::Identity(_) | ListEvent::LoggedOut | ListEvent::Stray(_) => vec![],
        }
    }

    fn response(call: ApiCall, result: Result<Value, RequestError>) -> ListEvent {
        match call {
            ApiCall::Me => ListEvent::Identity(result),
            ApiCall::ListEntries => ListEvent::Loaded(result),
            ApiCall::CreateEntry(_) | ApiCall::UpdateEntry(..) => ListEvent::Saved(result),
            ApiCall::DeleteEntry(_) => ListEvent::Deleted(result),
            ApiCall::Logout => ListEvent::LoggedOut,
            call @ (ApiCall::Login(_) | ApiCall::Signup(_)) => ListEvent::Stray(call),
        }
    }

    fn view(&self) -> ListView {
        if self.phase != Phase::Ready {
            return ListView::default();
        }
        ListView {
            greeting: Some(format!("Hi, {}", self.username.as_deref().unwrap_or_default())),
            entries: self.entries.as_deref().map(|entries| EntriesView::render(entries, self.format_time)),
            modal: self.form.as_ref().map(|form| ModalView::new(form.is_editing(), &form.title, &form.content)),
        }
    }
}
