use std::rc::Rc;

use dominator::{Dom, events, html};
use futures_signals::signal::{Signal, SignalExt};

use controller::entries::{EntryListController, ListEvent};
use controller::view::{EntriesView, EntryCard, ModalView};
use shared::types::EntryBody;

use crate::constants::{PROP_NAME, PROP_PLACEHOLDER, PROP_TITLE, PROP_TYPE, PROP_VALUE, TAG_BUTTON, TAG_DIV, TAG_INPUT, TAG_SPAN, TAG_TEXTAREA};
use crate::dialog::dialogs::{css_class as dialog_class, dialog_frame};
use crate::runtime::Runtime;
use crate::utils::{focus_element, get_input_value, set_title};

const FIELD_TITLE: &str = "entry-title";
const FIELD_CONTENT: &str = "entry-content";

type ListRuntime = Rc<Runtime<EntryListController>>;

fn css_class(label: &str) -> String {
    format!("app-entries__{label}")
}

pub fn app_entries(runtime: ListRuntime) -> Dom {
    set_title("Journal");
    html!(TAG_DIV, {
        .class(css_class("container"))
        .visible_signal(runtime.view().signal_ref(|view| view.greeting.is_some()))
        .children([
            entries_header(&runtime),
            entries_list(&runtime),
        ])
        .child_signal(entry_modal(&runtime))
    })
}

fn entries_header(runtime: &ListRuntime) -> Dom {
    html!(TAG_DIV, {
        .class(css_class("header"))
        .children([
            html!(TAG_SPAN, {
                .class(css_class("greeting"))
                .text_signal(runtime.view().signal_ref(|view| view.greeting.clone().unwrap_or_default()))
            }),
            button("New entry", &css_class("button"), runtime, ListEvent::OpenNew),
            button("Log out", &css_class("button"), runtime, ListEvent::Logout),
        ])
    })
}

fn button(label: &str, class: &str, runtime: &ListRuntime, event: ListEvent) -> Dom {
    let runtime = runtime.clone();
    html!(TAG_BUTTON, {
        .class(class)
        .text(label)
        .event(move |_: events::Click| runtime.dispatch(event.clone()))
    })
}

// ===

fn entries_list(runtime: &ListRuntime) -> Dom {
    let entries = runtime.view().signal_ref(|view| view.entries.clone()).dedupe_cloned();
    let runtime = runtime.clone();
    html!(TAG_DIV, {
        .class(css_class("list"))
        .child_signal(entries.map(move |entries| entries.map(|entries| entries_view(&runtime, entries))))
    })
}

/// The list is rebuilt from scratch on every change.
fn entries_view(runtime: &ListRuntime, entries: EntriesView) -> Dom {
    match entries {
        EntriesView::Empty(message) => html!(TAG_DIV, {
            .class("card")
            .child(html!("p", {
                .class("muted")
                .text(message)
            }))
        }),
        EntriesView::Cards(cards) => html!(TAG_DIV, {
            .children(cards.into_iter().map(|card| entry_card(runtime, card)))
        }),
    }
}

fn entry_card(runtime: &ListRuntime, card: EntryCard) -> Dom {
    let EntryCard { id, title, meta, content } = card;
    html!(TAG_DIV, {
        .class("card")
        .children([
            html!(TAG_DIV, {
                .class("entry-title")
                .text(&title)
            }),
            html!(TAG_DIV, {
                .class("entry-meta")
                .text(&meta)
            }),
            html!(TAG_DIV, {
                .class("entry-content")
                .text(&content)
            }),
            html!(TAG_DIV, {
                .class("card-actions")
                .children([
                    button("Edit", "btn", runtime, ListEvent::OpenEdit(id.clone())),
                    button("Delete", "btn", runtime, ListEvent::Delete(id)),
                ])
            }),
        ])
    })
}

// ===

fn entry_modal(runtime: &ListRuntime) -> impl Signal<Item=Option<Dom>> {
    let modal = runtime.view().signal_ref(|view| view.modal.clone()).dedupe_cloned();
    let runtime = runtime.clone();
    modal.map(move |modal| modal.map(|modal| modal_form(&runtime, modal)))
}

fn modal_form(runtime: &ListRuntime, modal: ModalView) -> Dom {
    let on_escape = runtime.clone();
    let on_close = runtime.clone();
    let on_save = runtime.clone();
    dialog_frame(vec![
        html!(TAG_DIV, {
            .class(dialog_class("header"))
            .child(html!(TAG_SPAN, {
                .text(modal.heading)
            }))
            .child(html!(TAG_BUTTON, {
                .class(dialog_class("close"))
                .attr("aria-label", "close")
                .text("×")
                .event(move |_: events::Click| on_close.dispatch(ListEvent::CloseModal))
            }))
        }),
        html!(TAG_DIV, {
            .class(dialog_class("body"))
            .children([
                html!(TAG_INPUT, {
                    .class(css_class("input"))
                    .attr(PROP_TITLE, "Title")
                    .attr(PROP_PLACEHOLDER, "Title")
                    .attr(PROP_TYPE, "text")
                    .attr(PROP_NAME, FIELD_TITLE)
                    .attr(PROP_VALUE, &modal.title)
                    .after_inserted(|elem| focus_element(&elem))
                }),
                html!(TAG_TEXTAREA, {
                    .class(css_class("textarea"))
                    .attr(PROP_PLACEHOLDER, "Write something")
                    .attr(PROP_NAME, FIELD_CONTENT)
                    .text(&modal.content)
                }),
            ])
        }),
        html!(TAG_DIV, {
            .class(dialog_class("footer"))
            .children([
                html!(TAG_BUTTON, {
                    .text("Save")
                    .attr("aria-label", "confirm")
                    .event(move |_: events::Click| {
                        on_save.dispatch(ListEvent::Submit(EntryBody {
                            title: get_input_value(FIELD_TITLE),
                            content: get_input_value(FIELD_CONTENT),
                        }));
                    })
                }),
                button("Cancel", "btn", runtime, ListEvent::CloseModal),
            ])
        }),
    ], move || on_escape.dispatch(ListEvent::CloseModal))
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use controller::config::ClientConfig;
    use controller::{Controller, Notifier};
    use serde_json::json;
    use wasm_bindgen_test::wasm_bindgen_test;

    use crate::dialog::dialogs::tests::{focused, press_escape};
    use crate::dialog::dialogs::Dialogs;
    use crate::notifier::Toast;

    use super::*;

    fn open_new() -> ListRuntime {
        let mut page = EntryListController::new(ClientConfig::default(), |raw| raw.to_string());
        page.start();
        page.handle(ListEvent::Identity(Ok(json!({"logged_in": true, "username": "ann"}))));
        page.handle(ListEvent::Loaded(Ok(json!({"success": true, "entries": []}))));
        page.handle(ListEvent::OpenNew);
        let notifier: Rc<dyn Notifier> = Toast::new();
        Runtime::new(page, notifier, Dialogs::new())
    }

    #[wasm_bindgen_test]
    fn opened_modal_takes_focus_and_escape_closes_it() {
        let runtime = open_new();
        let modal = runtime.view().get_cloned().modal.unwrap();
        dominator::append_dom(&dominator::body(), modal_form(&runtime, modal));
        assert_eq!(focused().get_attribute(PROP_NAME).as_deref(), Some(FIELD_TITLE));

        press_escape();
        assert_eq!(runtime.view().lock_ref().modal, None);
    }
}
