use std::rc::Rc;

use dominator::{Dom, events, html};
use futures_signals::signal::{Signal, SignalExt};
use futures_signals::signal_vec::{MutableVec, SignalVecExt};

use crate::constants::{KEY_ESCAPE, TAG_BUTTON, TAG_DIV};
use crate::utils::focus_element;

#[derive(Clone)]
pub struct Dialog {
    pub message: String,
    pub confirm: Rc<dyn Fn()>,
}

/// Stack of confirmation dialogs, the last one is shown.
pub struct Dialogs {
    list: MutableVec<Dialog>,
}

impl Dialogs {
    pub fn new() -> Rc<Self> {
        Rc::new(Self { list: MutableVec::new() })
    }

    pub fn confirm<F>(&self, message: &str, confirm: F)
        where F: Fn() + 'static
    {
        self.list.lock_mut().push_cloned(Dialog {
            message: message.to_string(),
            confirm: Rc::new(confirm),
        });
    }

    pub fn render(dialogs: Rc<Self>) -> impl Signal<Item=Option<Dom>> {
        let list = dialogs.list.signal_vec_cloned().to_signal_cloned();
        list.map(move |list| list.last().map(|dialog| dialog_confirm(&dialogs, dialog)))
    }

    fn close(&self) {
        let mut list = self.list.lock_mut();
        let count = list.len();
        if count > 0 {
            list.remove(count - 1);
        }
    }
}

// ===

pub fn css_class(label: &str) -> String {
    format!("dialogs__{label}")
}

/// Backdrop and box shared by every modal. Escape runs `on_escape`.
/// Keys only reach the backdrop from inside, so each modal focuses one of its controls on insert.
pub fn dialog_frame<F>(rows: Vec<Dom>, mut on_escape: F) -> Dom
    where F: FnMut() + 'static
{
    html!(TAG_DIV, {
        .class(css_class("back"))
        .attr("aria-hidden", "false")
        .event(move |ev: events::KeyDown| {
            if ev.key() == KEY_ESCAPE {
                on_escape();
            }
        })
        .child(html!(TAG_DIV, {
            .class(css_class("container"))
            .attr("role", "dialog")
            .children(rows)
        }))
    })
}

fn dialog_confirm(dialogs: &Rc<Dialogs>, data: &Dialog) -> Dom {
    let on_escape = dialogs.clone();
    dialog_frame(vec![
        html!(TAG_DIV,{
            .class(css_class("body"))
            .text(&data.message)
        }),
        dialog_footer(dialogs, data),
    ], move || on_escape.close())
}

fn dialog_footer(dialogs: &Rc<Dialogs>, data: &Dialog) -> Dom {
    let confirm = data.confirm.clone();
    let on_confirm = dialogs.clone();
    let on_cancel = dialogs.clone();

    html!(TAG_DIV,{
        .class(css_class("footer"))
        .children([
            html!(TAG_BUTTON, {
                .text("OK")
                .attr("aria-label", "confirm")
                .event(move|_: events::Click|{
                    on_confirm.close();
                    confirm();
                })
            }),
            html!(TAG_BUTTON, {
                .text("Cancel")
                .attr("aria-label", "cancel")
                .after_inserted(|elem| focus_element(&elem))
                .event(move|_: events::Click|{
                    on_cancel.close();
                })
            }),
        ])
    })
}

#[cfg(all(test, target_arch = "wasm32"))]
pub(crate) mod tests {
    use std::cell::Cell;

    use wasm_bindgen_test::wasm_bindgen_test;
    use web_sys::{Element, KeyboardEvent, KeyboardEventInit};

    use super::*;

    pub(crate) fn focused() -> Element {
        web_sys::window().unwrap().document().unwrap().active_element().unwrap()
    }

    pub(crate) fn press_escape() {
        let init = KeyboardEventInit::new();
        init.set_key(KEY_ESCAPE);
        init.set_bubbles(true);
        let event = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
        focused().dispatch_event(&event).unwrap();
    }

    #[wasm_bindgen_test]
    fn escape_dismisses_confirm_without_confirming() {
        let dialogs = Dialogs::new();
        let confirmed = Rc::new(Cell::new(false));
        let flag = confirmed.clone();
        dialogs.confirm("Delete this entry?", move || flag.set(true));
        let dialog = dialogs.list.lock_ref()[0].clone();

        dominator::append_dom(&dominator::body(), dialog_confirm(&dialogs, &dialog));
        assert_eq!(focused().get_attribute("aria-label").as_deref(), Some("cancel"));

        press_escape();
        assert!(dialogs.list.lock_ref().is_empty());
        assert!(!confirmed.get());
    }
}
