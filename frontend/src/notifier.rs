use std::cell::{Cell, RefCell};
use std::rc::Rc;

use dominator::{Dom, html};
use futures_signals::signal::Mutable;
use gloo_timers::callback::Timeout;

use controller::Notifier;

use crate::constants::{PROP_ROLE, TAG_DIV};
use crate::utils::window_alert;

/// Toast line at the bottom of the page. Falls back to `alert` while it is not in the DOM.
pub struct Toast {
    text: Mutable<String>,
    visible: Mutable<bool>,
    mounted: Cell<bool>,
    timer: RefCell<Option<Timeout>>,
    pending: RefCell<Vec<(String, u32)>>,
}

impl Toast {
    pub fn new() -> Rc<Self> {
        Rc::new(Self {
            text: Mutable::new(String::new()),
            visible: Mutable::new(false),
            mounted: Cell::new(false),
            timer: RefCell::new(None),
            pending: RefCell::new(Vec::new()),
        })
    }

    /// Shows `message` once the toast is in the document.
    pub fn notify_when_mounted(&self, message: &str, duration_ms: u32) {
        if self.mounted.get() {
            self.notify(message, duration_ms);
        } else {
            self.pending.borrow_mut().push((message.to_string(), duration_ms));
        }
    }

    fn mount(&self) {
        self.mounted.set(true);
        let pending = self.pending.take();
        for (message, duration_ms) in pending {
            self.notify(&message, duration_ms);
        }
    }

    pub fn render(toast: Rc<Self>) -> Dom {
        let inserted = toast.clone();
        let removed = toast.clone();
        html!(TAG_DIV, {
            .attr("id", "toast")
            .attr(PROP_ROLE, "status")
            .class("toast")
            .class_signal("show", toast.visible.signal())
            .text_signal(toast.text.signal_cloned())
            .after_inserted(move |_| inserted.mount())
            .after_removed(move |_| removed.mounted.set(false))
        })
    }
}

impl Notifier for Toast {
    fn notify(&self, message: &str, duration_ms: u32) {
        if !self.mounted.get() {
            window_alert(message);
            return;
        }
        self.text.set(message.to_string());
        self.visible.set(true);
        let visible = self.visible.clone();
        // replacing the previous timer cancels it
        *self.timer.borrow_mut() = Some(Timeout::new(duration_ms, move || visible.set(false)));
    }
}
