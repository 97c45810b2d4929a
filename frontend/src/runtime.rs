use std::cell::RefCell;
use std::rc::Rc;

use futures_signals::signal::Mutable;
use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;

use controller::{Controller, Effect, Notifier};
use shared::types::Route;

use crate::connect_fetch::request;
use crate::dialog::dialogs::Dialogs;
use crate::utils::location_assign;

/// Hosts one page controller: feeds it events, runs its effects and publishes its view.
pub struct Runtime<C: Controller> {
    controller: RefCell<C>,
    view: Mutable<C::View>,
    notifier: Rc<dyn Notifier>,
    dialogs: Rc<Dialogs>,
}

impl<C: Controller + 'static> Runtime<C> {
    pub fn new(controller: C, notifier: Rc<dyn Notifier>, dialogs: Rc<Dialogs>) -> Rc<Self> {
        let view = Mutable::new(controller.view());
        Rc::new(Self {
            controller: RefCell::new(controller),
            view,
            notifier,
            dialogs,
        })
    }

    pub fn view(&self) -> &Mutable<C::View> {
        &self.view
    }

    pub fn start(self: &Rc<Self>) {
        let effects = self.controller.borrow_mut().start();
        self.publish();
        self.run_all(effects);
    }

    pub fn dispatch(self: &Rc<Self>, event: C::Event) {
        let effects = self.controller.borrow_mut().handle(event);
        self.publish();
        self.run_all(effects);
    }

    fn publish(&self) {
        let view = self.controller.borrow().view();
        self.view.set_neq(view);
    }

    fn run_all(self: &Rc<Self>, effects: Vec<Effect<C::Event>>) {
        for effect in effects {
            self.run(effect);
        }
    }

    fn run(self: &Rc<Self>, effect: Effect<C::Event>) {
        match effect {
            Effect::Request(call) => {
                let runtime = self.clone();
                spawn_local(async move {
                    let result = request(&call).await;
                    runtime.dispatch(C::response(call, result));
                });
            }
            Effect::Notify { message, duration_ms } => {
                self.notifier.notify(&message, duration_ms);
            }
            Effect::Navigate { route, delay_ms } => navigate(route, delay_ms),
            Effect::Confirm { message, on_confirm } => {
                let runtime = self.clone();
                self.dialogs.confirm(&message, move || runtime.dispatch(on_confirm.clone()));
            }
        }
    }
}

fn navigate(route: Route, delay_ms: u32) {
    log::info!("navigate to {} in {delay_ms}ms", route.path());
    if delay_ms == 0 {
        location_assign(route.path());
    } else {
        Timeout::new(delay_ms, move || location_assign(route.path())).forget();
    }
}
