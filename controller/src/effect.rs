use serde_json::Value;

use shared::types::Route;

use crate::error::RequestError;
use crate::request::ApiCall;

/// Side effect requested by a controller, executed by whoever hosts it.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect<E> {
    Request(ApiCall),
    Notify { message: String, duration_ms: u32 },
    Navigate { route: Route, delay_ms: u32 },
    /// Dispatch `on_confirm` only if the user accepts; declining does nothing.
    Confirm { message: String, on_confirm: E },
}

impl<E> Effect<E> {
    pub fn notify(message: impl Into<String>, duration_ms: u32) -> Self {
        Effect::Notify { message: message.into(), duration_ms }
    }

    pub fn navigate(route: Route) -> Self {
        Effect::Navigate { route, delay_ms: 0 }
    }
}

pub trait Controller {
    type Event: Clone + 'static;
    type View: Clone + PartialEq + 'static;

    /// Runs once per page load.
    fn start(&mut self) -> Vec<Effect<Self::Event>>;

    fn handle(&mut self, event: Self::Event) -> Vec<Effect<Self::Event>>;

    /// Wraps the outcome of an [`Effect::Request`] into the event fed back to `handle`.
    fn response(call: ApiCall, result: Result<Value, RequestError>) -> Self::Event;

    fn view(&self) -> Self::View;
}

/// Best-effort status messages. Must never fail.
pub trait Notifier {
    fn notify(&self, message: &str, duration_ms: u32);
}
