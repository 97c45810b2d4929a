use std::rc::Rc;

use dominator::{Dom, events, html};
use futures_signals::signal::SignalExt;

use controller::auth::{AuthController, AuthEvent, AuthKind, AuthState};
use shared::constants::{ROUTE_ROOT, ROUTE_SIGNUP};
use shared::types::Credentials;

use crate::constants::{KEY_ENTER, PROP_AUTOCOMPLETE, PROP_HREF, PROP_NAME, PROP_PLACEHOLDER, PROP_TITLE, PROP_TYPE, TAG_BUTTON, TAG_DIV, TAG_INPUT, TAG_LINK};
use crate::runtime::Runtime;
use crate::utils::{focus_input, get_input_value, set_title};

const FIELD_NAME: &str = "username";
const FIELD_PASS: &str = "password";

type AuthRuntime = Rc<Runtime<AuthController>>;

fn css_class(label: &str) -> String {
    format!("app-auth__{label}")
}

struct Labels {
    title: &'static str,
    button: &'static str,
    link_href: &'static str,
    link_text: &'static str,
}

fn labels(kind: AuthKind) -> Labels {
    match kind {
        AuthKind::Login => Labels {
            title: "Sign in",
            button: "Sign in",
            link_href: ROUTE_SIGNUP,
            link_text: "Create an account",
        },
        AuthKind::Signup => Labels {
            title: "Create account",
            button: "Sign up",
            link_href: ROUTE_ROOT,
            link_text: "Already registered? Sign in",
        },
    }
}

pub fn app_auth(kind: AuthKind, runtime: AuthRuntime) -> Dom {
    let labels = labels(kind);
    set_title(labels.title);
    let on_key = runtime.clone();
    let on_click = runtime.clone();
    html!(TAG_DIV, {
        .class(css_class("container"))
        .child(html!(TAG_DIV, {
            .class(css_class("form"))
            .class_signal(css_class("busy"), runtime.view().signal().map(|state| state == AuthState::Submitting))
            .children([
                html!("h1", {
                    .class(css_class("title"))
                    .text(labels.title)
                }),
                html!(TAG_INPUT, {
                    .class(css_class("input"))
                    .attr(PROP_TITLE, "Username")
                    .attr(PROP_PLACEHOLDER, "Username")
                    .attr(PROP_NAME, FIELD_NAME)
                    .attr(PROP_AUTOCOMPLETE, "username")
                    .event(handle_key_name)
                }),
                html!(TAG_INPUT, {
                    .class(css_class("input"))
                    .attr(PROP_TITLE, "Password")
                    .attr(PROP_PLACEHOLDER, "Password")
                    .attr(PROP_TYPE, "password")
                    .attr(PROP_NAME, FIELD_PASS)
                    .attr(PROP_AUTOCOMPLETE, if kind == AuthKind::Login { "current-password" } else { "new-password" })
                    .event(move |ev: events::KeyDown| {
                        if ev.key() == KEY_ENTER {
                            submit(&on_key);
                        }
                    })
                }),
                html!(TAG_BUTTON, {
                    .class(css_class("button"))
                    .text(labels.button)
                    .event(move |_: events::Click| submit(&on_click))
                }),
                html!(TAG_LINK, {
                    .class(css_class("link"))
                    .attr(PROP_HREF, labels.link_href)
                    .text(labels.link_text)
                }),
            ])
        }))
    })
}

fn handle_key_name(ev: events::KeyDown) {
    if ev.key() == KEY_ENTER {
        focus_input(FIELD_PASS);
    }
}

fn submit(runtime: &AuthRuntime) {
    runtime.dispatch(AuthEvent::Submit(Credentials {
        username: get_input_value(FIELD_NAME),
        password: get_input_value(FIELD_PASS),
    }));
}
