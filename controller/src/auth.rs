use serde::de::IgnoredAny;
use serde_json::Value;

use shared::constants::{MSG_LOGIN_FAILED, MSG_LOGIN_WELCOME, MSG_SIGNUP_FAILED, MSG_SIGNUP_WELCOME};
use shared::types::{Credentials, Route};

use crate::config::ClientConfig;
use crate::effect::{Controller, Effect};
use crate::error::RequestError;
use crate::reply::ApiReply;
use crate::request::ApiCall;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AuthKind {
    Login,
    Signup,
}

impl AuthKind {
    fn call(&self, credentials: Credentials) -> ApiCall {
        match *self {
            AuthKind::Login => ApiCall::Login(credentials),
            AuthKind::Signup => ApiCall::Signup(credentials),
        }
    }

    pub fn welcome(&self) -> &'static str {
        match *self {
            AuthKind::Login => MSG_LOGIN_WELCOME,
            AuthKind::Signup => MSG_SIGNUP_WELCOME,
        }
    }

    pub fn fallback(&self) -> &'static str {
        match *self {
            AuthKind::Login => MSG_LOGIN_FAILED,
            AuthKind::Signup => MSG_SIGNUP_FAILED,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AuthState {
    Idle,
    Submitting,
    Redirecting,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AuthEvent {
    Submit(Credentials),
    Response(Result<Value, RequestError>),
}

/// Login and signup forms: submit credentials, greet and redirect home on success.
pub struct AuthController {
    kind: AuthKind,
    config: ClientConfig,
    state: AuthState,
}

impl AuthController {
    pub fn new(kind: AuthKind, config: ClientConfig) -> Self {
        Self { kind, config, state: AuthState::Idle }
    }

    pub fn state(&self) -> AuthState {
        self.state
    }

    fn submit(&mut self, credentials: Credentials) -> Vec<Effect<AuthEvent>> {
        match self.state {
            AuthState::Redirecting => return vec![],
            AuthState::Submitting if self.config.serialized() => {
                log::debug!("{:?}: submit ignored, request in flight", self.kind);
                return vec![];
            }
            _ => {}
        }
        self.state = AuthState::Submitting;
        vec![Effect::Request(self.kind.call(credentials))]
    }

    fn on_reply(&mut self, result: Result<Value, RequestError>) -> Vec<Effect<AuthEvent>> {
        if self.state == AuthState::Redirecting {
            return vec![];
        }
        match ApiReply::<IgnoredAny>::from_result(result, self.kind.fallback()) {
            ApiReply::Success(_) => {
                self.state = AuthState::Redirecting;
                vec![
                    Effect::notify(self.kind.welcome(), self.config.notify_ms),
                    Effect::Navigate { route: Route::Home, delay_ms: self.config.redirect_delay_ms },
                ]
            }
            ApiReply::Failure(message) => {
                self.state = AuthState::Idle;
                vec![Effect::notify(message, self.config.notify_ms)]
            }
        }
    }
}

impl Controller for AuthController {
    type Event = AuthEvent;
    type View = AuthState;

    fn start(&mut self) -> Vec<Effect<AuthEvent>> {
        log::info!("{:?} page ready", self.kind);
        vec![]
    }

    fn handle(&mut self, event: AuthEvent) -> Vec<Effect<AuthEvent>> {
        match event {
            AuthEvent::Submit(credentials) => self.submit(credentials),
            AuthEvent::Response(result) => self.on_reply(result),
        }
    }

    fn response(_call: ApiCall, result: Result<Value, RequestError>) -> AuthEvent {
        AuthEvent::Response(result)
    }

    fn view(&self) -> AuthState {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::config::SubmitPolicy;

    use super::*;

    fn credentials() -> Credentials {
        Credentials { username: " ann ".to_string(), password: "secret".to_string() }
    }

    #[test]
    fn submit_posts_credentials_as_typed() {
        let mut login = AuthController::new(AuthKind::Login, ClientConfig::default());
        let effects = login.handle(AuthEvent::Submit(credentials()));
        assert_eq!(effects, vec![Effect::Request(ApiCall::Login(credentials()))]);
        assert_eq!(login.state(), AuthState::Submitting);
    }

    #[test]
    fn success_greets_then_navigates_after_delay() {
        let mut login = AuthController::new(AuthKind::Login, ClientConfig::default());
        login.handle(AuthEvent::Submit(credentials()));
        let effects = login.handle(AuthEvent::Response(Ok(json!({"success": true}))));
        assert_eq!(effects, vec![
            Effect::notify("Welcome back!", 3000),
            Effect::Navigate { route: Route::Home, delay_ms: 500 },
        ]);
        assert_eq!(login.state(), AuthState::Redirecting);
    }

    #[test]
    fn server_error_is_shown_verbatim_and_nothing_navigates() {
        let mut login = AuthController::new(AuthKind::Login, ClientConfig::default());
        login.handle(AuthEvent::Submit(credentials()));
        let effects = login.handle(AuthEvent::Response(Ok(json!({"success": false, "error": "bad credentials"}))));
        assert_eq!(effects, vec![Effect::notify("bad credentials", 3000)]);
        assert_eq!(login.state(), AuthState::Idle);
    }

    #[test]
    fn transport_failure_without_text_uses_fallback() {
        let mut signup = AuthController::new(AuthKind::Signup, ClientConfig::default());
        signup.handle(AuthEvent::Submit(credentials()));
        let effects = signup.handle(AuthEvent::Response(Err(RequestError::Transport(String::new()))));
        assert_eq!(effects, vec![Effect::notify("Signup failed", 3000)]);
    }

    #[test]
    fn signup_uses_its_own_endpoint_and_message() {
        let mut signup = AuthController::new(AuthKind::Signup, ClientConfig::default());
        let effects = signup.handle(AuthEvent::Submit(credentials()));
        assert_eq!(effects, vec![Effect::Request(ApiCall::Signup(credentials()))]);
        let effects = signup.handle(AuthEvent::Response(Ok(json!({"success": true}))));
        assert_eq!(effects[0], Effect::notify("Account created — welcome!", 3000));
    }

    #[test]
    fn retry_after_failure_is_allowed() {
        let mut login = AuthController::new(AuthKind::Login, ClientConfig::default());
        login.handle(AuthEvent::Submit(credentials()));
        login.handle(AuthEvent::Response(Ok(json!({"success": false}))));
        assert_eq!(login.handle(AuthEvent::Submit(credentials())).len(), 1);
    }

    #[test]
    fn double_submit_depends_on_policy() {
        let mut unguarded = AuthController::new(AuthKind::Login, ClientConfig::default());
        unguarded.handle(AuthEvent::Submit(credentials()));
        assert_eq!(unguarded.handle(AuthEvent::Submit(credentials())).len(), 1);

        let config = ClientConfig { submit_policy: SubmitPolicy::Serialized, ..ClientConfig::default() };
        let mut serialized = AuthController::new(AuthKind::Login, config);
        serialized.handle(AuthEvent::Submit(credentials()));
        assert!(serialized.handle(AuthEvent::Submit(credentials())).is_empty());
    }

    #[test]
    fn nothing_happens_once_redirecting() {
        let mut login = AuthController::new(AuthKind::Login, ClientConfig::default());
        login.handle(AuthEvent::Submit(credentials()));
        login.handle(AuthEvent::Response(Ok(json!({"success": true}))));
        assert!(login.handle(AuthEvent::Submit(credentials())).is_empty());
        assert!(login.handle(AuthEvent::Response(Ok(json!({"success": true})))).is_empty());
    }
}
