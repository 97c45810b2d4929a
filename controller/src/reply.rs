use serde::de::DeserializeOwned;
use serde_json::Value;

use shared::types::SessionIdentity;

use crate::error::RequestError;
use crate::request::error_message;

/// API result with the `success` / `error` convention already decided.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiReply<T> {
    Success(T),
    Failure(String),
}

impl<T: DeserializeOwned> ApiReply<T> {
    pub fn from_result(result: Result<Value, RequestError>, fallback: &str) -> Self {
        let json = match result {
            Ok(json) => json,
            Err(err) => return ApiReply::Failure(or_fallback(err.message(), fallback)),
        };
        if json.get("success").and_then(Value::as_bool) == Some(true) {
            match serde_json::from_value::<T>(json) {
                Ok(payload) => ApiReply::Success(payload),
                Err(err) => {
                    log::warn!("reply payload: {err}");
                    ApiReply::Failure(fallback.to_string())
                }
            }
        } else {
            ApiReply::Failure(or_fallback(error_message(&json).unwrap_or_default(), fallback))
        }
    }
}

fn or_fallback(message: &str, fallback: &str) -> String {
    if message.is_empty() {
        fallback.to_string()
    } else {
        message.to_string()
    }
}

/// The identity endpoint carries no `success` flag; anything unreadable counts as logged out.
pub fn identity_from_result(result: Result<Value, RequestError>) -> SessionIdentity {
    match result {
        Ok(json) => serde_json::from_value(json).unwrap_or_else(|err| {
            log::warn!("identity payload: {err}");
            SessionIdentity::default()
        }),
        Err(err) => {
            log::warn!("identity request: {err}");
            SessionIdentity::default()
        }
    }
}
