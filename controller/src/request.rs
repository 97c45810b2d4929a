use serde_json::{json, Value};

use shared::constants::{API_ENTRIES, API_LOGIN, API_LOGOUT, API_ME, API_SIGNUP, MSG_INVALID_RESPONSE};
use shared::types::{Credentials, EntryBody, EntryId};
use shared::utils::{api_path, entry_path};

use crate::error::RequestError;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match *self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// Every call the client makes against the JSON API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiCall {
    Login(Credentials),
    Signup(Credentials),
    Logout,
    Me,
    ListEntries,
    CreateEntry(EntryBody),
    UpdateEntry(EntryId, EntryBody),
    DeleteEntry(EntryId),
}

impl ApiCall {
    pub fn method(&self) -> HttpMethod {
        match self {
            ApiCall::Me | ApiCall::ListEntries => HttpMethod::Get,
            ApiCall::Login(_) | ApiCall::Signup(_) | ApiCall::Logout | ApiCall::CreateEntry(_) => HttpMethod::Post,
            ApiCall::UpdateEntry(..) => HttpMethod::Put,
            ApiCall::DeleteEntry(_) => HttpMethod::Delete,
        }
    }

    pub fn url(&self) -> String {
        match self {
            ApiCall::Login(_) => api_path(API_LOGIN),
            ApiCall::Signup(_) => api_path(API_SIGNUP),
            ApiCall::Logout => api_path(API_LOGOUT),
            ApiCall::Me => api_path(API_ME),
            ApiCall::ListEntries | ApiCall::CreateEntry(_) => api_path(API_ENTRIES),
            ApiCall::UpdateEntry(id, _) | ApiCall::DeleteEntry(id) => entry_path(id),
        }
    }

    /// Serialized JSON body, `None` for calls that send no body at all.
    pub fn body(&self) -> Result<Option<String>, RequestError> {
        let body = match self {
            ApiCall::Login(credentials) | ApiCall::Signup(credentials) => serde_json::to_string(credentials)?,
            ApiCall::Logout => json!({}).to_string(),
            ApiCall::CreateEntry(body) | ApiCall::UpdateEntry(_, body) => serde_json::to_string(body)?,
            ApiCall::Me | ApiCall::ListEntries | ApiCall::DeleteEntry(_) => return Ok(None),
        };
        Ok(Some(body))
    }
}

/// Turns a raw HTTP response into the helper's result.
///
/// The body is parsed whatever the status; text that is not JSON is replaced by a
/// synthetic `{success:false, error:"Invalid response"}`. Only a failing status whose
/// body names an `error` becomes `Err`, everything else is handed back for the caller
/// to inspect `success` itself.
pub fn normalize(status_ok: bool, text: &str) -> Result<Value, RequestError> {
    let json = serde_json::from_str::<Value>(text).unwrap_or_else(|_| invalid_response());
    if !status_ok {
        if let Some(error) = error_message(&json) {
            return Err(RequestError::Api(error.to_string()));
        }
    }
    Ok(json)
}

pub(crate) fn error_message(json: &Value) -> Option<&str> {
    json.get("error").and_then(Value::as_str).filter(|msg| !msg.is_empty())
}

fn invalid_response() -> Value {
    json!({"success": false, "error": MSG_INVALID_RESPONSE})
}
