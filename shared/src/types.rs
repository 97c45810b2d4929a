use std::fmt;

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

use crate::constants::{ROUTE_HOME, ROUTE_ROOT};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Route {
    Root,
    Home,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match *self {
            Route::Root => ROUTE_ROOT,
            Route::Home => ROUTE_HOME,
        }
    }
}

/// Entry identifier as the server hands it out: either a number or a string.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq, Hash)]
#[serde(untagged)]
pub enum EntryId {
    Num(i64),
    Text(String),
}

impl EntryId {
    pub fn is_blank(&self) -> bool {
        match self {
            EntryId::Num(_) => false,
            EntryId::Text(text) => text.trim().is_empty(),
        }
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryId::Num(id) => write!(f, "{id}"),
            EntryId::Text(id) => f.write_str(id),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Entry {
    pub id: EntryId,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub created_at: String,
}

/// Text field that never fails the surrounding record: numbers are kept verbatim,
/// `null` and anything else become empty.
fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
    where D: Deserializer<'de>
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Int(i64),
        Float(f64),
        Other(IgnoredAny),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(text) => text,
        Raw::Int(value) => value.to_string(),
        Raw::Float(value) => value.to_string(),
        Raw::Other(_) => String::new(),
    })
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct SessionIdentity {
    #[serde(default)]
    pub logged_in: bool,
    #[serde(default)]
    pub username: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct EntryBody {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct EntriesPayload {
    #[serde(default)]
    pub entries: Vec<Entry>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn entry_id_accepts_numbers_and_strings() {
        let num: EntryId = serde_json::from_value(json!(12)).unwrap();
        let text: EntryId = serde_json::from_value(json!("b7")).unwrap();
        assert_eq!(num, EntryId::Num(12));
        assert_eq!(text.to_string(), "b7");
        assert!(EntryId::Text("  ".to_string()).is_blank());
        assert!(!EntryId::Num(0).is_blank());
    }

    #[test]
    fn entry_tolerates_missing_and_null_text() {
        let entry: Entry = serde_json::from_value(json!({
            "id": 3,
            "title": null,
            "created_at": "2024-03-01 09:30:00",
            "updated_at": "2024-03-01 09:30:00"
        }))
        .unwrap();
        assert_eq!(entry.title, None);
        assert_eq!(entry.content, None);
        assert_eq!(entry.created_at, "2024-03-01 09:30:00");
    }

    #[test]
    fn odd_created_at_values_do_not_fail_the_entry() {
        let entries: Vec<Entry> = serde_json::from_value(json!([
            {"id": 1, "created_at": null},
            {"id": 2, "created_at": 1714557600},
            {"id": 3, "created_at": {"at": "noon"}},
            {"id": 4}
        ]))
        .unwrap();
        let stamps: Vec<_> = entries.iter().map(|entry| entry.created_at.as_str()).collect();
        assert_eq!(stamps, ["", "1714557600", "", ""]);
    }

    #[test]
    fn identity_defaults_to_logged_out() {
        let me: SessionIdentity = serde_json::from_value(json!({})).unwrap();
        assert!(!me.logged_in);
        assert_eq!(me.username, None);
    }

    #[test]
    fn entries_payload_defaults_to_empty() {
        let payload: EntriesPayload = serde_json::from_value(json!({"success": true})).unwrap();
        assert!(payload.entries.is_empty());
    }
}
