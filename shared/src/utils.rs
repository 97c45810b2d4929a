use crate::constants::{API_ENTRIES, ROOT_API};
use crate::types::EntryId;

pub fn api_path(endpoint: &str) -> String {
    format!("/{ROOT_API}/{endpoint}")
}

pub fn entry_path(id: &EntryId) -> String {
    format!("/{ROOT_API}/{API_ENTRIES}/{id}")
}
