pub mod app_auth;
pub mod app_entries;
pub mod app_root;
