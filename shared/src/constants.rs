pub static ROOT_API: &'static str = "api";
pub static API_LOGIN: &'static str = "login";
pub static API_SIGNUP: &'static str = "signup";
pub static API_LOGOUT: &'static str = "logout";
pub static API_ME: &'static str = "me";
pub static API_ENTRIES: &'static str = "entries";

pub static ROUTE_ROOT: &'static str = "/";
pub static ROUTE_LOGIN: &'static str = "/login";
pub static ROUTE_SIGNUP: &'static str = "/signup";
pub static ROUTE_HOME: &'static str = "/home";

pub static CONTENT_TYPE_JSON: &'static str = "application/json";

pub static MSG_INVALID_RESPONSE: &'static str = "Invalid response";
pub static MSG_LOGIN_WELCOME: &'static str = "Welcome back!";
pub static MSG_LOGIN_FAILED: &'static str = "Login failed";
pub static MSG_SIGNUP_WELCOME: &'static str = "Account created — welcome!";
pub static MSG_SIGNUP_FAILED: &'static str = "Signup failed";
pub static MSG_LOAD_FAILED: &'static str = "Could not load entries";
pub static MSG_SAVED: &'static str = "Saved";
pub static MSG_SAVE_FAILED: &'static str = "Save failed";
pub static MSG_DELETED: &'static str = "Deleted";
pub static MSG_DELETE_FAILED: &'static str = "Delete failed";
pub static MSG_DELETE_CONFIRM: &'static str = "Delete this entry?";
pub static MSG_NO_ENTRIES: &'static str = "No entries yet — create your first one.";
pub static MSG_NO_TITLE: &'static str = "(No title)";

pub static MODAL_NEW: &'static str = "New Entry";
pub static MODAL_EDIT: &'static str = "Edit Entry";

pub const NOTIFY_MS: u32 = 3000;
pub const REDIRECT_DELAY_MS: u32 = 500;
