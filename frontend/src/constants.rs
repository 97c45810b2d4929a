pub static PROP_PLACEHOLDER: &'static str = "placeholder";
pub static PROP_TITLE: &'static str = "title";
pub static PROP_NAME: &'static str = "name";
pub static PROP_TYPE: &'static str = "type";
pub static PROP_VALUE: &'static str = "value";
pub static PROP_HREF: &'static str = "href";
pub static PROP_AUTOCOMPLETE: &'static str = "autocomplete";
pub static PROP_ROLE: &'static str = "role";

pub static TAG_DIV: &'static str = "div";
pub static TAG_SPAN: &'static str = "span";
pub static TAG_INPUT: &'static str = "input";
pub static TAG_TEXTAREA: &'static str = "textarea";
pub static TAG_BUTTON: &'static str = "button";
pub static TAG_LINK: &'static str = "a";

pub static ATTR_PAGE: &'static str = "page";

pub const KEY_ENTER: &str = "Enter";
pub const KEY_ESCAPE: &str = "Escape";
