use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, HtmlTextAreaElement, Location, Window};

pub fn get_window() -> Option<Window> {
    web_sys::window()
}

fn get_document() -> Option<Document> {
    get_window().and_then(|w| w.document())
}

fn get_value_from_input(element: JsValue) -> String {
    if let Some(element) = element.dyn_ref::<HtmlInputElement>() {
        element.value()
    } else if let Some(element) = element.dyn_ref::<HtmlTextAreaElement>() {
        element.value()
    } else {
        "".to_string()
    }
}

pub fn get_location() -> Option<Location> {
    get_window().map(|w|w.location())
}

pub fn set_title(text: &str) {
    if let Some(d) = get_document() {
        d.set_title(text);
    }
}

pub fn get_value_by_query(selectors: &str) -> String {
    query_selector(selectors)
        .map(|element|get_value_from_input(JsValue::from(element)))
        .unwrap_or_default()
}

pub fn get_input_value(name: &str) -> String {
    get_value_by_query(&format!("[name={name}]"))
}

pub fn query_selector(selectors: &str) -> Option<Element> {
    get_document().and_then(|d| d.query_selector(selectors).ok()).and_then(|e|e)
}

pub fn get_html_element(el: Option<Element>) -> Option<HtmlElement> {
    el.map(|el| el.dyn_into::<HtmlElement>().ok()).and_then(|el| el)
}

pub fn focus_input(name: &str) {
    if let Some(elem) = get_html_element(query_selector(&format!("[name={name}]"))) {
        focus_element(&elem);
    }
}

pub fn focus_element(elem: &HtmlElement) {
    if elem.focus().is_ok() {}
}

pub fn attr_data(key: &str) -> String {
    format!("data-{key}")
}

/// `data-*` value on `<body>`.
pub fn body_data(key: &str) -> Option<String> {
    get_document()
        .and_then(|d| d.body())
        .and_then(|body| body.get_attribute(&attr_data(key)))
}

pub fn location_path() -> String {
    get_location().and_then(|l| l.pathname().ok()).unwrap_or_default()
}

pub fn location_assign(path: &str) {
    if let Some(location) = get_location() {
        if let Err(err) = location.set_href(path) {
            log::error!("navigate to {path}: {:?}", err);
        }
    }
}

pub fn window_alert(message: &str) {
    if let Some(w) = get_window() {
        w.alert_with_message(message).ok();
    }
}

pub fn js_error_message(err: &JsValue) -> String {
    if let Some(err) = err.dyn_ref::<js_sys::Error>() {
        String::from(err.message())
    } else {
        err.as_string().unwrap_or_else(|| format!("{:?}", err))
    }
}
