use crate::elements::app_root::app_root;

mod elements;
mod utils;
mod constants;
mod dialog;
mod notifier;
mod runtime;
mod connect_fetch;

#[cfg(all(test, target_arch = "wasm32"))]
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    dominator::append_dom(&dominator::body(), app_root());
}
