use gloo_timers::future::sleep;
use std::time::Duration;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

// Fresh container per test; mounted apps are never removed, so every query
// goes through the container rather than the whole document.
pub fn mount_container(id: &str) -> HtmlElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let container = document
        .create_element("div")
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap();
    container.set_id(id);
    document.body().unwrap().append_child(&container).unwrap();
    container
}

pub fn find(container: &HtmlElement, selector: &str) -> Option<Element> {
    container.query_selector(selector).unwrap()
}

pub fn count(container: &HtmlElement, selector: &str) -> u32 {
    container.query_selector_all(selector).unwrap().length()
}

pub fn text_of(container: &HtmlElement, selector: &str) -> Vec<String> {
    let nodes = container.query_selector_all(selector).unwrap();
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.text_content())
        .collect()
}

pub fn click(container: &HtmlElement, selector: &str) {
    find(container, selector)
        .unwrap_or_else(|| panic!("nothing matches {selector}"))
        .dyn_into::<HtmlElement>()
        .unwrap()
        .click();
}

// Lets effects and local resources run
pub async fn settle() {
    sleep(Duration::from_millis(50)).await;
}

// Bubbling, cancelable event so Leptos' delegated listeners see it
pub fn bubbling_event(name: &str) -> web_sys::Event {
    let init = web_sys::EventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    web_sys::Event::new_with_event_init_dict(name, &init).unwrap()
}

// Types into an input, textarea or select the way a user would
pub fn set_field(container: &HtmlElement, selector: &str, value: &str) {
    let field = find(container, selector).unwrap_or_else(|| panic!("nothing matches {selector}"));
    if let Some(input) = field.dyn_ref::<web_sys::HtmlInputElement>() {
        input.set_value(value);
    } else if let Some(area) = field.dyn_ref::<web_sys::HtmlTextAreaElement>() {
        area.set_value(value);
    } else if let Some(select) = field.dyn_ref::<web_sys::HtmlSelectElement>() {
        select.set_value(value);
    } else {
        panic!("{selector} is not a form field");
    }
    field.dispatch_event(&bubbling_event("input")).unwrap();
    field.dispatch_event(&bubbling_event("change")).unwrap();
}

pub fn press_escape(target: &web_sys::EventTarget) {
    let init = web_sys::KeyboardEventInit::new();
    init.set_key("Escape");
    init.set_bubbles(true);
    init.set_cancelable(true);
    let event = web_sys::KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
    target.dispatch_event(&event).unwrap();
}

// Points the browser at `path` so a freshly mounted Router matches it
pub fn go_to(path: &str) {
    web_sys::window()
        .unwrap()
        .history()
        .unwrap()
        .push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(path))
        .unwrap();
}
