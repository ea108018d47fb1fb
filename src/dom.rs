use crate::error::MountError;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Resolves once the document has been parsed.
pub async fn dom_ready(document: &web::Document) {
    if document.ready_state() != "loading" {
        return;
    }
    let doc = document.clone();
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        _ = doc.add_event_listener_with_callback("DOMContentLoaded", &resolve);
    });
    _ = JsFuture::from(promise).await;
}

#[inline]
pub fn query(root: &web::Element, selector: &str) -> Option<web::Element> {
    root.query_selector(selector).ok().flatten()
}

pub fn require_html(root: &web::Element, selector: &'static str) -> Result<web::HtmlElement, MountError> {
    query(root, selector)
        .ok_or(MountError::MissingElement(selector))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|_| MountError::NotHtmlElement(selector))
}

pub fn optional<T: JsCast>(root: &web::Element, selector: &str) -> Option<T> {
    query(root, selector).and_then(|el| el.dyn_into::<T>().ok())
}

pub fn elements(list: &web::NodeList) -> Vec<web::Element> {
    js_sys::Array::from(list)
        .iter()
        .filter_map(|v| v.dyn_into::<web::Element>().ok())
        .collect()
}

pub fn children(el: &web::Element) -> Vec<web::Element> {
    let list = el.children();
    (0..list.length()).filter_map(|i| list.item(i)).collect()
}

/// Element a DOM event was dispatched to, if it is one.
#[inline]
pub fn event_element(ev: &web::Event) -> Option<web::Element> {
    ev.target().and_then(|t| t.dyn_into::<web::Element>().ok())
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

#[inline]
pub fn clear_style(el: &web::HtmlElement, property: &str) {
    _ = el.style().remove_property(property);
}

/// Trimmed computed style value; empty values read as absent.
pub fn computed_property(el: &web::Element, property: &str) -> Option<String> {
    let style = web::window()?.get_computed_style(el).ok().flatten()?;
    let value = style.get_property_value(property).ok()?;
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

#[inline]
pub fn center_x(el: &web::Element) -> f64 {
    let rect = el.get_bounding_client_rect();
    rect.left() + rect.width() / 2.0
}

/// Force a style flush so the next transform change animates from the
/// value set just before.
#[inline]
pub fn flush_layout(el: &web::HtmlElement) {
    _ = el.offset_width();
}

/// Attach a listener that lives as long as the page.
pub fn listen<E>(target: &web::EventTarget, event: &str, handler: impl FnMut(E) + 'static)
where
    E: FromWasmAbi + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Capture-phase listener.
pub fn listen_capture<E>(target: &web::EventTarget, event: &str, handler: impl FnMut(E) + 'static)
where
    E: FromWasmAbi + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    _ = target.add_event_listener_with_callback_and_bool(
        event,
        closure.as_ref().unchecked_ref(),
        true,
    );
    closure.forget();
}

/// Non-passive listener, for handlers that call `prevent_default` on
/// wheel or touch input.
pub fn listen_active<E>(target: &web::EventTarget, event: &str, handler: impl FnMut(E) + 'static)
where
    E: FromWasmAbi + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(false);
    _ = target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        &opts,
    );
    closure.forget();
}

#[inline]
pub fn on_click(el: &web::Element, mut handler: impl FnMut() + 'static) {
    listen(el, "click", move |_: web::MouseEvent| handler());
}
