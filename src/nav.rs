use crate::core::disclosure::{aria_bool, menu_display, toggled_expanded};
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Mobile menu button: toggles `open` on the link list and mirrors it into
/// `aria-expanded`.
fn mount_menu_toggle(document: &web::Document) -> bool {
    let (Some(toggle), Some(links)) = (
        document.query_selector(".nav-toggle").ok().flatten(),
        document.query_selector(".nav-links").ok().flatten(),
    ) else {
        return false;
    };
    let btn = toggle.clone();
    dom::on_click(&toggle, move || {
        let open = links.class_list().toggle("open").unwrap_or(false);
        _ = btn.set_attribute("aria-expanded", aria_bool(open));
    });
    true
}

/// Projects dropdown: flips `aria-expanded` and shows or hides the menu.
fn mount_dropdown(document: &web::Document) -> bool {
    let (Some(button), Some(menu)) = (
        document.query_selector(".dropdown-btn").ok().flatten(),
        document
            .query_selector(".dropdown-menu")
            .ok()
            .flatten()
            .and_then(|m| m.dyn_into::<web::HtmlElement>().ok()),
    ) else {
        return false;
    };
    let btn = button.clone();
    dom::on_click(&button, move || {
        let expanded = toggled_expanded(btn.get_attribute("aria-expanded").as_deref());
        _ = btn.set_attribute("aria-expanded", aria_bool(expanded));
        dom::set_style(&menu, "display", menu_display(expanded));
    });
    true
}

pub fn mount(document: &web::Document) {
    let menu = mount_menu_toggle(document);
    let dropdown = mount_dropdown(document);
    log::debug!("[nav] menu_toggle={} dropdown={}", menu, dropdown);
}
