use app_core::{PageId, TransitionStyle};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn page_container_id(page: PageId) -> String {
    format!("page-{}", page.slug())
}

#[inline]
pub fn show_page(document: &web::Document, page: PageId) {
    if let Some(el) = document.get_element_by_id(&page_container_id(page)) {
        let cl = el.class_list();
        _ = cl.remove_1("hidden");
        // fallback for environments without CSS class
        _ = el.set_attribute("style", "");
    }
}

#[inline]
pub fn hide_page(document: &web::Document, page: PageId) {
    if let Some(el) = document.get_element_by_id(&page_container_id(page)) {
        let cl = el.class_list();
        _ = cl.add_1("hidden");
        // fallback
        _ = el.set_attribute("style", "display:none");
    }
}

/// Commit one transition instant to a page container. Returns `false` when
/// the container is not mounted yet (skipped, retried next frame).
pub fn apply_transition(document: &web::Document, page: PageId, style: &TransitionStyle) -> bool {
    let Some(el) = document.get_element_by_id(&page_container_id(page)) else {
        return false;
    };
    let Some(el) = el.dyn_ref::<web::HtmlElement>() else {
        return false;
    };
    let css = el.style();
    _ = css.set_property("opacity", &format!("{:.4}", style.opacity));
    _ = css.set_property("transform", &format!("scale({:.4})", style.scale));
    _ = css.set_property("filter", &format!("blur({:.2}px)", style.blur_px));
    true
}
