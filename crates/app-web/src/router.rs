//! Hash-route adapter. URL parsing stays with the browser; this module only
//! maps the hash's route portion onto a page identity and forwards it to the
//! page machine. Unknown routes are logged and ignored.

use crate::input;
use app_core::{PageId, PageMachine};
use std::cell::RefCell;
use std::rc::Rc;
use std::str::FromStr;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Page identity for the window's current hash, defaulting to home.
pub fn current_page(window: &web::Window) -> PageId {
    let hash = window.location().hash().unwrap_or_default();
    match PageId::from_str(input::route_of_hash(&hash)) {
        Ok(page) => page,
        Err(e) => {
            log::warn!("[router] {e}, defaulting to home");
            PageId::Home
        }
    }
}

pub fn wire_hashchange(pages: Rc<RefCell<PageMachine>>) {
    if let Some(window) = web::window() {
        let win = window.clone();
        let closure = Closure::wrap(Box::new(move |_ev: web::HashChangeEvent| {
            let hash = win.location().hash().unwrap_or_default();
            match PageId::from_str(input::route_of_hash(&hash)) {
                Ok(page) => pages.borrow_mut().request(page),
                Err(e) => log::warn!("[router] {e}"),
            }
        }) as Box<dyn FnMut(_)>);
        let _ =
            window.add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Fire a transition request by updating the hash.
pub fn navigate_to(page: PageId) {
    if let Some(w) = web::window() {
        _ = w.location().set_hash(&format!("#/{}", page.slug()));
    }
}
