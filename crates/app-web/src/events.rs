//! Pointer gesture wiring for the carousel, plus nav button hover circles.
//!
//! The pointerdown listener lives as long as the drag surface. Move/up
//! listeners are scoped to one gesture: registered on pointer-down,
//! deregistered exactly once on pointer-up. The coasting animation-frame
//! chain is separate from the main render loop and is cancelled whenever a
//! new gesture begins, so two chains can never run at once.

use crate::constants::HOVER_CIRCLE_SELECTOR;
use crate::input;
use app_core::{DragController, DragPhase};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// The in-flight coasting loop. `raf_id` is the cancel handle for the next
/// scheduled step; `tick` keeps the closure alive between steps.
#[derive(Default)]
pub struct CoastState {
    raf_id: Option<i32>,
    tick: Option<Closure<dyn FnMut()>>,
}

pub fn cancel_coast(coast: &Rc<RefCell<CoastState>>) {
    let mut c = coast.borrow_mut();
    if let Some(id) = c.raf_id.take() {
        if let Some(w) = web::window() {
            _ = w.cancel_animation_frame(id);
        }
    }
}

pub fn start_coast(coast: &Rc<RefCell<CoastState>>, drag: &Rc<RefCell<DragController>>) {
    let coast_in = coast.clone();
    let drag_in = drag.clone();
    let tick = Closure::wrap(Box::new(move || {
        let more = drag_in.borrow_mut().coast_step();
        let mut c = coast_in.borrow_mut();
        c.raf_id = None;
        if more {
            if let (Some(w), Some(t)) = (web::window(), c.tick.as_ref()) {
                if let Ok(id) = w.request_animation_frame(t.as_ref().unchecked_ref()) {
                    c.raf_id = Some(id);
                }
            }
        }
    }) as Box<dyn FnMut()>);

    let mut c = coast.borrow_mut();
    c.tick = Some(tick);
    if let (Some(w), Some(t)) = (web::window(), c.tick.as_ref()) {
        if let Ok(id) = w.request_animation_frame(t.as_ref().unchecked_ref()) {
            c.raf_id = Some(id);
        }
    }
}

struct GestureListeners {
    on_move: Closure<dyn FnMut(web::PointerEvent)>,
    on_up: Closure<dyn FnMut(web::PointerEvent)>,
}

impl GestureListeners {
    fn attach(&self, window: &web::Window) {
        _ = window
            .add_event_listener_with_callback("pointermove", self.on_move.as_ref().unchecked_ref());
        _ = window
            .add_event_listener_with_callback("pointerup", self.on_up.as_ref().unchecked_ref());
    }

    fn detach(&self, window: &web::Window) {
        _ = window.remove_event_listener_with_callback(
            "pointermove",
            self.on_move.as_ref().unchecked_ref(),
        );
        _ = window
            .remove_event_listener_with_callback("pointerup", self.on_up.as_ref().unchecked_ref());
    }
}

/// Per-gesture listener slot. `retired` parks the pair detached during the
/// up dispatch — the up closure cannot drop itself while still on the stack —
/// and is freed when the next gesture starts.
#[derive(Default)]
struct GestureSlot {
    active: Option<GestureListeners>,
    retired: Option<GestureListeners>,
}

/// Wire the drag surface. One persistent pointerdown listener; everything
/// else is acquired and released per gesture.
pub fn wire_drag(
    surface: web::Element,
    drag: Rc<RefCell<DragController>>,
    coast: Rc<RefCell<CoastState>>,
) {
    let slot: Rc<RefCell<GestureSlot>> = Rc::new(RefCell::new(GestureSlot::default()));
    let surface_capture = surface.clone();

    let on_down = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if !drag.borrow_mut().pointer_down(input::pointer_client_x(&ev)) {
            // second concurrent pointer; the active gesture keeps the capture
            return;
        }
        cancel_coast(&coast);
        slot.borrow_mut().retired = None;

        let drag_move = drag.clone();
        let on_move = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            drag_move.borrow_mut().pointer_move(input::pointer_client_x(&ev));
        }) as Box<dyn FnMut(_)>);

        let drag_up = drag.clone();
        let coast_up = coast.clone();
        let slot_up = slot.clone();
        let on_up = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
            drag_up.borrow_mut().pointer_up();
            let taken = slot_up.borrow_mut().active.take();
            if let Some(pair) = taken {
                if let Some(w) = web::window() {
                    pair.detach(&w);
                }
                slot_up.borrow_mut().retired = Some(pair);
            }
            if drag_up.borrow().phase() == DragPhase::Coasting {
                start_coast(&coast_up, &drag_up);
            }
        }) as Box<dyn FnMut(_)>);

        let pair = GestureListeners { on_move, on_up };
        if let Some(w) = web::window() {
            pair.attach(&w);
        }
        slot.borrow_mut().active = Some(pair);

        _ = surface_capture.set_pointer_capture(ev.pointer_id());
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);

    _ = surface.add_event_listener_with_callback("pointerdown", on_down.as_ref().unchecked_ref());
    on_down.forget();
}

/// Position each nav button's hover circle under the cursor, original
/// markup contract: a `.buttonHoverCircle` child inside each `.button`.
pub fn wire_nav_hover(document: &web::Document, button_class: &str) {
    let buttons = document.get_elements_by_class_name(button_class);
    for i in 0..buttons.length() {
        if let Some(button) = buttons.item(i) {
            wire_button_hover(button);
        }
    }
}

fn wire_button_hover(button: web::Element) {
    let btn = button.clone();
    let on_move = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let rect = btn.get_bounding_client_rect();
        let p = input::local_point(
            ev.client_x() as f64,
            ev.client_y() as f64,
            rect.left(),
            rect.top(),
        );
        if let Ok(Some(circle)) = btn.query_selector(HOVER_CIRCLE_SELECTOR) {
            if let Some(c) = circle.dyn_ref::<web::HtmlElement>() {
                _ = c.style().set_property("display", "block");
                _ = c.style().set_property("left", &format!("{:.0}px", p.x));
                _ = c.style().set_property("top", &format!("{:.0}px", p.y));
            }
        }
    }) as Box<dyn FnMut(_)>);
    _ = button.add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref());
    on_move.forget();

    let btn = button.clone();
    let on_leave = Closure::wrap(Box::new(move |_ev: web::MouseEvent| {
        if let Ok(Some(circle)) = btn.query_selector(HOVER_CIRCLE_SELECTOR) {
            if let Some(c) = circle.dyn_ref::<web::HtmlElement>() {
                _ = c.style().set_property("display", "none");
            }
        }
    }) as Box<dyn FnMut(_)>);
    _ = button.add_event_listener_with_callback("mouseleave", on_leave.as_ref().unchecked_ref());
    on_leave.forget();
}
