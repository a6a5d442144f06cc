#![cfg(target_arch = "wasm32")]
use app_core::{
    Carousel, CarouselConfig, CarouselItem, DragController, PageMachine, SceneRegistry,
    ScrollTracker,
};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

pub mod checkout;
pub mod constants;
pub mod dom;
pub mod events;
pub mod frame;
pub mod input;
pub mod overlay;
pub mod router;

use constants::*;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

/// The two storefront rows. The second row scrolls reversed; the sign is
/// per-instance configuration, not derived.
fn storefront_rows() -> Vec<Carousel> {
    let front = vec![
        CarouselItem::new("VELOUR ONE", "Signature weave, midnight", "./items/one.webp"),
        CarouselItem::new("VELOUR TWO", "Brushed twill, slate", "./items/two.webp"),
        CarouselItem::new("VELOUR THREE", "Raw hem, bone", "./items/three.webp"),
        CarouselItem::new("VELOUR FOUR", "Double knit, moss", "./items/four.webp"),
        CarouselItem::new("VELOUR FIVE", "Heavy gauge, rust", "./items/five.webp"),
        CarouselItem::new("VELOUR SIX", "Loose drape, fog", "./items/six.webp"),
    ];
    let back = vec![
        CarouselItem::new("ARCHIVE 01", "First run, numbered", "./items/a01.webp"),
        CarouselItem::new("ARCHIVE 02", "Sample floor cut", "./items/a02.webp"),
        CarouselItem::new("ARCHIVE 03", "Press loan return", "./items/a03.webp"),
        CarouselItem::new("ARCHIVE 04", "Studio proof", "./items/a04.webp"),
        CarouselItem::new("ARCHIVE 05", "Unreleased colour", "./items/a05.webp"),
        CarouselItem::new("ARCHIVE 06", "Final pattern", "./items/a06.webp"),
    ];
    vec![
        Carousel::new(
            CarouselConfig {
                direction: 1.0,
                ..CarouselConfig::default()
            },
            front,
        ),
        Carousel::new(
            CarouselConfig {
                direction: -1.0,
                ..CarouselConfig::default()
            },
            back,
        ),
    ]
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("app-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #app-canvas"))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    wire_canvas_resize(&canvas);

    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    // The container may not exist yet; the tracker then holds its last
    // offset and the frame loop retries the query every tick.
    let scroll_container = document.get_element_by_id(SCROLL_CONTAINER_ID);

    let scroll = Rc::new(RefCell::new(ScrollTracker::default()));
    let drag = Rc::new(RefCell::new(DragController::new()));
    let scene = Rc::new(RefCell::new(SceneRegistry::new()));
    let camera = Rc::new(RefCell::new(None));
    let pages = Rc::new(RefCell::new(PageMachine::new(router::current_page(
        &window,
    ))));

    router::wire_hashchange(pages.clone());
    for page in app_core::PageId::ALL {
        dom::add_click_listener(&document, &format!("nav-{}", page.slug()), move || {
            router::navigate_to(page);
        });
    }
    events::wire_nav_hover(&document, NAV_BUTTON_CLASS);

    let coast = Rc::new(RefCell::new(events::CoastState::default()));
    if let Some(surface) = document.get_element_by_id(CAROUSEL_SURFACE_ID) {
        events::wire_drag(surface, drag.clone(), coast.clone());
    }

    checkout::wire_checkout_button(&document);

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        document,
        canvas,
        scroll_container,
        scroll,
        drag,
        pages,
        scene,
        camera,
        carousels: storefront_rows(),
        live: Vec::new(),
        last_instant: Instant::now(),
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}
