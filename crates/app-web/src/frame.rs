//! The per-frame scheduler: one requestAnimationFrame tick fans the current
//! scroll offset and elapsed time out to every subscriber and commits their
//! outputs to the scene registry and the DOM.
//!
//! Components run in a stable order within the tick but may not rely on it:
//! all read the same offset/dt and write disjoint outputs. Any write whose
//! DOM or scene handle is missing is skipped silently and retried next
//! frame.

use crate::constants::*;
use crate::dom;
use crate::overlay;
use app_core::{
    enter_style, exit_style, styles, Camera, CameraRig, Carousel, DragController, LifecycleEvent,
    Orbit, PageId, PageMachine, ParticleField, RigKind, RigMotion, SceneRegistry, ScrollTracker,
    Shake, PARTICLE_COUNT, SPINNER_STEP_RAD,
};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// The 3D state a page owns while live. Dropped whole on unmount; nothing
/// in here survives into the next mount of the same page.
pub struct PageSubscribers {
    pub page: PageId,
    pub field: Option<ParticleField>,
    pub rig: CameraRig,
}

pub struct FrameContext {
    pub document: web::Document,
    pub canvas: web::HtmlCanvasElement,
    pub scroll_container: Option<web::Element>,

    pub scroll: Rc<RefCell<ScrollTracker>>,
    pub drag: Rc<RefCell<DragController>>,
    pub pages: Rc<RefCell<PageMachine>>,
    pub scene: Rc<RefCell<SceneRegistry>>,
    /// Latest composed camera, consumed by the render collaborator.
    pub camera: Rc<RefCell<Option<Camera>>>,

    pub carousels: Vec<Carousel>,
    /// At most two entries: the live page, plus the exiting page during the
    /// bounded transition overlap.
    pub live: Vec<PageSubscribers>,

    pub last_instant: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;

        // Scroll offset is recomputed every frame, never interpolated. An
        // absent container keeps the last offset, valid if stale.
        if let Some(container) = &self.scroll_container {
            if let Some(progress) = dom::scroll_progress(container) {
                self.scroll.borrow_mut().set_progress(progress);
            }
        }
        let offset = self.scroll.borrow().offset();

        let events = self.pages.borrow_mut().tick(dt);
        for ev in events {
            match ev {
                LifecycleEvent::Mount(page) => self.mount_page(page),
                LifecycleEvent::Unmount(page) => self.unmount_page(page),
            }
        }

        let current = self.pages.borrow().current();
        let band_center = ParticleField::band_center_for_offset(offset);
        for sub in &mut self.live {
            if let Some(field) = &mut sub.field {
                field.advance(dt, band_center);
            }
            let pose = sub.rig.tick(dt);
            if sub.page == current {
                *self.camera.borrow_mut() = Some(pose);
            }
        }

        // Hero spinner advances only while its handle is mounted.
        {
            let mut scene = self.scene.borrow_mut();
            if let Some(node) = scene.node_mut(HERO_CUBE_NODE) {
                node.rotation.x += SPINNER_STEP_RAD;
                node.rotation.y += SPINNER_STEP_RAD;
            }
        }

        self.commit_overlay_styles(offset);
        self.commit_carousels(offset);
        self.commit_transitions();
    }

    /// Particle buffers of the live page for the render collaborator, or
    /// `None` while no particle field is mounted.
    pub fn particle_buffers(&self) -> Option<(&[f32], &[f32])> {
        let current = self.pages.borrow().current();
        self.live
            .iter()
            .find(|s| s.page == current)
            .and_then(|s| s.field.as_ref())
            .map(|f| (f.positions(), f.opacities()))
    }

    fn mount_page(&mut self, page: PageId) {
        overlay::show_page(&self.document, page);
        let spec = page.scene_spec();
        let aspect =
            self.canvas.width().max(1) as f32 / self.canvas.height().max(1) as f32;
        // Fresh base pose on every mount; nothing carries over.
        let base = Camera::base(aspect);
        let motion: Box<dyn RigMotion> = match spec.rig {
            RigKind::Orbit => Box::new(Orbit::default()),
            RigKind::Shake => Box::new(Shake::default()),
        };
        let field = spec
            .particles
            .then(|| ParticleField::new(PARTICLE_COUNT, random_seed()));
        if page == PageId::Home {
            self.scene.borrow_mut().register(HERO_CUBE_NODE);
        }
        log::info!("[frame] mounted {page}");
        self.live.push(PageSubscribers {
            page,
            field,
            rig: CameraRig::new(base, motion),
        });
    }

    fn unmount_page(&mut self, page: PageId) {
        self.live.retain(|s| s.page != page);
        if page == PageId::Home {
            self.scene.borrow_mut().remove(HERO_CUBE_NODE);
        }
        overlay::hide_page(&self.document, page);
        log::info!("[frame] unmounted {page}");
    }

    fn commit_overlay_styles(&self, offset: f32) {
        let vh = dom::viewport_height();
        let doc = &self.document;
        dom::set_style(
            doc,
            VIDEO_ID,
            "transform",
            &format!("scale({:.4})", styles::video_scale(offset)),
        );
        dom::set_style(
            doc,
            VIDEO_ID,
            "opacity",
            &format!("{:.4}", styles::video_opacity(offset)),
        );
        dom::set_style(
            doc,
            TITLE_ID,
            "transform",
            &format!(
                "translateY({:.1}px) scale({:.4})",
                styles::title_raise_px(offset, vh),
                styles::title_scale(offset)
            ),
        );
        dom::set_style(
            doc,
            MARKER_ID,
            "top",
            &format!("{:.1}px", styles::marker_top_px(offset, vh)),
        );
        dom::set_style(
            doc,
            PANEL_ID,
            "border-radius",
            &format!("{:.1}px", styles::panel_radius_px(offset)),
        );
    }

    fn commit_carousels(&self, offset: f32) {
        let dragged = self.drag.borrow().value();
        for (row, carousel) in self.carousels.iter().enumerate() {
            for index in 0..carousel.items.len() {
                let pos = carousel.position_of(index, offset, dragged);
                dom::set_style(
                    &self.document,
                    &format!("row-{row}-item-{index}"),
                    "transform",
                    &format!("translate3d({pos:.3}%, 0, 0)"),
                );
            }
        }
    }

    fn commit_transitions(&self) {
        let pages = self.pages.borrow();
        if let Some(progress) = pages.entering_progress() {
            overlay::apply_transition(&self.document, pages.current(), &enter_style(progress));
        }
        if let Some((page, progress)) = pages.exiting() {
            overlay::apply_transition(&self.document, page, &exit_style(progress));
        }
    }
}

fn random_seed() -> u64 {
    (js_sys::Math::random() * (1u64 << 53) as f64) as u64
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            if let Some(t) = tick_clone.borrow().as_ref() {
                _ = w.request_animation_frame(t.as_ref().unchecked_ref());
            }
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        if let Some(t) = tick.borrow().as_ref() {
            _ = w.request_animation_frame(t.as_ref().unchecked_ref());
        }
    }
}
