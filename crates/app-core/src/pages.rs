//! Page identity and the enter/exit transition state machine.
//!
//! Route changes come in from the routing adapter; the machine owns which
//! page is live, plays the bounded enter/exit overlap, and emits explicit
//! mount/unmount events so per-page 3D subscribers (particle field, camera
//! rig) are created and torn down deterministically. Subscriber state never
//! survives an unmount.

use crate::constants::*;
use crate::motion::ease_out_cubic;
use smallvec::SmallVec;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PageId {
    Home,
    About,
    Shop,
    Faq,
    Contact,
}

impl PageId {
    pub const ALL: [PageId; 5] = [
        PageId::Home,
        PageId::About,
        PageId::Shop,
        PageId::Faq,
        PageId::Contact,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            PageId::Home => "home",
            PageId::About => "about",
            PageId::Shop => "shop",
            PageId::Faq => "faq",
            PageId::Contact => "contact",
        }
    }

    /// Which 3D subscribers this page runs while live.
    pub fn scene_spec(self) -> PageSceneSpec {
        match self {
            PageId::Home => PageSceneSpec {
                rig: RigKind::Orbit,
                particles: true,
            },
            PageId::About => PageSceneSpec {
                rig: RigKind::Shake,
                particles: true,
            },
            PageId::Shop => PageSceneSpec {
                rig: RigKind::Orbit,
                particles: true,
            },
            PageId::Faq => PageSceneSpec {
                rig: RigKind::Shake,
                particles: false,
            },
            PageId::Contact => PageSceneSpec {
                rig: RigKind::Shake,
                particles: false,
            },
        }
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

#[derive(Debug, Error)]
#[error("unknown page route: {0:?}")]
pub struct ParsePageError(pub String);

impl FromStr for PageId {
    type Err = ParsePageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "home" => Ok(PageId::Home),
            "about" => Ok(PageId::About),
            "shop" => Ok(PageId::Shop),
            "faq" => Ok(PageId::Faq),
            "contact" => Ok(PageId::Contact),
            _ => Err(ParsePageError(s.to_owned())),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RigKind {
    Orbit,
    Shake,
}

#[derive(Clone, Copy, Debug)]
pub struct PageSceneSpec {
    pub rig: RigKind,
    pub particles: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Entering,
    Active,
    Exiting,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LifecycleEvent {
    Mount(PageId),
    Unmount(PageId),
}

/// Opacity/scale/blur applied to a page container at one transition instant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransitionStyle {
    pub opacity: f32,
    pub scale: f32,
    pub blur_px: f32,
}

/// Style of an entering page at `progress` in [0, 1].
pub fn enter_style(progress: f32) -> TransitionStyle {
    let t = ease_out_cubic(progress);
    TransitionStyle {
        opacity: ENTER_OPACITY_FROM + (1.0 - ENTER_OPACITY_FROM) * t,
        scale: ENTER_SCALE_FROM + (1.0 - ENTER_SCALE_FROM) * t,
        blur_px: ENTER_BLUR_FROM_PX * (1.0 - t),
    }
}

/// Style of an exiting page at `progress` in [0, 1]; runs the enter ramp in
/// reverse.
pub fn exit_style(progress: f32) -> TransitionStyle {
    enter_style(1.0 - progress.clamp(0.0, 1.0))
}

#[derive(Clone, Copy, Debug)]
struct Exit {
    page: PageId,
    elapsed: f32,
}

pub struct PageMachine {
    current: PageId,
    phase: Phase,
    enter_elapsed: f32,
    exiting: Option<Exit>,
    pending: SmallVec<[LifecycleEvent; 2]>,
}

impl PageMachine {
    /// The initial page plays its enter animation like any other; its Mount
    /// event is delivered by the first `tick`.
    pub fn new(initial: PageId) -> Self {
        let mut pending = SmallVec::new();
        pending.push(LifecycleEvent::Mount(initial));
        Self {
            current: initial,
            phase: Phase::Entering,
            enter_elapsed: 0.0,
            exiting: None,
            pending,
        }
    }

    pub fn current(&self) -> PageId {
        self.current
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Progress of the current page's enter animation, `None` once active.
    pub fn entering_progress(&self) -> Option<f32> {
        (self.phase == Phase::Entering)
            .then(|| (self.enter_elapsed / TRANSITION_DURATION_SEC).clamp(0.0, 1.0))
    }

    /// The page currently playing its exit animation, with progress.
    pub fn exiting(&self) -> Option<(PageId, f32)> {
        self.exiting
            .map(|e| (e.page, (e.elapsed / TRANSITION_DURATION_SEC).clamp(0.0, 1.0)))
    }

    /// React to a route change. Requests to the current page, or while a
    /// transition is in flight, are ignored; the overlap window stays
    /// bounded to one exiting page.
    pub fn request(&mut self, target: PageId) {
        if target == self.current {
            return;
        }
        if self.exiting.is_some() || self.phase == Phase::Entering {
            log::debug!("[pages] transition in flight, ignoring {target}");
            return;
        }
        log::info!("[pages] {} -> {}", self.current, target);
        self.exiting = Some(Exit {
            page: self.current,
            elapsed: 0.0,
        });
        self.pending.push(LifecycleEvent::Mount(target));
        self.current = target;
        self.phase = Phase::Entering;
        self.enter_elapsed = 0.0;
    }

    /// Advance transition timers and collect this frame's lifecycle events.
    /// Unmount fires exactly once, when the exit animation completes.
    pub fn tick(&mut self, dt: f32) -> SmallVec<[LifecycleEvent; 2]> {
        let mut out = std::mem::take(&mut self.pending);

        if self.phase == Phase::Entering {
            self.enter_elapsed += dt;
            if self.enter_elapsed >= TRANSITION_DURATION_SEC {
                self.phase = Phase::Active;
            }
        }

        if let Some(exit) = &mut self.exiting {
            exit.elapsed += dt;
            if exit.elapsed >= TRANSITION_DURATION_SEC {
                out.push(LifecycleEvent::Unmount(exit.page));
                self.exiting = None;
            }
        }

        out
    }
}
