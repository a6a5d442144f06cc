//! Pointer drag with inertial coasting.
//!
//! Idle -> Dragging -> Coasting -> Idle. The controller owns only the
//! numeric state; the web glue maps pointer events onto these methods and
//! schedules `coast_step` on its own animation-frame chain (cancelled when a
//! new gesture begins).

use crate::constants::{DRAG_DECAY, DRAG_REST_THRESHOLD};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragPhase {
    #[default]
    Idle,
    Dragging,
    Coasting,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct DragController {
    dragged_value: f32,
    velocity: f32,
    phase: DragPhase,
    last_pointer_x: f32,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    /// Accumulated drag distance, consumed by the carousel position formula.
    pub fn value(&self) -> f32 {
        self.dragged_value
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    /// Begin a gesture at pointer x. Cancels any in-flight coasting.
    ///
    /// Returns `false` when a gesture is already in progress: a second
    /// concurrent pointer is ignored rather than corrupting the capture.
    pub fn pointer_down(&mut self, x: f32) -> bool {
        if self.phase == DragPhase::Dragging {
            return false;
        }
        self.phase = DragPhase::Dragging;
        self.velocity = 0.0;
        self.last_pointer_x = x;
        true
    }

    /// Pointer moved to x while dragging. The latest delta wins; deltas are
    /// never averaged.
    pub fn pointer_move(&mut self, x: f32) {
        if self.phase != DragPhase::Dragging {
            return;
        }
        let dx = x - self.last_pointer_x;
        self.last_pointer_x = x;
        self.dragged_value += dx;
        self.velocity = dx;
    }

    /// Release the gesture. A pointer-up with no preceding pointer-down is a
    /// no-op.
    pub fn pointer_up(&mut self) {
        if self.phase != DragPhase::Dragging {
            return;
        }
        self.phase = DragPhase::Coasting;
    }

    /// One frame of inertial coasting. Returns `true` while the coast loop
    /// should keep running; once |velocity| drops below the rest threshold it
    /// is pinned to exactly 0 and the controller returns to idle.
    pub fn coast_step(&mut self) -> bool {
        if self.phase != DragPhase::Coasting {
            return false;
        }
        self.dragged_value += self.velocity;
        self.velocity *= DRAG_DECAY;
        if self.velocity.abs() < DRAG_REST_THRESHOLD {
            self.velocity = 0.0;
            self.phase = DragPhase::Idle;
            return false;
        }
        true
    }
}
