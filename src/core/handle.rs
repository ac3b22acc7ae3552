//! Verschiebbarer Steuerpunkt (Handle) mit Drag-Zustandsmaschine.
//!
//! Zustände: `Idle` → `Dragging` bei Pointer-Down innerhalb des Trefferradius,
//! `Dragging` → `Idle` bei jedem Pointer-Up. Während des Drags springt der
//! Handle-Mittelpunkt direkt auf die Zeigerposition (kein Greif-Versatz).

use super::error::SceneError;
use super::geometry::{HitBox, Point};
use super::pointer::{PointerEventKind, PointerSnapshot};
use super::traits::{
    HandleVisual, HitTestable, PointerDispatch, PointerObserver, Positioned, Renderable, Tickable,
};
use glam::Vec2;
use std::fmt;

/// Drag-Zustand eines Handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging,
}

/// Rückrufe eines Handles. Standard: keine Wirkung.
pub trait HandleHooks {
    /// Wird bei jeder Positionsänderung während eines Drags aufgerufen.
    fn on_move(&mut self, _index: usize, _position: Point) {}

    /// Wird bei Pointer-Up innerhalb der Hitbox aufgerufen.
    fn on_click(&mut self, _index: usize) {}
}

/// Hooks ohne Wirkung.
#[derive(Debug, Default)]
pub struct NoHooks;

impl HandleHooks for NoHooks {}

/// Steuerpunkt der Kurve, per Pointer verschiebbar.
pub struct DraggableHandle {
    index: usize,
    position: Point,
    size: Vec2,
    hit_radius: f32,
    state: DragState,
    hovered: bool,
    hooks: Box<dyn HandleHooks>,
}

impl DraggableHandle {
    /// Erstellt einen Handle aus einer Hitbox (Ursprung = Position).
    ///
    /// Der Trefferradius muss positiv und endlich sein.
    pub fn new(index: usize, hit_box: HitBox, hit_radius: f32) -> Result<Self, SceneError> {
        if !hit_radius.is_finite() || hit_radius <= 0.0 {
            return Err(SceneError::InvalidHitRadius { hit_radius });
        }
        Ok(Self::with_radius(index, hit_box, hit_radius))
    }

    /// Wie `new`, für bereits geprüfte Radien (z.B. Konstanten).
    pub(crate) fn with_radius(index: usize, hit_box: HitBox, hit_radius: f32) -> Self {
        Self {
            index,
            position: hit_box.origin(),
            size: hit_box.size(),
            hit_radius,
            state: DragState::Idle,
            hovered: false,
            hooks: Box::new(NoHooks),
        }
    }

    /// Ersetzt die Hooks des Handles.
    pub fn with_hooks(mut self, hooks: impl HandleHooks + 'static) -> Self {
        self.hooks = Box::new(hooks);
        self
    }

    /// Index in der Steuerpunkt-Reihenfolge.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        self.state == DragState::Dragging
    }

    /// Liegt der Zeiger beim letzten Tick im Trefferradius?
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Hervorgehoben zeichnen (Hover oder Drag).
    pub fn is_emphasized(&self) -> bool {
        self.hovered || self.is_dragging()
    }

    /// Setzt Position und Zustand zurück (z.B. Layout-Reset).
    pub fn reset_to(&mut self, position: Point) {
        self.position = position;
        self.state = DragState::Idle;
        self.hovered = false;
    }

    /// Pointer-Down: Drag beginnt nur innerhalb des Trefferradius.
    pub fn pointer_down(&mut self, pointer: &PointerSnapshot, drag_start_allowed: bool) -> bool {
        let hit = drag_start_allowed && self.intersects_radius(pointer.position);
        self.state = if hit {
            log::debug!("Handle {} Drag gestartet", self.index);
            DragState::Dragging
        } else {
            DragState::Idle
        };
        hit
    }

    /// Pointer-Move: Während des Drags folgt der Mittelpunkt dem Zeiger.
    pub fn pointer_move(&mut self, pointer: &PointerSnapshot) {
        if self.state != DragState::Dragging {
            return;
        }
        self.position = pointer.position;
        self.hooks.on_move(self.index, self.position);
    }

    /// Pointer-Up: beendet jeden Drag, unabhängig von der Zeigerposition.
    pub fn pointer_up(&mut self, pointer: &PointerSnapshot) {
        if self.contains_point(pointer.position) {
            self.hooks.on_click(self.index);
        }
        if self.state == DragState::Dragging {
            log::debug!("Handle {} Drag beendet", self.index);
        }
        self.state = DragState::Idle;
    }
}

impl Positioned for DraggableHandle {
    fn position(&self) -> Point {
        self.position
    }

    fn set_position(&mut self, position: Point) {
        self.position = position;
    }
}

impl HitTestable for DraggableHandle {
    fn hit_box(&self) -> HitBox {
        HitBox::new(self.position.x, self.position.y, self.size.x, self.size.y)
    }

    fn intersects_radius(&self, p: Point) -> bool {
        self.position.distance(p) <= self.hit_radius
    }
}

impl Renderable for DraggableHandle {
    fn visual(&self) -> HandleVisual {
        HandleVisual {
            position: self.position,
            radius: self.size.max_element() * 0.5,
            emphasized: self.is_emphasized(),
        }
    }
}

impl Tickable for DraggableHandle {
    fn tick(&mut self, pointer: &PointerSnapshot) {
        self.hovered = self.intersects_radius(pointer.position);
    }
}

impl PointerObserver for DraggableHandle {
    fn on_pointer(&mut self, dispatch: &PointerDispatch<'_>) -> bool {
        match dispatch.kind {
            PointerEventKind::Down => {
                self.pointer_down(dispatch.pointer, dispatch.drag_start_allowed)
            }
            PointerEventKind::Up => {
                self.pointer_up(dispatch.pointer);
                false
            }
            PointerEventKind::Move => {
                self.pointer_move(dispatch.pointer);
                false
            }
        }
    }
}

impl fmt::Debug for DraggableHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DraggableHandle")
            .field("index", &self.index)
            .field("position", &self.position)
            .field("size", &self.size)
            .field("hit_radius", &self.hit_radius)
            .field("state", &self.state)
            .field("hovered", &self.hovered)
            .finish_non_exhaustive()
    }
}
