//! Pointer-Router: Rohereignisse → Snapshot → Zustellung an Beobachter.
//!
//! Ersetzt einen globalen Zustand mit Ereignis-Abos durch eine explizite
//! Registry, die pro Ereignisart die Beobachter in Registrierungsreihenfolge hält.
//! Jedes Rohereignis überschreibt den Snapshot und wird sofort synchron
//! zugestellt, ohne Bündelung oder Entprellung.

use crate::core::{
    Camera2D, PointerButtons, PointerDispatch, PointerEventKind, PointerObserver, PointerSnapshot,
    RawPointerEvent,
};
use crate::shared::DragPolicy;
use glam::Vec2;
use indexmap::IndexMap;

/// Alle Ereignisarten, die ein Handle abonniert.
const ALL_KINDS: [PointerEventKind; 3] = [
    PointerEventKind::Down,
    PointerEventKind::Move,
    PointerEventKind::Up,
];

/// Hält den Pointer-Snapshot und die Abo-Registry.
#[derive(Debug, Clone, Default)]
pub struct PointerRouter {
    snapshot: PointerSnapshot,
    subscriptions: IndexMap<PointerEventKind, Vec<usize>>,
    policy: DragPolicy,
}

impl PointerRouter {
    /// Erstellt einen Router ohne Abonnenten.
    pub fn new(policy: DragPolicy) -> Self {
        Self {
            snapshot: PointerSnapshot::default(),
            subscriptions: IndexMap::new(),
            policy,
        }
    }

    /// Registriert einen Beobachter (Index in die Beobachter-Liste) für eine Ereignisart.
    ///
    /// Doppelte Registrierungen werden ignoriert, die Reihenfolge bleibt erhalten.
    pub fn subscribe(&mut self, kind: PointerEventKind, observer: usize) {
        let list = self.subscriptions.entry(kind).or_default();
        if !list.contains(&observer) {
            list.push(observer);
        }
    }

    /// Registriert einen Beobachter für Down, Move und Up.
    pub fn subscribe_all(&mut self, observer: usize) {
        for kind in ALL_KINDS {
            self.subscribe(kind, observer);
        }
    }

    /// Abonnenten einer Ereignisart in Zustellreihenfolge.
    pub fn subscribers(&self, kind: PointerEventKind) -> &[usize] {
        self.subscriptions
            .get(&kind)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Zuletzt bekannter Pointer-Zustand.
    pub fn snapshot(&self) -> &PointerSnapshot {
        &self.snapshot
    }

    /// Aktive Regel für überlappende Trefferradien.
    pub fn policy(&self) -> DragPolicy {
        self.policy
    }

    /// Überschreibt den Snapshot mit einem Rohereignis und stellt es zu.
    ///
    /// Gibt die Anzahl der Beobachter zurück, bei denen dadurch ein Drag begann.
    pub fn route<O: PointerObserver>(
        &mut self,
        raw: &RawPointerEvent,
        camera: &Camera2D,
        observers: &mut [O],
    ) -> usize {
        let buttons = match raw.kind {
            PointerEventKind::Down | PointerEventKind::Up => PointerButtons::from_bits(raw.buttons),
            PointerEventKind::Move => self.snapshot.buttons,
        };
        self.overwrite(camera.screen_to_scene(raw.position), buttons);
        self.dispatch(raw.kind, observers)
    }

    /// Frame-Aktualisierung: Snapshot überschreiben, keine Zustellung.
    pub fn refresh(&mut self, screen_position: Vec2, camera: &Camera2D) {
        let buttons = self.snapshot.buttons;
        self.overwrite(camera.screen_to_scene(screen_position), buttons);
    }

    fn overwrite(&mut self, scene_position: Vec2, buttons: PointerButtons) {
        self.snapshot = PointerSnapshot {
            position: scene_position,
            previous_position: self.snapshot.position,
            buttons,
        };
    }

    fn dispatch<O: PointerObserver>(&self, kind: PointerEventKind, observers: &mut [O]) -> usize {
        let mut started = 0;
        for &id in self.subscribers(kind) {
            let Some(observer) = observers.get_mut(id) else {
                log::warn!("Pointer-Abonnent {} existiert nicht mehr", id);
                continue;
            };
            let drag_start_allowed = match self.policy {
                DragPolicy::AllMatch => true,
                DragPolicy::FirstMatch => started == 0,
            };
            let dispatch = PointerDispatch {
                kind,
                pointer: &self.snapshot,
                drag_start_allowed,
            };
            if observer.on_pointer(&dispatch) {
                started += 1;
            }
        }
        started
    }
}
