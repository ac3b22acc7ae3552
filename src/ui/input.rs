//! Viewport-Input-Handling: egui-Rohereignisse → AppIntent.
//!
//! Ereignisse werden in der Reihenfolge übersetzt, in der egui sie liefert.
//! Positionen sind lokal zur Zeichenfläche (linke obere Ecke = Ursprung).

use super::keyboard;
use crate::app::AppIntent;
use crate::core::PointerButtons;
use glam::Vec2;

/// Verwaltet den Tasten-Zustand des Zeigers über Frames hinweg.
#[derive(Debug, Default)]
pub struct InputState {
    buttons: u8,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self { buttons: 0 }
    }

    /// Sammelt Viewport-Events aus egui-Input und gibt AppIntents zurück.
    ///
    /// Liest direkt vom `Context`, damit die Events vor dem Layout der Panels
    /// verarbeitet werden können. Pointer-Down zählt nur innerhalb von `rect`,
    /// Pointer-Up immer, damit ein Drag außerhalb der Fläche trotzdem endet.
    pub fn collect_viewport_events(
        &mut self,
        ctx: &egui::Context,
        rect: egui::Rect,
    ) -> Vec<AppIntent> {
        let events = ctx.input(|i| i.events.clone());
        events
            .iter()
            .filter_map(|event| self.translate(event, rect))
            .collect()
    }

    /// Letzte bekannte Zeigerposition lokal zur Zeichenfläche.
    pub fn hover_pos(ctx: &egui::Context, rect: egui::Rect) -> Option<Vec2> {
        ctx.input(|i| i.pointer.hover_pos())
            .map(|pos| to_local(pos, rect.min))
    }

    fn translate(&mut self, event: &egui::Event, rect: egui::Rect) -> Option<AppIntent> {
        match event {
            egui::Event::PointerMoved(pos) => Some(AppIntent::PointerMoved {
                screen_pos: to_local(*pos, rect.min),
            }),
            egui::Event::PointerButton {
                pos,
                button,
                pressed: true,
                ..
            } => {
                if !rect.contains(*pos) {
                    return None;
                }
                self.buttons |= button_bit(*button);
                Some(AppIntent::PointerPressed {
                    screen_pos: to_local(*pos, rect.min),
                    buttons: self.buttons,
                })
            }
            egui::Event::PointerButton {
                pos,
                button,
                pressed: false,
                ..
            } => {
                self.buttons &= !button_bit(*button);
                Some(AppIntent::PointerReleased {
                    screen_pos: to_local(*pos, rect.min),
                    buttons: self.buttons,
                })
            }
            other => keyboard::key_intent(other),
        }
    }
}

/// Bit einer egui-Taste in der Tasten-Bitmaske (Zusatztasten: 0).
pub fn button_bit(button: egui::PointerButton) -> u8 {
    match button {
        egui::PointerButton::Primary => PointerButtons::PRIMARY,
        egui::PointerButton::Secondary => PointerButtons::SECONDARY,
        egui::PointerButton::Middle => PointerButtons::MIDDLE,
        egui::PointerButton::Extra1 | egui::PointerButton::Extra2 => 0,
    }
}

fn to_local(pos: egui::Pos2, origin: egui::Pos2) -> Vec2 {
    Vec2::new(pos.x - origin.x, pos.y - origin.y)
}
