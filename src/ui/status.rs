//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;
use crate::core::PointerButtons;
use crate::shared::DragPolicy;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            let pointer = state.router.snapshot();
            ui.label(format!(
                "Zeiger: ({:.1}, {:.1}) [{}]",
                pointer.position.x,
                pointer.position.y,
                buttons_label(pointer.buttons)
            ));

            ui.separator();

            let config = state.scene.config();
            ui.label(format!(
                "Handles: {} | Kurve: {} Punkte, Auflösung {}",
                state.scene.handle_count(),
                config.use_points().min(state.scene.handle_count()),
                config.resolution()
            ));

            ui.separator();

            let dragging = state.dragging_count();
            if dragging > 0 {
                ui.label(format!(
                    "Ziehe: {} ({})",
                    dragging,
                    policy_label(state.router.policy())
                ));
            } else {
                ui.label(format!("Ziehe: - ({})", policy_label(state.router.policy())));
            }

            ui.separator();

            let keys: Vec<&str> = state.keyboard.pressed().collect();
            if keys.is_empty() {
                ui.label("Tasten: -");
            } else {
                ui.label(format!("Tasten: {}", keys.join(" + ")));
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label("R: Reset | Esc: Beenden");
            });
        });
    });
}

/// Kurzform der gedrückten Zeigertasten (L = primär, M = mittel, R = sekundär).
fn buttons_label(buttons: PointerButtons) -> String {
    if !buttons.any() {
        return "-".to_owned();
    }
    [
        (buttons.primary, "L"),
        (buttons.middle, "M"),
        (buttons.secondary, "R"),
    ]
    .iter()
    .filter(|(pressed, _)| *pressed)
    .map(|(_, name)| *name)
    .collect::<Vec<_>>()
    .join("+")
}

fn policy_label(policy: DragPolicy) -> &'static str {
    match policy {
        DragPolicy::FirstMatch => "erster Treffer",
        DragPolicy::AllMatch => "alle Treffer",
    }
}
