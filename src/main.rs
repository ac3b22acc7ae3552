//! Bézier-Handle-Editor.
//!
//! Interaktive Bézier-Kurve mit verschiebbaren Steuerpunkten (egui + eframe).

use bezier_handle_editor::{render, ui, AppController, AppIntent, AppState, EditorOptions};
use eframe::egui;

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!(
            "Bézier-Handle-Editor v{} startet...",
            env!("CARGO_PKG_VERSION")
        );

        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = EditorOptions::config_path();
        let editor_options = EditorOptions::load_from_file(&config_path);

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size(editor_options.window_size)
                .with_title("Bézier-Handle-Editor"),
            multisampling: 4,
            ..Default::default()
        };

        eframe::run_native(
            "Bézier-Handle-Editor",
            options,
            Box::new(move |_cc| {
                let state = AppState::from_options(editor_options)?;
                Ok(Box::new(EditorApp::new(state)))
            }),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct EditorApp {
    state: AppState,
    controller: AppController,
    input: ui::InputState,
    style: render::PaintStyle,
    /// Zeichenfläche des letzten Frames (vor dem ersten Layout unbekannt)
    canvas_rect: Option<egui::Rect>,
}

impl EditorApp {
    fn new(state: AppState) -> Self {
        let style = render::PaintStyle::from_options(&state.options);
        Self {
            state,
            controller: AppController::new(),
            input: ui::InputState::new(),
            style,
            canvas_rect: None,
        }
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        // Eingaben vor allen Panels verarbeiten, damit die Status-Bar den
        // Stand dieses Frames zeigt
        if let Some(rect) = self.canvas_rect {
            let mut events = self.input.collect_viewport_events(ctx, rect);
            events.push(AppIntent::FrameStarted {
                hover_pos: ui::InputState::hover_pos(ctx, rect),
            });
            self.process_events(events);
        }

        ui::render_status_bar(ctx, &self.state);

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (rect, _response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());
                self.canvas_rect = Some(rect);
                self.process_events(vec![AppIntent::ViewportResized {
                    size: [rect.width(), rect.height()],
                }]);

                let frame = self.controller.build_frame(&self.state);
                render::paint_frame(
                    ui.painter(),
                    rect,
                    &self.state.view.camera,
                    &self.style,
                    &frame,
                );
            });

        self.maybe_request_repaint(ctx);
    }
}

impl EditorApp {
    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }

    fn maybe_request_repaint(&self, ctx: &egui::Context) {
        if self.state.should_exit
            || self.state.dragging_count() > 0
            || ctx.input(|i| i.pointer.is_moving())
        {
            ctx.request_repaint();
        }
    }
}
