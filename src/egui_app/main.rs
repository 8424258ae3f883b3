/**
 * egui Native Desktop App - Main Entry Point
 *
 * Sets up logging, runs the notes client, and turns any bootstrap failure
 * into a plain error message instead of a panic trace.
 */
use eframe::egui;
use keepnotes::egui_app::{views, AppState};
use keepnotes::egui_app::theme::styles;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([720.0, 480.0]),
        ..Default::default()
    };

    let result = eframe::run_native(
        "Keep Clone",
        options,
        Box::new(|cc| {
            styles::apply_global_theme(&cc.egui_ctx);
            Ok(Box::new(NotesApp::default()))
        }),
    );

    if let Err(e) = result {
        tracing::error!("Error starting app: {}", e);
        eprintln!("Application failed to start. Please try restarting it.");
        std::process::exit(1);
    }
}

/// Main application
struct NotesApp {
    state: AppState,
}

impl Default for NotesApp {
    fn default() -> Self {
        Self {
            state: AppState::new(),
        }
    }
}

impl eframe::App for NotesApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        views::render_top_bar(ctx, &mut self.state);

        views::render_main_panel(ctx, &mut self.state);

        // Background results arrive over channels, so keep frames coming
        ctx.request_repaint_after(std::time::Duration::from_millis(100));
    }
}
