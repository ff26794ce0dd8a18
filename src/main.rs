#![windows_subsystem = "windows"]
//! Dice Roller - Main entry point

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

mod animation;
mod app;
mod constants;
mod roll;
mod settings;
mod theme;
mod types;
mod ui;
mod utils;

use app::App;
use constants::*;
use eframe::egui;
use tracing::{debug, info};
use types::Face;
use utils::{get_data_dir, rasterize_svg_square};

/// Initialize file logging. Returns a guard that must be held for the app lifetime.
fn init_logging(data_dir: &std::path::Path) -> tracing_appender::non_blocking::WorkerGuard {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let logs_dir = data_dir.join("logs");
    std::fs::create_dir_all(&logs_dir).ok();

    let file_appender = tracing_appender::rolling::daily(&logs_dir, "dice-roller.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,dice_roller=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    guard
}

/// Window/taskbar icon drawn from the six face
fn window_icon() -> Option<egui::IconData> {
    let svg = ui::faces::face_svg(Face::Six);
    let (rgba, width, height) = rasterize_svg_square(&svg, theme::ICON_SIZE)?;
    Some(egui::IconData {
        rgba,
        width,
        height,
    })
}

fn main() -> eframe::Result<()> {
    let data_dir = get_data_dir();
    std::fs::create_dir_all(&data_dir).ok();

    // Initialize logging - guard must live for entire app lifetime
    let _log_guard = init_logging(&data_dir);

    info!(version = APP_VERSION, "Dice Roller starting");

    // Load saved window position/size
    let settings = settings::Settings::load(&data_dir);
    let (default_w, default_h) = theme::WINDOW_DEFAULT;
    let (min_w, min_h) = theme::WINDOW_MIN;

    let mut viewport = egui::ViewportBuilder::default()
        .with_inner_size(settings.window_size().unwrap_or(egui::vec2(default_w, default_h)))
        .with_min_inner_size([min_w, min_h])
        .with_title(APP_NAME);

    if let Some(icon) = window_icon() {
        viewport = viewport.with_icon(std::sync::Arc::new(icon));
    }

    let win_pos = settings.window_pos();
    let needs_center = win_pos.is_none();

    if let Some(pos) = win_pos {
        viewport = viewport.with_position(pos);
    }

    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        APP_NAME,
        options,
        Box::new(move |cc| {
            let mut app = App::new(cc, &settings, data_dir);
            app.needs_center = needs_center;
            Ok(Box::new(app))
        }),
    )
}

// ============================================================================
// MAIN UPDATE LOOP
// ============================================================================

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Track window position/size for saving on exit
        ctx.input(|i| {
            if let Some(rect) = i.viewport().outer_rect {
                self.window_pos = Some(rect.min);
            }
            if let Some(rect) = i.viewport().inner_rect {
                self.window_size = Some(rect.size());
            }
        });

        // Center window on first launch
        if self.needs_center {
            self.needs_center = false;
            if let Some(cmd) = egui::ViewportCommand::center_on_screen(ctx) {
                ctx.send_viewport_cmd(cmd);
            }
        }

        // Space/Enter roll as well, unless a widget has keyboard focus
        let nothing_focused = ctx.memory(|m| m.focused().is_none());
        if nothing_focused
            && ctx.input(|i| i.key_pressed(egui::Key::Space) || i.key_pressed(egui::Key::Enter))
        {
            debug!("Roll triggered from keyboard");
            self.roll(ctx);
        }

        self.render_screen(ctx);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        info!(rolls = self.roller.roll_count(), "Application shutting down");
        self.save_settings();
    }
}
