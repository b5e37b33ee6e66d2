use std::path::PathBuf;

use directories::ProjectDirs;
use eframe::egui;
use thiserror::Error;
use tracing::info;

use crate::editor::Workbench;
use crate::persist::UserPreferences;

#[derive(Debug, Error)]
pub enum GuiError {
    #[error("gui error: {0}")]
    Gui(#[from] eframe::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Location of the preferences file, falling back to the working directory
/// when the platform directories are unavailable.
pub fn preferences_path() -> PathBuf {
    ProjectDirs::from("com", "renscript", "renscript-editor")
        .map(|dirs| dirs.config_dir().join("prefs.json"))
        .unwrap_or_else(|| PathBuf::from("prefs.json"))
}

/// Launches the editor application.
pub fn run_editor() -> Result<(), GuiError> {
    let prefs_path = preferences_path();
    let prefs = UserPreferences::load_from(&prefs_path).unwrap_or_default();
    info!(path = %prefs_path.display(), "loaded preferences");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([980.0, 760.0])
            .with_min_inner_size([900.0, 700.0])
            .with_title("Ren'Py Script Editor"),
        ..Default::default()
    };

    eframe::run_native(
        "Ren'Py Script Editor",
        options,
        Box::new(move |cc| {
            let scale = prefs.ui_scale.max(0.5);
            cc.egui_ctx.set_pixels_per_point(scale);
            Box::new(EditorApp::new(Workbench::new(prefs, prefs_path)))
        }),
    )?;
    Ok(())
}

/// The eframe wrapper around the workbench.
struct EditorApp {
    workbench: Workbench,
}

impl EditorApp {
    fn new(workbench: Workbench) -> Self {
        Self { workbench }
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.workbench.ui(ctx);
    }
}
