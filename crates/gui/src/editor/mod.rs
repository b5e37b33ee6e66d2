//! Editor workbench for the Ren'Py script tool.
//!
//! The workbench owns the one mutable [`Document`] plus the transient form
//! state around it (input buffers, selection, drag state, open windows).
//! All document mutation goes through `renscript_core`; this module only
//! decides when to call it and how to report the outcome.

mod character_panel;
mod compose_panel;
mod config_editor;
mod errors;
mod script_window;
mod sequence_panel;
mod toast;

pub use config_editor::ConfigEditor;
pub use errors::EditorError;
pub use toast::{ToastKind, ToastState};

use std::path::{Path, PathBuf};

use eframe::egui;
use tracing::{info, instrument, warn};

use renscript_core::{
    generate_script, load_config, load_document, save_document, write_text, Character, Document,
    DialogueEntry,
};

use crate::persist::UserPreferences;

/// Which screen the application is showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Screen {
    /// Launch screen: new script, open project, new character config.
    #[default]
    Start,
    /// The main editing form.
    Editor,
}

/// A destructive action awaiting the user's yes/no.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfirmAction {
    DeleteCharacter(usize),
    DeleteEntry(usize),
    NewDocument,
}

/// The editor workbench: document state plus form state.
pub struct Workbench {
    /// The document being edited.
    pub document: Document,
    /// Path of the current project file, if it has one.
    pub file_path: Option<PathBuf>,
    /// Current screen.
    pub screen: Screen,

    // Form inputs.
    pub var_name_input: String,
    pub display_name_input: String,
    pub line_input: String,
    pub narration_input: String,
    /// Index into the registry for the speaker combo box.
    pub selected_character: Option<usize>,
    /// Selected row in the dialogue list.
    pub selected_entry: Option<usize>,
    /// Selected row in the character list.
    pub selected_registry_row: Option<usize>,

    /// Row currently picked up in a drag-to-reorder gesture.
    pub dragged_entry: Option<usize>,

    // Secondary windows.
    pub generated: Option<String>,
    pub show_script_window: bool,
    pub config_editor: Option<ConfigEditor>,
    pub pending_confirm: Option<ConfirmAction>,

    // Feedback.
    pub toast: Option<ToastState>,
    pub error: Option<String>,

    // Preferences.
    pub prefs: UserPreferences,
    prefs_path: PathBuf,
    applied_scale: f32,
}

impl Workbench {
    /// Creates a workbench on the start screen with an empty document.
    pub fn new(prefs: UserPreferences, prefs_path: PathBuf) -> Self {
        Self {
            document: Document::new(),
            file_path: None,
            screen: Screen::Start,
            var_name_input: String::new(),
            display_name_input: String::new(),
            line_input: String::new(),
            narration_input: String::new(),
            selected_character: None,
            selected_entry: None,
            selected_registry_row: None,
            dragged_entry: None,
            generated: None,
            show_script_window: false,
            config_editor: None,
            pending_confirm: None,
            toast: None,
            error: None,
            prefs,
            prefs_path,
            applied_scale: 0.0,
        }
    }

    // -------------------------------------------------------------------------
    // Character registry operations
    // -------------------------------------------------------------------------

    /// Adds a character from the form inputs, clearing them on success.
    pub fn add_character(&mut self) {
        match self
            .document
            .characters
            .add(&self.var_name_input, &self.display_name_input)
        {
            Ok(character) => {
                self.var_name_input.clear();
                self.display_name_input.clear();
                if self.selected_character.is_none() {
                    self.selected_character = Some(self.document.characters.len() - 1);
                }
                self.toast = Some(ToastState::success(format!(
                    "Added character {} - {}",
                    character.var_name, character.display_name
                )));
            }
            Err(err) => self.toast = Some(ToastState::warning(err.to_string())),
        }
    }

    /// Removes the character at `index` and repairs the selections.
    pub fn delete_character(&mut self, index: usize) {
        if self.document.characters.remove(index).is_none() {
            return;
        }
        self.selected_registry_row = None;
        self.selected_character = match self.document.characters.len() {
            0 => None,
            len => Some(self.selected_character.unwrap_or(0).min(len - 1)),
        };
        self.toast = Some(ToastState::success("Character deleted"));
    }

    /// Replaces the registry wholesale with an imported list.
    pub fn import_characters(&mut self, characters: Vec<Character>) {
        let count = characters.len();
        self.document.characters.replace_all(characters);
        self.selected_registry_row = None;
        self.selected_character = if count > 0 { Some(0) } else { None };
        self.toast = Some(ToastState::success(format!("Imported {count} characters")));
    }

    /// Loads a character config file into the registry.
    #[instrument(skip(self))]
    pub fn import_config_from(&mut self, path: &Path) {
        match load_config(path) {
            Ok(config) => {
                if config.characters.is_empty() {
                    self.toast = Some(ToastState::warning("The config file has no characters"));
                    return;
                }
                info!(count = config.characters.len(), "imported character config");
                self.prefs_remember(path);
                self.import_characters(config.characters);
            }
            Err(err) => {
                warn!("config import failed: {err}");
                self.error = Some(err.to_string());
            }
        }
    }

    // -------------------------------------------------------------------------
    // Dialogue sequence operations
    // -------------------------------------------------------------------------

    /// Appends a character line from the composer inputs.
    pub fn add_line(&mut self) {
        let Some(speaker) = self
            .selected_character
            .and_then(|idx| self.document.characters.get(idx))
            .map(|c| c.var_name.clone())
        else {
            self.toast = Some(ToastState::warning("Select a character first"));
            return;
        };
        match self.document.dialogues.push_line(&speaker, &self.line_input) {
            Ok(()) => {
                self.line_input.clear();
                self.toast = Some(ToastState::success("Character line added"));
            }
            Err(err) => self.toast = Some(ToastState::warning(err.to_string())),
        }
    }

    /// Appends a narration line from the composer input.
    pub fn add_narration(&mut self) {
        match self.document.dialogues.push_narration(&self.narration_input) {
            Ok(()) => {
                self.narration_input.clear();
                self.toast = Some(ToastState::success("Narration added"));
            }
            Err(err) => self.toast = Some(ToastState::warning(err.to_string())),
        }
    }

    /// Moves the selected entry up one slot; boundary is a notice, not an
    /// error.
    pub fn move_selected_up(&mut self) {
        let Some(index) = self.selected_entry else {
            self.toast = Some(ToastState::warning("Select an entry first"));
            return;
        };
        if self.document.dialogues.move_up(index) {
            self.selected_entry = Some(index - 1);
        } else {
            self.toast = Some(ToastState::info("Already at the top"));
        }
    }

    /// Moves the selected entry down one slot; boundary is a notice, not an
    /// error.
    pub fn move_selected_down(&mut self) {
        let Some(index) = self.selected_entry else {
            self.toast = Some(ToastState::warning("Select an entry first"));
            return;
        };
        if self.document.dialogues.move_down(index) {
            self.selected_entry = Some(index + 1);
        } else {
            self.toast = Some(ToastState::info("Already at the bottom"));
        }
    }

    /// Removes the entry at `index` and repairs the selection.
    pub fn delete_entry(&mut self, index: usize) {
        if self.document.dialogues.remove(index).is_none() {
            return;
        }
        self.selected_entry = match self.document.dialogues.len() {
            0 => None,
            len => Some(index.min(len - 1)),
        };
        self.toast = Some(ToastState::success("Entry deleted"));
    }

    /// Finishes a drag gesture: splice the list and follow the moved row.
    pub fn reorder_entry(&mut self, from: usize, to: usize) {
        if self.document.dialogues.reorder(from, to) {
            self.selected_entry = Some(to);
        }
    }

    /// Display text for a dialogue list row, resolving the speaker's
    /// display name and falling back to the var name for dangling
    /// references.
    pub fn entry_label(&self, entry: &DialogueEntry) -> String {
        match entry {
            DialogueEntry::Line { speaker, text } => {
                let shown = self
                    .document
                    .characters
                    .display_for(speaker)
                    .unwrap_or(speaker);
                format!("[Character] {shown}: {text}")
            }
            DialogueEntry::Narration { text } => format!("[Narration] {text}"),
        }
    }

    // -------------------------------------------------------------------------
    // Document lifecycle
    // -------------------------------------------------------------------------

    /// Resets the workbench to an empty document.
    pub fn new_document(&mut self) {
        self.document = Document::new();
        self.file_path = None;
        self.var_name_input.clear();
        self.display_name_input.clear();
        self.line_input.clear();
        self.narration_input.clear();
        self.selected_character = None;
        self.selected_entry = None;
        self.selected_registry_row = None;
        self.dragged_entry = None;
        self.generated = None;
        self.show_script_window = false;
        self.error = None;
    }

    /// Loads a project file and switches to the editor screen.
    ///
    /// On failure the current state is untouched and the error is shown.
    #[instrument(skip(self))]
    pub fn open_project(&mut self, path: &Path) {
        match load_document(path) {
            Ok(document) => {
                info!(
                    characters = document.characters.len(),
                    entries = document.dialogues.len(),
                    "project loaded"
                );
                self.new_document();
                self.selected_character = if document.characters.is_empty() {
                    None
                } else {
                    Some(0)
                };
                self.document = document;
                self.file_path = Some(path.to_path_buf());
                self.screen = Screen::Editor;
                self.prefs_remember(path);
                self.toast = Some(ToastState::success("Project loaded"));
            }
            Err(err) => {
                warn!("project load failed: {err}");
                self.error = Some(err.to_string());
            }
        }
    }

    /// Saves the project file to `path`.
    #[instrument(skip(self))]
    pub fn save_project_to(&mut self, path: &Path) {
        match save_document(path, &self.document) {
            Ok(()) => {
                info!("project saved");
                self.file_path = Some(path.to_path_buf());
                self.prefs_remember(path);
                self.toast = Some(ToastState::success("Project saved"));
            }
            Err(err) => {
                warn!("project save failed: {err}");
                self.error = Some(err.to_string());
            }
        }
    }

    // -------------------------------------------------------------------------
    // Script generation
    // -------------------------------------------------------------------------

    /// Regenerates the script text and opens the preview window.
    pub fn generate(&mut self) {
        if self.document.dialogues.is_empty() {
            self.toast = Some(ToastState::warning(
                "Add at least one dialogue or narration line first",
            ));
            return;
        }
        self.generated = Some(generate_script(&self.document));
        self.show_script_window = true;
    }

    /// Writes the generated script to `path`.
    ///
    /// # Errors
    /// [`EditorError::NotGenerated`] when no script has been generated yet.
    #[instrument(skip(self))]
    pub fn save_script_to(&mut self, path: &Path) -> Result<(), EditorError> {
        let script = self.generated.as_deref().ok_or(EditorError::NotGenerated)?;
        write_text(path, script)?;
        info!(bytes = script.len(), "script exported");
        self.prefs_remember(path);
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Preferences
    // -------------------------------------------------------------------------

    fn prefs_remember(&mut self, path: &Path) {
        self.prefs.remember_dir(path);
        self.persist_preferences();
    }

    pub(crate) fn persist_preferences(&self) {
        if let Err(err) = self.prefs.save_to(&self.prefs_path) {
            warn!("failed to save preferences: {err}");
        }
    }

    /// Base directory for file dialogs.
    pub fn dialog_dir(&self) -> Option<PathBuf> {
        self.prefs.last_dir.clone()
    }

    // -------------------------------------------------------------------------
    // UI
    // -------------------------------------------------------------------------

    /// Renders the whole application for one frame.
    pub fn ui(&mut self, ctx: &egui::Context) {
        self.apply_scale(ctx);

        match self.screen {
            Screen::Start => self.render_start(ctx),
            Screen::Editor => self.render_editor(ctx),
        }

        self.render_config_editor(ctx);
        script_window::ui(self, ctx);
        self.render_confirm(ctx);
        toast::render_toast(ctx, &mut self.toast);
    }

    fn apply_scale(&mut self, ctx: &egui::Context) {
        let scale = self.prefs.ui_scale.max(0.5);
        if (scale - self.applied_scale).abs() > f32::EPSILON {
            ctx.set_pixels_per_point(scale);
            self.applied_scale = scale;
        }
    }

    /// The launch screen: new script, open project, new character config.
    fn render_start(&mut self, ctx: &egui::Context) {
        self.render_error_banner(ctx);
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(60.0);
                ui.heading("Ren'Py Dialogue Script Tool");
                ui.add_space(30.0);
                if ui.button("📄 New Script").clicked() {
                    self.new_document();
                    self.screen = Screen::Editor;
                }
                ui.add_space(8.0);
                if ui.button("📂 Open Project...").clicked() {
                    if let Some(path) = self.pick_file("JSON Project", "json") {
                        self.open_project(&path);
                    }
                }
                ui.add_space(8.0);
                if ui.button("👥 New Character Config").clicked() {
                    self.config_editor = Some(ConfigEditor::default());
                }
            });
        });
    }

    /// The main editing form.
    fn render_editor(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("action_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label("Scene label:");
                ui.add(
                    egui::TextEdit::singleline(&mut self.document.label).desired_width(200.0),
                );
                ui.separator();
                if ui.button("📄 New").clicked() {
                    self.pending_confirm = Some(ConfirmAction::NewDocument);
                }
                if ui.button("💾 Save Project").clicked() {
                    let known = self.file_path.clone();
                    match known {
                        Some(path) => self.save_project_to(&path),
                        None => {
                            if let Some(path) =
                                self.save_file("JSON Project", "json", "project.json")
                            {
                                self.save_project_to(&path);
                            }
                        }
                    }
                }
                if ui.button("📂 Open Project").clicked() {
                    if let Some(path) = self.pick_file("JSON Project", "json") {
                        self.open_project(&path);
                    }
                }
                ui.separator();
                if ui.button("⚙ Generate Script").clicked() {
                    self.generate();
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.menu_button("⚙", |ui| {
                        if ui
                            .add(
                                egui::Slider::new(&mut self.prefs.ui_scale, 0.75..=2.0)
                                    .text("UI Scale"),
                            )
                            .changed()
                        {
                            self.persist_preferences();
                        }
                    });
                });
            });
        });

        self.render_error_banner(ctx);

        egui::SidePanel::left("character_panel")
            .default_width(260.0)
            .resizable(true)
            .show(ctx, |ui| {
                character_panel::ui(self, ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            compose_panel::ui(self, ui);
            ui.separator();
            sequence_panel::ui(self, ui);
        });
    }

    fn render_error_banner(&mut self, ctx: &egui::Context) {
        let mut clear_error = false;
        if let Some(ref error) = self.error {
            let message = error.clone();
            egui::TopBottomPanel::top("error_banner").show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new("⚠").color(egui::Color32::YELLOW));
                    ui.label(egui::RichText::new(message).color(egui::Color32::RED));
                    if ui.button("✕").clicked() {
                        clear_error = true;
                    }
                });
            });
        }
        if clear_error {
            self.error = None;
        }
    }

    fn render_config_editor(&mut self, ctx: &egui::Context) {
        let Some(mut editor) = self.config_editor.take() else {
            return;
        };
        match editor.ui(ctx, self.prefs.last_dir.as_deref()) {
            config_editor::ConfigEditorAction::Keep => {
                self.config_editor = Some(editor);
            }
            config_editor::ConfigEditorAction::Close => {}
            config_editor::ConfigEditorAction::ImportToEditor(characters) => {
                self.import_characters(characters);
                self.screen = Screen::Editor;
            }
            config_editor::ConfigEditorAction::Saved(path) => {
                self.prefs_remember(&path);
                self.toast = Some(ToastState::success("Config file saved"));
                self.config_editor = Some(editor);
            }
            config_editor::ConfigEditorAction::Failed(message) => {
                self.error = Some(message);
                self.config_editor = Some(editor);
            }
        }
    }

    /// Yes/no dialog for destructive actions.
    fn render_confirm(&mut self, ctx: &egui::Context) {
        let Some(action) = self.pending_confirm.clone() else {
            return;
        };
        let prompt = match &action {
            ConfirmAction::DeleteCharacter(index) => self
                .document
                .characters
                .get(*index)
                .map(|c| format!("Delete character {} - {}?", c.var_name, c.display_name))
                .unwrap_or_else(|| "Delete this character?".to_string()),
            ConfirmAction::DeleteEntry(_) => "Delete the selected entry?".to_string(),
            ConfirmAction::NewDocument => {
                "Start a new script? Unsaved changes will be lost.".to_string()
            }
        };
        let mut decided = false;
        egui::Window::new("Confirm")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.label(prompt);
                ui.horizontal(|ui| {
                    if ui.button("Yes").clicked() {
                        match action {
                            ConfirmAction::DeleteCharacter(index) => {
                                self.delete_character(index);
                            }
                            ConfirmAction::DeleteEntry(index) => self.delete_entry(index),
                            ConfirmAction::NewDocument => {
                                self.new_document();
                                self.toast = Some(ToastState::success("New script"));
                            }
                        }
                        decided = true;
                    }
                    if ui.button("No").clicked() {
                        decided = true;
                    }
                });
            });
        if decided {
            self.pending_confirm = None;
        }
    }

    // -------------------------------------------------------------------------
    // File dialogs
    // -------------------------------------------------------------------------

    fn pick_file(&self, filter_name: &str, extension: &str) -> Option<PathBuf> {
        let mut dialog = rfd::FileDialog::new().add_filter(filter_name, &[extension]);
        if let Some(dir) = self.dialog_dir() {
            dialog = dialog.set_directory(dir);
        }
        dialog.pick_file()
    }

    fn save_file(&self, filter_name: &str, extension: &str, file_name: &str) -> Option<PathBuf> {
        let mut dialog = rfd::FileDialog::new()
            .add_filter(filter_name, &[extension])
            .set_file_name(file_name);
        if let Some(dir) = self.dialog_dir() {
            dialog = dialog.set_directory(dir);
        }
        dialog.save_file()
    }
}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------

#[cfg(test)]
#[path = "tests/workbench_tests.rs"]
mod tests;
