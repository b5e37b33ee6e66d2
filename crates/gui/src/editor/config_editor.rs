//! Character config file editor.
//!
//! A standalone window holding its own registry, able to save it as a
//! config file or push it wholesale into the main editor. Mirrors the main
//! character panel, but detached from the document.

use std::path::{Path, PathBuf};

use eframe::egui;
use tracing::warn;

use renscript_core::{save_config, CharacterConfig, CharacterRegistry};

/// What the workbench should do after rendering the window.
pub(super) enum ConfigEditorAction {
    /// Window stays open, nothing else to do.
    Keep,
    /// Window was closed.
    Close,
    /// Replace the editor registry with these characters and close.
    ImportToEditor(Vec<renscript_core::Character>),
    /// A config file was written to this path.
    Saved(PathBuf),
    /// Saving failed; show the message.
    Failed(String),
}

/// State of the config editor window.
#[derive(Default)]
pub struct ConfigEditor {
    registry: CharacterRegistry,
    var_name_input: String,
    display_name_input: String,
    selected: Option<usize>,
    pending_delete: Option<usize>,
    notice: Option<String>,
}

impl ConfigEditor {
    /// Renders the window for one frame.
    pub(super) fn ui(&mut self, ctx: &egui::Context, last_dir: Option<&Path>) -> ConfigEditorAction {
        let mut action = ConfigEditorAction::Keep;
        let mut open = true;
        egui::Window::new("Character Config")
            .open(&mut open)
            .default_width(420.0)
            .show(ctx, |ui| {
                self.list_ui(ui);
                ui.separator();
                self.form_ui(ui);
                ui.separator();
                ui.horizontal(|ui| {
                    let has_characters = !self.registry.is_empty();
                    if ui
                        .add_enabled(has_characters, egui::Button::new("💾 Save Config File..."))
                        .clicked()
                    {
                        if let Some(result) = self.save_to_file(last_dir) {
                            action = result;
                        }
                    }
                    if ui
                        .add_enabled(has_characters, egui::Button::new("⬅ Import To Editor"))
                        .clicked()
                    {
                        let characters = self.registry.iter().cloned().collect();
                        action = ConfigEditorAction::ImportToEditor(characters);
                    }
                });
                if let Some(notice) = &self.notice {
                    ui.colored_label(egui::Color32::from_rgb(200, 160, 60), notice);
                }
            });

        self.confirm_delete_ui(ctx);

        if !open {
            return ConfigEditorAction::Close;
        }
        action
    }

    fn list_ui(&mut self, ui: &mut egui::Ui) {
        egui::ScrollArea::vertical()
            .id_source("config_character_list")
            .max_height(220.0)
            .show(ui, |ui| {
                if self.registry.is_empty() {
                    ui.weak("No characters yet");
                }
                let rows: Vec<String> = self
                    .registry
                    .iter()
                    .map(|c| format!("{} - {}", c.var_name, c.display_name))
                    .collect();
                for (index, row) in rows.into_iter().enumerate() {
                    let selected = self.selected == Some(index);
                    if ui.selectable_label(selected, row).clicked() {
                        self.selected = Some(index);
                    }
                }
            });
    }

    fn form_ui(&mut self, ui: &mut egui::Ui) {
        ui.label("Variable name:");
        ui.text_edit_singleline(&mut self.var_name_input);
        ui.label("Display name:");
        ui.text_edit_singleline(&mut self.display_name_input);
        ui.horizontal(|ui| {
            if ui.button("➕ Add").clicked() {
                match self
                    .registry
                    .add(&self.var_name_input, &self.display_name_input)
                {
                    Ok(_) => {
                        self.var_name_input.clear();
                        self.display_name_input.clear();
                        self.notice = None;
                    }
                    Err(err) => self.notice = Some(err.to_string()),
                }
            }
            let can_delete = self.selected.is_some();
            if ui
                .add_enabled(can_delete, egui::Button::new("🗑 Delete Selected"))
                .clicked()
            {
                self.pending_delete = self.selected;
            }
        });
    }

    fn confirm_delete_ui(&mut self, ctx: &egui::Context) {
        let Some(index) = self.pending_delete else {
            return;
        };
        let prompt = self
            .registry
            .get(index)
            .map(|c| format!("Delete character {} - {}?", c.var_name, c.display_name))
            .unwrap_or_else(|| "Delete this character?".to_string());
        let mut decided = false;
        egui::Window::new("Confirm Delete")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.label(prompt);
                ui.horizontal(|ui| {
                    if ui.button("Yes").clicked() {
                        self.registry.remove(index);
                        self.selected = None;
                        decided = true;
                    }
                    if ui.button("No").clicked() {
                        decided = true;
                    }
                });
            });
        if decided {
            self.pending_delete = None;
        }
    }

    fn save_to_file(&mut self, last_dir: Option<&Path>) -> Option<ConfigEditorAction> {
        let mut dialog = rfd::FileDialog::new()
            .add_filter("Character Config", &["json"])
            .set_file_name("characters.json");
        if let Some(dir) = last_dir {
            dialog = dialog.set_directory(dir);
        }
        let path = dialog.save_file()?;
        let config = CharacterConfig {
            characters: self.registry.iter().cloned().collect(),
        };
        match save_config(&path, &config) {
            Ok(()) => Some(ConfigEditorAction::Saved(path)),
            Err(err) => {
                warn!("config save failed: {err}");
                Some(ConfigEditorAction::Failed(err.to_string()))
            }
        }
    }
}
