//! Left side panel: the character registry.
//!
//! List of registered characters, add form, delete (with confirmation) and
//! import-from-config.

use eframe::egui;

use super::{ConfirmAction, Workbench};

pub(super) fn ui(workbench: &mut Workbench, ui: &mut egui::Ui) {
    ui.heading("Characters");
    ui.separator();

    egui::ScrollArea::vertical()
        .id_source("character_list")
        .max_height(ui.available_height() * 0.4)
        .show(ui, |ui| {
            let rows: Vec<String> = workbench
                .document
                .characters
                .iter()
                .map(|c| format!("{} - {}", c.var_name, c.display_name))
                .collect();
            if rows.is_empty() {
                ui.weak("No characters yet");
            }
            for (index, row) in rows.into_iter().enumerate() {
                let selected = workbench.selected_registry_row == Some(index);
                if ui.selectable_label(selected, row).clicked() {
                    workbench.selected_registry_row = Some(index);
                }
            }
        });

    ui.separator();
    ui.label("New character");
    ui.label("Variable name:");
    ui.text_edit_singleline(&mut workbench.var_name_input);
    ui.label("Display name:");
    ui.text_edit_singleline(&mut workbench.display_name_input);

    ui.add_space(4.0);
    if ui.button("➕ Add Character").clicked() {
        workbench.add_character();
    }
    let can_delete = workbench.selected_registry_row.is_some();
    if ui
        .add_enabled(can_delete, egui::Button::new("🗑 Delete Selected"))
        .clicked()
    {
        if let Some(index) = workbench.selected_registry_row {
            workbench.pending_confirm = Some(ConfirmAction::DeleteCharacter(index));
        }
    }
    if ui.button("📂 Import From Config...").clicked() {
        if let Some(path) = {
            let mut dialog = rfd::FileDialog::new().add_filter("Character Config", &["json"]);
            if let Some(dir) = workbench.dialog_dir() {
                dialog = dialog.set_directory(dir);
            }
            dialog.pick_file()
        } {
            workbench.import_config_from(&path);
        }
    }
    if ui.button("👥 Edit Config File...").clicked() {
        workbench.config_editor = Some(super::ConfigEditor::default());
    }
}
