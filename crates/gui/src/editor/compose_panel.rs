//! Content editing: the character-line composer and the narration composer.

use eframe::egui;

use super::Workbench;

pub(super) fn ui(workbench: &mut Workbench, ui: &mut egui::Ui) {
    ui.heading("Content");

    ui.group(|ui| {
        ui.label("Character line");
        ui.horizontal(|ui| {
            ui.label("Speaker:");
            let options: Vec<String> = workbench
                .document
                .characters
                .iter()
                .map(|c| format!("{} - {}", c.var_name, c.display_name))
                .collect();
            let selected_text = workbench
                .selected_character
                .and_then(|idx| options.get(idx).cloned())
                .unwrap_or_else(|| "Select a character".to_string());
            egui::ComboBox::from_id_source("speaker_combo")
                .width(220.0)
                .selected_text(selected_text)
                .show_ui(ui, |ui| {
                    for (index, option) in options.iter().enumerate() {
                        ui.selectable_value(
                            &mut workbench.selected_character,
                            Some(index),
                            option,
                        );
                    }
                });
        });
        ui.add(
            egui::TextEdit::multiline(&mut workbench.line_input)
                .desired_rows(3)
                .desired_width(f32::INFINITY)
                .hint_text("Dialogue text"),
        );
        if ui.button("➕ Add Character Line").clicked() {
            workbench.add_line();
        }
    });

    ui.group(|ui| {
        ui.label("Narration");
        ui.add(
            egui::TextEdit::multiline(&mut workbench.narration_input)
                .desired_rows(3)
                .desired_width(f32::INFINITY)
                .hint_text("Narration text"),
        );
        if ui.button("➕ Add Narration").clicked() {
            workbench.add_narration();
        }
    });
}
