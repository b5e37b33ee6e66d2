//! The dialogue list: selection, move/delete buttons and drag-to-reorder.
//!
//! The list is fully re-rendered from the document every frame, so the drag
//! gesture only has to track the picked-up index and resolve a drop index;
//! the actual move is a single splice on the sequence.

use eframe::egui;

use super::{ConfirmAction, Workbench};

pub(super) fn ui(workbench: &mut Workbench, ui: &mut egui::Ui) {
    ui.heading("Dialogue List");
    ui.horizontal(|ui| {
        if ui.button("⬆ Move Up").clicked() {
            workbench.move_selected_up();
        }
        if ui.button("⬇ Move Down").clicked() {
            workbench.move_selected_down();
        }
        let can_delete = workbench.selected_entry.is_some();
        if ui
            .add_enabled(can_delete, egui::Button::new("🗑 Delete Selected"))
            .clicked()
        {
            if let Some(index) = workbench.selected_entry {
                workbench.pending_confirm = Some(ConfirmAction::DeleteEntry(index));
            }
        }
    });
    ui.separator();

    let labels: Vec<String> = workbench
        .document
        .dialogues
        .iter()
        .map(|entry| workbench.entry_label(entry))
        .collect();

    if labels.is_empty() {
        ui.weak("No content yet. Add a character line or narration above.");
        workbench.dragged_entry = None;
        return;
    }

    let mut row_rects = Vec::with_capacity(labels.len());
    egui::ScrollArea::vertical()
        .id_source("dialogue_list")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for (index, label) in labels.iter().enumerate() {
                let row = ui.horizontal(|ui| {
                    let handle = ui.add(
                        egui::Label::new(egui::RichText::new("≡").strong())
                            .sense(egui::Sense::drag()),
                    );
                    if handle.drag_started() {
                        workbench.dragged_entry = Some(index);
                    }
                    let selected = workbench.selected_entry == Some(index);
                    let text = if workbench.dragged_entry == Some(index) {
                        egui::RichText::new(label).weak()
                    } else {
                        egui::RichText::new(label)
                    };
                    if ui.selectable_label(selected, text).clicked() {
                        workbench.selected_entry = Some(index);
                    }
                });
                row_rects.push(row.response.rect);
            }

            resolve_drag(workbench, ui, &row_rects);
        });
}

/// While a row is picked up: compute the drop index under the pointer,
/// paint an insertion marker, and splice on release.
fn resolve_drag(workbench: &mut Workbench, ui: &mut egui::Ui, row_rects: &[egui::Rect]) {
    let Some(from) = workbench.dragged_entry else {
        return;
    };
    let pointer = ui.input(|i| i.pointer.interact_pos());
    let target = pointer.map(|pos| {
        row_rects
            .iter()
            .position(|rect| pos.y < rect.bottom())
            .unwrap_or(row_rects.len() - 1)
    });
    if let Some(to) = target {
        let rect = row_rects[to];
        let stroke = egui::Stroke::new(2.0, ui.visuals().selection.stroke.color);
        let y = if to >= from { rect.bottom() } else { rect.top() };
        ui.painter().hline(rect.x_range(), y, stroke);
    }

    if ui.input(|i| i.pointer.any_released()) {
        if let Some(to) = target {
            workbench.reorder_entry(from, to);
        }
        workbench.dragged_entry = None;
    }
}
