//! Preview window for the generated script, with `.rpy` export.

use eframe::egui;

use super::{ToastState, Workbench};

pub(super) fn ui(workbench: &mut Workbench, ctx: &egui::Context) {
    if !workbench.show_script_window {
        return;
    }
    let Some(script) = workbench.generated.clone() else {
        workbench.show_script_window = false;
        return;
    };

    let mut open = true;
    let mut save_requested = false;
    egui::Window::new("Generated Script")
        .open(&mut open)
        .default_width(560.0)
        .default_height(420.0)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("💾 Save Script...").clicked() {
                    save_requested = true;
                }
            });
            ui.separator();
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    // Read-only view; regenerating replaces the text.
                    let mut text = script.clone();
                    ui.add(
                        egui::TextEdit::multiline(&mut text)
                            .code_editor()
                            .interactive(false)
                            .desired_width(f32::INFINITY),
                    );
                });
        });

    if save_requested {
        save_script(workbench);
    }
    workbench.show_script_window = open;
}

fn save_script(workbench: &mut Workbench) {
    let mut dialog = rfd::FileDialog::new()
        .add_filter("Ren'Py Script", &["rpy"])
        .set_file_name("script.rpy");
    if let Some(dir) = workbench.dialog_dir() {
        dialog = dialog.set_directory(dir);
    }
    let Some(path) = dialog.save_file() else {
        return;
    };
    match workbench.save_script_to(&path) {
        Ok(()) => workbench.toast = Some(ToastState::success("Script saved")),
        Err(err) => workbench.error = Some(err.to_string()),
    }
}
