//! Ren'Py Script Editor - a form-based authoring tool for dialogue scripts.
//!
//! This binary launches the editor workbench: character registry, dialogue
//! sequence editing with drag-to-reorder, JSON project persistence and
//! one-way Ren'Py script export.

fn main() {
    tracing_subscriber::fmt().init();

    match renscript_gui::run_editor() {
        Ok(()) => {}
        Err(e) => {
            eprintln!("Error running editor: {e}");
            std::process::exit(1);
        }
    }
}
