//! egui presentation layer for the Ren'Py dialogue script editor.
//!
//! The document model lives in `renscript_core`; this crate binds it to a
//! form-based workbench (character registry, dialogue sequence, script
//! preview) plus file dialogs and persisted user preferences.

mod app;
pub mod editor;
mod persist;

pub use app::{preferences_path, run_editor, GuiError};
pub use editor::{ConfirmAction, Screen, ToastKind, ToastState, Workbench};
pub use persist::UserPreferences;
