//! Error types for the editor module.
//!
//! Uses thiserror for derive and miette for structured diagnostics.

/// Errors that can occur in the editor.
#[derive(thiserror::Error, Debug, miette::Diagnostic)]
pub enum EditorError {
    /// The script must be generated before it can be saved.
    #[error("Generate the script before saving it.")]
    #[diagnostic(code(editor::not_generated))]
    NotGenerated,

    /// A document model or file operation failed.
    #[error(transparent)]
    #[diagnostic(code(editor::core))]
    Core(#[from] renscript_core::RenError),
}
