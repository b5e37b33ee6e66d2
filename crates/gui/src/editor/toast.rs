//! Transient feedback notifications.
//!
//! A toast replaces the original tool's modal success/notice boxes: it is
//! drawn in a corner for a fixed number of frames and then disappears on
//! its own.

use eframe::egui;

/// How long a toast stays on screen, in frames.
const TOAST_FRAMES: u32 = 150;

/// Severity of a toast notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Warning,
    Info,
}

impl ToastKind {
    fn color(self) -> egui::Color32 {
        match self {
            ToastKind::Success => egui::Color32::from_rgb(80, 180, 80),
            ToastKind::Warning => egui::Color32::from_rgb(200, 160, 60),
            ToastKind::Info => egui::Color32::from_rgb(80, 140, 200),
        }
    }

    fn icon(self) -> &'static str {
        match self {
            ToastKind::Success => "✓",
            ToastKind::Warning => "⚠",
            ToastKind::Info => "ℹ",
        }
    }
}

/// A single active toast.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToastState {
    pub kind: ToastKind,
    pub message: String,
    frames_left: u32,
}

impl ToastState {
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(ToastKind::Success, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(ToastKind::Warning, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(ToastKind::Info, message)
    }

    fn new(kind: ToastKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            frames_left: TOAST_FRAMES,
        }
    }
}

/// Draws the active toast and counts it down; clears it when expired.
pub fn render_toast(ctx: &egui::Context, toast: &mut Option<ToastState>) {
    let expired = match toast {
        Some(state) => {
            egui::Area::new(egui::Id::new("workbench_toast"))
                .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-16.0, -16.0))
                .show(ctx, |ui| {
                    egui::Frame::popup(ui.style())
                        .fill(state.kind.color())
                        .show(ui, |ui| {
                            ui.label(
                                egui::RichText::new(format!(
                                    "{} {}",
                                    state.kind.icon(),
                                    state.message
                                ))
                                .color(egui::Color32::WHITE),
                            );
                        });
                });
            state.frames_left = state.frames_left.saturating_sub(1);
            // Keep repainting so the countdown runs without input events.
            ctx.request_repaint();
            state.frames_left == 0
        }
        None => false,
    };
    if expired {
        *toast = None;
    }
}
