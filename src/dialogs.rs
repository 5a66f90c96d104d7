//! Blocking user dialogs, behind a trait so tests can script the answers.

pub const CONFIRM_DELETE: &str = "¿Estás seguro de que quieres eliminar esta transacción?";
pub const ADD_FAILED: &str = "Error al agregar la transacción";
pub const UPDATE_FAILED: &str = "Error al actualizar la transacción";
pub const DELETE_FAILED: &str = "Error al eliminar la transacción";

pub trait Dialogs {
    /// Ask a yes/no question; `false` when the user declines
    fn confirm(&self, message: &str) -> bool;
    fn alert(&self, message: &str);
}

/// `window.confirm` / `window.alert`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserDialogs;

impl Dialogs for BrowserDialogs {
    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }

    fn alert(&self, message: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
}
