//! Dialog state and the overlay controller.
//!
//! One [`ModalOverlay`] per `egui::Context` owns the singleton alert and
//! confirm dialog states plus the single pending-confirmation slot. Hosts
//! reach it through [`ModalOverlayHandle`], a clonable shared handle
//! registered in the context's data store under a fixed id.

use egui::Color32;
use serde::{Deserialize, Deserializer, Serialize};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::oneshot;
use tracing::debug;

use crate::theme::Theme;

/// Semantic classification driving an alert dialog's icon, color and title.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DialogCategory {
    Success,
    Error,
    Warning,
    #[default]
    Info,
}

impl DialogCategory {
    /// Parse a category name. Unrecognized names silently normalize to
    /// [`DialogCategory::Info`].
    pub fn from_name(name: &str) -> Self {
        match name {
            "success" => Self::Success,
            "error" => Self::Error,
            "warning" => Self::Warning,
            "info" => Self::Info,
            _ => Self::Info,
        }
    }

    /// Fixed display configuration for this category. Gradient starts come
    /// from the palette; the end stops are part of the category itself.
    pub fn config(self, theme: &Theme) -> CategoryConfig {
        match self {
            Self::Success => CategoryConfig {
                icon: "✓",
                title: "Sucesso!",
                gradient: (theme.success, Color32::from_rgb(0x10, 0xB9, 0x81)),
            },
            Self::Error => CategoryConfig {
                icon: "✕",
                title: "Erro!",
                gradient: (theme.danger, Color32::from_rgb(0xEF, 0x44, 0x44)),
            },
            Self::Warning => CategoryConfig {
                icon: "⚠️",
                title: "Atenção!",
                gradient: (theme.warning, Color32::from_rgb(0xF5, 0x9E, 0x0B)),
            },
            Self::Info => CategoryConfig {
                icon: "ℹ️",
                title: "Informação",
                gradient: (theme.info, Color32::from_rgb(0x3B, 0x82, 0xF6)),
            },
        }
    }
}

// Deserialization applies the same lossy normalization as `from_name`, so a
// palette or host config can never fail on a bad category tag.
impl<'de> Deserialize<'de> for DialogCategory {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        Ok(Self::from_name(&name))
    }
}

/// Icon glyph, badge gradient (start, end) and title for one category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryConfig {
    pub icon: &'static str,
    pub title: &'static str,
    pub gradient: (Color32, Color32),
}

/// Singleton alert dialog state.
#[derive(Debug, Default)]
pub struct AlertDialog {
    pub visible: bool,
    pub category: DialogCategory,
    pub message: String,
}

/// Singleton confirm dialog state. Its chrome (title, icon, button labels)
/// is fixed; only the message varies.
#[derive(Debug, Default)]
pub struct ConfirmDialog {
    pub visible: bool,
    pub message: String,
}

/// Owns both dialog singletons and the pending-confirmation slot.
pub struct ModalOverlay {
    alert: AlertDialog,
    confirm: ConfirmDialog,
    /// The live responder for the confirm dialog, consumed exactly once.
    pending: Option<oneshot::Sender<bool>>,
    /// Senders displaced by a newer `show_confirm`. Never resolved and never
    /// dropped, so the displaced caller's receiver stays pending.
    displaced: Vec<oneshot::Sender<bool>>,
    theme: Theme,
}

impl ModalOverlay {
    fn new(theme: Theme) -> Self {
        Self {
            alert: AlertDialog::default(),
            confirm: ConfirmDialog::default(),
            pending: None,
            displaced: Vec::new(),
            theme,
        }
    }

    pub fn alert(&self) -> &AlertDialog {
        &self.alert
    }

    pub fn confirm(&self) -> &ConfirmDialog {
        &self.confirm
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// Show the alert dialog. Re-invoking while shown overwrites the content
    /// and keeps it shown.
    pub fn show_alert(&mut self, message: impl Into<String>, category: DialogCategory) {
        self.alert.category = category;
        self.alert.message = message.into();
        self.alert.visible = true;
        debug!(?category, "alert shown");
    }

    /// Hide the alert dialog. Safe to call when already hidden.
    pub fn close_alert(&mut self) {
        self.alert.visible = false;
    }

    /// Show the confirm dialog and return the receiver for its eventual
    /// outcome. A confirmation already pending is silently displaced: its
    /// receiver will never resolve.
    pub fn show_confirm(&mut self, message: impl Into<String>) -> oneshot::Receiver<bool> {
        let (tx, rx) = oneshot::channel();
        if let Some(old) = self.pending.replace(tx) {
            self.displaced.push(old);
            debug!(
                displaced = self.displaced.len(),
                "confirmation already pending, displacing it"
            );
        }
        self.confirm.message = message.into();
        self.confirm.visible = true;
        rx
    }

    /// Deliver the confirm outcome and hide the dialog. With nothing
    /// pending this is a no-op, visibility included.
    pub fn resolve_confirm(&mut self, result: bool) {
        if let Some(tx) = self.pending.take() {
            self.confirm.visible = false;
            debug!(result, "confirmation resolved");
            let _ = tx.send(result);
        }
    }
}

/// Clonable shared handle to the singleton overlay of one `egui::Context`.
#[derive(Clone)]
pub struct ModalOverlayHandle {
    inner: Arc<Mutex<ModalOverlay>>,
}

impl ModalOverlayHandle {
    fn store_id() -> egui::Id {
        egui::Id::new("modal_overlay_singleton")
    }

    /// Get the context's overlay, constructing it on first call. Idempotent:
    /// every call returns a handle to the same instance, guarded solely by
    /// the data-store lookup under the fixed id.
    pub fn install(ctx: &egui::Context) -> Self {
        ctx.data_mut(|data| {
            data.get_temp_mut_or_insert_with(Self::store_id(), || {
                debug!("installing modal overlay");
                Self {
                    inner: Arc::new(Mutex::new(ModalOverlay::new(Theme::default()))),
                }
            })
            .clone()
        })
    }

    pub(crate) fn lock(&self) -> MutexGuard<'_, ModalOverlay> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Read overlay state without mutating it.
    pub fn read<R>(&self, f: impl FnOnce(&ModalOverlay) -> R) -> R {
        f(&self.lock())
    }

    pub fn show_alert(&self, message: impl Into<String>, category: DialogCategory) {
        self.lock().show_alert(message, category);
    }

    pub fn close_alert(&self) {
        self.lock().close_alert();
    }

    pub fn show_confirm(&self, message: impl Into<String>) -> oneshot::Receiver<bool> {
        self.lock().show_confirm(message)
    }

    pub fn resolve_confirm(&self, result: bool) {
        self.lock().resolve_confirm(result);
    }

    pub fn set_theme(&self, theme: Theme) {
        self.lock().set_theme(theme);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::oneshot::error::TryRecvError;

    #[test]
    fn test_category_config_table() {
        let theme = Theme::default();

        let success = DialogCategory::Success.config(&theme);
        assert_eq!(success.icon, "✓");
        assert_eq!(success.title, "Sucesso!");
        assert_eq!(success.gradient.0, theme.success);
        assert_eq!(success.gradient.1, Color32::from_rgb(16, 185, 129));

        let error = DialogCategory::Error.config(&theme);
        assert_eq!(error.icon, "✕");
        assert_eq!(error.title, "Erro!");
        assert_eq!(error.gradient.0, theme.danger);
        assert_eq!(error.gradient.1, Color32::from_rgb(239, 68, 68));

        let warning = DialogCategory::Warning.config(&theme);
        assert_eq!(warning.icon, "⚠️");
        assert_eq!(warning.title, "Atenção!");
        assert_eq!(warning.gradient.0, theme.warning);
        assert_eq!(warning.gradient.1, Color32::from_rgb(245, 158, 11));

        let info = DialogCategory::Info.config(&theme);
        assert_eq!(info.icon, "ℹ️");
        assert_eq!(info.title, "Informação");
        assert_eq!(info.gradient.0, theme.info);
        assert_eq!(info.gradient.1, Color32::from_rgb(59, 130, 246));
    }

    #[test]
    fn test_unknown_category_falls_back_to_info() {
        let theme = Theme::default();
        assert_eq!(DialogCategory::from_name("shiny"), DialogCategory::Info);
        assert_eq!(DialogCategory::from_name(""), DialogCategory::Info);
        assert_eq!(
            DialogCategory::from_name("shiny").config(&theme),
            DialogCategory::Info.config(&theme)
        );
    }

    #[test]
    fn test_category_serde() {
        assert_eq!(
            serde_json::to_string(&DialogCategory::Success).unwrap(),
            "\"success\""
        );
        let parsed: DialogCategory = serde_json::from_str("\"warning\"").unwrap();
        assert_eq!(parsed, DialogCategory::Warning);
        // Unknown tags normalize instead of failing
        let parsed: DialogCategory = serde_json::from_str("\"fatal\"").unwrap();
        assert_eq!(parsed, DialogCategory::Info);
    }

    #[test]
    fn test_alert_show_and_close() {
        let mut overlay = ModalOverlay::new(Theme::default());
        assert!(!overlay.alert().visible);

        overlay.show_alert("saved", DialogCategory::Success);
        assert!(overlay.alert().visible);
        assert_eq!(overlay.alert().message, "saved");
        assert_eq!(overlay.alert().category, DialogCategory::Success);

        overlay.close_alert();
        assert!(!overlay.alert().visible);
        // Closing again must not panic or change anything else
        overlay.close_alert();
        assert!(!overlay.alert().visible);
        assert_eq!(overlay.alert().message, "saved");
    }

    #[test]
    fn test_alert_reshow_overwrites_content() {
        let mut overlay = ModalOverlay::new(Theme::default());
        overlay.show_alert("first", DialogCategory::Error);
        overlay.show_alert("second", DialogCategory::Warning);
        assert!(overlay.alert().visible);
        assert_eq!(overlay.alert().message, "second");
        assert_eq!(overlay.alert().category, DialogCategory::Warning);
    }

    #[test]
    fn test_confirm_resolves_true_and_false() {
        let mut overlay = ModalOverlay::new(Theme::default());

        let mut rx = overlay.show_confirm("Delete?");
        assert!(overlay.confirm().visible);
        assert_eq!(overlay.confirm().message, "Delete?");
        overlay.resolve_confirm(true);
        assert!(!overlay.confirm().visible);
        assert!(matches!(rx.try_recv(), Ok(true)));

        let mut rx = overlay.show_confirm("Delete?");
        overlay.resolve_confirm(false);
        assert!(matches!(rx.try_recv(), Ok(false)));
    }

    #[tokio::test]
    async fn test_confirm_outcome_awaitable() {
        let mut overlay = ModalOverlay::new(Theme::default());
        let rx = overlay.show_confirm("Proceed?");
        overlay.resolve_confirm(true);
        assert!(rx.await.unwrap());
    }

    #[test]
    fn test_overlapping_confirms_displace_first() {
        let mut overlay = ModalOverlay::new(Theme::default());

        let mut rx_a = overlay.show_confirm("A");
        let mut rx_b = overlay.show_confirm("B");
        assert_eq!(overlay.confirm().message, "B");
        assert_eq!(overlay.displaced.len(), 1);

        overlay.resolve_confirm(true);
        assert!(matches!(rx_b.try_recv(), Ok(true)));
        // The displaced caller stays pending forever: empty, not closed.
        assert!(matches!(rx_a.try_recv(), Err(TryRecvError::Empty)));

        // The one resolution consumed the slot; nothing further fires.
        overlay.resolve_confirm(false);
        assert!(matches!(rx_a.try_recv(), Err(TryRecvError::Empty)));
    }

    #[test]
    fn test_stray_resolve_is_noop() {
        let mut overlay = ModalOverlay::new(Theme::default());
        overlay.show_alert("hello", DialogCategory::Info);

        overlay.resolve_confirm(true);
        assert!(!overlay.confirm().visible);
        assert!(overlay.alert().visible);
    }

    #[test]
    fn test_duplicate_resolve_is_noop() {
        let mut overlay = ModalOverlay::new(Theme::default());
        let mut rx = overlay.show_confirm("once");
        overlay.resolve_confirm(false);
        overlay.resolve_confirm(true);
        assert!(matches!(rx.try_recv(), Ok(false)));
    }

    #[test]
    fn test_install_is_idempotent() {
        let ctx = egui::Context::default();
        let first = ModalOverlayHandle::install(&ctx);
        let second = ModalOverlayHandle::install(&ctx);
        assert!(Arc::ptr_eq(&first.inner, &second.inner));

        // State written through one handle is visible through the other
        first.show_alert("shared", DialogCategory::Info);
        assert!(second.read(|o| o.alert().visible));
    }
}
