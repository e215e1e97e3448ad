//! Overlay rendering with egui.
//!
//! Visible dialogs are drawn as centered foreground areas above a dimmed
//! backdrop. The backdrop claims clicks for the whole screen, and the dialog
//! areas sit on a higher layer, so clicks inside a dialog never reach the
//! layers beneath it. There is no click-outside dismissal; Escape and the
//! dialog buttons are the only ways out.

use egui::{
    Align2, Color32, CornerRadius, FontId, Id, Key, Margin, Order, RichText, Sense, Stroke, Vec2,
};

use crate::dialog::{CategoryConfig, DialogCategory, ModalOverlayHandle};
use crate::theme::Theme;

const DIALOG_WIDTH: f32 = 450.0;
const CONTENT_WIDTH: f32 = DIALOG_WIDTH - 48.0;
const BADGE_SIZE: f32 = 60.0;
const BUTTON_HEIGHT: f32 = 44.0;

const CONFIRM_TITLE: &str = "Confirmar ação";

impl ModalOverlayHandle {
    /// Render visible dialogs and process their interactions. Call once per
    /// frame, after the host's own UI.
    ///
    /// Escape is consumed only while a dialog is shown: it dismisses a
    /// visible alert and declines a visible confirmation.
    pub fn show(&self, ctx: &egui::Context) {
        let escape = ctx.input(|i| i.key_pressed(Key::Escape));
        let mut overlay = self.lock();

        if escape {
            if overlay.alert().visible {
                overlay.close_alert();
            }
            if overlay.confirm().visible {
                overlay.resolve_confirm(false);
            }
        }

        let alert_visible = overlay.alert().visible;
        let confirm_visible = overlay.confirm().visible;
        if !alert_visible && !confirm_visible {
            return;
        }

        let theme = *overlay.theme();
        paint_backdrop(ctx);

        if alert_visible {
            let config = overlay.alert().category.config(&theme);
            let message = overlay.alert().message.clone();
            if alert_window(ctx, &theme, config, &message) {
                overlay.close_alert();
            }
        }

        if confirm_visible {
            let message = overlay.confirm().message.clone();
            if let Some(result) = confirm_window(ctx, &theme, &message) {
                overlay.resolve_confirm(result);
            }
        }
    }
}

/// Dim the host UI and claim clicks for the whole screen.
fn paint_backdrop(ctx: &egui::Context) {
    let screen = ctx.screen_rect();
    egui::Area::new(Id::new("modal_backdrop"))
        .fixed_pos(screen.min)
        .order(Order::Middle)
        .show(ctx, |ui| {
            let (rect, _response) = ui.allocate_exact_size(screen.size(), Sense::click());
            ui.painter()
                .rect_filled(rect, CornerRadius::ZERO, Color32::from_black_alpha(140));
        });
}

/// Returns true when the alert was dismissed this frame.
fn alert_window(
    ctx: &egui::Context,
    theme: &Theme,
    config: CategoryConfig,
    message: &str,
) -> bool {
    let mut dismissed = false;
    egui::Area::new(Id::new("modal_alert"))
        .anchor(Align2::CENTER_CENTER, Vec2::ZERO)
        .order(Order::Foreground)
        .show(ctx, |ui| {
            dialog_frame(theme).show(ui, |ui| {
                ui.set_width(CONTENT_WIDTH);
                ui.vertical_centered(|ui| {
                    badge(ui, config.icon, config.gradient);
                    ui.add_space(12.0);
                    ui.label(
                        RichText::new(config.title)
                            .size(20.0)
                            .color(theme.fg_primary)
                            .strong(),
                    );
                    ui.add_space(6.0);
                    ui.label(RichText::new(message).size(14.0).color(theme.gray_600));
                    ui.add_space(20.0);
                    if ui
                        .add(primary_button("OK", theme).min_size(Vec2::new(
                            CONTENT_WIDTH,
                            BUTTON_HEIGHT,
                        )))
                        .clicked()
                    {
                        dismissed = true;
                    }
                });
            });
        });
    dismissed
}

/// Returns the chosen outcome when either button was clicked this frame.
fn confirm_window(ctx: &egui::Context, theme: &Theme, message: &str) -> Option<bool> {
    // Fixed chrome: the warning badge from the category table.
    let config = DialogCategory::Warning.config(theme);
    let mut outcome = None;

    egui::Area::new(Id::new("modal_confirm"))
        .anchor(Align2::CENTER_CENTER, Vec2::ZERO)
        .order(Order::Foreground)
        .show(ctx, |ui| {
            dialog_frame(theme).show(ui, |ui| {
                ui.set_width(CONTENT_WIDTH);
                ui.vertical_centered(|ui| {
                    badge(ui, config.icon, config.gradient);
                    ui.add_space(12.0);
                    ui.label(
                        RichText::new(CONFIRM_TITLE)
                            .size(20.0)
                            .color(theme.fg_primary)
                            .strong(),
                    );
                    ui.add_space(6.0);
                    ui.label(RichText::new(message).size(14.0).color(theme.gray_600));
                    ui.add_space(20.0);

                    let button_width = (CONTENT_WIDTH - 12.0) / 2.0;
                    ui.horizontal(|ui| {
                        ui.spacing_mut().item_spacing.x = 12.0;
                        if ui
                            .add(primary_button("Confirmar", theme)
                                .min_size(Vec2::new(button_width, BUTTON_HEIGHT)))
                            .clicked()
                        {
                            outcome = Some(true);
                        }
                        if ui
                            .add(secondary_button("Cancelar", theme)
                                .min_size(Vec2::new(button_width, BUTTON_HEIGHT)))
                            .clicked()
                        {
                            outcome = Some(false);
                        }
                    });
                });
            });
        });
    outcome
}

fn dialog_frame(theme: &Theme) -> egui::Frame {
    egui::Frame::new()
        .fill(theme.bg_primary)
        .stroke(Stroke::new(1.0, theme.border))
        .corner_radius(CornerRadius::same(12))
        .inner_margin(Margin::same(24))
}

/// Circular icon badge. The gradient pair paints as fill plus ring, start
/// and end stop respectively.
fn badge(ui: &mut egui::Ui, icon: &str, gradient: (Color32, Color32)) {
    let (rect, _response) = ui.allocate_exact_size(Vec2::splat(BADGE_SIZE), Sense::hover());
    let painter = ui.painter();
    let center = rect.center();
    painter.circle_filled(center, BADGE_SIZE / 2.0, gradient.0);
    painter.circle_stroke(center, BADGE_SIZE / 2.0 - 1.5, Stroke::new(3.0, gradient.1));
    painter.text(
        center,
        Align2::CENTER_CENTER,
        icon,
        FontId::proportional(26.0),
        Color32::WHITE,
    );
}

fn primary_button(label: &str, theme: &Theme) -> egui::Button<'static> {
    egui::Button::new(RichText::new(label).size(14.0).color(Color32::WHITE))
        .fill(theme.accent)
        .corner_radius(CornerRadius::same(8))
}

fn secondary_button(label: &str, theme: &Theme) -> egui::Button<'static> {
    egui::Button::new(RichText::new(label).size(14.0).color(theme.fg_primary))
        .fill(theme.bg_secondary)
        .stroke(Stroke::new(1.0, theme.border))
        .corner_radius(CornerRadius::same(8))
}
