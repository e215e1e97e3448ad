//! Demo application for the modal overlay.
//!
//! Exercises the whole surface: one alert per category, a free-form
//! category name (unrecognized names fall back to info), and a confirmation
//! whose eventual outcome is polled each frame and reported back through an
//! alert.
//!
//! ```bash
//! modal-overlay-demo
//! modal-overlay-demo --theme palette.json --log-level debug
//! ```

use clap::Parser;
use eframe::egui;
use tokio::sync::oneshot;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use modal_overlay::{DialogCategory, ModalOverlayHandle, Theme};

#[derive(Parser, Debug)]
#[command(name = "modal-overlay-demo")]
#[command(about = "Showcase for the modal overlay dialogs")]
#[command(version)]
struct Args {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Palette JSON file overriding the default colors
    #[arg(long)]
    theme: Option<std::path::PathBuf>,
}

struct DemoApp {
    theme: Option<Theme>,
    theme_applied: bool,
    category_name: String,
    pending_answer: Option<oneshot::Receiver<bool>>,
}

impl DemoApp {
    fn new(theme: Option<Theme>) -> Self {
        Self {
            theme,
            theme_applied: false,
            category_name: String::new(),
            pending_answer: None,
        }
    }
}

impl eframe::App for DemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let overlay = ModalOverlayHandle::install(ctx);

        if !self.theme_applied {
            if let Some(theme) = self.theme {
                overlay.set_theme(theme);
            }
            self.theme_applied = true;
        }

        // Poll the outstanding confirmation, if any
        if let Some(rx) = &mut self.pending_answer {
            match rx.try_recv() {
                Ok(true) => {
                    overlay.show_alert("Ação confirmada.", DialogCategory::Success);
                    self.pending_answer = None;
                }
                Ok(false) => {
                    overlay.show_alert("Ação cancelada.", DialogCategory::Error);
                    self.pending_answer = None;
                }
                Err(oneshot::error::TryRecvError::Empty) => {}
                Err(oneshot::error::TryRecvError::Closed) => {
                    self.pending_answer = None;
                }
            }
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Modal overlay demo");
            ui.add_space(12.0);

            ui.label("Alerts:");
            ui.horizontal(|ui| {
                if ui.button("Success").clicked() {
                    overlay.show_alert("Operação concluída com sucesso.", DialogCategory::Success);
                }
                if ui.button("Error").clicked() {
                    overlay.show_alert("Não foi possível concluir a operação.", DialogCategory::Error);
                }
                if ui.button("Warning").clicked() {
                    overlay.show_alert("Esta ação pode demorar alguns minutos.", DialogCategory::Warning);
                }
                if ui.button("Info").clicked() {
                    overlay.show_alert("Nenhuma atualização disponível.", DialogCategory::Info);
                }
            });

            ui.add_space(12.0);
            ui.label("Alert from a category name (unknown names fall back to info):");
            ui.horizontal(|ui| {
                ui.text_edit_singleline(&mut self.category_name);
                if ui.button("Show").clicked() {
                    let category = DialogCategory::from_name(&self.category_name);
                    overlay.show_alert(
                        format!("Categoria resolvida: {category:?}"),
                        category,
                    );
                }
            });

            ui.add_space(12.0);
            if ui.button("Apagar todos os dados…").clicked() {
                self.pending_answer =
                    Some(overlay.show_confirm("Apagar todos os dados? Esta ação não pode ser desfeita."));
            }
            if self.pending_answer.is_some() {
                ui.label("Aguardando resposta…");
            }
        });

        overlay.show(ctx);
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let theme = match &args.theme {
        Some(path) => Some(Theme::from_file(path)?),
        None => None,
    };

    info!("Starting modal overlay demo v{}", env!("CARGO_PKG_VERSION"));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([640.0, 420.0])
            .with_min_inner_size([480.0, 320.0])
            .with_title("Modal Overlay Demo"),
        ..Default::default()
    };

    if let Err(e) = eframe::run_native(
        "modal-overlay-demo",
        options,
        Box::new(move |_cc| Ok(Box::new(DemoApp::new(theme)))),
    ) {
        error!("GUI error: {}", e);
    }

    Ok(())
}
