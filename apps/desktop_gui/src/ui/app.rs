use std::time::Duration;

use client_core::ClientSettings;
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{err_label, UiEvent};
use crate::controller::orchestration::submit_form;
use crate::controller::reducer::{reduce, ShortenerModel};
use crate::ui::{
    clipboard::{copy_to_clipboard, SystemClipboard},
    presenter::{self, Presentation, PresenterAction},
    theme, widgets,
};

pub struct ShortenerApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    model: ShortenerModel,
    api_base: String,
    clipboard: SystemClipboard,
}

impl ShortenerApp {
    pub fn bootstrap(
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        settings: ClientSettings,
    ) -> Self {
        Self {
            cmd_tx,
            ui_rx,
            model: ShortenerModel::default(),
            api_base: settings.api_base,
            clipboard: SystemClipboard::default(),
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            reduce(&mut self.model, event);
        }
    }

    fn try_submit(&mut self) {
        submit_form(&mut self.model, &self.cmd_tx);
    }

    fn show_status_banner(&mut self, ui: &mut egui::Ui) {
        let Some(banner) = self.model.status_banner.clone() else {
            return;
        };
        theme::error_frame().show(ui, |ui| {
            ui.horizontal_wrapped(|ui| {
                ui.label(
                    egui::RichText::new(format!(
                        "{}: {}",
                        err_label(banner.category()),
                        banner.message()
                    ))
                    .color(egui::Color32::WHITE),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Dismiss").clicked() {
                        self.model.status_banner = None;
                    }
                });
            });
        });
        ui.add_space(8.0);
    }

    fn show_form(&mut self, ui: &mut egui::Ui) {
        let mut submit_requested = false;

        theme::card_frame(ui).show(ui, |ui| {
            ui.style_mut().spacing.item_spacing = egui::vec2(10.0, 8.0);

            let mut url_buf = self.model.form.url().to_string();
            let url_resp = widgets::labeled_text_field(
                ui,
                "shorten_long_url",
                "Long URL",
                "https://example.com/very/long/path",
                &mut url_buf,
            );
            if url_resp.changed() {
                self.model.form.set_url(url_buf);
            }
            submit_requested |= widgets::submitted_with_enter(ui, &url_resp);

            ui.add_space(4.0);
            ui.columns(2, |columns| {
                let mut ttl_buf = self.model.form.ttl_text().to_string();
                let ttl_resp = widgets::labeled_text_field(
                    &mut columns[0],
                    "shorten_ttl_seconds",
                    "TTL (seconds, optional)",
                    "3600",
                    &mut ttl_buf,
                );
                if ttl_resp.changed() {
                    self.model.form.set_ttl_text(ttl_buf);
                }
                submit_requested |= widgets::submitted_with_enter(&columns[0], &ttl_resp);

                columns[1].add_space(28.0);
                let mut dedupe = self.model.form.dedupe();
                if columns[1]
                    .checkbox(&mut dedupe, "Dedupe (same URL → same code)")
                    .changed()
                {
                    self.model.form.set_dedupe(dedupe);
                }
            });

            ui.add_space(6.0);
            let pending = self.model.submission.is_pending();
            let label = if pending { "Shortening..." } else { "Shorten URL" };
            let button = egui::Button::new(egui::RichText::new(label).strong().size(16.0))
                .fill(theme::ACCENT)
                .min_size(egui::vec2(ui.available_width(), 40.0));
            if ui.add_enabled(self.model.can_submit(), button).clicked() {
                submit_requested = true;
            }
        });

        if submit_requested {
            self.try_submit();
        }
    }

    fn show_output(&mut self, ui: &mut egui::Ui) {
        let presentation = Presentation::of(&self.model.submission);
        if presentation == Presentation::Nothing {
            return;
        }
        ui.add_space(14.0);
        if let Some(PresenterAction::Copy(text)) = presenter::show(ui, presentation) {
            copy_to_clipboard(&mut self.clipboard, &text);
        }
    }

    fn show_footer(&self, ui: &mut egui::Ui) {
        ui.add_space(24.0);
        ui.separator();
        ui.horizontal_wrapped(|ui| {
            ui.small("API:");
            ui.small(egui::RichText::new(&self.api_base).monospace());
        });
        ui.horizontal_wrapped(|ui| {
            ui.small("Status:");
            ui.small(egui::RichText::new(&self.model.status).weak());
        });
    }
}

impl eframe::App for ShortenerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .id_salt("shortener_scroll")
                .show(ui, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.set_max_width(720.0);
                        ui.add_space(24.0);
                        ui.heading("URL Shortener");
                        ui.weak("Paste a long URL and generate a short one.");
                    });
                    ui.add_space(16.0);
                    self.show_status_banner(ui);
                    self.show_form(ui);
                    self.show_output(ui);
                    self.show_footer(ui);
                });
        });

        if self.model.submission.is_pending() || !self.model.backend_ready {
            ctx.request_repaint_after(Duration::from_millis(50));
        } else {
            ctx.request_repaint_after(Duration::from_millis(500));
        }
    }
}
