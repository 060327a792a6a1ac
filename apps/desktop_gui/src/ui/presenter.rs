//! Result presenter: shows either the last error or the last short URL, never both.

use client_core::{ShortenResult, SubmissionState};
use eframe::egui;

use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presentation<'a> {
    Nothing,
    Error(&'a str),
    Result(&'a ShortenResult),
}

impl<'a> Presentation<'a> {
    pub fn of(state: &'a SubmissionState) -> Self {
        match state {
            SubmissionState::Idle | SubmissionState::Pending => Presentation::Nothing,
            SubmissionState::Failed(message) => Presentation::Error(message),
            SubmissionState::Succeeded(result) => Presentation::Result(result),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresenterAction {
    Copy(String),
}

pub fn show(ui: &mut egui::Ui, presentation: Presentation<'_>) -> Option<PresenterAction> {
    match presentation {
        Presentation::Nothing => None,
        Presentation::Error(message) => {
            show_error_block(ui, message);
            None
        }
        Presentation::Result(result) => show_result_block(ui, result),
    }
}

fn show_error_block(ui: &mut egui::Ui, message: &str) {
    theme::error_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.add(egui::Label::new(egui::RichText::new(message).color(egui::Color32::WHITE)).wrap());
    });
}

fn show_result_block(ui: &mut egui::Ui, result: &ShortenResult) -> Option<PresenterAction> {
    let mut action = None;
    theme::card_frame(ui).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(egui::RichText::new("Your short URL").strong());
        ui.horizontal_wrapped(|ui| {
            ui.hyperlink_to(
                egui::RichText::new(&result.short_url).size(16.0),
                &result.short_url,
            );
            if ui.button("Copy").clicked() {
                action = Some(PresenterAction::Copy(result.short_url.clone()));
            }
        });
        ui.horizontal(|ui| {
            ui.weak("Code:");
            ui.label(egui::RichText::new(result.code.as_str()).strong());
        });
    });
    action
}

#[cfg(test)]
mod tests {
    use shared::domain::ShortCode;

    use super::*;

    #[test]
    fn idle_and_pending_show_nothing() {
        assert_eq!(Presentation::of(&SubmissionState::Idle), Presentation::Nothing);
        assert_eq!(Presentation::of(&SubmissionState::Pending), Presentation::Nothing);
    }

    #[test]
    fn failure_shows_message_verbatim() {
        let state = SubmissionState::Failed("Request failed (500)".to_string());
        assert_eq!(
            Presentation::of(&state),
            Presentation::Error("Request failed (500)")
        );
    }

    #[test]
    fn success_shows_result() {
        let state = SubmissionState::Succeeded(ShortenResult {
            code: ShortCode::new("abc123").expect("code"),
            short_url: "http://localhost:8000/abc123".to_string(),
        });
        match Presentation::of(&state) {
            Presentation::Result(result) => {
                assert_eq!(result.code.as_str(), "abc123");
                assert_eq!(result.short_url, "http://localhost:8000/abc123");
            }
            other => panic!("unexpected presentation: {other:?}"),
        }
    }
}
