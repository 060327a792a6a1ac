use eframe::egui;

pub const ERROR_FILL: egui::Color32 = egui::Color32::from_rgb(111, 53, 53);
pub const ERROR_STROKE: egui::Color32 = egui::Color32::from_rgb(175, 96, 96);
pub const ACCENT: egui::Color32 = egui::Color32::from_rgb(88, 101, 242);

pub fn lighten_color(c: egui::Color32, t: f32) -> egui::Color32 {
    let t = t.clamp(0.0, 1.0);
    let mix = |channel: u8| -> u8 {
        let channel = channel as f32;
        (channel + (255.0 - channel) * t).round().clamp(0.0, 255.0) as u8
    };
    egui::Color32::from_rgba_unmultiplied(mix(c.r()), mix(c.g()), mix(c.b()), c.a())
}

/// Outer frame for the form and result cards.
pub fn card_frame(ui: &egui::Ui) -> egui::Frame {
    egui::Frame::NONE
        .fill(lighten_color(ui.visuals().panel_fill, 0.04))
        .corner_radius(14.0)
        .stroke(egui::Stroke::new(
            1.0,
            ui.visuals().widgets.noninteractive.bg_stroke.color,
        ))
        .inner_margin(egui::Margin::symmetric(20, 18))
}

pub fn error_frame() -> egui::Frame {
    egui::Frame::NONE
        .fill(ERROR_FILL)
        .stroke(egui::Stroke::new(1.0, ERROR_STROKE))
        .corner_radius(8.0)
        .inner_margin(egui::Margin::symmetric(10, 8))
}

#[cfg(test)]
mod tests {
    use super::lighten_color;
    use eframe::egui::Color32;

    #[test]
    fn lighten_moves_channels_towards_white() {
        let c = lighten_color(Color32::from_rgb(0, 100, 255), 0.5);
        assert_eq!((c.r(), c.g(), c.b()), (128, 178, 255));
        assert_eq!(lighten_color(Color32::from_rgb(10, 20, 30), 0.0), Color32::from_rgb(10, 20, 30));
    }
}
