use crate::LearnApp;
use crate::ui::helpers::big_list_button;
use crate::ui::layout::simple_panel;
use egui::{Context, ScrollArea};

pub fn ui_home(app: &mut LearnApp, ctx: &Context) {
    simple_panel(ctx, 560.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading("Choose your course");
            ui.add_space(12.0);
        });

        let content_width = ui.available_width();
        let cards = app.level_cards();

        ScrollArea::vertical().show(ui, |ui| {
            ui.label(egui::RichText::new("Threshold courses").strong());
            ui.add_space(6.0);
            for card in cards.iter().filter(|c| !c.level.is_hsk()) {
                if big_list_button(ui, card.label(), content_width, 40.0, card.total > 0) {
                    app.select_level(card.level);
                    return;
                }
                ui.label(format!(
                    "{} — {}",
                    card.level.subtitle(),
                    card.level.description()
                ));
                ui.add_space(8.0);
            }

            ui.add_space(10.0);
            ui.label(egui::RichText::new("HSK preparation").strong());
            ui.add_space(6.0);
            for card in cards.iter().filter(|c| c.level.is_hsk()) {
                if big_list_button(ui, card.label(), content_width, 40.0, card.total > 0) {
                    app.select_level(card.level);
                    return;
                }
                ui.label(format!(
                    "{} — {}",
                    card.level.subtitle(),
                    card.level.description()
                ));
                ui.add_space(8.0);
            }
        });
    });
}
