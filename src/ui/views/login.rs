use crate::LearnApp;
use crate::ui::layout::centered_panel;
use egui::{Button, Color32, Context, RichText, TextEdit};

pub fn ui_login(app: &mut LearnApp, ctx: &Context) {
    centered_panel(ctx, 260.0, 380.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading("Mandarin Coach");
            ui.label("Sign in to continue learning");
            ui.add_space(18.0);

            ui.add(
                TextEdit::singleline(&mut app.login_email)
                    .hint_text("Email")
                    .desired_width(f32::INFINITY),
            );
            ui.add_space(6.0);
            let password = ui.add(
                TextEdit::singleline(&mut app.login_password)
                    .hint_text("Password")
                    .password(true)
                    .desired_width(f32::INFINITY),
            );
            ui.add_space(12.0);

            let submitted = password.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            if ui
                .add_sized([ui.available_width(), 36.0], Button::new("Sign in"))
                .clicked()
                || submitted
            {
                app.try_login();
            }

            if !app.message.is_empty() {
                ui.add_space(10.0);
                ui.label(RichText::new(&app.message).color(Color32::LIGHT_RED));
            }
        });
    });
}
