#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    use mandarin_coach::LearnApp;

    dotenv::dotenv().ok();
    pretty_env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 680.0])
            .with_min_inner_size([480.0, 400.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Mandarin Coach",
        options,
        Box::new(|cc| {
            let mut app: LearnApp = cc
                .storage
                .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
                .unwrap_or_else(LearnApp::new);
            app.reload_runtime();
            Ok(Box::new(app))
        }),
    )
}

// The wasm build ships the library as a cdylib; the desktop binary has no
// browser counterpart.
#[cfg(target_arch = "wasm32")]
fn main() {}
