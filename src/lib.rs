//! Prompt Dock — Tauri application entry point.
//!
//! This is the app shell that wires together all domains and commands.
//! No business logic lives here — only module declarations, plugin
//! registration, state management, and the command registry.
//!
//! Commands are split across:
//!   - commands.rs — simple one-step commands (store CRUD, clipboard, windows)
//!   - pipeline.rs — the multi-step use-prompt flow (locate, insert, toast)

mod clipboard;
mod commands;
mod inject;
pub mod locator;
mod pipeline;
pub mod store;
pub mod toast;
mod tray;

use tauri::Manager;

/// Entry point — called by the Tauri runtime.
#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    env_logger::init();

    tauri::Builder::default()
        .plugin(tauri_plugin_dialog::init())
        .manage(commands::StoreState::new(store::SnippetStore::load(
            store::default_path(),
        )))
        .manage(toast::ToastState::new())
        .invoke_handler(tauri::generate_handler![
            // Simple commands (commands.rs)
            commands::list_prompts,
            commands::search_prompts,
            commands::save_prompt,
            commands::delete_prompt,
            commands::copy_prompt,
            commands::get_toast,
            commands::close_popup,
            commands::open_popup,
            // Pipeline command (pipeline.rs)
            pipeline::use_prompt,
        ])
        .setup(|app| {
            log::info!("Prompt Dock starting up");
            tray::setup_tray(app.handle())?;
            log::info!("System tray initialized — prompts ready");
            Ok(())
        })
        .build(tauri::generate_context!())
        .expect("Error running Prompt Dock")
        .run(|_app, event| {
            // Tray app: stay alive when the last window goes away. Only an
            // explicit exit (tray Quit) carries an exit code.
            if let tauri::RunEvent::ExitRequested { code: None, api, .. } = event {
                api.prevent_exit();
            }
        });
}

/// Open (or focus) the prompt library popup.
pub(crate) fn show_popup(app: &tauri::AppHandle) {
    if let Some(window) = app.get_webview_window("popup") {
        let _ = window.show();
        let _ = window.set_focus();
        return;
    }
    match tauri::WebviewWindowBuilder::new(
        app,
        "popup",
        tauri::WebviewUrl::App("popup.html".into()),
    )
    .title("Prompt Dock")
    .inner_size(420.0, 560.0)
    .resizable(false)
    .always_on_top(true)
    .skip_taskbar(true)
    .center()
    .build()
    {
        Ok(_) => log::info!("[POPUP] Window opened"),
        Err(e) => log::error!("[POPUP] Failed to open: {}", e),
    }
}
