//! System tray setup and click handler.
//!
//! The tray icon is the primary entry point for Prompt Dock.
//! Clicking it opens the prompt library popup.

use tauri::{
    image::Image as TauriImage,
    menu::{MenuBuilder, MenuItemBuilder},
    tray::TrayIconBuilder,
    AppHandle,
};

/// Sets up the system tray icon with a click handler.
///
/// Left-click: opens the prompt library popup.
/// Right-click: context menu with Open and Quit.
pub fn setup_tray(app: &AppHandle) -> Result<(), Box<dyn std::error::Error>> {
    let open_item = MenuItemBuilder::with_id("open", "Open Prompt Library").build(app)?;
    let quit_item = MenuItemBuilder::with_id("quit", "Quit Prompt Dock").build(app)?;
    let menu = MenuBuilder::new(app)
        .item(&open_item)
        .item(&quit_item)
        .build()?;

    // Decode the PNG icon to RGBA for Tauri's Image type
    let icon_bytes = include_bytes!("../icons/32x32.png");
    let icon_img = image::load_from_memory(icon_bytes)
        .map_err(|e| format!("Failed to decode tray icon: {}", e))?;
    let rgba = icon_img.to_rgba8();
    let (w, h) = (rgba.width(), rgba.height());
    let tray_icon = TauriImage::new_owned(rgba.into_raw(), w, h);

    let _tray = TrayIconBuilder::new()
        .icon(tray_icon)
        .tooltip("Prompt Dock — Click to open your prompts")
        .menu(&menu)
        .show_menu_on_left_click(false)
        .on_tray_icon_event(|tray_icon, event| {
            if let tauri::tray::TrayIconEvent::Click {
                button: tauri::tray::MouseButton::Left,
                ..
            } = event
            {
                log::info!("[TRAY] Left click — opening popup");
                crate::show_popup(tray_icon.app_handle());
            }
        })
        .on_menu_event(|app, event| {
            if event.id() == "open" {
                crate::show_popup(app);
            } else if event.id() == "quit" {
                log::info!("Quit requested from tray menu");
                app.exit(0);
            }
        })
        .build(app)?;

    Ok(())
}
