//! The use-prompt pipeline: popup click → focus handoff → insertion → toast.
//!
//! One asynchronous round trip, no retry, no timeout. Keyboard synthesis
//! blocks, so the locator runs on a blocking thread, never on the event
//! loop. Every exit paints exactly one toast: success, clipboard fallback,
//! or failure — the operation never silently no-ops.

use tauri::Manager;

use crate::clipboard::SystemClipboard;
use crate::commands::StoreState;
use crate::inject::SystemSurface;
use crate::locator::{self, rules, DeliveryMethod, InsertError, InsertOutcome};
use crate::toast::{self, ToastKind};

/// Tauri command: deposit the chosen prompt into whatever the user was
/// typing in before opening the popup.
#[tauri::command]
pub async fn use_prompt(
    app: tauri::AppHandle,
    state: tauri::State<'_, StoreState>,
    id: String,
) -> Result<InsertOutcome, String> {
    let text = {
        let store = state.store.lock().map_err(|e| e.to_string())?;
        store
            .get(&id)
            .map(|s| s.text.clone())
            .ok_or_else(|| format!("no prompt with id {id}"))?
    };
    deliver_text(app, text).await
}

/// Run one delivery attempt and surface the outcome as a toast.
pub async fn deliver_text(app: tauri::AppHandle, text: String) -> Result<InsertOutcome, String> {
    if text.is_empty() {
        return Err("nothing to insert: empty text".to_string());
    }

    // Hand focus back to the target application before any keystroke goes
    // out. Hidden, not closed, so reopening from the tray is instant.
    if let Some(popup) = app.get_webview_window("popup") {
        let _ = popup.hide();
    }

    let result = tauri::async_runtime::spawn_blocking(move || {
        let mut clipboard = SystemClipboard::new();
        match SystemSurface::new() {
            Ok(mut surface) => locator::deliver(
                &mut surface,
                &mut clipboard,
                &rules::default_rules(),
                &text,
            ),
            Err(e) => {
                // Injector unavailable (no display server, missing input
                // permissions): the target is unreachable. Same recovery
                // as a failed insertion.
                log::warn!("[PIPELINE] {}", e);
                locator::copy_fallback(
                    &mut clipboard,
                    &text,
                    "input unavailable, copied to clipboard",
                )
            }
        }
    })
    .await
    .map_err(|e| e.to_string())?;

    match result {
        Ok(outcome) => {
            match outcome.method {
                DeliveryMethod::Inserted => {
                    toast::show(&app, ToastKind::Success, "Prompt pasted!")
                }
                DeliveryMethod::Clipboard => {
                    toast::show(&app, ToastKind::Info, "Prompt copied to clipboard!")
                }
            }
            Ok(outcome)
        }
        Err(e) => {
            // The only error that escapes the locator is a rejected
            // clipboard write; everything else was already recovered.
            debug_assert!(matches!(e, InsertError::ClipboardDenied(_)));
            log::error!("[PIPELINE] Delivery failed: {}", e);
            toast::show(&app, ToastKind::Error, "Failed to paste or copy prompt");
            Err(e.to_string())
        }
    }
}
