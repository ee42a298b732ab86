//! Simple Tauri command handlers.
//!
//! Thin wrappers bridging popup invoke() calls to the store and clipboard.
//! The multi-step use-prompt flow lives in pipeline.rs instead.

use std::sync::Mutex;

use tauri::Manager;

use crate::clipboard::SystemClipboard;
use crate::locator::surface::ClipboardSink;
use crate::store::{Snippet, SnippetStore};
use crate::toast::{self, ToastKind, ToastPayload, ToastState};

/// The snippet store as Tauri managed state. All command access goes
/// through this mutex; the store itself persists on every mutation.
pub struct StoreState {
    pub store: Mutex<SnippetStore>,
}

impl StoreState {
    pub fn new(store: SnippetStore) -> Self {
        Self { store: Mutex::new(store) }
    }
}

/// Tauri command: the full prompt list, in collection order.
#[tauri::command]
pub fn list_prompts(state: tauri::State<'_, StoreState>) -> Result<Vec<Snippet>, String> {
    let store = state.store.lock().map_err(|e| e.to_string())?;
    Ok(store.all().to_vec())
}

/// Tauri command: case-insensitive substring filter over title and text.
#[tauri::command]
pub fn search_prompts(
    state: tauri::State<'_, StoreState>,
    query: String,
) -> Result<Vec<Snippet>, String> {
    let store = state.store.lock().map_err(|e| e.to_string())?;
    Ok(store.search(&query))
}

/// Tauri command: create a prompt, or edit one in place when `id` is set.
///
/// Validation failures come back as the message to show next to the
/// offending field.
#[tauri::command]
pub fn save_prompt(
    state: tauri::State<'_, StoreState>,
    id: Option<String>,
    title: String,
    text: String,
) -> Result<Snippet, String> {
    let mut store = state.store.lock().map_err(|e| e.to_string())?;
    let saved = match id {
        Some(id) => store.update(&id, &title, &text),
        None => store.add(&title, &text),
    };
    saved.map_err(|e| e.to_string())
}

/// Tauri command: delete a prompt. The popup confirms with the user first.
#[tauri::command]
pub fn delete_prompt(state: tauri::State<'_, StoreState>, id: String) -> Result<(), String> {
    let mut store = state.store.lock().map_err(|e| e.to_string())?;
    store.remove(&id).map(|_| ()).map_err(|e| e.to_string())
}

/// Tauri command: copy a prompt's text straight to the system clipboard.
#[tauri::command]
pub fn copy_prompt(
    app: tauri::AppHandle,
    state: tauri::State<'_, StoreState>,
    id: String,
) -> Result<(), String> {
    let text = {
        let store = state.store.lock().map_err(|e| e.to_string())?;
        store
            .get(&id)
            .map(|s| s.text.clone())
            .ok_or_else(|| format!("no prompt with id {id}"))?
    };

    let mut clipboard = SystemClipboard::new();
    match clipboard.write_text(&text) {
        Ok(()) => {
            log::info!("[CLIPBOARD] Copied {} chars to clipboard", text.len());
            toast::show(&app, ToastKind::Info, "Prompt copied to clipboard!");
            Ok(())
        }
        Err(e) => {
            toast::show(&app, ToastKind::Error, "Failed to copy prompt");
            Err(e)
        }
    }
}

/// Tauri command: the latest toast payload.
///
/// Polled by the toast window on load — an emit right after window
/// creation races webview startup.
#[tauri::command]
pub fn get_toast(state: tauri::State<'_, ToastState>) -> Result<ToastPayload, String> {
    let payload = state.payload.lock().map_err(|e| e.to_string())?;
    payload.clone().ok_or("No toast available".to_string())
}

/// Tauri command: hide the popup window (Escape, outside click).
///
/// Hidden, not closed, so the next tray click restores it instantly.
#[tauri::command]
pub fn close_popup(app: tauri::AppHandle) -> Result<(), String> {
    if let Some(window) = app.get_webview_window("popup") {
        window.hide().map_err(|e| e.to_string())?;
    }
    Ok(())
}

/// Tauri command: open (or focus) the popup window.
#[tauri::command]
pub fn open_popup(app: tauri::AppHandle) -> Result<(), String> {
    crate::show_popup(&app);
    Ok(())
}
