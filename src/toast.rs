//! Outcome toast — the transient notification banner.
//!
//! A small always-on-top webview window shows the delivery outcome and
//! removes itself after a fixed timeout. A toast raised mid-timeout
//! replaces the visible one (same window, new payload) rather than
//! stacking; the generation counter decides whether a scheduled dismiss
//! still owns the window.

use std::sync::Mutex;
use std::time::Duration;

use serde::Serialize;
use tauri::{AppHandle, Emitter, Manager};

/// Auto-dismiss timeout. One constant for both the window lifetime and the
/// frontend exit animation trigger.
pub const TOAST_TIMEOUT_MS: u64 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    Success,
    Info,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct ToastPayload {
    pub kind: ToastKind,
    pub message: String,
}

/// Monotonic counter: each shown toast takes a new generation, and a
/// dismiss only fires if its generation is still the latest.
#[derive(Default)]
pub struct ToastGenerations {
    current: Mutex<u64>,
}

impl ToastGenerations {
    pub fn begin(&self) -> u64 {
        let mut current = self.current.lock().unwrap();
        *current += 1;
        *current
    }

    pub fn is_current(&self, generation: u64) -> bool {
        *self.current.lock().unwrap() == generation
    }
}

/// Managed state: the latest payload (polled by the toast window on load,
/// which avoids racing the emit against webview startup) plus generations.
#[derive(Default)]
pub struct ToastState {
    pub payload: Mutex<Option<ToastPayload>>,
    pub generations: ToastGenerations,
}

impl ToastState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Show (or replace) the toast and schedule its dismissal.
pub fn show(app: &AppHandle, kind: ToastKind, message: impl Into<String>) {
    let payload = ToastPayload { kind, message: message.into() };
    log::info!("[TOAST] {:?}: {}", payload.kind, payload.message);

    let state = app.state::<ToastState>();
    let generation = state.generations.begin();
    *state.payload.lock().unwrap() = Some(payload.clone());

    match app.get_webview_window("toast") {
        Some(window) => {
            // Window already up: swap the payload in place.
            let _ = window.emit("toast-message", &payload);
            let _ = window.show();
        }
        None => {
            if let Err(e) = tauri::WebviewWindowBuilder::new(
                app,
                "toast",
                tauri::WebviewUrl::App("toast.html".into()),
            )
            .title("Prompt Dock")
            .inner_size(340.0, 56.0)
            .decorations(false)
            .transparent(true)
            .always_on_top(true)
            .skip_taskbar(true)
            .resizable(false)
            .center()
            .focused(false)
            .build()
            {
                log::error!("[TOAST] Failed to open toast window: {}", e);
                return;
            }
        }
    }

    let handle = app.clone();
    tauri::async_runtime::spawn(async move {
        tokio::time::sleep(Duration::from_millis(TOAST_TIMEOUT_MS)).await;
        let state = handle.state::<ToastState>();
        if !state.generations.is_current(generation) {
            // A newer toast took over the window; its own timer closes it.
            return;
        }
        if let Some(window) = handle.get_webview_window("toast") {
            let _ = window.close();
        }
    });
}
