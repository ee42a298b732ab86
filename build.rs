//! Build script for the Prompt Dock Tauri app.

fn main() {
    tauri_build::build();
}
