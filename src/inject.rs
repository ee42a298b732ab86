//! Production `PageSurface` backed by synthetic keyboard input.
//!
//! Outside our own windows we cannot enumerate a foreign application's UI
//! tree, so this surface models exactly one element: the current caret
//! owner, assumed to be a single-line text field with an empty value and a
//! bare caret. Under that model the engine's selection splice degenerates
//! to "type the payload at the caret", which is what enigo does — and the
//! real application performs the actual splice, replacing any selection the
//! user had, exactly like a human typing over it.
//!
//! Rule-table scans see no elements here; when focus is not on anything we
//! can type into, the engine's clipboard fallback takes over.

use std::time::Duration;

use enigo::{Direction, Enigo, Key, Keyboard, Settings};

use crate::locator::element::{Element, ElementId, ElementKind, FieldSubtype};
use crate::locator::surface::{ChangeSignal, PageSurface, SurfaceError};
use crate::locator::InsertError;

/// Pause after focusing so the host application's own focus handling
/// settles before keystrokes arrive. Never cancelled once scheduled.
const SETTLE_DELAY: Duration = Duration::from_millis(100);

/// Handle id for the synthesized caret-owner element.
const CARET_OWNER: ElementId = ElementId(0);

pub struct SystemSurface {
    enigo: Enigo,
}

impl SystemSurface {
    /// Construct the keyboard injector. Fails when the environment cannot
    /// host synthetic input (no display server, missing permissions), which
    /// callers treat as an unreachable target.
    pub fn new() -> Result<Self, InsertError> {
        let enigo = Enigo::new(&Settings::default())
            .map_err(|e| InsertError::UnreachableTarget(e.to_string()))?;
        Ok(Self { enigo })
    }

    fn type_text(&mut self, text: &str) -> Result<(), SurfaceError> {
        self.enigo
            .text(text)
            .map_err(|e| SurfaceError::Synthesis(e.to_string()))
    }
}

impl PageSurface for SystemSurface {
    fn focused(&self) -> Option<Element> {
        // The caret owner as the engine sees it: an enabled, visible text
        // field with nothing in it. The host application owns the real
        // value and selection.
        Some(Element::new(
            CARET_OWNER,
            ElementKind::SingleLine(FieldSubtype::Unspecified),
        ))
    }

    fn elements(&self) -> Vec<Element> {
        Vec::new()
    }

    fn activate(&mut self, _id: ElementId) -> Result<(), SurfaceError> {
        // Focus already sits where the user left it once our popup hides;
        // a synthetic click could move it somewhere worse.
        Ok(())
    }

    fn focus(&mut self, _id: ElementId) -> Result<(), SurfaceError> {
        Ok(())
    }

    fn settle(&mut self) {
        std::thread::sleep(SETTLE_DELAY);
    }

    fn replace_content(&mut self, _id: ElementId, text: &str) -> Result<(), SurfaceError> {
        // Select-all then type, the keyboard equivalent of full replacement.
        self.enigo
            .key(Key::Control, Direction::Press)
            .map_err(|e| SurfaceError::Synthesis(e.to_string()))?;
        let select_all = self.enigo.key(Key::Unicode('a'), Direction::Click);
        // Always release the modifier, even if select-all failed.
        let release = self.enigo.key(Key::Control, Direction::Release);
        select_all.map_err(|e| SurfaceError::Synthesis(e.to_string()))?;
        release.map_err(|e| SurfaceError::Synthesis(e.to_string()))?;
        self.type_text(text)
    }

    fn write_value(&mut self, _id: ElementId, value: &str) -> Result<(), SurfaceError> {
        // The modeled value is empty, so the spliced value is the payload
        // itself; the host application splices it over any live selection.
        self.type_text(value)
    }

    fn write_value_native(&mut self, _id: ElementId, _value: &str) -> bool {
        // No property descriptor to bypass out here; the probe skips.
        false
    }

    fn set_caret(&mut self, _id: ElementId, _position: usize) -> Result<(), SurfaceError> {
        // The caret already trails the typed text.
        Ok(())
    }

    fn notify(&mut self, _id: ElementId, _signal: ChangeSignal) {
        // Real key events notify the host by themselves.
    }
}
